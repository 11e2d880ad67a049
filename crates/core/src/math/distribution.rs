//! Proportional distribution of an amount across weighted shares.
//!
//! Apportions a target amount across a collection of [`Share`]s in
//! proportion to each share's weight, then redistributes the rounding
//! remainder according to a [`RemainderMode`]. The result is a pure
//! [`Allocation`] mapping each input share (by position) to its allotment;
//! the inputs are never mutated.
//!
//! All arithmetic is exact decimal. The per-unit ratio is rounded once,
//! down, at the point of division; the multiplied allotment uses Banker's
//! Rounding. This avoids systematic bias and periodic-decimal truncation
//! errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tally_shared::rounding;

use super::share::Share;

/// Scale of distributed amounts (currency cents).
const SCALE: u32 = 2;

/// Policy governing redistribution of the rounding remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderMode {
    /// Absorb the remainder into the first share that can take it,
    /// regardless of whether the remainder divides evenly by its quantity.
    IgnoringQuantity,
    /// Never redistribute; the remainder flows through to the result.
    StrictlyProportional,
    /// Absorb the remainder only into shares whose quantity divides it
    /// evenly (in cents); otherwise it flows through to the result.
    #[default]
    Unevenly,
}

/// A prepared distribution: target amount plus remainder policy.
///
/// Immutable once constructed; each [`over`](Distributor::over) call is
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distributor {
    amount: Decimal,
    mode: RemainderMode,
}

/// Prepares a distribution of `amount` using the default
/// [`RemainderMode::Unevenly`] policy.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::math::{distribute, Share};
///
/// let shares = [Share::new(dec!(2), dec!(10)), Share::new(dec!(8), dec!(10))];
/// let allocation = distribute(dec!(10)).over(&shares);
///
/// assert_eq!(allocation.allotments(), [dec!(2.00), dec!(8.00)]);
/// assert_eq!(allocation.remainder(), dec!(0.00));
/// ```
#[must_use]
pub fn distribute(amount: Decimal) -> Distributor {
    Distributor::new(amount)
}

impl Distributor {
    /// Creates a distributor for `amount` with the default remainder policy.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            mode: RemainderMode::default(),
        }
    }

    /// Replaces the remainder policy.
    #[must_use]
    pub fn with_mode(mut self, mode: RemainderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Apportions the amount across `shares` and returns the allocation.
    ///
    /// Shares are processed in descending `value` order (insertion order
    /// preserved among equal values), which determines who absorbs the
    /// remainder first. The returned allotments are aligned with the input
    /// order.
    ///
    /// A zero total weight or an empty collection is valid: the result is
    /// the empty allocation with a zero remainder.
    #[must_use]
    pub fn over(&self, shares: &[Share]) -> Allocation {
        let total: Decimal = shares.iter().map(Share::weight).sum();

        if total.is_zero() {
            return Allocation::empty();
        }

        let mut order: Vec<usize> = (0..shares.len()).collect();
        order.sort_by(|&a, &b| shares[b].value.cmp(&shares[a].value));

        let mut allotments = vec![Decimal::ZERO; shares.len()];
        let mut total_allotted = Decimal::ZERO;

        for &i in &order {
            let share = &shares[i];
            let ratio = rounding::floor(self.amount * share.value / total, SCALE);
            let allotment = rounding::half_even(ratio * share.quantity, SCALE);

            allotments[i] = allotment;
            total_allotted += allotment;
        }

        let mut remainder = self.amount - total_allotted;

        if self.mode != RemainderMode::StrictlyProportional {
            for &i in &order {
                if remainder.is_zero() {
                    break;
                }

                let share = &shares[i];

                if self.mode != RemainderMode::IgnoringQuantity
                    && !is_divisible_by_quantity(remainder, share.quantity)
                {
                    continue;
                }

                let subtotal = share.weight();
                let available = subtotal - allotments[i];

                if available > Decimal::ZERO && remainder > available {
                    // Top up to the full subtotal; the excess carries on.
                    allotments[i] = subtotal;
                    remainder -= available;
                } else {
                    allotments[i] += remainder;
                    remainder = Decimal::ZERO;
                }
            }
        }

        Allocation {
            allotments,
            remainder,
        }
    }
}

/// Tests whether a remainder divides evenly by a share's quantity.
///
/// The remainder is taken in cents, so divisibility means the extra cents
/// can be spread across `quantity` units without creating sub-cent values.
fn is_divisible_by_quantity(remainder: Decimal, quantity: Decimal) -> bool {
    if quantity.is_zero() || remainder.is_zero() {
        return false;
    }

    ((remainder * Decimal::ONE_HUNDRED) % quantity).is_zero()
}

/// The result of a distribution: one allotment per input share plus the
/// undistributed remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    allotments: Vec<Decimal>,
    remainder: Decimal,
}

impl Allocation {
    /// The allocation of a distribution that could not take place (zero
    /// total weight): no allotments, zero remainder.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            allotments: Vec::new(),
            remainder: Decimal::ZERO,
        }
    }

    /// Allotments aligned with the input share order.
    ///
    /// Empty when the distribution did not take place.
    #[must_use]
    pub fn allotments(&self) -> &[Decimal] {
        &self.allotments
    }

    /// The amount left undistributed.
    ///
    /// Zero except under [`RemainderMode::StrictlyProportional`] or when no
    /// share could fully absorb it.
    #[must_use]
    pub fn remainder(&self) -> Decimal {
        self.remainder
    }

    /// Sum of all allotments.
    #[must_use]
    pub fn distributed_total(&self) -> Decimal {
        self.allotments.iter().copied().sum()
    }

    /// True when no allotments were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allotments.is_empty()
    }
}
