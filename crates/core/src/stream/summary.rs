//! Running sum and count over decimal values.

use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelIterator};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use tally_shared::rounding;

/// Accumulates a count and a sum of `Decimal` values.
///
/// Merging is associative, so summaries built over disjoint chunks of a
/// collection combine into the same result regardless of split or order.
/// That makes the type safe to use as a parallel reduction identity.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::stream::DecimalSummary;
///
/// let summary: DecimalSummary = [dec!(1), dec!(10)].into_iter().collect();
///
/// assert_eq!(summary.sum(), dec!(11));
/// assert_eq!(summary.average(), Some(dec!(5.5)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalSummary {
    count: u64,
    sum: Decimal,
}

impl DecimalSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            sum: Decimal::ZERO,
        }
    }

    /// Adds one value to the summary.
    pub fn add(&mut self, amount: Decimal) {
        self.count += 1;
        self.sum += amount;
    }

    /// Combines two summaries. Associative.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            sum: self.sum + other.sum,
        }
    }

    /// Number of accumulated values.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Sum of accumulated values.
    #[must_use]
    pub const fn sum(&self) -> Decimal {
        self.sum
    }

    /// True when nothing has been accumulated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Average of the accumulated values, or `None` when empty.
    ///
    /// Periodic decimals (e.g. 7 / 3) keep the full precision the decimal
    /// type supports; use [`average_dp`](Self::average_dp) to round.
    #[must_use]
    pub fn average(&self) -> Option<Decimal> {
        if self.count == 0 {
            return None;
        }

        Some(self.sum / Decimal::from(self.count))
    }

    /// Average rounded to `decimal_places` with Banker's Rounding, or
    /// `None` when empty.
    #[must_use]
    pub fn average_dp(&self, decimal_places: u32) -> Option<Decimal> {
        self.average()
            .map(|average| rounding::half_even(average, decimal_places))
    }

    /// Average rounded to `decimal_places` with an explicit strategy, or
    /// `None` when empty.
    #[must_use]
    pub fn average_with(&self, decimal_places: u32, strategy: RoundingStrategy) -> Option<Decimal> {
        self.average()
            .map(|average| rounding::round(average, decimal_places, strategy))
    }

    /// Sum rounded to `decimal_places` with an explicit strategy.
    ///
    /// Rounding happens only here, at the finish step; accumulation itself
    /// stays exact.
    #[must_use]
    pub fn sum_with(&self, decimal_places: u32, strategy: RoundingStrategy) -> Decimal {
        rounding::round(self.sum, decimal_places, strategy)
    }
}

impl std::iter::Sum<Decimal> for DecimalSummary {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Self {
        iter.collect()
    }
}

impl FromIterator<Decimal> for DecimalSummary {
    fn from_iter<I: IntoIterator<Item = Decimal>>(iter: I) -> Self {
        let mut summary = Self::new();
        for amount in iter {
            summary.add(amount);
        }
        summary
    }
}

impl FromParallelIterator<Decimal> for DecimalSummary {
    fn from_par_iter<I>(par_iter: I) -> Self
    where
        I: IntoParallelIterator<Item = Decimal>,
    {
        par_iter
            .into_par_iter()
            .fold(Self::new, |mut summary, amount| {
                summary.add(amount);
                summary
            })
            .reduce(Self::new, Self::merge)
    }
}
