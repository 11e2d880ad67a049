//! A share of a distributed whole.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit claiming part of a distributed total.
///
/// A `Share` is weighted by `quantity * value` (e.g. number of installments
/// times unit price). The sum of all weights in a collection determines each
/// share's proportional claim on the distributed amount.
///
/// Shares are plain inputs: distribution never mutates them and hands the
/// computed allotments back as a separate [`Allocation`](super::Allocation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    /// Decimal count (e.g. number of installments, units).
    pub quantity: Decimal,
    /// Decimal unit value.
    pub value: Decimal,
}

impl Share {
    /// Creates a new share with the given quantity and unit value.
    #[must_use]
    pub const fn new(quantity: Decimal, value: Decimal) -> Self {
        Self { quantity, value }
    }

    /// The proportional weight of this share (`quantity * value`).
    ///
    /// Also the most this share can receive when absorbing remainders.
    #[must_use]
    pub fn weight(&self) -> Decimal {
        self.quantity * self.value
    }
}
