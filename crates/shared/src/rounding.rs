//! Decimal rounding helpers with explicit strategies.
//!
//! Every division or scale change in the workspace goes through one of these
//! helpers so the strategy is always spelled out at the call site. Banker's
//! Rounding (`MidpointNearestEven`) is the default for money amounts:
//! - 2.5 rounds to 2 (nearest even)
//! - 3.5 rounds to 4 (nearest even)

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to `decimal_places` using Banker's Rounding.
#[must_use]
pub fn half_even(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Rounds a value toward negative infinity at `decimal_places`.
///
/// Used for per-unit ratios in pro-rata distribution, where rounding down
/// keeps the allotted total from overshooting the amount.
#[must_use]
pub fn floor(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::ToNegativeInfinity)
}

/// Rounds a value to `decimal_places` with an explicit strategy.
///
/// For callers that take the strategy as a parameter, e.g. the scaled
/// finishers on decimal summaries.
#[must_use]
pub fn round(value: Decimal, decimal_places: u32, strategy: RoundingStrategy) -> Decimal {
    value.round_dp_with_strategy(decimal_places, strategy)
}
