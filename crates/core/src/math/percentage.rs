//! Percentage calculation over decimal amounts.

use rust_decimal::Decimal;

use tally_shared::rounding;

/// Returns which percentage of `whole` the given `part` represents.
///
/// The result is rounded to two decimal places with Banker's Rounding. A
/// zero `whole` yields zero rather than a division error.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::math::calculate_percentage;
///
/// assert_eq!(calculate_percentage(dec!(33.33), dec!(7.77)), dec!(23.31));
/// ```
#[must_use]
pub fn calculate_percentage(whole: Decimal, part: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }

    rounding::half_even(part * Decimal::ONE_HUNDRED / whole, 2)
}
