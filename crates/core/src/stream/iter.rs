//! Iterator adapters over decimal values.

use rust_decimal::Decimal;

use super::summary::DecimalSummary;

/// Reduction shortcuts for iterators of `Decimal`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tally_core::stream::DecimalIteratorExt;
///
/// let average = [dec!(1), dec!(10)].into_iter().average_decimal();
/// assert_eq!(average, Some(dec!(5.5)));
/// ```
pub trait DecimalIteratorExt: Iterator<Item = Decimal> + Sized {
    /// Accumulates the iterator into a [`DecimalSummary`].
    fn decimal_summary(self) -> DecimalSummary {
        self.collect()
    }

    /// Sums the iterator; zero when empty.
    fn sum_decimal(self) -> Decimal {
        self.decimal_summary().sum()
    }

    /// Averages the iterator; `None` when empty.
    fn average_decimal(self) -> Option<Decimal> {
        self.decimal_summary().average()
    }
}

impl<I: Iterator<Item = Decimal> + Sized> DecimalIteratorExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        assert_eq!(std::iter::empty().sum_decimal(), Decimal::ZERO);
    }

    #[test]
    fn test_average_of_empty_iterator_is_none() {
        assert_eq!(std::iter::empty().average_decimal(), None);
    }

    #[test]
    fn test_sum_decimal() {
        let result = [Decimal::ONE, Decimal::TEN].into_iter().sum_decimal();
        assert_eq!(result, dec!(11));
    }

    #[test]
    fn test_summary_over_mapped_values() {
        // Mapping happens upstream, like any other iterator chain.
        let summary = [(1, dec!(2.50)), (3, dec!(1.00))]
            .into_iter()
            .map(|(quantity, price)| Decimal::from(quantity) * price)
            .decimal_summary();

        assert_eq!(summary.sum(), dec!(5.50));
        assert_eq!(summary.count(), 2);
    }
}
