//! Property-based tests for the distribution engine.
//!
//! - Conservation: allotments plus remainder account for the whole amount
//! - Zero total weight: nothing happens
//! - Mode ordering: redistribution never increases the remainder

use proptest::prelude::*;
use rust_decimal::Decimal;

use tally_shared::rounding;

use super::distribution::{distribute, RemainderMode};
use super::share::Share;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a share with positive quantity and value.
fn positive_share() -> impl Strategy<Value = Share> {
    ((1i64..1_000i64), (1i64..100_000_000i64))
        .prop_map(|(quantity, cents)| Share::new(Decimal::from(quantity), Decimal::new(cents, 2)))
}

/// Strategy to generate 1 to 20 positive shares.
fn positive_shares() -> impl Strategy<Value = Vec<Share>> {
    prop::collection::vec(positive_share(), 1..20)
}

fn mode() -> impl Strategy<Value = RemainderMode> {
    prop_oneof![
        Just(RemainderMode::IgnoringQuantity),
        Just(RemainderMode::StrictlyProportional),
        Just(RemainderMode::Unevenly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* shares with positive total weight and any mode, the sum of
    /// allotments plus the returned remainder equals the input amount.
    #[test]
    fn prop_conservation(
        amount in positive_amount(),
        shares in positive_shares(),
        mode in mode(),
    ) {
        let allocation = distribute(amount).with_mode(mode).over(&shares);

        prop_assert_eq!(
            allocation.distributed_total() + allocation.remainder(),
            amount,
            "allotments + remainder must equal the amount"
        );
    }

    /// *For any* shares, the allocation carries one allotment per share.
    #[test]
    fn prop_one_allotment_per_share(
        amount in positive_amount(),
        shares in positive_shares(),
        mode in mode(),
    ) {
        let allocation = distribute(amount).with_mode(mode).over(&shares);
        prop_assert_eq!(allocation.allotments().len(), shares.len());
    }

    /// *For any* inputs, distribution is deterministic.
    #[test]
    fn prop_deterministic(
        amount in positive_amount(),
        shares in positive_shares(),
        mode in mode(),
    ) {
        let first = distribute(amount).with_mode(mode).over(&shares);
        let second = distribute(amount).with_mode(mode).over(&shares);
        prop_assert_eq!(first, second);
    }

    /// *For any* collection whose total weight is zero, the result is the
    /// empty allocation with a zero remainder.
    #[test]
    fn prop_zero_total_weight_is_a_no_op(
        amount in positive_amount(),
        values in prop::collection::vec(1i64..100_000i64, 1..10),
    ) {
        // Quantity zero everywhere forces a zero total weight.
        let shares: Vec<Share> = values
            .into_iter()
            .map(|v| Share::new(Decimal::ZERO, Decimal::from(v)))
            .collect();

        let allocation = distribute(amount).over(&shares);

        prop_assert!(allocation.is_empty());
        prop_assert_eq!(allocation.remainder(), Decimal::ZERO);
    }

    /// *For any* inputs, the strictly proportional allotment of each share
    /// matches the closed-form per-share formula, and the remainder is the
    /// amount minus their sum.
    #[test]
    fn prop_strictly_proportional_matches_formula(
        amount in positive_amount(),
        shares in positive_shares(),
    ) {
        let total: Decimal = shares.iter().map(Share::weight).sum();
        let allocation = distribute(amount)
            .with_mode(RemainderMode::StrictlyProportional)
            .over(&shares);

        for (share, allotment) in shares.iter().zip(allocation.allotments()) {
            let ratio = rounding::floor(amount * share.value / total, 2);
            let expected = rounding::half_even(ratio * share.quantity, 2);
            prop_assert_eq!(*allotment, expected);
        }

        prop_assert_eq!(
            allocation.remainder(),
            amount - allocation.distributed_total()
        );
    }

    /// *For any* inputs, redistribution only ever shrinks the remainder:
    /// the strictly proportional remainder bounds the other modes.
    #[test]
    fn prop_redistribution_never_increases_remainder(
        amount in positive_amount(),
        shares in positive_shares(),
    ) {
        let strict = distribute(amount)
            .with_mode(RemainderMode::StrictlyProportional)
            .over(&shares);
        let uneven = distribute(amount)
            .with_mode(RemainderMode::Unevenly)
            .over(&shares);
        let ignoring = distribute(amount)
            .with_mode(RemainderMode::IgnoringQuantity)
            .over(&shares);

        prop_assert!(uneven.remainder() <= strict.remainder());
        prop_assert!(ignoring.remainder() <= strict.remainder());
    }

    /// *For any* amount no greater than the total weight, ignoring quantity
    /// leaves nothing undistributed.
    #[test]
    fn prop_ignoring_quantity_absorbs_fully_within_capacity(
        amount in positive_amount(),
        shares in positive_shares(),
    ) {
        let total: Decimal = shares.iter().map(Share::weight).sum();
        prop_assume!(amount <= total);

        let allocation = distribute(amount)
            .with_mode(RemainderMode::IgnoringQuantity)
            .over(&shares);

        prop_assert_eq!(allocation.remainder(), Decimal::ZERO);
    }
}
