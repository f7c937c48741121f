use inheritance::{Genders, InheritanceModel, RARITY_FLOOR};
use proptest::prelude::*;

fn genders() -> impl Strategy<Value = Genders> {
    prop_oneof![Just(Genders::Single), Just(Genders::Both)]
}

proptest! {
    #[test]
    fn success_is_a_probability(
        counterparty in 40.0..220.0f64,
        kids         in 0u32..20,
        target       in 40.0..220.0f64,
        genders      in genders(),
    ) {
        let p = InheritanceModel::default().family_success_probability(counterparty, kids, target, genders);
        prop_assert!((0.0..=1.0).contains(&p), "{p}");
    }

    #[test]
    fn zero_kids_is_zero(
        counterparty in -1000.0..1000.0f64,
        target       in -1000.0..1000.0f64,
        genders      in genders(),
    ) {
        prop_assert_eq!(InheritanceModel::default().family_success_probability(counterparty, 0, target, genders), 0.0);
    }

    #[test]
    fn more_kids_never_hurt(
        counterparty in 40.0..220.0f64,
        kids         in 0u32..20,
        target       in 40.0..220.0f64,
        genders      in genders(),
    ) {
        let model = InheritanceModel::default();
        let fewer = model.family_success_probability(counterparty, kids, target, genders);
        let more  = model.family_success_probability(counterparty, kids + 1, target, genders);
        prop_assert!(more >= fewer - 1e-15, "{kids} kids: {fewer} > {more}");
    }

    #[test]
    fn lower_targets_never_hurt(
        counterparty in 40.0..220.0f64,
        kids         in 0u32..20,
        target       in 40.0..220.0f64,
        delta        in 0.0..50.0f64,
        genders      in genders(),
    ) {
        let model = InheritanceModel::default();
        let high = model.family_success_probability(counterparty, kids, target, genders);
        let low  = model.family_success_probability(counterparty, kids, target - delta, genders);
        prop_assert!(low >= high - 1e-12, "target {target} - {delta}: {low} < {high}");
    }

    #[test]
    fn single_gender_halves_the_tail(
        counterparty in -500.0..500.0f64,
        target       in -500.0..500.0f64,
    ) {
        let model  = InheritanceModel::default();
        let single = model.per_child_failure_probability(counterparty, target, Genders::Single);
        let both   = model.per_child_failure_probability(counterparty, target, Genders::Both);
        prop_assert_eq!(single, 0.5 + 0.5 * both);
    }

    #[test]
    fn invalid_gender_counts_fall_back_to_single(
        count        in any::<i64>().prop_filter("valid count", |c| *c != 1 && *c != 2),
        counterparty in 40.0..220.0f64,
        kids         in 0u32..20,
        target       in 40.0..220.0f64,
    ) {
        let model = InheritanceModel::default();
        prop_assert!(Genders::try_from(count).is_err());
        prop_assert_eq!(
            model.family_success_probability(counterparty, kids, target, Genders::from_count_lossy(count)),
            model.family_success_probability(counterparty, kids, target, Genders::Single)
        );
    }

    #[test]
    fn rarity_weighting_is_bounded_by_the_floor(
        counterparty in 40.0..220.0f64,
        kids         in 0.0..10.0f64,
        target       in 40.0..220.0f64,
    ) {
        let model    = InheritanceModel::default();
        let family   = model.family_success_probability(counterparty, kids, target, Genders::Both);
        let weighted = model.rarity_weighted_probability(counterparty, kids, target);
        prop_assert!(weighted >= RARITY_FLOOR * family - 1e-12);
        prop_assert!(weighted <= (1.0 + RARITY_FLOOR) * family + 1e-12);
    }
}
