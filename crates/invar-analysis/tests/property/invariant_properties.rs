use invar_analysis::confidence::{BetaPosterior, ConfidenceModel, SaturatingRamp};
use invar_analysis::relations::{PairwiseLinear, SeqEqual, SubSequence};
use invar_analysis::{
    BaseType, BinaryInvariant, ConfidenceEstimator, Orientation, ProgramPoint, RelationRegistry,
    Reloaded, RepType, VarIndex,
};
use proptest::prelude::*;

const SLOTS: [VarIndex; 2] = [VarIndex(0), VarIndex(1)];

fn ppt() -> ProgramPoint {
    let mut ppt = ProgramPoint::new("P:::EXIT");
    ppt.add_var("a", RepType::sequence(BaseType::Int));
    ppt.add_var("b", RepType::sequence(BaseType::Int));
    ppt
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Forward), Just(Orientation::Swapped)]
}

fn seq() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..6)
}

proptest! {
    #[test]
    fn accessors_follow_orientation(o in orientation()) {
        let ppt = ppt();
        let inv = BinaryInvariant::new(Box::new(SubSequence), SLOTS, o);
        let v1 = inv.var1(&ppt).unwrap();
        let v2 = inv.var2(&ppt).unwrap();
        let expected = if o.is_swapped() { (1, 0) } else { (0, 1) };
        prop_assert_eq!((v1.index.0, v2.index.0), expected);
    }

    #[test]
    fn double_flip_restores(o in orientation()) {
        prop_assert_eq!(o.flipped().flipped(), o);
        prop_assert_ne!(o.flipped(), o);
    }

    #[test]
    fn double_swap_reload_restores_orientation(o in orientation(), linear in any::<bool>()) {
        let registry = RelationRegistry::with_builtins();
        let inv = if linear {
            BinaryInvariant::new(Box::new(PairwiseLinear::default()), SLOTS, o)
        } else {
            BinaryInvariant::new(Box::new(SubSequence), SLOTS, o)
        };
        let once = Reloaded::from_snapshot(inv.snapshot(), &registry)
            .unwrap()
            .fixup_after_reload(&[1, 0])
            .unwrap();
        prop_assert_eq!(once.orientation(), o.flipped());
        let twice = Reloaded::from_snapshot(once.snapshot(), &registry)
            .unwrap()
            .fixup_after_reload(&[1, 0])
            .unwrap();
        prop_assert_eq!(twice.orientation(), o);
        prop_assert!(twice.is_same_formula(&inv));
    }

    #[test]
    fn symmetric_reload_is_noop(o in orientation(), swap in any::<bool>()) {
        let registry = RelationRegistry::with_builtins();
        let inv = BinaryInvariant::new(Box::new(SeqEqual), SLOTS, o);
        let permutation: &[usize] = if swap { &[1, 0] } else { &[0, 1] };
        let reloaded = Reloaded::from_snapshot(inv.snapshot(), &registry)
            .unwrap()
            .fixup_after_reload(permutation)
            .unwrap();
        prop_assert_eq!(reloaded.snapshot(), inv.snapshot());
    }

    #[test]
    fn swapped_sees_reversed_operands(a in seq(), b in seq()) {
        let fwd = BinaryInvariant::new(Box::new(SubSequence), SLOTS, Orientation::Forward);
        let swp = BinaryInvariant::new(Box::new(SubSequence), SLOTS, Orientation::Swapped);
        prop_assert_eq!(fwd.check(&a, &b, 3, 1).unwrap(), swp.check(&b, &a, 3, 1).unwrap());
    }

    #[test]
    fn symmetric_relation_ignores_orientation(a in seq(), b in seq()) {
        let fwd = BinaryInvariant::new(Box::new(SeqEqual), SLOTS, Orientation::Forward);
        let swp = BinaryInvariant::new(Box::new(SeqEqual), SLOTS, Orientation::Swapped);
        prop_assert_eq!(fwd.check(&a, &b, 1, 1).unwrap(), swp.check(&a, &b, 1, 1).unwrap());
    }

    #[test]
    fn check_never_changes_state(a in seq(), b in seq(), ci in 0u8..4) {
        let inv = BinaryInvariant::new(Box::new(PairwiseLinear::default()), SLOTS, Orientation::Forward);
        let first = inv.check(&a, &b, ci, 1).unwrap();
        let second = inv.check(&a, &b, ci, 1).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(inv.sample_count(), 0);
    }

    #[test]
    fn out_of_range_indicator_rejected(ci in 4u8..=u8::MAX) {
        let inv = BinaryInvariant::new(Box::new(SubSequence), SLOTS, Orientation::Forward);
        prop_assert!(inv.check(&[1], &[1], ci, 1).is_err());
    }

    #[test]
    fn same_formula_ignores_samples(o in orientation(), counts in prop::collection::vec(1u32..50, 0..8)) {
        let mut a = BinaryInvariant::new(Box::new(SubSequence), SLOTS, o);
        let b = BinaryInvariant::new(Box::new(SubSequence), SLOTS, o);
        for count in counts {
            a.add(&[1], &[1], 0, count).unwrap();
        }
        prop_assert!(a.is_same_formula(&b));
        prop_assert!(!a.is_same_formula(&BinaryInvariant::new(Box::new(SubSequence), SLOTS, o.flipped())));
    }

    #[test]
    fn confidence_non_decreasing(n in 0u64..1_000_000, step in 0u64..1_000) {
        let est = ConfidenceEstimator::default();
        let lo = est.estimate(n);
        let hi = est.estimate(n + step);
        prop_assert!(hi.value >= lo.value);
        prop_assert!(hi.value < 1.0);
    }

    #[test]
    fn models_stay_below_one(n in any::<u64>()) {
        prop_assert!(BetaPosterior::default().score(n) < 1.0);
        prop_assert!(SaturatingRamp::new(5).score(n) < 1.0);
    }
}
