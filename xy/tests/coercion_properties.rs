// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Property checks for the coercion calculus and the vector surface built on it.

use proptest::prelude::*;
use r3bl_xy::{BinaryOp, Coercion, Fraction, I16, I32, Scalar, ScalarKind, ScalarKindId,
              ScalarShape, U16, XY, XyError, XyI16, XyI32, XyU32, coerce};
use strum::IntoEnumIterator;

const SATURATING: [Coercion; 5] = [
    Coercion::Clamp,
    Coercion::Ceil,
    Coercion::Floor,
    Coercion::Round,
    Coercion::Trunc,
];

fn all_kinds() -> Vec<ScalarKind> { ScalarKindId::iter().map(ScalarKindId::kind).collect() }

fn integral_kinds() -> Vec<ScalarKind> {
    all_kinds().into_iter().filter(ScalarKind::is_integral).collect()
}

/// A value that every policy accepts unchanged for `kind`, picked at `t` in `[0, 1]`
/// along its range.
fn valid_value(kind: &ScalarKind, t: f64) -> f64 {
    let span = if kind.max - kind.min > 1e12 { 2e12 } else { kind.max - kind.min };
    let lo = if kind.min < -1e12 { -1e12 } else { kind.min };
    let value = lo + t * span;
    if kind.is_integral() { value.round().clamp(kind.min, kind.max) } else { value }
}

fn raw_number() -> impl Strategy<Value = f64> {
    prop_oneof![-1e10..1e10_f64, -100.0..100.0_f64, Just(-0.0)]
}

fn infinity() -> impl Strategy<Value = f64> {
    prop_oneof![Just(f64::INFINITY), Just(f64::NEG_INFINITY)]
}

fn any_policy() -> impl Strategy<Value = Coercion> {
    prop::sample::select(Coercion::iter().collect::<Vec<_>>())
}

/// `set` then `add` under `policy` must land where a fresh vector at the sum does.
fn check_set_then_add<K: Scalar>(policy: Coercion, start: (f64, f64), delta: (f64, f64)) {
    let chained = XY::<K>::try_new_with(policy, (0.0, 0.0)).and_then(|mut it| {
        it.assign_with(policy, start)?
            .combine_with(BinaryOp::Add, policy, delta)?;
        Ok(it)
    });
    let fresh = XY::<K>::try_new_with(policy, (start.0 + delta.0, start.1 + delta.1));
    assert_eq!(chained.ok(), fresh.ok(), "{policy} {start:?} + {delta:?}");
}

proptest! {
    #[test]
    fn saturating_policies_land_in_range(raw in raw_number()) {
        for kind in all_kinds() {
            for policy in SATURATING.into_iter().filter(|it| it.applies_to(kind.shape)) {
                let value = coerce(&kind, policy, raw).unwrap();
                prop_assert!(kind.contains(value), "{policy} {raw} -> {value} for {}", kind.name);
            }
        }
    }

    #[test]
    fn cast_agrees_with_clamp_on_valid_values(t in 0.0..=1.0_f64) {
        for kind in all_kinds() {
            let value = valid_value(&kind, t);
            prop_assert_eq!(
                coerce(&kind, Coercion::Cast, value).unwrap(),
                coerce(&kind, Coercion::Clamp, value).unwrap()
            );
        }
    }

    #[test]
    fn floor_never_exceeds_ceil(raw in raw_number()) {
        for kind in integral_kinds() {
            let floor = coerce(&kind, Coercion::Floor, raw).unwrap();
            let ceil = coerce(&kind, Coercion::Ceil, raw).unwrap();
            prop_assert!(floor <= ceil);
            prop_assert!(ceil - floor <= 1.0);
        }
    }

    #[test]
    fn trunc_follows_the_sign(raw in raw_number()) {
        for kind in integral_kinds() {
            let expected = if raw >= 0.0 { Coercion::Floor } else { Coercion::Ceil };
            prop_assert_eq!(
                coerce(&kind, Coercion::Trunc, raw).unwrap(),
                coerce(&kind, expected, raw).unwrap()
            );
        }
    }

    #[test]
    fn coercion_is_idempotent(raw in raw_number()) {
        for kind in all_kinds() {
            for policy in SATURATING.into_iter().filter(|it| it.applies_to(kind.shape)) {
                let once = coerce(&kind, policy, raw).unwrap();
                prop_assert_eq!(coerce(&kind, policy, once).unwrap(), once);
                prop_assert_eq!(coerce(&kind, Coercion::Cast, once).unwrap(), once);
            }
        }
    }

    #[test]
    fn infinity_saturates_only_under_clamp(raw in infinity()) {
        for kind in all_kinds() {
            for policy in Coercion::iter().filter(|it| it.applies_to(kind.shape)) {
                let result = coerce(&kind, policy, raw);
                if policy == Coercion::Clamp {
                    let expected = if raw > 0.0 { kind.max } else { kind.min };
                    prop_assert_eq!(result.unwrap(), expected);
                } else {
                    prop_assert!(
                        matches!(result, Err(XyError::NotFinite { .. })),
                        "{} {} should be rejected for {}", policy, raw, kind.name
                    );
                }
            }
        }
    }

    #[test]
    fn set_then_add_matches_fresh_vector(
        policy in any_policy(),
        ax in any::<i16>(),
        ay in any::<i16>(),
        dx in -1e5..1e5_f64,
        dy in -1e5..1e5_f64,
    ) {
        // The starting vector is valid for every kind it is used with.
        let start = (f64::from(ax), f64::from(ay));
        let unsigned_start = (f64::from(ax.unsigned_abs()), f64::from(ay.unsigned_abs()));
        check_set_then_add::<U16>(policy, unsigned_start, (dx, dy));
        check_set_then_add::<I16>(policy, start, (dx, dy));
        check_set_then_add::<I32>(policy, start, (dx.trunc(), dy.trunc()));
        if policy.applies_to(ScalarShape::Fractional) {
            let unit = (f64::from(ax.rem_euclid(5)) / 4.0, f64::from(ay.rem_euclid(5)) / 4.0);
            check_set_then_add::<Fraction>(policy, unit, (dx / 1e5, dy / 1e5));
        }
    }

    #[test]
    fn nan_is_always_rejected(policy in prop::sample::select(SATURATING.to_vec())) {
        for kind in all_kinds().into_iter().filter(|it| policy.applies_to(it.shape)) {
            prop_assert!(coerce(&kind, policy, f64::NAN).is_err());
        }
    }

    #[test]
    fn json_round_trip(x in any::<i16>(), y in any::<i16>(), ux in any::<u32>(), uy in any::<u32>()) {
        let it = XyI16::new((x, y)).unwrap();
        prop_assert_eq!(XyI16::deser_from_str(&it.ser_to_string().unwrap()).unwrap(), it);

        let it = XyU32::new((ux, uy)).unwrap();
        prop_assert_eq!(XyU32::from_json(&it.to_json().unwrap()).unwrap(), it);
    }

    #[test]
    fn add_then_sub_restores(
        ax in -1_000_000..1_000_000_i32,
        ay in -1_000_000..1_000_000_i32,
        bx in -1_000_000..1_000_000_i32,
        by in -1_000_000..1_000_000_i32,
    ) {
        let start = XyI32::new((ax, ay)).unwrap();
        let mut it = start;
        it.add((bx, by)).unwrap().sub((bx, by)).unwrap();
        prop_assert_eq!(it, start);
    }
}
