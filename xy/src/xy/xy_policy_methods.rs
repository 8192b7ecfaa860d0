// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The named method surface of [`XY`]: one family of methods per [`Coercion`] policy.
//!
//! | Policy  | Kinds    | Methods                                                            |
//! |---------|----------|--------------------------------------------------------------------|
//! | Cast    | all      | `new set add sub mul div min max abs`                              |
//! | Clamp   | all      | `clamp set_clamp add_clamp sub_clamp ... abs_clamp`                |
//! | Ceil    | integral | `ceil set_ceil add_ceil sub_ceil ... abs_ceil`                     |
//! | Floor   | integral | `floor set_floor add_floor sub_floor ... abs_floor`                |
//! | Round   | integral | `round set_round add_round sub_round ... abs_round`                |
//! | Trunc   | integral | `trunc set_trunc add_trunc sub_trunc ... abs_trunc`                |
//!
//! The integral only families live in an `impl` block bounded by [`IntegralScalar`], so
//! `add_ceil()` on a [`Fraction`] vector is a compile error rather than a runtime one.
//!
//! [`Fraction`]: crate::Fraction

use crate::{BinaryOp, Coercion, IntegralScalar, Scalar, XY, XyArg, XyResult};

/// Generates one family of policy methods inside an `impl XY<K>` block.
///
/// Use `suffix: clamp, policy: Coercion::Clamp` to get `clamp()`, `set_clamp()`,
/// `add_clamp()`, etc. Use the long form to pick every name, as the Cast family does.
macro_rules! generate_xy_policy_methods {
    (
        policy: $policy:expr,
        new: $new:ident,
        set: $set:ident,
        add: $add:ident,
        sub: $sub:ident,
        mul: $mul:ident,
        div: $div:ident,
        min: $min:ident,
        max: $max:ident,
        abs: $abs:ident
    ) => {
        #[doc = concat!("Creates a vector from `arg` under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// Fails if `arg` is malformed or a component can't be coerced.
        pub fn $new(arg: impl XyArg) -> XyResult<Self> { Self::try_new_with($policy, arg) }

        #[doc = concat!("Replaces both components with `arg` under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::assign_with()`].
        pub fn $set(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.assign_with($policy, arg)
        }

        #[doc = concat!("Adds `arg` to each component under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::combine_with()`].
        pub fn $add(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.combine_with(BinaryOp::Add, $policy, arg)
        }

        #[doc = concat!("Subtracts `arg` from each component under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::combine_with()`].
        pub fn $sub(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.combine_with(BinaryOp::Sub, $policy, arg)
        }

        #[doc = concat!("Multiplies each component by `arg` under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::combine_with()`].
        pub fn $mul(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.combine_with(BinaryOp::Mul, $policy, arg)
        }

        #[doc = concat!("Divides each component by `arg` under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// Fails with [`XyError::DivisionByZero`] if either divisor is zero, and otherwise
        /// as [`XY::combine_with()`] does.
        ///
        /// [`XyError::DivisionByZero`]: crate::XyError::DivisionByZero
        pub fn $div(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.combine_with(BinaryOp::Div, $policy, arg)
        }

        #[doc = concat!("Elementwise minimum with `arg` under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::combine_with()`].
        pub fn $min(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.combine_with(BinaryOp::Min, $policy, arg)
        }

        #[doc = concat!("Elementwise maximum with `arg` under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::combine_with()`].
        pub fn $max(&mut self, arg: impl XyArg) -> XyResult<&mut Self> {
            self.combine_with(BinaryOp::Max, $policy, arg)
        }

        #[doc = concat!("Replaces each component with its magnitude under [`", stringify!($policy), "`].")]
        ///
        /// # Errors
        ///
        /// See [`XY::abs_with()`].
        pub fn $abs(&mut self) -> XyResult<&mut Self> { self.abs_with($policy) }
    };

    (suffix: $suffix:ident, policy: $policy:expr) => {
        paste::paste! {
            generate_xy_policy_methods!(
                policy: $policy,
                new: $suffix,
                set: [<set_ $suffix>],
                add: [<add_ $suffix>],
                sub: [<sub_ $suffix>],
                mul: [<mul_ $suffix>],
                div: [<div_ $suffix>],
                min: [<min_ $suffix>],
                max: [<max_ $suffix>],
                abs: [<abs_ $suffix>]
            );
        }
    };
}

impl<K: Scalar> XY<K> {
    generate_xy_policy_methods!(
        policy: Coercion::Cast,
        new: new,
        set: set,
        add: add,
        sub: sub,
        mul: mul,
        div: div,
        min: min,
        max: max,
        abs: abs
    );

    generate_xy_policy_methods!(suffix: clamp, policy: Coercion::Clamp);
}

impl<K: IntegralScalar> XY<K> {
    generate_xy_policy_methods!(suffix: ceil, policy: Coercion::Ceil);
    generate_xy_policy_methods!(suffix: floor, policy: Coercion::Floor);
    generate_xy_policy_methods!(suffix: round, policy: Coercion::Round);
    generate_xy_policy_methods!(suffix: trunc, policy: Coercion::Trunc);
}

/// Derived scalars. Each one comes as `K` under Cast, as `K` under Clamp, and as a raw
/// [`f64`] (the `_num` variants in [`xy_generic_ops`](super::xy_generic_ops)).
///
/// [`f64`]: prim@f64
mod derived {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    #[allow(clippy::missing_errors_doc)]
    impl<K: Scalar> XY<K> {
        pub fn area(&self) -> XyResult<K> { self.area_with(Coercion::Cast) }

        pub fn area_clamp(&self) -> XyResult<K> { self.area_with(Coercion::Clamp) }

        pub fn magnitude(&self) -> XyResult<K> { self.magnitude_with(Coercion::Cast) }

        pub fn magnitude_clamp(&self) -> XyResult<K> { self.magnitude_with(Coercion::Clamp) }

        pub fn dot(&self, arg: impl XyArg) -> XyResult<K> { self.dot_with(Coercion::Cast, arg) }

        pub fn dot_clamp(&self, arg: impl XyArg) -> XyResult<K> {
            self.dot_with(Coercion::Clamp, arg)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scalar, XyError, XyFloat, XyFraction, XyI4, XyU16};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_ceil_saturates_after_rounding() {
        let mut it = XyU16::new((5, 10)).unwrap();
        it.add_ceil((65_534.2, -3.7)).unwrap();
        assert_eq!(it.to_string(), "(65535, 7)");
    }

    #[test]
    fn test_div_by_zero_leaves_vector_unchanged() {
        let mut it = XyU16::new((4, 4)).unwrap();
        let result = it.div((0, 2));
        assert!(matches!(result, Err(XyError::DivisionByZero { .. })));
        assert_eq!(it.to_string(), "(4, 4)");
    }

    #[test]
    fn test_factories() {
        assert_eq!(XyI4::clamp((-20, 20)).unwrap().to_string(), "(-8, 7)");
        assert_eq!(XyI4::ceil((-2.5, 6.5)).unwrap().to_string(), "(-2, 7)");
        assert_eq!(XyI4::floor((-2.5, 6.5)).unwrap().to_string(), "(-3, 6)");
        assert_eq!(XyI4::round((-2.5, 6.5)).unwrap().to_string(), "(-3, 7)");
        assert_eq!(XyI4::trunc((-2.5, 6.5)).unwrap().to_string(), "(-2, 6)");
        assert!(XyI4::new((-9, 0)).is_err());
    }

    #[test]
    fn test_infinity_saturates_only_under_clamp() {
        assert!(matches!(
            XyU16::ceil((f64::INFINITY, 0.0)),
            Err(XyError::NotFinite { .. })
        ));
        assert!(matches!(
            XyU16::round((f64::NEG_INFINITY, 0.0)),
            Err(XyError::NotFinite { .. })
        ));
        let mut it = XyU16::new((1, 2)).unwrap();
        assert!(it.set_trunc((1.0, f64::INFINITY)).is_err());
        assert_eq!(it.to_string(), "(1, 2)");
        it.set_clamp((f64::INFINITY, f64::NEG_INFINITY)).unwrap();
        assert_eq!(it.to_string(), "(65535, 0)");
    }

    #[test]
    fn test_chaining() {
        let mut it = XyU16::zero();
        it.set((1, 2))
            .unwrap()
            .add((3, 4))
            .unwrap()
            .mul_floor((1.5, 1.5))
            .unwrap()
            .sub_clamp((10, 1))
            .unwrap();
        assert_eq!(it.to_string(), "(0, 8)");
    }

    #[test]
    fn test_min_max() {
        let mut it = XyU16::new((10, 20)).unwrap();
        it.min((15, 5)).unwrap();
        assert_eq!(it.to_string(), "(10, 5)");
        it.max_clamp((-3, 70_000)).unwrap();
        assert_eq!(it.to_string(), "(10, 65535)");
        assert!(it.max((0, 70_000)).is_err());
    }

    #[test]
    fn test_fractional_surface() {
        let mut it = XyFraction::new((0.5, 0.25)).unwrap();
        it.mul_clamp((4, 2)).unwrap();
        assert_eq!(it.to_string(), "(1, 0.5)");
        assert!(it.add((0.1, 0.0)).is_err());
        it.sub_clamp((0.25, 0.75)).unwrap();
        assert_eq!(it.to_string(), "(0.75, 0)");
    }

    #[test]
    fn test_derived() {
        let it = XyFloat::new((3, -4)).unwrap();
        assert_eq!(it.area().unwrap().get(), -12.0);
        assert_eq!(it.magnitude().unwrap().get(), 5.0);
        assert_eq!(it.dot((2, 1)).unwrap().get(), 2.0);

        let it = XyU16::new((300, 300)).unwrap();
        assert!(it.area().is_err());
        assert_eq!(it.area_clamp().unwrap().get(), 65_535);
        assert!(it.magnitude().is_err());
        assert_eq!(it.magnitude_clamp().unwrap().get(), 424);
        assert_eq!(it.dot_clamp((1, -2)).unwrap().get(), 0);
    }
}
