// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The policy driven core of [`XY`]. Every named method (`add_ceil()`, `set_clamp()`,
//! `area()`, and so on) is a thin wrapper over one of these.

use crate::{Axis, BinaryOp, Coercion, Scalar, XY, XyArg, XyResult};

impl<K: Scalar> XY<K> {
    /// Replace both components with `arg`, coerced under `policy`.
    ///
    /// # Errors
    ///
    /// Fails if `arg` is malformed or either component can't be coerced. The vector is
    /// unchanged on failure.
    pub fn assign_with(&mut self, policy: Coercion, arg: impl XyArg) -> XyResult<&mut Self> {
        let raw = arg.try_into_raw_xy()?;
        let x = K::coerce(raw.x, policy)?;
        let y = K::coerce(raw.y, policy)?;
        Ok(self.commit(x, y))
    }

    /// Combine each component with the matching component of `arg` using `op`, then
    /// coerce the result under `policy`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed `arg`, a zero divisor (for [`BinaryOp::Div`]), or a result
    /// that can't be coerced. The vector is unchanged on failure.
    pub fn combine_with(
        &mut self,
        op: BinaryOp,
        policy: Coercion,
        arg: impl XyArg,
    ) -> XyResult<&mut Self> {
        let raw = arg.try_into_raw_xy()?;
        let raw_x = op.apply(self.x().to_f64(), raw.x, Axis::X)?;
        let raw_y = op.apply(self.y().to_f64(), raw.y, Axis::Y)?;
        let x = K::coerce(raw_x, policy)?;
        let y = K::coerce(raw_y, policy)?;
        Ok(self.commit(x, y))
    }

    /// Replace each component with its magnitude, coerced under `policy`.
    ///
    /// # Errors
    ///
    /// Fails if a magnitude doesn't fit, e.g. `abs(-128)` for [`I8`] under Cast.
    ///
    /// [`I8`]: crate::I8
    pub fn abs_with(&mut self, policy: Coercion) -> XyResult<&mut Self> {
        let x = K::coerce(self.x().to_f64().abs(), policy)?;
        let y = K::coerce(self.y().to_f64().abs(), policy)?;
        Ok(self.commit(x, y))
    }

    /// `x * y` as a raw number.
    #[must_use]
    pub fn area_num(&self) -> f64 { self.x().to_f64() * self.y().to_f64() }

    /// `sqrt(x² + y²)` as a raw number.
    #[must_use]
    pub fn magnitude_num(&self) -> f64 { self.x().to_f64().hypot(self.y().to_f64()) }

    /// `x * arg.x + y * arg.y` as a raw number.
    ///
    /// # Errors
    ///
    /// Fails only if `arg` is malformed.
    pub fn dot_num(&self, arg: impl XyArg) -> XyResult<f64> {
        let raw = arg.try_into_raw_xy()?;
        Ok(self.x().to_f64() * raw.x + self.y().to_f64() * raw.y)
    }

    /// [`XY::area_num()`] coerced into `K` under `policy`.
    ///
    /// # Errors
    ///
    /// Fails if the area can't be coerced.
    pub fn area_with(&self, policy: Coercion) -> XyResult<K> { K::coerce(self.area_num(), policy) }

    /// [`XY::magnitude_num()`] coerced into `K` under `policy`.
    ///
    /// # Errors
    ///
    /// Fails if the magnitude can't be coerced. Under Cast this includes every magnitude
    /// that isn't a whole number, for integral kinds.
    pub fn magnitude_with(&self, policy: Coercion) -> XyResult<K> {
        K::coerce(self.magnitude_num(), policy)
    }

    /// [`XY::dot_num()`] coerced into `K` under `policy`.
    ///
    /// # Errors
    ///
    /// Fails if `arg` is malformed or the dot product can't be coerced.
    pub fn dot_with(&self, policy: Coercion, arg: impl XyArg) -> XyResult<K> {
        K::coerce(self.dot_num(arg)?, policy)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BinaryOp, Coercion, Scalar, XyError, XyFraction, XyI8, XyU8, XyU16};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_combine_with_is_all_or_nothing() {
        let mut it = XyU8::new((10, 250)).unwrap();
        // x would be fine, y overflows: nothing changes.
        let result = it.combine_with(BinaryOp::Add, Coercion::Cast, (1, 10));
        assert!(matches!(result, Err(XyError::OutOfRange { .. })));
        assert_eq!(it.to_string(), "(10, 250)");

        // y divisor is zero: x is not touched either.
        let result = it.combine_with(BinaryOp::Div, Coercion::Floor, (2, 0));
        assert!(matches!(result, Err(XyError::DivisionByZero { .. })));
        assert_eq!(it.to_string(), "(10, 250)");
    }

    #[test]
    fn test_combine_with_policy() {
        let mut it = XyU8::new((10, 250)).unwrap();
        it.combine_with(BinaryOp::Div, Coercion::Round, (4, 3)).unwrap();
        assert_eq!(it.to_string(), "(3, 83)");
    }

    #[test]
    fn test_fractional_rejects_integral_policy() {
        let mut it = XyFraction::new((0.5, 0.5)).unwrap();
        let result = it.combine_with(BinaryOp::Mul, Coercion::Ceil, (1, 1));
        assert!(matches!(result, Err(XyError::PolicyNotApplicable { .. })));
    }

    #[test]
    fn test_abs_with() {
        let mut it = XyI8::new((-128, -5)).unwrap();
        assert!(it.abs_with(Coercion::Cast).is_err());
        assert_eq!(it.to_string(), "(-128, -5)");
        it.abs_with(Coercion::Clamp).unwrap();
        assert_eq!(it.to_string(), "(127, 5)");
    }

    #[test]
    fn test_derived_values() {
        let it = XyU16::new((3, 4)).unwrap();
        assert_eq!(it.area_num(), 12.0);
        assert_eq!(it.magnitude_num(), 5.0);
        assert_eq!(it.dot_num((2, -1)).unwrap(), 2.0);
        assert_eq!(it.area_with(Coercion::Cast).unwrap().get(), 12);
        assert_eq!(it.magnitude_with(Coercion::Cast).unwrap().get(), 5);
        assert!(it.dot_with(Coercion::Cast, (-2, 1)).is_err());
        assert_eq!(it.dot_with(Coercion::Clamp, (-2, 1)).unwrap().get(), 0);
    }
}
