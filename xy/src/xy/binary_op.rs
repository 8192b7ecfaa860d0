// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Axis, XyError, XyResult};

/// Component wise operation between a vector and an argument, see
/// [`XY::combine_with()`].
///
/// [`XY::combine_with()`]: crate::XY::combine_with
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
}

impl BinaryOp {
    /// Apply to one component. The result is unbounded, the caller coerces it.
    ///
    /// # Errors
    ///
    /// [`XyError::DivisionByZero`] if this is [`BinaryOp::Div`] and `rhs` is zero.
    pub fn apply(self, lhs: f64, rhs: f64, axis: Axis) -> XyResult<f64> {
        Ok(match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => {
                if rhs == 0.0 {
                    tracing::debug!(message = "Division by zero", %axis, lhs);
                    return Err(XyError::DivisionByZero { axis });
                }
                lhs / rhs
            }
            BinaryOp::Min => lhs.min(rhs),
            BinaryOp::Max => lhs.max(rhs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply() {
        assert_eq!(BinaryOp::Add.apply(2.0, 3.0, Axis::X).unwrap(), 5.0);
        assert_eq!(BinaryOp::Sub.apply(2.0, 3.0, Axis::X).unwrap(), -1.0);
        assert_eq!(BinaryOp::Mul.apply(2.0, 3.0, Axis::X).unwrap(), 6.0);
        assert_eq!(BinaryOp::Div.apply(3.0, 2.0, Axis::X).unwrap(), 1.5);
        assert_eq!(BinaryOp::Min.apply(2.0, 3.0, Axis::X).unwrap(), 2.0);
        assert_eq!(BinaryOp::Max.apply(2.0, 3.0, Axis::X).unwrap(), 3.0);
    }

    #[test]
    fn test_div_by_zero_names_axis() {
        let result = BinaryOp::Div.apply(1.0, 0.0, Axis::Y);
        assert!(matches!(
            result,
            Err(XyError::DivisionByZero { axis: Axis::Y })
        ));
        let result = BinaryOp::Div.apply(1.0, -0.0, Axis::X);
        assert!(matches!(
            result,
            Err(XyError::DivisionByZero { axis: Axis::X })
        ));
    }
}
