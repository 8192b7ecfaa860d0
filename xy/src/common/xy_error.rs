// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single error type for this crate. See [`XyError`].

use crate::{Axis, Coercion};

/// Result type returned by every fallible operation in this crate.
pub type XyResult<T> = Result<T, XyError>;

/// Every way that turning a raw number into a bounded scalar, or an argument into a
/// vector, can fail.
///
/// | Variant                 | Raised by                                                |
/// | :---------------------- | :------------------------------------------------------- |
/// | [`OutOfRange`]          | [`Coercion::Cast`] with a value outside `[min, max]`     |
/// | [`NonIntegral`]         | [`Coercion::Cast`] with a fraction for an integral kind  |
/// | [`NotFinite`]           | `NaN` under any policy, `±inf` under all but Clamp       |
/// | [`DivisionByZero`]      | any `div*` operation with a zero divisor component       |
/// | [`MalformedInput`]      | an argument that is neither two numbers nor an `{x,y}`   |
/// | [`PolicyNotApplicable`] | an integral-only policy applied to a fractional kind     |
/// | [`Json`]                | text that isn't valid JSON for a vector                  |
///
/// Out of range and non-integral values are only errors under [`Coercion::Cast`]. Every
/// other policy resolves them deterministically. Infinities only saturate under
/// [`Coercion::Clamp`].
///
/// [`OutOfRange`]: Self::OutOfRange
/// [`NonIntegral`]: Self::NonIntegral
/// [`NotFinite`]: Self::NotFinite
/// [`DivisionByZero`]: Self::DivisionByZero
/// [`MalformedInput`]: Self::MalformedInput
/// [`PolicyNotApplicable`]: Self::PolicyNotApplicable
/// [`Json`]: Self::Json
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum XyError {
    #[error("{value} is outside the range [{min}, {max}] of {kind}")]
    #[diagnostic(
        code(r3bl_xy::coercion::out_of_range),
        help("Use a clamp, ceil, floor, round, or trunc variant to saturate instead")
    )]
    OutOfRange {
        kind: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{value} is not a whole number, which {kind} requires")]
    #[diagnostic(
        code(r3bl_xy::coercion::non_integral),
        help("Use a ceil, floor, round, or trunc variant to pick a whole number")
    )]
    NonIntegral { kind: &'static str, value: f64 },

    #[error("{value} is not a finite number, which {kind} requires")]
    #[diagnostic(code(r3bl_xy::coercion::not_finite))]
    NotFinite { kind: &'static str, value: f64 },

    #[error("Division by zero in the {axis} component")]
    #[diagnostic(code(r3bl_xy::ops::division_by_zero))]
    DivisionByZero { axis: Axis },

    #[error("Malformed input: {reason}")]
    #[diagnostic(
        code(r3bl_xy::input::malformed),
        help("Pass two numbers, or a record with numeric `x` and `y` fields")
    )]
    MalformedInput { reason: String },

    #[error("The {policy} policy doesn't apply to the fractional kind {kind}")]
    #[diagnostic(
        code(r3bl_xy::coercion::policy_not_applicable),
        help("Fractional kinds only support the cast and clamp policies")
    )]
    PolicyNotApplicable {
        kind: &'static str,
        policy: Coercion,
    },

    #[error("Could not convert to or from JSON")]
    #[diagnostic(code(r3bl_xy::json))]
    Json(#[from] serde_json::Error),
}

impl XyError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}
