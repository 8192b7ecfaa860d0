// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::generate_fractional_scalar_impl;

/// A real number in `0 ..= 1`. Used for ratios, normalized coordinates, and opacity.
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Fraction(f64);
generate_fractional_scalar_impl!(Fraction, 0.0, 1.0, false);

/// Any finite [`f64`]. `NaN` and infinities are rejected by Cast, and infinities
/// saturate to [`f64::MIN`] or [`f64::MAX`] under Clamp.
///
/// [`f64`]: prim@f64
#[derive(Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Float(f64);
generate_fractional_scalar_impl!(Float, f64::MIN, f64::MAX, false);
