// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Whether a scalar kind holds whole numbers only, or any real number in its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarShape {
    Integral,
    Fractional,
}

/// Static descriptor of a bounded scalar kind. One `const` instance exists per kind, see
/// [`Scalar::KIND`].
///
/// ```text
///            min                            max
///   ─────────┼──────────────────────────────┼─────────→ raw f64
///   saturate │  valid values (whole numbers │ saturate
///   to min   │  only if Integral)           │ to max
/// ```
///
/// [`Scalar::KIND`]: crate::Scalar::KIND
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarKind {
    pub name: &'static str,
    pub shape: ScalarShape,
    pub min: f64,
    pub max: f64,
    /// When `true`, a vector of this kind leaves out any component equal to `0` when it
    /// is serialized. Readers treat a missing component as `0`.
    pub sparse_json: bool,
}

impl ScalarKind {
    #[must_use]
    pub fn is_integral(&self) -> bool { self.shape == ScalarShape::Integral }

    /// `true` if `value` is finite, within `[min, max]`, and whole for integral kinds.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite()
            && value >= self.min
            && value <= self.max
            && (!self.is_integral() || value.fract() == 0.0)
    }

    /// Saturate `value` into `[min, max]`. `NaN` passes through unchanged, callers reject
    /// it before getting here.
    #[must_use]
    pub fn saturate(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}
