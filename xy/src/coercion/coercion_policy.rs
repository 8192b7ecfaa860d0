// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ScalarShape;

/// How an out of range or non-integral raw number becomes a valid scalar value. See the
/// [module docs](crate::coercion) for the full table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Coercion {
    /// Reject anything that isn't already valid. The default for every constructor.
    #[default]
    Cast,
    Clamp,
    Ceil,
    Floor,
    Round,
    Trunc,
}

impl Coercion {
    /// Policies that only make sense for whole numbers.
    pub const INTEGRAL_ONLY: [Coercion; 4] = [
        Coercion::Ceil,
        Coercion::Floor,
        Coercion::Round,
        Coercion::Trunc,
    ];

    #[must_use]
    pub fn applies_to(self, shape: ScalarShape) -> bool {
        match shape {
            ScalarShape::Integral => true,
            ScalarShape::Fractional => matches!(self, Coercion::Cast | Coercion::Clamp),
        }
    }

    /// Snap `raw` to a whole number the way this policy does. [`Coercion::Clamp`]
    /// truncates toward zero. [`Coercion::Cast`] leaves `raw` alone.
    #[must_use]
    pub fn to_whole(self, raw: f64) -> f64 {
        match self {
            Coercion::Cast => raw,
            Coercion::Ceil => raw.ceil(),
            Coercion::Floor => raw.floor(),
            Coercion::Round => raw.round(),
            Coercion::Clamp | Coercion::Trunc => raw.trunc(),
        }
    }
}
