// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Float, Fraction, I4, I8, I16, I32, Scalar, ScalarKind, U4, U8, U16, U32};

/// Names a scalar kind at runtime, e.g. when it comes from a command line argument. Use
/// [`with_scalar_kind!`] to get back to the static type.
///
/// ```
/// use r3bl_xy::{ScalarKindId, ScalarShape};
/// use std::str::FromStr;
///
/// let id = ScalarKindId::from_str("u16").unwrap();
/// assert_eq!(id.kind().max, 65_535.0);
/// assert_eq!(ScalarKindId::Fraction.kind().shape, ScalarShape::Fractional);
/// ```
///
/// [`with_scalar_kind!`]: crate::with_scalar_kind
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
pub enum ScalarKindId {
    U4,
    U8,
    U16,
    U32,
    I4,
    I8,
    I16,
    I32,
    Fraction,
    Float,
}

impl ScalarKindId {
    #[must_use]
    pub fn kind(self) -> ScalarKind {
        match self {
            ScalarKindId::U4 => U4::KIND,
            ScalarKindId::U8 => U8::KIND,
            ScalarKindId::U16 => U16::KIND,
            ScalarKindId::U32 => U32::KIND,
            ScalarKindId::I4 => I4::KIND,
            ScalarKindId::I8 => I8::KIND,
            ScalarKindId::I16 => I16::KIND,
            ScalarKindId::I32 => I32::KIND,
            ScalarKindId::Fraction => Fraction::KIND,
            ScalarKindId::Float => Float::KIND,
        }
    }
}

/// Runs `$body` with `$kind_ty` bound to the scalar type that `$id` (a
/// [`ScalarKindId`]) names. `$body` is expanded once per kind, so it must compile for
/// all of them.
///
/// ```
/// use r3bl_xy::{Scalar, ScalarKindId, with_scalar_kind};
///
/// let id = ScalarKindId::I8;
/// let name = with_scalar_kind!(id, K => K::KIND.name);
/// assert_eq!(name, "I8");
/// ```
///
/// [`ScalarKindId`]: crate::ScalarKindId
#[macro_export]
macro_rules! with_scalar_kind {
    ($id:expr, $kind_ty:ident => $body:expr) => {
        match $id {
            $crate::ScalarKindId::U4 => { type $kind_ty = $crate::U4; $body }
            $crate::ScalarKindId::U8 => { type $kind_ty = $crate::U8; $body }
            $crate::ScalarKindId::U16 => { type $kind_ty = $crate::U16; $body }
            $crate::ScalarKindId::U32 => { type $kind_ty = $crate::U32; $body }
            $crate::ScalarKindId::I4 => { type $kind_ty = $crate::I4; $body }
            $crate::ScalarKindId::I8 => { type $kind_ty = $crate::I8; $body }
            $crate::ScalarKindId::I16 => { type $kind_ty = $crate::I16; $body }
            $crate::ScalarKindId::I32 => { type $kind_ty = $crate::I32; $body }
            $crate::ScalarKindId::Fraction => { type $kind_ty = $crate::Fraction; $body }
            $crate::ScalarKindId::Float => { type $kind_ty = $crate::Float; $body }
        }
    };
}
