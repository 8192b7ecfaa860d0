// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Traits shared by all scalar kinds. See [`Scalar`], [`IntegralScalar`], and
//! [`FractionalScalar`].

use std::fmt::{Debug, Display};

use crate::{Coercion, ScalarKind, XyResult};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Proof that a number went through [`coerce()`] for some kind. Only this crate can make
/// one, which is what keeps [`Scalar::from_coerced()`] from being a back door.
///
/// [`coerce()`]: crate::coerce
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coerced(f64);

impl Coerced {
    #[must_use]
    pub fn get(self) -> f64 { self.0 }
}

/// A bounded number. The set of implementing types is closed: [`U4`], [`U8`], [`U16`],
/// [`U32`], [`I4`], [`I8`], [`I16`], [`I32`], [`Fraction`], and [`Float`].
///
/// Kinds serialize as their native number (`300`, not `300.0`), so a vector can write
/// its components as they are.
///
/// Every value of an implementing type satisfies [`ScalarKind::contains()`] for
/// [`Self::KIND`]. Values only come from [`Scalar::coerce()`] (or the helpers built on
/// it), so that invariant can't be skipped.
///
/// ```
/// use r3bl_xy::{Coercion, Scalar, U16};
///
/// assert!(U16::new(70_000).is_err());
/// assert_eq!(U16::coerce_clamp(70_000.0).unwrap().get(), 65_535);
/// assert_eq!(U16::coerce(12.0, Coercion::Cast).unwrap().to_string(), "12");
/// ```
///
/// [`U4`]: crate::U4
/// [`U8`]: crate::U8
/// [`U16`]: crate::U16
/// [`U32`]: crate::U32
/// [`I4`]: crate::I4
/// [`I8`]: crate::I8
/// [`I16`]: crate::I16
/// [`I32`]: crate::I32
/// [`Fraction`]: crate::Fraction
/// [`Float`]: crate::Float
pub trait Scalar:
    sealed::Sealed
    + Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Display
    + serde::Serialize
    + serde::de::DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// The native number this kind is stored as.
    type Repr: Copy + Debug + Display;

    const KIND: ScalarKind;

    fn get(self) -> Self::Repr;

    fn to_f64(self) -> f64;

    fn from_coerced(value: Coerced) -> Self;

    /// Run `raw` through the coercion calculus for this kind.
    ///
    /// # Errors
    ///
    /// See [`coerce()`](crate::coerce).
    fn coerce(raw: f64, policy: Coercion) -> XyResult<Self> {
        crate::coerce(&Self::KIND, policy, raw)
            .map(Coerced)
            .map(Self::from_coerced)
    }

    /// Same as [`Scalar::coerce()`] with [`Coercion::Cast`].
    ///
    /// # Errors
    ///
    /// Fails if `raw` isn't already a valid value of this kind.
    fn cast(raw: f64) -> XyResult<Self> { Self::coerce(raw, Coercion::Cast) }

    /// Same as [`Scalar::coerce()`] with [`Coercion::Clamp`].
    ///
    /// # Errors
    ///
    /// Fails only if `raw` is `NaN`.
    fn coerce_clamp(raw: f64) -> XyResult<Self> { Self::coerce(raw, Coercion::Clamp) }

    #[must_use]
    fn is_zero(self) -> bool { self.to_f64() == 0.0 }
}

/// Scalar kinds that only hold whole numbers. These unlock the [`Coercion::Ceil`],
/// [`Coercion::Floor`], [`Coercion::Round`], and [`Coercion::Trunc`] policies in the
/// static API.
#[allow(clippy::missing_errors_doc)]
pub trait IntegralScalar: Scalar + Ord + Eq + std::hash::Hash {
    fn coerce_ceil(raw: f64) -> XyResult<Self> { Self::coerce(raw, Coercion::Ceil) }

    fn coerce_floor(raw: f64) -> XyResult<Self> { Self::coerce(raw, Coercion::Floor) }

    fn coerce_round(raw: f64) -> XyResult<Self> { Self::coerce(raw, Coercion::Round) }

    fn coerce_trunc(raw: f64) -> XyResult<Self> { Self::coerce(raw, Coercion::Trunc) }
}

/// Scalar kinds that hold any real number in their range.
pub trait FractionalScalar: Scalar {}
