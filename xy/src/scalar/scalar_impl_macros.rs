// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Code generation macros for scalar kinds. See [`crate::generate_integral_scalar_impl!`]
//! and [`crate::generate_fractional_scalar_impl!`].

/// Generates the implementation for an integral scalar kind.
///
/// # Parameters
/// - `$scalar_ty`: The newtype being implemented (e.g., [`U16`]). It must be a tuple
///   struct with one private field of type `$repr_ty`.
/// - `$repr_ty`: The native integer it is stored as (e.g., `u16`).
/// - `$min`, `$max`: Inclusive bounds, as `$repr_ty` expressions.
/// - `$sparse`: Whether vectors of this kind leave out zero components in JSON.
///
/// # Generated Code
/// - [`Scalar`] and [`IntegralScalar`] implementations
/// - `MIN` and `MAX` constants, and a `new()` constructor (Cast)
/// - Everything in [`crate::generate_scalar_common_impl!`]
///
/// [`U16`]: crate::U16
/// [`Scalar`]: crate::Scalar
/// [`IntegralScalar`]: crate::IntegralScalar
#[macro_export]
macro_rules! generate_integral_scalar_impl {
    (
        /* Make this */ $scalar_ty:ident,
        /* Stored as */ $repr_ty:ty,
        /* Range */ $min:expr, $max:expr,
        /* Sparse JSON */ $sparse:expr
    ) => {
        impl $crate::scalar::scalar_trait::sealed::Sealed for $scalar_ty {}

        impl $crate::Scalar for $scalar_ty {
            type Repr = $repr_ty;

            const KIND: $crate::ScalarKind = $crate::ScalarKind {
                name: stringify!($scalar_ty),
                shape: $crate::ScalarShape::Integral,
                min: $min as f64,
                max: $max as f64,
                sparse_json: $sparse,
            };

            fn get(self) -> $repr_ty { self.0 }

            fn to_f64(self) -> f64 { f64::from(self.0) }

            // The coercion calculus guarantees a whole number inside the range of
            // `$repr_ty`, so this cast is exact.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            fn from_coerced(value: $crate::Coerced) -> Self {
                $scalar_ty(value.get() as $repr_ty)
            }
        }

        impl $crate::IntegralScalar for $scalar_ty {}

        impl $scalar_ty {
            pub const MIN: $scalar_ty = $scalar_ty($min);
            pub const MAX: $scalar_ty = $scalar_ty($max);
        }

        impl From<$scalar_ty> for $repr_ty {
            fn from(it: $scalar_ty) -> Self { it.0 }
        }

        $crate::generate_scalar_common_impl!($scalar_ty);
    };
}

/// Generates the implementation for a fractional scalar kind, stored as an [`f64`].
///
/// # Parameters
/// - `$scalar_ty`: The newtype being implemented (e.g., [`Fraction`]).
/// - `$min`, `$max`: Inclusive bounds, as finite `f64` expressions.
/// - `$sparse`: Whether vectors of this kind leave out zero components in JSON.
///
/// [`Fraction`]: crate::Fraction
/// [`f64`]: prim@f64
#[macro_export]
macro_rules! generate_fractional_scalar_impl {
    (
        /* Make this */ $scalar_ty:ident,
        /* Range */ $min:expr, $max:expr,
        /* Sparse JSON */ $sparse:expr
    ) => {
        impl $crate::scalar::scalar_trait::sealed::Sealed for $scalar_ty {}

        impl $crate::Scalar for $scalar_ty {
            type Repr = f64;

            const KIND: $crate::ScalarKind = $crate::ScalarKind {
                name: stringify!($scalar_ty),
                shape: $crate::ScalarShape::Fractional,
                min: $min,
                max: $max,
                sparse_json: $sparse,
            };

            fn get(self) -> f64 { self.0 }

            fn to_f64(self) -> f64 { self.0 }

            fn from_coerced(value: $crate::Coerced) -> Self { $scalar_ty(value.get()) }
        }

        impl $crate::FractionalScalar for $scalar_ty {}

        impl $scalar_ty {
            pub const MIN: $scalar_ty = $scalar_ty($min);
            pub const MAX: $scalar_ty = $scalar_ty($max);
        }

        $crate::generate_scalar_common_impl!($scalar_ty);
    };
}

/// Generates the parts that integral and fractional kinds share:
/// - `new()` constructor that runs [`Coercion::Cast`]
/// - [`Debug`] as `U16(5)` and [`Display`] as the plain number
/// - [`TryFrom<f64>`] (Cast) and [`From`] into [`f64`]
/// - [`Serialize`] as a plain number, and [`Deserialize`] that validates with Cast
///
/// [`Coercion::Cast`]: crate::Coercion::Cast
/// [`Debug`]: ::std::fmt::Debug
/// [`Display`]: ::std::fmt::Display
/// [`From`]: ::std::convert::From
/// [`TryFrom<f64>`]: ::std::convert::TryFrom
/// [`f64`]: prim@f64
/// [`Serialize`]: ::serde::Serialize
/// [`Deserialize`]: ::serde::Deserialize
#[macro_export]
macro_rules! generate_scalar_common_impl {
    ($scalar_ty:ident) => {
        impl $scalar_ty {
            #[doc = concat!("Creates a new [`", stringify!($scalar_ty), "`] if `raw` is already valid for it (Cast).")]
            ///
            /// # Errors
            ///
            /// Fails with an out of range, non-integral, or non-finite error.
            pub fn new(raw: impl Into<f64>) -> $crate::XyResult<Self> {
                <Self as $crate::Scalar>::cast(raw.into())
            }
        }

        impl ::std::fmt::Debug for $scalar_ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($scalar_ty), self.0)
            }
        }

        impl ::std::fmt::Display for $scalar_ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<f64> for $scalar_ty {
            type Error = $crate::XyError;

            fn try_from(raw: f64) -> Result<Self, Self::Error> {
                <Self as $crate::Scalar>::cast(raw)
            }
        }

        impl From<$scalar_ty> for f64 {
            fn from(it: $scalar_ty) -> Self { <$scalar_ty as $crate::Scalar>::to_f64(it) }
        }

        impl ::serde::Serialize for $scalar_ty {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $scalar_ty {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <f64 as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::Scalar>::cast(raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}
