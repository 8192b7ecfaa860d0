// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter, Result},
          ops::{Add, AddAssign, Sub, SubAssign}};

use crate::{Coercion, Float, Fraction, I4, I8, I16, I32, Scalar, U4, U8, U16, U32,
            XyArg, XyResult};

/// `XY` holds an `x` and a `y` of one bounded scalar kind `K`. Both components are
/// valid values of `K` at every point a caller can observe.
///
/// ```text
///         0    1    2    3    4    5
///       ┌────┴────┴────┴────┴────┴──→ x
///     0 ┤
///     1 ┤              ● (3, 2)
///     2 ┤
///       ↓
///       y
/// ```
///
/// # The many ways to create one
///
/// - [`XY::new()`] runs [`Coercion::Cast`] on both components, so it fails for values
///   that don't fit.
/// - [`XY::clamp()`], and for integral kinds [`XY::ceil()`], [`XY::floor()`],
///   [`XY::round()`], [`XY::trunc()`], saturate out of range input instead.
/// - [`From<(K, K)>`] takes two already valid scalars.
///
/// Any [`XyArg`] works as the argument: `(x, y)`, `[x, y]`, another vector, a
/// [`RawXy`], or a JSON record.
///
/// # Operations
///
/// Every mutating method comes in one variant per policy that `K` supports, returns
/// `XyResult<&mut Self>` so calls chain with `?`, and either updates both components or
/// neither.
///
/// | Family                                    | Cast    | Clamp           | Integral kinds only                     |
/// |-------------------------------------------|---------|-----------------|-----------------------------------------|
/// | set, add, sub, mul, div, min, max, abs    | `add()` | `add_clamp()`   | `add_ceil()`, `add_floor()`, `add_round()`, `add_trunc()` |
/// | area, magnitude, dot                      | `area()`| `area_clamp()`  | plus `area_num()` for the raw [`f64`]   |
///
/// ```
/// use r3bl_xy::{Scalar, U16, XY, XyResult};
///
/// fn main() -> XyResult<()> {
///     let mut it: XY<U16> = XY::new((5, 10))?;
///     it.add_ceil((65_534.2, -3.7))?;
///     assert_eq!(it.to_string(), "(65535, 7)");
///
///     it.set((3, 4))?.mul((2, 2))?;
///     assert_eq!(it.magnitude()?.get(), 10);
///     assert!(it.div((0, 1)).is_err());
///     assert_eq!(it.to_string(), "(6, 8)");
///     Ok(())
/// }
/// ```
///
/// [`From<(K, K)>`]: std::convert::From
/// [`RawXy`]: crate::RawXy
/// [`f64`]: prim@f64
#[derive(Copy, Clone, PartialEq, Default)]
pub struct XY<K: Scalar> {
    x: K,
    y: K,
}

pub type XyU4 = XY<U4>;
pub type XyU8 = XY<U8>;
pub type XyU16 = XY<U16>;
pub type XyU32 = XY<U32>;
pub type XyI4 = XY<I4>;
pub type XyI8 = XY<I8>;
pub type XyI16 = XY<I16>;
pub type XyI32 = XY<I32>;
pub type XyFraction = XY<Fraction>;
pub type XyFloat = XY<Float>;

mod constructor {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<K: Scalar> XY<K> {
        /// Both components at `0`, which every kind can hold.
        #[must_use]
        pub fn zero() -> Self { Self::default() }

        /// Creates a vector from `arg` under `policy`.
        ///
        /// # Errors
        ///
        /// Fails if `arg` is malformed, or if either component can't be coerced.
        pub fn try_new_with(policy: Coercion, arg: impl XyArg) -> XyResult<Self> {
            let mut it = Self::zero();
            it.assign_with(policy, arg)?;
            Ok(it)
        }
    }

    impl<K: Scalar> From<(K, K)> for XY<K> {
        fn from((x, y): (K, K)) -> Self { Self { x, y } }
    }

    impl<K: Scalar> From<XY<K>> for (K, K) {
        fn from(it: XY<K>) -> Self { (it.x, it.y) }
    }
}

mod accessors {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<K: Scalar> XY<K> {
        #[must_use]
        pub fn x(&self) -> K { self.x }

        #[must_use]
        pub fn y(&self) -> K { self.y }

        /// Replace `x` with `raw`, using [`Coercion::Cast`].
        ///
        /// # Errors
        ///
        /// Fails if `raw` isn't a valid value of `K`. `x` is unchanged in that case.
        pub fn set_x(&mut self, raw: impl Into<f64>) -> XyResult<&mut Self> {
            self.x = K::cast(raw.into())?;
            Ok(self)
        }

        /// Replace `y` with `raw`, using [`Coercion::Cast`].
        ///
        /// # Errors
        ///
        /// Fails if `raw` isn't a valid value of `K`. `y` is unchanged in that case.
        pub fn set_y(&mut self, raw: impl Into<f64>) -> XyResult<&mut Self> {
            self.y = K::cast(raw.into())?;
            Ok(self)
        }

        /// Store two already coerced components. Callers must finish all fallible work
        /// before calling this, so a failure never leaves half an update behind.
        pub(crate) fn commit(&mut self, x: K, y: K) -> &mut Self {
            self.x = x;
            self.y = y;
            self
        }

        /// An independent vector with the same components.
        #[must_use]
        pub fn copy(&self) -> Self { *self }

        /// Exact comparison of both components against `arg`. A malformed `arg` is never
        /// equal.
        pub fn eq_xy(&self, arg: impl XyArg) -> bool {
            arg.try_into_raw_xy()
                .is_ok_and(|raw| self.x.to_f64() == raw.x && self.y.to_f64() == raw.y)
        }
    }
}

mod ops {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    // Operator overloads saturate like the other dimension types in this workspace. Use
    // `add()` / `sub()` to fail on overflow instead.
    fn saturate<K: Scalar>(raw: f64) -> K { K::coerce_clamp(raw).unwrap_or_default() }

    impl<K: Scalar> Add<XY<K>> for XY<K> {
        type Output = XY<K>;

        fn add(self, rhs: XY<K>) -> Self::Output {
            XY {
                x: saturate(self.x.to_f64() + rhs.x.to_f64()),
                y: saturate(self.y.to_f64() + rhs.y.to_f64()),
            }
        }
    }

    impl<K: Scalar> AddAssign<XY<K>> for XY<K> {
        fn add_assign(&mut self, rhs: XY<K>) { *self = *self + rhs; }
    }

    impl<K: Scalar> Sub<XY<K>> for XY<K> {
        type Output = XY<K>;

        fn sub(self, rhs: XY<K>) -> Self::Output {
            XY {
                x: saturate(self.x.to_f64() - rhs.x.to_f64()),
                y: saturate(self.y.to_f64() - rhs.y.to_f64()),
            }
        }
    }

    impl<K: Scalar> SubAssign<XY<K>> for XY<K> {
        fn sub_assign(&mut self, rhs: XY<K>) { *self = *self - rhs; }
    }
}

mod formatter {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl<K: Scalar> Display for XY<K> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "({}, {})", self.x, self.y) }
    }

    impl<K: Scalar> Debug for XY<K> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "XY<{}>({}, {})", K::KIND.name, self.x, self.y)
        }
    }
}
