// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::generate_integral_scalar_impl;

/// Unsigned 4 bit integer, `0 ..= 15`. Handy for small grid cells and palette indices.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct U4(u8);
generate_integral_scalar_impl!(U4, u8, 0, 15, false);

/// Unsigned 8 bit integer, `0 ..= 255`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct U8(u8);
generate_integral_scalar_impl!(U8, u8, u8::MIN, u8::MAX, false);

/// Unsigned 16 bit integer, `0 ..= 65535`. The usual choice for pixel sizes and terminal
/// positions.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct U16(u16);
generate_integral_scalar_impl!(U16, u16, u16::MIN, u16::MAX, false);

/// Unsigned 32 bit integer, `0 ..= 4294967295`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct U32(u32);
generate_integral_scalar_impl!(U32, u32, u32::MIN, u32::MAX, false);

/// Signed 4 bit integer, `-8 ..= 7`.
///
/// Signed kinds describe offsets, which are mostly zero along one axis, so vectors of
/// these kinds serialize sparsely (zero components are left out of the JSON).
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct I4(i8);
generate_integral_scalar_impl!(I4, i8, -8, 7, true);

/// Signed 8 bit integer, `-128 ..= 127`. Serializes sparsely, see [`I4`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct I8(i8);
generate_integral_scalar_impl!(I8, i8, i8::MIN, i8::MAX, true);

/// Signed 16 bit integer, `-32768 ..= 32767`. Serializes sparsely, see [`I4`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct I16(i16);
generate_integral_scalar_impl!(I16, i16, i16::MIN, i16::MAX, true);

/// Signed 32 bit integer, `-2147483648 ..= 2147483647`. Serializes sparsely, see
/// [`I4`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct I32(i32);
generate_integral_scalar_impl!(I32, i32, i32::MIN, i32::MAX, true);
