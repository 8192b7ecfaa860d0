// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bounded scalar kinds. Each kind is a newtype over a native number that can only be
//! created through the [coercion calculus](crate::coercion).
//!
//! | Type         | Shape      | Range                        | Stored as |
//! |--------------|------------|------------------------------|-----------|
//! | [`U4`]       | Integral   | `0 ..= 15`                   | [`u8`]    |
//! | [`U8`]       | Integral   | `0 ..= 255`                  | [`u8`]    |
//! | [`U16`]      | Integral   | `0 ..= 65535`                | [`u16`]   |
//! | [`U32`]      | Integral   | `0 ..= 4294967295`           | [`u32`]   |
//! | [`I4`]       | Integral   | `-8 ..= 7`                   | [`i8`]    |
//! | [`I8`]       | Integral   | `-128 ..= 127`               | [`i8`]    |
//! | [`I16`]      | Integral   | `-32768 ..= 32767`           | [`i16`]   |
//! | [`I32`]      | Integral   | `-2147483648 ..= 2147483647` | [`i32`]   |
//! | [`Fraction`] | Fractional | `0 ..= 1`                    | [`f64`]   |
//! | [`Float`]    | Fractional | `f64::MIN ..= f64::MAX`      | [`f64`]   |
//!
//! [`u8`]: prim@u8
//! [`u16`]: prim@u16
//! [`u32`]: prim@u32
//! [`i8`]: prim@i8
//! [`i16`]: prim@i16
//! [`i32`]: prim@i32
//! [`f64`]: prim@f64

// Attach sources.
pub mod fractional_kinds;
pub mod integral_kinds;
pub mod scalar_impl_macros;
pub mod scalar_kind;
pub mod scalar_kind_id;
pub mod scalar_trait;

// Re-export.
pub use fractional_kinds::*;
pub use integral_kinds::*;
pub use scalar_kind::*;
pub use scalar_kind_id::*;
pub use scalar_trait::*;
