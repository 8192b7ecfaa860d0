// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_xy
//!
//! Bounded numeric kinds, and a two component vector [`XY`] generic over them.
//!
//! Every kind ([`U4`], [`U8`], [`U16`], [`U32`], [`I4`], [`I8`], [`I16`], [`I32`],
//! [`Fraction`], [`Float`]) has a closed range, and integral kinds only hold whole
//! numbers. Getting a raw `f64` into a kind always goes through a [`Coercion`]:
//!
//! | Policy  | Out of range | Fractional input (integral kinds) |
//! | ------- | ------------ | --------------------------------- |
//! | `Cast`  | error        | error                             |
//! | `Clamp` | saturate     | truncate toward zero              |
//! | `Ceil`  | saturate     | round up                          |
//! | `Floor` | saturate     | round down                        |
//! | `Round` | saturate     | round half away from zero         |
//! | `Trunc` | saturate     | truncate toward zero              |
//!
//! `Ceil`, `Floor`, `Round` and `Trunc` only exist on vectors over integral kinds. `NaN`
//! is rejected by every policy, and `±inf` by every policy except `Clamp`.
//!
//! ```
//! use r3bl_xy::{XyU16, XyResult};
//!
//! fn main() -> XyResult<()> {
//!     let mut it = XyU16::new((10, 20))?;
//!     it.add_clamp((65_530, 1))?.div_round((2, 3))?;
//!     assert_eq!(it.to_string(), "(32768, 7)");
//!     assert_eq!(it.ser_to_string()?, r#"{"x":32768,"y":7}"#);
//!     Ok(())
//! }
//! ```
//!
//! Vector operations are all or nothing: when either component fails to coerce, the
//! vector is left as it was and an [`XyError`] comes back.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod coercion;
pub mod common;
pub mod log;
pub mod scalar;
pub mod shape;
pub mod xy;

// Re-export.
pub use coercion::*;
pub use common::*;
pub use log::*;
pub use scalar::*;
pub use shape::*;
pub use xy::*;
