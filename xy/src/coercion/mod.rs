// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The coercion calculus: turning a raw [`f64`] into a valid value of a
//! [`ScalarKind`], under one of the [`Coercion`] policies.
//!
//! | Policy  | Shapes                 | Behavior                                            |
//! |---------|------------------------|-----------------------------------------------------|
//! | Cast    | Integral, Fractional   | Value must already be valid, otherwise an error     |
//! | Clamp   | Integral, Fractional   | Truncate toward zero (Integral only), then saturate |
//! | Ceil    | Integral               | Ceiling, then saturate                              |
//! | Floor   | Integral               | Floor, then saturate                                |
//! | Round   | Integral               | Round half away from zero, then saturate            |
//! | Trunc   | Integral               | Truncate toward zero, then saturate                 |
//!
//! Rounding always happens before saturation. Ceiling `65535.2` for a 16 bit unsigned
//! kind gives `65536`, which then saturates to `65535`.
//!
//! [`ScalarKind`]: crate::ScalarKind

// Attach sources.
pub mod coerce;
pub mod coercion_policy;

// Re-export.
pub use coerce::*;
pub use coercion_policy::*;
