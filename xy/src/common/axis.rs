// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Names one of the two components of an [`XY`] vector. Used in error reports so the
/// caller knows which component could not be computed.
///
/// [`XY`]: crate::XY
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}
