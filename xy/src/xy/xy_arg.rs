// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Arguments accepted by [`XY`] operations: two raw numbers, or one `{x, y}` record. See
//! [`XyArg`].
//!
//! [`XY`]: crate::XY

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Scalar, XY, XyError, XyResult, is_plain_structural_value};

/// Unbounded `{x, y}` record. This is what every [`XyArg`] boils down to before the
/// coercion calculus runs on each component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawXy {
    pub x: f64,
    pub y: f64,
}

impl RawXy {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Resolve the two loosely typed argument shapes:
    /// - `first` is a record (`{"x": 1, "y": 2}`) or a sequence (`[1, 2]`), and `second`
    ///   is absent. A record may leave out a component, which then reads as `0`.
    /// - `first` and `second` are both numbers.
    ///
    /// # Errors
    ///
    /// [`XyError::MalformedInput`] for anything else.
    pub fn from_json_args(first: &Value, second: Option<&Value>) -> XyResult<Self> {
        if is_plain_structural_value(first) {
            if second.is_some() {
                return Err(XyError::malformed(
                    "a record argument can't be followed by a second coordinate",
                ));
            }
            return Self::from_structural(first);
        }

        match (first.as_f64(), second.and_then(Value::as_f64)) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(XyError::malformed(format!(
                "expected two numbers or one {{x, y}} record, got {first} and {}",
                second.map_or_else(|| "nothing".to_string(), Value::to_string)
            ))),
        }
    }

    fn from_structural(value: &Value) -> XyResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                x: number_field(map, "x")?,
                y: number_field(map, "y")?,
            }),
            Value::Array(items) => match items.as_slice() {
                [x, y] => match (x.as_f64(), y.as_f64()) {
                    (Some(x), Some(y)) => Ok(Self { x, y }),
                    _ => Err(XyError::malformed(format!(
                        "sequence {value} must hold two numbers"
                    ))),
                },
                _ => Err(XyError::malformed(format!(
                    "sequence {value} must have exactly two items"
                ))),
            },
            _ => Err(XyError::malformed(format!("{value} is not a record"))),
        }
    }
}

/// A missing field reads as `0`, matching the sparse JSON that signed kinds write.
fn number_field(map: &Map<String, Value>, name: &str) -> XyResult<f64> {
    match map.get(name) {
        None => Ok(0.0),
        Some(value) => value.as_f64().ok_or_else(|| {
            XyError::malformed(format!("record field `{name}` is not a number: {value}"))
        }),
    }
}

/// Anything that can stand in for the `(x, y)` argument of an [`XY`] operation.
///
/// | Argument                       | Example                          |
/// |--------------------------------|----------------------------------|
/// | Tuple of two numbers           | `(5, 10)`, `(0.5_f32, 1.0_f32)`  |
/// | Array of two numbers           | `[5.0, 10.0]`                    |
/// | [`RawXy`] record               | `RawXy::new(1.0, 2.0)`           |
/// | Another vector, of any kind    | `other`, `&other`                |
/// | JSON record or pair            | `&json!({"x": 1, "y": 2})`       |
///
/// A vector of a different kind is read as two raw numbers, which the receiving vector
/// then coerces into its own kind.
///
/// [`XY`]: crate::XY
pub trait XyArg {
    /// # Errors
    ///
    /// [`XyError::MalformedInput`] if this argument has no `x` and `y` to offer.
    fn try_into_raw_xy(self) -> XyResult<RawXy>;
}

impl<T: Into<f64>> XyArg for (T, T) {
    fn try_into_raw_xy(self) -> XyResult<RawXy> {
        let (x, y) = self;
        Ok(RawXy::new(x.into(), y.into()))
    }
}

impl<T: Into<f64>> XyArg for [T; 2] {
    fn try_into_raw_xy(self) -> XyResult<RawXy> {
        let [x, y] = self;
        Ok(RawXy::new(x.into(), y.into()))
    }
}

impl XyArg for RawXy {
    fn try_into_raw_xy(self) -> XyResult<RawXy> { Ok(self) }
}

impl<K: Scalar> XyArg for XY<K> {
    fn try_into_raw_xy(self) -> XyResult<RawXy> {
        Ok(RawXy::new(self.x().to_f64(), self.y().to_f64()))
    }
}

impl<K: Scalar> XyArg for &XY<K> {
    fn try_into_raw_xy(self) -> XyResult<RawXy> { (*self).try_into_raw_xy() }
}

impl XyArg for &Value {
    fn try_into_raw_xy(self) -> XyResult<RawXy> { RawXy::from_json_args(self, None) }
}
