// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! JSON shape of an [`XY`]: `{"x": <number>, "y": <number>}`.
//!
//! Kinds with [`ScalarKind::sparse_json`] set (the signed integer kinds) leave out a
//! component that is `0`, so `XY<I16>` at `(0, -3)` serializes as `{"y":-3}`. Readers
//! treat a missing component as `0`, for every kind.
//!
//! [`ScalarKind::sparse_json`]: crate::ScalarKind::sparse_json

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeStruct};
use serde_json::Value;

use crate::{RawXy, Scalar, XY, XyResult};

impl<K: Scalar> Serialize for XY<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sparse = K::KIND.sparse_json;
        let mut state = serializer.serialize_struct("XY", 2)?;
        for (name, value) in [("x", self.x()), ("y", self.y())] {
            if sparse && value.is_zero() {
                state.skip_field(name)?;
            } else {
                state.serialize_field(name, &value)?;
            }
        }
        state.end()
    }
}

impl<'de, K: Scalar> Deserialize<'de> for XY<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawXy::deserialize(deserializer)?;
        XY::new(raw).map_err(serde::de::Error::custom)
    }
}

impl<K: Scalar> XY<K> {
    /// # Errors
    ///
    /// Serializing plain numbers doesn't fail in practice. The error is kept to match
    /// [`serde_json::to_value()`].
    pub fn to_json(&self) -> XyResult<Value> { Ok(serde_json::to_value(self)?) }

    /// Reads an `{x, y}` record, filling in a missing component with `0`.
    ///
    /// # Errors
    ///
    /// Fails if `value` isn't a record with numeric (or missing) `x` and `y`, or if the
    /// numbers aren't valid for `K`.
    pub fn from_json(value: &Value) -> XyResult<Self> {
        let raw = RawXy::deserialize(value)?;
        Self::new(raw)
    }

    /// # Errors
    ///
    /// See [`XY::to_json()`].
    pub fn ser_to_string(&self) -> XyResult<String> { Ok(serde_json::to_string(self)?) }

    /// # Errors
    ///
    /// Fails on invalid JSON, and otherwise as [`XY::from_json()`] does.
    pub fn deser_from_str(ser_str: &str) -> XyResult<Self> {
        let raw: RawXy = serde_json::from_str(ser_str)?;
        Self::new(raw)
    }

    /// Plain `{x, y}` record with both components, regardless of sparseness.
    #[must_use]
    pub fn to_raw(&self) -> RawXy { RawXy::new(self.x().to_f64(), self.y().to_f64()) }
}

impl<K: Scalar> From<XY<K>> for RawXy {
    fn from(it: XY<K>) -> Self { it.to_raw() }
}

/// Same as [`XY::new()`].
impl<K: Scalar> TryFrom<RawXy> for XY<K> {
    type Error = crate::XyError;

    fn try_from(raw: RawXy) -> Result<Self, Self::Error> { Self::new(raw) }
}

#[cfg(test)]
mod tests {
    use crate::{Scalar, XY, XyError, XyFloat, XyFraction, XyI16, XyU8, XyU16};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_dense_kind_writes_both_fields() {
        let it = XyU16::new((0, 7)).unwrap();
        assert_eq!(it.to_json().unwrap(), json!({"x": 0, "y": 7}));
        assert_eq!(it.ser_to_string().unwrap(), r#"{"x":0,"y":7}"#);
    }

    fn to_text<K: Scalar>(it: XY<K>) -> String { serde_json::to_string(&it).unwrap() }

    #[test]
    fn test_components_keep_their_native_number_type() {
        assert_eq!(to_text(XyU16::new((300, 0)).unwrap()), r#"{"x":300,"y":0}"#);
        assert_eq!(to_text(XyFloat::new((2.5, -1.0)).unwrap()), r#"{"x":2.5,"y":-1.0}"#);
    }

    #[test]
    fn test_sparse_kind_skips_zero_fields() {
        let it = XyI16::new((0, -3)).unwrap();
        assert_eq!(it.ser_to_string().unwrap(), r#"{"y":-3}"#);
        assert_eq!(XyI16::zero().ser_to_string().unwrap(), "{}");
        let it = XyI16::new((5, -3)).unwrap();
        assert_eq!(it.ser_to_string().unwrap(), r#"{"x":5,"y":-3}"#);
    }

    #[test]
    fn test_missing_fields_read_as_zero() {
        let it = XyI16::deser_from_str(r#"{"y":-3}"#).unwrap();
        assert_eq!(it, XyI16::new((0, -3)).unwrap());
        let it = XyU8::from_json(&json!({})).unwrap();
        assert_eq!(it, XyU8::zero());
    }

    #[test]
    fn test_sparse_json_feeds_back_as_an_argument() {
        let it = XyI16::new((0, -3)).unwrap();
        let json = it.to_json().unwrap();
        assert_eq!(json, json!({"y": -3}));

        assert_eq!(XyI16::new(&json).unwrap(), it);
        assert!(it.eq_xy(&json));

        let mut other = XyI16::new((7, 7)).unwrap();
        other.set(&json).unwrap().add(&json).unwrap();
        assert_eq!(other.to_string(), "(0, -6)");
    }

    #[test]
    fn test_round_trip() {
        let it = XyFraction::new((0.125, 1.0)).unwrap();
        let back = XyFraction::from_json(&it.to_json().unwrap()).unwrap();
        assert_eq!(back, it);

        let it = XyI16::new((0, -32_768)).unwrap();
        let back: XyI16 = serde_json::from_str(&it.ser_to_string().unwrap()).unwrap();
        assert!(back.eq_xy(it));
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(matches!(
            XyU8::deser_from_str(r#"{"x":256,"y":0}"#),
            Err(XyError::OutOfRange { .. })
        ));
        assert!(matches!(
            XyU8::deser_from_str(r#"{"x":"1","y":0}"#),
            Err(XyError::Json(_))
        ));
        assert!(serde_json::from_str::<XyU8>(r#"{"x":1.5}"#).is_err());
    }

    #[test]
    fn test_raw_conversions() {
        let it = XyU8::new((1, 2)).unwrap();
        let raw = it.to_raw();
        assert_eq!((raw.x, raw.y), (1.0, 2.0));
        assert_eq!(XyU8::try_from(raw).unwrap(), it);
    }
}
