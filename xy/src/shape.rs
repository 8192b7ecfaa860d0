// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Predicates about the structure of loosely typed input.

use serde_json::Value;

/// `true` if `value` should be destructured as an `{x, y}` record (a JSON object) or an
/// `[x, y]` sequence (a JSON array), rather than read as a bare number.
#[must_use]
pub fn is_plain_structural_value(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
