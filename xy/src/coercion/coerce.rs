// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Coercion, ScalarKind, XyError, XyResult};

/// Turn `raw` into a value that is valid for `kind`, using `policy`. This is the only
/// place in the crate where bounded values come from.
///
/// The returned [`f64`] is finite, inside `[kind.min, kind.max]`, whole if `kind` is
/// integral, and never negative zero.
///
/// # Errors
///
/// - [`XyError::NotFinite`] if `raw` is `NaN` (any policy), or `±inf` under any policy
///   but [`Coercion::Clamp`], which saturates it.
/// - [`XyError::OutOfRange`] or [`XyError::NonIntegral`] under [`Coercion::Cast`] only.
/// - [`XyError::PolicyNotApplicable`] for an integral-only policy on a fractional kind.
pub fn coerce(kind: &ScalarKind, policy: Coercion, raw: f64) -> XyResult<f64> {
    if !policy.applies_to(kind.shape) {
        tracing::debug!(
            message = "Coercion policy rejected",
            kind = kind.name,
            %policy
        );
        return Err(XyError::PolicyNotApplicable {
            kind: kind.name,
            policy,
        });
    }

    if raw.is_nan() || (raw.is_infinite() && policy != Coercion::Clamp) {
        tracing::debug!(message = "Not a finite number", kind = kind.name, raw, %policy);
        return Err(XyError::NotFinite {
            kind: kind.name,
            value: raw,
        });
    }

    let value = match policy {
        Coercion::Cast => cast(kind, raw)?,
        _ => {
            let whole = if kind.is_integral() {
                policy.to_whole(raw)
            } else {
                raw
            };
            let saturated = kind.saturate(whole);
            if saturated != raw {
                tracing::trace!(
                    message = "Coerced value",
                    kind = kind.name,
                    %policy,
                    raw,
                    saturated
                );
            }
            // Saturation bounds are whole numbers, so this only trips if rounding broke.
            if kind.is_integral() && saturated.fract() != 0.0 {
                return Err(XyError::NonIntegral {
                    kind: kind.name,
                    value: saturated,
                });
            }
            saturated
        }
    };

    Ok(normalize_zero(value))
}

fn cast(kind: &ScalarKind, raw: f64) -> XyResult<f64> {
    if raw < kind.min || raw > kind.max {
        tracing::debug!(message = "Cast out of range", kind = kind.name, raw);
        return Err(XyError::OutOfRange {
            kind: kind.name,
            value: raw,
            min: kind.min,
            max: kind.max,
        });
    }
    if kind.is_integral() && raw.fract() != 0.0 {
        tracing::debug!(message = "Cast of non-integral value", kind = kind.name, raw);
        return Err(XyError::NonIntegral {
            kind: kind.name,
            value: raw,
        });
    }
    Ok(raw)
}

/// `-0.0 == 0.0`, so this maps both to positive zero.
fn normalize_zero(value: f64) -> f64 { if value == 0.0 { 0.0 } else { value } }
