// ABOUTME: Wire encoding for whole-kilocalorie fields
// ABOUTME: The server binds calorie targets as integers and rejects `2100.0`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serializer;

// Targets far outside any plausible range are clamped rather than wrapped.
const MAX_KCAL: f64 = 1_000_000.0;

fn whole(kcal: f64) -> i64 {
    if kcal.is_finite() {
        kcal.round().clamp(-MAX_KCAL, MAX_KCAL) as i64
    } else {
        0
    }
}

/// Serialize a calorie target as a JSON integer
///
/// # Errors
///
/// Propagates the serializer's error
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(kcal: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(whole(*kcal))
}

/// Optional variant of [`serialize`]
///
/// # Errors
///
/// Propagates the serializer's error
#[allow(clippy::ref_option)]
pub fn serialize_opt<S: Serializer>(
    kcal: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match kcal {
        Some(value) => serializer.serialize_some(&whole(*value)),
        None => serializer.serialize_none(),
    }
}
