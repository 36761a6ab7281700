//! Shared helpers for the end-to-end calculation tests.

use reckon::Number;
use uuid::Uuid;

/// A fresh user id for a test case.
pub fn user_id() -> Uuid {
    Uuid::new_v4()
}

/// Converts integer values into calculation inputs.
pub fn ints(values: &[i64]) -> Vec<Number> {
    values.iter().copied().map(Number::from).collect()
}
