//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API.

use crate::{EngineError, ResultEngine};

/// Trim a user supplied name and reject it when nothing is left.
pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}
