//! Field validators shared by the domain entities.
//!
//! Every entity field goes through exactly one of these helpers, so
//! the rejection rules (and the [`ValidationError`] fields they
//! produce) stay consistent across Profile, Item, and Favorite.

use crate::server::error::validate::{ValidationError, ValidationReason};

/// Trim surrounding whitespace, drop ASCII control characters, and
/// enforce the non-empty / maximum-length contract shared by every
/// free-text field. Returns the sanitized value.
pub fn sanitize_text(
    field: &'static str,
    input: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let cleaned: String = input.trim().chars().filter(|c| !c.is_control()).collect();

    if cleaned.is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Empty));
    }
    if cleaned.chars().count() > max {
        return Err(ValidationError::new(field, ValidationReason::TooLong(max)));
    }

    Ok(cleaned)
}

/// Structural email check: one `@`, a non-empty local part, and a
/// dotted domain. At most 128 characters.
pub fn validate_email(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let email = sanitize_text(field, input, 128)?;

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::new(field, ValidationReason::InvalidEmail));
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None)
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(email)
        }
        _ => Err(ValidationError::new(field, ValidationReason::InvalidEmail)),
    }
}

/// Credential fields (activation token, password hash, password salt)
/// are fixed-length lowercase hexadecimal. Anything else is rejected,
/// including uppercase hex.
pub fn require_hex(
    field: &'static str,
    input: &str,
    len: usize,
) -> Result<String, ValidationError> {
    let value = input.trim();

    let all_lower_hex = value
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());

    if value.len() != len || !all_lower_hex {
        return Err(ValidationError::new(field, ValidationReason::NotHex(len)));
    }

    Ok(value.to_string())
}

/// Surrogate and foreign keys are strictly positive.
pub fn require_positive(field: &'static str, id: i32) -> Result<i32, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::new(field, ValidationReason::NotPositive));
    }

    Ok(id)
}

/// A monetary amount must be finite and non-negative; a zero-cost
/// item (free sample) is valid.
pub fn validate_cost(field: &'static str, cost: f64) -> Result<f64, ValidationError> {
    if !cost.is_finite() {
        return Err(ValidationError::new(field, ValidationReason::NotFinite));
    }
    if cost < 0.0 {
        return Err(ValidationError::new(field, ValidationReason::Negative));
    }

    Ok(cost)
}
