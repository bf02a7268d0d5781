//! Request validation shared by the API and CLI.
//!
//! Every error names the offending field so callers can surface it verbatim.

use thiserror::Error;

pub const MIN_RADIUS_KM: f64 = 0.1;
pub const MAX_RADIUS_KM: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must not be empty")]
    Blank { field: &'static str },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be between {min} and {max} {unit}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        unit: &'static str,
    },
}

impl ValidationError {
    /// Name of the request field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Blank { field }
            | Self::NotFinite { field }
            | Self::OutOfRange { field, .. } => field,
        }
    }
}

/// A search radius in kilometres, guaranteed to lie in
/// [`MIN_RADIUS_KM`]..=[`MAX_RADIUS_KM`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RadiusKm(f64);

impl RadiusKm {
    /// # Errors
    ///
    /// Returns [`ValidationError`] for `radius_km` when the value is not
    /// finite or falls outside the allowed range.
    pub fn new(km: f64) -> Result<Self, ValidationError> {
        if !km.is_finite() {
            return Err(ValidationError::NotFinite { field: "radius_km" });
        }
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&km) {
            return Err(ValidationError::OutOfRange {
                field: "radius_km",
                min: MIN_RADIUS_KM,
                max: MAX_RADIUS_KM,
                unit: "km",
            });
        }
        Ok(Self(km))
    }

    #[must_use]
    pub fn km(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for RadiusKm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.0)
    }
}

/// Trims `keyword` and rejects it when nothing is left.
///
/// # Errors
///
/// Returns [`ValidationError::Blank`] for `keyword`.
pub fn validate_keyword(keyword: &str) -> Result<&str, ValidationError> {
    non_blank("keyword", keyword)
}

/// Trims `address` and rejects it when nothing is left.
///
/// # Errors
///
/// Returns [`ValidationError::Blank`] for `address`.
pub fn validate_address(address: &str) -> Result<&str, ValidationError> {
    non_blank("address", address)
}

fn non_blank<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(trimmed)
}
