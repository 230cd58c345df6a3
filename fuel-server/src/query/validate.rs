//! Query configuration validation against reference data.

use serde::Serialize;

use crate::fuelcheck::ReferenceData;

use super::config::QueryConfig;

/// Outcome of validating a [`QueryConfig`].
///
/// Every violation is collected; validation never stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A failed result carrying a single message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::from_errors(vec![message.into()])
    }
}

/// Check location mode, fuel types and brands.
///
/// Only active reference entries count as valid. Brands are not checked
/// when the list is empty or contains `SelectAll`.
///
/// # Examples
///
/// ```
/// use fuel_server::fuelcheck::{FuelTypeItem, FuelTypeList, ReferenceData};
/// use fuel_server::query::{QueryConfig, validate_config};
///
/// let reference = ReferenceData {
///     fueltypes: FuelTypeList {
///         items: vec![FuelTypeItem { code: "E10".to_string(), isactive: true }],
///     },
///     ..Default::default()
/// };
///
/// let result = validate_config(&QueryConfig::centered("E10", -33.87, 151.21), &reference);
/// assert!(result.is_valid);
///
/// let result = validate_config(&QueryConfig::centered("XYZ", -33.87, 151.21), &reference);
/// assert_eq!(result.errors, ["Invalid fuel type: XYZ"]);
/// ```
pub fn validate_config(config: &QueryConfig, reference: &ReferenceData) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(e) = config.location_mode() {
        errors.push(e.to_string());
    }

    let active_fuel_types = reference.active_fuel_types();
    let codes = config.fuel_type.codes();
    if codes.is_empty() {
        errors.push("Invalid fuel type: none selected".to_string());
    } else {
        let invalid: Vec<&str> = codes
            .iter()
            .map(String::as_str)
            .filter(|code| !active_fuel_types.contains(code))
            .collect();
        if !invalid.is_empty() {
            errors.push(format!("Invalid fuel type: {}", invalid.join(", ")));
        }
    }

    if config.filters_brands() {
        let active_brands = reference.active_brands();
        let invalid: Vec<&str> = config
            .brands
            .iter()
            .map(String::as_str)
            .filter(|brand| !active_brands.contains(brand))
            .collect();
        if !invalid.is_empty() {
            errors.push(format!("Invalid brands: {}", invalid.join(", ")));
        }
    }

    ValidationResult::from_errors(errors)
}
