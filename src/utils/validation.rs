use crate::utils::error::{Result, RideError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Status spellings accepted on the wire.
pub const RECOGNIZED_STATUSES: [&str; 2] = ["AVAILABLE", "UNAVAILABLE"];

const RATING_MIN: u8 = 1;
const RATING_MAX: u8 = 5;

fn vin_pattern() -> &'static Regex {
    static VIN: OnceLock<Regex> = OnceLock::new();
    VIN.get_or_init(|| Regex::new(r"^[A-Za-z0-9]{17}$").unwrap())
}

pub fn is_positive_id(id: u64) -> bool {
    id > 0
}

pub fn is_valid_vin(vin: &str) -> bool {
    vin_pattern().is_match(vin)
}

pub fn is_recognized_status(status: &str) -> bool {
    RECOGNIZED_STATUSES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(status))
}

pub fn validate_positive_id(field_name: &str, id: u64) -> Result<()> {
    if !is_positive_id(id) {
        return Err(RideError::InvalidArgument {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "ID must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_vin(field_name: &str, vin: &str) -> Result<()> {
    if !is_valid_vin(vin) {
        return Err(RideError::InvalidArgument {
            field: field_name.to_string(),
            value: vin.to_string(),
            reason: "VIN must be exactly 17 alphanumeric characters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_status(field_name: &str, status: &str) -> Result<()> {
    if !is_recognized_status(status) {
        return Err(RideError::InvalidArgument {
            field: field_name.to_string(),
            value: status.to_string(),
            reason: format!(
                "Unrecognized status. Valid statuses: {}",
                RECOGNIZED_STATUSES.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RideError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_rating(field_name: &str, rating: u8) -> Result<()> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(RideError::InvalidArgument {
            field: field_name.to_string(),
            value: rating.to_string(),
            reason: format!("Rating must be between {} and {}", RATING_MIN, RATING_MAX),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RideError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[String],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        if let Some(extension) = std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            if !allowed_set.contains(extension) {
                return Err(RideError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
        } else {
            return Err(RideError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: file.clone(),
                reason: "File has no extension or invalid filename".to_string(),
            });
        }
    }

    Ok(())
}
