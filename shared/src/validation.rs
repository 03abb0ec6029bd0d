use validator::ValidationError;

use crate::constants::{DUPLICATE_ENTRY_CODE, EMPTY_ENTRY_CODE};

/// Trims a raw participant name and rejects it when nothing is left.
pub fn validate_entry(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(EMPTY_ENTRY_CODE));
    }
    Ok(trimmed)
}

/// Case-insensitive key used for every uniqueness check on the wheel.
pub fn entry_key(name: &str) -> String {
    name.to_lowercase()
}

pub fn validate_unique<'a, I>(candidate: &str, existing: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a String>,
{
    let key = entry_key(candidate);
    if existing.into_iter().any(|entry| entry_key(entry) == key) {
        let mut error = ValidationError::new(DUPLICATE_ENTRY_CODE);
        error.add_param("name".into(), &candidate);
        return Err(error);
    }
    Ok(())
}

pub fn is_rejection(error: &ValidationError, code: &str) -> bool {
    error.code == code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_entry_trims() {
        assert_eq!(validate_entry("  Taylor \n").unwrap(), "Taylor");
    }

    #[test]
    fn test_validate_entry_rejects_whitespace() {
        let error = validate_entry(" \t ").unwrap_err();
        assert!(is_rejection(&error, EMPTY_ENTRY_CODE));
    }

    #[test]
    fn test_validate_unique_ignores_case() {
        let existing = vec!["Morgan".to_string()];
        let error = validate_unique("MORGAN", &existing).unwrap_err();
        assert!(is_rejection(&error, DUPLICATE_ENTRY_CODE));
        assert!(validate_unique("Morgana", &existing).is_ok());
    }
}
