use crate::shared::error::ExplorerError;
use regex::Regex;
use std::sync::LazyLock;

static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+$").unwrap_or_else(|e| panic!("invalid coordinate pattern: {e}"))
});

/// CoordinateValidator service for user-entered archetype coordinates
///
/// These values end up inside a shell command line, so only the characters
/// Maven itself allows in coordinates are accepted.
pub struct CoordinateValidator;

impl CoordinateValidator {
    pub fn validate(field: &str, value: &str) -> Result<(), ExplorerError> {
        if COORDINATE_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(ExplorerError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
            })
        }
    }
}
