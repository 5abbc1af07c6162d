//! Tag validation for sourcepad.
//!
//! Both halves of a tag (its type and its name) follow the same rule: a
//! non-empty run of ASCII letters and digits.

/// Validates one half of a tag.
///
/// # Examples
/// ```
/// use sourcepad::tags::validation::validate_tag_part;
///
/// assert!(validate_tag_part("research").is_ok());
/// assert!(validate_tag_part("cs2103").is_ok());
///
/// assert!(validate_tag_part("").is_err());
/// assert!(validate_tag_part("machine learning").is_err());
/// assert!(validate_tag_part("c++").is_err());
/// ```
pub fn validate_tag_part(part: &str) -> Result<(), TagValidationError> {
    if part.is_empty() {
        return Err(TagValidationError::Empty);
    }

    match part.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
        Some(ch) => Err(TagValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

/// Error type for tag validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag type or name is empty
    Empty,
    /// Tag type or name contains a non-alphanumeric character
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tags cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "tags contain invalid character '{}' (only letters and digits allowed)",
                    ch
                )
            }
        }
    }
}

impl std::error::Error for TagValidationError {}
