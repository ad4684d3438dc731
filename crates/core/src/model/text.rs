use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Returns the trimmed text, or `TextError::Empty` naming the offending field.
///
/// # Errors
///
/// Returns `TextError::Empty` if `value` is blank.
pub fn require_text(field: &'static str, value: impl Into<String>) -> Result<String, TextError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextError::Empty { field });
    }
    Ok(trimmed.to_string())
}

/// Validates every entry of a list, keeping the original order.
///
/// # Errors
///
/// Returns `TextError::Empty` for the first blank entry.
pub fn require_texts(
    field: &'static str,
    values: impl IntoIterator<Item = String>,
) -> Result<Vec<String>, TextError> {
    values
        .into_iter()
        .map(|value| require_text(field, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("title", "  Hello ").unwrap(), "Hello");
    }

    #[test]
    fn require_text_names_field() {
        let err = require_text("question", " \n").unwrap_err();
        assert_eq!(err.to_string(), "question cannot be empty");
    }
}
