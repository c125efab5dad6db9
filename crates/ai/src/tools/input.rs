//! Free-text argument cleanup shared by all tools.

use crate::error::AiError;

/// Trim whitespace and strip one layer of matching quotes.
///
/// Agents often pass `'Japan'` or `"JPY"` verbatim from their reasoning.
pub fn normalize_input(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['\'', '"', '`'] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}

/// Normalized input, or an error naming what was expected.
pub fn require_input<'a>(raw: &'a str, what: &str) -> Result<&'a str, AiError> {
    let value = normalize_input(raw);
    if value.is_empty() {
        return Err(AiError::invalid_input(format!("{} must not be empty", what)));
    }
    Ok(value)
}
