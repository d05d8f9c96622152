use crate::error::{Error, Result};

pub const HYPHEN: &str = "!HYPHEN";
pub const YEAR: &str = "!YEAR";
pub const DIGITS: &str = "!DIGITS";

/// Map a raw token to the key the feature builders look up.
///
/// - hyphenated words (anything containing `-` except `-` itself) become `!HYPHEN`
/// - four digit numbers become `!YEAR`
/// - anything else starting with a digit becomes `!DIGITS`
/// - all other words are lowercased with Unicode case folding rules
///   (`str::to_lowercase`), not just ASCII
pub fn normalize(token: &str) -> Result<String> {
    if token.is_empty() {
        return Err(Error::InvalidInput("empty token".into()));
    }
    let key = if token.contains('-') && token != "-" {
        HYPHEN.to_string()
    } else if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
        YEAR.to_string()
    } else if token.as_bytes()[0].is_ascii_digit() {
        DIGITS.to_string()
    } else {
        token.to_lowercase()
    };
    Ok(key)
}

/// Normalize every token of a sentence, failing on the first empty one.
pub fn normalize_all<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            normalize(t.as_ref()).map_err(|_| Error::InvalidInput(format!("empty token at position {i}")))
        })
        .collect()
}
