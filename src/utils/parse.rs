//! Parsing of ad-hoc integer lists given on the command line.

use log::warn;

use crate::error::ParseError;

/// Array used when an ad-hoc literal cannot be parsed
pub const DEFAULT_ARRAY: [i64; 9] = [7, 1, 4, 9, 2, 8, 3, 6, 5];

/// Parse a comma-separated integer list such as `"7, 1, -4"`.
/// Surrounding brackets are accepted: `"[7,1,-4]"`.
pub fn parse_array(literal: &str) -> Result<Vec<i64>, ParseError> {
    let trimmed = literal.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    if inner.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    inner
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|source| ParseError::InvalidInteger {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse `literal`, falling back to [`DEFAULT_ARRAY`] with a warning
pub fn parse_array_or_default(literal: &str) -> Vec<i64> {
    parse_array(literal).unwrap_or_else(|err| {
        warn!("{err}; using default array {:?}", DEFAULT_ARRAY);
        DEFAULT_ARRAY.to_vec()
    })
}
