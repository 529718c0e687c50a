use crate::error::{Error, Result};

/// Parses a direct `confirm` argument.
///
/// Only the exact literals `true` and `false` are accepted.
pub fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidBool(value.to_string())),
    }
}
