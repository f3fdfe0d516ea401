use std::io;
use thiserror::Error;

/// Errors surfaced by the argument parser and its configuration helpers.
///
/// Token content never produces an error: malformed numbers become NaN and
/// missing values become [`OptionValue::Missing`](crate::OptionValue::Missing).
#[derive(Error, Debug)]
pub enum Error {
    /// A hint was declared with a type outside boolean/number/string/path.
    #[error("invalid hint for '{name}': '{value}' (expected boolean, number, string or path)")]
    InvalidHint { name: String, value: String },

    /// The argument offset variable isn't a non-negative integer.
    #[error("invalid argument offset '{0}' (expected a non-negative integer)")]
    InvalidOffset(String),

    /// The injected working-directory getter failed while resolving a path value.
    #[error("can't determine current directory: {0}")]
    CurrentDir(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
