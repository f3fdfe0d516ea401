use crate::error::Error;
use crate::number::is_canonical_number;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Type a flag's value is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Hint {
    /// Bare switch; only consumes a following literal `true` or `false`.
    Boolean,
    /// Numeric value; unparseable text becomes NaN.
    Number,
    /// Verbatim text.
    String,
    /// Filesystem path resolved against the working directory. Never guessed.
    Path,
}

/// Hints keyed by normalized option name.
pub type Hints = HashMap<String, Hint>;

/// Where a flag's [`Hint`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSource {
    /// Registered by the caller before parsing.
    Explicit,
    /// Inferred from the candidate value.
    Guessed,
}

impl Hint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hint::Boolean => "boolean",
            Hint::Number => "number",
            Hint::String => "string",
            Hint::Path => "path",
        }
    }

    /// Parse a textual hint declared for `name`.
    ///
    /// Same as [`FromStr`] but the error names the option it was meant for.
    pub fn parse_for(name: &str, value: &str) -> Result<Hint, Error> {
        value.parse::<Hint>().map_err(|_| Error::InvalidHint {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "boolean" => Ok(Hint::Boolean),
            "number" => Ok(Hint::Number),
            "string" => Ok(Hint::String),
            "path" => Ok(Hint::Path),
            _ => Err(Error::InvalidHint {
                name: String::new(),
                value: s.to_string(),
            }),
        }
    }
}

/// Decide the type for a flag value.
///
/// An explicit hint always wins. Otherwise `true`/`false`, a missing value,
/// or a value that looks like the next flag mean [`Hint::Boolean`]; text
/// that is the canonical form of a number means [`Hint::Number`]; anything
/// else is a [`Hint::String`].
pub fn resolve_hint(explicit: Option<Hint>, candidate: Option<&str>) -> (Hint, HintSource) {
    if let Some(hint) = explicit {
        return (hint, HintSource::Explicit);
    }

    let guessed = match candidate {
        Some("true") | Some("false") => Hint::Boolean,
        None => Hint::Boolean,
        Some(text) if text.starts_with('-') => Hint::Boolean,
        Some(text) if is_canonical_number(text) => Hint::Number,
        Some(_) => Hint::String,
    };
    (guessed, HintSource::Guessed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_hint_wins() {
        assert_eq!(
            resolve_hint(Some(Hint::Path), Some("52")),
            (Hint::Path, HintSource::Explicit)
        );
        assert_eq!(
            resolve_hint(Some(Hint::String), None),
            (Hint::String, HintSource::Explicit)
        );
    }

    #[test]
    fn test_guess_boolean() {
        assert_eq!(resolve_hint(None, Some("true")).0, Hint::Boolean);
        assert_eq!(resolve_hint(None, Some("false")).0, Hint::Boolean);
        assert_eq!(resolve_hint(None, None).0, Hint::Boolean);
        assert_eq!(resolve_hint(None, Some("--next")).0, Hint::Boolean);
        assert_eq!(resolve_hint(None, Some("-5")).0, Hint::Boolean);
    }

    #[test]
    fn test_guess_number() {
        assert_eq!(
            resolve_hint(None, Some("52")),
            (Hint::Number, HintSource::Guessed)
        );
        assert_eq!(resolve_hint(None, Some("0.25")).0, Hint::Number);
    }

    #[test]
    fn test_guess_string() {
        assert_eq!(resolve_hint(None, Some("potato")).0, Hint::String);
        assert_eq!(resolve_hint(None, Some("007")).0, Hint::String);
        assert_eq!(resolve_hint(None, Some("null")).0, Hint::String);
        assert_eq!(resolve_hint(None, Some("")).0, Hint::String);
    }

    #[test]
    fn test_path_is_never_guessed() {
        assert_eq!(resolve_hint(None, Some("./blah")).0, Hint::String);
        assert_eq!(resolve_hint(None, Some("/abs/path")).0, Hint::String);
    }

    #[test]
    fn test_parse_hint_text() {
        assert_eq!("Boolean".parse::<Hint>().unwrap(), Hint::Boolean);
        assert_eq!("NUMBER".parse::<Hint>().unwrap(), Hint::Number);
        assert_eq!("string".parse::<Hint>().unwrap(), Hint::String);
        assert_eq!("Path".parse::<Hint>().unwrap(), Hint::Path);
    }

    #[test]
    fn test_invalid_hint_names_option() {
        let err = Hint::parse_for("someFlag", "date").unwrap_err();
        match err {
            Error::InvalidHint { name, value } => {
                assert_eq!(name, "someFlag");
                assert_eq!(value, "date");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
