use serde::{Serialize, Serializer};

/// Coerced value of a single option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Boolean(bool),
    /// NaN when the text wasn't numeric or the value was missing.
    Number(f64),
    String(String),
    /// Absolute path after resolution against the working directory.
    Path(String),
    /// A string or path flag at the end of input with no value to take.
    Missing,
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a string or path value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) | OptionValue::Path(s) => Some(s),
            _ => None,
        }
    }
}

// JSON has no NaN or infinities; they go out as null, integral numbers as integers.
impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Boolean(b) => serializer.serialize_bool(*b),
            OptionValue::Number(n) if !n.is_finite() => serializer.serialize_none(),
            OptionValue::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
                serializer.serialize_i64(*n as i64)
            }
            OptionValue::Number(n) => serializer.serialize_f64(*n),
            OptionValue::String(s) | OptionValue::Path(s) => serializer.serialize_str(s),
            OptionValue::Missing => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_numbers() {
        assert_eq!(serde_json::to_value(OptionValue::Number(52.0)).unwrap(), json!(52));
        assert_eq!(serde_json::to_value(OptionValue::Number(-0.5)).unwrap(), json!(-0.5));
        assert_eq!(serde_json::to_value(OptionValue::Number(f64::NAN)).unwrap(), json!(null));
        assert_eq!(
            serde_json::to_value(OptionValue::Number(f64::INFINITY)).unwrap(),
            json!(null)
        );
    }

    #[test]
    fn test_serialize_other_values() {
        assert_eq!(serde_json::to_value(OptionValue::Boolean(true)).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(OptionValue::String("null".into())).unwrap(),
            json!("null")
        );
        assert_eq!(
            serde_json::to_value(OptionValue::Path("/tmp/x".into())).unwrap(),
            json!("/tmp/x")
        );
        assert_eq!(serde_json::to_value(OptionValue::Missing).unwrap(), json!(null));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(OptionValue::Boolean(false).as_bool(), Some(false));
        assert_eq!(OptionValue::Number(1.0).as_bool(), None);
        assert_eq!(OptionValue::Path("/a".into()).as_str(), Some("/a"));
        assert!(OptionValue::Number(f64::NAN).as_f64().unwrap().is_nan());
    }
}
