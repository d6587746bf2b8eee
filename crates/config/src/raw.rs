//! Helpers for pulling typed fields out of raw, untrusted options objects.
//!
//! Every helper takes the dotted path it is looking at so failures point at the
//! exact field, e.g. `site.defaultImages.openGraph.imagePath`.

use serde_json::Value;

use crate::ValidationError;

pub fn object<'v>(
    value: &'v Value,
    path: &str,
) -> Result<&'v serde_json::Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::invalid_shape(path, "must be an object"))
}

/// A field that must be present and a non-empty string.
pub fn require_string(value: Option<&Value>, path: &str) -> Result<String, ValidationError> {
    let s = value
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::missing_field(path, "required and must be a string"))?;
    if s.is_empty() {
        return Err(ValidationError::missing_field(path, "must not be empty"));
    }
    Ok(s.to_owned())
}

/// A field that may be absent but must be a string when present.
pub fn optional_string(
    value: Option<&Value>,
    path: &str,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(value) => {
            let s = value
                .as_str()
                .ok_or_else(|| ValidationError::invalid_shape(path, "must be a string"))?;
            Ok(Some(s.to_owned()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn require_string_rejects_absent() {
        let err = require_string(None, "site.name").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
        assert_eq!(err.path, "site.name");
    }

    #[test]
    fn require_string_rejects_wrong_type() {
        let err = require_string(Some(&json!(42)), "site.name").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
    }

    #[test]
    fn require_string_rejects_empty() {
        let err = require_string(Some(&json!("")), "site.name").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField);
    }

    #[test]
    fn optional_string_passes_absent_through() {
        let actual = optional_string(None, "site.charset").unwrap();
        assert_eq!(actual, None);
    }

    #[test]
    fn optional_string_rejects_wrong_type() {
        let err = optional_string(Some(&json!(["x"])), "imageAlt").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidShape);
    }
}
