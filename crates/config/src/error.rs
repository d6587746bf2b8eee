use std::fmt;

/// Classifies what went wrong with a raw options field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is absent or has the wrong type.
    MissingField,
    /// A field is present but violates a structural rule.
    InvalidShape,
    /// An image path did not resolve through the host's asset pipeline.
    ImageResolutionFailed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingField => "missing field",
            Self::InvalidShape => "invalid shape",
            Self::ImageResolutionFailed => "image resolution failed",
        };
        write!(f, "{name}")
    }
}

/// A structural problem in the raw options, reported at the field that caused it.
///
/// The `path` is dotted from the options root, e.g. `site.separator`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at `{path}`: {reason}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub path: String,
    pub reason: String,
}

impl ValidationError {
    pub fn missing_field(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingField,
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidShape,
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn image_resolution_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ImageResolutionFailed,
            path: path.into(),
            reason: reason.into(),
        }
    }
}
