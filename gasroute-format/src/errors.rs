use serde::Serialize;
use std::fmt;

/// A format error with a code in the registry and a recovery hint.
#[derive(Clone, Debug, Serialize)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// Details about the specific input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` without details.
    pub fn new(code: &str, cause: &str, action: &str) -> Self {
        Self { code: code.to_string(), cause: cause.to_string(), action: action.to_string(), details: None }
    }

    /// Creates a new instance of `FormatError` with details.
    pub fn new_with_details(code: &str, cause: &str, action: &str, details: String) -> Self {
        Self { details: Some(details), ..Self::new(code, cause, action) }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// A list of format errors reported together for one request.
#[derive(Clone, Debug)]
pub struct MultiFormatError {
    /// Collected errors, never empty.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Checks whether the given code is present.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|error| error.code == code)
    }
}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
        write!(f, "{errors}")
    }
}

impl std::error::Error for MultiFormatError {}
