// Error handling for urlpath

use std::fmt;

/// Library error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The template could not be compiled (empty, malformed or duplicate names)
    InvalidTemplate(String),
    /// A required parameter had no value while formatting
    MissingParameter(String),
    /// The generated matching pattern was rejected by the regex engine
    Pattern(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTemplate(msg) => write!(f, "Invalid URL template: {}", msg),
            Error::MissingParameter(name) => {
                write!(f, "Missing value for required parameter: {}", name)
            }
            Error::Pattern(msg) => write!(f, "Pattern error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err.to_string())
    }
}

/// Returned when a match result is unwrapped but the URL did not match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapError;

impl fmt::Display for UnwrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("the URL is not matched")
    }
}

impl std::error::Error for UnwrapError {}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidTemplate("URL template is not defined".to_string()).to_string(),
            "Invalid URL template: URL template is not defined"
        );
        assert_eq!(
            Error::MissingParameter("id".to_string()).to_string(),
            "Missing value for required parameter: id"
        );
        assert_eq!(UnwrapError.to_string(), "the URL is not matched");
    }
}
