//! Error taxonomy for one detection request.
//!
//! Input errors are reported before the classifier runs. Lookup errors mean the
//! classifier emitted a code the catalog does not know about. Neither is
//! retried: the same input always produces the same outcome.

use thiserror::Error;

/// The upload could not be turned into text worth classifying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("No file was uploaded")]
    MissingFile,

    #[error("Only .txt files are allowed (got '{0}')")]
    UnsupportedExtension(String),

    #[error("Uploaded file is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("Uploaded file is empty")]
    Empty,

    #[error("Could not read upload: {0}")]
    Malformed(String),
}

/// A language code with no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{code}'")]
pub struct LookupError {
    pub code: String,
}

impl LookupError {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Anything that aborts a detection request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::Empty.to_string(), "Uploaded file is empty");
        assert_eq!(
            InputError::UnsupportedExtension("notes.pdf".to_string()).to_string(),
            "Only .txt files are allowed (got 'notes.pdf')"
        );
    }

    #[test]
    fn test_lookup_error_names_the_code() {
        let err = LookupError::new("xx-Unknown");
        assert_eq!(err.code, "xx-Unknown");
        assert!(err.to_string().contains("xx-Unknown"));
    }

    #[test]
    fn test_pipeline_error_is_transparent() {
        let err: PipelineError = LookupError::new("zz").into();
        assert_eq!(err.to_string(), "Unknown language code: 'zz'");

        let err: PipelineError = InputError::Empty.into();
        assert!(matches!(err, PipelineError::Input(InputError::Empty)));
    }
}
