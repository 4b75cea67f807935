use thiserror::Error;

use crate::validator::ACCEPTED_EXTENSIONS_LABEL;

pub type Result<T = (), E = IntakeError> = std::result::Result<T, E>;

/// Everything that can go wrong while taking a file in through the widget.
///
/// `RejectedExtension` and `EmptySubmission` are user-level conditions: they
/// are recovered locally and turned into notifications. The remaining
/// variants describe a broken page or a failing platform call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error(
        "File type not allowed: {name}, only {allowed} is accepted",
        allowed = ACCEPTED_EXTENSIONS_LABEL
    )]
    RejectedExtension { name: String },

    #[error("Please select a file first!")]
    EmptySubmission,

    #[error("Required element is missing from the page: #{0}")]
    MissingSurfaceElement(String),

    #[error("Element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("Surface operation failed: {0}")]
    Surface(String),

    #[error("Invalid intake options: {0}")]
    Options(String),
}

impl From<serde_json::Error> for IntakeError {
    fn from(e: serde_json::Error) -> Self {
        IntakeError::Options(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_names_file_and_allowlist() {
        let err = IntakeError::RejectedExtension {
            name: "image.png".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "File type not allowed: image.png, only .xlsx or .csv is accepted"
        );
    }

    #[test]
    fn empty_submission_message() {
        assert_eq!(
            IntakeError::EmptySubmission.to_string(),
            "Please select a file first!"
        );
    }

    #[test]
    fn element_errors_name_the_id() {
        assert_eq!(
            IntakeError::MissingSurfaceElement("browseButton".into()).to_string(),
            "Required element is missing from the page: #browseButton"
        );
        let wrong = IntakeError::WrongElementType {
            id: "uploadForm".into(),
            expected: "form",
        };
        assert_eq!(wrong.to_string(), "Element #uploadForm is not a form");
    }

    #[test]
    fn bad_json_becomes_options_error() {
        let err: IntakeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, IntakeError::Options(_)));
    }
}
