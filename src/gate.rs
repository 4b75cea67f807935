use log::{info, warn};
use serde::Serialize;

use crate::error::{IntakeError, Result};
use crate::surface::Surface;

/// Whether a form submission may go ahead
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SubmitDecision {
    Proceed,
    Blocked,
}

impl SubmitDecision {
    pub fn is_blocked(self) -> bool {
        self == SubmitDecision::Blocked
    }
}

/// Check the form field at submit time
///
/// An empty field blocks the submission and notifies the user. Anything
/// else passes untouched; extensions are not looked at again here.
pub fn check_submission<S: Surface>(surface: &mut S) -> Result<SubmitDecision> {
    // The field is the only source of truth, however it was filled
    let count = surface.field_file_count();
    if count == 0 {
        warn!("blocked submission with an empty file field");
        surface.notify(&IntakeError::EmptySubmission.to_string())?;
        return Ok(SubmitDecision::Blocked);
    }

    info!("submitting form with {} file(s)", count);
    Ok(SubmitDecision::Proceed)
}
