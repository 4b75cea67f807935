use serde::Serialize;

use crate::candidate::CandidateFile;
use crate::error::Result;

/// The capability set the intake logic writes through.
///
/// Every observable effect of the widget goes through one of these calls, so
/// the logic can run against a real page or against an in-memory recorder.
pub trait Surface {
    /// Platform object each candidate carries back to the form field
    type Handle: Clone;

    /// Replace the form field contents with exactly `files`, in order.
    fn set_field_files(&mut self, files: &[CandidateFile<Self::Handle>]) -> Result<()>;

    /// Number of files currently held by the form field.
    fn field_file_count(&self) -> usize;

    fn set_label_text(&mut self, text: &str) -> Result<()>;

    /// Show a user-facing message (a modal alert in the browser).
    fn notify(&mut self, message: &str) -> Result<()>;

    /// Toggle the highlight indicator on the drop target.
    fn set_hovering(&mut self, hovering: bool) -> Result<()>;

    /// Open the platform's native file chooser on the form field.
    fn open_file_chooser(&mut self) -> Result<()>;
}

/// In-memory surface that records every effect
///
/// Used by the command-line harness and by tests to observe what the page
/// would show.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemorySurface {
    pub field: Vec<CandidateFile>,
    pub label: Option<String>,
    pub notifications: Vec<String>,
    pub hovering: bool,
    pub chooser_opened: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.field.iter().map(|f| f.name.as_str()).collect()
    }

    /// Stand-in for the browser writing the field during a native browse.
    pub fn browser_selects(&mut self, files: Vec<CandidateFile>) {
        self.field = files;
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}

impl Surface for MemorySurface {
    type Handle = ();

    fn set_field_files(&mut self, files: &[CandidateFile]) -> Result<()> {
        self.field = files.to_vec();
        Ok(())
    }

    fn field_file_count(&self) -> usize {
        self.field.len()
    }

    fn set_label_text(&mut self, text: &str) -> Result<()> {
        self.label = Some(text.to_string());
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.notifications.push(message.to_string());
        Ok(())
    }

    fn set_hovering(&mut self, hovering: bool) -> Result<()> {
        self.hovering = hovering;
        Ok(())
    }

    fn open_file_chooser(&mut self) -> Result<()> {
        self.chooser_opened += 1;
        Ok(())
    }
}
