use serde::Serialize;

use crate::validator::extension_of;

/// A file offered to the widget by a drop or a browse selection.
///
/// Only metadata is ever inspected: the content is never read. The `handle`
/// carries whatever the platform needs to hand the file back to the form
/// field later (a `web_sys::File` in the browser, `()` everywhere else).
///
/// # Examples
/// ```
/// use sheet_intake::CandidateFile;
///
/// let file = CandidateFile::new("Report.CSV");
/// assert_eq!(file.name, "Report.CSV");
/// assert_eq!(file.extension, "csv");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CandidateFile<H = ()> {
    /// File name as reported by the platform
    pub name: String,

    /// Lower-cased text after the final `.` of `name`
    pub extension: String,

    #[serde(skip)]
    pub handle: H,
}

impl CandidateFile<()> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_handle(name, ())
    }
}

impl<H> CandidateFile<H> {
    pub fn with_handle(name: impl Into<String>, handle: H) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        CandidateFile {
            name,
            extension,
            handle,
        }
    }
}

/// Builds candidates from plain names, keeping their order.
pub fn candidates<I, S>(names: I) -> Vec<CandidateFile>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(CandidateFile::new).collect()
}

/// Outcome of checking a single candidate against the allowlist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ValidationVerdict {
    Accepted,
    Rejected(String),
}

impl ValidationVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationVerdict::Accepted)
    }
}
