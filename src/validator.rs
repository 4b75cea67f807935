use lazy_static::lazy_static;
use log::warn;
use std::collections::HashSet;

use crate::candidate::{CandidateFile, ValidationVerdict};
use crate::error::IntakeError;

/// Extensions a dropped file may carry, lower-case and without the dot
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

/// How the allowlist is worded in user-facing messages
pub const ACCEPTED_EXTENSIONS_LABEL: &str = ".xlsx or .csv";

lazy_static! {
    static ref ALLOWLIST: HashSet<&'static str> = ACCEPTED_EXTENSIONS.iter().copied().collect();
}

/// Extract the lower-cased extension of a file name
///
/// The extension is whatever follows the final `.`. A name without any dot
/// yields the whole name, and a trailing dot yields an empty string.
///
/// # Examples
/// ```
/// use sheet_intake::validator::extension_of;
///
/// assert_eq!(extension_of("report.CSV"), "csv");
/// assert_eq!(extension_of("archive.tar.csv"), "csv");
/// assert_eq!(extension_of("README"), "readme");
/// assert_eq!(extension_of("data."), "");
/// ```
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Check an extension as produced by [`extension_of`], already lower-cased
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWLIST.contains(extension)
}

/// Classify one candidate against the allowlist
///
/// # Returns
/// * `ValidationVerdict::Accepted` for `.csv` / `.xlsx` (any case)
/// * `ValidationVerdict::Rejected` with the user-facing reason otherwise
pub fn validate<H>(file: &CandidateFile<H>) -> ValidationVerdict {
    if is_allowed_extension(&file.extension) {
        ValidationVerdict::Accepted
    } else {
        let reason = IntakeError::RejectedExtension {
            name: file.name.clone(),
        };
        ValidationVerdict::Rejected(reason.to_string())
    }
}

/// A file that failed validation, with the message the user gets to see
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    pub reason: String,
}

/// The two halves of a validated drop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition<H = ()> {
    /// Files that passed, in their original relative order
    pub accepted: Vec<CandidateFile<H>>,

    /// Files that failed, in their original relative order
    pub rejected: Vec<Rejection>,
}

/// Split a dropped set into accepted and rejected files
///
/// Processing never stops early: every file gets a verdict. An empty input
/// gives an empty partition.
///
/// # Arguments
/// * `files` - Candidates in the order the platform reported them
///
/// # Returns
/// * `Partition` - Accepted files plus one `Rejection` per refused file
pub fn partition<H>(files: Vec<CandidateFile<H>>) -> Partition<H> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    // Every file gets a verdict; a rejection never stops the loop
    for file in files {
        match validate(&file) {
            // Kept whole so the platform handle reaches the field
            ValidationVerdict::Accepted => accepted.push(file),
            ValidationVerdict::Rejected(reason) => {
                // Only the name survives; the handle is dropped here
                warn!("rejected dropped file {:?}: extension {:?}", file.name, file.extension);
                rejected.push(Rejection {
                    name: file.name,
                    reason,
                });
            }
        }
    }

    Partition { accepted, rejected }
}
