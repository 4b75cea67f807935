use log::info;

use crate::candidate::CandidateFile;
use crate::error::Result;
use crate::surface::Surface;

pub const DROPPED_PREFIX: &str = "File dropped: ";
pub const SELECTED_PREFIX: &str = "File selected: ";

/// Install the accepted files of a drop into the form field
///
/// A non-empty set replaces the field contents outright (last write wins)
/// and the label names the first accepted file. An empty set leaves both
/// the field and the label as they were.
///
/// # Returns
/// * `Ok(true)` if the field was written, `Ok(false)` if nothing changed
pub fn install_dropped<S: Surface>(
    accepted: &[CandidateFile<S::Handle>],
    surface: &mut S,
) -> Result<bool> {
    // Nothing accepted: keep whatever the field already holds
    let Some(first) = accepted.first() else {
        return Ok(false);
    };

    // Replace, never append
    surface.set_field_files(accepted)?;
    surface.set_label_text(&format!("{}{}", DROPPED_PREFIX, first.name))?;
    info!("installed {} dropped file(s), first {:?}", accepted.len(), first.name);
    Ok(true)
}

/// React to the browser filling the field through its native file dialog
///
/// The browser has already written the field, so only the label changes.
/// No extension check happens here.
pub fn browse_selected<S: Surface, H>(
    selected: &[CandidateFile<H>],
    surface: &mut S,
) -> Result<bool> {
    // Cancelled dialog
    let Some(first) = selected.first() else {
        return Ok(false);
    };

    surface.set_label_text(&format!("{}{}", SELECTED_PREFIX, first.name))?;
    info!("browse selected {:?}", first.name);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidates;
    use crate::surface::MemorySurface;

    #[test]
    fn accepted_files_replace_field_and_label() {
        let mut surface = MemorySurface::new();
        let written = install_dropped(&candidates(["a.xlsx", "b.csv"]), &mut surface).unwrap();
        assert!(written);
        assert_eq!(surface.field_names(), vec!["a.xlsx", "b.csv"]);
        assert_eq!(surface.label.as_deref(), Some("File dropped: a.xlsx"));
    }

    #[test]
    fn empty_accepted_changes_nothing() {
        let mut surface = MemorySurface::new();
        install_dropped(&candidates(["keep.csv"]), &mut surface).unwrap();

        let written = install_dropped(&[], &mut surface).unwrap();
        assert!(!written);
        assert_eq!(surface.field_names(), vec!["keep.csv"]);
        assert_eq!(surface.label.as_deref(), Some("File dropped: keep.csv"));
    }

    #[test]
    fn browse_sets_label_without_touching_field() {
        let mut surface = MemorySurface::new();
        surface.browser_selects(candidates(["photo.jpg"]));
        let files = surface.field.clone();

        assert!(browse_selected(&files, &mut surface).unwrap());
        assert_eq!(surface.label.as_deref(), Some("File selected: photo.jpg"));
        assert!(surface.notifications.is_empty());
    }

    #[test]
    fn browse_with_nothing_selected_is_a_no_op() {
        let mut surface = MemorySurface::new();
        assert!(!browse_selected::<_, ()>(&[], &mut surface).unwrap());
        assert_eq!(surface.label, None);
    }
}
