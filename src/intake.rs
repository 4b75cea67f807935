use log::{debug, warn};

use crate::bridge;
use crate::candidate::CandidateFile;
use crate::drop_zone::{DragPhase, DropZone, DropZoneState, EventResponse};
use crate::error::Result;
use crate::gate::{self, SubmitDecision};
use crate::surface::Surface;
use crate::validator::{self, Rejection};

/// What a single drop did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropReport {
    /// Names installed into the field, in order
    pub accepted: Vec<String>,
    pub rejected: Vec<Rejection>,
    /// False when every dropped file was rejected (or nothing was dropped)
    pub installed: bool,
    pub response: EventResponse,
}

/// The upload widget: drop target, validator, field bridge and submit gate
/// wired to one surface.
///
/// There is one method per consumed page event. Each runs to completion and
/// writes its effects through the surface.
///
/// # Examples
/// ```
/// use sheet_intake::{candidates, MemorySurface, SubmitDecision, UploadIntake};
///
/// let mut intake = UploadIntake::new(MemorySurface::new());
/// assert_eq!(intake.on_submit().unwrap(), SubmitDecision::Blocked);
///
/// let report = intake.on_drop(candidates(["report.CSV", "image.png"])).unwrap();
/// assert_eq!(report.accepted, vec!["report.CSV"]);
/// assert_eq!(intake.surface().label.as_deref(), Some("File dropped: report.CSV"));
/// assert_eq!(intake.on_submit().unwrap(), SubmitDecision::Proceed);
/// ```
pub struct UploadIntake<S: Surface> {
    zone: DropZone,
    surface: S,
}

impl<S: Surface> UploadIntake<S> {
    pub fn new(surface: S) -> Self {
        UploadIntake {
            zone: DropZone::new(),
            surface,
        }
    }

    pub fn state(&self) -> DropZoneState {
        self.zone.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn on_drag_enter(&mut self) -> EventResponse {
        self.zone.handle(DragPhase::Enter, &mut self.surface)
    }

    pub fn on_drag_over(&mut self) -> EventResponse {
        self.zone.handle(DragPhase::Over, &mut self.surface)
    }

    pub fn on_drag_leave(&mut self) -> EventResponse {
        self.zone.handle(DragPhase::Leave, &mut self.surface)
    }

    /// Handle a drop of `files` onto the drop target
    ///
    /// The highlight is removed first, whatever the outcome. Each rejected
    /// file yields one notification and the rest keep going, even when a
    /// notification cannot be shown. The accepted subset, if any, replaces
    /// the field contents.
    ///
    /// # Arguments
    /// * `files` - Dropped files in the order the platform listed them
    ///
    /// # Returns
    /// * `DropReport` - Accepted names, rejections and whether the field changed
    /// * `Err` only if the accepted files could not be installed
    pub fn on_drop(&mut self, files: Vec<CandidateFile<S::Handle>>) -> Result<DropReport> {
        // Clear the highlight; a failure here is logged by the zone
        let response = self.zone.handle(DragPhase::Drop, &mut self.surface);
        debug!("drop of {} file(s)", files.len());

        // Validate every file before touching the form
        let partition = validator::partition(files);

        // One notification per rejected file, independent of each other
        for rejection in &partition.rejected {
            if let Err(e) = self.surface.notify(&rejection.reason) {
                warn!("could not show rejection for {:?}: {}", rejection.name, e);
            }
        }

        // Only a non-empty accepted set reaches the field
        let installed = bridge::install_dropped(&partition.accepted, &mut self.surface)?;

        Ok(DropReport {
            accepted: partition.accepted.into_iter().map(|f| f.name).collect(),
            rejected: partition.rejected,
            installed,
            response,
        })
    }

    /// Handle a `change` on the file field after a native browse selection
    pub fn on_change<H>(&mut self, selected: &[CandidateFile<H>]) -> Result<bool> {
        bridge::browse_selected(selected, &mut self.surface)
    }

    /// Handle a click on the browse button
    pub fn on_browse_click(&mut self) -> Result<()> {
        self.surface.open_file_chooser()
    }

    pub fn on_submit(&mut self) -> Result<SubmitDecision> {
        gate::check_submission(&mut self.surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::candidates;
    use crate::surface::MemorySurface;
    use crate::surface::testing::FlakySurface;

    fn intake() -> UploadIntake<MemorySurface> {
        UploadIntake::new(MemorySurface::new())
    }

    #[test]
    fn drop_clears_hover_even_when_everything_is_rejected() {
        let mut intake = intake();
        intake.on_drag_over();
        assert!(intake.surface().hovering);

        let report = intake.on_drop(candidates(["doc.pdf"])).unwrap();
        assert!(!report.installed);
        assert!(report.response.prevent_default);
        assert!(!intake.surface().hovering);
        assert_eq!(intake.state(), DropZoneState::Idle);
    }

    #[test]
    fn one_notification_per_rejected_file() {
        let mut intake = intake();
        let report = intake
            .on_drop(candidates(["a.png", "b.csv", "c.gif", "d.txt"]))
            .unwrap();
        assert_eq!(report.rejected.len(), 3);
        assert_eq!(
            intake.surface().notifications,
            vec![
                "File type not allowed: a.png, only .xlsx or .csv is accepted",
                "File type not allowed: c.gif, only .xlsx or .csv is accepted",
                "File type not allowed: d.txt, only .xlsx or .csv is accepted",
            ]
        );
        assert_eq!(intake.surface().field_names(), vec!["b.csv"]);
    }

    #[test]
    fn label_names_first_accepted_not_first_dropped() {
        let mut intake = intake();
        intake.on_drop(candidates(["x.png", "y.xlsx", "z.csv"])).unwrap();
        assert_eq!(intake.surface().label.as_deref(), Some("File dropped: y.xlsx"));
    }

    #[test]
    fn failing_highlight_does_not_abort_the_drop() {
        let mut intake = UploadIntake::new(FlakySurface::new().failing_hide());
        intake.on_drag_over();

        let report = intake.on_drop(candidates(["report.csv", "x.png"])).unwrap();
        assert!(report.response.prevent_default);
        assert!(report.installed);
        assert_eq!(intake.surface().inner.field_names(), vec!["report.csv"]);
        assert_eq!(
            intake.surface().inner.notifications,
            vec!["File type not allowed: x.png, only .xlsx or .csv is accepted"]
        );
        assert_eq!(intake.state(), DropZoneState::Idle);
    }

    #[test]
    fn failed_alert_does_not_stop_later_rejections_or_install() {
        let mut intake = UploadIntake::new(FlakySurface::new().failing_notify("first.png"));

        let report = intake
            .on_drop(candidates(["first.png", "keep.xlsx", "second.gif"]))
            .unwrap();
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(intake.surface().inner.field_names(), vec!["keep.xlsx"]);
        assert_eq!(
            intake.surface().inner.notifications,
            vec!["File type not allowed: second.gif, only .xlsx or .csv is accepted"]
        );
    }

    #[test]
    fn failing_highlight_on_drag_events_still_suppresses() {
        let mut intake = UploadIntake::new(FlakySurface::new().failing_show());
        assert!(intake.on_drag_enter().prevent_default);
        assert!(intake.on_drag_over().prevent_default);
        assert!(intake.on_drag_leave().prevent_default);
    }

    #[test]
    fn browse_click_opens_chooser() {
        let mut intake = intake();
        intake.on_browse_click().unwrap();
        assert_eq!(intake.surface().chooser_opened, 1);
    }

    #[test]
    fn browse_selection_overrides_dropped_label() {
        let mut intake = intake();
        intake.on_drop(candidates(["a.csv"])).unwrap();

        let picked = candidates(["b.xlsx"]);
        intake.surface_mut().browser_selects(picked.clone());
        intake.on_change(&picked).unwrap();

        assert_eq!(intake.surface().label.as_deref(), Some("File selected: b.xlsx"));
        assert_eq!(intake.surface().field_names(), vec!["b.xlsx"]);
    }
}
