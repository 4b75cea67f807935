use log::{debug, warn};
use serde::Serialize;

use crate::surface::Surface;

/// Visual state of the drop target. Has no effect on validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DropZoneState {
    #[default]
    Idle,
    Hovering,
}

/// Drag lifecycle events the drop target listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    pub const ALL: [DragPhase; 4] = [
        DragPhase::Enter,
        DragPhase::Over,
        DragPhase::Leave,
        DragPhase::Drop,
    ];

    /// DOM event name for this phase
    pub fn event_name(self) -> &'static str {
        match self {
            DragPhase::Enter => "dragenter",
            DragPhase::Over => "dragover",
            DragPhase::Leave => "dragleave",
            DragPhase::Drop => "drop",
        }
    }
}

/// What the platform binding must do with the event after handling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventResponse {
    pub prevent_default: bool,
}

impl EventResponse {
    pub fn suppress() -> Self {
        EventResponse {
            prevent_default: true,
        }
    }
}

/// Drag-state machine for the drop target
///
/// Two states, starting at `Idle`. `dragover` moves to `Hovering`;
/// `dragleave` and `drop` move back to `Idle` whatever the drop contained.
/// `dragenter` changes nothing. Every drag event has its default action
/// suppressed so a dropped file never navigates the page away.
#[derive(Clone, Debug, Default)]
pub struct DropZone {
    state: DropZoneState,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DropZoneState {
        self.state
    }

    /// Advance the machine for one drag event and mirror it onto the surface
    ///
    /// The highlight is cosmetic: a surface that fails to show or hide it is
    /// logged and the state still moves, so the event is always suppressed.
    pub fn handle<S: Surface>(&mut self, phase: DragPhase, surface: &mut S) -> EventResponse {
        let next = match phase {
            // Entering alone does not highlight; the first dragover does
            DragPhase::Enter => self.state,
            DragPhase::Over => DropZoneState::Hovering,
            // Leaving or dropping always clears, whatever was dropped
            DragPhase::Leave | DragPhase::Drop => DropZoneState::Idle,
        };

        // Repeated dragover events do not touch the surface again
        if next != self.state {
            debug!("drop zone {:?} -> {:?} on {}", self.state, next, phase.event_name());
            if let Err(e) = surface.set_hovering(next == DropZoneState::Hovering) {
                warn!("drop zone highlight not updated on {}: {}", phase.event_name(), e);
            }
            self.state = next;
        }

        EventResponse::suppress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;
    use crate::surface::testing::FlakySurface;

    #[test]
    fn starts_idle() {
        assert_eq!(DropZone::new().state(), DropZoneState::Idle);
    }

    #[test]
    fn every_phase_suppresses_default() {
        let mut zone = DropZone::new();
        let mut surface = MemorySurface::new();
        for phase in DragPhase::ALL {
            let response = zone.handle(phase, &mut surface);
            assert!(response.prevent_default, "{}", phase.event_name());
        }
    }

    #[test]
    fn over_hovers_and_leave_resets() {
        let mut zone = DropZone::new();
        let mut surface = MemorySurface::new();

        zone.handle(DragPhase::Enter, &mut surface);
        assert_eq!(zone.state(), DropZoneState::Idle);
        assert!(!surface.hovering);

        zone.handle(DragPhase::Over, &mut surface);
        assert_eq!(zone.state(), DropZoneState::Hovering);
        assert!(surface.hovering);

        zone.handle(DragPhase::Leave, &mut surface);
        assert_eq!(zone.state(), DropZoneState::Idle);
        assert!(!surface.hovering);
    }

    #[test]
    fn drop_resets_and_cycle_repeats() {
        let mut zone = DropZone::new();
        let mut surface = MemorySurface::new();
        for _ in 0..3 {
            zone.handle(DragPhase::Over, &mut surface);
            assert!(surface.hovering);
            zone.handle(DragPhase::Drop, &mut surface);
            assert!(!surface.hovering);
            assert_eq!(zone.state(), DropZoneState::Idle);
        }
    }

    #[test]
    fn failing_highlight_still_suppresses_and_moves_state() {
        let mut zone = DropZone::new();
        let mut surface = FlakySurface::new().failing_show().failing_hide();

        let response = zone.handle(DragPhase::Over, &mut surface);
        assert!(response.prevent_default);
        assert_eq!(zone.state(), DropZoneState::Hovering);

        let response = zone.handle(DragPhase::Leave, &mut surface);
        assert!(response.prevent_default);
        assert_eq!(zone.state(), DropZoneState::Idle);
    }

    #[test]
    fn event_names_match_dom() {
        let names: Vec<&str> = DragPhase::ALL.iter().map(|p| p.event_name()).collect();
        assert_eq!(names, vec!["dragenter", "dragover", "dragleave", "drop"]);
    }
}
