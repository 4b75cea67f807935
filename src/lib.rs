/*!
# Sheet Intake

A drag-and-drop intake widget for spreadsheet upload forms, built in Rust.

## Overview

The widget lets a user hand a `.csv` or `.xlsx` file to an upload form either
by dragging it onto a drop box or by browsing for it. Dropped files are
checked against a fixed extension allowlist before they reach the form, and
the form refuses to submit without a file.

## Architecture

### Core (platform independent)
- **validator**: Extension allowlist (`csv`, `xlsx`, case-insensitive) and the
  accepted/rejected partition of a drop
- **drop_zone**: Idle/Hovering state machine for the drop box; every drag
  event has its default action suppressed
- **bridge**: Installs accepted files into the form field and keeps the
  status label in step (last write wins)
- **gate**: Blocks submission of an empty form
- **intake**: `UploadIntake`, the four pieces wired to one surface
- **locate**: Finds every required page element up front so a missing or
  mistyped one fails start-up before any handler exists

### Output contract
- **surface**: The `Surface` trait every effect goes through (field files,
  label text, notifications, hover flag, file chooser) and the in-memory
  `MemorySurface`

### Browser layer (`web` feature)
- **web**: DOM binding via `wasm-bindgen` / `web-sys`; elements are located
  once and a missing element fails start-up

### Page glue
- **glue**: Menu toggle and registration password check

## Usage

```
use sheet_intake::{candidates, MemorySurface, UploadIntake};

let mut intake = UploadIntake::new(MemorySurface::new());
intake.on_drag_over();
intake.on_drop(candidates(["a.xlsx", "b.csv"])).unwrap();

assert_eq!(intake.surface().field_names(), vec!["a.xlsx", "b.csv"]);
assert_eq!(intake.surface().label.as_deref(), Some("File dropped: a.xlsx"));
```

In the browser:

```js
import init, { start_intake } from "./pkg/sheet_intake.js";
await init();
const binding = start_intake(null);
```
*/

pub mod bridge;
pub mod candidate;
pub mod drop_zone;
pub mod error;
pub mod gate;
pub mod glue;
pub mod intake;
pub mod locate;
pub mod options;
pub mod surface;
pub mod validator;
#[cfg(feature = "web")]
pub mod web;

/// Re-export the types most callers need
pub use candidate::*;
pub use drop_zone::{DragPhase, DropZone, DropZoneState, EventResponse};
pub use error::{IntakeError, Result};
pub use gate::SubmitDecision;
pub use glue::{MenuToggle, PasswordCheck, check_passwords};
pub use intake::{DropReport, UploadIntake};
pub use locate::{ElementRole, Located, locate};
pub use options::IntakeOptions;
pub use surface::{MemorySurface, Surface};
pub use validator::{ACCEPTED_EXTENSIONS, Partition, Rejection};
