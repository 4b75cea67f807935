//! Page glue that lives next to the upload widget but shares no state with
//! it: the navigation menu toggle and the registration password check.

use log::debug;
use serde::Serialize;

pub const MENU_OPEN_CLASS: &str = "open";

/// Collapsible navigation menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new(open: bool) -> Self {
        MenuToggle { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!("menu open: {}", self.open);
        self.open
    }
}

/// Result of comparing the registration password with its confirmation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PasswordCheck {
    Match,
    Mismatch,
}

impl PasswordCheck {
    pub fn message(self) -> &'static str {
        match self {
            PasswordCheck::Match => "Passwords match, submitting form!",
            PasswordCheck::Mismatch => "Passwords do not match!",
        }
    }

    /// A mismatch must stop the registration form from submitting.
    pub fn allows_submit(self) -> bool {
        self == PasswordCheck::Match
    }
}

pub fn check_passwords(password: &str, confirm: &str) -> PasswordCheck {
    if password == confirm {
        PasswordCheck::Match
    } else {
        PasswordCheck::Mismatch
    }
}
