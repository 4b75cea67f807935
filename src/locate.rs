use log::debug;

use crate::error::{IntakeError, Result};
use crate::options::IntakeOptions;

/// The four elements the widget cannot work without
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    Dropbox,
    FileInput,
    Form,
    BrowseButton,
}

impl ElementRole {
    /// Lookup order; the first missing role is the one reported
    pub const ALL: [ElementRole; 4] = [
        ElementRole::Dropbox,
        ElementRole::FileInput,
        ElementRole::Form,
        ElementRole::BrowseButton,
    ];

    /// Element id configured for this role
    pub fn id(self, options: &IntakeOptions) -> &str {
        match self {
            ElementRole::Dropbox => &options.dropbox_id,
            ElementRole::FileInput => &options.file_input_id,
            ElementRole::Form => &options.form_id,
            ElementRole::BrowseButton => &options.browse_button_id,
        }
    }

    /// Element kind named in a `WrongElementType` error
    pub fn expected(self) -> &'static str {
        match self {
            ElementRole::Dropbox | ElementRole::BrowseButton => "HTML element",
            ElementRole::FileInput => "file input",
            ElementRole::Form => "form",
        }
    }
}

/// Every required element, found but not yet narrowed to its concrete type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located<E> {
    pub dropbox: E,
    pub file_input: E,
    pub form: E,
    pub browse_button: E,
}

/// Find every required element before anything is wired
///
/// # Arguments
/// * `options` - Element ids to look up
/// * `lookup` - Returns the element with the given id, if the page has one
///
/// # Returns
/// * `Located` with all four elements, or `MissingSurfaceElement` naming the
///   first id that is absent
pub fn locate<E>(
    options: &IntakeOptions,
    mut lookup: impl FnMut(&str) -> Option<E>,
) -> Result<Located<E>> {
    let mut find = |role: ElementRole| {
        let id = role.id(options);
        // A missing element stops start-up here, never inside a handler
        lookup(id).ok_or_else(|| IntakeError::MissingSurfaceElement(id.to_string()))
    };

    let located = Located {
        dropbox: find(ElementRole::Dropbox)?,
        file_input: find(ElementRole::FileInput)?,
        form: find(ElementRole::Form)?,
        browse_button: find(ElementRole::BrowseButton)?,
    };
    debug!("located all {} upload widget elements", ElementRole::ALL.len());
    Ok(located)
}

/// Narrow a located element to the type its role needs
///
/// `cast` hands the element back on failure, as `JsCast::dyn_into` does.
pub fn narrow<E, T>(
    element: E,
    role: ElementRole,
    options: &IntakeOptions,
    cast: impl FnOnce(E) -> std::result::Result<T, E>,
) -> Result<T> {
    cast(element).map_err(|_| IntakeError::WrongElementType {
        id: role.id(options).to_string(),
        expected: role.expected(),
    })
}
