use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, Result};

/// Where the widget finds its elements on the page
///
/// Every field has a default matching the stock upload page, so a page only
/// needs to pass the ids it renamed. The accepted extensions are not part of
/// the options.
///
/// # Examples
/// ```
/// use sheet_intake::IntakeOptions;
///
/// let options = IntakeOptions::from_json(r#"{"form_id": "sheetForm"}"#).unwrap();
/// assert_eq!(options.form_id, "sheetForm");
/// assert_eq!(options.dropbox_id, "dropbox");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeOptions {
    /// Drop target; its text is the status label
    pub dropbox_id: String,

    /// The form's file input
    pub file_input_id: String,

    pub form_id: String,

    /// Button that opens the native file chooser
    pub browse_button_id: String,

    /// Class set on the drop target while a drag hovers over it
    pub hover_class: String,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            dropbox_id: "dropbox".to_string(),
            file_input_id: "fileInput".to_string(),
            form_id: "uploadForm".to_string(),
            browse_button_id: "browseButton".to_string(),
            hover_class: "dragover".to_string(),
        }
    }
}

impl IntakeOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the page would choke on later
    ///
    /// The hover class ends up in `classList.add`, which throws on an empty
    /// token or one containing whitespace. Element ids must not be empty.
    pub fn validate(&self) -> Result<()> {
        if self.hover_class.is_empty() || self.hover_class.chars().any(char::is_whitespace) {
            return Err(IntakeError::Options(format!(
                "hover_class must be a single non-empty class name, got {:?}",
                self.hover_class
            )));
        }

        let ids = [
            ("dropbox_id", &self.dropbox_id),
            ("file_input_id", &self.file_input_id),
            ("form_id", &self.form_id),
            ("browse_button_id", &self.browse_button_id),
        ];
        for (field, id) in ids {
            if id.trim().is_empty() {
                return Err(IntakeError::Options(format!("{} must not be empty", field)));
            }
        }

        Ok(())
    }

    /// Parse optional JSON, falling back to the defaults when absent or blank
    pub fn from_optional_json(json: Option<&str>) -> Result<Self> {
        match json.map(str::trim) {
            Some(text) if !text.is_empty() => Self::from_json(text),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let options = IntakeOptions::default();
        assert_eq!(options.dropbox_id, "dropbox");
        assert_eq!(options.file_input_id, "fileInput");
        assert_eq!(options.form_id, "uploadForm");
        assert_eq!(options.browse_button_id, "browseButton");
        assert_eq!(options.hover_class, "dragover");
    }

    #[test]
    fn missing_json_gives_defaults() {
        assert_eq!(IntakeOptions::from_optional_json(None).unwrap(), IntakeOptions::default());
        assert_eq!(
            IntakeOptions::from_optional_json(Some("  ")).unwrap(),
            IntakeOptions::default()
        );
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let options = IntakeOptions::from_json(r#"{"hover_class":"highlight"}"#).unwrap();
        assert_eq!(options.hover_class, "highlight");
        assert_eq!(options.file_input_id, "fileInput");
    }

    #[test]
    fn defaults_are_valid() {
        assert!(IntakeOptions::default().validate().is_ok());
    }

    #[test]
    fn unusable_hover_class_is_rejected() {
        let cases = [
            r#"{"hover_class":""}"#,
            r#"{"hover_class":"drag over"}"#,
            r#"{"hover_class":" "}"#,
        ];
        for json in cases {
            let err = IntakeOptions::from_json(json).unwrap_err();
            assert!(matches!(err, IntakeError::Options(_)), "{}", json);
        }
    }

    #[test]
    fn empty_element_id_is_rejected() {
        let err = IntakeOptions::from_json(r#"{"browse_button_id":""}"#).unwrap_err();
        assert_eq!(
            err,
            IntakeError::Options("browse_button_id must not be empty".to_string())
        );
    }

    #[test]
    fn malformed_json_is_an_options_error() {
        let err = IntakeOptions::from_json("not json").unwrap_err();
        assert!(matches!(err, IntakeError::Options(_)));
    }
}
