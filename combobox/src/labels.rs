//! Fixed literal strings and accessibility labels.
//!
//! Hosts and tests locate widget parts by these exact strings, so they are
//! not translatable.

/// Label of the toggle while the dropdown is closed.
pub const OPEN_DROPDOWN: &str = "Dropdown öffnen";

/// Label of the toggle while the dropdown is open.
pub const CLOSE_DROPDOWN: &str = "Dropdown schließen";

/// Label of the clear control.
pub const CLEAR_SELECTION: &str = "Auswahl zurücksetzen";

/// Label carried by every dropdown row.
pub const DROPDOWN_OPTION: &str = "dropdown-option";

/// Label of the span holding an item's additional information.
pub const ADDITIONAL_INFO: &str = "additional-dropdown-info";

/// Text of the row shown when nothing matches.
pub const NO_MATCH: &str = "Kein passender Eintrag";

/// Text of the create-new row for `text`.
pub fn create_new(text: &str) -> String {
    format!("{text} neu erstellen")
}
