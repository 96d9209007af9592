//! Items offered by a combobox and the values it hands back to the host.

use serde::{Deserialize, Serialize};

/// A single candidate shown in the dropdown.
///
/// The `value` is opaque to the widget; only the `label` is displayed and
/// used for filtering.
///
/// # Example
///
/// ```
/// use combobox::Item;
///
/// let item = Item::new("BGH", "bgh-id").with_additional_information("Karlsruhe");
/// assert_eq!(item.label, "BGH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item<T> {
    /// Display text, also the filter haystack.
    pub label: String,
    /// Value requested from the host when this item is committed.
    pub value: T,
    /// Optional secondary text rendered next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
}

impl<T> Item<T> {
    /// Create an item without additional information.
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
            additional_information: None,
        }
    }

    /// Attach secondary text shown beside the label.
    pub fn with_additional_information(mut self, info: impl Into<String>) -> Self {
        self.additional_information = Some(info.into());
        self
    }
}

/// The value a combobox asks its host to store.
///
/// Serialized untagged: an existing selection serializes as the item's value
/// itself, a manually created one as `{"label": "..."}` with no `value` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection<T> {
    /// Value of an item offered by the source.
    Existing(T),
    /// Free text entered through the create-new entry.
    Created { label: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_selection_has_no_value_key() {
        let created: Selection<serde_json::Value> = Selection::Created {
            label: "foo".into(),
        };
        assert_eq!(serde_json::to_value(&created).unwrap(), json!({ "label": "foo" }));
    }

    #[test]
    fn test_existing_selection_serializes_as_value() {
        let existing = Selection::Existing(json!({ "type": "courttype1" }));
        assert_eq!(
            serde_json::to_value(&existing).unwrap(),
            json!({ "type": "courttype1" })
        );
    }

    #[test]
    fn test_item_camel_case_fields() {
        let item = Item::new("BGH", 1).with_additional_information("Karlsruhe");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "label": "BGH", "value": 1, "additionalInformation": "Karlsruhe" })
        );
    }
}
