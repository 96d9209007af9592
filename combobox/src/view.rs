//! Render-ready snapshot of a combobox.
//!
//! Hosts draw from a [`ComboboxView`] instead of poking at the state. The
//! view carries the fixed accessibility labels so every host exposes the
//! same strings.

use crate::config::ComboboxConfig;
use crate::filter::RenderedEntry;
use crate::labels;
use crate::state::ComboboxState;

/// One dropdown row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Always [`labels::DROPDOWN_OPTION`].
    pub aria_label: &'static str,
    pub text: String,
    /// Secondary text, labeled [`labels::ADDITIONAL_INFO`].
    pub additional_info: Option<String>,
    pub focused: bool,
    /// False for the "no match" row.
    pub clickable: bool,
}

/// Everything a host needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxView {
    pub id: String,
    /// Label of the text field.
    pub field_label: String,
    pub text: String,
    /// Label of the open/close toggle for the current visibility.
    pub toggle_label: &'static str,
    /// Label of the clear control, `None` when it is not shown.
    pub clear_label: Option<&'static str>,
    pub loading: bool,
    /// Rows, empty while closed.
    pub rows: Vec<RowView>,
}

impl ComboboxView {
    /// Snapshot `state` mounted with `config`.
    pub fn new<T: Clone>(config: &ComboboxConfig, state: &ComboboxState<T>) -> Self {
        let open = state.is_open();
        let toggle_label = if open {
            labels::CLOSE_DROPDOWN
        } else {
            labels::OPEN_DROPDOWN
        };
        let clear_label =
            (!config.no_clear && !state.text().is_empty()).then_some(labels::CLEAR_SELECTION);

        let rows = if open {
            state
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| RowView {
                    aria_label: labels::DROPDOWN_OPTION,
                    text: entry.text(),
                    additional_info: match entry {
                        RenderedEntry::Item(item) => item.additional_information.clone(),
                        _ => None,
                    },
                    focused: entry.is_focusable() && state.focus() == Some(i),
                    clickable: entry.is_focusable(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            id: config.id.clone(),
            field_label: config.aria_label.clone(),
            text: state.text().to_string(),
            toggle_label,
            clear_label,
            loading: state.is_loading(),
            rows,
        }
    }

    /// Rows carrying the given accessible label.
    pub fn rows_labeled(&self, aria_label: &str) -> usize {
        self.rows.iter().filter(|r| r.aria_label == aria_label).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Effect, Event, Item};

    #[test]
    fn test_closed_view_has_open_toggle_and_no_rows() {
        let config = ComboboxConfig::new("court").aria_label("Gericht");
        let state = ComboboxState::<u32>::new(&config);
        let view = ComboboxView::new(&config, &state);
        assert_eq!(view.toggle_label, "Dropdown öffnen");
        assert_eq!(view.field_label, "Gericht");
        assert!(view.rows.is_empty());
        assert_eq!(view.clear_label, None);
    }

    #[test]
    fn test_open_view_rows() {
        let config = ComboboxConfig::new("court");
        let mut state = ComboboxState::new(&config);
        let Some(Effect::Fetch { request, .. }) = state.reduce(Event::Focus).pop() else {
            panic!("expected fetch");
        };
        state.reduce(Event::FetchResolved {
            request,
            result: Ok(vec![
                Item::new("BGH", 1).with_additional_information("Karlsruhe"),
                Item::new("BVerfG", 2),
            ]),
        });
        state.reduce(Event::ArrowDown);

        let view = ComboboxView::new(&config, &state);
        assert_eq!(view.toggle_label, "Dropdown schließen");
        assert_eq!(view.rows_labeled("dropdown-option"), 2);
        assert!(view.rows[0].focused);
        assert_eq!(view.rows[0].additional_info.as_deref(), Some("Karlsruhe"));
        assert!(!view.loading);
    }

    #[test]
    fn test_clear_label_follows_no_clear() {
        let item = Item::new("BGH", 1);
        let config = ComboboxConfig::new("court");
        let mut state = ComboboxState::new(&config);
        state.set_model_value(Some(&item));
        assert_eq!(
            ComboboxView::new(&config, &state).clear_label,
            Some("Auswahl zurücksetzen")
        );

        let hidden = config.no_clear(true);
        assert_eq!(ComboboxView::new(&hidden, &state).clear_label, None);
    }
}
