//! Demo loop: one court combobox in a terminal.

use std::io;

use combobox::{ComboboxView, Controller, Event, Selection};
use crossterm::event::{Event as CrosstermEvent, EventStream};
use futures::StreamExt;
use log::{debug, info};
use tokio::sync::mpsc;

use crate::courts::Court;
use crate::keymap::{Action, convert_key_event, convert_mouse_event};
use crate::terminal::{Emphasis, Line, Terminal};

/// Terminal row of the first dropdown row.
const FIRST_ROW: u16 = 2;

const HELP: &str =
    "↑/↓ wählen · Enter übernehmen · Esc verwerfen · Tab Fokus · Ctrl+O Dropdown · Ctrl+L leeren · Ctrl+Q beenden";

enum Step {
    Terminal(Option<io::Result<CrosstermEvent>>),
    Resolved,
}

/// Hosts the combobox and owns its committed value.
pub struct App {
    combobox: Controller<Court>,
    updates: mpsc::UnboundedReceiver<Option<Selection<Court>>>,
    value: Option<Selection<Court>>,
    focused: bool,
}

impl App {
    /// Build the app around a controller whose update handler sends on the
    /// other end of `updates`.
    pub fn new(
        combobox: Controller<Court>,
        updates: mpsc::UnboundedReceiver<Option<Selection<Court>>>,
    ) -> Self {
        Self {
            combobox,
            updates,
            value: None,
            focused: false,
        }
    }

    pub async fn run(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let mut events = EventStream::new();
        self.dispatch(Event::Focus);

        loop {
            terminal.draw(&self.lines())?;

            let step = tokio::select! {
                event = events.next() => Step::Terminal(event),
                _ = self.combobox.next_resolution() => Step::Resolved,
            };

            match step {
                Step::Terminal(None) => break,
                Step::Terminal(Some(event)) => {
                    if !self.handle(event?) {
                        break;
                    }
                }
                Step::Resolved => {}
            }
            self.collect_updates();
        }

        info!("Leaving with value {}", describe(self.value.as_ref()));
        Ok(())
    }

    /// Returns false when the user asked to quit.
    fn handle(&mut self, event: CrosstermEvent) -> bool {
        let text = self.combobox.state().text().to_string();
        let action = match event {
            CrosstermEvent::Key(key) => convert_key_event(key, &text),
            CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse),
            _ => None,
        };
        let Some(action) = action else {
            return true;
        };

        match action {
            Action::Quit => return false,
            Action::Widget(event) => self.dispatch(event),
            Action::ToggleFocus => {
                if self.focused {
                    self.dispatch(Event::Blur);
                } else {
                    self.dispatch(Event::Focus);
                }
            }
            Action::ToggleOpen => {
                if self.combobox.state().is_open() {
                    self.dispatch(Event::Close);
                } else {
                    self.dispatch(Event::Open);
                }
            }
            Action::ClickRow(row) => {
                if let Some(index) = row_index(row, self.combobox.view().rows.len()) {
                    self.dispatch(Event::Click(index));
                } else if row == 0 {
                    self.dispatch(Event::Focus);
                }
            }
        }
        true
    }

    fn dispatch(&mut self, event: Event<Court>) {
        debug!("Dispatching {}", event.name());
        self.focused = !matches!(event, Event::Blur);
        self.combobox.dispatch(event);
    }

    fn collect_updates(&mut self) {
        while let Ok(value) = self.updates.try_recv() {
            info!("Committed {}", describe(value.as_ref()));
            self.value = value;
        }
    }

    fn lines(&self) -> Vec<Line> {
        render(&self.combobox.view(), self.focused, self.value.as_ref())
    }
}

/// Dropdown index for a clicked terminal row.
fn row_index(row: u16, rows: usize) -> Option<usize> {
    let index = row.checked_sub(FIRST_ROW)? as usize;
    (index < rows).then_some(index)
}

fn describe(value: Option<&Selection<Court>>) -> String {
    match value {
        Some(value) => serde_json::to_string(value).unwrap_or_else(|e| e.to_string()),
        None => "-".to_string(),
    }
}

fn render(view: &ComboboxView, focused: bool, value: Option<&Selection<Court>>) -> Vec<Line> {
    let cursor = if focused { "▏" } else { "" };
    let mut header = format!("{}: {}{cursor}  [{}]", view.field_label, view.text, view.toggle_label);
    if let Some(clear) = view.clear_label {
        header.push_str(&format!(" [{clear}]"));
    }

    let mut lines = vec![Line::new(header, Emphasis::Bold)];
    lines.push(if view.loading {
        Line::new("lädt …", Emphasis::Dim)
    } else {
        Line::plain("")
    });

    for row in &view.rows {
        let marker = if row.focused { "›" } else { " " };
        let mut text = format!("{marker} {}", row.text);
        if let Some(info) = &row.additional_info {
            text.push_str(&format!("  ({info})"));
        }
        let emphasis = match (row.focused, row.clickable) {
            (true, _) => Emphasis::Reverse,
            (false, false) => Emphasis::Dim,
            (false, true) => Emphasis::Normal,
        };
        lines.push(Line::new(text, emphasis));
    }

    lines.push(Line::plain(""));
    lines.push(Line::plain(format!("Wert: {}", describe(value))));
    lines.push(Line::new(HELP, Emphasis::Dim));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use combobox::{ComboboxConfig, ComboboxState, Item};

    use crate::courts::court_items;

    fn open_view(query: &str) -> ComboboxView {
        let config = ComboboxConfig::new("court").aria_label("Gericht");
        let mut state = ComboboxState::new(&config);
        let request = state
            .reduce(Event::Type(query.into()))
            .into_iter()
            .find_map(|effect| match effect {
                combobox::Effect::Fetch { request, .. } => Some(request),
                _ => None,
            })
            .unwrap();
        let items: Vec<Item<Court>> = court_items()
            .into_iter()
            .filter(|item| combobox::filter::label_matches(&item.label, query))
            .collect();
        state.reduce(Event::FetchResolved {
            request,
            result: Ok(items),
        });
        state.reduce(Event::ArrowDown);
        ComboboxView::new(&config, &state)
    }

    #[test]
    fn test_row_index() {
        assert_eq!(row_index(0, 3), None);
        assert_eq!(row_index(FIRST_ROW, 3), Some(0));
        assert_eq!(row_index(FIRST_ROW + 2, 3), Some(2));
        assert_eq!(row_index(FIRST_ROW + 3, 3), None);
    }

    #[test]
    fn test_render_rows_below_header() {
        let view = open_view("verwaltung");
        let lines = render(&view, true, None);
        assert!(lines[0].text.starts_with("Gericht: verwaltung"));
        assert!(lines[0].text.contains("[Dropdown schließen]"));
        assert!(lines[0].text.contains("[Auswahl zurücksetzen]"));
        let row = &lines[FIRST_ROW as usize];
        assert_eq!(row.emphasis, Emphasis::Reverse);
        assert!(row.text.contains("Bundesverwaltungsgericht"));
        assert!(row.text.contains("(BVerwG, Leipzig)"));
    }

    #[test]
    fn test_render_no_match_row_dimmed() {
        let view = open_view("xyz");
        let lines = render(&view, true, None);
        let row = &lines[FIRST_ROW as usize];
        assert_eq!(row.emphasis, Emphasis::Dim);
        assert!(row.text.contains("Kein passender Eintrag"));
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe(None), "-");
        let created = Selection::Created {
            label: "Amtsgericht Bonn".into(),
        };
        assert_eq!(describe(Some(&created)), r#"{"label":"Amtsgericht Bonn"}"#);
    }
}
