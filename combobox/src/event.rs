//! Events fed into the reducer and effects it asks the host to run.

use crate::source::SourceError;
use crate::{Item, Selection};

/// Identifier of a source request, increasing with every request issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request#{}", self.0)
    }
}

/// What caused a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// The dropdown was opened.
    Open,
    /// The text changed while the dropdown was open.
    Keystroke,
}

/// Input to [`ComboboxState::reduce`](crate::ComboboxState::reduce).
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    /// The text field gained focus.
    Focus,
    /// The text field now holds this text.
    Type(String),
    /// Move focus one row up; stops at the first row.
    ArrowUp,
    /// Move focus one row down, or open the dropdown while closed.
    ArrowDown,
    /// Commit the focused row, or the first row while focus is on the field.
    /// While a request is outstanding the commit waits for its rows.
    Enter,
    /// A row was clicked (index into the rendered entries).
    Click(usize),
    /// Close and restore the committed label.
    Escape,
    /// The clear control was activated.
    Clear,
    /// The open toggle was activated.
    Open,
    /// The close toggle was activated.
    Close,
    /// Focus left the widget (Tab or click outside).
    Blur,
    /// A source request finished.
    FetchResolved {
        request: RequestId,
        result: Result<Vec<Item<T>>, SourceError>,
    },
    /// The host's committed value changed; carries its label.
    ModelChanged(Option<String>),
}

impl<T> Event<T> {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Type(_) => "type",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Enter => "enter",
            Self::Click(_) => "click",
            Self::Escape => "escape",
            Self::Clear => "clear",
            Self::Open => "open",
            Self::Close => "close",
            Self::Blur => "blur",
            Self::FetchResolved { .. } => "fetch-resolved",
            Self::ModelChanged(_) => "model-changed",
        }
    }
}

/// Work requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    /// Query the item source. The answer must come back as
    /// [`Event::FetchResolved`] with the same `request`.
    Fetch {
        request: RequestId,
        /// The field text, or `None` while the field is empty. The first
        /// open and a keystroke that empties the field both ask for the
        /// unfiltered list.
        filter: Option<String>,
        trigger: FetchTrigger,
    },
    /// Ask the host to store a new value (`None` clears it).
    Update(Option<Selection<T>>),
}
