//! Combobox interaction state and its reducer.
//!
//! All rules live in [`ComboboxState::reduce`]: visibility, the text that
//! drives source requests, focus navigation over the rendered rows and the
//! single-notification commit. The reducer performs no I/O; it returns
//! [`Effect`]s for the caller to run.

use log::{debug, trace, warn};

use crate::config::ComboboxConfig;
use crate::event::{Effect, Event, FetchTrigger, RequestId};
use crate::filter::{RenderedEntry, build_entries, focusable_count};
use crate::source::SourceError;
use crate::{Item, Selection};

/// Whether the dropdown is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// A request that has been issued and not yet answered.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    request: RequestId,
    /// Text at the time the request was issued.
    query: String,
}

/// A commit requested while a newer list was still on its way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredCommit {
    /// Enter: the focused row, or the first one.
    Focused,
    /// Click on the row at this position.
    Row(usize),
}

/// State of one mounted combobox.
///
/// # Example
///
/// ```
/// use combobox::{ComboboxConfig, ComboboxState, Effect, Event, Item};
///
/// let mut state = ComboboxState::<u32>::new(&ComboboxConfig::new("court"));
/// let effects = state.reduce(Event::Focus);
/// let Some(Effect::Fetch { request, filter, .. }) = effects.into_iter().next() else {
///     unreachable!()
/// };
/// assert_eq!(filter, None);
///
/// state.reduce(Event::FetchResolved {
///     request,
///     result: Ok(vec![Item::new("BGH", 1)]),
/// });
/// assert_eq!(state.entries().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ComboboxState<T> {
    visibility: Visibility,
    /// Raw text shown in the field.
    text: String,
    /// Label of the host's committed value, if any.
    committed_label: Option<String>,
    /// `None` while focus is on the text field.
    focus: Option<usize>,
    entries: Vec<RenderedEntry<T>>,
    last_request: RequestId,
    pending: Option<PendingFetch>,
    /// Applied once `pending` resolves.
    deferred: Option<DeferredCommit>,
    manual_entry: bool,
    no_clear: bool,
}

impl<T: Clone> ComboboxState<T> {
    /// Create a closed combobox with no committed value.
    pub fn new(config: &ComboboxConfig) -> Self {
        Self {
            visibility: Visibility::Closed,
            text: String::new(),
            committed_label: None,
            focus: None,
            entries: Vec::new(),
            last_request: RequestId::default(),
            pending: None,
            deferred: None,
            manual_entry: config.manual_entry,
            no_clear: config.no_clear,
        }
    }

    /// Seed the committed value; its label also becomes the initial filter.
    pub fn set_model_value(&mut self, item: Option<&Item<T>>) {
        if let Some(item) = item {
            self.committed_label = Some(item.label.clone());
            self.text = item.label.clone();
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Text currently displayed in the field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Label of the committed value as last known to the widget.
    pub fn committed_label(&self) -> Option<&str> {
        self.committed_label.as_deref()
    }

    /// Focused row among the focusable rows, `None` for the text field.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Focus as a signed index where `-1` is the text field.
    pub fn focus_index(&self) -> isize {
        self.focus.map_or(-1, |i| i as isize)
    }

    /// Rows as last built from a source response.
    pub fn entries(&self) -> &[RenderedEntry<T>] {
        &self.entries
    }

    /// Row that currently has focus.
    pub fn focused_entry(&self) -> Option<&RenderedEntry<T>> {
        let index = self.focus?;
        self.focusable().nth(index)
    }

    /// Whether a source request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the most recently issued request.
    pub fn last_request(&self) -> RequestId {
        self.last_request
    }

    pub fn manual_entry(&self) -> bool {
        self.manual_entry
    }

    pub fn no_clear(&self) -> bool {
        self.no_clear
    }

    // -------------------------------------------------------------------------
    // Reducer
    // -------------------------------------------------------------------------

    /// Apply one event and return the effects it requires.
    pub fn reduce(&mut self, event: Event<T>) -> Vec<Effect<T>> {
        trace!(
            "Combobox::reduce event={} open={} text={:?} focus={}",
            event.name(),
            self.is_open(),
            self.text,
            self.focus_index()
        );

        match event {
            Event::Focus | Event::Open => self.open(),
            Event::Type(text) => self.type_text(text),
            Event::ArrowDown if !self.is_open() => self.open(),
            Event::ArrowDown => {
                self.focus_down();
                Vec::new()
            }
            Event::ArrowUp => {
                self.focus_up();
                Vec::new()
            }
            Event::Enter => self.commit_focused(),
            Event::Click(index) => self.commit_at(index),
            Event::Escape => {
                self.rollback();
                Vec::new()
            }
            Event::Clear => self.clear(),
            Event::Close | Event::Blur => {
                self.close();
                Vec::new()
            }
            Event::FetchResolved { request, result } => self.resolve(request, result),
            Event::ModelChanged(label) => {
                if !self.is_open() {
                    self.text = label.clone().unwrap_or_default();
                }
                self.committed_label = label;
                Vec::new()
            }
        }
    }

    // -------------------------------------------------------------------------
    // Visibility and queries
    // -------------------------------------------------------------------------

    fn open(&mut self) -> Vec<Effect<T>> {
        if self.is_open() {
            return Vec::new();
        }
        self.visibility = Visibility::Open;
        self.focus = None;
        vec![self.issue_fetch(FetchTrigger::Open)]
    }

    fn close(&mut self) {
        self.visibility = Visibility::Closed;
        self.focus = None;
        self.deferred = None;
    }

    fn type_text(&mut self, text: String) -> Vec<Effect<T>> {
        self.text = text;
        // Typing on supersedes a commit waiting for the previous list.
        self.deferred = None;
        if !self.is_open() {
            self.visibility = Visibility::Open;
            self.focus = None;
        }
        vec![self.issue_fetch(FetchTrigger::Keystroke)]
    }

    fn issue_fetch(&mut self, trigger: FetchTrigger) -> Effect<T> {
        let request = self.last_request.next();
        self.last_request = request;
        self.pending = Some(PendingFetch {
            request,
            query: self.text.clone(),
        });
        let filter = (!self.text.is_empty()).then(|| self.text.clone());
        debug!("Combobox issuing {request} filter={filter:?} trigger={trigger:?}");
        Effect::Fetch {
            request,
            filter,
            trigger,
        }
    }

    fn resolve(
        &mut self,
        request: RequestId,
        result: Result<Vec<Item<T>>, SourceError>,
    ) -> Vec<Effect<T>> {
        let query = match self.pending.take() {
            Some(pending) if pending.request == request => pending.query,
            other => {
                debug!("Combobox discarding stale {request}");
                self.pending = other;
                return Vec::new();
            }
        };

        let items = result.unwrap_or_else(|err| {
            warn!("Combobox {request} failed: {err}");
            Vec::new()
        });
        self.entries = build_entries(&items, &query, self.manual_entry);
        self.clamp_focus();

        match self.deferred.take() {
            Some(DeferredCommit::Focused) => self.commit_focused(),
            Some(DeferredCommit::Row(index)) => self.commit_at(index),
            None => Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Focus navigation
    // -------------------------------------------------------------------------

    fn focusable(&self) -> impl Iterator<Item = &RenderedEntry<T>> {
        self.entries.iter().filter(|e| e.is_focusable())
    }

    fn focus_down(&mut self) {
        let count = focusable_count(&self.entries);
        if count == 0 {
            return;
        }
        self.focus = Some(match self.focus {
            None => 0,
            Some(i) => (i + 1).min(count - 1),
        });
    }

    fn focus_up(&mut self) {
        if let Some(i) = self.focus
            && i > 0
        {
            self.focus = Some(i - 1);
        }
    }

    fn clamp_focus(&mut self) {
        let count = focusable_count(&self.entries);
        self.focus = match self.focus {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    // -------------------------------------------------------------------------
    // Commit, rollback and clear
    // -------------------------------------------------------------------------

    /// Hold a commit until the outstanding request has rebuilt the rows.
    ///
    /// Returns true if the commit was deferred.
    fn defer(&mut self, commit: DeferredCommit) -> bool {
        let Some(pending) = &self.pending else {
            return false;
        };
        debug!("Combobox deferring {commit:?} until {} resolves", pending.request);
        self.deferred = Some(commit);
        true
    }

    fn commit_focused(&mut self) -> Vec<Effect<T>> {
        if !self.is_open() || self.defer(DeferredCommit::Focused) {
            return Vec::new();
        }
        let target = self.focus.unwrap_or(0);
        let entry = self.focusable().nth(target).cloned();
        match entry {
            Some(entry) => self.commit(entry),
            None => Vec::new(),
        }
    }

    fn commit_at(&mut self, index: usize) -> Vec<Effect<T>> {
        if !self.is_open() || self.defer(DeferredCommit::Row(index)) {
            return Vec::new();
        }
        let entry = self.entries.get(index).cloned();
        match entry {
            Some(entry) if entry.is_focusable() => self.commit(entry),
            _ => Vec::new(),
        }
    }

    fn commit(&mut self, entry: RenderedEntry<T>) -> Vec<Effect<T>> {
        let selection = match entry {
            RenderedEntry::Item(item) => {
                debug!("Combobox committing item {:?}", item.label);
                self.text = item.label.clone();
                self.committed_label = Some(item.label);
                Selection::Existing(item.value)
            }
            RenderedEntry::CreateNew(label) => {
                debug!("Combobox committing new value {label:?}");
                self.text = label.clone();
                self.committed_label = Some(label.clone());
                Selection::Created { label }
            }
            RenderedEntry::Empty => return Vec::new(),
        };
        self.close();
        vec![Effect::Update(Some(selection))]
    }

    fn rollback(&mut self) {
        if !self.is_open() {
            return;
        }
        self.text = self.committed_label.clone().unwrap_or_default();
        self.close();
    }

    fn clear(&mut self) -> Vec<Effect<T>> {
        if self.no_clear {
            debug!("Combobox ignoring clear, control hidden");
            return Vec::new();
        }
        self.committed_label = None;
        self.text.clear();
        self.close();
        vec![Effect::Update(None)]
    }
}

/// Pure form of [`ComboboxState::reduce`].
pub fn reduce<T: Clone>(
    mut state: ComboboxState<T>,
    event: Event<T>,
) -> (ComboboxState<T>, Vec<Effect<T>>) {
    let effects = state.reduce(event);
    (state, effects)
}
