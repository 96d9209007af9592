//! Query normalization and the rendered entry list.

use crate::Item;
use crate::labels;

/// Case-fold `text` and strip all whitespace.
///
/// The normalized form is only used for matching, never displayed.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check if `label` contains `query`, ignoring case and whitespace on both sides.
///
/// An empty query matches every label.
pub fn label_matches(label: &str, query: &str) -> bool {
    normalize(label).contains(&normalize(query))
}

/// Check if `label` and `query` are equal, ignoring case and whitespace.
pub fn is_exact_match(label: &str, query: &str) -> bool {
    normalize(label) == normalize(query)
}

/// Items whose label contains `query`, in their original order.
///
/// `None` or an empty query keeps every item.
pub fn substring_filter<'a, T>(query: Option<&str>, items: &'a [Item<T>]) -> Vec<&'a Item<T>> {
    match query {
        None => items.iter().collect(),
        Some(query) => items
            .iter()
            .filter(|item| label_matches(&item.label, query))
            .collect(),
    }
}

/// One row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedEntry<T> {
    /// An item delivered by the source.
    Item(Item<T>),
    /// Offer to commit the raw typed text as a new value.
    CreateNew(String),
    /// Placeholder row when nothing can be shown. Never focusable.
    Empty,
}

impl<T> RenderedEntry<T> {
    /// Text displayed for this row.
    pub fn text(&self) -> String {
        match self {
            Self::Item(item) => item.label.clone(),
            Self::CreateNew(text) => labels::create_new(text),
            Self::Empty => labels::NO_MATCH.to_string(),
        }
    }

    /// Whether keyboard focus may land on this row.
    pub fn is_focusable(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Build the dropdown rows from source items and the raw query.
///
/// Items are taken as delivered; filtering is the source's job. A create-new
/// row is appended when manual entry is enabled, the query is non-empty and
/// no item label equals the query. An empty result becomes a single
/// [`RenderedEntry::Empty`].
pub fn build_entries<T: Clone>(
    items: &[Item<T>],
    query: &str,
    manual_entry: bool,
) -> Vec<RenderedEntry<T>> {
    let mut entries: Vec<RenderedEntry<T>> =
        items.iter().cloned().map(RenderedEntry::Item).collect();

    if manual_entry
        && !normalize(query).is_empty()
        && !items.iter().any(|item| is_exact_match(&item.label, query))
    {
        entries.push(RenderedEntry::CreateNew(query.to_string()));
    }

    if entries.is_empty() {
        entries.push(RenderedEntry::Empty);
    }

    entries
}

/// Number of rows that can take focus.
pub fn focusable_count<T>(entries: &[RenderedEntry<T>]) -> usize {
    entries.iter().filter(|e| e.is_focusable()).count()
}
