//! Shared fixtures for combobox integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use combobox::filter::substring_filter;
use combobox::{ComboboxConfig, ComboboxState, Effect, Event, Item, Selection};
use serde::Serialize;

/// Value type used by the court fixtures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Court {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub label: String,
}

pub fn court(n: u32) -> Court {
    Court {
        kind: format!("courttype{n}"),
        location: format!("courtlocation{n}"),
        label: format!("courtlabel{n}"),
    }
}

/// `testItem1`, `testItem2`, `testItem3`.
pub fn test_items() -> Vec<Item<Court>> {
    (1..=3)
        .map(|n| Item::new(format!("testItem{n}"), court(n)))
        .collect()
}

/// Records every update a controller reports.
pub struct Updates<T>(Arc<Mutex<Vec<Option<Selection<T>>>>>);

impl<T> Updates<T> {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone + Send + 'static> Updates<T> {
    pub fn handler(&self) -> impl FnMut(Option<Selection<T>>) + Send + 'static {
        let log = Arc::clone(&self.0);
        move |value| log.lock().unwrap().push(value)
    }

    pub fn all(&self) -> Vec<Option<Selection<T>>> {
        self.0.lock().unwrap().clone()
    }
}

/// Drives the reducer directly, answering fetches synchronously from a list.
pub struct Harness<T> {
    pub state: ComboboxState<T>,
    pub items: Vec<Item<T>>,
    pub updates: Vec<Option<Selection<T>>>,
    pub fetches: Vec<Option<String>>,
}

impl<T: Clone> Harness<T> {
    pub fn new(config: &ComboboxConfig, items: Vec<Item<T>>) -> Self {
        Self {
            state: ComboboxState::new(config),
            items,
            updates: Vec::new(),
            fetches: Vec::new(),
        }
    }

    pub fn send(&mut self, event: Event<T>) {
        for effect in self.state.reduce(event) {
            match effect {
                Effect::Fetch {
                    request, filter, ..
                } => {
                    let items: Vec<Item<T>> = substring_filter(filter.as_deref(), &self.items)
                        .into_iter()
                        .cloned()
                        .collect();
                    self.fetches.push(filter);
                    self.send(Event::FetchResolved {
                        request,
                        result: Ok(items),
                    });
                }
                Effect::Update(value) => self.updates.push(value),
            }
        }
    }

    pub fn send_all(&mut self, events: impl IntoIterator<Item = Event<T>>) {
        for event in events {
            self.send(event);
        }
    }

    pub fn row_texts(&self) -> Vec<String> {
        self.state.entries().iter().map(|e| e.text()).collect()
    }
}
