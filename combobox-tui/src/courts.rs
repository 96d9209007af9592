//! Demo data: German federal courts behind a slow lookup.

use std::time::Duration;

use async_trait::async_trait;
use combobox::{Item, ItemSource, LocalSource, SourceError};
use log::debug;
use serde::Serialize;

/// The value type carried by the demo combobox.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Court {
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    pub label: String,
}

impl Court {
    fn new(kind: &str, location: &str, label: &str) -> Self {
        Self {
            kind: kind.to_string(),
            location: location.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn court_items() -> Vec<Item<Court>> {
    [
        ("BGH", "Karlsruhe", "Bundesgerichtshof"),
        ("BVerfG", "Karlsruhe", "Bundesverfassungsgericht"),
        ("BVerwG", "Leipzig", "Bundesverwaltungsgericht"),
        ("BFH", "München", "Bundesfinanzhof"),
        ("BAG", "Erfurt", "Bundesarbeitsgericht"),
        ("BSG", "Kassel", "Bundessozialgericht"),
        ("BPatG", "München", "Bundespatentgericht"),
    ]
    .into_iter()
    .map(|(kind, location, label)| {
        Item::new(label, Court::new(kind, location, label))
            .with_additional_information(format!("{kind}, {location}"))
    })
    .collect()
}

/// Wraps a source and answers after a fixed delay, like a remote lookup.
pub struct SlowSource<S> {
    inner: S,
    latency: Duration,
}

impl<S> SlowSource<S> {
    pub fn new(inner: S, latency: Duration) -> Self {
        Self { inner, latency }
    }
}

impl SlowSource<LocalSource<Court>> {
    pub fn courts(latency: Duration) -> Self {
        Self::new(LocalSource::new(court_items()), latency)
    }
}

#[async_trait]
impl<T, S> ItemSource<T> for SlowSource<S>
where
    T: Send + 'static,
    S: ItemSource<T>,
{
    async fn fetch(&self, filter: Option<&str>) -> Result<Vec<Item<T>>, SourceError> {
        debug!("Court lookup filter={filter:?} latency={:?}", self.latency);
        tokio::time::sleep(self.latency).await;
        self.inner.fetch(filter).await
    }
}
