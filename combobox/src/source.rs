//! Item sources: where a combobox gets its candidates from.

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde::Deserialize;
use thiserror::Error;

use crate::Item;
use crate::filter::substring_filter;

/// Failure of an item source request.
///
/// The widget never surfaces these to the host; a failed request renders the
/// same list as a request that returned no items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("item service answered with status {0}")]
    Status(u16),
    #[error("item service request failed: {0}")]
    Request(String),
}

/// Provider of candidate items.
///
/// Implementations may filter locally or forward the filter to a remote
/// service. The widget issues one call per open and per keystroke and never
/// retries.
#[async_trait]
pub trait ItemSource<T>: Send + Sync {
    /// Fetch the items matching `filter` (`None` for "no filter yet").
    async fn fetch(&self, filter: Option<&str>) -> Result<Vec<Item<T>>, SourceError>;
}

/// Response shape of a lookup service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceResponse<T> {
    pub status: u16,
    #[serde(default = "Vec::new")]
    pub data: Vec<Item<T>>,
}

impl<T> ServiceResponse<T> {
    /// A successful response.
    pub fn ok(data: Vec<Item<T>>) -> Self {
        Self { status: 200, data }
    }

    /// Items of a successful response; any status of 300 or above is an error.
    pub fn into_items(self) -> Result<Vec<Item<T>>, SourceError> {
        if self.status >= 300 {
            Err(SourceError::Status(self.status))
        } else {
            Ok(self.data)
        }
    }
}

/// In-memory source filtering by case- and whitespace-insensitive substring.
#[derive(Debug, Clone)]
pub struct LocalSource<T> {
    items: Vec<Item<T>>,
}

impl<T> LocalSource<T> {
    /// Create a source over a fixed item list.
    pub fn new(items: impl IntoIterator<Item = Item<T>>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> ItemSource<T> for LocalSource<T> {
    async fn fetch(&self, filter: Option<&str>) -> Result<Vec<Item<T>>, SourceError> {
        Ok(substring_filter(filter, &self.items)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Source backed by a closure returning a service response.
///
/// # Example
///
/// ```
/// use combobox::{FnSource, Item, ServiceResponse};
/// use futures::FutureExt;
///
/// let source = FnSource::new(|filter: Option<String>| {
///     async move {
///         let label = filter.unwrap_or_default();
///         Ok::<_, combobox::SourceError>(ServiceResponse::ok(vec![Item::new(label, ())]))
///     }
///     .boxed()
/// });
/// # let _ = source;
/// ```
pub struct FnSource<F> {
    fetch: F,
}

impl<F> FnSource<F> {
    pub fn new(fetch: F) -> Self {
        Self { fetch }
    }
}

#[async_trait]
impl<T, F> ItemSource<T> for FnSource<F>
where
    T: Send + 'static,
    F: Fn(Option<String>) -> BoxFuture<'static, Result<ServiceResponse<T>, SourceError>>
        + Send
        + Sync,
{
    async fn fetch(&self, filter: Option<&str>) -> Result<Vec<Item<T>>, SourceError> {
        (self.fetch)(filter.map(str::to_string)).await?.into_items()
    }
}
