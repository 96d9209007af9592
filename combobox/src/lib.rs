//! Searchable selection widget ("combobox") without a UI toolkit.
//!
//! A combobox is a text field with a filterable dropdown. Candidates come from
//! an [`ItemSource`], either an in-memory [`LocalSource`] or a remote lookup.
//! The interaction rules live in a synchronous reducer,
//! [`ComboboxState::reduce`], which returns [`Effect`]s: source requests and
//! value-change notifications. [`Controller`] runs those effects on tokio and
//! hands every committed value to the host through a single callback.
//!
//! The host owns the committed value. The widget only asks for changes and
//! asks exactly once per commit.

pub mod config;
pub mod controller;
pub mod event;
pub mod filter;
pub mod item;
pub mod labels;
pub mod source;
pub mod state;
pub mod view;

pub use config::{ComboboxConfig, ConfigError};
pub use controller::Controller;
pub use event::{Effect, Event, FetchTrigger, RequestId};
pub use filter::RenderedEntry;
pub use item::{Item, Selection};
pub use source::{FnSource, ItemSource, LocalSource, ServiceResponse, SourceError};
pub use state::{ComboboxState, Visibility};
pub use view::{ComboboxView, RowView};
