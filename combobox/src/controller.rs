//! Async driver running a combobox against an item source.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::config::{ComboboxConfig, ConfigError};
use crate::event::{Effect, Event, FetchTrigger, RequestId};
use crate::source::{ItemSource, SourceError};
use crate::state::ComboboxState;
use crate::view::ComboboxView;
use crate::{Item, Selection};

type UpdateHandler<T> = Box<dyn FnMut(Option<Selection<T>>) + Send>;

/// A finished source request on its way back to the reducer.
struct Resolution<T> {
    request: RequestId,
    result: Result<Vec<Item<T>>, SourceError>,
}

/// Owns a [`ComboboxState`] and runs its effects.
///
/// Fetches run as tokio tasks; their results come back through
/// [`next_resolution`](Self::next_resolution) or
/// [`drain_resolutions`](Self::drain_resolutions), so all state changes
/// happen on the caller's loop. Value changes are reported to the update
/// handler and nowhere else.
///
/// Must be used inside a tokio runtime.
///
/// # Example
///
/// ```
/// use combobox::{ComboboxConfig, Controller, Event, Item, LocalSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = LocalSource::new([Item::new("BGH", 1), Item::new("BFH", 2)]);
/// let mut combobox = Controller::new(ComboboxConfig::new("court"), source, |value| {
///     println!("update: {value:?}");
/// })
/// .unwrap();
///
/// combobox.dispatch(Event::Focus);
/// combobox.settle().await;
/// assert_eq!(combobox.state().entries().len(), 2);
/// # }
/// ```
pub struct Controller<T> {
    config: ComboboxConfig,
    state: ComboboxState<T>,
    source: Arc<dyn ItemSource<T>>,
    on_update: UpdateHandler<T>,
    resolved_tx: mpsc::UnboundedSender<Resolution<T>>,
    resolved_rx: mpsc::UnboundedReceiver<Resolution<T>>,
    /// Timer of the debounced fetch not yet sent to the source.
    debounce: Option<CancellationToken>,
}

impl<T: Clone + Send + Sync + 'static> Controller<T> {
    /// Mount a combobox with no committed value.
    pub fn new(
        config: ComboboxConfig,
        source: impl ItemSource<T> + 'static,
        on_update: impl FnMut(Option<Selection<T>>) + Send + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (resolved_tx, resolved_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state: ComboboxState::new(&config),
            config,
            source: Arc::new(source),
            on_update: Box::new(on_update),
            resolved_tx,
            resolved_rx,
            debounce: None,
        })
    }

    /// Seed the committed value the host holds at mount.
    pub fn with_model_value(mut self, item: Option<Item<T>>) -> Self {
        self.state.set_model_value(item.as_ref());
        self
    }

    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    pub fn state(&self) -> &ComboboxState<T> {
        &self.state
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> ComboboxView {
        ComboboxView::new(&self.config, &self.state)
    }

    /// Feed one event through the reducer and run its effects.
    pub fn dispatch(&mut self, event: Event<T>) {
        for effect in self.state.reduce(event) {
            match effect {
                Effect::Fetch {
                    request,
                    filter,
                    trigger,
                } => self.spawn_fetch(request, filter, trigger),
                Effect::Update(value) => (self.on_update)(value),
            }
        }
    }

    /// Wait for the next source response and apply it.
    ///
    /// Stale responses are received here too and discarded by the reducer.
    pub async fn next_resolution(&mut self) {
        if let Some(resolution) = self.resolved_rx.recv().await {
            self.apply(resolution);
        }
    }

    /// Apply every response that has already arrived. Returns how many.
    pub fn drain_resolutions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(resolution) = self.resolved_rx.try_recv() {
            self.apply(resolution);
            count += 1;
        }
        count
    }

    /// Wait until the latest request has been answered.
    ///
    /// Never returns if the source never answers.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            self.next_resolution().await;
        }
    }

    fn apply(&mut self, resolution: Resolution<T>) {
        self.dispatch(Event::FetchResolved {
            request: resolution.request,
            result: resolution.result,
        });
    }

    fn spawn_fetch(&mut self, request: RequestId, filter: Option<String>, trigger: FetchTrigger) {
        // Any earlier timer belongs to a request that is stale now.
        if let Some(timer) = self.debounce.take() {
            timer.cancel();
        }

        let delay = match trigger {
            FetchTrigger::Keystroke => self.config.debounce.filter(|d| !d.is_zero()),
            FetchTrigger::Open => None,
        };
        let timer = CancellationToken::new();
        if delay.is_some() {
            self.debounce = Some(timer.clone());
        }

        debug!(
            "Combobox {} spawning {request} filter={filter:?} delay={delay:?}",
            self.config.id
        );

        let source = Arc::clone(&self.source);
        let tx = self.resolved_tx.clone();
        tokio::spawn(async move {
            if let Some(delay) = delay
                && !wait_or_cancel(delay, &timer).await
            {
                debug!("Combobox {request} superseded before it was sent");
                return;
            }
            let result = source.fetch(filter.as_deref()).await;
            // The receiver is gone once the widget is unmounted.
            let _ = tx.send(Resolution { request, result });
        });
    }
}

impl<T> Drop for Controller<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.debounce.take() {
            timer.cancel();
        }
    }
}

/// Sleep for `delay`; false if `timer` was cancelled first.
async fn wait_or_cancel(delay: Duration, timer: &CancellationToken) -> bool {
    tokio::select! {
        _ = timer.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}
