//! Weather session controller.
//!
//! Owns the session state and orchestrates the two fetches of a lookup.
//! State changes only on the owning thread: async results arrive as
//! `SessionMessage`s and are applied with `apply`, `process_pending` or
//! `wait_until_idle`.
//!
//! Every lookup is tagged with an increasing request id. Messages from a
//! lookup that has since been superseded are discarded, so a slow stale
//! response never overwrites a newer one.

use std::sync::Arc;

use citycast_weather::{background_url, WeatherProvider};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::favorites::Favorites;
use crate::service::{self, SessionMessage};
use crate::state::{SessionState, VisualState};
use crate::store::{KeyValueStore, StoreError, LAST_CITY_KEY};

pub struct WeatherSession {
    state: SessionState,
    provider: Arc<WeatherProvider>,
    store: Arc<dyn KeyValueStore>,
    runtime: Handle,
    tx: UnboundedSender<SessionMessage>,
    rx: UnboundedReceiver<SessionMessage>,
    latest_request: u64,
}

impl WeatherSession {
    pub fn new(
        provider: Arc<WeatherProvider>,
        store: Arc<dyn KeyValueStore>,
        runtime: Handle,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: SessionState::default(),
            provider,
            store,
            runtime,
            tx,
            rx,
            latest_request: 0,
        }
    }

    /// Load saved cities and resume the last viewed city.
    ///
    /// Returns the request id when a lookup was started.
    pub fn on_startup(&mut self) -> Option<u64> {
        self.state.favorites = Favorites::load(self.store.as_ref());
        tracing::info!("Loaded {} saved cities", self.state.favorites.len());

        let last_city = self.store.get(LAST_CITY_KEY)?;
        tracing::info!("Resuming last viewed city {}", last_city);
        self.request_weather(&last_city)
    }

    /// Start a lookup. The session is `Loading` when this returns.
    ///
    /// Returns `None` without touching state if the name is blank.
    pub fn request_weather(&mut self, city: &str) -> Option<u64> {
        let city = city.trim();
        if city.is_empty() {
            return None;
        }

        self.latest_request += 1;
        let request_id = self.latest_request;
        self.state.on_request_started();
        tracing::debug!("Request {} for {}", request_id, city);

        service::request_fetch(
            &self.runtime,
            &self.tx,
            Arc::clone(&self.provider),
            request_id,
            city.to_string(),
        );
        Some(request_id)
    }

    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.state.search_input = text.into();
    }

    /// Submit the search box: looks up its content and clears it.
    pub fn submit_search(&mut self) -> Option<u64> {
        if self.state.search_input.trim().is_empty() {
            return None;
        }
        let city = std::mem::take(&mut self.state.search_input);
        self.request_weather(&city)
    }

    /// Look up a saved city again.
    pub fn select_favorite(&mut self, name: &str) -> Option<u64> {
        self.request_weather(name)
    }

    /// Save the displayed city.
    ///
    /// Returns `Ok(false)` without writing when nothing is displayed or the
    /// city is already saved. The in-memory list only changes once the
    /// store accepted the write.
    pub fn save_current_city(&mut self) -> Result<bool, StoreError> {
        let Some(name) = self.state.displayed_city().map(str::to_string) else {
            return Ok(false);
        };

        let mut updated = self.state.favorites.clone();
        if !updated.insert(name) {
            return Ok(false);
        }
        updated.persist(self.store.as_ref())?;
        self.state.favorites = updated;
        Ok(true)
    }

    /// Remove a saved city by exact name. The list is written even when the
    /// name was absent. Returns whether anything was removed.
    pub fn remove_city(&mut self, name: &str) -> Result<bool, StoreError> {
        let mut updated = self.state.favorites.clone();
        let removed = updated.remove(name);
        updated.persist(self.store.as_ref())?;
        self.state.favorites = updated;
        Ok(removed)
    }

    /// Apply one async result. Results of superseded lookups are dropped.
    pub fn apply(&mut self, msg: SessionMessage) {
        if msg.request_id() != self.latest_request {
            tracing::debug!(
                "Discarding result of request {} (latest is {})",
                msg.request_id(),
                self.latest_request
            );
            return;
        }

        match msg {
            SessionMessage::CurrentDone {
                city,
                result: Ok(current),
                ..
            } => {
                tracing::info!("Current weather for {} loaded", current.city_name);
                if let Err(e) = self.store.set(LAST_CITY_KEY, &city) {
                    tracing::warn!("Failed to persist last city: {}", e);
                }
                self.state.on_current_loaded(current);
            }
            SessionMessage::CurrentDone {
                city,
                result: Err(e),
                ..
            } => {
                tracing::error!("Weather API error for {}: {}", city, e);
                self.state.on_current_failed(e);
            }
            SessionMessage::ForecastDone { result: Ok(samples), .. } => {
                self.state.on_forecast_settled(Some(samples.as_slice()));
                tracing::debug!("Forecast has {} days", self.state.forecast.len());
            }
            SessionMessage::ForecastDone { result: Err(e), .. } => {
                tracing::error!("Forecast API error: {}", e);
                self.state.on_forecast_settled(None);
            }
        }
    }

    /// Apply every result that has already arrived, without waiting.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.apply(msg);
            applied += 1;
        }
        applied
    }

    /// Apply results as they arrive until the latest lookup has settled.
    pub async fn wait_until_idle(&mut self) {
        while self.state.is_loading {
            match self.rx.recv().await {
                Some(msg) => self.apply(msg),
                None => break,
            }
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn visual_state(&self) -> VisualState {
        self.state.visual_state()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.state.favorites
    }

    /// Whether the displayed city is already saved.
    pub fn is_current_saved(&self) -> bool {
        self.state
            .displayed_city()
            .is_some_and(|name| self.state.favorites.contains(name))
    }

    /// Background image for the current theme.
    pub fn background_url(&self) -> String {
        background_url(self.state.theme_key.as_deref())
    }

    pub fn icon_url(&self, icon_id: &str) -> String {
        self.provider.icon_url(icon_id)
    }
}
