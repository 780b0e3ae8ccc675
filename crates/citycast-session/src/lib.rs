//! Weather session for CityCast: view state, the lookup controller and the
//! saved-cities store.

pub mod controller;
pub mod favorites;
pub mod render;
pub mod service;
pub mod state;
pub mod store;

pub use controller::WeatherSession;
pub use favorites::Favorites;
pub use render::render_session;
pub use service::SessionMessage;
pub use state::{SessionState, VisualState};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, LAST_CITY_KEY, SAVED_CITIES_KEY};
