//! Core domain logic for PlacePicker.
//! Hosts (FFI, CLI) render and forward events; every invariant lives here.

pub mod config;
pub mod geo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod ui;

pub use config::PickerConfig;
pub use geo::distance::{distances_from, haversine_km, sort_by_distance};
pub use geo::{
    Coordinate, FixedPosition, GeolocationError, GeolocationProvider, NoGeolocation, Position,
};
pub use logging::{default_log_level, init_logging, LoggingError};
pub use model::catalog::{Catalog, CatalogError};
pub use model::place::{Place, PlaceId, PlaceImage, PlaceValidationError};
pub use repo::selection_store::{SelectionStore, StoreError, StoreResult, SELECTED_PLACES_KEY};
pub use service::picker_service::{LocationStatus, PlacePicker};
pub use storage::{
    KeyValueStorage, MemoryStorage, SqliteStorage, StorageError, StorageResult, KV_SCHEMA_VERSION,
};
pub use ui::dialog::{ConfirmationPrompt, DialogResponse, DialogState, Modal, ModalControl};
pub use ui::view::{PlaceListContent, PlaceListView};
pub use ui::{PageHeader, RenderSurface};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
