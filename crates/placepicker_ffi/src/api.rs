//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose picker use-cases to Dart via FRB.
//! - Own one process-wide, SQLite-backed picker controller.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every picker call returns a full snapshot; `message` is empty on success.

use log::error;
use placepicker_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, Catalog,
    GeolocationError, PickerConfig, Place, PlaceListContent, PlaceListView, PlacePicker, Position,
    SqliteStorage,
};
use std::sync::Mutex;

type SharedPicker = PlacePicker<SqliteStorage>;

static PICKER: Mutex<Option<SharedPicker>> = Mutex::new(None);

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One renderable place row.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceItem {
    pub id: String,
    pub title: String,
    pub image_src: String,
    pub image_alt: String,
    pub lat: f64,
    pub lon: f64,
}

/// One titled list as the host should draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceListSnapshot {
    pub title: String,
    /// Set when the list is empty; the host shows it instead of items.
    pub fallback_text: Option<String>,
    pub items: Vec<PlaceItem>,
}

/// Full page state after a picker call.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerSnapshot {
    pub picked: PlaceListSnapshot,
    pub available: PlaceListSnapshot,
    pub dialog_open: bool,
    pub dialog_title: String,
    pub dialog_message: String,
    /// Empty on success, diagnostic text otherwise.
    pub message: String,
}

impl PickerSnapshot {
    fn failure(message: impl Into<String>) -> Self {
        let empty = |title: &str| PlaceListSnapshot {
            title: title.to_string(),
            fallback_text: None,
            items: Vec::new(),
        };
        Self {
            picked: empty(""),
            available: empty(""),
            dialog_open: false,
            dialog_title: String::new(),
            dialog_message: String::new(),
            message: message.into(),
        }
    }
}

/// Returns the configured catalog in catalog order.
///
/// # FFI contract
/// - Sync call; may read a JSON catalog file on first use.
/// - Never panics; returns an empty list when the picker cannot start.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_list() -> Vec<PlaceItem> {
    with_picker(|picker| Ok(picker.catalog().places().to_vec()))
        .map(|places| places.iter().map(to_place_item).collect())
        .unwrap_or_default()
}

/// Returns current page state without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_snapshot() -> PickerSnapshot {
    snapshot_after(|_| Ok(()))
}

/// Claims the one-shot geolocation request.
///
/// Returns `true` exactly once per process; the host then queries the
/// platform and reports back through `picker_apply_position` or
/// `picker_position_unavailable`.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_request_location() -> bool {
    with_picker(|picker| Ok(picker.begin_location_request())).unwrap_or(false)
}

/// Publishes the distance-sorted catalog for the reported position.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_apply_position(lat: f64, lon: f64) -> PickerSnapshot {
    snapshot_after(|picker| {
        picker.apply_position(Position::new(lat, lon));
        Ok(())
    })
}

/// Records that the platform produced no position.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_position_unavailable(reason: String) -> PickerSnapshot {
    snapshot_after(|picker| {
        picker.location_failed(&GeolocationError::Unavailable(reason));
        Ok(())
    })
}

/// Adds a place to the picked list.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_select(id: String) -> PickerSnapshot {
    snapshot_after(|picker| picker.select_place(id.trim()).map_err(|err| err.to_string()))
}

/// Opens the remove confirmation for a picked place.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_start_remove(id: String) -> PickerSnapshot {
    snapshot_after(|picker| {
        picker.start_remove(id.trim());
        Ok(())
    })
}

/// Closes the remove confirmation without changes.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_cancel_remove() -> PickerSnapshot {
    snapshot_after(|picker| {
        picker.cancel_remove();
        Ok(())
    })
}

/// Removes the pending place and closes the confirmation.
#[flutter_rust_bridge::frb(sync)]
pub fn picker_confirm_remove() -> PickerSnapshot {
    snapshot_after(|picker| picker.confirm_remove().map_err(|err| err.to_string()))
}

fn snapshot_after(action: impl FnOnce(&mut SharedPicker) -> Result<(), String>) -> PickerSnapshot {
    let outcome = with_picker(|picker| {
        let result = action(picker);
        let mut snapshot = to_snapshot(picker);
        if let Err(err) = result {
            snapshot.message = err;
        }
        Ok(snapshot)
    });
    match outcome {
        Ok(snapshot) => snapshot,
        Err(err) => PickerSnapshot::failure(err),
    }
}

fn with_picker<T>(f: impl FnOnce(&mut SharedPicker) -> Result<T, String>) -> Result<T, String> {
    let mut guard = PICKER
        .lock()
        .map_err(|_| "picker state lock poisoned".to_string())?;
    if guard.is_none() {
        *guard = Some(build_picker()?);
    }
    match guard.as_mut() {
        Some(picker) => f(picker),
        None => Err("picker not initialized".to_string()),
    }
}

fn build_picker() -> Result<SharedPicker, String> {
    let config = PickerConfig::from_env();
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path).map_err(|err| {
            error!(
                "event=picker_init module=ffi status=error error_code=catalog_load_failed error={}",
                err
            );
            format!("catalog load failed: {err}")
        })?,
        None => Catalog::builtin(),
    };
    let storage = SqliteStorage::open(&config.db_path).map_err(|err| {
        error!(
            "event=picker_init module=ffi status=error error_code=db_open_failed error={}",
            err
        );
        format!("picker DB open failed: {err}")
    })?;
    Ok(PlacePicker::new(catalog, storage))
}

fn to_snapshot(picker: &SharedPicker) -> PickerSnapshot {
    let prompt = picker.prompt();
    PickerSnapshot {
        picked: to_list_snapshot(&picker.picked_view()),
        available: to_list_snapshot(&picker.available_view()),
        dialog_open: picker.dialog_state().is_open(),
        dialog_title: prompt.title.clone(),
        dialog_message: prompt.message.clone(),
        message: String::new(),
    }
}

fn to_list_snapshot(view: &PlaceListView<'_>) -> PlaceListSnapshot {
    let (fallback_text, items) = match view.render() {
        PlaceListContent::Fallback(text) => (Some(text.to_string()), Vec::new()),
        PlaceListContent::Items(places) => (None, places.iter().map(to_place_item).collect()),
    };
    PlaceListSnapshot {
        title: view.title.to_string(),
        fallback_text,
        items,
    }
}

fn to_place_item(place: &Place) -> PlaceItem {
    PlaceItem {
        id: place.id.clone(),
        title: place.title.clone(),
        image_src: place.image.src.clone(),
        image_alt: place.image.alt.clone(),
        lat: place.lat,
        lon: place.lon,
    }
}
