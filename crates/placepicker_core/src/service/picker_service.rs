//! Place picker application controller.
//!
//! # Responsibility
//! - Own the picked list, the distance-sorted catalog view and the id
//!   pending removal.
//! - Mirror selection changes into the persistent selection store.
//! - Drive the remove-confirmation dialog.
//!
//! # Invariants
//! - `picked` holds no duplicates and only catalog places.
//! - At most one geolocation request is issued per controller.
//! - The sorted catalog view is derived once and never recomputed.

use crate::geo::distance::sort_by_distance;
use crate::geo::{GeolocationError, GeolocationProvider, Position};
use crate::model::catalog::Catalog;
use crate::model::place::{Place, PlaceId};
use crate::repo::selection_store::{SelectionStore, StoreResult};
use crate::storage::KeyValueStorage;
use crate::ui::dialog::{ConfirmationPrompt, DialogResponse, DialogState, Modal, ModalControl};
use crate::ui::view::{
    PlaceListView, AVAILABLE_FALLBACK, AVAILABLE_TITLE, PICKED_FALLBACK, PICKED_TITLE,
};
use crate::ui::{PageHeader, RenderSurface};
use log::{debug, info, warn};

/// Progress of the one-shot geolocation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationStatus {
    NotRequested,
    Pending,
    Resolved,
    /// The provider failed; the available list stays empty.
    Failed,
}

/// Single authority over picker state.
pub struct PlacePicker<S: KeyValueStorage> {
    catalog: Catalog,
    store: SelectionStore<S>,
    picked: Vec<Place>,
    available: Vec<Place>,
    pending_removal: Option<PlaceId>,
    dialog: Modal<ConfirmationPrompt>,
    location: LocationStatus,
}

impl<S: KeyValueStorage> PlacePicker<S> {
    /// Creates a controller and hydrates the picked list from storage.
    ///
    /// Stored ids missing from `catalog` are dropped silently.
    pub fn new(catalog: Catalog, storage: S) -> Self {
        let store = SelectionStore::new(storage);
        let picked = hydrate(&catalog, &store);
        Self {
            catalog,
            store,
            picked,
            available: Vec::new(),
            pending_removal: None,
            dialog: Modal::new(ConfirmationPrompt::default()),
            location: LocationStatus::NotRequested,
        }
    }

    /// Issues the geolocation request on first mount.
    ///
    /// Returns `false` when a request was already issued. A provider
    /// failure leaves the available list empty.
    pub fn mount(&mut self, provider: &mut dyn GeolocationProvider) -> bool {
        if !self.begin_location_request() {
            return false;
        }
        match provider.current_position() {
            Ok(position) => {
                self.apply_position(position);
            }
            Err(err) => self.location_failed(&err),
        }
        true
    }

    /// Marks the geolocation request as in flight for hosts that resolve
    /// the position asynchronously.
    ///
    /// Returns `false` when a request was already issued.
    pub fn begin_location_request(&mut self) -> bool {
        if self.location != LocationStatus::NotRequested {
            debug!("event=location_request module=service status=skipped reason=already_requested");
            return false;
        }
        self.location = LocationStatus::Pending;
        info!("event=location_request module=service status=start");
        true
    }

    /// Publishes the distance-sorted catalog for `position`.
    ///
    /// Only the first position is applied; later ones are ignored.
    pub fn apply_position(&mut self, position: Position) -> bool {
        if matches!(
            self.location,
            LocationStatus::Resolved | LocationStatus::Failed
        ) {
            debug!("event=location_resolved module=service status=ignored");
            return false;
        }
        self.available = sort_by_distance(self.catalog.places(), position.lat, position.lon);
        self.location = LocationStatus::Resolved;
        info!(
            "event=location_resolved module=service status=ok places={}",
            self.available.len()
        );
        true
    }

    /// Records a failed lookup. Nothing is shown to the user.
    pub fn location_failed(&mut self, err: &GeolocationError) {
        if self.location == LocationStatus::Resolved {
            return;
        }
        self.location = LocationStatus::Failed;
        warn!(
            "event=location_resolved module=service status=error error={}",
            err
        );
    }

    /// Adds a catalog place to the front of the picked list.
    ///
    /// Already picked ids leave the list unchanged but are still written
    /// through to the store. Ids unknown to the catalog are ignored.
    pub fn select_place(&mut self, id: &str) -> StoreResult<()> {
        if !self.picked.iter().any(|place| place.id == id) {
            let Some(place) = self.catalog.find(id) else {
                debug!("event=place_select module=service status=skipped reason=unknown_id");
                return Ok(());
            };
            self.picked.insert(0, place.clone());
            info!(
                "event=place_select module=service status=ok picked={}",
                self.picked.len()
            );
        }
        self.store.add(id)
    }

    /// Remembers `id` as pending removal and opens the dialog.
    pub fn start_remove(&mut self, id: &str) {
        self.pending_removal = Some(id.to_string());
        self.dialog.open();
    }

    /// Closes the dialog without touching the picked list.
    pub fn cancel_remove(&mut self) {
        self.dialog.close();
    }

    /// Removes the pending place from the picked list and the store.
    ///
    /// Ignored while the dialog is closed; the pending id is kept.
    pub fn confirm_remove(&mut self) -> StoreResult<()> {
        if !self.dialog.is_open() {
            debug!("event=place_remove module=service status=skipped reason=dialog_closed");
            return Ok(());
        }
        self.dialog.close();
        let Some(id) = self.pending_removal.take() else {
            return Ok(());
        };
        self.picked.retain(|place| place.id != id);
        info!(
            "event=place_remove module=service status=ok picked={}",
            self.picked.len()
        );
        self.store.remove(&id)
    }

    /// Routes a dialog answer to confirm or cancel.
    ///
    /// Answers arriving while the dialog is closed are dropped.
    pub fn respond(&mut self, response: DialogResponse) -> StoreResult<()> {
        if !self.dialog.is_open() {
            return Ok(());
        }
        if response.is_confirm() {
            self.confirm_remove()
        } else {
            self.cancel_remove();
            Ok(())
        }
    }

    pub fn picked_places(&self) -> &[Place] {
        &self.picked
    }

    pub fn available_places(&self) -> &[Place] {
        &self.available
    }

    pub fn pending_removal(&self) -> Option<&str> {
        self.pending_removal.as_deref()
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog.state()
    }

    pub fn prompt(&self) -> &ConfirmationPrompt {
        self.dialog.content()
    }

    pub fn location_status(&self) -> LocationStatus {
        self.location
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &SelectionStore<S> {
        &self.store
    }

    pub fn picked_view(&self) -> PlaceListView<'_> {
        PlaceListView::new(PICKED_TITLE, PICKED_FALLBACK, &self.picked)
    }

    pub fn available_view(&self) -> PlaceListView<'_> {
        PlaceListView::new(AVAILABLE_TITLE, AVAILABLE_FALLBACK, &self.available)
    }

    /// Draws the page: header, dialog, picked list, available list.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        surface.render_header(&PageHeader::default());
        surface.render_dialog(self.dialog.state(), self.dialog.content());
        surface.render_list(&self.picked_view());
        surface.render_list(&self.available_view());
    }
}

fn hydrate<S: KeyValueStorage>(catalog: &Catalog, store: &SelectionStore<S>) -> Vec<Place> {
    let ids = store.load();
    let mut picked: Vec<Place> = Vec::with_capacity(ids.len());
    for id in &ids {
        if picked.iter().any(|place| &place.id == id) {
            continue;
        }
        if let Some(place) = catalog.find(id) {
            picked.push(place.clone());
        }
    }
    let dropped = ids.len() - picked.len();
    info!(
        "event=selection_hydrate module=service status=ok picked={} dropped={}",
        picked.len(),
        dropped
    );
    picked
}
