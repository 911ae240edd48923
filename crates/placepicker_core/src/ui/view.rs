//! Titled place list with an empty-state fallback.

use crate::model::place::Place;

/// Title of the picked places list.
pub const PICKED_TITLE: &str = "I'd like to visit ...";
/// Shown while nothing has been picked.
pub const PICKED_FALLBACK: &str = "Select the places you would like to visit below.";
/// Title of the distance-sorted catalog list.
pub const AVAILABLE_TITLE: &str = "Available Places";
/// Shown until the sorted catalog is published.
pub const AVAILABLE_FALLBACK: &str = "Sorting places by distance...";

/// What a list renders: either its items or the fallback text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceListContent<'a> {
    Fallback(&'a str),
    Items(&'a [Place]),
}

/// Read-only projection of one place list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceListView<'a> {
    pub title: &'a str,
    pub fallback_text: &'a str,
    pub places: &'a [Place],
}

impl<'a> PlaceListView<'a> {
    pub fn new(title: &'a str, fallback_text: &'a str, places: &'a [Place]) -> Self {
        Self {
            title,
            fallback_text,
            places,
        }
    }

    /// Projects the list; an empty list renders its fallback instead.
    pub fn render(&self) -> PlaceListContent<'a> {
        if self.places.is_empty() {
            PlaceListContent::Fallback(self.fallback_text)
        } else {
            PlaceListContent::Items(self.places)
        }
    }

    /// Dispatches `on_select` when `id` is one of the listed items.
    ///
    /// Returns whether the callback ran.
    pub fn activate(&self, id: &str, on_select: impl FnOnce(&str)) -> bool {
        match self.places.iter().find(|place| place.id == id) {
            Some(place) => {
                on_select(place.id.as_str());
                true
            }
            None => false,
        }
    }
}
