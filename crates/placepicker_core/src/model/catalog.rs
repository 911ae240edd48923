//! Read-only place catalog.
//!
//! # Responsibility
//! - Hold the static list of places in catalog order.
//! - Resolve place ids for hydration and selection.
//!
//! # Invariants
//! - Ids are unique and every place passes `Place::validate()`.
//! - Catalog order is the tie-break order for distance sorting.

use crate::model::place::{Place, PlaceImage, PlaceValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Catalog construction failures.
#[derive(Debug)]
pub enum CatalogError {
    InvalidPlace(PlaceValidationError),
    DuplicateId(String),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlace(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate place id in catalog: `{id}`"),
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "failed to parse catalog: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidPlace(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<PlaceValidationError> for CatalogError {
    fn from(value: PlaceValidationError) -> Self {
        Self::InvalidPlace(value)
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Static set of places available for selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Builds a catalog, validating each place and rejecting duplicate ids.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(places.len());
        for place in &places {
            place.validate()?;
            if !seen.insert(place.id.as_str()) {
                return Err(CatalogError::DuplicateId(place.id.clone()));
            }
        }
        Ok(Self { places })
    }

    /// Parses a JSON array of places.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let places: Vec<Place> = serde_json::from_str(raw)?;
        Self::new(places)
    }

    /// Reads and parses a JSON catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Returns the bundled catalog.
    pub fn builtin() -> Self {
        let places = BUILTIN_PLACES
            .iter()
            .map(|(id, title, src, alt, lat, lon)| {
                Place::new(
                    *id,
                    *title,
                    PlaceImage {
                        src: (*src).to_string(),
                        alt: (*alt).to_string(),
                    },
                    *lat,
                    *lon,
                )
            })
            .collect();
        Self { places }
    }

    /// Looks up a place by id.
    pub fn find(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|place| place.id == id)
    }

    /// Places in catalog order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

type BuiltinPlace = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
);

const BUILTIN_PLACES: &[BuiltinPlace] = &[
    (
        "p1",
        "Forest Waterfall",
        "forest-waterfall.jpg",
        "A tranquil forest with a cascading waterfall amidst greenery.",
        44.5588,
        -80.344,
    ),
    (
        "p2",
        "Sahara Desert Dunes",
        "desert-dunes.jpg",
        "Golden dunes stretching to the horizon in the Sahara Desert.",
        25.0,
        0.0,
    ),
    (
        "p3",
        "Majestic Mountain Peak",
        "majestic-mountains.jpg",
        "A snowy mountain peak under a clear blue sky.",
        46.5763,
        7.9904,
    ),
    (
        "p4",
        "Caribbean Beach",
        "caribbean-beach.jpg",
        "Pristine white sand and turquoise waters of a Caribbean beach.",
        18.2208,
        -66.5901,
    ),
    (
        "p5",
        "Ancient Grecian Ruins",
        "ruins.jpg",
        "Historic ruins with towering columns in Greece.",
        37.9715,
        23.7257,
    ),
    (
        "p6",
        "Amazon Rainforest Canopy",
        "rainforest.jpg",
        "Lush canopy of a rainforest, teeming with life.",
        -3.4653,
        -62.2159,
    ),
    (
        "p7",
        "Northern Lights",
        "northern-lights.jpg",
        "Dazzling display of the Northern Lights in a starry sky.",
        64.9631,
        -19.0208,
    ),
    (
        "p8",
        "Japanese Temple",
        "japanese-temple.jpg",
        "Ancient Japanese temple surrounded by autumn foliage.",
        34.9949,
        135.785,
    ),
    (
        "p9",
        "Great Barrier Reef",
        "great-barrier-reef.jpg",
        "Vibrant coral formations of the Great Barrier Reef underwater.",
        -18.2871,
        147.6992,
    ),
    (
        "p10",
        "Parisian Cafe",
        "parisian-cafe.jpg",
        "Charming streetside cafe in Paris with outdoor seating.",
        48.8566,
        2.3522,
    ),
    (
        "p11",
        "Himalayan Peaks",
        "himalayan-peaks.jpg",
        "The towering peaks of the Himalayas under a clear sky.",
        27.9881,
        86.925,
    ),
    (
        "p12",
        "Ancient Egyptian Pyramids",
        "egyptian-pyramids.jpg",
        "The ancient pyramids of Egypt in the desert.",
        29.9792,
        31.1342,
    ),
];

#[cfg(test)]
mod tests {
    use super::{Catalog, CatalogError};

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.places().to_vec()).expect("builtin must validate");
        assert_eq!(rebuilt.len(), 12);
        assert_eq!(builtin.find("p10").map(|p| p.title.as_str()), Some("Parisian Cafe"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"[
            {"id":"a","title":"A","image":{"src":"a.jpg","alt":"a"},"lat":0.0,"lon":0.0},
            {"id":"a","title":"A2","image":{"src":"a.jpg","alt":"a"},"lat":1.0,"lon":1.0}
        ]"#;
        let err = Catalog::from_json_str(raw).expect_err("duplicate ids must fail");
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{not json").expect_err("must fail");
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
