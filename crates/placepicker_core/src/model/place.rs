//! Place domain model.
//!
//! # Invariants
//! - `id` is non-empty and stable for the lifetime of the catalog.
//! - `lat` is within [-90, 90] and `lon` within [-180, 180].

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog-scoped place identifier.
pub type PlaceId = String;

/// Image reference shown next to a place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceImage {
    /// Host-resolved image source (file name or URL).
    pub src: String,
    /// Accessible description of the image.
    pub alt: String,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    /// Display name.
    pub title: String,
    pub image: PlaceImage,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Validation failures for place records.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceValidationError {
    EmptyId,
    NonFiniteCoordinate { id: PlaceId },
    LatitudeOutOfRange { id: PlaceId, lat: f64 },
    LongitudeOutOfRange { id: PlaceId, lon: f64 },
}

impl Display for PlaceValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "place id cannot be empty"),
            Self::NonFiniteCoordinate { id } => {
                write!(f, "place `{id}` has a non-finite coordinate")
            }
            Self::LatitudeOutOfRange { id, lat } => {
                write!(f, "place `{id}` latitude {lat} is outside [-90, 90]")
            }
            Self::LongitudeOutOfRange { id, lon } => {
                write!(f, "place `{id}` longitude {lon} is outside [-180, 180]")
            }
        }
    }
}

impl Error for PlaceValidationError {}

impl Place {
    /// Creates a place record.
    pub fn new(
        id: impl Into<PlaceId>,
        title: impl Into<String>,
        image: PlaceImage,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image,
            lat,
            lon,
        }
    }

    /// Returns the fixed location of this place.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }

    /// Checks the record invariants.
    pub fn validate(&self) -> Result<(), PlaceValidationError> {
        if self.id.trim().is_empty() {
            return Err(PlaceValidationError::EmptyId);
        }
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(PlaceValidationError::NonFiniteCoordinate {
                id: self.id.clone(),
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(PlaceValidationError::LatitudeOutOfRange {
                id: self.id.clone(),
                lat: self.lat,
            });
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(PlaceValidationError::LongitudeOutOfRange {
                id: self.id.clone(),
                lon: self.lon,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Place, PlaceImage, PlaceValidationError};

    fn image() -> PlaceImage {
        PlaceImage {
            src: "x.jpg".to_string(),
            alt: "x".to_string(),
        }
    }

    #[test]
    fn validate_accepts_boundary_coordinates() {
        let place = Place::new("edge", "Edge", image(), -90.0, 180.0);
        assert!(place.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_id() {
        let place = Place::new("  ", "Blank", image(), 0.0, 0.0);
        assert_eq!(place.validate(), Err(PlaceValidationError::EmptyId));
    }

    #[test]
    fn validate_rejects_out_of_range_latitude() {
        let place = Place::new("north", "North", image(), 91.0, 0.0);
        assert!(matches!(
            place.validate(),
            Err(PlaceValidationError::LatitudeOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let place = Place::new("nan", "NaN", image(), f64::NAN, 0.0);
        assert!(matches!(
            place.validate(),
            Err(PlaceValidationError::NonFiniteCoordinate { .. })
        ));
    }
}
