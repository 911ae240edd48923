//! Coordinates, geolocation capability and distance ordering.
//!
//! # Responsibility
//! - Model positions delivered by a platform geolocation provider.
//! - Order catalog places by great-circle distance.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod distance;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Current device position reported by a geolocation provider.
pub type Position = Coordinate;

/// Reasons a geolocation request yields no position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    Unavailable(String),
}

impl Display for GeolocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "geolocation permission denied"),
            Self::Unavailable(reason) => write!(f, "position unavailable: {reason}"),
        }
    }
}

impl Error for GeolocationError {}

/// Platform capability answering one current-position query.
pub trait GeolocationProvider {
    fn current_position(&mut self) -> Result<Position, GeolocationError>;
}

/// Provider returning a position fixed at construction time.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Position);

impl GeolocationProvider for FixedPosition {
    fn current_position(&mut self) -> Result<Position, GeolocationError> {
        Ok(self.0)
    }
}

/// Provider that never yields a position.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

impl GeolocationProvider for NoGeolocation {
    fn current_position(&mut self) -> Result<Position, GeolocationError> {
        Err(GeolocationError::Unavailable(
            "no geolocation source configured".to_string(),
        ))
    }
}
