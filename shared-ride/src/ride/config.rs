//! Ride configuration.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{SeatCapacity, UnitPrice};

use super::error::RideError;

/// Errors from loading a ride configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read ride config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for a ride
    #[error("failed to parse ride config: {0}")]
    Json(#[from] serde_json::Error),

    /// The values do not describe a valid ride
    #[error(transparent)]
    Ride(#[from] RideError),
}

/// Configuration for a single ride.
///
/// Holds raw values; [`RideConfig::validate`] turns them into domain types.
/// Prices are written as decimal strings (`"2.00"`) to keep them exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RideConfig {
    /// Number of passenger seats.
    pub seats: u8,

    /// Price charged for each distance unit, split among riders aboard.
    pub price_per_unit: Decimal,
}

impl RideConfig {
    /// Create a configuration with the given parameters.
    pub fn new(seats: u8, price_per_unit: Decimal) -> Self {
        Self {
            seats,
            price_per_unit,
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the values and convert them into domain types.
    pub fn validate(&self) -> Result<(SeatCapacity, UnitPrice), RideError> {
        let seats = SeatCapacity::new(self.seats)?;
        let price = UnitPrice::new(self.price_per_unit)?;
        Ok((seats, price))
    }
}

impl Default for RideConfig {
    fn default() -> Self {
        Self {
            seats: 4,
            price_per_unit: Decimal::new(200, 2), // 2.00
        }
    }
}
