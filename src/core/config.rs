//! Garage configuration files
//!
//! A garage is described by its three dimensions and an optional seed:
//!
//! ```toml
//! levels = 3
//! rows_per_level = 5
//! spots_per_row = 10
//! seed = 42
//! ```

use crate::error::Result;
use crate::layout::Dimensions;
use crate::GarageBuilder;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Garage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GarageConfig {
    /// Number of levels
    pub levels: usize,

    /// Rows on each level
    pub rows_per_level: usize,

    /// Spots in each row
    pub spots_per_row: usize,

    /// Seed for the spot layout; thread randomness when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl GarageConfig {
    pub fn new(levels: usize, rows_per_level: usize, spots_per_row: usize) -> Self {
        GarageConfig {
            levels,
            rows_per_level,
            spots_per_row,
            seed: None,
        }
    }

    /// Set the layout seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GarageConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Loading garage config from {:?}", path.as_ref());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Render as TOML text
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Check that the dimensions describe a representable garage
    pub fn validate(&self) -> Result<()> {
        if let Err(err) = self.dimensions() {
            warn!("Rejected garage config: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Validated dimensions
    pub fn dimensions(&self) -> Result<Dimensions> {
        Dimensions::new(self.levels, self.rows_per_level, self.spots_per_row)
    }

    /// Builder preloaded with this configuration
    pub fn builder(&self) -> GarageBuilder {
        let builder = GarageBuilder::new()
            .levels(self.levels)
            .rows_per_level(self.rows_per_level)
            .spots_per_row(self.spots_per_row);

        match self.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }
}

impl Default for GarageConfig {
    fn default() -> Self {
        GarageConfig::new(3, 5, 10)
    }
}
