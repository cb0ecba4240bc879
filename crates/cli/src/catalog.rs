//! Seed room catalog.
//!
//! The inventory is data, not code: a JSON document naming the hotel and
//! listing its rooms. A default catalog ships inside the binary.

use std::path::{Path, PathBuf};

use common::RoomNumber;
use domain::{DomainError, Hotel, Money, Room, RoomType};
use serde::Deserialize;

use crate::config::Config;
use crate::error::CliError;

const BUNDLED_CATALOG: &str = include_str!("../catalog/default_rooms.json");
const BUNDLED_CATALOG_NAME: &str = "<bundled>";

/// A hotel and its room inventory as read from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomCatalog {
    pub name: String,
    pub location: String,
    pub rooms: Vec<RoomRecord>,
}

/// One catalog entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoomRecord {
    pub number: RoomNumber,
    pub room_type: RoomType,
    pub has_ac: bool,
    pub non_smoking: bool,
    pub price_per_night: Money,
}

impl RoomRecord {
    fn into_room(self) -> Room {
        Room::new(
            self.number,
            self.room_type,
            self.has_ac,
            self.non_smoking,
            self.price_per_night,
        )
    }
}

impl RoomCatalog {
    /// Loads the catalog named by the config, or the bundled one.
    pub fn load(config: &Config) -> Result<Self, CliError> {
        match &config.catalog_path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Returns the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CliError> {
        Self::from_json(BUNDLED_CATALOG, Path::new(BUNDLED_CATALOG_NAME))
    }

    /// Reads a catalog file.
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    fn from_json(text: &str, path: &Path) -> Result<Self, CliError> {
        let catalog: Self = serde_json::from_str(text).map_err(|source| CliError::Catalog {
            path: PathBuf::from(path),
            source,
        })?;
        tracing::debug!(path = %path.display(), rooms = catalog.rooms.len(), "catalog parsed");
        Ok(catalog)
    }

    /// Builds the hotel aggregate, validating the inventory.
    pub fn into_hotel(self) -> Result<Hotel, CliError> {
        let rooms = self.rooms.into_iter().map(RoomRecord::into_room).collect();
        let hotel = Hotel::new(self.name, self.location, rooms).map_err(DomainError::from)?;
        Ok(hotel)
    }
}
