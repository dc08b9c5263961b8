//! Board descriptions in JSON.
//!
//! A board file is an ordered array of tile descriptors:
//!
//! ```json
//! [
//!   { "type": "default", "name": "Go" },
//!   { "type": "property", "name": "Baltic Avenue", "cost": 60,
//!     "rent": [4, 20, 60, 180, 320, 450], "house": 50, "group": "brown" },
//!   { "type": "railroad", "name": "Reading Railroad", "cost": 200 },
//!   { "type": "tax", "name": "Income Tax", "cost": 200 },
//!   { "type": "jail", "name": "Jail" }
//! ]
//! ```
//!
//! Railroads always get `STATION_RENT` and the station group, whatever the
//! descriptor says. Unknown types load as plain tiles.

use serde::{Deserialize, Serialize};

use super::layout::Board;
use super::tile::{CardType, Group, Tile};
use crate::core::BoardError;

/// The classic 40-tile board.
const STANDARD_BOARD: &str = include_str!("../../data/board.json");

/// Descriptor `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DescriptorKind {
    Property,
    CommunityChest,
    Chance,
    Tax,
    Railroad,
    Jail,
    GoToJail,
    #[serde(other)]
    Default,
}

/// One entry of a board file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    #[serde(rename = "type")]
    pub kind: DescriptorKind,
    pub name: String,
    /// Purchase price, or the fine for `tax`.
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub rent: Vec<i64>,
    /// House price.
    #[serde(default)]
    pub house: i64,
    #[serde(default)]
    pub group: Option<Group>,
}

impl TileDescriptor {
    /// Build the tile this descriptor describes.
    #[must_use]
    pub fn to_tile(&self) -> Tile {
        let name = self.name.clone();
        match self.kind {
            DescriptorKind::Property => Tile::property(
                name,
                self.group.unwrap_or_default(),
                self.cost,
                self.rent.iter().copied(),
                self.house,
            ),
            DescriptorKind::CommunityChest => Tile::card(name, CardType::Community),
            DescriptorKind::Chance => Tile::card(name, CardType::Chance),
            DescriptorKind::Tax => Tile::fine(name, self.cost),
            DescriptorKind::Railroad => Tile::station(name, self.cost),
            DescriptorKind::Jail => Tile::jail(name),
            DescriptorKind::GoToJail => Tile::go_to_jail(name),
            DescriptorKind::Default => Tile::plain(name),
        }
    }
}

impl Board {
    /// Build a board from descriptors.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` if the resulting board fails validation.
    pub fn from_descriptors(descriptors: &[TileDescriptor]) -> Result<Self, BoardError> {
        Board::new(descriptors.iter().map(TileDescriptor::to_tile).collect())
    }

    /// Parse and build a board from a JSON array of descriptors.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Parse` for malformed JSON, or a validation error.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let descriptors: Vec<TileDescriptor> = serde_json::from_str(json)?;
        log::debug!("parsed {} tile descriptors", descriptors.len());
        Self::from_descriptors(&descriptors)
    }

    /// The classic 40-tile board.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded board data is corrupt.
    pub fn standard() -> Result<Self, BoardError> {
        Self::from_json(STANDARD_BOARD)
    }
}
