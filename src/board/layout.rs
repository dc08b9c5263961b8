//! The board: a validated, fixed-length ring of tiles.
//!
//! The sequence never changes after construction. Ownership and house counts
//! mutate on the tiles themselves, so each game needs its own `Board`;
//! clone a pristine board per game.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::tile::{Tile, TileKind, MAX_HOUSES};
use crate::core::{BoardError, PlayerId};

/// Largest supported board.
pub const MAX_TILES: usize = u16::MAX as usize;

/// Index of a tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the board index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A validated board.
///
/// ## Guarantees
///
/// - At least one tile, at most `MAX_TILES`
/// - A jail cell exists (the first `Jail` tile)
/// - Property rent tables cover every house count
/// - Station rent tables cover every station on the board
/// - Costs, rents and fines are non-negative
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    jail: TileId,
}

impl Board {
    /// Validate and build a board.
    ///
    /// # Errors
    ///
    /// Returns `BoardError` when any guarantee listed on `Board` fails.
    pub fn new(tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }
        if tiles.len() > MAX_TILES {
            return Err(BoardError::TooManyTiles {
                count: tiles.len(),
                max: MAX_TILES,
            });
        }

        let station_count = tiles.iter().filter(|t| t.is_station()).count();
        for tile in &tiles {
            validate_tile(tile, station_count)?;
        }

        let jail = tiles
            .iter()
            .position(Tile::is_jail)
            .map(|i| TileId::new(i as u16))
            .ok_or(BoardError::MissingJail)?;

        Ok(Self { tiles, jail })
    }

    /// Number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Alias for `tile_count`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Checked lookup by raw index.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::IndexOutOfRange` past the end of the board.
    pub fn tile_at(&self, index: usize) -> Result<&Tile, BoardError> {
        self.tiles.get(index).ok_or(BoardError::IndexOutOfRange {
            index,
            len: self.tiles.len(),
        })
    }

    /// ID of the tile at a raw index, wrapping around the board.
    #[must_use]
    pub fn wrap(&self, index: usize) -> TileId {
        TileId::new((index % self.tiles.len()) as u16)
    }

    /// First tile matching a predicate.
    pub fn index_where(&self, predicate: impl Fn(&Tile) -> bool) -> Option<TileId> {
        self.tiles
            .iter()
            .position(predicate)
            .map(|i| TileId::new(i as u16))
    }

    /// The jail cell.
    #[must_use]
    pub fn jail(&self) -> TileId {
        self.jail
    }

    /// Iterate over (TileId, &Tile) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, t)| (TileId::new(i as u16), t))
    }

    /// Tiles currently owned by `player`.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = TileId> + '_ {
        self.iter()
            .filter(move |(_, t)| t.owner() == Some(player))
            .map(|(id, _)| id)
    }

    /// Return every tile to the bank.
    pub fn reset_ownership(&mut self) {
        for tile in &mut self.tiles {
            tile.release();
        }
    }
}

fn validate_tile(tile: &Tile, station_count: usize) -> Result<(), BoardError> {
    let negative = |field, value: i64| {
        if value < 0 {
            Err(BoardError::NegativeAmount {
                name: tile.name.clone(),
                field,
                value,
            })
        } else {
            Ok(())
        }
    };
    let too_short = |found: usize, needed: usize| {
        if found < needed {
            Err(BoardError::RentTableTooShort {
                name: tile.name.clone(),
                found,
                needed,
            })
        } else {
            Ok(())
        }
    };

    match &tile.kind {
        TileKind::Property(property) => {
            too_short(property.deed.rent.len(), usize::from(MAX_HOUSES) + 1)?;
            negative("cost", property.deed.cost)?;
            negative("house cost", property.house_cost)?;
            if let Some(&rent) = property.deed.rent.iter().find(|&&r| r < 0) {
                negative("rent", rent)?;
            }
        }
        TileKind::Station(station) => {
            too_short(station.deed.rent.len(), station_count)?;
            negative("cost", station.deed.cost)?;
        }
        TileKind::Fine { value } => negative("fine", *value)?,
        TileKind::Plain | TileKind::Card(_) | TileKind::Jail | TileKind::GoToJail => {}
    }
    Ok(())
}

impl Index<TileId> for Board {
    type Output = Tile;

    fn index(&self, id: TileId) -> &Self::Output {
        &self.tiles[id.index()]
    }
}

impl IndexMut<TileId> for Board {
    fn index_mut(&mut self, id: TileId) -> &mut Self::Output {
        &mut self.tiles[id.index()]
    }
}
