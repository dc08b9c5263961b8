//! The board and its tiles.
//!
//! - `tile`: tile kinds and ownership data
//! - `layout`: the validated ring of tiles
//! - `loader`: JSON board descriptions and the embedded classic board

pub mod tile;
pub mod layout;
pub mod loader;

pub use tile::{CardType, Deed, Group, PropertyTile, RentTable, StationTile, Tile, TileKind, MAX_HOUSES, STATION_RENT};
pub use layout::{Board, TileId, MAX_TILES};
pub use loader::{DescriptorKind, TileDescriptor};
