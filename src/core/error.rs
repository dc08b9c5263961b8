//! Construction-time failures.
//!
//! Game-logic outcomes (declined purchases, bankruptcy, stalemate) are not
//! errors. These types cover inputs that would otherwise misbehave at runtime:
//! malformed boards and unplayable player line-ups.

use thiserror::Error;

/// Invalid board description or lookup.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board has no tiles")]
    Empty,
    #[error("board has {count} tiles, at most {max} supported")]
    TooManyTiles { count: usize, max: usize },
    #[error("board has no jail tile")]
    MissingJail,
    #[error("tile index {index} out of range for a board of {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{name} has {found} rent levels, needs at least {needed}")]
    RentTableTooShort {
        name: String,
        found: usize,
        needed: usize,
    },
    #[error("{name} has negative {field} ({value})")]
    NegativeAmount {
        name: String,
        field: &'static str,
        value: i64,
    },
    #[error("invalid board description: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A game that cannot be started.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("a game needs at least 2 players (got {count})")]
    NotEnoughPlayers { count: usize },
    #[error("at most 255 players supported (got {count})")]
    TooManyPlayers { count: usize },
    #[error("player name {name:?} is used more than once")]
    DuplicatePlayer { name: String },
    #[error("{name} starts with a negative balance ({balance})")]
    NegativeBalance { name: String, balance: i64 },
    #[error("{name} starts on tile {position}, board has {len} tiles")]
    StartOutsideBoard {
        name: String,
        position: usize,
        len: usize,
    },
    #[error("{name} is already bankrupt")]
    BankruptSeat { name: String },
    #[error("{name} starts with jail counter {counter}, must be below {release_at}")]
    JailCounterOutOfRange {
        name: String,
        counter: u8,
        release_at: u8,
    },
    #[error("{name} cannot hold tile {tile}: off the board, not for sale, or held twice")]
    InvalidHolding { name: String, tile: usize },
    #[error("tile {tile} names an owner that does not hold it")]
    StrayOwner { tile: usize },
}
