//! # monopoly-sim
//!
//! A turn-based Monopoly-style board game simulator.
//!
//! Players move around a fixed ring of tiles, buy properties and stations,
//! pay rent, pay fines, go to jail and drop out through bankruptcy. A game
//! ends when one player is left standing or the turn cap runs out.
//!
//! ## Design Principles
//!
//! 1. **Closed tile set**: tile behavior is a `TileKind` enum dispatched by
//!    `match`, not a class hierarchy.
//!
//! 2. **Explicit context**: board, players, randomness and the event log
//!    live in one `Game` value. No globals, so games never leak state into
//!    each other.
//!
//! 3. **IDs, not references**: tiles name their owner by `PlayerId`,
//!    players list their tiles by `TileId`.
//!
//! 4. **Injectable randomness**: the engine only sees `RandomSource`.
//!    `GameRng` is seeded and forkable; `ScriptedRng` replays fixed rolls.
//!
//! ## Modules
//!
//! - `core`: players, randomness, configuration, events, errors
//! - `board`: tiles, the validated board, JSON loading
//! - `game`: landing effects, turn engine, game runner
//! - `sim`: batch simulation

pub mod core;
pub mod board;
pub mod game;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    BoardError, BuyingStrategy, DiceRoll, EventLog, GameConfig, GameError, GameEvent, GameRng,
    Player, PlayerConfig, PlayerId, PlayerMap, PlayerStatus, RandomSource, ScriptedRng,
    SimulationConfig,
};

pub use crate::board::{Board, CardType, Deed, Group, Tile, TileDescriptor, TileId, TileKind};

pub use crate::game::{Game, GameBuilder, GameResult};

pub use crate::sim::{GameRecord, Simulation, SimulationReport};
