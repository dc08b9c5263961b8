//! Core types: players, randomness, configuration, events, errors.
//!
//! These are shared by the board, the turn engine and the batch runner.

pub mod player;
pub mod rng;
pub mod config;
pub mod event;
pub mod error;

pub use player::{BuyingStrategy, Player, PlayerId, PlayerMap, PlayerStatus};
pub use rng::{DiceRoll, GameRng, RandomSource, ScriptedRng};
pub use config::{GameConfig, PlayerConfig, SimulationConfig};
pub use event::{EventLog, GameEvent, EVENT_TARGET};
pub use error::{BoardError, GameError};
