//! The game engine.
//!
//! - `state`: `Game` context and `GameBuilder`
//! - `landing`: tile landing effects
//! - `turn`: dice, movement and jail turns
//! - `runner`: playing to a win or a stalemate
//!
//! Control flow: `Game::play` → `Game::play_turn` → `Game::resolve_landing`.

mod state;
mod landing;
mod turn;
mod runner;

pub use state::{Game, GameBuilder};
pub use runner::GameResult;
