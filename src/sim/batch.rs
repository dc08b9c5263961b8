//! Batch runner for many independent games.
//!
//! Each game gets a clone of the pristine board, fresh players built from the
//! seat configs, its own RNG forked from the master seed and its own event
//! log. Nothing carries over from one game to the next.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameError, GameRng, SimulationConfig};
use crate::game::{GameBuilder, GameResult};

/// Summary of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based game number.
    pub game: u32,
    pub winner: String,
    pub result: GameResult,
    /// Seats that went bankrupt, in seat order.
    pub bankrupt: Vec<String>,
}

/// Aggregated outcome of a batch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub games: Vec<GameRecord>,
    /// Wins per player name.
    pub wins: FxHashMap<String, u32>,
    pub stalemates: u32,
}

impl SimulationReport {
    /// Wins recorded for a player name.
    #[must_use]
    pub fn wins_for(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Games that ended by elimination.
    #[must_use]
    pub fn eliminations(&self) -> u32 {
        self.games.len() as u32 - self.stalemates
    }

    /// (name, wins) pairs, most wins first, then by name.
    #[must_use]
    pub fn standings(&self) -> Vec<(&str, u32)> {
        let mut standings: Vec<_> = self.wins.iter().map(|(n, w)| (n.as_str(), *w)).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        standings
    }
}

/// Runs a batch of games on one board.
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation. The board is cloned for every game.
    pub fn new(board: Board, config: SimulationConfig) -> Self {
        Self { board, config }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every game.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the seat configs cannot form a game.
    pub fn run(&self) -> Result<SimulationReport, GameError> {
        let mut master = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut report = SimulationReport {
            seed: master.seed(),
            ..SimulationReport::default()
        };

        for game_no in 1..=self.config.games {
            let record = self.run_one(game_no, master.fork())?;
            log::debug!("game {game_no}: {} won", record.winner);

            if record.result.is_stalemate() {
                report.stalemates += 1;
            }
            *report.wins.entry(record.winner.clone()).or_insert(0) += 1;
            report.games.push(record);
        }

        Ok(report)
    }

    fn run_one(&self, game_no: u32, rng: GameRng) -> Result<GameRecord, GameError> {
        let mut game = GameBuilder::new(self.board.clone())
            .players(&self.config.players)
            .config(self.config.rules.clone())
            .logging(self.config.log_events)
            .build(rng)?;

        let result = game.play(self.config.max_turns);
        let bankrupt = game
            .players()
            .iter()
            .filter(|(_, p)| p.bankrupt)
            .map(|(_, p)| p.name.clone())
            .collect();

        Ok(GameRecord {
            game: game_no,
            winner: game.player(result.winner()).name.clone(),
            result,
            bankrupt,
        })
    }
}
