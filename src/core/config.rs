//! Game and simulation configuration.
//!
//! - `GameConfig`: rule constants applied by the turn engine
//! - `PlayerConfig`: reusable recipe for building a fresh `Player`
//! - `SimulationConfig`: everything a batch run needs, loadable from JSON
//!
//! All types deserialize with defaults, so a config file only needs the
//! fields it overrides.

use serde::{Deserialize, Serialize};

use super::player::{BuyingStrategy, Player};

/// Rule constants for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Credit for reaching or passing the end of the board.
    pub pass_go_bonus: i64,

    /// Jail counter value at which the player is released without rolling.
    ///
    /// The counter is set to 1 on entry and incremented at the start of
    /// every jail turn, so the default of 5 allows three failed rolls.
    pub jail_release_at: u8,

    /// Deduct fines from the balance when affordable.
    ///
    /// Off by default: an affordable fine is announced but not charged.
    pub charge_fines: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pass_go_bonus: 200,
            jail_release_at: 5,
            charge_fines: false,
        }
    }
}

impl GameConfig {
    /// Create the default rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass-go bonus.
    #[must_use]
    pub fn with_pass_go_bonus(mut self, bonus: i64) -> Self {
        self.pass_go_bonus = bonus;
        self
    }

    /// Set the forced-release counter value.
    #[must_use]
    pub fn with_jail_release_at(mut self, counter: u8) -> Self {
        self.jail_release_at = counter;
        self
    }

    /// Enable fine deduction.
    #[must_use]
    pub fn charging_fines(mut self) -> Self {
        self.charge_fines = true;
        self
    }
}

/// Recipe for a player, reused across games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,

    #[serde(default = "default_starting_balance")]
    pub starting_balance: i64,

    #[serde(default)]
    pub strategy: BuyingStrategy,
}

fn default_starting_balance() -> i64 {
    500
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, starting_balance: i64, strategy: BuyingStrategy) -> Self {
        Self {
            name: name.into(),
            starting_balance,
            strategy,
        }
    }

    /// Build a fresh player on the first tile.
    #[must_use]
    pub fn create_player(&self) -> Player {
        Player::new(self.name.clone(), self.starting_balance, self.strategy)
    }
}

impl std::str::FromStr for PlayerConfig {
    type Err = String;

    /// Parse `NAME[:BALANCE[:STRATEGY]]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let name = parts
            .next()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| format!("missing player name in '{s}'"))?;

        let starting_balance = match parts.next() {
            Some(raw) => raw
                .parse()
                .map_err(|_| format!("invalid starting balance '{raw}'"))?,
            None => default_starting_balance(),
        };

        let strategy = match parts.next() {
            Some(raw) => raw.parse()?,
            None => BuyingStrategy::default(),
        };

        if parts.next().is_some() {
            return Err(format!("too many fields in '{s}'"));
        }

        Ok(Self::new(name, starting_balance, strategy))
    }
}

/// Configuration of a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u32,

    /// Turn cap per game. `None` plays until a lone survivor remains.
    pub max_turns: Option<u32>,

    /// Master seed. `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Rule constants shared by every game.
    pub rules: GameConfig,

    /// Seats, in turn order.
    pub players: Vec<PlayerConfig>,

    /// Emit per-game event lines.
    pub log_events: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 20,
            max_turns: Some(100),
            seed: None,
            rules: GameConfig::default(),
            players: (1..=3)
                .map(|i| PlayerConfig::new(format!("Player{i}"), 500, BuyingStrategy::Random))
                .collect(),
            log_events: false,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
