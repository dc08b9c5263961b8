//! Player identification, per-player storage and player state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting up to 255 players.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Position, balance, jail counter and owned tiles of one seat. Tiles are
//! referenced by `TileId`; the tiles themselves live on the `Board`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::rng::RandomSource;
use crate::board::TileId;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based and follow seat order: the first player is
/// `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players.len(), 3);
    /// assert_eq!(players[2], PlayerId::new(2));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use monopoly_sim::core::{PlayerId, PlayerMap};
///
/// let mut cash: PlayerMap<i64> = PlayerMap::new(3, |_| 500);
/// cash[PlayerId::new(1)] -= 60;
/// assert_eq!(cash[PlayerId::new(1)], 440);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Wrap existing per-seat values, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's fixed policy for buying unowned income tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyingStrategy {
    /// Buy whenever affordable.
    Always,
    /// Never buy.
    Never,
    /// Buy on a fair coin flip.
    #[default]
    Random,
}

impl BuyingStrategy {
    /// Decide whether to buy. Only `Random` consumes randomness.
    pub fn wants_to_buy<R: RandomSource + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            BuyingStrategy::Always => true,
            BuyingStrategy::Never => false,
            BuyingStrategy::Random => rng.gen_bool(0.5),
        }
    }
}

impl std::str::FromStr for BuyingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(BuyingStrategy::Always),
            "never" => Ok(BuyingStrategy::Never),
            "random" => Ok(BuyingStrategy::Random),
            other => Err(format!("unknown buying strategy '{other}'")),
        }
    }
}

/// Where a player stands in the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Rolls and moves normally.
    Free,
    /// Spends turns trying to escape; carries the jail counter (1..=4).
    Jailed(u8),
    /// Terminal. Never plays again.
    Bankrupt,
}

/// Mutable state of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a game.
    pub name: String,

    /// Board index, always normalized after a turn.
    pub position: usize,

    /// Cash on hand.
    pub balance: i64,

    /// Terminal flag, never cleared once set.
    pub bankrupt: bool,

    /// 0 when free, otherwise the number of jail turns started so far.
    pub jail_turns: u8,

    /// Income tiles owned by this player.
    pub owned: SmallVec<[TileId; 8]>,

    /// Purchase policy.
    pub strategy: BuyingStrategy,
}

impl Player {
    /// Create a player on the first tile.
    pub fn new(name: impl Into<String>, balance: i64, strategy: BuyingStrategy) -> Self {
        Self {
            name: name.into(),
            position: 0,
            balance,
            bankrupt: false,
            jail_turns: 0,
            owned: SmallVec::new(),
            strategy,
        }
    }

    /// Place the player on a given tile index.
    #[must_use]
    pub fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn is_jailed(&self) -> bool {
        self.jail_turns > 0
    }

    #[must_use]
    pub fn can_afford(&self, amount: i64) -> bool {
        self.balance >= amount
    }

    #[must_use]
    pub fn owns(&self, tile: TileId) -> bool {
        self.owned.contains(&tile)
    }

    /// Current turn state.
    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        if self.bankrupt {
            PlayerStatus::Bankrupt
        } else if self.is_jailed() {
            PlayerStatus::Jailed(self.jail_turns)
        } else {
            PlayerStatus::Free
        }
    }
}
