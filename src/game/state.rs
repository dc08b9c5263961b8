//! The per-game context.
//!
//! `Game` owns everything one game mutates: the board (tile ownership and
//! houses), the players, the active seat list, the random source and the
//! event log. Nothing is shared between games.

use smallvec::SmallVec;

use crate::board::{Board, TileId};
use crate::core::{
    EventLog, GameConfig, GameError, GameEvent, GameRng, Player, PlayerConfig, PlayerId, PlayerMap,
    RandomSource,
};

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) players: PlayerMap<Player>,
    /// Seats still in the game, in turn order.
    pub(crate) active: SmallVec<[PlayerId; 8]>,
    pub(crate) rng: R,
    pub(crate) log: EventLog,
}

/// Builder for a `Game`.
///
/// ## Example
///
/// ```
/// use monopoly_sim::board::Board;
/// use monopoly_sim::core::{BuyingStrategy, GameRng, PlayerConfig};
/// use monopoly_sim::game::GameBuilder;
///
/// let game = GameBuilder::new(Board::standard().unwrap())
///     .player(&PlayerConfig::new("Ann", 1500, BuyingStrategy::Always))
///     .player(&PlayerConfig::new("Bob", 1500, BuyingStrategy::Never))
///     .build(GameRng::new(42))
///     .unwrap();
///
/// assert_eq!(game.active_players().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    players: Vec<Player>,
    config: GameConfig,
    log: EventLog,
}

impl GameBuilder {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: Vec::new(),
            config: GameConfig::default(),
            log: EventLog::disabled(),
        }
    }

    /// Add a fresh player from a config.
    #[must_use]
    pub fn player(mut self, config: &PlayerConfig) -> Self {
        self.players.push(config.create_player());
        self
    }

    /// Add fresh players from configs, in seat order.
    #[must_use]
    pub fn players<'a>(mut self, configs: impl IntoIterator<Item = &'a PlayerConfig>) -> Self {
        self.players
            .extend(configs.into_iter().map(PlayerConfig::create_player));
        self
    }

    /// Add an already-built player, keeping its position and balance.
    #[must_use]
    pub fn seat(mut self, player: Player) -> Self {
        self.players.push(player);
        self
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    /// Record events into an enabled log.
    #[must_use]
    pub fn logging(self, enabled: bool) -> Self {
        self.log(EventLog::new(enabled))
    }

    /// Validate the line-up and start the game.
    ///
    /// # Errors
    ///
    /// Fails with fewer than 2 or more than 255 players, duplicate names,
    /// negative starting balances, a starting position off the board, a
    /// bankrupt seat, a jail counter at or past the release value, or
    /// holdings that do not match the board's deeds.
    pub fn build<R: RandomSource>(self, rng: R) -> Result<Game<R>, GameError> {
        let count = self.players.len();
        if count < 2 {
            return Err(GameError::NotEnoughPlayers { count });
        }
        if count > 255 {
            return Err(GameError::TooManyPlayers { count });
        }

        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].iter().any(|p| p.name == player.name) {
                return Err(GameError::DuplicatePlayer {
                    name: player.name.clone(),
                });
            }
            if player.balance < 0 {
                return Err(GameError::NegativeBalance {
                    name: player.name.clone(),
                    balance: player.balance,
                });
            }
            if player.position >= self.board.tile_count() {
                return Err(GameError::StartOutsideBoard {
                    name: player.name.clone(),
                    position: player.position,
                    len: self.board.tile_count(),
                });
            }
            if player.bankrupt {
                return Err(GameError::BankruptSeat {
                    name: player.name.clone(),
                });
            }
            if player.jail_turns >= self.config.jail_release_at {
                return Err(GameError::JailCounterOutOfRange {
                    name: player.name.clone(),
                    counter: player.jail_turns,
                    release_at: self.config.jail_release_at,
                });
            }
        }

        let mut board = self.board;
        claim_holdings(&mut board, &self.players)?;

        let players = PlayerMap::from_vec(self.players);
        let active = players.player_ids().collect();
        log::debug!(
            "starting game: {} players on a {}-tile board",
            players.player_count(),
            board.tile_count()
        );

        Ok(Game {
            config: self.config,
            board,
            players,
            active,
            rng,
            log: self.log,
        })
    }
}

/// Mark every deed a seat brings along as owned by that seat.
///
/// Each held tile must be on the board, carry a deed, and not be claimed by
/// anyone else. Deeds already owned on the board must be listed by their
/// owner.
fn claim_holdings(board: &mut Board, players: &[Player]) -> Result<(), GameError> {
    for (seat, player) in players.iter().enumerate() {
        let id = PlayerId::new(seat as u8);
        for (i, &tile) in player.owned.iter().enumerate() {
            let invalid = || GameError::InvalidHolding {
                name: player.name.clone(),
                tile: tile.index(),
            };
            if player.owned[..i].contains(&tile) {
                return Err(invalid());
            }
            let deed = match board.tile_at(tile.index()) {
                Ok(t) => t.deed(),
                Err(_) => return Err(invalid()),
            };
            match deed {
                Some(deed) if deed.owner.map_or(true, |owner| owner == id) => {}
                _ => return Err(invalid()),
            }
            if let Some(deed) = board[tile].deed_mut() {
                deed.owner = Some(id);
            }
        }
    }

    for (tile, t) in board.iter() {
        if let Some(owner) = t.owner() {
            let held = players
                .get(owner.index())
                .is_some_and(|p| p.owned.contains(&tile));
            if !held {
                return Err(GameError::StrayOwner { tile: tile.index() });
            }
        }
    }
    Ok(())
}

impl<R: RandomSource> Game<R> {
    /// The board, with current ownership.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Direct access for setting up scenarios.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Look a player up by name.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.name == name)
            .map(|(id, _)| id)
    }

    /// Seats still in the game, in turn order.
    #[must_use]
    pub fn active_players(&self) -> &[PlayerId] {
        &self.active
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Give an unowned income tile to a player without charging for it.
    ///
    /// Returns false if the tile is off the board, not an income tile, or
    /// already owned.
    pub fn grant_tile(&mut self, player: PlayerId, tile: TileId) -> bool {
        if tile.index() >= self.board.tile_count() {
            return false;
        }
        match self.board[tile].deed_mut() {
            Some(deed) if deed.owner.is_none() => {
                deed.owner = Some(player);
                self.players[player].owned.push(tile);
                true
            }
            _ => false,
        }
    }

    /// Drop bankrupt seats from the active list.
    pub(crate) fn prune_bankrupt(&mut self) {
        let players = &self.players;
        self.active.retain(|id| !players[*id].bankrupt);
    }

    pub(crate) fn name(&self, id: PlayerId) -> String {
        self.players[id].name.clone()
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        self.log.record(event);
    }
}
