//! Game events and the per-game event log.
//!
//! Every state-changing action in a game produces a `GameEvent`. Its
//! `Display` impl renders the human-readable line shown to players.
//!
//! ## EventLog
//!
//! Each game owns its own `EventLog`; nothing is global, so games can run
//! back to back (or in parallel) without sharing logger state. An enabled log
//! keeps every event in memory and forwards the line to the `log` facade at
//! `info` level under the `monopoly_sim::events` target. A disabled log drops
//! events.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::CardType;

/// Log target for event lines.
pub const EVENT_TARGET: &str = "monopoly_sim::events";

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Rolled { turn: u32, player: String, total: usize },
    PassedGo { player: String, bonus: i64 },
    Landed { player: String, tile: String },
    Purchased { player: String, tile: String, cost: i64 },
    DeclinedPurchase { player: String, tile: String },
    CannotAffordPurchase { player: String, tile: String },
    RentPaid { player: String, owner: String, tile: String, amount: i64 },
    /// Rent was due but unaffordable; `transferred` is what the owner got.
    CannotPayRent { player: String, owner: String, transferred: i64 },
    HouseBuilt { player: String, tile: String, houses: u8 },
    CannotAffordHouse { player: String, tile: String },
    MaxHouses { player: String, tile: String },
    CardReceived { player: String, tile: String, card: CardType },
    Fined { player: String, tile: String, amount: i64 },
    CannotPayFine { player: String, tile: String },
    SentToJail { player: String },
    InJail { player: String, tile: String },
    RolledDoubles { player: String, face: u8 },
    FailedEscape { player: String },
    ServedSentence { player: String, turns: u8 },
    Bankrupt { player: String },
    Won { player: String },
    Stalemate { turns: u32 },
    HighestBalance { player: String, balance: i64 },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Rolled { turn, player, total } => {
                write!(f, "[{turn}] {player} rolled a {total}!")
            }
            GameEvent::PassedGo { player, bonus } => {
                write!(f, "{player} has passed go and received ${bonus} from the bank!")
            }
            GameEvent::Landed { player, tile } => write!(f, "{player} has landed on {tile}"),
            GameEvent::Purchased { player, tile, cost } => {
                write!(f, "{player} has bought {tile} for ${cost}")
            }
            GameEvent::DeclinedPurchase { player, tile } => {
                write!(f, "{player} has opted not to purchase {tile}")
            }
            GameEvent::CannotAffordPurchase { player, tile } => {
                write!(f, "{player} did not have enough money to purchase {tile}")
            }
            GameEvent::RentPaid {
                player,
                owner,
                tile,
                amount,
            } => write!(
                f,
                "{player} has paid ${amount} for landing on {tile} owned by {owner}"
            ),
            GameEvent::CannotPayRent {
                player,
                owner,
                transferred,
            } => write!(
                f,
                "{player} did not have enough money to pay {owner} and handed over ${transferred}"
            ),
            GameEvent::HouseBuilt {
                player,
                tile,
                houses,
            } => write!(f, "{player} has built a house on {tile} ({houses} total)"),
            GameEvent::CannotAffordHouse { player, tile } => {
                write!(f, "{player} can't afford to build a house on {tile}")
            }
            GameEvent::MaxHouses { player, tile } => {
                write!(f, "{player} already has the max number of houses on {tile}")
            }
            GameEvent::CardReceived { player, tile, card } => {
                write!(f, "{player} has received a {tile} card ({card})!")
            }
            GameEvent::Fined {
                player,
                tile,
                amount,
            } => write!(
                f,
                "{player} has landed on {tile} and received a ${amount} fine!"
            ),
            GameEvent::CannotPayFine { player, tile } => {
                write!(f, "{player} has landed on {tile} and is unable to pay the fine")
            }
            GameEvent::SentToJail { player } => write!(f, "{player} has been sent to jail!"),
            GameEvent::InJail { player, tile } => write!(f, "{player} is locked up in {tile}"),
            GameEvent::RolledDoubles { player, face } => {
                write!(f, "{player} has rolled double {face}'s and has escaped jail")
            }
            GameEvent::FailedEscape { player } => {
                write!(f, "{player} has failed to roll doubles and escape jail")
            }
            GameEvent::ServedSentence { player, turns } => {
                write!(f, "{player} has escaped jail after {turns} turns!")
            }
            GameEvent::Bankrupt { player } => write!(f, "{player} has been declared bankrupt!"),
            GameEvent::Won { player } => write!(f, "{player} has won the game!"),
            GameEvent::Stalemate { turns } => {
                write!(f, "The game ended in a stalemate after {turns} turns!")
            }
            GameEvent::HighestBalance { player, balance } => {
                write!(f, "{player} wins with the highest final balance (${balance})")
            }
        }
    }
}

/// Per-game, toggleable event sink.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    enabled: bool,
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create a log that records and emits events.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            events: Vec::new(),
        }
    }

    /// Create a log that drops every event.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self::enabled()
        } else {
            Self::disabled()
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Record an event if the log is enabled.
    pub fn record(&mut self, event: GameEvent) {
        if !self.enabled {
            return;
        }
        log::info!(target: EVENT_TARGET, "{event}");
        self.events.push(event);
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(ToString::to_string)
    }

    /// Drop recorded events, keeping the enabled flag.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bought() -> GameEvent {
        GameEvent::Purchased {
            player: "Bob".into(),
            tile: "Baltic Avenue".into(),
            cost: 60,
        }
    }

    #[test]
    fn test_enabled_log_records() {
        let mut log = EventLog::enabled();
        log.record(bought());
        log.record(GameEvent::Bankrupt { player: "Bob".into() });

        assert_eq!(log.events().len(), 2);
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines[0], "Bob has bought Baltic Avenue for $60");
        assert_eq!(lines[1], "Bob has been declared bankrupt!");
    }

    #[test]
    fn test_disabled_log_drops() {
        let mut log = EventLog::disabled();
        log.record(bought());
        assert!(log.events().is_empty());

        log.set_enabled(true);
        log.record(bought());
        assert_eq!(log.events(), &[bought()]);

        log.clear();
        assert!(log.events().is_empty());
        assert!(log.is_enabled());
    }

    #[test]
    fn test_event_lines() {
        let rolled = GameEvent::Rolled {
            turn: 4,
            player: "Ann".into(),
            total: 9,
        };
        assert_eq!(rolled.to_string(), "[4] Ann rolled a 9!");

        let card = GameEvent::CardReceived {
            player: "Ann".into(),
            tile: "Chance".into(),
            card: CardType::Chance,
        };
        assert_eq!(card.to_string(), "Ann has received a Chance card (chance)!");
    }

    #[test]
    fn test_event_serde() {
        let json = serde_json::to_string(&bought()).unwrap();
        assert!(json.contains("\"event\":\"purchased\""));

        let restored: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, bought());
    }
}
