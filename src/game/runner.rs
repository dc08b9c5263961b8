//! Playing a game to the end.
//!
//! Seats take turns in order. After every single turn bankrupt seats are
//! dropped; a lone survivor wins on the spot, even mid-round. If the turn cap
//! runs out first the game is a stalemate and the richest remaining seat
//! wins, ties going to the earliest seat.

use serde::{Deserialize, Serialize};

use crate::core::{GameEvent, PlayerId, RandomSource};

use super::state::Game;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Every other seat went bankrupt.
    LastStanding(PlayerId),
    /// The turn cap ran out; the richest seat wins.
    Stalemate { leader: PlayerId, turns: u32 },
}

impl GameResult {
    /// The winning seat.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        match *self {
            GameResult::LastStanding(p) => p,
            GameResult::Stalemate { leader, .. } => leader,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == player
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        matches!(self, GameResult::Stalemate { .. })
    }
}

impl<R: RandomSource> Game<R> {
    /// Play until one seat remains or `max_turns` runs out.
    ///
    /// Turn numbers start at 1; seat `k` of a round plays turn
    /// `round_start + k` and rounds advance by the starting seat count. A
    /// round is started while its first turn number is within the cap.
    /// `None` plays with no cap.
    pub fn play(&mut self, max_turns: Option<u32>) -> GameResult {
        if let Some(winner) = self.sole_survivor() {
            return self.finish(winner);
        }

        let step = self.active.len() as u32;
        let mut round_start: u32 = 1;

        while max_turns.map_or(true, |max| round_start <= max) {
            let order = self.active.clone();
            for (seat, player) in order.into_iter().enumerate() {
                if self.players[player].bankrupt {
                    continue;
                }
                self.play_turn(player, round_start + seat as u32);
                self.prune_bankrupt();

                if let Some(winner) = self.sole_survivor() {
                    return self.finish(winner);
                }
            }
            round_start = round_start.saturating_add(step);
        }

        let turns = max_turns.unwrap_or(round_start);
        self.stalemate(turns)
    }

    /// Play and return the winner's name.
    pub fn play_for_winner(&mut self, max_turns: Option<u32>) -> String {
        let result = self.play(max_turns);
        self.name(result.winner())
    }

    /// The richest active seat; ties go to the earliest seat.
    #[must_use]
    pub fn richest_active(&self) -> Option<PlayerId> {
        self.active.iter().copied().reduce(|best, candidate| {
            if self.players[candidate].balance > self.players[best].balance {
                candidate
            } else {
                best
            }
        })
    }

    fn sole_survivor(&self) -> Option<PlayerId> {
        match self.active.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    fn finish(&mut self, winner: PlayerId) -> GameResult {
        self.record(GameEvent::Won {
            player: self.name(winner),
        });
        GameResult::LastStanding(winner)
    }

    fn stalemate(&mut self, turns: u32) -> GameResult {
        // Never empty: only the player whose turn it is can go bankrupt.
        let leader = self.richest_active().unwrap_or(PlayerId::new(0));
        log::debug!("stalemate after {turns} turns, {} leads", self.players[leader].name);

        self.record(GameEvent::Stalemate { turns });
        self.record(GameEvent::HighestBalance {
            player: self.name(leader),
            balance: self.players[leader].balance,
        });
        GameResult::Stalemate { leader, turns }
    }
}
