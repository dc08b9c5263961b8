//! Turn resolution.
//!
//! A free player rolls two dice, moves, collects the pass-go bonus when the
//! move reaches or passes the end of the board, and lands. A jailed player
//! spends the turn trying to escape and does not move. Bankrupt players do
//! nothing.

use crate::core::{GameEvent, PlayerId, PlayerStatus, RandomSource};

use super::state::Game;

impl<R: RandomSource> Game<R> {
    /// Play one turn for a player. `turn` is only used in the event log.
    pub fn play_turn(&mut self, player: PlayerId, turn: u32) {
        match self.players[player].status() {
            PlayerStatus::Bankrupt => {}
            PlayerStatus::Jailed(_) => self.escape_jail(player),
            PlayerStatus::Free => {
                let roll = self.rng.roll_dice();
                self.record(GameEvent::Rolled {
                    turn,
                    player: self.name(player),
                    total: roll.total(),
                });
                self.advance(player, roll.total());
                self.resolve_landing(player);
            }
        }
    }

    /// Move a player forward, wrapping around the board.
    ///
    /// Reaching or passing the end of the board credits the pass-go bonus
    /// once before the position is normalized.
    pub fn advance(&mut self, player: PlayerId, steps: usize) {
        let len = self.board.tile_count();
        let bonus = self.config.pass_go_bonus;
        let seat = &mut self.players[player];
        let raw = seat.position + steps;

        if raw >= len {
            seat.balance += bonus;
            self.record(GameEvent::PassedGo {
                player: self.name(player),
                bonus,
            });
        }
        self.players[player].position = raw % len;
    }

    /// Spend a jail turn.
    ///
    /// The counter is incremented first. Reaching `jail_release_at` frees the
    /// player without a roll; otherwise a double frees them.
    pub fn escape_jail(&mut self, player: PlayerId) {
        if !self.players[player].is_jailed() {
            return;
        }
        self.players[player].jail_turns += 1;

        if self.players[player].jail_turns >= self.config.jail_release_at {
            let served = self.players[player].jail_turns.saturating_sub(2);
            self.players[player].jail_turns = 0;
            self.record(GameEvent::ServedSentence {
                player: self.name(player),
                turns: served,
            });
            return;
        }

        let roll = self.rng.roll_dice();
        if roll.is_double() {
            self.players[player].jail_turns = 0;
            self.record(GameEvent::RolledDoubles {
                player: self.name(player),
                face: roll.first,
            });
        } else {
            self.record(GameEvent::FailedEscape {
                player: self.name(player),
            });
        }
    }
}
