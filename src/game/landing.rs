//! Tile landing effects.
//!
//! `resolve_landing` dispatches on the kind of the tile under the player.
//! Property landings always run rent, then upgrade, then purchase; rent is
//! charged at the house count from before this visit. Station landings run
//! rent, then purchase.
//!
//! Bankruptcy from any cause hands every tile the player owned back to the
//! bank with its houses removed.

use crate::board::{TileId, TileKind};
use crate::core::{GameEvent, PlayerId, RandomSource};

use super::state::Game;

impl<R: RandomSource> Game<R> {
    /// Apply the effect of the tile the player stands on.
    pub fn resolve_landing(&mut self, player: PlayerId) {
        let tile = self.board.wrap(self.players[player].position);

        match self.board[tile].kind {
            TileKind::Plain => self.land_on_plain(player, tile),
            TileKind::Property(_) => self.land_on_property(player, tile),
            TileKind::Station(_) => self.land_on_station(player, tile),
            TileKind::Card(_) => self.land_on_card(player, tile),
            TileKind::Fine { .. } => self.land_on_fine(player, tile),
            TileKind::Jail => self.land_on_jail(player, tile),
            TileKind::GoToJail => self.send_to_jail(player),
        }
    }

    fn land_on_plain(&mut self, player: PlayerId, tile: TileId) {
        self.record(GameEvent::Landed {
            player: self.name(player),
            tile: self.board[tile].name.clone(),
        });
    }

    fn land_on_property(&mut self, player: PlayerId, tile: TileId) {
        let rent = match self.board[tile].as_property() {
            Some(property) => property.rent_due(),
            None => return,
        };
        self.collect_rent(player, tile, rent);
        self.build_house(player, tile);
        self.purchase(player, tile);
    }

    fn land_on_station(&mut self, player: PlayerId, tile: TileId) {
        let rent = self.station_rent(tile);
        self.collect_rent(player, tile, rent);
        self.purchase(player, tile);
    }

    fn land_on_card(&mut self, player: PlayerId, tile: TileId) {
        if let TileKind::Card(card) = self.board[tile].kind {
            self.record(GameEvent::CardReceived {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
                card,
            });
        }
    }

    fn land_on_fine(&mut self, player: PlayerId, tile: TileId) {
        let TileKind::Fine { value } = self.board[tile].kind else {
            return;
        };

        if self.players[player].can_afford(value) {
            if self.config.charge_fines {
                self.players[player].balance -= value;
            }
            self.record(GameEvent::Fined {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
                amount: value,
            });
        } else {
            self.record(GameEvent::CannotPayFine {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
            });
            self.declare_bankrupt(player);
        }
    }

    /// Landing on the jail cell locks the player up.
    fn land_on_jail(&mut self, player: PlayerId, _tile: TileId) {
        self.send_to_jail(player);
    }

    /// Move the player into the jail cell, start the counter, then announce
    /// the stay.
    pub fn send_to_jail(&mut self, player: PlayerId) {
        let jail = self.board.jail();
        let seat = &mut self.players[player];
        seat.position = jail.index();
        seat.jail_turns = 1;

        self.record(GameEvent::SentToJail {
            player: self.name(player),
        });
        self.record(GameEvent::InJail {
            player: self.name(player),
            tile: self.board[jail].name.clone(),
        });
    }

    /// Station rent for the tile's current owner.
    ///
    /// Counts the stations in the owner's holdings; zero for unowned tiles.
    #[must_use]
    pub fn station_rent(&self, tile: TileId) -> i64 {
        let Some(station) = self.board[tile].as_station() else {
            return 0;
        };
        let Some(owner) = station.deed.owner else {
            return 0;
        };

        let owned = self.players[owner]
            .owned
            .iter()
            .filter(|&&t| self.board[t].is_station())
            .count();
        station.rent_for(owned)
    }

    /// Charge rent to a visitor of an owned tile.
    ///
    /// Does nothing on unowned tiles or when the owner visits. A visitor who
    /// cannot cover the rent hands over their whole balance and goes bankrupt.
    pub fn collect_rent(&mut self, player: PlayerId, tile: TileId, rent: i64) {
        let owner = match self.board[tile].owner() {
            Some(owner) if owner != player => owner,
            _ => return,
        };

        if self.players[player].can_afford(rent) {
            self.players[player].balance -= rent;
            self.players[owner].balance += rent;
            self.record(GameEvent::RentPaid {
                player: self.name(player),
                owner: self.name(owner),
                tile: self.board[tile].name.clone(),
                amount: rent,
            });
        } else {
            let transferred = self.players[player].balance.max(0);
            self.players[player].balance -= transferred;
            self.players[owner].balance += transferred;
            self.record(GameEvent::CannotPayRent {
                player: self.name(player),
                owner: self.name(owner),
                transferred,
            });
            self.declare_bankrupt(player);
        }
    }

    /// Build one house if the player owns the property.
    pub fn build_house(&mut self, player: PlayerId, tile: TileId) {
        let (house_cost, maxed) = match self.board[tile].as_property() {
            Some(p) if p.deed.owner == Some(player) => (p.house_cost, p.is_maxed()),
            _ => return,
        };

        let event = if !self.players[player].can_afford(house_cost) {
            GameEvent::CannotAffordHouse {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
            }
        } else if maxed {
            GameEvent::MaxHouses {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
            }
        } else {
            self.players[player].balance -= house_cost;
            let houses = match self.board[tile].as_property_mut() {
                Some(property) => {
                    property.houses += 1;
                    property.houses
                }
                None => return,
            };
            GameEvent::HouseBuilt {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
                houses,
            }
        };
        self.record(event);
    }

    /// Offer an unowned income tile to the player.
    pub fn purchase(&mut self, player: PlayerId, tile: TileId) {
        let cost = match self.board[tile].deed() {
            Some(deed) if !deed.is_owned() => deed.cost,
            _ => return,
        };

        let strategy = self.players[player].strategy;
        let event = if !strategy.wants_to_buy(&mut self.rng) {
            GameEvent::DeclinedPurchase {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
            }
        } else if !self.players[player].can_afford(cost) {
            GameEvent::CannotAffordPurchase {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
            }
        } else {
            self.players[player].balance -= cost;
            self.grant_tile(player, tile);
            GameEvent::Purchased {
                player: self.name(player),
                tile: self.board[tile].name.clone(),
                cost,
            }
        };
        self.record(event);
    }

    /// Mark the player bankrupt and return their tiles to the bank.
    ///
    /// Has no further effect on a player who is already bankrupt.
    pub fn declare_bankrupt(&mut self, player: PlayerId) {
        if self.players[player].bankrupt {
            return;
        }
        self.players[player].bankrupt = true;
        self.record(GameEvent::Bankrupt {
            player: self.name(player),
        });

        let owned = std::mem::take(&mut self.players[player].owned);
        for tile in owned {
            self.board[tile].release();
        }
    }
}
