//! Board tiles.
//!
//! A `Tile` is a name plus a `TileKind`. The set of kinds is closed; the
//! landing effect of each kind lives in `game::landing` and is selected by
//! matching on `TileKind`.
//!
//! Ownable tiles (properties and stations) share a `Deed`: purchase cost,
//! rent table and current owner. Owners are stored as `PlayerId`s, never as
//! references to players.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::core::PlayerId;

/// Most houses a property can hold.
pub const MAX_HOUSES: u8 = 4;

/// Rent table every station uses, indexed by stations owned minus one.
pub const STATION_RENT: [i64; 4] = [25, 50, 100, 200];

/// Rent table storage. Six entries covers a classic property.
pub type RentTable = SmallVec<[i64; 6]>;

/// Colour group of an ownable tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Group {
    #[default]
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
    Station,
}

/// Which deck a card tile draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Chance,
    Community,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Chance => write!(f, "chance"),
            CardType::Community => write!(f, "community"),
        }
    }
}

/// Ownership data shared by every income tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deed {
    pub group: Group,
    pub cost: i64,
    pub rent: RentTable,
    pub owner: Option<PlayerId>,
}

impl Deed {
    /// Create an unowned deed.
    pub fn new(group: Group, cost: i64, rent: impl IntoIterator<Item = i64>) -> Self {
        Self {
            group,
            cost,
            rent: rent.into_iter().collect(),
            owner: None,
        }
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}

/// A property that can be built on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTile {
    pub deed: Deed,
    pub house_cost: i64,
    /// Houses built, `0..=MAX_HOUSES`.
    pub houses: u8,
}

impl PropertyTile {
    pub fn new(deed: Deed, house_cost: i64) -> Self {
        Self {
            deed,
            house_cost,
            houses: 0,
        }
    }

    /// Rent at the current house count.
    #[must_use]
    pub fn rent_due(&self) -> i64 {
        self.deed.rent[usize::from(self.houses)]
    }

    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.houses >= MAX_HOUSES
    }
}

/// A station. Rent scales with the number of stations the owner holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationTile {
    pub deed: Deed,
}

impl StationTile {
    /// A station with the fixed rent table.
    pub fn new(cost: i64) -> Self {
        Self {
            deed: Deed::new(Group::Station, cost, STATION_RENT),
        }
    }

    /// Rent when the owner holds `owned` stations (at least one).
    #[must_use]
    pub fn rent_for(&self, owned: usize) -> i64 {
        let last = self.deed.rent.len().saturating_sub(1);
        self.deed.rent[owned.saturating_sub(1).min(last)]
    }
}

/// Tile behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// No effect beyond a notice ("Go", "Free Parking").
    Plain,
    Property(PropertyTile),
    Station(StationTile),
    /// Hands out a card. Decks are not modelled.
    Card(CardType),
    /// Flat fine; bankrupts the lander if unaffordable.
    Fine { value: i64 },
    /// The jail cell. Landing here locks the player up.
    Jail,
    /// Sends the lander to the jail cell.
    GoToJail,
}

/// One square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(name: impl Into<String>, kind: TileKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, TileKind::Plain)
    }

    pub fn property(
        name: impl Into<String>,
        group: Group,
        cost: i64,
        rent: impl IntoIterator<Item = i64>,
        house_cost: i64,
    ) -> Self {
        let deed = Deed::new(group, cost, rent);
        Self::new(name, TileKind::Property(PropertyTile::new(deed, house_cost)))
    }

    pub fn station(name: impl Into<String>, cost: i64) -> Self {
        Self::new(name, TileKind::Station(StationTile::new(cost)))
    }

    pub fn card(name: impl Into<String>, card: CardType) -> Self {
        Self::new(name, TileKind::Card(card))
    }

    pub fn fine(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, TileKind::Fine { value })
    }

    pub fn jail(name: impl Into<String>) -> Self {
        Self::new(name, TileKind::Jail)
    }

    pub fn go_to_jail(name: impl Into<String>) -> Self {
        Self::new(name, TileKind::GoToJail)
    }

    /// Ownership data, for income tiles.
    #[must_use]
    pub fn deed(&self) -> Option<&Deed> {
        match &self.kind {
            TileKind::Property(p) => Some(&p.deed),
            TileKind::Station(s) => Some(&s.deed),
            _ => None,
        }
    }

    pub fn deed_mut(&mut self) -> Option<&mut Deed> {
        match &mut self.kind {
            TileKind::Property(p) => Some(&mut p.deed),
            TileKind::Station(s) => Some(&mut s.deed),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_property(&self) -> Option<&PropertyTile> {
        match &self.kind {
            TileKind::Property(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_property_mut(&mut self) -> Option<&mut PropertyTile> {
        match &mut self.kind {
            TileKind::Property(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_station(&self) -> Option<&StationTile> {
        match &self.kind {
            TileKind::Station(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_station(&self) -> bool {
        matches!(self.kind, TileKind::Station(_))
    }

    #[must_use]
    pub fn is_jail(&self) -> bool {
        matches!(self.kind, TileKind::Jail)
    }

    /// Owner of an income tile. `None` for unowned or non-income tiles.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.deed().and_then(|d| d.owner)
    }

    /// Return the tile to the bank: no owner, no houses.
    pub fn release(&mut self) {
        if let Some(deed) = self.deed_mut() {
            deed.owner = None;
        }
        if let Some(property) = self.as_property_mut() {
            property.houses = 0;
        }
    }
}
