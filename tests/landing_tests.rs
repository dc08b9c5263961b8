//! Landing effects seen through the public API.
//!
//! Every scenario places a player on a tile and resolves the landing, then
//! checks balances, ownership and the event log.

use monopoly_sim::board::{Board, CardType, Group, Tile, TileId};
use monopoly_sim::core::{BuyingStrategy, GameConfig, GameEvent, Player, PlayerId, ScriptedRng};
use monopoly_sim::game::{Game, GameBuilder};

const OWNER: PlayerId = PlayerId::new(0);
const VISITOR: PlayerId = PlayerId::new(1);

const BALTIC: TileId = TileId::new(1);
const READING: TileId = TileId::new(2);
const PENNSYLVANIA: TileId = TileId::new(4);
const LUXURY_TAX: TileId = TileId::new(5);
const JAIL: TileId = TileId::new(6);
const GO_TO_JAIL: TileId = TileId::new(7);

fn board() -> Board {
    Board::new(vec![
        Tile::plain("Go"),
        Tile::property("Baltic Avenue", Group::Brown, 60, [4, 20, 60, 180, 320], 50),
        Tile::station("Reading Railroad", 200),
        Tile::card("Chance", CardType::Chance),
        Tile::station("Pennsylvania Railroad", 200),
        Tile::fine("Luxury Tax", 100),
        Tile::jail("Jail"),
        Tile::go_to_jail("Go To Jail"),
    ])
    .unwrap()
}

fn game_with(owner: Player, visitor: Player, config: GameConfig) -> Game<ScriptedRng> {
    GameBuilder::new(board())
        .seat(owner)
        .seat(visitor)
        .config(config)
        .logging(true)
        .build(ScriptedRng::new())
        .unwrap()
}

fn game() -> Game<ScriptedRng> {
    game_with(
        Player::new("Owner", 1000, BuyingStrategy::Always),
        Player::new("Visitor", 500, BuyingStrategy::Never),
        GameConfig::default(),
    )
}

fn land(game: &mut Game<ScriptedRng>, player: PlayerId, tile: TileId) {
    game.player_mut(player).position = tile.index();
    game.resolve_landing(player);
}

fn total_money(game: &Game<ScriptedRng>) -> i64 {
    game.players().iter().map(|(_, p)| p.balance).sum()
}

#[test]
fn test_owner_of_two_stations_charges_fifty() {
    let mut game = game();
    assert!(game.grant_tile(OWNER, READING));
    assert!(game.grant_tile(OWNER, PENNSYLVANIA));

    land(&mut game, VISITOR, READING);

    assert_eq!(game.player(VISITOR).balance, 450);
    assert_eq!(game.player(OWNER).balance, 1050);
    assert_eq!(game.board()[READING].owner(), Some(OWNER));
}

#[test]
fn test_single_station_charges_base_rent() {
    let mut game = game();
    game.grant_tile(OWNER, PENNSYLVANIA);

    land(&mut game, VISITOR, PENNSYLVANIA);

    assert_eq!(game.player(VISITOR).balance, 475);
    assert_eq!(game.station_rent(READING), 0);
    assert_eq!(game.station_rent(PENNSYLVANIA), 25);
}

#[test]
fn test_owner_lands_on_own_station_without_paying() {
    let mut game = game();
    game.grant_tile(OWNER, READING);

    land(&mut game, OWNER, READING);

    assert_eq!(game.player(OWNER).balance, 1000);
    assert!(game.log().events().is_empty());
}

#[test]
fn test_buy_then_build_then_charge_more() {
    let mut game = game();

    land(&mut game, OWNER, BALTIC);
    assert_eq!(game.player(OWNER).balance, 940);
    assert!(game.player(OWNER).owns(BALTIC));

    land(&mut game, OWNER, BALTIC);
    assert_eq!(game.player(OWNER).balance, 890);
    assert_eq!(game.board()[BALTIC].as_property().unwrap().houses, 1);

    land(&mut game, VISITOR, BALTIC);
    assert_eq!(game.player(VISITOR).balance, 480);
    assert_eq!(game.player(OWNER).balance, 910);
}

#[test]
fn test_rent_is_zero_sum() {
    let mut game = game();
    game.grant_tile(OWNER, BALTIC);
    let before = total_money(&game);

    for _ in 0..10 {
        land(&mut game, VISITOR, BALTIC);
    }

    assert_eq!(total_money(&game), before);
    assert_eq!(game.player(VISITOR).balance, 460);
}

#[test]
fn test_house_count_never_exceeds_cap() {
    let mut game = game();
    game.grant_tile(OWNER, BALTIC);

    for _ in 0..7 {
        land(&mut game, OWNER, BALTIC);
    }

    let property = game.board()[BALTIC].as_property().unwrap();
    assert_eq!(property.houses, 4);
    assert_eq!(game.player(OWNER).balance, 800);
    assert!(game
        .log()
        .events()
        .iter()
        .any(|e| matches!(e, GameEvent::MaxHouses { .. })));
}

#[test]
fn test_unaffordable_fine_bankrupts_without_deduction() {
    let mut game = game_with(
        Player::new("Owner", 1000, BuyingStrategy::Always),
        Player::new("Visitor", 50, BuyingStrategy::Never),
        GameConfig::default(),
    );

    land(&mut game, VISITOR, LUXURY_TAX);

    let visitor = game.player(VISITOR);
    assert!(visitor.bankrupt);
    assert_eq!(visitor.balance, 50);
    assert_eq!(
        game.log().lines().collect::<Vec<_>>(),
        vec![
            "Visitor has landed on Luxury Tax and is unable to pay the fine",
            "Visitor has been declared bankrupt!",
        ]
    );
}

#[test]
fn test_affordable_fine_charged_only_when_enabled() {
    let mut lenient = game();
    land(&mut lenient, VISITOR, LUXURY_TAX);
    assert_eq!(lenient.player(VISITOR).balance, 500);
    assert!(!lenient.player(VISITOR).bankrupt);

    let mut strict = game_with(
        Player::new("Owner", 1000, BuyingStrategy::Always),
        Player::new("Visitor", 500, BuyingStrategy::Never),
        GameConfig::new().charging_fines(),
    );
    land(&mut strict, VISITOR, LUXURY_TAX);
    assert_eq!(strict.player(VISITOR).balance, 400);
}

#[test]
fn test_bankruptcy_returns_every_tile() {
    let mut game = game_with(
        Player::new("Owner", 1000, BuyingStrategy::Always),
        Player::new("Visitor", 10, BuyingStrategy::Never),
        GameConfig::default(),
    );
    game.grant_tile(VISITOR, READING);
    game.grant_tile(VISITOR, PENNSYLVANIA);
    game.grant_tile(OWNER, BALTIC);
    land(&mut game, OWNER, BALTIC);
    land(&mut game, OWNER, BALTIC);

    // Two houses on Baltic: rent 60, visitor holds 10.
    land(&mut game, VISITOR, BALTIC);

    let visitor = game.player(VISITOR);
    assert!(visitor.bankrupt);
    assert_eq!(visitor.balance, 0);
    assert!(visitor.owned.is_empty());
    assert_eq!(game.board().owned_by(VISITOR).count(), 0);
    assert_eq!(game.board()[READING].owner(), None);
    assert_eq!(game.player(OWNER).balance, 1000 - 100 + 10);
}

#[test]
fn test_card_and_plain_tiles_change_nothing() {
    let mut game = game();

    land(&mut game, VISITOR, TileId::new(3));
    land(&mut game, VISITOR, TileId::new(0));

    assert_eq!(game.player(VISITOR).balance, 500);
    assert_eq!(
        game.log().lines().collect::<Vec<_>>(),
        vec![
            "Visitor has received a Chance card (chance)!",
            "Visitor has landed on Go",
        ]
    );
}

#[test]
fn test_jail_tiles_lock_player_up() {
    for tile in [JAIL, GO_TO_JAIL] {
        let mut game = game();
        land(&mut game, VISITOR, tile);

        let visitor = game.player(VISITOR);
        assert_eq!(visitor.position, JAIL.index());
        assert_eq!(visitor.jail_turns, 1);
        assert!(visitor.is_jailed());
        assert_eq!(
            game.log().lines().collect::<Vec<_>>(),
            vec!["Visitor has been sent to jail!", "Visitor is locked up in Jail"]
        );
    }
}

#[test]
fn test_random_buyer_follows_coin() {
    let mut game = GameBuilder::new(board())
        .seat(Player::new("Flip", 500, BuyingStrategy::Random))
        .seat(Player::new("Other", 500, BuyingStrategy::Never))
        .build(ScriptedRng::new().with_coins([false, true]))
        .unwrap();
    let flip = PlayerId::new(0);

    land(&mut game, flip, BALTIC);
    assert_eq!(game.board()[BALTIC].owner(), None);

    land(&mut game, flip, BALTIC);
    assert_eq!(game.board()[BALTIC].owner(), Some(flip));
    assert_eq!(game.player(flip).balance, 440);
}
