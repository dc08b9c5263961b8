//! Batch runs on the classic board.

use monopoly_sim::board::Board;
use monopoly_sim::core::{BuyingStrategy, GameConfig, PlayerConfig, SimulationConfig};
use monopoly_sim::sim::Simulation;

fn seats() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig::new("Ann", 500, BuyingStrategy::Always),
        PlayerConfig::new("Bob", 500, BuyingStrategy::Random),
        PlayerConfig::new("Cid", 500, BuyingStrategy::Never),
    ]
}

#[test]
fn test_default_harness_runs_twenty_games() {
    let config = SimulationConfig {
        seed: Some(1),
        ..SimulationConfig::default()
    };
    let report = Simulation::new(Board::standard().unwrap(), config).run().unwrap();

    assert_eq!(report.games.len(), 20);
    for (i, record) in report.games.iter().enumerate() {
        assert_eq!(record.game, i as u32 + 1);
        assert!(["Player1", "Player2", "Player3"].contains(&record.winner.as_str()));
        assert!(!record.bankrupt.contains(&record.winner));
    }
}

#[test]
fn test_games_do_not_share_state() {
    let config = SimulationConfig {
        games: 8,
        seed: Some(5),
        players: seats(),
        ..SimulationConfig::default()
    };
    let sim = Simulation::new(Board::standard().unwrap(), config.clone());
    let batch = sim.run().unwrap();

    // Replaying with one game fewer must reproduce the same prefix: each game
    // starts from a pristine board and fresh players.
    let shorter = Simulation::new(
        Board::standard().unwrap(),
        SimulationConfig { games: 7, ..config },
    )
    .run()
    .unwrap();

    assert_eq!(&batch.games[..7], &shorter.games[..]);
}

#[test]
fn test_elimination_games_record_losers() {
    let config = SimulationConfig {
        games: 10,
        max_turns: Some(300),
        seed: Some(12),
        rules: GameConfig::new().charging_fines(),
        players: seats(),
        log_events: false,
    };
    let report = Simulation::new(Board::standard().unwrap(), config).run().unwrap();

    for record in &report.games {
        if record.result.is_stalemate() {
            continue;
        }
        assert_eq!(record.bankrupt.len(), 2);
    }
    assert_eq!(report.eliminations() + report.stalemates, 10);
}

#[test]
fn test_report_serializes_to_json() {
    let config = SimulationConfig {
        games: 2,
        seed: Some(3),
        players: seats(),
        ..SimulationConfig::default()
    };
    let report = Simulation::new(Board::standard().unwrap(), config).run().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"], 3);
    assert_eq!(json["games"].as_array().unwrap().len(), 2);
}
