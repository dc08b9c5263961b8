use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use monopoly_sim::board::Board;
use monopoly_sim::core::{GameRng, SimulationConfig};
use monopoly_sim::game::GameBuilder;
use monopoly_sim::sim::Simulation;

fn bench_single_game(c: &mut Criterion) {
    let board = Board::standard().unwrap();
    let config = SimulationConfig::default();

    c.bench_function("game_100_turns", |b| {
        b.iter_batched(
            || {
                GameBuilder::new(board.clone())
                    .players(&config.players)
                    .build(GameRng::new(7))
                    .unwrap()
            },
            |mut game| black_box(game.play(Some(100))),
            BatchSize::SmallInput,
        )
    });
}

fn bench_batch(c: &mut Criterion) {
    let config = SimulationConfig {
        seed: Some(7),
        ..SimulationConfig::default()
    };
    let sim = Simulation::new(Board::standard().unwrap(), config);

    c.bench_function("batch_20_games", |b| b.iter(|| black_box(sim.run().unwrap())));
}

criterion_group!(benches, bench_single_game, bench_batch);
criterion_main!(benches);
