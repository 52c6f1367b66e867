use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use capital_struggle::core::{CapitalKind, Character, GameRng, Player};
use capital_struggle::rules::GameBoard;
use capital_struggle::setup::{standard_deck, GameBoardBuilder};

fn game(dominated: usize) -> GameBoard {
    let character = Arc::new(Character::new("Bench", 0, "", ""));
    let mut game = GameBoardBuilder::new()
        .dominant(Player::dominant("Boss", Arc::clone(&character)))
        .dominated_players(
            (0..dominated).map(|i| Player::dominated(format!("P{i}"), Arc::clone(&character))),
        )
        .deck(standard_deck())
        .build(GameRng::new(42))
        .unwrap();
    game.start_game();
    game
}

fn bench_play_turn(c: &mut Criterion) {
    c.bench_function("play_turn_4_players", |b| {
        b.iter_batched(
            || game(3),
            |mut game| {
                for _ in 0..8 {
                    let _ = black_box(game.play_turn());
                }
                game
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("revolution_8_players", |b| {
        let mut game = game(7);
        b.iter(|| {
            game.make_revolution();
            black_box(game.dominant().capital(CapitalKind::Financial))
        })
    });
}

criterion_group!(benches, bench_play_turn);
criterion_main!(benches);
