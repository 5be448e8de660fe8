use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ur_engine::board::{BoardState, Position, Square, Track};
use ur_engine::core::PlayerId;
use ur_engine::env::UrEnv;
use ur_engine::moves::generate;

fn midgame_board() -> BoardState {
    let mut board = BoardState::new(7);
    let placements = [
        (PlayerId::P0, 0, Square::new(Track::A, 2)),
        (PlayerId::P0, 1, Square::new(Track::B, 3)),
        (PlayerId::P0, 2, Square::new(Track::B, 7)),
        (PlayerId::P1, 0, Square::new(Track::B, 5)),
        (PlayerId::P1, 1, Square::new(Track::C, 1)),
        (PlayerId::P1, 2, Square::new(Track::B, 4)),
    ];
    for (player, piece, sq) in placements {
        board.move_piece(player, piece, Position::On(sq)).unwrap();
    }
    board
}

fn bench_movegen(c: &mut Criterion) {
    let board = midgame_board();
    c.bench_function("generate_midgame", |b| {
        b.iter(|| generate(black_box(&board), black_box(PlayerId::P0), black_box(2)))
    });
}

fn bench_full_playout(c: &mut Criterion) {
    c.bench_function("full_playout_first_candidate", |b| {
        b.iter(|| {
            let mut env = UrEnv::with_seed(black_box(42));
            let mut active = PlayerId::P0;
            for _ in 0..50_000 {
                if env.is_done() {
                    break;
                }
                let dice = env.roll();
                let moves = env.legal_moves(active, dice).unwrap();
                match moves.moves().first() {
                    None => active = active.opponent(),
                    Some(&candidate) => {
                        env.step(&candidate, dice).unwrap();
                        if !candidate.extra_turn {
                            active = active.opponent();
                        }
                    }
                }
            }
            env.history().len()
        })
    });
}

criterion_group!(benches, bench_movegen, bench_full_playout);
criterion_main!(benches);
