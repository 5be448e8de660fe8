//! Rule scenarios: entry, capture, safe square, win detection.
//!
//! Each test builds a concrete position, generates moves for one dice
//! value, and checks the resolved transition end to end through `step`.

use ur_engine::board::{BoardState, Position, Square, Track};
use ur_engine::core::{EnvConfig, PlayerId, RewardConfig};
use ur_engine::dice::DiceProfile;
use ur_engine::env::UrEnv;

fn place(board: &mut BoardState, player: PlayerId, piece: u8, sq: Square) {
    board.move_piece(player, piece, Position::On(sq)).unwrap();
}

/// An environment resuming from `board`, with a face set wide enough for
/// the scenario's rolls.
fn env_from(board: BoardState, faces: &[u8]) -> UrEnv {
    let config = EnvConfig::new().with_dice(DiceProfile::from_faces(faces).unwrap());
    UrEnv::from_board(config, board, 42).unwrap()
}

#[test]
fn entry_move_places_piece_on_entry_square() {
    // 7 pieces each, all off-board; a roll of 5 enters at a5
    let env = env_from(BoardState::new(7), &[0, 1, 2, 3, 4, 5]);
    let moves = env.legal_moves(PlayerId::P0, 5).unwrap();

    let candidate = *moves.by_piece(0).expect("piece 0 can enter");
    assert_eq!(candidate.from, Position::OffBoard);
    assert_eq!(candidate.to, Square::new(Track::A, 5));
    assert!(!candidate.captures);

    let mut env = env;
    let outcome = env.step(&candidate, 5).unwrap();
    assert_eq!(
        env.board().position(PlayerId::P0, 0),
        Position::On(Square::new(Track::A, 5))
    );
    assert_eq!(outcome.reward, 0);
    assert!(!outcome.done);
    assert!(outcome.info.is_empty());
}

#[test]
fn war_capture_resets_opponent_to_entry() {
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P0, 0, Square::new(Track::B, 3));
    place(&mut board, PlayerId::P1, 2, Square::new(Track::B, 5));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let moves = env.legal_moves(PlayerId::P0, 2).unwrap();
    let candidate = *moves.by_piece(0).unwrap();
    assert!(candidate.captures);
    assert_eq!(candidate.to, Square::new(Track::B, 5));

    let rewards = RewardConfig::default();
    let outcome = env.step(&candidate, 2).unwrap();
    assert_eq!(
        env.board().position(PlayerId::P1, 2),
        Position::On(Square::new(Track::C, 5))
    );
    assert_eq!(outcome.reward, rewards.capture_bonus + rewards.war_track_penalty);
    assert!(!outcome.done);
}

#[test]
fn safe_square_is_never_capturable() {
    // opponent sits on b4; every roll that would land there bounces past
    for start_offset in 1..=3u8 {
        let dice = 4 - start_offset;
        let mut board = BoardState::new(7);
        place(&mut board, PlayerId::P0, 0, Square::new(Track::B, start_offset));
        place(&mut board, PlayerId::P1, 0, Square::new(Track::B, 4));

        let env = env_from(board, &[0, 1, 2, 3, 4]);
        let moves = env.legal_moves(PlayerId::P0, dice).unwrap();
        let candidate = moves.by_piece(0).unwrap();
        assert_eq!(candidate.to, Square::new(Track::B, 5));
        assert!(!candidate.captures);
    }
}

#[test]
fn landing_on_safe_square_earns_bonus_and_extra_turn() {
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P1, 0, Square::new(Track::B, 1));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let candidate = *env.legal_moves(PlayerId::P1, 3).unwrap().by_piece(0).unwrap();
    assert_eq!(candidate.to, Square::new(Track::B, 4));
    assert!(candidate.extra_turn);

    let outcome = env.step(&candidate, 3).unwrap();
    assert_eq!(outcome.reward, RewardConfig::default().safe_square_bonus);
}

#[test]
fn generic_war_landing_is_penalized() {
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P0, 0, Square::new(Track::B, 1));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let candidate = *env.legal_moves(PlayerId::P0, 1).unwrap().by_piece(0).unwrap();
    assert_eq!(candidate.to, Square::new(Track::B, 2));

    let outcome = env.step(&candidate, 1).unwrap();
    assert_eq!(outcome.reward, RewardConfig::default().war_track_penalty);
}

#[test]
fn home_track_landing_has_no_reward() {
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P0, 0, Square::new(Track::A, 4));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let candidate = *env.legal_moves(PlayerId::P0, 2).unwrap().by_piece(0).unwrap();
    assert_eq!(candidate.to, Square::new(Track::A, 2));

    let outcome = env.step(&candidate, 2).unwrap();
    assert_eq!(outcome.reward, 0);
}

#[test]
fn exact_finish_landing_wins() {
    // six pieces retired, the seventh one step from home on the tail
    let mut board = BoardState::new(7);
    for piece in 0..6 {
        place(&mut board, PlayerId::P0, piece, Square::finish_of(PlayerId::P0));
    }
    place(&mut board, PlayerId::P0, 6, Square::new(Track::A, 7));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let candidate = *env.legal_moves(PlayerId::P0, 1).unwrap().by_piece(6).unwrap();
    assert_eq!(candidate.to, Square::finish_of(PlayerId::P0));

    let outcome = env.step(&candidate, 1).unwrap();
    assert!(outcome.done);
    assert_eq!(outcome.reward, RewardConfig::default().win_reward);
    assert!(env.board().is_win(PlayerId::P0));
    assert!(!env.board().is_win(PlayerId::P1));
}

#[test]
fn win_requires_every_piece_finished() {
    let mut board = BoardState::new(7);
    for piece in 0..6 {
        place(&mut board, PlayerId::P1, piece, Square::finish_of(PlayerId::P1));
    }
    place(&mut board, PlayerId::P1, 6, Square::new(Track::B, 8));
    assert!(!board.is_win(PlayerId::P1));

    // b8 with a 3 exits exactly onto the finish square
    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let candidate = *env.legal_moves(PlayerId::P1, 3).unwrap().by_piece(6).unwrap();
    let outcome = env.step(&candidate, 3).unwrap();
    assert!(outcome.done);
    assert_eq!(outcome.reward, RewardConfig::default().win_reward);
}

#[test]
fn finished_game_rejects_further_steps() {
    let mut board = BoardState::new(7);
    for piece in 0..6 {
        place(&mut board, PlayerId::P0, piece, Square::finish_of(PlayerId::P0));
    }
    place(&mut board, PlayerId::P0, 6, Square::new(Track::A, 7));
    place(&mut board, PlayerId::P1, 0, Square::new(Track::B, 1));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let winning = *env.legal_moves(PlayerId::P0, 1).unwrap().by_piece(6).unwrap();
    env.step(&winning, 1).unwrap();

    let stale = *env.legal_moves(PlayerId::P1, 1).unwrap().by_piece(0).unwrap();
    assert!(env.step(&stale, 1).is_err());
}

#[test]
fn overshoot_keeps_piece_in_place() {
    // b8 with a 4 would land past the finish: the piece cannot move
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P0, 0, Square::new(Track::B, 8));

    let env = env_from(board, &[0, 1, 2, 3, 4]);
    let moves = env.legal_moves(PlayerId::P0, 4).unwrap();
    assert!(moves.by_piece(0).is_none());
}

#[test]
fn captured_piece_reenters_and_moves_again() {
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P0, 0, Square::new(Track::B, 3));
    place(&mut board, PlayerId::P1, 0, Square::new(Track::B, 5));

    let mut env = env_from(board, &[0, 1, 2, 3, 4]);
    let capture = *env.legal_moves(PlayerId::P0, 2).unwrap().by_piece(0).unwrap();
    env.step(&capture, 2).unwrap();

    // the captured piece now descends its home track from the entry square
    let reentry = *env.legal_moves(PlayerId::P1, 2).unwrap().by_piece(0).unwrap();
    assert_eq!(reentry.from, Position::On(Square::new(Track::C, 5)));
    assert_eq!(reentry.to, Square::new(Track::C, 3));
}

#[test]
fn board_index_lookup_selects_candidate() {
    let mut board = BoardState::new(7);
    place(&mut board, PlayerId::P0, 2, Square::new(Track::B, 3));

    let env = env_from(board, &[0, 1, 2, 3, 4]);
    let moves = env.legal_moves(PlayerId::P0, 2).unwrap();
    // b3 has flat index 11
    let candidate = moves.by_board_index(11).expect("source square is indexed");
    assert_eq!(candidate.piece, 2);
    assert_eq!(candidate.to, Square::new(Track::B, 5));
}
