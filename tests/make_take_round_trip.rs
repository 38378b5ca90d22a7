use rand::{rngs::StdRng, Rng, SeedableRng};

use kasparov_board::board::chess_rules::{BOARD_SQUARE_COUNT, MAX_GAME_MOVES};
use kasparov_board::board::chess_types::*;
use kasparov_board::board::square_map::square_map;
use kasparov_board::board::zobrist::compute_position_key;
use kasparov_board::moves::move_descriptions::{
    Move, FLAG_CASTLING, FLAG_EN_PASSANT, FLAG_PAWN_START,
};
use kasparov_board::utils::algebraic::algebraic_to_square;

fn sq(name: &str) -> Square {
    algebraic_to_square(name).expect("test square should parse")
}

/// Build a move from long algebraic text, reading captures off the board.
fn lan(board: &BoardState, text: &str, flags: u32, promoted: Piece) -> Move {
    let (from, to) = (sq(&text[0..2]), sq(&text[2..4]));
    Move::new(from, to, board.piece_at(to), promoted, flags)
}

fn assert_pawn_invariants(board: &BoardState) {
    assert_eq!(board.pawns[BOTH], board.pawns[0] | board.pawns[1]);
    assert_eq!(board.pawns[0] & board.pawns[1], 0);
}

#[test]
fn scripted_game_round_trips_to_start() {
    let mut board = BoardState::start_position();
    let start = board.clone();

    let script: &[(&str, u32, Piece)] = &[
        ("e2e4", FLAG_PAWN_START, Piece::Empty),
        ("d7d5", FLAG_PAWN_START, Piece::Empty),
        ("e4d5", 0, Piece::Empty),
        ("c7c5", FLAG_PAWN_START, Piece::Empty),
        ("d5c6", FLAG_EN_PASSANT, Piece::Empty),
        ("g8f6", 0, Piece::Empty),
        ("c6b7", 0, Piece::Empty),
        ("e7e6", 0, Piece::Empty),
        ("b7a8", 0, Piece::WhiteQueen),
        ("f8e7", 0, Piece::Empty),
        ("g1f3", 0, Piece::Empty),
        ("e8g8", FLAG_CASTLING, Piece::Empty),
        ("f1e2", 0, Piece::Empty),
        ("d8d1", 0, Piece::Empty),
        ("e1d1", 0, Piece::Empty),
    ];

    let mut keys = vec![board.position_key];
    for &(text, flags, promoted) in script {
        let mv = lan(&board, text, flags, promoted);
        board
            .make_move(mv)
            .unwrap_or_else(|e| panic!("{text} should apply: {e}"));
        board
            .check_board()
            .unwrap_or_else(|e| panic!("board broken after {text}: {e}"));
        assert_pawn_invariants(&board);
        assert_eq!(board.position_key, compute_position_key(&board));
        keys.push(board.position_key);
    }

    assert_eq!(board.history_ply(), script.len());
    assert_eq!(board.ply as usize, script.len());
    assert_eq!(board.piece_at(sq("a8")), Piece::WhiteQueen);
    assert_eq!(board.piece_at(sq("f8")), Piece::BlackRook);
    assert_eq!(board.king_square[Color::Black.index()], sq("g8"));
    assert_eq!(board.king_square[Color::White.index()], sq("d1"));
    assert_eq!(board.castling_rights, 0);
    assert_eq!(board.piece_count[Piece::WhiteQueen.index()], 1);
    assert_eq!(board.piece_count[Piece::BlackQueen.index()], 0);

    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), keys.len(), "every position should hash uniquely");

    for expected_key in keys.iter().rev().skip(1) {
        board.take_move().expect("take back should succeed");
        assert_eq!(board.position_key, *expected_key);
    }
    assert_eq!(board, start);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut board = BoardState::start_position();
    let push = lan(&board, "a2a4", FLAG_PAWN_START, Piece::Empty);
    board.make_move(push).expect("a2a4");
    assert_eq!(board.en_passant, Some(sq("a3")));

    let reply = lan(&board, "h7h6", 0, Piece::Empty);
    board.make_move(reply).expect("h7h6");
    assert_eq!(board.en_passant, None);
}

/// Relocate random pieces, capturing whatever non-king enemy piece stands on
/// the target square, then unwind everything.
#[test]
fn random_walk_round_trips_bit_identically() {
    let map = square_map();
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..20 {
        let mut board = BoardState::start_position();
        let start = board.clone();
        let plies = rng.random_range(1..200usize);

        for _ in 0..plies {
            let side = board.side;
            let movers: Vec<Square> = (0..BOARD_SQUARE_COUNT as u8)
                .filter(|&s| board.piece_at(s).color() == Some(side))
                .collect();
            let from = movers[rng.random_range(0..movers.len())];

            let targets: Vec<Square> = (0..BOARD_SQUARE_COUNT as u8)
                .filter(|&s| map.is_real_square(s as usize))
                .filter(|&s| {
                    let p = board.piece_at(s);
                    p == Piece::Empty || (p.color() == Some(side.opposite()) && !p.is_king())
                })
                .collect();
            let to = targets[rng.random_range(0..targets.len())];

            let mv = Move::new(from, to, board.piece_at(to), Piece::Empty, 0);
            board.make_move(mv).expect("random relocation should apply");
            board.check_board().expect("random walk keeps board consistent");
            assert_pawn_invariants(&board);
        }

        while board.history_ply() > 0 {
            board.take_move().expect("take back should succeed");
        }
        assert_eq!(board, start);
    }
}

#[test]
fn null_moves_fill_history_to_capacity() {
    let mut board = BoardState::start_position();
    for _ in 0..MAX_GAME_MOVES {
        board.make_null_move().expect("history has room");
    }
    assert!(board.make_null_move().is_err());
    assert_eq!(board.history_ply(), MAX_GAME_MOVES);
}
