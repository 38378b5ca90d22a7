//! Zobrist keys for the position identity hash.
//!
//! Keys are drawn from a fixed-seed generator so hashes are deterministic
//! across runs, which is useful for testing and debugging. Every component is
//! folded in with XOR, so make/take can update the hash incrementally.

use std::sync::OnceLock;

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::board::chess_rules::BOARD_SQUARE_COUNT;
use crate::board::chess_types::*;
use crate::board::square_map::square_map;

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; BOARD_SQUARE_COUNT]; PIECE_CODE_COUNT],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u64; BOARD_SQUARE_COUNT]; PIECE_CODE_COUNT];
    for piece in &mut piece_square {
        for key in piece.iter_mut() {
            *key = rng.next_u64();
        }
    }

    let side_to_move = rng.next_u64();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.next_u64();
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = rng.next_u64();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

/// Key for a piece standing on a padded square.
#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    tables().piece_square[piece.index()][square as usize]
}

/// Key for a castling rights mask (`0..=15`).
#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[(castling_rights & CASTLE_ALL) as usize]
}

/// Key for an en-passant target, by file.
#[inline]
pub fn en_passant_key(square: Square) -> u64 {
    tables().en_passant_file[(square_map().file_of(square) & 7) as usize]
}

/// Side-to-move toggle (xor in when black is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key from scratch.
pub fn compute_position_key(board: &BoardState) -> u64 {
    let mut key = 0u64;

    for (square, &piece) in board.pieces.iter().enumerate() {
        if piece.is_piece() {
            key ^= piece_square_key(piece, square as Square);
        }
    }

    if board.side == Color::Black {
        key ^= side_to_move_key();
    }

    if let Some(ep_square) = board.en_passant {
        key ^= en_passant_key(ep_square);
    }

    key ^= castling_key(board.castling_rights);

    key
}
