//! Board geometry and rule constants.
//!
//! Fixed sizes, sentinels, named squares, the castling-permission mask table
//! and the standard starting layout.

use crate::board::chess_types::*;

/// Squares on the padded board (12 ranks of 10).
pub const BOARD_SQUARE_COUNT: usize = 120;

/// Upper bound on half-moves in one game; sizes the history buffer.
pub const MAX_GAME_MOVES: usize = 2048;

/// Maximum entries in one piece list (eight promoted pawns plus the two
/// rooks).
pub const MAX_PIECES_PER_KIND: usize = 10;

/// Compact index stored for padded squares that are not on the board.
pub const OFF_BOARD_INDEX: u8 = 65;

/// Sentinel for "no file" / "no rank" in per-square lookups.
pub const OFF_BOARD_COORD: u8 = 100;

/// Padded square used where no square applies.
pub const NO_SQUARE: Square = 99;

pub const A1: Square = 21;
pub const C1: Square = 23;
pub const D1: Square = 24;
pub const E1: Square = 25;
pub const F1: Square = 26;
pub const G1: Square = 27;
pub const H1: Square = 28;
pub const A8: Square = 91;
pub const C8: Square = 93;
pub const D8: Square = 94;
pub const E8: Square = 95;
pub const F8: Square = 96;
pub const G8: Square = 97;
pub const H8: Square = 98;

/// Padded square for zero-based `file` and `rank`.
#[inline]
pub const fn file_rank_to_square(file: u8, rank: u8) -> Square {
    21 + file + rank * 10
}

/// Castling rights surviving a move that touches each padded square.
///
/// `rights &= CASTLE_PERMISSION[from] & CASTLE_PERMISSION[to]` clears exactly
/// the rights tied to king and rook home squares; no entry ever sets a bit.
pub const CASTLE_PERMISSION: [CastlingRights; BOARD_SQUARE_COUNT] = build_castle_permission();

const fn build_castle_permission() -> [CastlingRights; BOARD_SQUARE_COUNT] {
    let mut table = [CASTLE_ALL; BOARD_SQUARE_COUNT];
    table[A1 as usize] = CASTLE_ALL & !CASTLE_WHITE_QUEENSIDE;
    table[E1 as usize] = CASTLE_ALL & !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    table[H1 as usize] = CASTLE_ALL & !CASTLE_WHITE_KINGSIDE;
    table[A8 as usize] = CASTLE_ALL & !CASTLE_BLACK_QUEENSIDE;
    table[E8 as usize] = CASTLE_ALL & !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    table[H8 as usize] = CASTLE_ALL & !CASTLE_BLACK_KINGSIDE;
    table
}

/// Standard back-rank order from the a-file to the h-file, white side.
pub const STARTING_BACK_RANK: [Piece; 8] = [
    Piece::WhiteRook,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::WhiteBishop,
    Piece::WhiteKnight,
    Piece::WhiteRook,
];
