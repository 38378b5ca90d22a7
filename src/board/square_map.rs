//! Bidirectional mapping between the padded 120-square board and the compact
//! 64-square board.
//!
//! The process-wide map is built at compile time, so every lookup is a plain
//! table read and no startup step can be skipped. Padded squares outside the
//! 8x8 interior map to `OFF_BOARD_INDEX`, which callers must treat as "no such
//! square" and never use as a bit index.

use crate::board::chess_rules::{
    file_rank_to_square, BOARD_SQUARE_COUNT, OFF_BOARD_COORD, OFF_BOARD_INDEX,
};
use crate::board::chess_types::{CompactSquare, Square};

/// Both directions of the padded/compact mapping plus per-square file and
/// rank lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMap {
    padded_to_compact: [CompactSquare; BOARD_SQUARE_COUNT],
    compact_to_padded: [Square; 64],
    files: [u8; BOARD_SQUARE_COUNT],
    ranks: [u8; BOARD_SQUARE_COUNT],
}

static SQUARE_MAP: SquareMap = SquareMap::build();

/// The shared, immutable map.
#[inline]
pub fn square_map() -> &'static SquareMap {
    &SQUARE_MAP
}

impl SquareMap {
    /// Populate both tables from fixed board geometry.
    ///
    /// Every padded square starts as off-board; real squares are then numbered
    /// rank-major from a1. Repeated calls yield identical tables.
    pub const fn build() -> Self {
        let mut padded_to_compact = [OFF_BOARD_INDEX; BOARD_SQUARE_COUNT];
        let mut compact_to_padded = [0 as Square; 64];
        let mut files = [OFF_BOARD_COORD; BOARD_SQUARE_COUNT];
        let mut ranks = [OFF_BOARD_COORD; BOARD_SQUARE_COUNT];

        let mut compact: u8 = 0;
        let mut rank: u8 = 0;
        while rank < 8 {
            let mut file: u8 = 0;
            while file < 8 {
                let sq = file_rank_to_square(file, rank);
                compact_to_padded[compact as usize] = sq;
                padded_to_compact[sq as usize] = compact;
                files[sq as usize] = file;
                ranks[sq as usize] = rank;
                compact += 1;
                file += 1;
            }
            rank += 1;
        }

        Self {
            padded_to_compact,
            compact_to_padded,
            files,
            ranks,
        }
    }

    /// Compact index of a padded square, or `OFF_BOARD_INDEX`.
    #[inline]
    pub fn compact_of(&self, padded: Square) -> CompactSquare {
        self.padded_to_compact[padded as usize]
    }

    /// Padded square of a compact index (`0..=63`).
    #[inline]
    pub fn padded_of(&self, compact: CompactSquare) -> Square {
        self.compact_to_padded[compact as usize]
    }

    #[inline]
    pub fn is_real_square(&self, padded: usize) -> bool {
        padded < BOARD_SQUARE_COUNT && self.padded_to_compact[padded] != OFF_BOARD_INDEX
    }

    /// Zero-based file, or `OFF_BOARD_COORD`.
    #[inline]
    pub fn file_of(&self, padded: Square) -> u8 {
        self.files[padded as usize]
    }

    /// Zero-based rank, or `OFF_BOARD_COORD`.
    #[inline]
    pub fn rank_of(&self, padded: Square) -> u8 {
        self.ranks[padded as usize]
    }

    pub fn padded_to_compact_table(&self) -> &[CompactSquare; BOARD_SQUARE_COUNT] {
        &self.padded_to_compact
    }

    pub fn compact_to_padded_table(&self) -> &[Square; 64] {
        &self.compact_to_padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_a_bijection_on_real_squares() {
        let map = square_map();
        for compact in 0..64u8 {
            let padded = map.padded_of(compact);
            assert_eq!(map.compact_of(padded), compact);
        }
        for padded in 0..BOARD_SQUARE_COUNT as u8 {
            let compact = map.compact_of(padded);
            if compact != OFF_BOARD_INDEX {
                assert_eq!(map.padded_of(compact), padded);
            }
        }
    }

    #[test]
    fn border_squares_map_to_sentinel() {
        let map = square_map();
        let off_board = (0..BOARD_SQUARE_COUNT as u8)
            .filter(|&sq| map.compact_of(sq) == OFF_BOARD_INDEX)
            .count();
        assert_eq!(off_board, BOARD_SQUARE_COUNT - 64);

        for sq in [0u8, 20, 29, 30, 39, 99, 100, 119] {
            assert_eq!(map.compact_of(sq), OFF_BOARD_INDEX, "square {sq}");
            assert!(!map.is_real_square(sq as usize));
            assert_eq!(map.file_of(sq), OFF_BOARD_COORD);
        }
        assert!(!map.is_real_square(BOARD_SQUARE_COUNT));
    }

    #[test]
    fn compact_order_is_rank_major_from_a1() {
        let map = square_map();
        assert_eq!(map.padded_of(0), 21);
        assert_eq!(map.padded_of(7), 28);
        assert_eq!(map.padded_of(8), 31);
        assert_eq!(map.padded_of(63), 98);
        assert_eq!(map.file_of(35), 4);
        assert_eq!(map.rank_of(35), 1);
    }

    #[test]
    fn rebuilding_reproduces_identical_tables() {
        assert_eq!(SquareMap::build(), SquareMap::build());
        assert_eq!(&SquareMap::build(), square_map());
    }
}
