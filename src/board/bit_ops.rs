//! Bit-scan and population-count primitives over 64-bit occupancy sets.
//!
//! Bit `i` of a bitboard is compact square `i` (a1 = 0, h8 = 63).

use crate::board::chess_types::CompactSquare;
use crate::board_errors::BoardError;

/// Folded-multiply index to square permutation. Must stay bit-for-bit as is:
/// it is paired with `BIT_SCAN_MULTIPLIER`.
pub const BIT_TABLE: [CompactSquare; 64] = [
    63, 30, 3, 32, 25, 41, 22, 33, //
    15, 50, 42, 13, 11, 53, 19, 34, //
    61, 29, 2, 51, 21, 43, 45, 10, //
    18, 47, 1, 54, 9, 57, 0, 35, //
    62, 31, 40, 4, 49, 5, 52, 26, //
    60, 6, 23, 44, 46, 27, 56, 16, //
    7, 39, 48, 24, 59, 14, 12, 55, //
    38, 28, 58, 20, 37, 17, 36, 8, //
];

pub const BIT_SCAN_MULTIPLIER: u32 = 0x783a_9b23;

/// Clear the lowest set bit and return `(remaining, square_of_cleared_bit)`.
///
/// `bitboard` must be non-zero; check with [`count_bits`] or `!= 0` first, or
/// use [`try_pop_bit`].
#[inline]
pub fn pop_bit(bitboard: u64) -> (u64, CompactSquare) {
    debug_assert!(bitboard != 0, "pop_bit called on an empty bitboard");

    let b = bitboard ^ bitboard.wrapping_sub(1);
    let fold = ((b & 0xffff_ffff) ^ (b >> 32)) as u32;
    let index = fold.wrapping_mul(BIT_SCAN_MULTIPLIER) >> 26;

    (bitboard & bitboard.wrapping_sub(1), BIT_TABLE[index as usize])
}

/// Checked [`pop_bit`].
#[inline]
pub fn try_pop_bit(bitboard: u64) -> Result<(u64, CompactSquare), BoardError> {
    if bitboard == 0 {
        return Err(BoardError::EmptyBitboard);
    }
    Ok(pop_bit(bitboard))
}

/// Number of set bits, clearing the lowest one per iteration.
#[inline]
pub fn count_bits(mut bitboard: u64) -> u32 {
    let mut count = 0;
    while bitboard != 0 {
        bitboard &= bitboard - 1;
        count += 1;
    }
    count
}

#[inline]
pub fn set_bit(bitboard: &mut u64, square: CompactSquare) {
    *bitboard |= 1u64 << square;
}

#[inline]
pub fn clear_bit(bitboard: &mut u64, square: CompactSquare) {
    *bitboard &= !(1u64 << square);
}

/// Iterator over the set squares of a bitboard, lowest first.
#[derive(Debug, Clone, Copy)]
pub struct BitIter(u64);

impl Iterator for BitIter {
    type Item = CompactSquare;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let (rest, square) = pop_bit(self.0);
        self.0 = rest;
        Some(square)
    }
}

#[inline]
pub fn bits(bitboard: u64) -> BitIter {
    BitIter(bitboard)
}
