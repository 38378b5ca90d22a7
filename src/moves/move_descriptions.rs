//! Packed move encoding over padded squares.
//!
//! Layout of the `u32`:
//! - bits 0..7   from square (padded)
//! - bits 7..14  to square (padded)
//! - bits 14..18 captured piece code
//! - bit  18     en-passant capture
//! - bit  19     pawn double advance
//! - bits 20..24 promoted piece code
//! - bit  24     castling

use std::fmt;

use crate::board::chess_types::{Piece, Square};
use crate::utils::algebraic::square_to_algebraic;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 7;
const CAPTURED_SHIFT: u32 = 14;
const PROMOTED_SHIFT: u32 = 20;

const SQUARE_MASK: u32 = 0x7F;
const PIECE_MASK: u32 = 0xF;

pub const FLAG_EN_PASSANT: u32 = 1 << 18;
pub const FLAG_PAWN_START: u32 = 1 << 19;
pub const FLAG_CASTLING: u32 = 1 << 24;

const CAPTURE_MASK: u32 = (PIECE_MASK << CAPTURED_SHIFT) | FLAG_EN_PASSANT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u32);

impl Move {
    pub const NONE: Move = Move(0);

    #[inline]
    pub const fn new(from: Square, to: Square, captured: Piece, promoted: Piece, flags: u32) -> Self {
        Move(
            ((from as u32 & SQUARE_MASK) << FROM_SHIFT)
                | ((to as u32 & SQUARE_MASK) << TO_SHIFT)
                | ((captured as u32 & PIECE_MASK) << CAPTURED_SHIFT)
                | ((promoted as u32 & PIECE_MASK) << PROMOTED_SHIFT)
                | flags,
        )
    }

    /// Plain move without capture, promotion or flags.
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self::new(from, to, Piece::Empty, Piece::Empty, 0)
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Move(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from(self) -> Square {
        ((self.0 >> FROM_SHIFT) & SQUARE_MASK) as Square
    }

    #[inline]
    pub const fn to(self) -> Square {
        ((self.0 >> TO_SHIFT) & SQUARE_MASK) as Square
    }

    /// Piece removed from `to`; `Empty` for quiet moves and en-passant.
    #[inline]
    pub fn captured(self) -> Piece {
        Piece::from_code((self.0 >> CAPTURED_SHIFT) & PIECE_MASK).unwrap_or(Piece::Empty)
    }

    #[inline]
    pub fn promoted(self) -> Piece {
        Piece::from_code((self.0 >> PROMOTED_SHIFT) & PIECE_MASK).unwrap_or(Piece::Empty)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.0 & FLAG_EN_PASSANT != 0
    }

    #[inline]
    pub const fn is_pawn_start(self) -> bool {
        self.0 & FLAG_PAWN_START != 0
    }

    #[inline]
    pub const fn is_castling(self) -> bool {
        self.0 & FLAG_CASTLING != 0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.0 & CAPTURE_MASK != 0
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.promoted() != Piece::Empty
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Move::NONE {
            return f.write_str("0000");
        }
        let name = |square| square_to_algebraic(square).unwrap_or_else(|_| format!("#{square}"));
        write!(f, "{}{}", name(self.from()), name(self.to()))?;
        if self.is_promotion() {
            write!(f, "{}", self.promoted().to_char().to_ascii_lowercase())?;
        }
        Ok(())
    }
}
