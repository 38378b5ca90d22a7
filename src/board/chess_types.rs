//! Core value types for the padded-board model.
//!
//! Pieces are small integer codes wrapped in a closed enum so that derived
//! logic can match exhaustively instead of dispatching per piece.

pub use crate::board::board_state::BoardState;
pub use crate::board::undo_state::UndoState;

/// Padded (120-space) square index.
pub type Square = u8;

/// Compact (64-space) square index; the bit index used in bitboards.
pub type CompactSquare = u8;

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0x0F;

/// Index of the "both colors" slot in per-color arrays of length 3.
pub const BOTH: usize = 2;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece code stored on every padded square.
///
/// Codes `0..=12` index piece counts and piece lists; `OffBoard` only ever
/// appears on the border of the padded board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Piece {
    #[default]
    Empty = 0,
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
    OffBoard,
}

/// Number of codes that carry counts and lists (`Empty` plus twelve pieces).
pub const PIECE_CODE_COUNT: usize = 13;

/// The twelve real pieces in code order.
pub const ALL_PIECES: [Piece; 12] = [
    Piece::WhitePawn,
    Piece::WhiteKnight,
    Piece::WhiteBishop,
    Piece::WhiteRook,
    Piece::WhiteQueen,
    Piece::WhiteKing,
    Piece::BlackPawn,
    Piece::BlackKnight,
    Piece::BlackBishop,
    Piece::BlackRook,
    Piece::BlackQueen,
    Piece::BlackKing,
];

impl Piece {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decode a 4-bit piece code as packed into a move.
    #[inline]
    pub const fn from_code(code: u32) -> Option<Piece> {
        match code {
            0 => Some(Piece::Empty),
            1 => Some(Piece::WhitePawn),
            2 => Some(Piece::WhiteKnight),
            3 => Some(Piece::WhiteBishop),
            4 => Some(Piece::WhiteRook),
            5 => Some(Piece::WhiteQueen),
            6 => Some(Piece::WhiteKing),
            7 => Some(Piece::BlackPawn),
            8 => Some(Piece::BlackKnight),
            9 => Some(Piece::BlackBishop),
            10 => Some(Piece::BlackRook),
            11 => Some(Piece::BlackQueen),
            12 => Some(Piece::BlackKing),
            _ => None,
        }
    }

    /// Color of a real piece; `None` for `Empty` and `OffBoard`.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::WhitePawn
            | Piece::WhiteKnight
            | Piece::WhiteBishop
            | Piece::WhiteRook
            | Piece::WhiteQueen
            | Piece::WhiteKing => Some(Color::White),
            Piece::BlackPawn
            | Piece::BlackKnight
            | Piece::BlackBishop
            | Piece::BlackRook
            | Piece::BlackQueen
            | Piece::BlackKing => Some(Color::Black),
            Piece::Empty | Piece::OffBoard => None,
        }
    }

    #[inline]
    pub const fn is_piece(self) -> bool {
        self.color().is_some()
    }

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Piece::WhitePawn | Piece::BlackPawn)
    }

    #[inline]
    pub const fn is_knight(self) -> bool {
        matches!(self, Piece::WhiteKnight | Piece::BlackKnight)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::WhiteKing | Piece::BlackKing)
    }

    #[inline]
    pub const fn is_rook_or_queen(self) -> bool {
        matches!(
            self,
            Piece::WhiteRook | Piece::WhiteQueen | Piece::BlackRook | Piece::BlackQueen
        )
    }

    #[inline]
    pub const fn is_bishop_or_queen(self) -> bool {
        matches!(
            self,
            Piece::WhiteBishop | Piece::WhiteQueen | Piece::BlackBishop | Piece::BlackQueen
        )
    }

    /// Any real piece that is not a pawn. Kings count.
    #[inline]
    pub const fn is_big(self) -> bool {
        self.is_piece() && !self.is_pawn()
    }

    /// Rooks, queens and kings.
    #[inline]
    pub const fn is_major(self) -> bool {
        self.is_rook_or_queen() || self.is_king()
    }

    /// Bishops and knights.
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(
            self,
            Piece::WhiteBishop | Piece::WhiteKnight | Piece::BlackBishop | Piece::BlackKnight
        )
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            Piece::WhitePawn | Piece::BlackPawn => 100,
            Piece::WhiteKnight | Piece::BlackKnight => 325,
            Piece::WhiteBishop | Piece::BlackBishop => 325,
            Piece::WhiteRook | Piece::BlackRook => 550,
            Piece::WhiteQueen | Piece::BlackQueen => 1000,
            Piece::WhiteKing | Piece::BlackKing => 50000,
            Piece::Empty | Piece::OffBoard => 0,
        }
    }

    /// Single-character symbol: uppercase white, lowercase black, `.` empty.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::WhitePawn => 'P',
            Piece::WhiteKnight => 'N',
            Piece::WhiteBishop => 'B',
            Piece::WhiteRook => 'R',
            Piece::WhiteQueen => 'Q',
            Piece::WhiteKing => 'K',
            Piece::BlackPawn => 'p',
            Piece::BlackKnight => 'n',
            Piece::BlackBishop => 'b',
            Piece::BlackRook => 'r',
            Piece::BlackQueen => 'q',
            Piece::BlackKing => 'k',
            Piece::OffBoard => '*',
        }
    }

    /// The pawn of a color.
    #[inline]
    pub const fn pawn(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhitePawn,
            Color::Black => Piece::BlackPawn,
        }
    }

    /// The king of a color.
    #[inline]
    pub const fn king(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhiteKing,
            Color::Black => Piece::BlackKing,
        }
    }

    /// The rook of a color.
    #[inline]
    pub const fn rook(color: Color) -> Piece {
        match color {
            Color::White => Piece::WhiteRook,
            Color::Black => Piece::BlackRook,
        }
    }
}
