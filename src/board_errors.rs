//! Errors used throughout the board model.
//!
//! `BoardError` is the single error type returned by the crate. Variants fall
//! into three groups that callers should treat differently:
//! - invariant violations (`InvariantViolation`) mean the board has been
//!   corrupted by faulty move-application logic and must not be used further;
//! - capacity exhaustion (`HistoryOverflow`) means the maximum game length was
//!   exceeded, which also points at a caller defect;
//! - precondition misuse (`EmptyBitboard`, `HistoryUnderflow`,
//!   `NoPieceOnSquare`, `NotARealSquare`, `MalformedMove`,
//!   `InvalidAlgebraicString`) is a caller error that leaves the board
//!   untouched.
//!
//! None of these are retryable.

use crate::board::chess_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A recomputed board field disagrees with its incrementally maintained
    /// copy.
    ///
    /// Payload: which field failed and the observed mismatch.
    #[error("board invariant violated: {0}")]
    InvariantViolation(String),

    /// The history buffer already holds `capacity` entries.
    #[error("history buffer overflow: capacity of {capacity} half-moves reached")]
    HistoryOverflow { capacity: usize },

    /// Tried to unmove past the start of the game.
    #[error("history buffer underflow: no move to take back")]
    HistoryUnderflow,

    /// Bit extraction was requested on an all-zero bitboard.
    #[error("cannot extract a bit from an empty bitboard")]
    EmptyBitboard,

    /// A move starts on a square holding no piece of the side to move.
    #[error("no piece of the side to move on square {0}")]
    NoPieceOnSquare(Square),

    /// A padded index outside the 64 real squares was used where a real
    /// square is required.
    #[error("square {0} is not a real board square")]
    NotARealSquare(usize),

    /// A move's encoded fields disagree with the board it is applied to
    /// (wrong captured piece, bad castling target, bad promotion piece).
    ///
    /// Payload: the move in long algebraic form and what was wrong.
    #[error("malformed move {0}: {1}")]
    MalformedMove(String, String),

    /// An algebraic square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),
}
