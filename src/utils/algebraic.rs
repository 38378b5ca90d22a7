//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and padded board
//! squares, as used by move display and board rendering.

use crate::board::chess_rules::file_rank_to_square;
use crate::board::chess_types::Square;
use crate::board::square_map::square_map;
use crate::board_errors::BoardError;

/// Convert algebraic notation (for example: "e4") to a padded square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, BoardError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(BoardError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardError::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(file_rank_to_square(file - b'a', rank - b'1'))
}

/// Convert a padded square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, BoardError> {
    let map = square_map();
    if !map.is_real_square(square as usize) {
        return Err(BoardError::NotARealSquare(square as usize));
    }

    let file_char = char::from(b'a' + map.file_of(square));
    let rank_char = char::from(b'1' + map.rank_of(square));

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::board_errors::BoardError;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 21);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 98);
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 55);
        assert_eq!(square_to_algebraic(21).expect("21 should convert"), "a1");
        assert_eq!(square_to_algebraic(98).expect("98 should convert"), "h8");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            algebraic_to_square("i1"),
            Err(BoardError::InvalidAlgebraicString(_))
        ));
        assert!(algebraic_to_square("e9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert_eq!(square_to_algebraic(20), Err(BoardError::NotARealSquare(20)));
        assert_eq!(square_to_algebraic(119), Err(BoardError::NotARealSquare(119)));
    }
}
