//! Terminal-oriented board renderers.
//!
//! Human-readable views of the square mapping tables, arbitrary bitboards and
//! piece placement for debugging, tests and diagnostics. Board views always
//! run rank 8 down to rank 1 and file a to file h, as a player sees the board.

use crate::board::chess_rules::{file_rank_to_square, BOARD_SQUARE_COUNT, OFF_BOARD_INDEX};
use crate::board::chess_types::BoardState;
use crate::board::square_map::square_map;

/// Render the padded-to-compact table, ten squares per row.
///
/// With `hide_outer`, off-board entries show as `*` instead of the sentinel.
pub fn render_padded_board(hide_outer: bool) -> String {
    let map = square_map();
    let mut rows = Vec::with_capacity(BOARD_SQUARE_COUNT / 10);

    for row in map.padded_to_compact_table().chunks(10) {
        let mut line = String::new();
        for &compact in row {
            if hide_outer && compact == OFF_BOARD_INDEX {
                line.push_str("  *");
            } else {
                line.push_str(&format!("{compact:>3}"));
            }
        }
        rows.push(line);
    }

    rows.join("\n")
}

/// Render the compact-to-padded table, eight squares per row starting at a1.
pub fn render_compact_board() -> String {
    square_map()
        .compact_to_padded_table()
        .chunks(8)
        .map(|row| {
            row.iter()
                .map(|square| format!("{square:>4}"))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a bitboard with `X` for set squares and `-` for clear ones.
pub fn render_bitboard(bitboard: u64) -> String {
    let map = square_map();
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        for file in 0..8u8 {
            let compact = map.compact_of(file_rank_to_square(file, rank));
            if (1u64 << compact) & bitboard != 0 {
                out.push('X');
            } else {
                out.push('-');
            }
            if file < 7 {
                out.push(' ');
            }
        }
        if rank > 0 {
            out.push('\n');
        }
    }

    out
}

/// Render piece placement with file and rank labels.
pub fn render_board(board: &BoardState) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push_str("  ");

        for file in 0..8u8 {
            let square = file_rank_to_square(file, rank);
            out.push(board.piece_at(square).to_char());
            if file < 7 {
                out.push_str("  ");
            }
        }
        out.push('\n');
    }

    out.push_str("\n   a  b  c  d  e  f  g  h");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitboard_renders_top_rank_first() {
        let text = render_bitboard(1u64 << 0 | 1u64 << 63);
        println!("\n{text}");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "- - - - - - - X");
        assert_eq!(lines[7], "X - - - - - - -");
        assert!(lines[1..7].iter().all(|line| !line.contains('X')));
    }

    #[test]
    fn padded_board_hides_or_shows_sentinels() {
        let shown = render_padded_board(false);
        let hidden = render_padded_board(true);
        assert_eq!(shown.lines().count(), 12);
        assert!(shown.contains(" 65"));
        assert!(!hidden.contains("65"));
        assert_eq!(
            hidden.lines().nth(2),
            Some("  *  0  1  2  3  4  5  6  7  *")
        );
    }

    #[test]
    fn compact_board_lists_padded_squares() {
        let text = render_compact_board();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "  21  22  23  24  25  26  27  28");
        assert_eq!(lines[7], "  91  92  93  94  95  96  97  98");
    }

    #[test]
    fn board_renders_start_position() {
        let text = render_board(&BoardState::start_position());
        println!("\n{text}");
        assert!(text.starts_with("8  r  n  b  q  k  b  n  r"));
        assert!(text.contains("1  R  N  B  Q  K  B  N  R"));
        assert!(text.contains("5  .  .  .  .  .  .  .  ."));
    }
}
