//! Crate root module declarations for the Kasparov board model.
//!
//! This file exposes the positional data model consumed by move generation,
//! search and evaluation: padded/compact square mapping, bit primitives,
//! the incremental board state with its history buffer, move encoding and
//! application, and diagnostic renderers.

pub mod board_errors;

pub mod board {
    pub mod bit_ops;
    pub mod board_state;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod history;
    pub mod square_map;
    pub mod undo_state;
    pub mod zobrist;
}

pub mod moves {
    pub mod make_move;
    pub mod move_descriptions;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
