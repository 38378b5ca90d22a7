use crate::board::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `take_move`.
///
/// The captured piece travels inside `mv`. The slot fields record where a
/// removed piece sat in its piece list so take-back restores list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
    pub prev_fifty_move: u16,
    pub prev_position_key: u64,
    pub captured_slot: u8,
    pub promoted_slot: u8,
}
