//! In-place move application and reversal.
//!
//! `make_move` records an undo entry, then updates every derived field of the
//! board incrementally: piece lists, counts, material, pawn bitboards, king
//! squares and the position key. `take_move` pops that entry and walks the
//! same steps backwards. Legality (own king left in check) is the caller's
//! concern.

use crate::board::bit_ops::{clear_bit, set_bit};
use crate::board::chess_rules::*;
use crate::board::chess_types::*;
use crate::board::square_map::square_map;
use crate::board::zobrist::{castling_key, en_passant_key, piece_square_key, side_to_move_key};
use crate::board_errors::BoardError;
use crate::moves::move_descriptions::Move;

impl BoardState {
    #[inline]
    fn hash_piece(&mut self, piece: Piece, square: Square) {
        self.position_key ^= piece_square_key(piece, square);
    }

    #[inline]
    fn hash_castling(&mut self) {
        self.position_key ^= castling_key(self.castling_rights);
    }

    #[inline]
    fn hash_side(&mut self) {
        self.position_key ^= side_to_move_key();
    }

    #[inline]
    fn hash_en_passant(&mut self) {
        if let Some(square) = self.en_passant {
            self.position_key ^= en_passant_key(square);
        }
    }

    /// Remove whatever stands on `square`, returning the piece-list slot it
    /// occupied so the removal can be reversed exactly.
    fn clear_piece(&mut self, square: Square) -> u8 {
        let piece = self.pieces[square as usize];
        let Some(color) = piece.color() else {
            debug_assert!(false, "clear_piece on {square} holding {piece:?}");
            return 0;
        };

        self.hash_piece(piece, square);
        self.pieces[square as usize] = Piece::Empty;
        self.material[color.index()] -= piece.value();

        if piece.is_big() {
            self.big_pieces[color.index()] -= 1;
            self.big_pieces[BOTH] -= 1;
            if piece.is_major() {
                self.major_pieces[color.index()] -= 1;
                self.major_pieces[BOTH] -= 1;
            } else {
                self.minor_pieces[color.index()] -= 1;
                self.minor_pieces[BOTH] -= 1;
            }
        } else {
            let compact = square_map().compact_of(square);
            clear_bit(&mut self.pawns[color.index()], compact);
            clear_bit(&mut self.pawns[BOTH], compact);
        }

        let code = piece.index();
        let count = self.piece_count[code] as usize;
        if let Some(slot) = self.piece_list[code][..count]
            .iter()
            .position(|&listed| listed == square)
        {
            self.piece_list[code][slot] = self.piece_list[code][count - 1];
            self.piece_list[code][count - 1] = NO_SQUARE;
            self.piece_count[code] -= 1;
            slot as u8
        } else {
            debug_assert!(false, "{piece:?} on {square} missing from its piece list");
            0
        }
    }

    /// Put `piece` on the empty `square`, appending it to its piece list.
    #[inline]
    fn add_piece(&mut self, square: Square, piece: Piece) {
        let slot = self.piece_count[piece.index()];
        self.add_piece_at(square, piece, slot);
    }

    /// Put `piece` on the empty `square` at list position `slot`, moving the
    /// entry already there to the end. Inverse of [`BoardState::clear_piece`].
    fn add_piece_at(&mut self, square: Square, piece: Piece, slot: u8) {
        let Some(color) = piece.color() else {
            debug_assert!(false, "add_piece with {piece:?}");
            return;
        };

        self.hash_piece(piece, square);
        self.pieces[square as usize] = piece;
        self.material[color.index()] += piece.value();

        if piece.is_big() {
            self.big_pieces[color.index()] += 1;
            self.big_pieces[BOTH] += 1;
            if piece.is_major() {
                self.major_pieces[color.index()] += 1;
                self.major_pieces[BOTH] += 1;
            } else {
                self.minor_pieces[color.index()] += 1;
                self.minor_pieces[BOTH] += 1;
            }
        } else {
            let compact = square_map().compact_of(square);
            set_bit(&mut self.pawns[color.index()], compact);
            set_bit(&mut self.pawns[BOTH], compact);
        }

        let code = piece.index();
        let count = self.piece_count[code] as usize;
        self.piece_list[code][count] = self.piece_list[code][slot as usize];
        self.piece_list[code][slot as usize] = square;
        self.piece_count[code] += 1;
    }

    /// Relocate the piece on `from` to the empty `to`.
    fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.pieces[from as usize];
        let Some(color) = piece.color() else {
            debug_assert!(false, "move_piece from {from} holding {piece:?}");
            return;
        };

        self.hash_piece(piece, from);
        self.pieces[from as usize] = Piece::Empty;
        self.hash_piece(piece, to);
        self.pieces[to as usize] = piece;

        if piece.is_pawn() {
            let map = square_map();
            clear_bit(&mut self.pawns[color.index()], map.compact_of(from));
            clear_bit(&mut self.pawns[BOTH], map.compact_of(from));
            set_bit(&mut self.pawns[color.index()], map.compact_of(to));
            set_bit(&mut self.pawns[BOTH], map.compact_of(to));
        }

        let code = piece.index();
        let count = self.piece_count[code] as usize;
        match self.piece_list[code][..count]
            .iter_mut()
            .find(|listed| **listed == from)
        {
            Some(listed) => *listed = to,
            None => debug_assert!(false, "{piece:?} on {from} missing from its piece list"),
        }
    }

    /// Square of the pawn removed by an en-passant capture landing on `to`.
    #[inline]
    fn en_passant_victim(side: Color, to: Square) -> Square {
        match side {
            Color::White => to - 10,
            Color::Black => to + 10,
        }
    }

    /// Rook relocation and required right for a castling king move.
    #[inline]
    fn castling_rook(
        side: Color,
        from: Square,
        to: Square,
    ) -> Option<(Square, Square, CastlingRights)> {
        match (side, from, to) {
            (Color::White, E1, G1) => Some((H1, F1, CASTLE_WHITE_KINGSIDE)),
            (Color::White, E1, C1) => Some((A1, D1, CASTLE_WHITE_QUEENSIDE)),
            (Color::Black, E8, G8) => Some((H8, F8, CASTLE_BLACK_KINGSIDE)),
            (Color::Black, E8, C8) => Some((A8, D8, CASTLE_BLACK_QUEENSIDE)),
            _ => None,
        }
    }

    /// Reject moves whose encoded fields cannot be applied to this board.
    /// Runs before anything is mutated.
    fn validate_move(&self, mv: Move) -> Result<(), BoardError> {
        let malformed = |reason: &str| BoardError::MalformedMove(mv.to_string(), reason.to_owned());
        let map = square_map();
        let (from, to) = (mv.from(), mv.to());

        if !map.is_real_square(from as usize) {
            return Err(BoardError::NotARealSquare(from as usize));
        }
        if !map.is_real_square(to as usize) {
            return Err(BoardError::NotARealSquare(to as usize));
        }

        let piece = self.pieces[from as usize];
        if piece.color() != Some(self.side) {
            return Err(BoardError::NoPieceOnSquare(from));
        }
        if self.pieces[to as usize] != mv.captured() {
            return Err(malformed("captured piece does not match target square"));
        }
        if mv.captured().color() == Some(self.side) || mv.captured().is_king() {
            return Err(malformed("cannot capture own piece or a king"));
        }

        if mv.is_en_passant() {
            let victim = Self::en_passant_victim(self.side, to);
            if !piece.is_pawn()
                || self.en_passant != Some(to)
                || self.pieces[victim as usize] != Piece::pawn(self.side.opposite())
            {
                return Err(malformed("no en-passant capture available"));
            }
        }

        if mv.is_castling() {
            let Some((rook_from, _, right)) = Self::castling_rook(self.side, from, to) else {
                return Err(malformed("castling needs king and rook on home squares"));
            };
            if !piece.is_king() || self.pieces[rook_from as usize] != Piece::rook(self.side) {
                return Err(malformed("castling needs king and rook on home squares"));
            }
            if self.castling_rights & right == 0 {
                return Err(malformed("castling right already lost"));
            }
            let (low, high) = (from.min(rook_from), from.max(rook_from));
            if (low + 1..high).any(|sq| self.pieces[sq as usize] != Piece::Empty) {
                return Err(malformed("castling path is blocked"));
            }
        }

        if mv.is_pawn_start() {
            let (passed, landing) = match self.side {
                Color::White => (from + 10, from + 20),
                Color::Black => (from - 10, from - 20),
            };
            if !piece.is_pawn()
                || to != landing
                || self.pieces[passed as usize] != Piece::Empty
                || self.pieces[to as usize] != Piece::Empty
            {
                return Err(malformed("invalid double pawn advance"));
            }
        }

        let promoted = mv.promoted();
        if promoted != Piece::Empty
            && (!piece.is_pawn()
                || promoted.color() != Some(self.side)
                || promoted.is_pawn()
                || promoted.is_king())
        {
            return Err(malformed("invalid promotion piece"));
        }
        if promoted != Piece::Empty
            && self.piece_count[promoted.index()] as usize >= MAX_PIECES_PER_KIND
        {
            return Err(malformed("piece list for promotion piece is full"));
        }

        Ok(())
    }

    /// Apply `mv` for the side to move and record how to undo it.
    ///
    /// Fails without touching the board if the move is malformed for this
    /// position or the history buffer is full.
    pub fn make_move(&mut self, mv: Move) -> Result<(), BoardError> {
        self.validate_move(mv)?;

        self.history.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant,
            prev_fifty_move: self.fifty_move,
            prev_position_key: self.position_key,
            ..UndoState::default()
        })?;

        let (from, to) = (mv.from(), mv.to());
        let side = self.side;
        let piece = self.pieces[from as usize];
        let mut captured_slot = 0;
        let mut promoted_slot = 0;

        if mv.is_en_passant() {
            captured_slot = self.clear_piece(Self::en_passant_victim(side, to));
        } else if mv.is_castling() {
            if let Some((rook_from, rook_to, _)) = Self::castling_rook(side, from, to) {
                self.move_piece(rook_from, rook_to);
            }
        }

        self.hash_en_passant();
        self.hash_castling();
        self.castling_rights &= CASTLE_PERMISSION[from as usize] & CASTLE_PERMISSION[to as usize];
        self.en_passant = None;
        self.hash_castling();

        self.fifty_move += 1;
        if mv.captured() != Piece::Empty {
            captured_slot = self.clear_piece(to);
            self.fifty_move = 0;
        }

        self.ply += 1;

        if piece.is_pawn() {
            self.fifty_move = 0;
            if mv.is_pawn_start() {
                self.en_passant = Some(match side {
                    Color::White => from + 10,
                    Color::Black => from - 10,
                });
                self.hash_en_passant();
            }
        }

        self.move_piece(from, to);

        let promoted = mv.promoted();
        if promoted != Piece::Empty {
            promoted_slot = self.clear_piece(to);
            self.add_piece(to, promoted);
        }

        if piece.is_king() {
            self.king_square[side.index()] = to;
        }

        if let Some(undo) = self.history.last_mut() {
            undo.captured_slot = captured_slot;
            undo.promoted_slot = promoted_slot;
        }

        self.side = side.opposite();
        self.hash_side();

        debug_assert_eq!(self.check_board(), Ok(()));
        Ok(())
    }

    /// Reverse the most recent `make_move` or `make_null_move`.
    pub fn take_move(&mut self) -> Result<Move, BoardError> {
        let mut undo = UndoState::default();
        self.history.pop_into(&mut undo)?;
        self.ply = self.ply.saturating_sub(1);

        let mv = undo.mv;

        self.hash_en_passant();
        self.hash_castling();
        self.castling_rights = undo.prev_castling_rights;
        self.fifty_move = undo.prev_fifty_move;
        self.en_passant = undo.prev_en_passant_square;
        self.hash_en_passant();
        self.hash_castling();

        self.side = self.side.opposite();
        self.hash_side();

        if mv != Move::NONE {
            let (from, to) = (mv.from(), mv.to());
            let side = self.side;

            if mv.promoted() != Piece::Empty {
                self.clear_piece(to);
                self.add_piece_at(to, Piece::pawn(side), undo.promoted_slot);
            }

            self.move_piece(to, from);

            if self.pieces[from as usize].is_king() {
                self.king_square[side.index()] = from;
            }

            if mv.captured() != Piece::Empty {
                self.add_piece_at(to, mv.captured(), undo.captured_slot);
            }

            if mv.is_en_passant() {
                let victim = Self::en_passant_victim(side, to);
                self.add_piece_at(victim, Piece::pawn(side.opposite()), undo.captured_slot);
            } else if mv.is_castling() {
                if let Some((rook_from, rook_to, _)) = Self::castling_rook(side, from, to) {
                    self.move_piece(rook_to, rook_from);
                }
            }
        }

        debug_assert_eq!(self.position_key, undo.prev_position_key);
        debug_assert_eq!(self.check_board(), Ok(()));
        Ok(mv)
    }

    /// Pass the turn without moving a piece. Clears any en-passant target.
    pub fn make_null_move(&mut self) -> Result<(), BoardError> {
        self.history.push(UndoState {
            mv: Move::NONE,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant,
            prev_fifty_move: self.fifty_move,
            prev_position_key: self.position_key,
            ..UndoState::default()
        })?;

        self.ply += 1;
        self.hash_en_passant();
        self.en_passant = None;

        self.side = self.side.opposite();
        self.hash_side();

        Ok(())
    }
}
