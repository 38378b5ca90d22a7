//! Core incremental board state representation.
//!
//! `BoardState` is the central model consumed by move generation, search and
//! evaluation. It stores the padded piece board, pawn bitboards, piece lists
//! and counts, king squares, turn/state flags, clocks, the position key and
//! the history buffer used by make/take workflows.

use std::fmt;

use crate::board::bit_ops::{count_bits, set_bit};
use crate::board::chess_rules::*;
use crate::board::chess_types::*;
use crate::board::history::HistoryBuffer;
use crate::board::square_map::square_map;
use crate::board::zobrist::compute_position_key;
use crate::board_errors::BoardError;
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::render_board::render_board;

/// Incremental board state optimized for fast move making/taking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    // --- Piece placement ---
    pub pieces: [Piece; BOARD_SQUARE_COUNT],
    // [white, black, both]
    pub pawns: [u64; 3],
    pub king_square: [Square; 2],

    // --- Side and state flags ---
    pub side: Color,
    pub en_passant: Option<Square>,
    pub castling_rights: CastlingRights,

    // --- Clocks ---
    pub fifty_move: u16,
    pub ply: u16,

    // --- Incremental hashing ---
    pub position_key: u64,

    // --- Material bookkeeping ---
    pub piece_count: [u8; PIECE_CODE_COUNT],
    // [white, black, both]
    pub big_pieces: [u8; 3],
    pub major_pieces: [u8; 3],
    pub minor_pieces: [u8; 3],
    pub material: [i32; 2],
    pub piece_list: [[Square; MAX_PIECES_PER_KIND]; PIECE_CODE_COUNT],

    // --- Make/take stack ---
    pub history: HistoryBuffer,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            pieces: empty_piece_board(),
            pawns: [0; 3],
            king_square: [NO_SQUARE; 2],

            side: Color::White,
            en_passant: None,
            castling_rights: 0,

            fifty_move: 0,
            ply: 0,

            position_key: 0,

            piece_count: [0; PIECE_CODE_COUNT],
            big_pieces: [0; 3],
            major_pieces: [0; 3],
            minor_pieces: [0; 3],
            material: [0; 2],
            piece_list: [[NO_SQUARE; MAX_PIECES_PER_KIND]; PIECE_CODE_COUNT],

            history: HistoryBuffer::new(),
        }
    }
}

/// Off-board marker on the border, `Empty` on the 64 real squares.
fn empty_piece_board() -> [Piece; BOARD_SQUARE_COUNT] {
    let map = square_map();
    let mut pieces = [Piece::OffBoard; BOARD_SQUARE_COUNT];
    for &square in map.compact_to_padded_table() {
        pieces[square as usize] = Piece::Empty;
    }
    pieces
}

impl BoardState {
    /// Empty board. Not playable until pieces are placed and
    /// [`BoardState::finish_setup`] succeeds.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position, white to move with all castling rights.
    pub fn start_position() -> Self {
        let mut board = Self::new_empty();
        for (file, &piece) in STARTING_BACK_RANK.iter().enumerate() {
            let file = file as u8;
            let black_piece = Piece::from_code(piece as u32 + 6).unwrap_or(Piece::Empty);
            board.pieces[file_rank_to_square(file, 0) as usize] = piece;
            board.pieces[file_rank_to_square(file, 1) as usize] = Piece::WhitePawn;
            board.pieces[file_rank_to_square(file, 6) as usize] = Piece::BlackPawn;
            board.pieces[file_rank_to_square(file, 7) as usize] = black_piece;
        }
        board.castling_rights = CASTLE_ALL;
        board.refresh_derived_state();
        board
    }

    /// Clear every field back to the empty board, keeping the history
    /// allocation.
    pub fn reset(&mut self) {
        let mut history = std::mem::take(&mut self.history);
        history.clear();
        *self = Self {
            history,
            ..Self::default()
        };
    }

    /// Setup primitive: put `piece` on a real square without touching any
    /// derived field. Call [`BoardState::finish_setup`] afterwards.
    pub fn place_piece(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if !square_map().is_real_square(square as usize) || piece == Piece::OffBoard {
            return Err(BoardError::NotARealSquare(square as usize));
        }
        self.pieces[square as usize] = piece;
        Ok(())
    }

    /// Rebuild lists, counts, bitboards and key after setup, then validate.
    pub fn finish_setup(&mut self) -> Result<(), BoardError> {
        self.refresh_derived_state();
        self.check_board()
    }

    fn refresh_derived_state(&mut self) {
        self.update_lists_material();
        self.position_key = compute_position_key(self);
    }

    /// Compact index for a padded square; `OFF_BOARD_INDEX` off the board.
    #[inline]
    pub fn compact_square_of(&self, padded: Square) -> CompactSquare {
        square_map().compact_of(padded)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.pieces[square as usize]
    }

    /// Start a new search from the current position.
    #[inline]
    pub fn reset_ply(&mut self) {
        self.ply = 0;
    }

    /// Half-moves played since the start of the game.
    #[inline]
    pub fn history_ply(&self) -> usize {
        self.history.history_ply()
    }

    /// Occupied squares of one piece code.
    #[inline]
    pub fn squares_of(&self, piece: Piece) -> &[Square] {
        &self.piece_list[piece.index()][..self.piece_count[piece.index()] as usize]
    }

    /// Pieces of both colors, all kinds.
    pub fn total_pieces(&self) -> u32 {
        ALL_PIECES
            .iter()
            .map(|piece| self.piece_count[piece.index()] as u32)
            .sum()
    }

    /// Recompute every list and count from the padded piece board.
    pub fn update_lists_material(&mut self) {
        self.pawns = [0; 3];
        self.king_square = [NO_SQUARE; 2];
        self.piece_count = [0; PIECE_CODE_COUNT];
        self.big_pieces = [0; 3];
        self.major_pieces = [0; 3];
        self.minor_pieces = [0; 3];
        self.material = [0; 2];
        self.piece_list = [[NO_SQUARE; MAX_PIECES_PER_KIND]; PIECE_CODE_COUNT];

        let map = square_map();
        for compact in 0..64u8 {
            let square = map.padded_of(compact);
            let piece = self.pieces[square as usize];
            let Some(color) = piece.color() else {
                continue;
            };

            if piece.is_big() {
                self.big_pieces[color.index()] += 1;
            }
            if piece.is_major() {
                self.major_pieces[color.index()] += 1;
            }
            if piece.is_minor() {
                self.minor_pieces[color.index()] += 1;
            }
            self.material[color.index()] += piece.value();

            let count = &mut self.piece_count[piece.index()];
            if (*count as usize) < MAX_PIECES_PER_KIND {
                self.piece_list[piece.index()][*count as usize] = square;
            }
            *count += 1;

            if piece.is_king() {
                self.king_square[color.index()] = square;
            }
            if piece.is_pawn() {
                set_bit(&mut self.pawns[color.index()], compact);
                set_bit(&mut self.pawns[BOTH], compact);
            }
        }

        for counts in [
            &mut self.big_pieces,
            &mut self.major_pieces,
            &mut self.minor_pieces,
        ] {
            counts[BOTH] = counts[0] + counts[1];
        }
    }

    /// Recompute every derived field from scratch and compare it with the
    /// incrementally maintained copy.
    pub fn check_board(&self) -> Result<(), BoardError> {
        let map = square_map();
        let mut piece_count = [0u8; PIECE_CODE_COUNT];
        let mut big = [0u8; 3];
        let mut major = [0u8; 3];
        let mut minor = [0u8; 3];
        let mut material = [0i32; 2];
        let mut pawns = [0u64; 3];

        for (square, &piece) in self.pieces.iter().enumerate() {
            let real = map.is_real_square(square);
            if real == (piece == Piece::OffBoard) {
                return Err(violation(format!(
                    "square {square} holds {piece:?} but real={real}"
                )));
            }
            let Some(color) = piece.color() else {
                continue;
            };
            piece_count[piece.index()] += 1;
            big[color.index()] += piece.is_big() as u8;
            major[color.index()] += piece.is_major() as u8;
            minor[color.index()] += piece.is_minor() as u8;
            material[color.index()] += piece.value();
            if piece.is_pawn() {
                set_bit(&mut pawns[color.index()], map.compact_of(square as Square));
            }
        }
        pawns[BOTH] = pawns[0] | pawns[1];
        for counts in [&mut big, &mut major, &mut minor] {
            counts[BOTH] = counts[0] + counts[1];
        }

        for piece in ALL_PIECES {
            let count = self.piece_count[piece.index()];
            if count != piece_count[piece.index()] {
                return Err(violation(format!(
                    "{piece:?} count {count} but board has {}",
                    piece_count[piece.index()]
                )));
            }
            if count as usize > MAX_PIECES_PER_KIND {
                return Err(violation(format!("{piece:?} list overflow with {count}")));
            }
            let listed = self.squares_of(piece);
            for (i, &square) in listed.iter().enumerate() {
                if self.pieces[square as usize] != piece {
                    return Err(violation(format!(
                        "{piece:?} list names square {square} holding {:?}",
                        self.pieces[square as usize]
                    )));
                }
                if listed[..i].contains(&square) {
                    return Err(violation(format!("{piece:?} list repeats square {square}")));
                }
            }
        }

        if self.pawns != pawns {
            return Err(violation(format!(
                "pawn bitboards {:?} but board gives {pawns:?}",
                self.pawns
            )));
        }
        if self.pawns[0] & self.pawns[1] != 0
            || count_bits(self.pawns[0]) != self.piece_count[Piece::WhitePawn.index()] as u32
            || count_bits(self.pawns[1]) != self.piece_count[Piece::BlackPawn.index()] as u32
        {
            return Err(violation("pawn bitboards disagree with pawn counts".to_owned()));
        }
        if self.big_pieces != big || self.major_pieces != major || self.minor_pieces != minor {
            return Err(violation(format!(
                "big/major/minor {:?}/{:?}/{:?} but board gives {big:?}/{major:?}/{minor:?}",
                self.big_pieces, self.major_pieces, self.minor_pieces
            )));
        }
        if self.material != material {
            return Err(violation(format!(
                "material {:?} but board gives {material:?}",
                self.material
            )));
        }

        for color in [Color::White, Color::Black] {
            let king = Piece::king(color);
            if piece_count[king.index()] != 1 {
                return Err(violation(format!(
                    "{color:?} has {} kings",
                    piece_count[king.index()]
                )));
            }
            if self.pieces[self.king_square[color.index()] as usize] != king {
                return Err(violation(format!(
                    "{color:?} king square {} does not hold the king",
                    self.king_square[color.index()]
                )));
            }
        }

        if let Some(ep) = self.en_passant {
            let expected_rank = match self.side {
                Color::White => 5,
                Color::Black => 2,
            };
            if map.rank_of(ep) != expected_rank {
                return Err(violation(format!(
                    "en-passant square {ep} not on rank {} for {:?} to move",
                    expected_rank + 1,
                    self.side
                )));
            }
        }

        if self.castling_rights & !CASTLE_ALL != 0 {
            return Err(violation(format!(
                "castling rights {:#x} out of range",
                self.castling_rights
            )));
        }

        let key = compute_position_key(self);
        if self.position_key != key {
            return Err(violation(format!(
                "position key {:#018x} but recomputed {key:#018x}",
                self.position_key
            )));
        }

        Ok(())
    }

    fn castling_string(&self) -> String {
        let mut out = String::new();
        for (mask, ch) in [
            (CASTLE_WHITE_KINGSIDE, 'K'),
            (CASTLE_WHITE_QUEENSIDE, 'Q'),
            (CASTLE_BLACK_KINGSIDE, 'k'),
            (CASTLE_BLACK_QUEENSIDE, 'q'),
        ] {
            if self.castling_rights & mask != 0 {
                out.push(ch);
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}

fn violation(detail: String) -> BoardError {
    BoardError::InvariantViolation(detail)
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", render_board(self))?;
        writeln!(
            f,
            "side: {}",
            match self.side {
                Color::White => 'w',
                Color::Black => 'b',
            }
        )?;
        let ep = match self.en_passant {
            Some(square) => square_to_algebraic(square).map_err(|_| fmt::Error)?,
            None => "-".to_owned(),
        };
        writeln!(f, "enPas: {ep}")?;
        writeln!(f, "castle: {}", self.castling_string())?;
        write!(f, "posKey: {:016X}", self.position_key)
    }
}
