//! Bounded history of undo records.
//!
//! Storage is allocated once at full capacity and indexed by history-ply, so
//! push and pop never reallocate.

use crate::board::chess_rules::MAX_GAME_MOVES;
use crate::board::undo_state::UndoState;
use crate::board_errors::BoardError;

#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: Box<[UndoState]>,
    history_ply: usize,
}

/// Only the live records (below history-ply) take part in comparison.
impl PartialEq for HistoryBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.as_slice() == other.as_slice()
    }
}

impl Eq for HistoryBuffer {}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Buffer sized for `MAX_GAME_MOVES` half-moves.
    pub fn new() -> Self {
        Self::with_capacity(MAX_GAME_MOVES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![UndoState::default(); capacity].into_boxed_slice(),
            history_ply: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Half-moves recorded since the start of the game.
    #[inline]
    pub fn history_ply(&self) -> usize {
        self.history_ply
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history_ply == 0
    }

    /// Store `snapshot` at the current history-ply and advance it.
    #[inline]
    pub fn push(&mut self, snapshot: UndoState) -> Result<(), BoardError> {
        let capacity = self.entries.len();
        let slot = self
            .entries
            .get_mut(self.history_ply)
            .ok_or(BoardError::HistoryOverflow { capacity })?;
        *slot = snapshot;
        self.history_ply += 1;
        Ok(())
    }

    /// Step history-ply back and copy the record found there into `target`.
    #[inline]
    pub fn pop_into(&mut self, target: &mut UndoState) -> Result<(), BoardError> {
        if self.history_ply == 0 {
            return Err(BoardError::HistoryUnderflow);
        }
        self.history_ply -= 1;
        *target = self.entries[self.history_ply];
        Ok(())
    }

    /// Most recent record, if any.
    #[inline]
    pub fn last(&self) -> Option<&UndoState> {
        self.history_ply
            .checked_sub(1)
            .map(|index| &self.entries[index])
    }

    #[inline]
    pub(crate) fn last_mut(&mut self) -> Option<&mut UndoState> {
        self.history_ply
            .checked_sub(1)
            .map(|index| &mut self.entries[index])
    }

    /// Records from the start of the game up to history-ply.
    #[inline]
    pub fn as_slice(&self) -> &[UndoState] {
        &self.entries[..self.history_ply]
    }

    pub fn clear(&mut self) {
        self.history_ply = 0;
    }
}
