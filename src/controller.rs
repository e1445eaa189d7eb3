//! # Lamp Board Controller
//!
//! [`LampBoard`] owns the live [`Board`] and its [`UndoStack`] and is the
//! only place either is mutated. Every mutating call ends with the board's
//! serialization on top of the history; every failing call leaves both
//! untouched.
//!
//! ## Entry points
//! - [`LampBoard::handle_user_toggle`]: click, tap or Enter/Space on a lamp
//! - [`LampBoard::paint`] / [`LampBoard::finish_stroke`]: drag painting,
//!   recorded as one history entry per stroke
//! - [`LampBoard::resize`], [`LampBoard::import_json`], [`LampBoard::undo`]

use crate::board::{Board, BoardError};
use crate::history::UndoStack;
use crate::snapshot::Snapshot;

#[derive(Clone, Debug)]
pub struct LampBoard {
    board: Board,
    history: UndoStack,
    stroke_changed: bool,
}

impl Default for LampBoard {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl LampBoard {
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(columns, rows)?))
    }

    fn from_board(board: Board) -> Self {
        let mut history = UndoStack::new();
        history.push(board.serialize());
        Self {
            board,
            history,
            stroke_changed: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    fn record(&mut self) {
        self.history.push(self.board.serialize());
    }

    /// Flip one lamp and record the new state.
    pub fn handle_user_toggle(&mut self, index: usize) {
        self.board.toggle(index);
        self.record();
        log::debug!("Toggled lamp {}", index);
    }

    /// Light one lamp as part of a drag stroke. Nothing is recorded until
    /// [`finish_stroke`](Self::finish_stroke).
    pub fn paint(&mut self, index: usize) {
        if self.board.set(index, true) {
            self.stroke_changed = true;
        }
    }

    /// Close the current stroke. Returns whether a history entry was pushed.
    pub fn finish_stroke(&mut self) -> bool {
        let changed = std::mem::take(&mut self.stroke_changed);
        if changed {
            self.record();
        }
        changed
    }

    pub fn resize(&mut self, columns: usize, rows: usize) -> Result<(), BoardError> {
        self.finish_stroke();
        self.board.resize(columns, rows)?;
        self.record();
        log::info!("Board resized to {}x{}", columns, rows);
        Ok(())
    }

    /// Whether [`undo`](Self::undo) would restore an earlier state. False
    /// right after a resize, since older entries belong to another size.
    pub fn can_undo(&self) -> bool {
        self.history
            .previous()
            .is_some_and(|previous| previous.len() == self.board.len())
    }

    /// Step back one history entry.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. If the earlier
    /// entry was recorded for a board of another size the undo is refused
    /// with [`BoardError::LengthMismatch`] and the history is left as is.
    pub fn undo(&mut self) -> Result<bool, BoardError> {
        self.finish_stroke();
        let Some(previous) = self.history.previous() else {
            return Ok(false);
        };
        if previous.len() != self.board.len() {
            return Err(BoardError::LengthMismatch {
                expected: self.board.len(),
                actual: previous.len(),
            });
        }
        match self.history.undo() {
            Some(snapshot) => {
                self.board.apply_snapshot(&snapshot)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restore lamps from an exported JSON array and record the result.
    pub fn import_json(&mut self, text: &str) -> Result<(), BoardError> {
        let snapshot = Snapshot::from_json(text)?;
        self.restore(&snapshot)
    }

    /// Apply a snapshot of matching length and record it.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), BoardError> {
        self.finish_stroke();
        self.board.apply_snapshot(snapshot)?;
        self.record();
        Ok(())
    }

    pub fn export_json(&self) -> String {
        self.board.serialize().to_json()
    }
}
