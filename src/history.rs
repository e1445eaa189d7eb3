use crate::snapshot::Snapshot;

/// Linear undo history of board snapshots.
///
/// The top entry is always the state currently on screen, so `undo` never
/// removes the last remaining entry. There is no redo: pushing after an
/// undo simply continues from the popped point.
#[derive(Clone, Debug, Default)]
pub struct UndoStack {
    history: Vec<Snapshot>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.history.push(snapshot);
    }

    /// Drop the current entry and return the one beneath it, which the
    /// caller must apply to the board. Returns `None` (and keeps the stack)
    /// when there is no earlier state.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        self.history.last().cloned()
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.history.last()
    }

    /// The entry `undo` would return, without popping.
    pub fn previous(&self) -> Option<&Snapshot> {
        self.history.len().checked_sub(2).and_then(|i| self.history.get(i))
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(bits: &str) -> Snapshot {
        bits.parse().unwrap()
    }

    #[test]
    fn single_entry_is_never_popped() {
        let mut stack = UndoStack::new();
        stack.push(snap("00"));
        assert_eq!(stack.undo(), None);
        assert_eq!(stack.entries(), &[snap("00")]);
    }

    #[test]
    fn empty_stack_undo_is_none() {
        let mut stack = UndoStack::new();
        assert_eq!(stack.undo(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn undo_walks_back_to_the_first_entry() {
        let mut stack = UndoStack::new();
        stack.push(snap("00"));
        stack.push(snap("01"));
        stack.push(snap("11"));

        assert_eq!(stack.undo(), Some(snap("01")));
        assert_eq!(stack.entries(), &[snap("00"), snap("01")]);
        assert_eq!(stack.undo(), Some(snap("00")));
        assert_eq!(stack.entries(), &[snap("00")]);
        assert_eq!(stack.undo(), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn push_after_undo_discards_popped_entries() {
        let mut stack = UndoStack::new();
        stack.push(snap("00"));
        stack.push(snap("01"));
        stack.undo();
        stack.push(snap("10"));
        assert_eq!(stack.entries(), &[snap("00"), snap("10")]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut stack = UndoStack::new();
        stack.push(snap("1"));
        stack.push(snap("1"));
        assert_eq!(stack.len(), 2);
        assert!(stack.can_undo());
    }

    #[test]
    fn previous_peeks_without_popping() {
        let mut stack = UndoStack::new();
        assert_eq!(stack.previous(), None);
        stack.push(snap("0"));
        assert_eq!(stack.previous(), None);
        stack.push(snap("1"));
        assert_eq!(stack.previous(), Some(&snap("0")));
        assert_eq!(stack.len(), 2);
    }
}
