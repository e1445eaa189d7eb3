use crate::snapshot::Snapshot;

/// Board size used when no size has been saved yet
pub const DEFAULT_COLUMNS: usize = 50;
pub const DEFAULT_ROWS: usize = 30;
/// Largest accepted number of columns or rows
pub const MAX_SIDE: usize = 1000;

/// Failures reported to the user. None of them leave the board half-updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Resize request with a missing, non-numeric or non-positive size
    #[error("invalid board dimension: {0}")]
    InvalidDimension(String),

    /// Snapshot does not have one entry per lamp
    #[error("snapshot has {actual} lamps, board has {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Import payload is not an array of 0/1 values
    #[error("malformed import: {0}")]
    MalformedImport(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub on: bool,
}

/// Row-major grid of lamps. `cells.len() == columns * rows` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

fn checked_area(columns: usize, rows: usize) -> Result<usize, BoardError> {
    if columns == 0 || rows == 0 {
        return Err(BoardError::InvalidDimension(format!(
            "{}x{} (both sides must be positive)",
            columns, rows
        )));
    }
    if columns > MAX_SIDE || rows > MAX_SIDE {
        return Err(BoardError::InvalidDimension(format!(
            "{}x{} (sides are limited to {})",
            columns, rows, MAX_SIDE
        )));
    }
    Ok(columns * rows)
}

/// Parse one side of a resize request from raw text input.
///
/// Empty, non-numeric, zero and oversized values are all rejected; there
/// is no fallback to a default size here.
pub fn parse_dimension(raw: &str) -> Result<usize, BoardError> {
    let trimmed = raw.trim();
    match trimmed.parse::<usize>() {
        Ok(0) => Err(BoardError::InvalidDimension(format!("{:?} is not positive", trimmed))),
        Ok(value) if value > MAX_SIDE => Err(BoardError::InvalidDimension(format!(
            "{:?} exceeds the limit of {}",
            trimmed, MAX_SIDE
        ))),
        Ok(value) => Ok(value),
        Err(_) => Err(BoardError::InvalidDimension(format!("{:?} is not a number", trimmed))),
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            cells: vec![Cell::default(); DEFAULT_COLUMNS * DEFAULT_ROWS],
        }
    }
}

impl Board {
    pub fn new(columns: usize, rows: usize) -> Result<Self, BoardError> {
        let area = checked_area(columns, rows)?;
        Ok(Self {
            columns,
            rows,
            cells: vec![Cell::default(); area],
        })
    }

    /// Replace every lamp with a fresh, dark grid of the new size.
    ///
    /// On error the board keeps its previous size and state.
    pub fn resize(&mut self, columns: usize, rows: usize) -> Result<(), BoardError> {
        *self = Self::new(columns, rows)?;
        Ok(())
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn is_on(&self, index: usize) -> bool {
        self.cells[index].on
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn toggle(&mut self, index: usize) {
        let cell = &mut self.cells[index];
        cell.on = !cell.on;
    }

    /// Set one lamp, returning whether it changed.
    ///
    /// # Panics
    /// If `index` is out of range.
    pub fn set(&mut self, index: usize, on: bool) -> bool {
        let cell = &mut self.cells[index];
        let changed = cell.on != on;
        cell.on = on;
        changed
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.on).count()
    }

    /// `(column, row)` of a row-major index.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    pub fn serialize(&self) -> Snapshot {
        Snapshot::new(self.cells.iter().map(|c| c.on).collect())
    }

    /// Overwrite every lamp from `snapshot`. The length is checked before
    /// any lamp is touched.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), BoardError> {
        if snapshot.len() != self.cells.len() {
            return Err(BoardError::LengthMismatch {
                expected: self.cells.len(),
                actual: snapshot.len(),
            });
        }
        for (cell, on) in self.cells.iter_mut().zip(snapshot.iter()) {
            cell.on = on;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_board_is_dark() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.len(), 12);
        assert_eq!(board.lit_count(), 0);
    }

    #[test]
    fn default_board_is_fifty_by_thirty() {
        let board = Board::default();
        assert_eq!((board.columns(), board.rows(), board.len()), (50, 30, 1500));
        assert_eq!(board.lit_count(), 0);
    }

    #[test]
    fn zero_sides_are_rejected_without_touching_the_board() {
        let mut board = Board::new(2, 2).unwrap();
        board.toggle(1);
        let before = board.clone();

        assert!(matches!(board.resize(0, 5), Err(BoardError::InvalidDimension(_))));
        assert!(matches!(board.resize(5, 0), Err(BoardError::InvalidDimension(_))));
        assert_eq!(board, before);
    }

    #[test]
    fn oversized_sides_are_rejected_before_allocating() {
        let mut board = Board::new(2, 2).unwrap();
        board.toggle(0);
        let before = board.clone();

        for (columns, rows) in [(1_048_576, 1_048_576), (MAX_SIDE + 1, 1), (1, MAX_SIDE + 1)] {
            assert!(matches!(
                board.resize(columns, rows),
                Err(BoardError::InvalidDimension(_))
            ));
        }
        assert!(matches!(Board::new(usize::MAX, 2), Err(BoardError::InvalidDimension(_))));
        assert_eq!(board, before);
    }

    #[test]
    fn largest_side_is_accepted() {
        let board = Board::new(MAX_SIDE, 1).unwrap();
        assert_eq!(board.len(), MAX_SIDE);
    }

    #[test]
    fn resize_discards_previous_state() {
        let mut board = Board::new(2, 2).unwrap();
        board.toggle(0);
        board.resize(2, 2).unwrap();
        assert_eq!(board.lit_count(), 0);
    }

    #[test]
    fn toggle_flips_one_lamp() {
        let mut board = Board::new(3, 1).unwrap();
        board.toggle(2);
        assert_eq!(board.serialize().to_string(), "001");
        board.toggle(2);
        assert_eq!(board.serialize().to_string(), "000");
    }

    #[test]
    #[should_panic]
    fn toggle_out_of_range_panics() {
        let mut board = Board::new(2, 2).unwrap();
        board.toggle(4);
    }

    #[test]
    fn set_reports_changes() {
        let mut board = Board::new(2, 1).unwrap();
        assert!(board.set(0, true));
        assert!(!board.set(0, true));
        assert!(board.set(0, false));
    }

    #[test]
    fn geometry_is_row_major() {
        let board = Board::new(3, 2).unwrap();
        assert_eq!(board.position_of(4), (1, 1));
        assert_eq!(board.position_of(5), (2, 1));
    }

    #[test]
    fn apply_snapshot_length_mismatch_changes_nothing() {
        let mut board = Board::new(2, 2).unwrap();
        board.toggle(3);
        let before = board.clone();

        let err = board.apply_snapshot(&"111".parse().unwrap()).unwrap_err();
        assert_eq!(err, BoardError::LengthMismatch { expected: 4, actual: 3 });
        assert_eq!(board, before);
    }

    #[test]
    fn apply_snapshot_sets_every_lamp() {
        let mut board = Board::new(2, 2).unwrap();
        board.toggle(0);
        board.apply_snapshot(&"0110".parse().unwrap()).unwrap();
        assert_eq!(board.serialize().to_string(), "0110");
    }

    #[test]
    fn parse_dimension_rejects_bad_input() {
        assert_eq!(parse_dimension(" 12 "), Ok(12));
        assert_eq!(parse_dimension("1000"), Ok(MAX_SIDE));
        for raw in ["", "0", "-3", "abc", "1.5", "1001", "1048576"] {
            assert!(matches!(parse_dimension(raw), Err(BoardError::InvalidDimension(_))), "{raw}");
        }
    }

    proptest! {
        #[test]
        fn resize_yields_dark_board_of_exact_area(columns in 1usize..64, rows in 1usize..64) {
            let mut board = Board::new(1, 1).unwrap();
            board.toggle(0);
            board.resize(columns, rows).unwrap();
            prop_assert_eq!(board.len(), columns * rows);
            prop_assert!(board.cells().iter().all(|c| !c.on));
        }

        #[test]
        fn reapplying_own_serialization_is_a_no_op(bits in proptest::collection::vec(any::<bool>(), 12)) {
            let mut board = Board::new(4, 3).unwrap();
            board.apply_snapshot(&Snapshot::new(bits)).unwrap();
            let before = board.clone();
            board.apply_snapshot(&board.serialize()).unwrap();
            prop_assert_eq!(board, before);
        }
    }
}
