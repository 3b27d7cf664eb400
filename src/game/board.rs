use super::player::Player;

pub const CELLS: usize = 9;

/// An index triple forming a winning configuration.
pub type WinLine = [usize; 3];

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELLS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    InvalidCell,
}

/// Result of evaluating a board: a win with its line, or a draw.
/// An ongoing game evaluates to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player, WinLine),
    Draw,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Get the cell at an index (0-8, row-major: 0,1,2 is the top row)
    pub fn get(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Check if the cell at an index is empty
    pub fn is_empty_at(&self, idx: usize) -> bool {
        idx < CELLS && self.cells[idx] == Cell::Empty
    }

    /// Place a mark in an empty cell
    pub fn place(&mut self, idx: usize, cell: Cell) -> Result<(), MoveError> {
        if idx >= CELLS {
            return Err(MoveError::InvalidCell);
        }
        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied);
        }
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Indices of all empty cells, in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i] == Cell::Empty).collect()
    }

    /// Evaluate the board: `Some(Winner)` if any line holds three identical
    /// marks, `Some(Draw)` if the board is full with no winner, `None` while
    /// the game is still ongoing.
    ///
    /// Lines are scanned in table order and the first match wins; positions
    /// reachable by legal play never satisfy two lines with different marks.
    pub fn evaluate(&self) -> Option<GameOutcome> {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(player) = self.cells[a].player() {
                if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                    return Some(GameOutcome::Winner(player, line));
                }
            }
        }

        if self.is_full() {
            return Some(GameOutcome::Draw);
        }

        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for idx in 0..CELLS {
            assert_eq!(board.get(idx), Cell::Empty);
        }
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(4, Cell::X).unwrap();
        assert_eq!(board.get(4), Cell::X);
        assert!(!board.is_empty_at(4));
        assert!(board.is_empty_at(0));
    }

    #[test]
    fn test_place_occupied() {
        let mut board = Board::new();
        board.place(0, Cell::X).unwrap();
        assert_eq!(board.place(0, Cell::O), Err(MoveError::CellOccupied));
    }

    #[test]
    fn test_place_invalid_cell() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Cell::X), Err(MoveError::InvalidCell));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for idx in 0..CELLS {
            board.place(idx, Cell::X).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_evaluate_empty_board_ongoing() {
        let board = Board::new();
        assert_eq!(board.evaluate(), None);
    }

    #[test]
    fn test_evaluate_row_win() {
        let mut board = Board::new();
        for idx in [3, 4, 5] {
            board.place(idx, Cell::X).unwrap();
        }
        assert_eq!(
            board.evaluate(),
            Some(GameOutcome::Winner(Player::X, [3, 4, 5]))
        );
    }

    #[test]
    fn test_evaluate_column_win() {
        let mut board = Board::new();
        for idx in [1, 4, 7] {
            board.place(idx, Cell::O).unwrap();
        }
        assert_eq!(
            board.evaluate(),
            Some(GameOutcome::Winner(Player::O, [1, 4, 7]))
        );
    }

    #[test]
    fn test_evaluate_diagonal_win() {
        let mut board = Board::new();
        for idx in [2, 4, 6] {
            board.place(idx, Cell::X).unwrap();
        }
        assert_eq!(
            board.evaluate(),
            Some(GameOutcome::Winner(Player::X, [2, 4, 6]))
        );
    }

    #[test]
    fn test_evaluate_reports_matching_line() {
        // X holds both the top row and the left column; the row comes first
        // in the line table, so it is the one reported.
        let mut board = Board::new();
        for idx in [0, 1, 2, 3, 6] {
            board.place(idx, Cell::X).unwrap();
        }
        assert_eq!(
            board.evaluate(),
            Some(GameOutcome::Winner(Player::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_evaluate_draw() {
        // X O X / O X X / O X O — full, no line
        let cells = [
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::O,
        ];
        let mut board = Board::new();
        for (idx, cell) in cells.into_iter().enumerate() {
            board.place(idx, cell).unwrap();
        }
        assert_eq!(board.evaluate(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_evaluate_partial_board_ongoing() {
        let mut board = Board::new();
        board.place(0, Cell::X).unwrap();
        board.place(1, Cell::X).unwrap();
        board.place(4, Cell::O).unwrap();
        assert_eq!(board.evaluate(), None);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut board = Board::new();
        for idx in [0, 4, 8] {
            board.place(idx, Cell::O).unwrap();
        }
        let first = board.evaluate();
        assert_eq!(board.evaluate(), first);
        assert_eq!(first, Some(GameOutcome::Winner(Player::O, [0, 4, 8])));
    }
}
