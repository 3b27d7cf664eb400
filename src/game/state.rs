use super::{Board, GameOutcome, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    InvalidCell,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X, // X starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal cells (empty, game not over)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, cell: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut new_board = self.board;
        new_board
            .place(cell, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::CellOccupied => MoveError::CellOccupied,
                super::board::MoveError::InvalidCell => MoveError::InvalidCell,
            })?;

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            outcome: new_board.evaluate(),
        })
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, cell: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .place(cell, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::CellOccupied => MoveError::CellOccupied,
                super::board::MoveError::InvalidCell => MoveError::InvalidCell,
            })?;

        self.outcome = self.board.evaluate();
        self.current_player = self.current_player.other();

        Ok(())
    }
}
