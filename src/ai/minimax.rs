use crate::game::{Board, GameOutcome, GameState, Player, CELLS};

use super::agent::Agent;

/// Score of a position already won by the searching side.
const WIN_SCORE: i32 = 10;
/// Score of a position already lost by the searching side.
const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
const DRAW_SCORE: i32 = 0;

/// Find the optimal cell for `me` by exhaustive game-tree search.
///
/// Every empty cell is tried in index order and scored under the assumption
/// that both sides play optimally from there on. The first cell with the
/// strictly greatest score is returned, so the choice is deterministic.
/// Scores are not discounted by depth: among equally winning (or equally
/// losing) moves the lowest index wins, not the fastest line.
///
/// Returns `None` when the board is already terminal; the caller's board is
/// never modified.
pub fn best_move(board: &Board, me: Player) -> Option<usize> {
    if board.evaluate().is_some() {
        return None;
    }

    let mut best_score = i32::MIN;
    let mut best_cell = None;

    for cell in 0..CELLS {
        if !board.is_empty_at(cell) {
            continue;
        }
        let mut child = *board;
        child.place(cell, me.to_cell()).unwrap();
        let score = minimax(&child, false, me);
        if score > best_score {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    best_cell
}

/// Score a position from `me`'s perspective. On `me`'s turn (`maximizing`)
/// the best child is the maximum; on the opponent's turn the minimum.
/// No pruning and no depth limit: the tree is at most 9 plies deep.
fn minimax(board: &Board, maximizing: bool, me: Player) -> i32 {
    if let Some(outcome) = board.evaluate() {
        return match outcome {
            GameOutcome::Winner(player, _) if player == me => WIN_SCORE,
            GameOutcome::Winner(..) => LOSS_SCORE,
            GameOutcome::Draw => DRAW_SCORE,
        };
    }

    let mover = if maximizing { me } else { me.other() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for cell in 0..CELLS {
        if !board.is_empty_at(cell) {
            continue;
        }
        let mut child = *board;
        child.place(cell, mover.to_cell()).unwrap();
        let score = minimax(&child, !maximizing, me);
        if maximizing {
            if score > best {
                best = score;
            }
        } else if score < best {
            best = score;
        }
    }

    best
}

/// Agent that plays perfectly via exhaustive minimax search.
///
/// Given at least a drawing position it never loses; given a winning
/// position it always wins.
pub struct MinimaxAgent;

impl MinimaxAgent {
    pub fn new() -> Self {
        MinimaxAgent
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        best_move(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
