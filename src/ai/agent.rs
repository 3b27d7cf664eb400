use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select a cell (0-8) for the current player, or `None` if the game is
    /// already over and no move exists.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
