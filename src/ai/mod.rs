mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{best_move, MinimaxAgent};
pub use random::RandomAgent;
