//! Terminal UI: the interactive game view. This layer owns turn
//! bookkeeping, applies the search's chosen cell, and translates outcomes
//! into score updates and win-line highlighting.

mod app;
pub mod board_widget;
mod game_view;

pub use app::{App, GameMode};
