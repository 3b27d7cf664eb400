use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crate::score::{ScoreBoard, ScoreStore};

/// Who is sitting across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsComputer,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayer => "Two Player",
            GameMode::VsComputer => "Vs Computer",
        }
    }

    fn toggled(self) -> Self {
        match self {
            GameMode::TwoPlayer => GameMode::VsComputer,
            GameMode::VsComputer => GameMode::TwoPlayer,
        }
    }
}

pub struct App {
    game_state: GameState,
    cursor: usize,
    mode: GameMode,
    ai_mark: Player,
    ai_delay: Duration,
    ai_move_due: Option<Instant>,
    agent: MinimaxAgent,
    scores: ScoreBoard,
    store: ScoreStore,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig, scores: ScoreBoard) -> Self {
        let mode = if config.vs_computer {
            GameMode::VsComputer
        } else {
            GameMode::TwoPlayer
        };

        let mut app = App {
            game_state: GameState::initial(),
            cursor: 4, // start on the center cell
            mode,
            ai_mark: config.ai_mark,
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            ai_move_due: None,
            agent: MinimaxAgent::new(),
            scores,
            store: ScoreStore::new(config.score_file.clone()),
            should_quit: false,
            message: None,
        };
        app.schedule_ai_move();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.run_pending_ai_move();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.cursor % 3 > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor % 3 < 2 {
                    self.cursor += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor >= 3 {
                    self.cursor -= 3;
                }
            }
            KeyCode::Down => {
                if self.cursor < 6 {
                    self.cursor += 3;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                self.new_game();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('m') => {
                self.mode = self.mode.toggled();
                self.new_game();
                self.message = Some(format!("Mode: {}", self.mode.label()));
            }
            KeyCode::Char('c') => {
                self.scores.reset();
                self.save_scores();
                if self.message.is_none() {
                    self.message = Some("Scores cleared.".to_string());
                }
            }
            _ => {}
        }
    }

    /// Place the current player's mark at the cursor
    fn place_mark(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        // While the computer is "thinking", human input on the board is ignored
        if self.is_computer_turn() {
            return;
        }

        match self.game_state.apply_move_mut(self.cursor) {
            Ok(()) => self.after_move(),
            Err(MoveError::CellOccupied) => {
                self.message = Some("Cell is already taken!".to_string());
            }
            Err(MoveError::InvalidCell) => {
                self.message = Some("Invalid cell!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Bookkeeping shared by human and computer moves: report the outcome
    /// and bump scores on game end, otherwise hand the turn over.
    fn after_move(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player, _) => format!("{} wins!", player.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
            self.scores.record(outcome);
            self.save_scores();
        } else {
            self.schedule_ai_move();
        }
    }

    fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer
            && !self.game_state.is_terminal()
            && self.game_state.current_player() == self.ai_mark
    }

    /// Arm the "thinking" delay when it is the computer's turn.
    fn schedule_ai_move(&mut self) {
        if self.is_computer_turn() {
            self.ai_move_due = Some(Instant::now() + self.ai_delay);
        } else {
            self.ai_move_due = None;
        }
    }

    /// Play the computer's move once its delay has elapsed. The search
    /// itself is synchronous; only the start is deferred.
    fn run_pending_ai_move(&mut self) {
        let due = match self.ai_move_due {
            Some(due) => due,
            None => return,
        };
        if Instant::now() < due || !self.is_computer_turn() {
            return;
        }
        self.ai_move_due = None;

        // A finished game yields no move; treat that as a no-op.
        if let Some(cell) = self.agent.select_action(&self.game_state) {
            if self.game_state.apply_move_mut(cell).is_ok() {
                self.after_move();
            }
        }
    }

    fn new_game(&mut self) {
        self.game_state = GameState::initial();
        self.cursor = 4;
        self.schedule_ai_move();
    }

    fn save_scores(&mut self) {
        if let Err(err) = self.store.save(&self.scores) {
            self.message = Some(format!("Could not save scores: {err}"));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            self.mode,
            &self.scores,
            &self.message,
        );
    }
}
