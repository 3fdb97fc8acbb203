use std::io::{self, Write};
use std::time::Duration;

use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{GameState, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    bell_pending: bool,
    config: UiConfig,
}

impl App {
    /// Create an app with a fresh game. The dimensions come from an already
    /// constructed state so the app never has to handle a bad board size.
    pub fn new(game_state: GameState, config: UiConfig) -> Self {
        let selected_column = game_state.board().width() / 2;
        App {
            game_state,
            selected_column,
            should_quit: false,
            message: None,
            bell_pending: false,
            config,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        tracing::info!(
            width = self.game_state.board().width(),
            height = self.game_state.board().height(),
            "starting interactive game"
        );
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.bell_pending {
                self.bell_pending = false;
                let mut stdout = io::stdout();
                stdout.write_all(b"\x07")?;
                stdout.flush()?;
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = Duration::from_millis(self.config.poll_interval_ms);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let width = self.game_state.board().width();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < width {
                    self.selected_column = column;
                }
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn restart(&mut self) {
        self.game_state = self.game_state.restart();
        self.selected_column = self.game_state.board().width() / 2;
        self.message = Some("New game started!".to_string());
        tracing::info!("new game started");
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.play(column) {
            Ok(placement) => {
                tracing::debug!(
                    player = placement.player.number(),
                    row = placement.row,
                    column = placement.column,
                    "piece placed"
                );
                self.bell_pending = self.config.bell_on_drop;
                match self.game_state.status() {
                    GameStatus::Won(player) => {
                        tracing::info!(
                            winner = player.number(),
                            moves = self.game_state.moves_played(),
                            "game won"
                        );
                        self.message =
                            Some(format!("{} wins! Press 'r' to play again.", player.name()));
                    }
                    GameStatus::Draw => {
                        tracing::info!(moves = self.game_state.moves_played(), "game drawn");
                        self.message = Some("Tie! Press 'r' to play again.".to_string());
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(MoveError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(MoveError::InvalidColumn { column, .. }) => {
                self.message = Some(format!("Column {} does not exist!", column + 1));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn quiet_app() -> App {
        let config = UiConfig {
            bell_on_drop: false,
            ..UiConfig::default()
        };
        App::new(GameState::new(), config)
    }

    #[test]
    fn test_selection_starts_in_middle_and_is_clamped() {
        let mut app = quiet_app();
        assert_eq!(app.selected_column(), 3);

        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column(), 0);

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column(), 6);
    }

    #[test]
    fn test_enter_drops_in_selected_column() {
        let mut app = quiet_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game_state().cell_at(5, 3),
            Ok(Cell::Occupied(Player::One))
        );
        assert_eq!(app.game_state().current_player(), Player::Two);
    }

    #[test]
    fn test_digit_selects_and_drops() {
        let mut app = quiet_app();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selected_column(), 0);
        assert_eq!(
            app.game_state().cell_at(5, 0),
            Ok(Cell::Occupied(Player::One))
        );

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message(), Some("Column 9 does not exist!"));
        assert_eq!(app.game_state().moves_played(), 1);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = quiet_app();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('2'));
        }
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.message(), Some("Column 2 is full!"));
        assert_eq!(app.game_state().current_player(), Player::One);
    }

    #[test]
    fn test_win_prompt_and_restart() {
        let mut app = quiet_app();
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('1'));
            press(&mut app, KeyCode::Char('2'));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), Some("Player 1 wins! Press 'r' to play again."));

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.message(), Some("New game started!"));
        assert_eq!(app.game_state().moves_played(), 0);
        assert_eq!(app.game_state().status(), GameStatus::InProgress);
    }

    #[test]
    fn test_bell_follows_config() {
        let mut app = App::new(GameState::new(), UiConfig::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.bell_pending);

        let mut app = quiet_app();
        press(&mut app, KeyCode::Enter);
        assert!(!app.bell_pending);
    }

    #[test]
    fn test_quit() {
        let mut app = quiet_app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_render_shows_current_player() {
        let app = quiet_app();
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Current Player: Player 1"));
    }
}
