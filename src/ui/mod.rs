//! Terminal UI: renders the board, maps key presses to moves, and prompts
//! for a rematch when a game ends.

mod app;
mod game_view;

pub use app::App;
