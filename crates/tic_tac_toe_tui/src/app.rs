//! Application state and logic.

use crate::input::{UiAction, move_cursor};
use tic_tac_toe::{Intent, Position, Session, Snapshot};
use tracing::{debug, error, instrument};

/// Main application state.
///
/// Owns the session; everything drawn is read from a fresh snapshot.
pub struct App {
    session: Session,
    cursor: Position,
    notice: Option<String>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_help: bool) -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            notice: None,
            show_help,
            should_quit: false,
        }
    }

    /// Returns the current snapshot of the session.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Gets the cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the last notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether to show the key help line.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a UI action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: UiAction) {
        match action {
            UiAction::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            UiAction::ClickCursor => self.click(self.cursor),
            UiAction::Click(pos) => {
                self.cursor = pos;
                self.click(pos);
            }
            UiAction::Restart => {
                self.notice = None;
                self.send(Intent::RestartClicked);
            }
            UiAction::ResetAll => {
                self.notice = Some("Scores cleared".to_string());
                self.send(Intent::ResetClicked);
            }
            UiAction::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn click(&mut self, pos: Position) {
        // Ignored clicks are still sent; the notice only explains them.
        self.notice = self
            .session
            .round()
            .check_move(pos)
            .err()
            .map(|reason| reason.to_string());
        self.send(Intent::CellClicked(pos.to_index()));
    }

    fn send(&mut self, intent: Intent) {
        if let Err(e) = self.session.dispatch(intent) {
            error!(error = %e, ?intent, "Intent failed");
            self.notice = Some(e.to_string());
        }
    }
}

/// Banner text for the turn or the outcome.
pub fn banner(snapshot: &Snapshot) -> String {
    if let Some(player) = snapshot.outcome.winner() {
        format!("Player {} Wins!", player)
    } else if snapshot.outcome.is_draw() {
        "It's a Draw!".to_string()
    } else {
        format!("Player {}'s Turn", snapshot.current_player)
    }
}
