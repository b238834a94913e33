//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! round, the invariants and the tests all share one definition.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::is_full;
pub use evaluate::{Evaluation, evaluate};
pub use win::{LINES, WinningLine, check_winner};
