//! Tic-tac-toe game engine.
//!
//! A pure state-transition engine for two-player, alternating-turn
//! tic-tac-toe. The presentation layer forwards [`Intent`]s into a
//! [`Session`] and renders the [`Snapshot`] it returns.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: [`evaluate`] classifies a board as won, drawn or in progress
//! - **Round**: one game, from an empty board to a terminal [`Outcome`]
//! - **Session**: the current round plus the [`Score`] across rounds
//!
//! # Example
//!
//! ```
//! use tic_tac_toe::{Intent, Outcome, Session};
//!
//! # fn example() -> Result<(), tic_tac_toe::EngineError> {
//! let mut session = Session::new();
//! for index in [0, 3, 1, 4, 2] {
//!     session.dispatch(Intent::CellClicked(index))?;
//! }
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.outcome, Outcome::WinX);
//! assert_eq!(snapshot.score.x(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod invariants;
mod outcome;
mod position;
mod round;
mod rules;
mod score;
mod session;
mod snapshot;
mod types;

pub use action::{Intent, MoveOutcome, Rejection};
pub use error::{EngineError, EngineErrorKind};
pub use invariants::{
    BalancedMarksInvariant, Invariant, InvariantSet, InvariantViolation, OutcomeMatchesBoardInvariant,
    RoundInvariants, TurnMatchesBoardInvariant,
};
pub use outcome::Outcome;
pub use position::Position;
pub use round::Round;
pub use rules::{Evaluation, LINES, WinningLine, check_winner, evaluate, is_full};
pub use score::Score;
pub use session::Session;
pub use snapshot::{Cell, Snapshot};
pub use types::{Board, Player, Square};
