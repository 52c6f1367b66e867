//! Turn engine and the rules it enforces.
//!
//! `GameBoard` owns the board, the deck and the roster and advances the game
//! one turn at a time:
//! - skip the turn if the player is penalised
//! - otherwise roll, move, and resolve the landed square
//! - record what happened
//!
//! Decisions the rules leave to players (which capital to claim on
//! All-Together) go through a `CapitalChooser`.

pub mod chooser;
pub mod engine;
pub mod outcome;

pub use chooser::{CapitalChooser, ChooseWith, GreedyChooser, RandomChooser};
pub use engine::GameBoard;
pub use outcome::{Transfer, Transfers, TurnOutcome, TurnRecord};
