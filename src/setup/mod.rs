//! Game setup: roster, deck and configuration assembly.
//!
//! The turn engine never creates players or cards itself. This module is
//! the setup side of the boundary:
//! - `GameBoardBuilder` collects roster, deck, board and rules and validates
//!   them into a `GameBoard`
//! - `standard_deck` is the reference ten-card deck, five per role

mod builder;
mod deck;

pub use builder::GameBoardBuilder;
pub use deck::standard_deck;
