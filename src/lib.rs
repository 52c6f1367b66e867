//! # capital-struggle
//!
//! Turn-resolution engine for a board game about economic, social, cultural
//! and symbolic capital. One Dominant player faces any number of Dominated
//! players on a linear board; special squares redistribute capital, penalise
//! the Dominant or send players to prison, and normal squares draw a card
//! restricted to the player's role.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Every die roll, card pick, shuffle and random
//!    capital choice goes through a `RandomSource`. Games use the seedable
//!    `GameRng`; tests script exact outcomes with `ScriptedRng`.
//!
//! 2. **Saturating capital**: Capital amounts are unsigned and subtraction
//!    clamps at zero.
//!
//! 3. **Configuration Over Convention**: Board layout and rule constants come
//!    from `BoardConfig` and `RulesConfig`, with the reference game as the
//!    default.
//!
//! ## Modules
//!
//! - `core`: Capital, players, roles, RNG, configuration, errors
//! - `board`: Square layout
//! - `cards`: Card definitions and the deck
//! - `effects`: Card effects on capital
//! - `rules`: The turn engine and All-Together decision policies
//! - `setup`: Game builder and the reference deck

pub mod core;
pub mod board;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod setup;

// Re-export commonly used types
pub use crate::core::{
    CapitalKind, CapitalLedger,
    Character, Player, PlayerId, Role,
    GameRng, RandomSource, ScriptedRng,
    BoardConfig, RulesConfig, SpecialSquares,
    GameError,
};

pub use crate::board::{Board, SquareKind};

pub use crate::cards::{Card, CardId, Deck};

pub use crate::effects::CardEffect;

pub use crate::rules::{
    GameBoard, TurnRecord, TurnOutcome, Transfer, Transfers,
    CapitalChooser, RandomChooser, GreedyChooser, ChooseWith,
};

pub use crate::setup::{standard_deck, GameBoardBuilder};
