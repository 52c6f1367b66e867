//! Core engine types: capitals, players, RNG, configuration, errors.
//!
//! These are the building blocks every other module uses. Games configure
//! the engine via `BoardConfig` and `RulesConfig` rather than modifying it.

pub mod capital;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use capital::{CapitalKind, CapitalLedger};
pub use config::{BoardConfig, RulesConfig, SpecialSquares, STANDARD_BOARD_LENGTH};
pub use error::GameError;
pub use player::{Character, Player, PlayerId, Role};
pub use rng::{GameRng, RandomSource, ScriptedRng};
