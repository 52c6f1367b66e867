//! Board layout: square kinds indexed by position.
//!
//! The board is built once from a `BoardConfig` and never mutated. Square
//! kinds are the only thing the turn engine reads from it.

pub mod layout;

pub use layout::{Board, SquareKind};

// Re-export board config from core for convenience
pub use crate::core::config::{BoardConfig, SpecialSquares};
