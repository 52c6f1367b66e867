//! Card system: definitions and the live deck.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of a physical card in the deck
//! - `Card`: Description, role restriction and effect
//! - `Deck`: Shrinking pool of cards, drafted by role
//!
//! A card leaves the deck the moment it is drawn; there is no discard pile
//! and no reshuffle.

pub mod deck;
pub mod definition;

pub use deck::Deck;
pub use definition::{Card, CardId};
