//! Card definitions.
//!
//! A `Card` is immutable once created. Its `id` tells physical copies apart
//! even when two cards carry the same text and effect.

use serde::{Deserialize, Serialize};

use crate::core::{Player, Role};
use crate::effects::CardEffect;

/// Identifier of a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A one-shot, role-restricted capital card.
///
/// ## Example
///
/// ```
/// use capital_struggle::cards::{Card, CardId};
/// use capital_struggle::core::{CapitalKind, Role};
/// use capital_struggle::effects::CardEffect;
///
/// let bonus = Card::new(
///     CardId::new(1),
///     "You got a bonus! Add 5 financial capital.",
///     Role::Dominated,
///     CardEffect::add(CapitalKind::Financial, 5),
/// );
///
/// assert!(bonus.playable_by(Role::Dominated));
/// assert!(!bonus.playable_by(Role::Dominant));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Instance identifier.
    pub id: CardId,

    /// Display text.
    pub description: String,

    /// Only players of this role may draw the card.
    pub role: Role,

    /// What the card does to its drawer.
    pub effect: CardEffect,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, description: impl Into<String>, role: Role, effect: CardEffect) -> Self {
        Self {
            id,
            description: description.into(),
            role,
            effect,
        }
    }

    #[must_use]
    pub fn playable_by(&self, role: Role) -> bool {
        self.role == role
    }

    /// Apply this card's effect to the player who drew it.
    pub fn apply(&self, player: &mut Player) -> i64 {
        self.effect.apply(player)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{CapitalKind, Character};

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_apply() {
        let card = Card::new(
            CardId::new(3),
            "Scandal",
            Role::Dominant,
            CardEffect::subtract(CapitalKind::Social, 8),
        );
        let mut player = Player::dominant("Boss", Arc::new(Character::new("Boss", 0, "", "")));
        player.capital.fill(10);

        assert_eq!(card.apply(&mut player), -8);
        assert_eq!(player.capital(CapitalKind::Social), 2);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(
            CardId::new(1),
            "Medal",
            Role::Dominated,
            CardEffect::add(CapitalKind::Symbolic, 4),
        );

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
