//! Effect definitions.

use serde::{Deserialize, Serialize};

use crate::core::{CapitalKind, Player};

/// A single capital change applied to the drawing player.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use capital_struggle::core::{CapitalKind, Character, Player};
/// use capital_struggle::effects::CardEffect;
///
/// let mut player = Player::dominated("Ana", Arc::new(Character::new("Worker", 0, "", "")));
/// CardEffect::add(CapitalKind::Cultural, 2).apply(&mut player);
///
/// assert_eq!(player.capital(CapitalKind::Cultural), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// Increase a capital.
    AddCapital { kind: CapitalKind, amount: u32 },

    /// Decrease a capital, clamping at zero.
    SubtractCapital { kind: CapitalKind, amount: u32 },
}

impl CardEffect {
    pub fn add(kind: CapitalKind, amount: u32) -> Self {
        Self::AddCapital { kind, amount }
    }

    pub fn subtract(kind: CapitalKind, amount: u32) -> Self {
        Self::SubtractCapital { kind, amount }
    }

    /// The capital kind this effect touches.
    #[must_use]
    pub fn kind(&self) -> CapitalKind {
        match *self {
            CardEffect::AddCapital { kind, .. } | CardEffect::SubtractCapital { kind, .. } => kind,
        }
    }

    /// Signed nominal change (before clamping).
    #[must_use]
    pub fn delta(&self) -> i64 {
        match *self {
            CardEffect::AddCapital { amount, .. } => i64::from(amount),
            CardEffect::SubtractCapital { amount, .. } => -i64::from(amount),
        }
    }

    /// Apply to a player.
    ///
    /// Returns the signed change actually made, which differs from
    /// `delta()` when a subtraction hits zero.
    pub fn apply(&self, player: &mut Player) -> i64 {
        match *self {
            CardEffect::AddCapital { kind, amount } => {
                player.add_capital(kind, amount);
                i64::from(amount)
            }
            CardEffect::SubtractCapital { kind, amount } => {
                -i64::from(player.subtract_capital(kind, amount))
            }
        }
    }
}

impl std::fmt::Display for CardEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardEffect::AddCapital { kind, amount } => write!(f, "+{amount} {kind}"),
            CardEffect::SubtractCapital { kind, amount } => write!(f, "-{amount} {kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::Character;

    fn player() -> Player {
        Player::dominated("Test", Arc::new(Character::new("Test", 0, "", "")))
    }

    #[test]
    fn test_add_effect() {
        let mut p = player();
        let effect = CardEffect::add(CapitalKind::Financial, 5);

        assert_eq!(effect.apply(&mut p), 5);
        assert_eq!(p.capital(CapitalKind::Financial), 5);
        assert_eq!(effect.kind(), CapitalKind::Financial);
        assert_eq!(effect.delta(), 5);
    }

    #[test]
    fn test_subtract_effect_clamps() {
        let mut p = player();
        p.add_capital(CapitalKind::Social, 1);

        let effect = CardEffect::subtract(CapitalKind::Social, 3);
        assert_eq!(effect.delta(), -3);
        assert_eq!(effect.apply(&mut p), -1);
        assert_eq!(p.capital(CapitalKind::Social), 0);
    }

    #[test]
    fn test_effect_touches_one_kind() {
        let mut p = player();
        p.capital.fill(3);

        CardEffect::subtract(CapitalKind::Symbolic, 2).apply(&mut p);

        assert_eq!(p.capital(CapitalKind::Symbolic), 1);
        for kind in [CapitalKind::Financial, CapitalKind::Social, CapitalKind::Cultural] {
            assert_eq!(p.capital(kind), 3);
        }
    }

    #[test]
    fn test_effect_display() {
        assert_eq!(CardEffect::add(CapitalKind::Cultural, 2).to_string(), "+2 cultural");
        assert_eq!(CardEffect::subtract(CapitalKind::Social, 8).to_string(), "-8 social");
    }

    #[test]
    fn test_effect_serialization() {
        let effect = CardEffect::subtract(CapitalKind::Financial, 15);
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: CardEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
