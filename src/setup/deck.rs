//! The reference deck.

use crate::cards::{Card, CardId, Deck};
use crate::core::{CapitalKind, Role};
use crate::effects::CardEffect;

/// Five Dominated cards (ids 1-5) followed by five Dominant cards (ids 6-10),
/// unshuffled.
#[must_use]
pub fn standard_deck() -> Deck {
    use CapitalKind::{Cultural, Financial, Social, Symbolic};

    let dominated = [
        ("You got a bonus! Add 5 financial capital.", CardEffect::add(Financial, 5)),
        ("You paid a fine! Remove 3 financial capital.", CardEffect::subtract(Financial, 3)),
        ("You learned a new skill! Add 2 cultural capital.", CardEffect::add(Cultural, 2)),
        ("You lost some friends! Remove 1 social capital.", CardEffect::subtract(Social, 1)),
        ("You won a medal! Add 4 symbolic capital.", CardEffect::add(Symbolic, 4)),
    ];
    let dominant = [
        ("Your investment paid off! Add 20 financial capital.", CardEffect::add(Financial, 20)),
        (
            "You took a heavy loss! Remove 15 financial capital.",
            CardEffect::subtract(Financial, 15),
        ),
        ("You made a great discovery! Add 10 cultural capital.", CardEffect::add(Cultural, 10)),
        ("You were caught in a scandal! Remove 8 social capital.", CardEffect::subtract(Social, 8)),
        (
            "You were honoured for your contribution! Add 15 symbolic capital.",
            CardEffect::add(Symbolic, 15),
        ),
    ];

    let tagged = dominated
        .into_iter()
        .map(|(text, effect)| (text, Role::Dominated, effect))
        .chain(dominant.into_iter().map(|(text, effect)| (text, Role::Dominant, effect)));

    tagged
        .enumerate()
        .map(|(i, (text, role, effect))| Card::new(CardId::new(i as u32 + 1), text, role, effect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_split() {
        let deck = standard_deck();

        assert_eq!(deck.len(), 10);
        assert_eq!(deck.count_for(Role::Dominated), 5);
        assert_eq!(deck.count_for(Role::Dominant), 5);
    }

    #[test]
    fn test_standard_deck_ids_unique() {
        let deck = standard_deck();
        let mut ids: Vec<_> = deck.iter().map(|c| c.id.raw()).collect();
        ids.dedup();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_standard_deck_order() {
        let deck = standard_deck();
        assert_eq!(deck.cards()[0].effect, CardEffect::add(CapitalKind::Financial, 5));
        assert_eq!(deck.cards()[5].role, Role::Dominant);
        assert_eq!(deck.cards()[5].effect, CardEffect::add(CapitalKind::Financial, 20));
    }
}
