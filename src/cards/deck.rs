//! The live card pool.
//!
//! The deck only ever shrinks: `draft` removes the exact card it picked,
//! identified by its index in the pool, so duplicates never shadow each
//! other.

use tracing::trace;

use super::definition::Card;
use crate::core::{GameError, RandomSource, Role};

/// Shrinking pool of cards shared by all players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Total cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left that a player of `role` may draw.
    #[must_use]
    pub fn count_for(&self, role: Role) -> usize {
        self.cards.iter().filter(|c| c.playable_by(role)).count()
    }

    /// Cards in current deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Randomise deck order.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return a uniformly chosen card for `role`.
    ///
    /// Fails with `ExhaustedResource` when no card for the role is left; the
    /// deck is untouched in that case and no randomness is consumed.
    pub fn draft<R: RandomSource>(&mut self, role: Role, rng: &mut R) -> Result<Card, GameError> {
        let eligible: Vec<usize> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.playable_by(role))
            .map(|(i, _)| i)
            .collect();

        let Some(&idx) = rng.choose(&eligible) else {
            return Err(GameError::ExhaustedResource(role));
        };

        let card = self.cards.remove(idx);
        trace!(card = %card.id, %role, remaining = self.cards.len(), "drafted card");
        Ok(card)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter)
    }
}
