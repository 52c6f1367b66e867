//! Player identification, roles and per-player state.
//!
//! ## PlayerId
//!
//! Position in the roster. The Dominant player always sits at
//! `PlayerId(0)`; Dominated players follow in setup order. This ordering is
//! also the turn rotation.
//!
//! ## Player
//!
//! Name, role, capital ledger, shared character, board position and the
//! one-turn skip flag.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::capital::{CapitalKind, CapitalLedger};

/// Roster slot of a player, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The Dominant player's slot.
    pub const DOMINANT: PlayerId = PlayerId(0);

    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Slot of the `index`-th Dominated player (0-based).
    #[must_use]
    pub const fn dominated(index: u8) -> Self {
        Self(index + 1)
    }

    /// Slot as an index into the rotation.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Slots of a roster of `player_count`, in turn order.
    ///
    /// ```
    /// use capital_struggle::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::DOMINANT);
    /// assert_eq!(players[3], PlayerId::dominated(2));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> + Clone {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Which side of the struggle a player is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Dominant,
    Dominated,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Dominant => f.write_str("dominant"),
            Role::Dominated => f.write_str("dominated"),
        }
    }
}

/// Flavour data attached to a player. Rules never read it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub end_game_bonus: u32,
    pub ability: String,
    pub difficulty: String,
}

impl Character {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        end_game_bonus: u32,
        ability: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            end_game_bonus,
            ability: ability.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// A participant in the game.
///
/// Created by the setup collaborator; mutated only by the turn engine.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    role: Role,
    /// Capital holdings.
    pub capital: CapitalLedger,
    character: Arc<Character>,
    position: usize,
    /// Set by penalty squares; consumed by the next turn of this player.
    pub skip_turn: bool,
}

impl Player {
    /// Create a player at position 0 with an empty ledger.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role, character: Arc<Character>) -> Self {
        Self {
            name: name.into(),
            role,
            capital: CapitalLedger::new(),
            character,
            position: 0,
            skip_turn: false,
        }
    }

    /// Create a Dominant player.
    #[must_use]
    pub fn dominant(name: impl Into<String>, character: Arc<Character>) -> Self {
        Self::new(name, Role::Dominant, character)
    }

    /// Create a Dominated player.
    #[must_use]
    pub fn dominated(name: impl Into<String>, character: Arc<Character>) -> Self {
        Self::new(name, Role::Dominated, character)
    }

    /// Start from a given ledger instead of an empty one.
    #[must_use]
    pub fn with_capital(mut self, capital: CapitalLedger) -> Self {
        self.capital = capital;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn character(&self) -> &Arc<Character> {
        &self.character
    }

    /// Current board position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move forward by `steps` squares. Positions never decrease.
    pub fn advance(&mut self, steps: usize) -> usize {
        self.position = self.position.saturating_add(steps);
        self.position
    }

    #[must_use]
    pub fn capital(&self, kind: CapitalKind) -> u32 {
        self.capital.get(kind)
    }

    pub fn add_capital(&mut self, kind: CapitalKind, amount: u32) {
        self.capital.add(kind, amount);
    }

    /// Remove capital, clamping at zero. Returns the amount actually removed.
    pub fn subtract_capital(&mut self, kind: CapitalKind, amount: u32) -> u32 {
        self.capital.subtract(kind, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character() -> Arc<Character> {
        Arc::new(Character::new("Test", 5, "None", "Easy"))
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::DOMINANT.index(), 0);
        assert_eq!(PlayerId::dominated(0), PlayerId::new(1));
        assert_eq!(format!("{}", PlayerId::new(2)), "Player 2");
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::dominated("Ana", character());

        assert_eq!(player.name(), "Ana");
        assert_eq!(player.role(), Role::Dominated);
        assert_eq!(player.position(), 0);
        assert!(!player.skip_turn);
        assert_eq!(player.capital.total(), 0);
    }

    #[test]
    fn test_player_capital_helpers() {
        let mut player = Player::dominant("Boss", character());
        player.add_capital(CapitalKind::Financial, 5);
        assert_eq!(player.capital(CapitalKind::Financial), 5);

        assert_eq!(player.subtract_capital(CapitalKind::Financial, 3), 3);
        assert_eq!(player.capital(CapitalKind::Financial), 2);

        assert_eq!(player.subtract_capital(CapitalKind::Financial, 9), 2);
        assert_eq!(player.capital(CapitalKind::Financial), 0);
    }

    #[test]
    fn test_advance_only_increases() {
        let mut player = Player::dominated("Ana", character());
        assert_eq!(player.advance(4), 4);
        assert_eq!(player.advance(0), 4);
        assert_eq!(player.advance(6), 10);
    }

    #[test]
    fn test_character_is_shared() {
        let shared = character();
        let a = Player::dominated("A", Arc::clone(&shared));
        let b = Player::dominated("B", Arc::clone(&shared));

        assert!(Arc::ptr_eq(a.character(), b.character()));
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
