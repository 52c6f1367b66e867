//! Builder for `GameBoard`.

use crate::board::{Board, BoardConfig};
use crate::cards::{Card, Deck};
use crate::core::{GameError, GameRng, Player, RandomSource, RulesConfig};
use crate::rules::{CapitalChooser, GameBoard, RandomChooser};

/// Builder for creating a `GameBoard`.
///
/// Defaults: standard board, default rules, empty deck, `RandomChooser`.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use capital_struggle::core::{Character, GameRng, Player};
/// use capital_struggle::rules::GreedyChooser;
/// use capital_struggle::setup::{standard_deck, GameBoardBuilder};
///
/// let worker = Arc::new(Character::new("Worker", 3, "Solidarity", "Hard"));
/// let owner = Arc::new(Character::new("Owner", 0, "Inheritance", "Easy"));
///
/// let mut game = GameBoardBuilder::new()
///     .dominant(Player::dominant("Vera", owner))
///     .dominated(Player::dominated("Ana", Arc::clone(&worker)))
///     .dominated(Player::dominated("Rui", worker))
///     .deck(standard_deck())
///     .chooser(GreedyChooser)
///     .build(GameRng::new(42))
///     .unwrap();
///
/// game.start_game();
/// assert_eq!(game.player_count(), 3);
/// ```
pub struct GameBoardBuilder<R: RandomSource = GameRng> {
    dominant: Option<Player>,
    dominated: Vec<Player>,
    cards: Vec<Card>,
    board: BoardConfig,
    rules: RulesConfig,
    chooser: Option<Box<dyn CapitalChooser<R>>>,
}

impl<R: RandomSource> Default for GameBoardBuilder<R> {
    fn default() -> Self {
        Self {
            dominant: None,
            dominated: Vec::new(),
            cards: Vec::new(),
            board: BoardConfig::standard(),
            rules: RulesConfig::default(),
            chooser: None,
        }
    }
}

impl<R: RandomSource> GameBoardBuilder<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Dominant player.
    pub fn dominant(mut self, player: Player) -> Self {
        self.dominant = Some(player);
        self
    }

    /// Append a Dominated player. Call order is turn order.
    pub fn dominated(mut self, player: Player) -> Self {
        self.dominated.push(player);
        self
    }

    /// Append several Dominated players.
    pub fn dominated_players(mut self, players: impl IntoIterator<Item = Player>) -> Self {
        self.dominated.extend(players);
        self
    }

    /// Add one card to the deck.
    pub fn card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Add every card of `deck`.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.cards.extend(deck.cards().iter().cloned());
        self
    }

    pub fn board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Policy deciding All-Together claims.
    pub fn chooser(mut self, chooser: impl CapitalChooser<R> + 'static) -> Self {
        let chooser: Box<dyn CapitalChooser<R>> = Box::new(chooser);
        self.chooser = Some(chooser);
        self
    }

    /// Validate everything and build the game.
    pub fn build(self, rng: R) -> Result<GameBoard<R>, GameError> {
        let dominant = self.dominant.ok_or_else(|| {
            GameError::InvalidArgument("a dominant player is required".to_string())
        })?;
        let board = Board::from_config(&self.board)?;
        let chooser = self
            .chooser
            .unwrap_or_else(|| Box::new(RandomChooser) as Box<dyn CapitalChooser<R>>);

        GameBoard::from_parts(
            board,
            self.rules,
            Deck::new(self.cards),
            dominant,
            self.dominated,
            rng,
            chooser,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::board::SquareKind;
    use crate::core::{Character, ScriptedRng};
    use crate::setup::standard_deck;

    fn character() -> Arc<Character> {
        Arc::new(Character::new("Test", 0, "", ""))
    }

    #[test]
    fn test_builder_defaults() {
        let game = GameBoardBuilder::new()
            .dominant(Player::dominant("Boss", character()))
            .dominated(Player::dominated("Ana", character()))
            .build(ScriptedRng::default())
            .unwrap();

        assert_eq!(game.board().len(), 76);
        assert_eq!(game.rules(), &RulesConfig::default());
        assert!(game.deck().is_empty());
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_builder_requires_dominant() {
        let result = GameBoardBuilder::new()
            .dominated(Player::dominated("Ana", character()))
            .build(ScriptedRng::default());

        assert!(result.unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_builder_rejects_bad_board() {
        let result = GameBoardBuilder::new()
            .dominant(Player::dominant("Boss", character()))
            .board(BoardConfig::new(4).with_special(SquareKind::Prison, [4]))
            .build(ScriptedRng::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_bad_rules() {
        let result = GameBoardBuilder::new()
            .dominant(Player::dominant("Boss", character()))
            .rules(RulesConfig::new().with_die_faces(0))
            .build(ScriptedRng::default());

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_custom_rules_apply() {
        let mut game = GameBoardBuilder::new()
            .dominant(Player::dominant("Boss", character()))
            .dominated_players((0..2).map(|i| Player::dominated(format!("P{i}"), character())))
            .deck(standard_deck())
            .card(standard_deck().cards()[0].clone())
            .rules(RulesConfig::new().with_starting_capital(50, 5))
            .build(ScriptedRng::default())
            .unwrap();

        game.start_game();

        assert_eq!(game.deck().len(), 11);
        assert_eq!(game.dominant().capital.total(), 200);
        assert_eq!(game.dominated()[1].capital.total(), 20);
    }
}
