//! Square kinds and the fixed board sequence.

use serde::{Deserialize, Serialize};

use crate::core::config::BoardConfig;
use crate::core::GameError;

/// Behaviour category of a board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    /// Draw a card for your role.
    #[default]
    Normal,
    /// Pool and redistribute everyone's capital.
    Revolution,
    /// The Dominant loses capital and a turn.
    GeneralStrike,
    /// Every Dominated player takes capital from the Dominant.
    AllTogether,
    /// Dominated lose a turn; the Dominant pays a fine.
    Prison,
}

/// Fixed-length sequence of squares.
///
/// ```
/// use capital_struggle::board::{Board, SquareKind};
///
/// let board = Board::standard();
/// assert_eq!(board.len(), 76);
/// assert_eq!(board.square_at(19), Some(SquareKind::Revolution));
/// assert_eq!(board.square_at(20), Some(SquareKind::Normal));
/// assert_eq!(board.square_at(76), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: Vec<SquareKind>,
}

impl Board {
    /// Build a board from a validated config.
    pub fn from_config(config: &BoardConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// The reference layout.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(&BoardConfig::standard())
    }

    // Caller has validated `config`.
    fn build(config: &BoardConfig) -> Self {
        let mut squares = vec![SquareKind::Normal; config.length];
        for special in &config.specials {
            for &pos in &special.positions {
                squares[pos] = special.kind;
            }
        }
        Self { squares }
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Square at a position, or `None` past the end of the board.
    #[must_use]
    pub fn square_at(&self, position: usize) -> Option<SquareKind> {
        self.squares.get(position).copied()
    }

    /// Positions holding a given kind, ascending.
    pub fn positions_of(&self, kind: SquareKind) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(move |&(_, &k)| k == kind)
            .map(|(i, _)| i)
    }

    /// Iterate over all squares in order.
    pub fn iter(&self) -> impl Iterator<Item = SquareKind> + '_ {
        self.squares.iter().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_specials() {
        let board = Board::standard();

        let strike: Vec<_> = board.positions_of(SquareKind::GeneralStrike).collect();
        let revolution: Vec<_> = board.positions_of(SquareKind::Revolution).collect();
        let prison: Vec<_> = board.positions_of(SquareKind::Prison).collect();
        let together: Vec<_> = board.positions_of(SquareKind::AllTogether).collect();

        assert_eq!(strike, vec![11, 59]);
        assert_eq!(revolution, vec![19, 68]);
        assert_eq!(prison, vec![28, 48]);
        assert_eq!(together, vec![37, 71]);
        assert_eq!(board.positions_of(SquareKind::Normal).count(), 76 - 8);
    }

    #[test]
    fn test_from_config_matches_standard() {
        let board = Board::from_config(&BoardConfig::standard()).unwrap();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_custom_board() {
        let config = BoardConfig::new(5).with_special(SquareKind::AllTogether, [0, 4]);
        let board = Board::from_config(&config).unwrap();

        let squares: Vec<_> = board.iter().collect();
        assert_eq!(
            squares,
            vec![
                SquareKind::AllTogether,
                SquareKind::Normal,
                SquareKind::Normal,
                SquareKind::Normal,
                SquareKind::AllTogether,
            ]
        );
        assert_eq!(board.square_at(5), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = BoardConfig::new(5).with_special(SquareKind::Prison, [7]);
        assert!(Board::from_config(&config).is_err());
    }
}
