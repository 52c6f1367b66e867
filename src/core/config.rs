//! Game configuration types.
//!
//! Games configure the engine at startup by providing:
//! - `BoardConfig`: board length and which positions hold special squares
//! - `RulesConfig`: starting capitals, die size and penalty amounts
//!
//! Both are plain serde types so an external collaborator can load
//! alternate layouts or house rules. Defaults reproduce the reference rules.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Role;
use crate::board::SquareKind;

/// Length of the reference board.
pub const STANDARD_BOARD_LENGTH: usize = 76;

/// A set of positions sharing one special square kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSquares {
    pub kind: SquareKind,
    pub positions: Vec<usize>,
}

/// Board layout configuration.
///
/// Every position not listed in `specials` is a `Normal` square.
///
/// ## Example
///
/// ```
/// use capital_struggle::board::SquareKind;
/// use capital_struggle::core::BoardConfig;
///
/// let config = BoardConfig::new(20)
///     .with_special(SquareKind::Prison, [5, 15])
///     .with_special(SquareKind::Revolution, [10]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of squares.
    pub length: usize,

    /// Special square placement.
    #[serde(default)]
    pub specials: Vec<SpecialSquares>,
}

impl BoardConfig {
    /// An all-normal board of the given length.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            specials: Vec::new(),
        }
    }

    /// The reference 76-square layout.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_BOARD_LENGTH)
            .with_special(SquareKind::GeneralStrike, [11, 59])
            .with_special(SquareKind::Revolution, [19, 68])
            .with_special(SquareKind::Prison, [28, 48])
            .with_special(SquareKind::AllTogether, [37, 71])
    }

    /// Place `kind` at every given position.
    #[must_use]
    pub fn with_special(
        mut self,
        kind: SquareKind,
        positions: impl IntoIterator<Item = usize>,
    ) -> Self {
        self.specials.push(SpecialSquares {
            kind,
            positions: positions.into_iter().collect(),
        });
        self
    }

    /// Check that the layout is usable.
    ///
    /// Rejects an empty board, out-of-range positions, `Normal` listed as a
    /// special kind, and positions claimed more than once.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.length == 0 {
            return Err(GameError::InvalidArgument("board length must be positive".to_string()));
        }

        let mut claimed = vec![false; self.length];
        for special in &self.specials {
            if special.kind == SquareKind::Normal {
                return Err(GameError::InvalidArgument(
                    "normal squares cannot be listed as special".to_string(),
                ));
            }
            for &pos in &special.positions {
                let slot = claimed.get_mut(pos).ok_or_else(|| {
                    GameError::InvalidArgument(format!(
                        "special square at {pos} is outside a board of length {}",
                        self.length
                    ))
                })?;
                if *slot {
                    return Err(GameError::InvalidArgument(format!(
                        "position {pos} has more than one special square"
                    )));
                }
                *slot = true;
            }
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Amount of each capital the Dominant starts with.
    pub dominant_starting_capital: u32,

    /// Amount of each capital every Dominated player starts with.
    pub dominated_starting_capital: u32,

    /// Sides on the movement die.
    pub die_faces: u32,

    /// Financial capital the Dominant loses on a general strike.
    pub strike_financial_penalty: u32,

    /// Loss of every other capital on a general strike.
    pub strike_other_penalty: u32,

    /// Financial capital the Dominant pays when sent to prison.
    pub prison_fine: u32,

    /// Most a Dominated player can take from the Dominant on All-Together.
    pub all_together_cap: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            dominant_starting_capital: 10,
            dominated_starting_capital: 2,
            die_faces: 6,
            strike_financial_penalty: 6,
            strike_other_penalty: 1,
            prison_fine: 10,
            all_together_cap: 2,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting amount per capital kind for a role.
    #[must_use]
    pub fn starting_capital(&self, role: Role) -> u32 {
        match role {
            Role::Dominant => self.dominant_starting_capital,
            Role::Dominated => self.dominated_starting_capital,
        }
    }

    /// Set starting capitals for both roles.
    #[must_use]
    pub fn with_starting_capital(mut self, dominant: u32, dominated: u32) -> Self {
        self.dominant_starting_capital = dominant;
        self.dominated_starting_capital = dominated;
        self
    }

    #[must_use]
    pub fn with_die_faces(mut self, faces: u32) -> Self {
        self.die_faces = faces;
        self
    }

    /// Set general strike penalties.
    #[must_use]
    pub fn with_strike_penalty(mut self, financial: u32, other: u32) -> Self {
        self.strike_financial_penalty = financial;
        self.strike_other_penalty = other;
        self
    }

    #[must_use]
    pub fn with_prison_fine(mut self, fine: u32) -> Self {
        self.prison_fine = fine;
        self
    }

    #[must_use]
    pub fn with_all_together_cap(mut self, cap: u32) -> Self {
        self.all_together_cap = cap;
        self
    }

    /// Check that the rules are playable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.die_faces == 0 {
            return Err(GameError::InvalidArgument("die needs at least one face".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_config() {
        let config = BoardConfig::standard();

        assert_eq!(config.length, 76);
        assert_eq!(config.specials.len(), 4);
        assert!(config.validate().is_ok());
        assert_eq!(BoardConfig::default(), config);
    }

    #[test]
    fn test_board_config_rejects_out_of_range() {
        let config = BoardConfig::new(10).with_special(SquareKind::Prison, [10]);
        assert!(config.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_board_config_rejects_overlap() {
        let config = BoardConfig::new(10)
            .with_special(SquareKind::Prison, [3])
            .with_special(SquareKind::Revolution, [3]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_config_rejects_normal_special() {
        let config = BoardConfig::new(10).with_special(SquareKind::Normal, [3]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_board_config_rejects_empty() {
        assert!(BoardConfig::new(0).validate().is_err());
    }

    #[test]
    fn test_board_config_from_json() {
        let json = r#"{
            "length": 12,
            "specials": [
                { "kind": "Prison", "positions": [4, 8] },
                { "kind": "AllTogether", "positions": [6] }
            ]
        }"#;

        let config: BoardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.length, 12);
        assert_eq!(config.specials[0].kind, SquareKind::Prison);
        assert_eq!(config.specials[1].positions, vec![6]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rules_config_defaults() {
        let rules = RulesConfig::default();

        assert_eq!(rules.starting_capital(Role::Dominant), 10);
        assert_eq!(rules.starting_capital(Role::Dominated), 2);
        assert_eq!(rules.die_faces, 6);
        assert_eq!(rules.strike_financial_penalty, 6);
        assert_eq!(rules.strike_other_penalty, 1);
        assert_eq!(rules.prison_fine, 10);
        assert_eq!(rules.all_together_cap, 2);
    }

    #[test]
    fn test_rules_config_builder() {
        let rules = RulesConfig::new()
            .with_starting_capital(20, 4)
            .with_die_faces(8)
            .with_prison_fine(3);

        assert_eq!(rules.starting_capital(Role::Dominant), 20);
        assert_eq!(rules.starting_capital(Role::Dominated), 4);
        assert_eq!(rules.die_faces, 8);
        assert_eq!(rules.prison_fine, 3);
        assert!(rules.validate().is_ok());
        assert!(RulesConfig::new().with_die_faces(0).validate().is_err());
    }

    #[test]
    fn test_rules_config_partial_json() {
        let rules: RulesConfig = serde_json::from_str(r#"{ "prison_fine": 4 }"#).unwrap();
        assert_eq!(rules.prison_fine, 4);
        assert_eq!(rules.die_faces, 6);
    }
}
