//! What a resolved turn did.
//!
//! Used for:
//! - Reporting the result of `play_turn` to the caller
//! - The game's turn history
//! - Asserting on resolution in tests

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::SquareKind;
use crate::cards::Card;
use crate::core::{CapitalKind, PlayerId};

/// Capital moved from the Dominant to one Dominated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Receiving Dominated player.
    pub to: PlayerId,
    pub kind: CapitalKind,
    /// Amount actually moved; 0 when the Dominant had none left.
    pub amount: u32,
}

/// Transfers of one All-Together, in roster order.
/// SmallVec avoids heap allocation for typical rosters.
pub type Transfers = SmallVec<[Transfer; 4]>;

/// Resolution of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player was penalised and forfeited the turn.
    Skipped,
    /// A normal square: this card was drawn and applied.
    CardDrawn(Card),
    Revolution,
    GeneralStrike,
    AllTogether(Transfers),
    Prison,
    /// Moved past the last square; nothing to resolve.
    OffBoard,
}

/// A completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Value of the turn counter when the turn was played.
    pub turn: u32,

    /// Player of turn.
    pub player: PlayerId,

    /// Die result; `None` for a skipped turn.
    pub roll: Option<u32>,

    /// Position after moving.
    pub position: usize,

    /// Square landed on; `None` when skipped or off the board.
    pub square: Option<SquareKind>,

    pub outcome: TurnOutcome,
}

impl TurnRecord {
    #[must_use]
    pub fn was_skipped(&self) -> bool {
        matches!(self.outcome, TurnOutcome::Skipped)
    }

    /// The drawn card, if this turn drew one.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match &self.outcome {
            TurnOutcome::CardDrawn(card) => Some(card),
            _ => None,
        }
    }
}
