//! Decision policies for the All-Together square.
//!
//! When a player lands on All-Together every Dominated player picks one
//! capital kind to claim from the Dominant. The engine asks a
//! `CapitalChooser` for each pick instead of deciding itself, so a front end
//! can forward the question to a human and tests can force the answer.

use crate::core::{CapitalKind, Player, PlayerId, RandomSource};

/// Picks the capital kind a Dominated player claims.
pub trait CapitalChooser<R: RandomSource> {
    /// Choose for the Dominated player `id`.
    ///
    /// `dominant` is the Dominant's state before any transfer of this
    /// All-Together has happened.
    fn choose_capital(
        &mut self,
        id: PlayerId,
        player: &Player,
        dominant: &Player,
        rng: &mut R,
    ) -> CapitalKind;
}

/// Uniformly random pick. Stand-in for a real player decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomChooser;

impl<R: RandomSource> CapitalChooser<R> for RandomChooser {
    fn choose_capital(&mut self, _: PlayerId, _: &Player, _: &Player, rng: &mut R) -> CapitalKind {
        CapitalKind::ALL[rng.gen_index(CapitalKind::ALL.len())]
    }
}

/// Claims the kind the Dominant holds most of.
///
/// Ties go to the kind listed first in `CapitalKind::ALL`. Never touches
/// the random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyChooser;

impl<R: RandomSource> CapitalChooser<R> for GreedyChooser {
    fn choose_capital(
        &mut self,
        _: PlayerId,
        _: &Player,
        dominant: &Player,
        _: &mut R,
    ) -> CapitalKind {
        // max_by_key keeps the last maximum, so scan in reverse.
        CapitalKind::ALL
            .into_iter()
            .rev()
            .max_by_key(|&kind| dominant.capital(kind))
            .unwrap_or(CapitalKind::Financial)
    }
}

/// Adapts a closure into a chooser.
///
/// ```
/// use capital_struggle::core::{CapitalKind, GameRng};
/// use capital_struggle::rules::{CapitalChooser, ChooseWith};
///
/// let chooser = ChooseWith::new(|_, _, _| CapitalKind::Symbolic);
/// let _boxed: Box<dyn CapitalChooser<GameRng>> = Box::new(chooser);
/// ```
pub struct ChooseWith<F>(pub F);

impl<F> ChooseWith<F>
where
    F: FnMut(PlayerId, &Player, &Player) -> CapitalKind,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<R, F> CapitalChooser<R> for ChooseWith<F>
where
    R: RandomSource,
    F: FnMut(PlayerId, &Player, &Player) -> CapitalKind,
{
    fn choose_capital(
        &mut self,
        id: PlayerId,
        player: &Player,
        dominant: &Player,
        _: &mut R,
    ) -> CapitalKind {
        (self.0)(id, player, dominant)
    }
}
