//! The turn engine.
//!
//! `GameBoard` owns everything a game needs: board layout, deck, roster,
//! turn counter, random source, All-Together decision policy and the turn
//! history. External code calls `start_game` once and then `play_turn`
//! repeatedly; everything else is either a query or one of the square
//! effects, exposed so callers and tests can trigger them directly.
//!
//! ## Turn resolution
//!
//! 1. The player of turn is `players[turn % player_count]`.
//! 2. A penalised player clears the flag and forfeits the turn. No die is
//!    rolled.
//! 3. Otherwise roll, move forward, and resolve the landed square.
//! 4. The turn counter advances whether or not resolution succeeded.

use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info, trace, warn};

use super::chooser::{CapitalChooser, RandomChooser};
use super::outcome::{Transfer, Transfers, TurnOutcome, TurnRecord};
use crate::board::{Board, SquareKind};
use crate::cards::{Card, Deck};
use crate::core::{
    CapitalKind, GameError, GameRng, Player, PlayerId, RandomSource, Role, RulesConfig,
};

/// Most Dominated players a roster can hold (ids are `u8`, slot 0 is the
/// Dominant).
pub const MAX_DOMINATED: usize = u8::MAX as usize - 1;

/// Turn engine state.
///
/// Generic over the random source so tests can inject a `ScriptedRng`;
/// games normally use the seedable `GameRng`.
pub struct GameBoard<R: RandomSource = GameRng> {
    board: Board,
    rules: RulesConfig,
    deck: Deck,
    dominant: Player,
    dominated: Vec<Player>,
    turn: u32,
    rng: R,
    chooser: Box<dyn CapitalChooser<R>>,
    history: Vector<TurnRecord>,
    started: bool,
}

impl<R: RandomSource> GameBoard<R> {
    /// Create a game on the standard board with default rules.
    ///
    /// All-Together choices are made by `RandomChooser`.
    pub fn new(
        dominant: Player,
        dominated: Vec<Player>,
        deck: Deck,
        rng: R,
    ) -> Result<Self, GameError> {
        Self::from_parts(
            Board::standard(),
            RulesConfig::default(),
            deck,
            dominant,
            dominated,
            rng,
            Box::new(RandomChooser),
        )
    }

    /// Assemble a game from fully specified parts. Validates the roster.
    pub(crate) fn from_parts(
        board: Board,
        rules: RulesConfig,
        deck: Deck,
        dominant: Player,
        dominated: Vec<Player>,
        rng: R,
        chooser: Box<dyn CapitalChooser<R>>,
    ) -> Result<Self, GameError> {
        if dominant.role() != Role::Dominant {
            return Err(GameError::InvalidArgument(format!(
                "player {} in the dominant slot is not dominant",
                dominant.name()
            )));
        }
        if let Some(p) = dominated.iter().find(|p| p.role() != Role::Dominated) {
            return Err(GameError::InvalidArgument(format!(
                "player {} in the dominated list is not dominated",
                p.name()
            )));
        }
        if dominated.len() > MAX_DOMINATED {
            return Err(GameError::InvalidArgument(format!(
                "at most {MAX_DOMINATED} dominated players supported, got {}",
                dominated.len()
            )));
        }
        rules.validate()?;

        Ok(Self {
            board,
            rules,
            deck,
            dominant,
            dominated,
            turn: 0,
            rng,
            chooser,
            history: Vector::new(),
            started: false,
        })
    }

    // === Queries ===

    /// Turns played so far, including skipped and failed ones.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.dominated.len() + 1
    }

    /// All players in rotation order: Dominant first, then Dominated.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        std::iter::once(&self.dominant).chain(self.dominated.iter())
    }

    /// Look up a player by roster slot.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        match id.index() {
            0 => Some(&self.dominant),
            i => self.dominated.get(i - 1),
        }
    }

    #[must_use]
    pub fn dominant(&self) -> &Player {
        &self.dominant
    }

    #[must_use]
    pub fn dominated(&self) -> &[Player] {
        &self.dominated
    }

    /// Slots of the Dominated players, in roster order.
    pub fn dominated_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.dominated.len() as u8).map(PlayerId::dominated)
    }

    /// Whose turn `play_turn` will resolve next.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::new((self.turn as usize % self.player_count()) as u8)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Completed turns, oldest first.
    ///
    /// Every successful `play_turn` appends one record, including skipped
    /// turns and `OffBoard` turns of players past the last square. There is
    /// no end-of-game detection, so a caller looping until everyone has left
    /// the board should stop on `has_left_board`.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// The injected random source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Whether a player has moved past the last square.
    #[must_use]
    pub fn has_left_board(&self, id: PlayerId) -> bool {
        self.player(id)
            .is_some_and(|p| p.position() >= self.board.len())
    }

    // === Setup ===

    /// Shuffle the deck and hand out starting capital.
    ///
    /// Every capital of every player is overwritten with the role's starting
    /// amount. Meant to be called once; calling again reshuffles and wipes
    /// capital progress.
    pub fn start_game(&mut self) {
        if self.started {
            warn!(turn = self.turn, "start_game called again; capitals reset");
        }

        self.deck.shuffle(&mut self.rng);

        self.dominant
            .capital
            .fill(self.rules.starting_capital(Role::Dominant));
        let dominated_start = self.rules.starting_capital(Role::Dominated);
        for player in &mut self.dominated {
            player.capital.fill(dominated_start);
        }

        self.started = true;
        info!(
            players = self.player_count(),
            cards = self.deck.len(),
            "game started"
        );
    }

    // === Turn ===

    /// Resolve one turn for the current player.
    ///
    /// The turn counter advances even when resolution fails; the movement
    /// made before the failure stands. Only successful turns are recorded in
    /// the history.
    pub fn play_turn(&mut self) -> Result<TurnRecord, GameError> {
        let player = self.current_player_id();
        let result = self.resolve_turn(player);
        self.turn += 1;

        match result {
            Ok(record) => {
                debug!(
                    turn = record.turn,
                    player = %record.player,
                    roll = ?record.roll,
                    position = record.position,
                    square = ?record.square,
                    "turn resolved"
                );
                self.history.push_back(record.clone());
                Ok(record)
            }
            Err(err) => {
                warn!(turn = self.turn - 1, %player, error = %err, "turn failed");
                Err(err)
            }
        }
    }

    fn resolve_turn(&mut self, id: PlayerId) -> Result<TurnRecord, GameError> {
        let turn = self.turn;
        let player = self.slot_mut(id);
        let role = player.role();

        if player.skip_turn {
            player.skip_turn = false;
            return Ok(TurnRecord {
                turn,
                player: id,
                roll: None,
                position: player.position(),
                square: None,
                outcome: TurnOutcome::Skipped,
            });
        }

        let roll = self.roll_die();
        let position = self.slot_mut(id).advance(roll as usize);
        let square = self.board.square_at(position);

        let outcome = match square {
            None => TurnOutcome::OffBoard,
            Some(SquareKind::Normal) => {
                let card = self.draft_card(role)?;
                card.apply(self.slot_mut(id));
                TurnOutcome::CardDrawn(card)
            }
            Some(SquareKind::Revolution) => {
                self.make_revolution();
                TurnOutcome::Revolution
            }
            Some(SquareKind::GeneralStrike) => {
                self.make_general_strike();
                TurnOutcome::GeneralStrike
            }
            Some(SquareKind::AllTogether) => {
                let choices = self.collect_choices();
                TurnOutcome::AllTogether(self.make_all_together(&choices)?)
            }
            Some(SquareKind::Prison) => {
                self.go_to_prison(id)?;
                TurnOutcome::Prison
            }
        };

        Ok(TurnRecord {
            turn,
            player: id,
            roll: Some(roll),
            position,
            square,
            outcome,
        })
    }

    /// Roll the movement die.
    pub fn roll_die(&mut self) -> u32 {
        self.rng.roll_die(self.rules.die_faces)
    }

    /// Ask the chooser for every Dominated player's pick.
    fn collect_choices(&mut self) -> FxHashMap<PlayerId, CapitalKind> {
        let mut choices = FxHashMap::default();
        for (i, player) in self.dominated.iter().enumerate() {
            let id = PlayerId::dominated(i as u8);
            let kind = self
                .chooser
                .choose_capital(id, player, &self.dominant, &mut self.rng);
            choices.insert(id, kind);
        }
        choices
    }

    // === Square effects ===

    /// Pool every capital and split it evenly across the roster.
    ///
    /// For each kind the total is summed over all players before any ledger
    /// is touched. Each player receives `total / n`; the Dominant also keeps
    /// the `total % n` remainder.
    pub fn make_revolution(&mut self) {
        let n = self.player_count() as u64;

        for kind in CapitalKind::ALL {
            let total: u64 = self.players().map(|p| u64::from(p.capital(kind))).sum();
            let share = (total / n) as u32;
            let leftover = (total % n) as u32;

            self.dominant.capital.set(kind, share.saturating_add(leftover));
            for player in &mut self.dominated {
                player.capital.set(kind, share);
            }
            trace!(%kind, total, share, leftover, "capital redistributed");
        }

        debug!(players = n, "revolution");
    }

    /// Penalise the Dominant, whoever triggered the strike.
    ///
    /// The Dominant skips their next turn and loses the configured amount of
    /// financial capital and of each other kind.
    pub fn make_general_strike(&mut self) {
        let dominant = &mut self.dominant;
        dominant.skip_turn = true;

        for kind in CapitalKind::ALL {
            let penalty = match kind {
                CapitalKind::Financial => self.rules.strike_financial_penalty,
                _ => self.rules.strike_other_penalty,
            };
            dominant.subtract_capital(kind, penalty);
        }

        debug!("general strike");
    }

    /// Every Dominated player takes up to the configured cap of their chosen
    /// capital from the Dominant.
    ///
    /// `choices` must hold exactly one entry per Dominated player and nothing
    /// else, or `InvalidArgument` is returned and nothing changes. Transfers
    /// happen in roster order, each seeing the Dominant's balance after the
    /// previous ones.
    pub fn make_all_together<S: BuildHasher>(
        &mut self,
        choices: &HashMap<PlayerId, CapitalKind, S>,
    ) -> Result<Transfers, GameError> {
        if choices.len() != self.dominated.len() {
            return Err(GameError::InvalidArgument(format!(
                "expected one capital choice per dominated player ({}), got {}",
                self.dominated.len(),
                choices.len()
            )));
        }
        if let Some(missing) = self.dominated_ids().find(|id| !choices.contains_key(id)) {
            return Err(GameError::InvalidArgument(format!(
                "no capital choice for {missing}"
            )));
        }

        let cap = self.rules.all_together_cap;
        let mut transfers = Transfers::new();

        for (i, player) in self.dominated.iter_mut().enumerate() {
            let to = PlayerId::dominated(i as u8);
            let kind = choices[&to];
            let amount = self.dominant.subtract_capital(kind, cap);
            player.add_capital(kind, amount);

            trace!(%to, %kind, amount, "all-together transfer");
            transfers.push(Transfer { to, kind, amount });
        }

        debug!(transfers = transfers.len(), "all together");
        Ok(transfers)
    }

    /// Send a player to prison.
    ///
    /// A Dominated player loses their next turn. The Dominant instead pays
    /// the prison fine in financial capital and keeps playing.
    pub fn go_to_prison(&mut self, id: PlayerId) -> Result<(), GameError> {
        let fine = self.rules.prison_fine;
        let player = self
            .player_slot_mut(id)
            .ok_or_else(|| GameError::InvalidArgument(format!("unknown player {id}")))?;

        match player.role() {
            Role::Dominated => player.skip_turn = true,
            Role::Dominant => {
                player.subtract_capital(CapitalKind::Financial, fine);
            }
        }

        debug!(player = %id, "prison");
        Ok(())
    }

    /// Draw a uniformly random card for `role` and remove it from the deck.
    pub fn draft_card(&mut self, role: Role) -> Result<Card, GameError> {
        let result = self.deck.draft(role, &mut self.rng);
        if result.is_err() {
            warn!(%role, remaining = self.deck.len(), "no cards left for role");
        }
        result
    }

    // === Internal ===

    fn player_slot_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        match id.index() {
            0 => Some(&mut self.dominant),
            i => self.dominated.get_mut(i - 1),
        }
    }

    /// Slot of a roster member. Only called with ids produced by the engine.
    fn slot_mut(&mut self, id: PlayerId) -> &mut Player {
        match id.index() {
            0 => &mut self.dominant,
            i => &mut self.dominated[i - 1],
        }
    }
}

impl<R: RandomSource + fmt::Debug> fmt::Debug for GameBoard<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBoard")
            .field("turn", &self.turn)
            .field("dominant", &self.dominant)
            .field("dominated", &self.dominated)
            .field("deck", &self.deck.len())
            .field("board", &self.board.len())
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}
