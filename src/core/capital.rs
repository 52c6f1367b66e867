//! Capital kinds and the per-player capital ledger.
//!
//! ## CapitalKind
//!
//! The four abstract resource pools every player holds.
//!
//! ## CapitalLedger
//!
//! Mapping of kind to amount. Amounts are unsigned, so a ledger can never
//! hold a negative value; subtraction clamps at zero instead of failing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One of the four capital pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapitalKind {
    Financial,
    Social,
    Cultural,
    Symbolic,
}

impl CapitalKind {
    /// Every kind, in fixed iteration order.
    pub const ALL: [CapitalKind; 4] = [
        CapitalKind::Financial,
        CapitalKind::Social,
        CapitalKind::Cultural,
        CapitalKind::Symbolic,
    ];
}

impl std::fmt::Display for CapitalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CapitalKind::Financial => "financial",
            CapitalKind::Social => "social",
            CapitalKind::Cultural => "cultural",
            CapitalKind::Symbolic => "symbolic",
        };
        f.write_str(name)
    }
}

/// Capital holdings of a single player.
///
/// Reading a kind that was never written yields 0.
///
/// ```
/// use capital_struggle::core::{CapitalKind, CapitalLedger};
///
/// let mut ledger = CapitalLedger::new();
/// ledger.add(CapitalKind::Social, 3);
/// ledger.subtract(CapitalKind::Social, 5);
///
/// assert_eq!(ledger.get(CapitalKind::Social), 0);
/// assert_eq!(ledger.get(CapitalKind::Symbolic), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalLedger {
    amounts: FxHashMap<CapitalKind, u32>,
}

impl CapitalLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding `amount` of every kind.
    #[must_use]
    pub fn uniform(amount: u32) -> Self {
        let mut ledger = Self::new();
        ledger.fill(amount);
        ledger
    }

    /// Current amount of a kind.
    #[must_use]
    pub fn get(&self, kind: CapitalKind) -> u32 {
        self.amounts.get(&kind).copied().unwrap_or(0)
    }

    /// Overwrite the amount of a kind.
    pub fn set(&mut self, kind: CapitalKind, amount: u32) {
        self.amounts.insert(kind, amount);
    }

    /// Overwrite every kind with the same amount.
    pub fn fill(&mut self, amount: u32) {
        for kind in CapitalKind::ALL {
            self.set(kind, amount);
        }
    }

    /// Increase a kind by `amount`.
    pub fn add(&mut self, kind: CapitalKind, amount: u32) {
        let current = self.get(kind);
        self.set(kind, current.saturating_add(amount));
    }

    /// Decrease a kind by `amount`, stopping at zero.
    ///
    /// Returns how much was actually removed.
    pub fn subtract(&mut self, kind: CapitalKind, amount: u32) -> u32 {
        let current = self.get(kind);
        let removed = current.min(amount);
        self.set(kind, current - removed);
        removed
    }

    /// Sum over all kinds.
    #[must_use]
    pub fn total(&self) -> u64 {
        CapitalKind::ALL.iter().map(|&k| u64::from(self.get(k))).sum()
    }

    /// Iterate over `(kind, amount)` for every kind, absent ones as 0.
    pub fn iter(&self) -> impl Iterator<Item = (CapitalKind, u32)> + '_ {
        CapitalKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }
}
