//! Card effects.
//!
//! Every card carries exactly one `CardEffect`: a single capital delta
//! applied to the player who drew it. The set of effects is closed, so
//! cards stay comparable, serializable and easy to inspect in tests.

mod effect;

pub use effect::CardEffect;
