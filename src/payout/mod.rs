// src/payout/mod.rs
//! Share computation and roster reconciliation.
//!
//! `Session` is the one piece of mutable state: a `Roster` plus the
//! `PayoutConfig`. Every mutation ends in `calculator::recompute`, so
//! `Participant::share` is always final by the time a `Snapshot` is taken.
pub mod amount;
pub mod calculator;
pub mod participant;
pub mod roster;
pub mod session;
pub mod snapshot;

pub use calculator::{recompute, CohortShares};
pub use participant::{Participant, ParticipantId, Role};
pub use roster::Roster;
pub use session::Session;
pub use snapshot::Snapshot;
