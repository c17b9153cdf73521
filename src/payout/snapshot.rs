// src/payout/snapshot.rs
use crate::config::options::PayoutConfig;

use super::calculator::CohortShares;
use super::participant::Participant;
use super::roster::Roster;

/// Read-only view handed to rendering and mail formatting.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Sorted by name, case-insensitive; ties keep insertion order.
    pub participants: Vec<Participant>,
    pub scout_count: usize,
    pub line_count: usize,
    pub included_count: usize,
    pub per_scout_share: f64,
    pub per_line_share: f64,
    pub pool_amount: f64,
    pub dynamic: bool,
}

impl Snapshot {
    pub fn capture(roster: &Roster, config: &PayoutConfig, totals: &CohortShares) -> Self {
        let mut participants: Vec<Participant> = roster.iter().cloned().collect();
        participants.sort_by_cached_key(|p| p.name.to_lowercase());

        Self {
            participants,
            scout_count: totals.scouts,
            line_count: totals.lines,
            included_count: totals.included(),
            per_scout_share: totals.per_scout_share,
            per_line_share: totals.per_line_share,
            pool_amount: config.pool_amount,
            dynamic: config.dynamic_shares_enabled,
        }
    }

    pub fn included(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.included)
    }

    pub fn scouts(&self) -> impl Iterator<Item = &Participant> {
        self.included().filter(|p| p.is_scout())
    }

    pub fn lines(&self) -> impl Iterator<Item = &Participant> {
        self.included().filter(|p| !p.is_scout())
    }
}
