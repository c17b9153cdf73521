// src/payout/session.rs
use std::collections::HashSet;
use std::num::NonZeroU32;

use crate::config::options::PayoutConfig;
use crate::error::PayoutError;

use super::calculator::{self, CohortShares};
use super::participant::{Participant, ParticipantId, Role};
use super::roster::{AddOutcome, Roster};
use super::snapshot::Snapshot;

/// Counts from one `add_batch`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub appended: usize,
    pub merged: usize,
    pub unchanged: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize { self.appended + self.merged + self.unchanged }
}

/// Roster + payout config for one interactive session. Mutations go through
/// here, one at a time, and each ends with a recompute.
#[derive(Clone, Debug, Default)]
pub struct Session {
    roster: Roster,
    config: PayoutConfig,
    totals: CohortShares,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn roster(&self) -> &Roster { &self.roster }
    #[inline] pub fn config(&self) -> &PayoutConfig { &self.config }
    #[inline] pub fn totals(&self) -> &CohortShares { &self.totals }

    fn recompute(&mut self) {
        self.totals = calculator::recompute(&mut self.roster, &self.config);
    }

    fn participant_mut(&mut self, id: ParticipantId) -> Result<&mut Participant, PayoutError> {
        self.roster.get_mut(id).ok_or(PayoutError::UnknownParticipant(id))
    }

    pub fn add(&mut self, participant: Participant) -> AddOutcome {
        let outcome = self.roster.add(participant, self.config.dynamic_default());
        logd!("Session: add → {:?}", outcome);
        self.recompute();
        outcome
    }

    /// Add many with a single recompute at the end.
    pub fn add_batch<I>(&mut self, participants: I) -> BatchSummary
    where
        I: IntoIterator<Item = Participant>,
    {
        let default = self.config.dynamic_default();
        let mut summary = BatchSummary::default();
        for p in participants {
            match self.roster.add(p, default) {
                AddOutcome::Appended(_) => summary.appended += 1,
                AddOutcome::MergedId(_) => summary.merged += 1,
                AddOutcome::Unchanged(_) => summary.unchanged += 1,
            }
        }
        logf!(
            "Session: batch appended={} merged={} unchanged={}",
            summary.appended, summary.merged, summary.unchanged
        );
        self.recompute();
        summary
    }

    pub fn remove(&mut self, ids: &HashSet<ParticipantId>) -> usize {
        let n = self.roster.remove(ids);
        logf!("Session: removed {n} participant(s)");
        self.recompute();
        n
    }

    /// Empty the roster and zero the pool.
    pub fn clear(&mut self) {
        self.roster.clear();
        self.config.pool_amount = 0.0;
        logf!("Session: cleared");
        self.recompute();
    }

    pub fn set_included(&mut self, id: ParticipantId, included: bool) -> Result<(), PayoutError> {
        self.participant_mut(id)?.included = included;
        self.recompute();
        Ok(())
    }

    pub fn toggle_included(&mut self, id: ParticipantId) -> Result<bool, PayoutError> {
        let p = self.participant_mut(id)?;
        p.included = !p.included;
        let now = p.included;
        self.recompute();
        Ok(now)
    }

    pub fn set_role(&mut self, id: ParticipantId, role: Role) -> Result<(), PayoutError> {
        self.participant_mut(id)?.role = role;
        self.recompute();
        Ok(())
    }

    pub fn toggle_role(&mut self, id: ParticipantId) -> Result<Role, PayoutError> {
        let p = self.participant_mut(id)?;
        p.role = p.role.toggled();
        let now = p.role;
        self.recompute();
        Ok(now)
    }

    pub fn set_share_weight(&mut self, id: ParticipantId, weight: NonZeroU32) -> Result<(), PayoutError> {
        self.participant_mut(id)?.share_weight = weight;
        self.recompute();
        Ok(())
    }

    /// Caller validates; see `amount::parse_pool_amount`.
    pub fn set_pool_amount(&mut self, amount: f64) -> Result<(), PayoutError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(PayoutError::InvalidPoolAmount(amount.to_string()));
        }
        self.config.pool_amount = amount;
        logf!("Session: pool → {amount:.2}");
        self.recompute();
        Ok(())
    }

    /// Turn dynamic shares on and reset every current weight to `default`.
    pub fn enable_dynamic_shares(&mut self, default: NonZeroU32) {
        self.config.dynamic_shares_enabled = true;
        self.config.dynamic_shares_default = default;
        for p in self.roster.iter_mut() {
            p.share_weight = default;
        }
        logf!("Session: dynamic shares on (default={default})");
        self.recompute();
    }

    /// Weights are kept but ignored until the mode is turned back on.
    pub fn disable_dynamic_shares(&mut self) {
        self.config.dynamic_shares_enabled = false;
        logf!("Session: dynamic shares off");
        self.recompute();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.roster, &self.config, &self.totals)
    }
}
