// src/payout/calculator.rs
//
// Splits the pool 50/50 between included scouts and included line members
// when at least one included scout exists; otherwise the line gets it all.
// Uniform mode divides each half by head count, dynamic mode by summed
// share weight. No rounding here; only display rounds.

use crate::config::options::PayoutConfig;

use super::participant::Role;
use super::roster::Roster;

/// Cohort totals from the last recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CohortShares {
    pub scouts: usize,
    pub lines: usize,
    pub scout_weight: u64,
    pub line_weight: u64,
    pub scout_pool: f64,
    pub line_pool: f64,
    /// Uniform mode: what each scout gets. Dynamic mode: value of one share.
    pub per_scout_share: f64,
    /// Uniform mode: what each line member gets. Dynamic mode: value of one share.
    pub per_line_share: f64,
    pub dynamic: bool,
}

impl CohortShares {
    #[inline]
    pub fn included(&self) -> usize { self.scouts + self.lines }

    /// Pool only; no participant state touched.
    pub fn compute(roster: &Roster, config: &PayoutConfig) -> Self {
        let mut out = CohortShares { dynamic: config.dynamic_shares_enabled, ..Default::default() };

        for p in roster.iter().filter(|p| p.included) {
            let w = u64::from(p.share_weight.get());
            match p.role {
                Role::Scout => { out.scouts += 1; out.scout_weight += w; }
                Role::Line  => { out.lines  += 1; out.line_weight  += w; }
            }
        }

        let pool = config.pool_amount;
        if out.scouts > 0 {
            out.scout_pool = pool * 0.5;
            out.line_pool = pool * 0.5;
        } else {
            out.scout_pool = 0.0;
            out.line_pool = pool;
        }

        let (scout_div, line_div) = if out.dynamic {
            (out.scout_weight, out.line_weight)
        } else {
            (out.scouts as u64, out.lines as u64)
        };
        out.per_scout_share = divide(out.scout_pool, scout_div);
        out.per_line_share = divide(out.line_pool, line_div);
        out
    }

    /// Share for one participant under these totals.
    pub fn share_for(&self, role: Role, weight: u32) -> f64 {
        let unit = match role {
            Role::Scout => self.per_scout_share,
            Role::Line => self.per_line_share,
        };
        if self.dynamic { unit * f64::from(weight) } else { unit }
    }
}

#[inline]
fn divide(pool: f64, by: u64) -> f64 {
    if by == 0 { 0.0 } else { pool / by as f64 }
}

/// Rewrite every participant's share in place. Total over any roster and any
/// non-negative pool.
pub fn recompute(roster: &mut Roster, config: &PayoutConfig) -> CohortShares {
    let totals = CohortShares::compute(roster, config);

    for p in roster.iter_mut() {
        p.share = if p.included {
            totals.share_for(p.role, p.share_weight.get())
        } else {
            0.0
        };
    }

    logd!(
        "Recompute: pool={:.2} dynamic={} scouts={} lines={} scout_unit={:.4} line_unit={:.4}",
        config.pool_amount, totals.dynamic, totals.scouts, totals.lines,
        totals.per_scout_share, totals.per_line_share
    );
    totals
}
