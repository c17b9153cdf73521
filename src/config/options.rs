// src/config/options.rs
use std::num::NonZeroU32;
use std::time::Duration;

use super::consts::*;

/// Process-wide payout knobs, mutated by user input.
#[derive(Clone, Debug, PartialEq)]
pub struct PayoutConfig {
    /// Non-negative; validated before it gets here.
    pub pool_amount: f64,
    pub dynamic_shares_enabled: bool,
    /// Weight given to newly added participants while dynamic shares are on.
    pub dynamic_shares_default: NonZeroU32,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            pool_amount: 0.0,
            dynamic_shares_enabled: false,
            dynamic_shares_default: NonZeroU32::MIN,
        }
    }
}

impl PayoutConfig {
    /// `Some(default)` only while dynamic shares are on.
    #[inline]
    pub fn dynamic_default(&self) -> Option<NonZeroU32> {
        self.dynamic_shares_enabled.then_some(self.dynamic_shares_default)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    /// Resolve pasted names to character ids through ESI.
    pub esi_lookup: bool,
    pub esi_url: String,
    pub timeout_secs: u64,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            esi_lookup: true,
            esi_url: s!(ESI_IDS_URL),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ImportOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
