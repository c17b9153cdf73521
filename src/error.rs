// src/error.rs
use thiserror::Error;

use crate::payout::ParticipantId;

/// Rejections from the input collaborators and stale participant handles.
#[derive(Debug, Error)]
pub enum PayoutError {
    #[error("invalid buyback amount: {0:?}")]
    InvalidPoolAmount(String),

    #[error("share count must be a positive whole number, got {0:?}")]
    InvalidShareWeight(String),

    #[error("dynamic share default must be a positive whole number or 'off', got {0:?}")]
    InvalidDynamicDefault(String),

    #[error("no participant with id {0}")]
    UnknownParticipant(ParticipantId),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("page loaded but no team data found; it may still be loading")]
    NoTeamData,

    #[error("no teams found")]
    NoTeams,

    #[error("unknown team {0:?}")]
    UnknownTeam(String),

    #[error("nothing to import")]
    EmptyInput,

    #[error("import worker stopped without a result")]
    Disconnected,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Payout(#[from] PayoutError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
