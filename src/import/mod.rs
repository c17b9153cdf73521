// src/import/mod.rs
//! Import sources: where roster batches come from.
//!
//! Every source implements `ImportSource` and runs off the UI thread (see
//! `job`). Sources never touch the session; they hand back an
//! `ImportOutput` that the owner of the session applies.
mod battle_report;
pub mod directory;
pub mod job;
mod killmail;
mod paste;

pub use battle_report::BattleReportSource;
pub use directory::{Directory, EsiDirectory};
pub use job::{ImportEvent, ImportJob};
pub use killmail::KillmailSource;
pub use paste::PasteSource;

pub use crate::specs::battle_report::TeamRoster;
pub use crate::specs::ImportRecord;

use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::{
    config::options::ImportOptions,
    core::net,
    error::ImportError,
    payout::Participant,
    progress::Progress,
    specs::accept_name,
};

/// Records ready to merge into the roster, plus an optional human note
/// (e.g. dropped value summed from killmails).
#[derive(Clone, Debug, PartialEq)]
pub struct ImportBatch {
    pub source: &'static str,
    pub records: Vec<ImportRecord>,
    pub note: Option<String>,
}

impl ImportBatch {
    /// Re-applies the name contract so no source can leak blanks or NPCs.
    pub fn new(source: &'static str, records: Vec<ImportRecord>) -> Self {
        let records = records
            .into_iter()
            .filter_map(|r| accept_name(&r.name).map(|name| ImportRecord { name, external_id: r.external_id }))
            .collect();
        Self { source, records, note: None }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn from_team(team: &TeamRoster) -> Self {
        Self::new("battle report", team.records())
    }

    #[inline] pub fn len(&self) -> usize { self.records.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn into_participants(self) -> impl Iterator<Item = Participant> {
        self.records
            .into_iter()
            .map(|r| Participant::new(r.name).with_external_id(r.external_id))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ImportOutput {
    Batch(ImportBatch),
    /// Battle reports: the user must pick a side before anything is added.
    Teams(Vec<TeamRoster>),
}

pub trait ImportSource: Send {
    fn label(&self) -> &'static str;

    /// Blocking: fetch + parse. Lookup failures degrade to records without ids.
    fn collect(&self, progress: Option<&mut dyn Progress>) -> Result<ImportOutput, ImportError>;
}

/// A page given either as a URL to fetch or as already-saved HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageInput {
    Url(String),
    File(PathBuf),
    Html(String),
}

impl PageInput {
    pub fn label(&self) -> String {
        match self {
            PageInput::Url(u) => u.clone(),
            PageInput::File(p) => p.display().to_string(),
            PageInput::Html(_) => s!("pasted page"),
        }
    }

    pub fn needs_network(&self) -> bool {
        matches!(self, PageInput::Url(_))
    }

    pub(crate) fn load(&self, client: Option<&Client>) -> Result<String, ImportError> {
        match self {
            PageInput::Url(url) => match client {
                Some(c) => net::http_get(c, url),
                None => net::http_get(&net::client(&ImportOptions::default())?, url),
            },
            PageInput::File(path) => Ok(fs::read_to_string(path)?),
            PageInput::Html(html) => Ok(html.clone()),
        }
    }
}
