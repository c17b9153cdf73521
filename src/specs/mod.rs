// src/specs/mod.rs
//! # Import "specs"
//!
//! One module per kind of input the tool can read a roster from. Each spec
//! encodes *where the pilots live* in that input and turns it into plain
//! `ImportRecord`s (name + optional character id).
//!
//! ## What lives here
//! - **Pure parsing** of pasted text (`paste`), battle report pages
//!   (`battle_report`) and killmail pages (`killmail`).
//! - Tolerant scanning with `core::html` helpers: case-insensitive tag
//!   blocks, attribute lookup, short local windows instead of whole-document
//!   patterns.
//! - The import contract every source shares: names trimmed, NPCs dropped
//!   (`accept_name`).
//!
//! ## What does **not** live here
//! - Networking, ESI lookups, threads: that is `import`.
//! - Roster merging and payout math: that is `payout`.
//!
//! Specs are testable offline against captured or hand-written fixtures.
pub mod battle_report;
pub mod killmail;
pub mod paste;

use crate::config::consts::is_ignored_name;

/// One pilot produced by an import source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportRecord {
    pub name: String,
    pub external_id: Option<String>,
}

impl ImportRecord {
    pub fn new(name: impl Into<String>, external_id: Option<String>) -> Self {
        Self { name: name.into(), external_id }
    }
}

/// Trimmed name, or `None` for blanks and known NPCs. Entity decoding is
/// the page parser's job; text is taken as given.
pub fn accept_name(raw: &str) -> Option<String> {
    let name = raw.trim().to_string();
    if name.is_empty() || is_ignored_name(&name) {
        return None;
    }
    Some(name)
}
