// src/specs/paste.rs
//! Pasted pilot lists. Three shapes are recognised:
//!
//! - **Tagged** (battle report composition copy): `charID-<digits>` on one
//!   line, the pilot name on the next. Separator may be `-`, `:`, a space or
//!   nothing; the prefix is matched case-insensitively.
//! - **FAT link**: tab-separated rows, the name is the first field.
//! - **Names**: one name per line.
//!
//! Only the tagged shape carries ids; the others need a directory lookup.
use super::{accept_name, ImportRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasteFormat {
    Tagged,
    FatLink,
    Names,
}

impl PasteFormat {
    pub fn detect(raw: &str) -> Self {
        if crate::core::html::find_ci(raw, "charid", 0).is_some() {
            PasteFormat::Tagged
        } else if raw.contains('\t') {
            PasteFormat::FatLink
        } else {
            PasteFormat::Names
        }
    }
}

pub fn parse(raw: &str) -> (PasteFormat, Vec<ImportRecord>) {
    let format = PasteFormat::detect(raw);
    let records = match format {
        PasteFormat::Tagged => parse_tagged(raw),
        PasteFormat::FatLink => parse_fat_link(raw),
        PasteFormat::Names => parse_names(raw),
    };
    (format, records)
}

/// `charID-123\nName` pairs. A tag line must hold nothing but the tag.
pub fn parse_tagged(raw: &str) -> Vec<ImportRecord> {
    let mut out = Vec::new();
    let mut lines = raw.lines().peekable();

    while let Some(line) = lines.next() {
        let Some(id) = char_id_tag(line) else { continue };
        let Some(next) = lines.peek() else { break };
        // A second tag right after means this one had no name; let the loop see it.
        if char_id_tag(next).is_some() { continue; }
        let next = lines.next().unwrap_or_default();
        if let Some(name) = accept_name(next) {
            out.push(ImportRecord::new(name, Some(s!(id))));
        }
    }
    out
}

/// Digits of a `charID<sep><digits>` line.
fn char_id_tag(line: &str) -> Option<&str> {
    const TAG: &str = "charid";
    let line = line.trim();
    let head = line.get(..TAG.len())?;
    if !head.eq_ignore_ascii_case(TAG) {
        return None;
    }
    let mut rest = &line[TAG.len()..];
    if let Some(stripped) = rest.strip_prefix(['-', ':', ' ']) {
        rest = stripped;
    }
    let digits = crate::core::html::digits_at(rest, 0);
    if digits.is_empty() || digits.len() != rest.len() {
        return None;
    }
    Some(digits)
}

pub fn parse_fat_link(raw: &str) -> Vec<ImportRecord> {
    raw.lines()
        .filter_map(|line| line.split('\t').next())
        .filter_map(accept_name)
        .map(|name| ImportRecord::new(name, None))
        .collect()
}

pub fn parse_names(raw: &str) -> Vec<ImportRecord> {
    raw.lines()
        .filter_map(accept_name)
        .map(|name| ImportRecord::new(name, None))
        .collect()
}
