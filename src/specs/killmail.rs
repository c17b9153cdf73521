// src/specs/killmail.rs
//! Import *spec* for zKillboard killmail pages.
//!
//! - Attackers are `<tr class="attacker">` rows; the pilot is the first
//!   `/character/<id>/` link inside the row's `pilotinfo` cell.
//! - The page summary carries `Dropped: 1,234,567` (ISK value of the drop).
//!
//! Rows without a pilot link (NPCs, structures) are skipped.
use crate::core::html::{attr_value, find_ci, inner_after_open_tag, next_tag_block_ci, open_tag, strip_tags};
use crate::core::sanitize::normalize_entities;

use super::{accept_name, ImportRecord};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KillmailBundle {
    pub attackers: Vec<ImportRecord>,
    pub dropped_isk: Option<f64>,
}

pub fn parse(doc: &str) -> KillmailBundle {
    let mut attackers: Vec<ImportRecord> = Vec::new();

    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(doc, "<tr", "</tr>", pos) {
        let tr = &doc[tr_s..tr_e];
        pos = tr_e;

        let is_attacker = attr_value(open_tag(tr), "class")
            .map(|c| c.split_whitespace().any(|k| k.eq_ignore_ascii_case("attacker")))
            .unwrap_or(false);
        if !is_attacker { continue; }

        let Some(record) = pilot_in_row(tr) else { continue };
        if !attackers.iter().any(|a| a.name == record.name) {
            attackers.push(record);
        }
    }

    KillmailBundle { attackers, dropped_isk: dropped_value(doc) }
}

fn pilot_in_row(tr: &str) -> Option<ImportRecord> {
    let mut td_pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
        let td = &tr[td_s..td_e];
        td_pos = td_e;

        let is_pilot_cell = attr_value(open_tag(td), "class")
            .map(|c| c.split_whitespace().any(|k| k.eq_ignore_ascii_case("pilotinfo")))
            .unwrap_or(false);
        if !is_pilot_cell { continue; }

        let mut a_pos = 0usize;
        while let Some((a_s, a_e)) = next_tag_block_ci(td, "<a", "</a>", a_pos) {
            let a = &td[a_s..a_e];
            a_pos = a_e;

            let Some(href) = attr_value(open_tag(a), "href") else { continue };
            let Some(tail) = href.strip_prefix("/character/") else { continue };
            let id = tail.split('/').next().unwrap_or("");
            if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) { continue; }

            let name = strip_tags(normalize_entities(&inner_after_open_tag(a)));
            return accept_name(&name).map(|n| ImportRecord::new(n, Some(s!(id))));
        }
        return None;
    }
    None
}

/// `Dropped: 1,234.56` → 1234.56
fn dropped_value(doc: &str) -> Option<f64> {
    const LABEL: &str = "Dropped:";
    let at = find_ci(doc, LABEL, 0)? + LABEL.len();
    let mut end = (at + 256).min(doc.len());
    while !doc.is_char_boundary(end) { end -= 1; }

    let text = strip_tags(&doc[at..end]);
    let number: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    number.parse::<f64>().ok()
}
