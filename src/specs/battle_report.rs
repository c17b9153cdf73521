// src/specs/battle_report.rs
//! Import *spec* for battle report pages (br.evetools.org).
//!
//! Page shape we rely on:
//! - `<h4 ...>Team A ...</h4>` headers split the composition into teams.
//! - Each team section carries `allyID-<n>` / `corpID-<n>` markers (image
//!   alts) for the alliances and corporations on that side.
//! - Pilots are `<a href=".../character/<id>/">Name</a>` links, each followed
//!   closely by the affiliation markers of its corp/alliance.
//!
//! A pilot belongs to the team owning the first alliance marker after its
//! link (falling back to the corp marker) within `BR_AFFILIATION_WINDOW`
//! bytes. Pilots with no attributable team are skipped. Affiliation names
//! come from `alliance/<id>/` and `corporation/<id>/` links anywhere in the
//! page.
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::config::consts::BR_AFFILIATION_WINDOW;
use crate::core::html::{digits_at, find_ci, inner_after_open_tag, next_tag_block_ci, text_until_tag};
use crate::core::sanitize::normalize_entities;
use crate::error::ImportError;

use super::{accept_name, ImportRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrCharacter {
    pub id: String,
    pub name: String,
}

/// One side of the fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRoster {
    pub letter: char,
    /// "Team A"
    pub name: String,
    /// Sorted alliance/corp names joined by ", ", or "Unknown".
    pub affiliations: String,
    pub characters: Vec<BrCharacter>,
}

impl TeamRoster {
    pub fn pilot_count(&self) -> usize { self.characters.len() }

    pub fn records(&self) -> Vec<ImportRecord> {
        self.characters
            .iter()
            .map(|c| ImportRecord::new(c.name.clone(), Some(c.id.clone())))
            .collect()
    }
}

#[derive(Default)]
struct TeamAcc {
    chars: Vec<BrCharacter>,
    alliances: BTreeSet<String>,
    corps: BTreeSet<String>,
}

pub fn parse(doc: &str) -> Result<Vec<TeamRoster>, ImportError> {
    if !doc.contains("Team A") && !doc.contains("Team B") {
        return Err(ImportError::NoTeamData);
    }

    let (alliance_to_team, corp_to_team) = affiliation_owners(doc);
    logd!(
        "BR: {} alliance(s), {} corp(s) mapped to teams",
        alliance_to_team.len(),
        corp_to_team.len()
    );

    let mut teams: BTreeMap<char, TeamAcc> = BTreeMap::new();

    for (pos, id, raw_name) in character_links(doc) {
        let Some(name) = accept_name(&normalize_entities(raw_name)) else { continue };

        let window = window_after(doc, pos, BR_AFFILIATION_WINDOW);
        let ally_id = marker_id(window, "allyID-");
        let corp_id = marker_id(window, "corpID-");

        let letter = ally_id
            .and_then(|a| alliance_to_team.get(a))
            .or_else(|| corp_id.and_then(|c| corp_to_team.get(c)));
        let Some(&letter) = letter else { continue };

        let acc = teams.entry(letter).or_default();
        if acc.chars.iter().any(|c| c.id == id) { continue; }
        acc.chars.push(BrCharacter { id: s!(id), name });
        if let Some(a) = ally_id { acc.alliances.insert(s!(a)); }
        if let Some(c) = corp_id { acc.corps.insert(s!(c)); }
    }

    let out: Vec<TeamRoster> = teams
        .into_iter()
        .map(|(letter, acc)| {
            let mut names: BTreeSet<String> = BTreeSet::new();
            for a in &acc.alliances {
                if let Some(n) = linked_name(doc, "alliance/", a) { names.insert(n); }
            }
            for c in &acc.corps {
                if let Some(n) = linked_name(doc, "corporation/", c) { names.insert(n); }
            }
            let affiliations = if names.is_empty() {
                s!("Unknown")
            } else {
                names.into_iter().collect::<Vec<_>>().join(", ")
            };
            TeamRoster {
                letter,
                name: format!("Team {letter}"),
                affiliations,
                characters: acc.chars,
            }
        })
        .collect();

    if out.is_empty() {
        return Err(ImportError::NoTeams);
    }
    Ok(out)
}

/// Pick a team by letter ("A", "team b", ...).
pub fn select<'a>(teams: &'a [TeamRoster], wanted: &str) -> Result<&'a TeamRoster, ImportError> {
    let w = wanted.trim();
    let w = w
        .get(..5)
        .filter(|p| p.eq_ignore_ascii_case("team "))
        .map_or(w, |_| w[5..].trim());
    let mut chars = w.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            let c = c.to_ascii_uppercase();
            teams
                .iter()
                .find(|t| t.letter == c)
                .ok_or_else(|| ImportError::UnknownTeam(s!(wanted)))
        }
        _ => Err(ImportError::UnknownTeam(s!(wanted))),
    }
}

/* ---------- helpers ---------- */

/// `(letter, start, end)` of the text each `Team X` header owns.
fn team_sections(doc: &str) -> Vec<(char, usize, usize)> {
    let mut headers: Vec<(char, usize, usize)> = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, "<h4", "</h4>", pos) {
        pos = e;
        let inner = inner_after_open_tag(&doc[s..e]);
        if inner.contains('<') { continue; }
        let Some(rest) = inner.strip_prefix("Team ") else { continue };
        match rest.chars().next() {
            Some(letter) if letter.is_ascii_uppercase() => headers.push((letter, s, e)),
            _ => {}
        }
    }

    let mut out = Vec::with_capacity(headers.len());
    for (i, &(letter, _, end)) in headers.iter().enumerate() {
        let stop = headers.get(i + 1).map(|h| h.1).unwrap_or(doc.len());
        out.push((letter, end, stop));
    }
    out
}

/// First team to mention an alliance/corp owns it.
fn affiliation_owners(doc: &str) -> (HashMap<String, char>, HashMap<String, char>) {
    let mut alliances = HashMap::new();
    let mut corps = HashMap::new();
    for (letter, start, end) in team_sections(doc) {
        let chunk = &doc[start..end];
        for id in all_marker_ids(chunk, "allyID-") {
            alliances.entry(s!(id)).or_insert(letter);
        }
        for id in all_marker_ids(chunk, "corpID-") {
            corps.entry(s!(id)).or_insert(letter);
        }
    }
    (alliances, corps)
}

fn all_marker_ids<'a>(s: &'a str, marker: &str) -> Vec<&'a str> {
    let mut out = Vec::new();
    let mut from = 0usize;
    while let Some(p) = s[from..].find(marker).map(|o| o + from) {
        from = p + marker.len();
        let id = digits_at(s, from);
        if !id.is_empty() { out.push(id); }
    }
    out
}

fn marker_id<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    all_marker_ids(s, marker).into_iter().next()
}

/// `(href position, character id, link text)` for every
/// `href="...character/<id>/"...>Name<` in the page.
fn character_links(doc: &str) -> Vec<(usize, &str, &str)> {
    const HREF: &str = "href=\"";
    let mut out = Vec::new();
    let mut from = 0usize;
    while let Some(pos) = find_ci(doc, HREF, from) {
        let val_start = pos + HREF.len();
        let Some(val_len) = doc[val_start..].find('"') else { break };
        let val_end = val_start + val_len;
        from = val_end + 1;

        let href = &doc[val_start..val_end];
        let Some(id) = href
            .rfind("character/")
            .map(|c| &href[c + "character/".len()..])
            .and_then(|tail| tail.strip_suffix('/'))
            .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
        else {
            continue;
        };

        let Some(gt) = doc[val_end..].find('>').map(|g| g + val_end) else { break };
        let text = text_until_tag(doc, gt + 1);
        if text.trim().is_empty() { continue; }
        out.push((pos, id, text));
    }
    out
}

/// Link text of the first `<kind><id>/"...>Name<` anchor.
fn linked_name(doc: &str, kind: &str, id: &str) -> Option<String> {
    let needle = join!(kind, id, "/\"");
    let at = doc.find(&needle)? + needle.len();
    let gt = doc[at..].find('>')? + at;
    let name = normalize_entities(text_until_tag(doc, gt + 1)).trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn window_after(doc: &str, start: usize, len: usize) -> &str {
    let mut end = (start + len).min(doc.len());
    while !doc.is_char_boundary(end) { end -= 1; }
    &doc[start..end]
}
