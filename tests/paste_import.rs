// tests/paste_import.rs
use std::collections::HashMap;

use fc_payout::error::ImportError;
use fc_payout::import::{Directory, ImportOutput, ImportSource, PasteSource};
use fc_payout::progress::Progress;
use fc_payout::specs::paste::{self, PasteFormat};

struct FakeDirectory(HashMap<String, String>);

impl Directory for FakeDirectory {
    fn resolve(&self, names: &[String]) -> Result<HashMap<String, String>, ImportError> {
        Ok(names
            .iter()
            .filter_map(|n| self.0.get(n).map(|id| (n.clone(), id.clone())))
            .collect())
    }
}

struct DownDirectory;

impl Directory for DownDirectory {
    fn resolve(&self, _names: &[String]) -> Result<HashMap<String, String>, ImportError> {
        Err(ImportError::Io(std::io::Error::other("esi unreachable")))
    }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    failed: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn item_failed(&mut self, label: &str, _reason: &str) { self.failed.push(label.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn names_and_ids(out: ImportOutput) -> Vec<(String, Option<String>)> {
    match out {
        ImportOutput::Batch(b) => b.records.into_iter().map(|r| (r.name, r.external_id)).collect(),
        ImportOutput::Teams(_) => panic!("paste never yields teams"),
    }
}

#[test]
fn detects_formats() {
    assert_eq!(PasteFormat::detect("charID-1\nA"), PasteFormat::Tagged);
    assert_eq!(PasteFormat::detect("CHARID:1\nA"), PasteFormat::Tagged);
    assert_eq!(PasteFormat::detect("A\tBattleship\tJita"), PasteFormat::FatLink);
    assert_eq!(PasteFormat::detect("A\nB"), PasteFormat::Names);
}

#[test]
fn tagged_pairs_tags_with_following_name() {
    let raw = "charID-111\nFirst Pilot\ncharid 222\n  Second Pilot  \ncharID:333\ncharID-444\nFourth\nnoise\ncharID-55x\nBroken\n";
    let (fmt, recs) = paste::parse(raw);
    assert_eq!(fmt, PasteFormat::Tagged);
    let got: Vec<(&str, Option<&str>)> = recs.iter().map(|r| (r.name.as_str(), r.external_id.as_deref())).collect();
    assert_eq!(
        got,
        vec![("First Pilot", Some("111")), ("Second Pilot", Some("222")), ("Fourth", Some("444"))]
    );
}

#[test]
fn fat_link_takes_first_field_and_drops_npcs() {
    let raw = "Alpha One\tMuninn\tHome\n\nHyleus Tyrannos\tNPC\tX\n  Bravo Two \tScimitar\tHome\n";
    let recs = paste::parse_fat_link(raw);
    let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha One", "Bravo Two"]);
}

#[test]
fn plain_names_trimmed_blank_lines_skipped() {
    let recs = paste::parse_names("  Ann \n\n\tBob\nTyrannos Strategos\n");
    let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);
}

#[test]
fn lookup_fills_only_known_names() {
    let dir = FakeDirectory(HashMap::from([(String::from("Ann"), String::from("9001"))]));
    let src = PasteSource::new("Ann\nBob\n").with_directory(Box::new(dir));
    let got = names_and_ids(src.collect(None).unwrap());
    assert_eq!(
        got,
        vec![(String::from("Ann"), Some(String::from("9001"))), (String::from("Bob"), None)]
    );
}

#[test]
fn lookup_failure_still_imports() {
    let src = PasteSource::new("Ann\nBob\n").with_directory(Box::new(DownDirectory));
    let got = names_and_ids(src.collect(None).unwrap());
    assert_eq!(got.len(), 2);
    assert!(got.iter().all(|(_, id)| id.is_none()));
}

#[test]
fn tagged_ids_skip_lookup() {
    let src = PasteSource::new("charID-5\nAnn\n").with_directory(Box::new(DownDirectory));
    let got = names_and_ids(src.collect(None).unwrap());
    assert_eq!(got, vec![(String::from("Ann"), Some(String::from("5")))]);
}

#[test]
fn blank_paste_is_empty_input() {
    let err = PasteSource::new("  \n ").collect(None).unwrap_err();
    assert!(matches!(err, ImportError::EmptyInput));
}

#[test]
fn lookup_reports_through_progress() {
    let dir = FakeDirectory(HashMap::from([(String::from("Ann"), String::from("9001"))]));
    let src = PasteSource::new("Ann\nBob\n").with_directory(Box::new(dir));
    let mut rec = Recorder::default();
    let got = names_and_ids(src.collect(Some(&mut rec)).unwrap());
    assert_eq!(got[0].1.as_deref(), Some("9001"));
    assert_eq!(rec.lines, vec![String::from("Looking up 2 name(s)…")]);
    assert!(rec.failed.is_empty());
    assert!(rec.finished);
}

#[test]
fn lookup_failure_reported_and_import_finishes() {
    let src = PasteSource::new("Ann\n").with_directory(Box::new(DownDirectory));
    let mut rec = Recorder::default();
    let got = names_and_ids(src.collect(Some(&mut rec)).unwrap());
    assert_eq!(got, vec![(String::from("Ann"), None)]);
    assert_eq!(rec.failed, vec![String::from("name lookup")]);
    assert!(rec.finished);
}

#[test]
fn pasted_names_are_taken_literally() {
    let recs = paste::parse_names("Tom &amp; Jerry\n  A&lt;B  \n");
    let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Tom &amp; Jerry", "A&lt;B"]);
}
