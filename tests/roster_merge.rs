// tests/roster_merge.rs
use std::collections::HashSet;

use fc_payout::payout::{roster::AddOutcome, Participant, Roster, Session};

fn with_id(name: &str, id: Option<&str>) -> Participant {
    Participant::new(name).with_external_id(id.map(String::from))
}

#[test]
fn same_name_never_duplicates() {
    let mut r = Roster::new();
    let first = r.add(with_id("Pilot", None), None);
    let second = r.add(with_id("Pilot", None), None);
    assert!(matches!(first, AddOutcome::Appended(_)));
    assert_eq!(second, AddOutcome::Unchanged(first.id()));
    assert_eq!(r.len(), 1);
}

#[test]
fn later_id_fills_missing_but_never_overwrites() {
    let mut r = Roster::new();
    let id = r.add(with_id("Pilot", None), None).id();

    assert_eq!(r.add(with_id("Pilot", Some("42")), None), AddOutcome::MergedId(id));
    assert_eq!(r.get(id).unwrap().external_id.as_deref(), Some("42"));

    assert_eq!(r.add(with_id("Pilot", Some("99")), None), AddOutcome::Unchanged(id));
    assert_eq!(r.get(id).unwrap().external_id.as_deref(), Some("42"));
}

#[test]
fn names_are_matched_exactly() {
    let mut r = Roster::new();
    r.add(Participant::new("Pilot"), None);
    r.add(Participant::new("pilot"), None);
    assert_eq!(r.len(), 2);
}

#[test]
fn ids_are_never_reused() {
    let mut r = Roster::new();
    let a = r.add(Participant::new("A"), None).id();
    r.remove(&HashSet::from([a]));
    let b = r.add(Participant::new("A"), None).id();
    assert_ne!(a, b);
}

#[test]
fn merge_keeps_user_edits() {
    let mut s = Session::new();
    let id = s.add(Participant::new("Pilot")).id();
    s.set_included(id, false).unwrap();

    let summary = s.add_batch(vec![with_id("Pilot", Some("7")), with_id("New", None)]);
    assert_eq!(summary.appended, 1);
    assert_eq!(summary.merged, 1);
    assert_eq!(summary.total(), 2);

    let p = s.roster().get(id).unwrap();
    assert!(!p.included);
    assert_eq!(p.external_id.as_deref(), Some("7"));
}

#[test]
fn remove_only_drops_selected() {
    let mut s = Session::new();
    let a = s.add(Participant::new("A")).id();
    let b = s.add(Participant::new("B")).id();
    let c = s.add(Participant::new("C")).id();

    assert_eq!(s.remove(&HashSet::from([a, c])), 2);
    let left: Vec<_> = s.roster().iter().map(|p| p.id()).collect();
    assert_eq!(left, vec![b]);
    assert_eq!(s.remove(&HashSet::new()), 0);
}
