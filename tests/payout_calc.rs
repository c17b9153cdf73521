// tests/payout_calc.rs
use std::num::NonZeroU32;

use fc_payout::payout::{Participant, ParticipantId, Role, Session};

fn nz(n: u32) -> NonZeroU32 { NonZeroU32::new(n).unwrap() }

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

fn add(s: &mut Session, name: &str) -> ParticipantId {
    s.add(Participant::new(name)).id()
}

fn share_of(s: &Session, id: ParticipantId) -> f64 {
    s.roster().get(id).unwrap().share()
}

#[test]
fn line_only_roster_splits_whole_pool() {
    let mut s = Session::new();
    let ids: Vec<_> = ["Ann", "Bob", "Cid"].iter().map(|n| add(&mut s, n)).collect();
    s.set_pool_amount(1_000.0).unwrap();

    let t = s.totals();
    assert_eq!(t.scouts, 0);
    assert_eq!(t.per_scout_share, 0.0);
    assert!(close(t.per_line_share * 3.0, 1_000.0));
    let sum: f64 = ids.iter().map(|id| share_of(&s, *id)).sum();
    assert!(close(sum, 1_000.0));
}

#[test]
fn one_scout_two_lines_uniform() {
    let mut s = Session::new();
    let scout = add(&mut s, "Scouty");
    let a = add(&mut s, "Line A");
    let b = add(&mut s, "Line B");
    s.set_role(scout, Role::Scout).unwrap();
    s.set_pool_amount(1_000_000.0).unwrap();

    let t = s.totals();
    assert_eq!(t.scout_pool, 500_000.0);
    assert_eq!(t.line_pool, 500_000.0);
    assert_eq!(t.scout_pool + t.line_pool, 1_000_000.0);
    assert!(close(share_of(&s, scout), 500_000.0));
    assert!(close(share_of(&s, a), 250_000.0));
    assert!(close(share_of(&s, b), 250_000.0));
}

#[test]
fn dynamic_scenario_pool_300() {
    let mut s = Session::new();
    s.enable_dynamic_shares(nz(1));
    let scout = add(&mut s, "Scout");
    let a = add(&mut s, "A");
    let b = add(&mut s, "B");
    s.set_role(scout, Role::Scout).unwrap();
    s.set_share_weight(b, nz(2)).unwrap();
    s.set_pool_amount(300.0).unwrap();

    assert!(close(share_of(&s, scout), 150.0));
    assert!(close(share_of(&s, a), 50.0));
    assert!(close(share_of(&s, b), 100.0));
}

#[test]
fn dynamic_weights_one_two_three() {
    let mut s = Session::new();
    s.enable_dynamic_shares(nz(1));
    let ids: Vec<_> = ["X", "Y", "Z"].iter().map(|n| add(&mut s, n)).collect();
    for (id, w) in ids.iter().zip([1, 2, 3]) {
        s.set_share_weight(*id, nz(w)).unwrap();
    }
    s.set_pool_amount(120.0).unwrap();

    let got: Vec<f64> = ids.iter().map(|id| share_of(&s, *id)).collect();
    assert!(close(got[0], 20.0));
    assert!(close(got[1], 40.0));
    assert!(close(got[2], 60.0));

    // Off again: uniform for everyone, weights kept.
    s.disable_dynamic_shares();
    for id in &ids {
        assert!(close(share_of(&s, *id), 40.0));
    }
    assert_eq!(s.roster().get(ids[2]).unwrap().share_weight, nz(3));
}

#[test]
fn excluded_get_nothing() {
    let mut s = Session::new();
    let scout = add(&mut s, "Scout");
    let a = add(&mut s, "A");
    let gone = add(&mut s, "Gone");
    s.set_role(scout, Role::Scout).unwrap();
    s.enable_dynamic_shares(nz(5));
    s.set_pool_amount(100.0).unwrap();
    s.set_included(gone, false).unwrap();

    assert_eq!(share_of(&s, gone), 0.0);
    assert!(close(share_of(&s, a), 50.0));

    // Excluding the only scout hands the line the whole pool.
    assert!(!s.toggle_included(scout).unwrap());
    assert_eq!(share_of(&s, scout), 0.0);
    assert!(close(share_of(&s, a), 100.0));
}

#[test]
fn enabling_dynamic_resets_weights_and_seeds_new() {
    let mut s = Session::new();
    s.enable_dynamic_shares(nz(2));
    let a = add(&mut s, "A");
    s.set_share_weight(a, nz(7)).unwrap();

    s.enable_dynamic_shares(nz(3));
    assert_eq!(s.roster().get(a).unwrap().share_weight, nz(3));

    let b = add(&mut s, "B");
    assert_eq!(s.roster().get(b).unwrap().share_weight, nz(3));
}

#[test]
fn empty_roster_and_zero_pool_are_total() {
    let mut s = Session::new();
    s.set_pool_amount(500.0).unwrap();
    assert_eq!(s.totals().included(), 0);
    assert_eq!(s.totals().per_line_share, 0.0);

    let a = add(&mut s, "A");
    s.set_pool_amount(0.0).unwrap();
    assert_eq!(share_of(&s, a), 0.0);
}

#[test]
fn bad_pool_amounts_are_rejected_and_keep_previous() {
    let mut s = Session::new();
    s.set_pool_amount(10.0).unwrap();
    assert!(s.set_pool_amount(-1.0).is_err());
    assert!(s.set_pool_amount(f64::NAN).is_err());
    assert_eq!(s.config().pool_amount, 10.0);
}

#[test]
fn unknown_participant_is_an_error() {
    let mut s = Session::new();
    let a = add(&mut s, "A");
    s.remove(&[a].into_iter().collect());
    assert!(s.toggle_role(a).is_err());
    assert!(s.set_share_weight(a, nz(2)).is_err());
}

#[test]
fn clear_empties_roster_and_pool() {
    let mut s = Session::new();
    add(&mut s, "A");
    s.set_pool_amount(99.0).unwrap();
    s.clear();
    assert!(s.roster().is_empty());
    assert_eq!(s.config().pool_amount, 0.0);
}
