// benches/payout.rs
use std::num::NonZeroU32;

use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fc_payout::{
    payout::{Participant, Role, Session},
    specs::battle_report,
};

fn big_session(n: usize) -> Session {
    let mut s = Session::new();
    s.add_batch((0..n).map(|i| Participant::new(format!("Pilot {i:05}"))));
    let scouts: Vec<_> = s.roster().iter().step_by(25).map(|p| p.id()).collect();
    for id in scouts {
        let _ = s.set_role(id, Role::Scout);
    }
    let _ = s.set_pool_amount(12_345_678_901.0);
    s
}

/// Synthetic battle report: two teams, `per_team` pilots each.
fn synthetic_br(per_team: usize) -> String {
    let mut doc = String::from("<html><body>");
    for (letter, ally) in [('A', 111), ('B', 222)] {
        doc.push_str(&format!(
            "<h4>Team {letter}</h4><div><img alt=\"allyID-{ally}\"><a href=\"https://zkillboard.com/alliance/{ally}/\">Alliance {ally}</a></div>"
        ));
        for i in 0..per_team {
            doc.push_str(&format!(
                "<div class=\"pilot\"><a href=\"https://zkillboard.com/character/{ally}{i:05}/\">Pilot {letter}{i}</a> <img alt=\"allyID-{ally}\"></div>"
            ));
        }
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_recompute(c: &mut Criterion) {
    let mut s = big_session(5_000);
    let ids: Vec<_> = s.roster().iter().map(|p| p.id()).collect();

    c.bench_function("toggle_included_5000", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let id = ids[i % ids.len()];
            i += 1;
            black_box(s.toggle_included(black_box(id)).ok())
        })
    });

    c.bench_function("dynamic_on_5000", |b| {
        b.iter(|| {
            s.enable_dynamic_shares(black_box(NonZeroU32::MIN));
            black_box(s.totals().per_line_share)
        })
    });

    c.bench_function("snapshot_5000", |b| {
        b.iter(|| black_box(s.snapshot().included_count))
    });
}

fn bench_battle_report(c: &mut Criterion) {
    let doc = synthetic_br(300);

    c.bench_function("br_parse_600", |b| {
        b.iter(|| {
            let teams = battle_report::parse(black_box(&doc)).ok();
            black_box(teams.map(|t| t.len()))
        })
    });
}

criterion_group!(benches, bench_recompute, bench_battle_report);
criterion_main!(benches);
