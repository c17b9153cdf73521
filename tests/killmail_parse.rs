// tests/killmail_parse.rs
use std::fs;
use std::path::PathBuf;

use fc_payout::config::options::ImportOptions;
use fc_payout::import::{ImportOutput, ImportSource, KillmailSource, PageInput};
use fc_payout::specs::killmail::parse;

fn km(attackers: &[(&str, &str)], dropped: &str) -> String {
    let mut rows = String::new();
    for (id, name) in attackers {
        rows.push_str(&format!(
            "<tr class=\"attacker odd\"><td class=\"pilotinfo\"><a href=\"/character/{id}/\">{name}</a><br/><a href=\"/corporation/1/\">Corp</a></td><td>Ship</td></tr>\n"
        ));
    }
    format!(
        "<table><tr><th>Dropped:</th><td class=\"item_dropped\">{dropped} ISK</td></tr></table>\n\
<table class=\"attackers\">\n<tr class=\"victim\"><td class=\"pilotinfo\"><a href=\"/character/9/\">Victim</a></td></tr>\n{rows}\
<tr class=\"attacker\"><td class=\"pilotinfo\">Tower</td></tr>\n</table>"
    )
}

fn tmp_file(name: &str, body: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fc_payout_km_{}", name));
    fs::write(&p, body).unwrap();
    p
}

#[test]
fn reads_attackers_and_dropped_value() {
    let page = km(&[("11", "Shooter One"), ("12", "Shooter Two"), ("11", "Shooter One")], "1,234,567.89");
    let bundle = parse(&page);
    let got: Vec<(&str, Option<&str>)> = bundle
        .attackers
        .iter()
        .map(|r| (r.name.as_str(), r.external_id.as_deref()))
        .collect();
    assert_eq!(got, vec![("Shooter One", Some("11")), ("Shooter Two", Some("12"))]);
    assert_eq!(bundle.dropped_isk, Some(1_234_567.89));
}

#[test]
fn npc_attackers_are_dropped() {
    let bundle = parse(&km(&[("5", "Hikanta Tyrannos"), ("6", "Real Pilot")], "0"));
    assert_eq!(bundle.attackers.len(), 1);
    assert_eq!(bundle.attackers[0].name, "Real Pilot");
}

#[test]
fn source_merges_pages_and_sums_drops() {
    let a = tmp_file("a.html", &km(&[("1", "Ann")], "1,000"));
    let b = tmp_file("b.html", &km(&[("1", "Ann"), ("2", "Bob")], "500.50"));
    let missing = std::env::temp_dir().join("fc_payout_km_missing.html");
    let _ = fs::remove_file(&missing);

    let src = KillmailSource::new(
        vec![PageInput::File(a), PageInput::File(missing), PageInput::File(b)],
        ImportOptions::default(),
    );
    let ImportOutput::Batch(batch) = src.collect(None).unwrap() else {
        panic!("killmails yield a batch");
    };

    // Same pilot on two mails stays in the batch; the roster merges by name.
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.note.as_deref(), Some("Dropped: 1,500.50 ISK"));
}
