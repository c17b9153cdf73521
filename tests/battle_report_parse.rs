// tests/battle_report_parse.rs
use fc_payout::error::ImportError;
use fc_payout::import::{BattleReportSource, ImportBatch, ImportOutput, ImportSource, PageInput};
use fc_payout::config::options::ImportOptions;
use fc_payout::specs::battle_report::{parse, select};

const PAGE: &str = r#"<html><body>
<h4 class="team-header">Team A</h4>
<div class="aff"><img alt="allyID-111"><a href="https://zkillboard.com/alliance/111/">Alpha Alliance</a></div>
<div class="pilot"><a href="https://zkillboard.com/character/1001/">Pilot One</a> <img alt="allyID-111"> <img alt="corpID-501"></div>
<div class="pilot"><a href="https://zkillboard.com/character/1002/">Pilot Two</a> <img alt="allyID-111"> <img alt="corpID-501"></div>
<div class="pilot"><a href="https://zkillboard.com/character/1001/">Pilot One</a> <img alt="allyID-111"></div>
<div class="pilot"><a href="https://zkillboard.com/character/3000/">Hyleus Tyrannos</a> <img alt="allyID-111"></div>
<h4 class="team-header">Team B</h4>
<div class="aff"><img alt="corpID-777"><a href="https://zkillboard.com/corporation/777/">Bravo Corp</a></div>
<div class="pilot"><a href="https://zkillboard.com/character/2001/">Enemy &amp; One</a> <img alt="corpID-777"></div>
</body></html>"#;

#[test]
fn splits_pilots_by_team() {
    let teams = parse(PAGE).unwrap();
    assert_eq!(teams.len(), 2);

    let a = &teams[0];
    assert_eq!(a.letter, 'A');
    assert_eq!(a.name, "Team A");
    assert_eq!(a.affiliations, "Alpha Alliance");
    let a_names: Vec<(&str, &str)> = a.characters.iter().map(|c| (c.name.as_str(), c.id.as_str())).collect();
    assert_eq!(a_names, vec![("Pilot One", "1001"), ("Pilot Two", "1002")]);

    let b = &teams[1];
    assert_eq!(b.letter, 'B');
    assert_eq!(b.affiliations, "Bravo Corp");
    assert_eq!(b.pilot_count(), 1);
    assert_eq!(b.characters[0].name, "Enemy & One");
}

#[test]
fn select_by_letter() {
    let teams = parse(PAGE).unwrap();
    assert_eq!(select(&teams, "b").unwrap().letter, 'B');
    assert_eq!(select(&teams, " Team A ").unwrap().letter, 'A');
    assert!(matches!(select(&teams, "C"), Err(ImportError::UnknownTeam(_))));
    assert!(matches!(select(&teams, "AB"), Err(ImportError::UnknownTeam(_))));
}

#[test]
fn team_batch_carries_ids() {
    let teams = parse(PAGE).unwrap();
    let batch = ImportBatch::from_team(&teams[0]);
    assert_eq!(batch.len(), 2);
    assert!(batch.records.iter().all(|r| r.external_id.is_some()));
}

#[test]
fn page_without_teams_is_rejected() {
    assert!(matches!(parse("<html>nothing here</html>"), Err(ImportError::NoTeamData)));
    assert!(matches!(parse("<p>Team A</p><p>no markers</p>"), Err(ImportError::NoTeams)));
}

#[test]
fn source_reads_saved_html() {
    let src = BattleReportSource::new(PageInput::Html(PAGE.to_string()), ImportOptions::default());
    match src.collect(None).unwrap() {
        ImportOutput::Teams(t) => assert_eq!(t.len(), 2),
        ImportOutput::Batch(_) => panic!("battle reports yield teams"),
    }
}

#[test]
fn affiliation_scan_can_run_into_next_team() {
    // Team A's pilot has no corp marker of its own, so the scan window picks
    // up Team B's corp a few lines further down.
    let page = r#"<h4>Team A</h4>
<img alt="allyID-111"><a href="/alliance/111/">Alpha Alliance</a>
<a href="/character/1002/">Pilot Two</a> <img alt="allyID-111">
<h4>Team B</h4>
<img alt="corpID-777"><a href="/corporation/777/">Bravo Corp</a>
<a href="/character/2001/">Enemy One</a> <img alt="corpID-777">"#;
    let teams = parse(page).unwrap();
    assert_eq!(teams[0].letter, 'A');
    assert_eq!(teams[0].affiliations, "Alpha Alliance, Bravo Corp");
    assert_eq!(teams[0].pilot_count(), 1);
    assert_eq!(teams[1].affiliations, "Bravo Corp");
}

#[test]
fn link_text_is_decoded_once() {
    let page = r#"<h4>Team A</h4>
<img alt="allyID-111"><a href="/alliance/111/">Alpha Alliance</a>
<a href="/character/1003/">Pilot &amp;lt;X&amp;gt;</a> <img alt="allyID-111">"#;
    let teams = parse(page).unwrap();
    assert_eq!(teams[0].characters[0].name, "Pilot &lt;X&gt;");
}
