// src/gui/actions/import.rs
//
// Builds the import source from dialog input and hands it to a worker.
// Results come back through `App::drain_job`, which calls `apply_*` here.
use eframe::egui;

use crate::{
    gui::app::App,
    import::{
        BattleReportSource, EsiDirectory, ImportBatch, KillmailSource, PageInput, PasteSource,
        TeamRoster,
    },
};

pub fn import_paste(app: &mut App, text: String, ctx: &egui::Context) {
    if text.trim().is_empty() {
        app.status("Nothing pasted");
        return;
    }
    let opts = &app.state.settings.import;
    let mut source = PasteSource::new(text);
    if opts.esi_lookup {
        source = source.with_directory(Box::new(EsiDirectory::new(opts.clone())));
    }
    logf!("Import: paste begin (lookup={})", opts.esi_lookup);
    app.start_import(Box::new(source), ctx);
}

pub fn import_br(app: &mut App, url: &str, ctx: &egui::Context) {
    let url = url.trim();
    if url.is_empty() {
        app.status("No battle report URL given");
        return;
    }
    logf!("Import: battle report begin {url}");
    let source = BattleReportSource::new(PageInput::Url(s!(url)), app.state.settings.import.clone());
    app.start_import(Box::new(source), ctx);
}

/// One URL per line (or whitespace separated).
pub fn import_killmails(app: &mut App, text: &str, ctx: &egui::Context) {
    let pages: Vec<PageInput> = text
        .split_whitespace()
        .map(|u| PageInput::Url(s!(u)))
        .collect();
    if pages.is_empty() {
        app.status("No killmail URLs given");
        return;
    }
    logf!("Import: killmails begin ({} page(s))", pages.len());
    let source = KillmailSource::new(pages, app.state.settings.import.clone());
    app.start_import(Box::new(source), ctx);
}

/// Merge a finished batch into the roster.
pub fn apply_batch(app: &mut App, batch: ImportBatch) {
    let source = batch.source;
    let note = batch.note.clone();

    if batch.is_empty() {
        app.status(format!("No pilots found in {source}"));
        logw!("Import: {source} returned no pilots");
        return;
    }

    let summary = app.state.session.add_batch(batch.into_participants());
    let mut msg = format!(
        "Imported {} from {source} ({} new, {} updated)",
        summary.total(),
        summary.appended,
        summary.merged
    );
    if let Some(n) = note {
        msg.push_str(" | ");
        msg.push_str(&n);
    }
    app.status(msg);
}

pub fn apply_team(app: &mut App, team: &TeamRoster) {
    logf!("Import: team {} chosen ({} pilots)", team.letter, team.pilot_count());
    apply_batch(app, ImportBatch::from_team(team));
}
