// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, mail};

pub fn copy_mail(app: &mut App, ui_ctx: &egui::Context) {
    let snap = app.state.session.snapshot();

    if snap.participants.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but the roster is empty");
        return;
    }

    let txt = mail::compose(&snap);
    logf!(
        "Copy: scouts={}, line={}, pool={:.2}",
        snap.scout_count,
        snap.line_count,
        snap.pool_amount
    );

    ui_ctx.copy_text(txt);
    app.status("Mail copied to clipboard");
}
