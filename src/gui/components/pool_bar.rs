// src/gui/components/pool_bar.rs
//
// Buyback ISK field. Every edit is parsed; a bad value turns the field red
// and leaves the last good pool amount in place.

use eframe::egui::{self, Color32, TextEdit};

use crate::{gui::app::App, payout::amount::{format_isk, parse_pool_amount}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Buyback ISK:");

        let mut edit = TextEdit::singleline(&mut app.pool_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(220.0);
        if app.pool_invalid {
            edit = edit.text_color(Color32::from_rgb(220, 30, 30));
        }
        let resp = ui.add(edit);

        if resp.changed() {
            apply_pool_text(app);
        }

        // Reformat once the user is done typing.
        if resp.lost_focus() && !app.pool_invalid {
            app.pool_text = format_isk(app.state.session.config().pool_amount);
        }

        if app.pool_invalid {
            ui.colored_label(Color32::from_rgb(220, 30, 30), "Invalid amount");
        }
    });
}

fn apply_pool_text(app: &mut App) {
    if app.pool_text.trim().is_empty() {
        app.pool_invalid = false;
        if let Err(e) = app.state.session.set_pool_amount(0.0) {
            loge!("UI: pool reset failed: {e}");
        }
        return;
    }

    match parse_pool_amount(&app.pool_text) {
        Ok(v) => match app.state.session.set_pool_amount(v) {
            Ok(()) => app.pool_invalid = false,
            Err(e) => {
                logd!("UI: pool rejected: {e}");
                app.pool_invalid = true;
            }
        },
        Err(e) => {
            logd!("UI: pool text invalid: {e}");
            app.pool_invalid = true;
        }
    }
}
