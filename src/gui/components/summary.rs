// src/gui/components/summary.rs
use eframe::egui;

use crate::{gui::app::App, mail};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.state.session.snapshot();

    ui.add_space(2.0);
    ui.label(mail::count_line(&snap));
    ui.label(egui::RichText::new(mail::footer_line(&snap)).monospace());
    ui.separator();
    ui.horizontal(|ui| {
        if app.running() {
            ui.add(egui::widgets::Spinner::new().size(12.0));
        }
        ui.label(&app.status);
    });
    ui.add_space(2.0);
}
