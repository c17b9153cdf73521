// src/gui/components/action_buttons.rs

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App, dialogs::Dialog};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running();

    // Imports
    ui.horizontal(|ui| {
        if ui.add_enabled(!running, egui::Button::new("Import from Paste")).clicked() {
            app.dialog = Dialog::paste();
        }
        if ui.add_enabled(!running, egui::Button::new("Import from BR URL")).clicked() {
            app.dialog = Dialog::br_url();
        }
        if ui.add_enabled(!running, egui::Button::new("Import Killmails")).clicked() {
            app.dialog = Dialog::killmail_urls();
        }

        if running {
            ui.add(Spinner::new().size(16.0));
        }
    });

    // Roster + output
    ui.horizontal(|ui| {
        let has_selection = !app.state.gui.selected.is_empty();
        if ui.add_enabled(has_selection, egui::Button::new("Remove Selected")).clicked() {
            actions::remove_selected(app);
        }

        if ui.button("Clear All").clicked() {
            actions::clear_all(app);
        }

        ui.separator();

        let dynamic = app.state.session.config().dynamic_shares_enabled;
        let label = if dynamic {
            format!("Dynamic Shares: {}", app.state.session.config().dynamic_shares_default)
        } else {
            s!("Dynamic Shares: Off")
        };
        if ui.button(label).on_hover_text("Set a default share count, or turn off").clicked() {
            app.dialog = Dialog::dynamic_default(app);
        }

        ui.separator();

        let gold = egui::Color32::from_rgb(200, 160, 40);
        let button_copy = ui.add(
            egui::Button::new(
                egui::RichText::new("Copy Mail")
                .color(egui::Color32::BLACK)
                .strong())
            .fill(gold));
        if button_copy.clicked() {
            actions::copy_mail(app, ui.ctx());
        }
    });
}
