// src/gui/components/participant_table.rs
//
// Draws the roster from a fresh snapshot (name order). Clicks are collected
// while drawing and applied afterwards so the session is only touched once
// the table has released its borrows.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{actions, app::App, dialogs::Dialog},
    payout::{amount::format_isk, ParticipantId},
};

enum RowAction {
    ToggleIncluded(ParticipantId),
    ToggleScout(ParticipantId),
    Select(usize),
    EditWeight(ParticipantId),
}

const HEADERS: [&str; 6] = ["Include", "Scout", "Name", "Found ID", "Share Count", "Share"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let snap = app.state.session.snapshot();
    let order: Vec<ParticipantId> = snap.participants.iter().map(|p| p.id()).collect();
    let dynamic = snap.dynamic;

    let mut pending: Vec<RowAction> = Vec::new();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(avail_h)
        .column(Column::exact(60.0))
        .column(Column::exact(50.0))
        .column(Column::initial(260.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::exact(70.0))
        .column(Column::exact(90.0))
        .column(Column::remainder().at_least(120.0))
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(20.0, snap.participants.len(), |mut row| {
                let idx = row.index();
                let Some(p) = snap.participants.get(idx) else { return };
                let id = p.id();
                let selected = app.state.gui.selected.contains(&id);
                row.set_selected(selected);

                row.col(|ui| {
                    let mut inc = p.included;
                    if ui.add(egui::Checkbox::without_text(&mut inc)).changed() {
                        pending.push(RowAction::ToggleIncluded(id));
                    }
                });
                row.col(|ui| {
                    let mut scout = p.is_scout();
                    if ui.add(egui::Checkbox::without_text(&mut scout)).changed() {
                        pending.push(RowAction::ToggleScout(id));
                    }
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let mut rt = RichText::new(&p.name);
                    if !p.included { rt = rt.weak(); }
                    if ui.selectable_label(selected, rt).clicked() {
                        pending.push(RowAction::Select(idx));
                    }
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| {
                        ui.label(if p.external_id.is_some() { "Yes" } else { "No" });
                    });
                });
                row.col(|ui| {
                    let text = if dynamic { p.share_weight.to_string() } else { s!("NA") };
                    let resp = ui
                        .centered_and_justified(|ui| ui.add(egui::Label::new(text).sense(Sense::click())))
                        .inner;
                    if dynamic && resp.double_clicked() {
                        pending.push(RowAction::EditWeight(id));
                    } else if resp.clicked() {
                        pending.push(RowAction::Select(idx));
                    }
                });
                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(format_isk(p.share())).monospace());
                    });
                });
            });
        });

    if pending.is_empty() { return; }

    let modifiers = ui.input(|i| i.modifiers);
    for action in pending {
        match action {
            RowAction::ToggleIncluded(id) => actions::toggle_included(app, id),
            RowAction::ToggleScout(id) => actions::toggle_scout(app, id),
            RowAction::Select(idx) => select(app, &order, idx, modifiers.ctrl || modifiers.command, modifiers.shift),
            RowAction::EditWeight(id) => app.dialog = Dialog::weight(app, id),
        }
    }
}

/// Click / ctrl-click / shift-click over the displayed order.
fn select(app: &mut App, order: &[ParticipantId], idx: usize, ctrl: bool, shift: bool) {
    let Some(&id) = order.get(idx) else { return };
    let gui = &mut app.state.gui;
    let anchor = gui
        .last_clicked
        .and_then(|last| order.iter().position(|x| *x == last));

    match (ctrl, shift, anchor) {
        (_, true, Some(last)) => {
            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
            if !ctrl { gui.selected.clear(); }
            gui.selected.extend(order[lo..=hi].iter().copied());
        }
        (true, _, _) => {
            if !gui.selected.remove(&id) { gui.selected.insert(id); }
        }
        _ => {
            gui.selected.clear();
            gui.selected.insert(id);
        }
    }
    gui.last_clicked = Some(id);
    logd!("UI: selection → {} row(s)", gui.selected.len());
}
