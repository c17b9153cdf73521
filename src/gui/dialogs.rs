// src/gui/dialogs.rs
//
// One modal at a time. Each dialog keeps its own text buffer; on OK it
// calls into `actions` and closes.

use eframe::egui::{self, Color32};

use crate::{
    gui::{actions, app::App},
    import::TeamRoster,
    payout::{
        amount::{parse_dynamic_default, parse_share_weight},
        ParticipantId,
    },
};

#[derive(Debug, Default)]
pub enum Dialog {
    #[default]
    None,
    Paste { text: String },
    BrUrl { text: String },
    KillmailUrls { text: String },
    TeamPick { teams: Vec<TeamRoster>, chosen: usize },
    Weight { id: ParticipantId, name: String, text: String, error: Option<String> },
    DynamicDefault { text: String, error: Option<String> },
}

impl Dialog {
    pub fn paste() -> Self { Dialog::Paste { text: s!() } }
    pub fn br_url() -> Self { Dialog::BrUrl { text: s!() } }
    pub fn killmail_urls() -> Self { Dialog::KillmailUrls { text: s!() } }

    pub fn team_pick(teams: Vec<TeamRoster>) -> Self {
        Dialog::TeamPick { teams, chosen: 0 }
    }

    pub fn weight(app: &App, id: ParticipantId) -> Self {
        match app.state.session.roster().get(id) {
            Some(p) => Dialog::Weight {
                id,
                name: p.name.clone(),
                text: p.share_weight.to_string(),
                error: None,
            },
            None => Dialog::None,
        }
    }

    pub fn dynamic_default(app: &App) -> Self {
        let cfg = app.state.session.config();
        let text = if cfg.dynamic_shares_enabled {
            cfg.dynamic_shares_default.to_string()
        } else {
            app.state.settings.dynamic_default.map(|n| n.to_string()).unwrap_or_else(|| s!("1"))
        };
        Dialog::DynamicDefault { text, error: None }
    }
}

enum Outcome {
    Keep,
    Close,
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    // Take the dialog out so its buffers and `app` can be borrowed separately.
    let mut dialog = std::mem::take(&mut app.dialog);

    let outcome = match &mut dialog {
        Dialog::None => return,
        Dialog::Paste { text } => paste(ctx, app, text),
        Dialog::BrUrl { text } => br_url(ctx, app, text),
        Dialog::KillmailUrls { text } => killmail_urls(ctx, app, text),
        Dialog::TeamPick { teams, chosen } => team_pick(ctx, app, teams, chosen),
        Dialog::Weight { id, name, text, error } => weight(ctx, app, *id, name, text, error),
        Dialog::DynamicDefault { text, error } => dynamic_default(ctx, app, text, error),
    };

    // An action may have opened a follow-up dialog; don't clobber it.
    if matches!(outcome, Outcome::Keep) && matches!(app.dialog, Dialog::None) {
        app.dialog = dialog;
    }
}

fn modal(title: &str) -> egui::Window<'static> {
    egui::Window::new(title.to_owned())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// OK / Cancel row. Returns (ok, cancel).
fn buttons(ui: &mut egui::Ui, ok_label: &str) -> (bool, bool) {
    let mut ok = false;
    let mut cancel = false;
    ui.horizontal(|ui| {
        ok = ui.button(ok_label).clicked();
        cancel = ui.button("Cancel").clicked();
    });
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        cancel = true;
    }
    (ok, cancel)
}

fn paste(ctx: &egui::Context, app: &mut App, text: &mut String) -> Outcome {
    let mut out = Outcome::Keep;
    modal("Import from Paste").show(ctx, |ui| {
        ui.label("Paste a BR composition, FAT link rows, or one name per line:");
        egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(text)
                    .desired_rows(14)
                    .desired_width(420.0)
                    .font(egui::TextStyle::Monospace),
            );
        });
        let (ok, cancel) = buttons(ui, "Import");
        if ok {
            actions::import_paste(app, std::mem::take(text), ctx);
            out = Outcome::Close;
        } else if cancel {
            out = Outcome::Close;
        }
    });
    out
}

fn br_url(ctx: &egui::Context, app: &mut App, text: &mut String) -> Outcome {
    let mut out = Outcome::Keep;
    modal("Import from BR URL").show(ctx, |ui| {
        ui.label("Battle report URL:");
        let resp = ui.add(egui::TextEdit::singleline(text).desired_width(420.0));
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let (ok, cancel) = buttons(ui, "Fetch");
        if ok || enter {
            actions::import_br(app, text, ctx);
            out = Outcome::Close;
        } else if cancel {
            out = Outcome::Close;
        }
    });
    out
}

fn killmail_urls(ctx: &egui::Context, app: &mut App, text: &mut String) -> Outcome {
    let mut out = Outcome::Keep;
    modal("Import Killmails").show(ctx, |ui| {
        ui.label("Killmail URLs, one per line:");
        ui.add(egui::TextEdit::multiline(text).desired_rows(6).desired_width(420.0));
        let (ok, cancel) = buttons(ui, "Fetch");
        if ok {
            actions::import_killmails(app, text, ctx);
            out = Outcome::Close;
        } else if cancel {
            out = Outcome::Close;
        }
    });
    out
}

fn team_pick(ctx: &egui::Context, app: &mut App, teams: &[TeamRoster], chosen: &mut usize) -> Outcome {
    let mut out = Outcome::Keep;
    modal("Choose Team").show(ctx, |ui| {
        ui.label("Which side gets paid?");
        for (i, t) in teams.iter().enumerate() {
            let label = format!("{}: {} ({} pilots)", t.name, t.affiliations, t.pilot_count());
            ui.radio_value(chosen, i, label);
        }
        let (ok, cancel) = buttons(ui, "Add Team");
        if ok {
            if let Some(team) = teams.get(*chosen) {
                actions::apply_team(app, team);
            }
            out = Outcome::Close;
        } else if cancel {
            app.status("Team import cancelled");
            out = Outcome::Close;
        }
    });
    out
}

fn weight(
    ctx: &egui::Context,
    app: &mut App,
    id: ParticipantId,
    name: &str,
    text: &mut String,
    error: &mut Option<String>,
) -> Outcome {
    let mut out = Outcome::Keep;
    modal("Share Count").show(ctx, |ui| {
        ui.label(format!("Share count for {name}:"));
        let resp = ui.add(egui::TextEdit::singleline(text).desired_width(120.0));
        if let Some(e) = error.as_deref() {
            ui.colored_label(Color32::from_rgb(220, 30, 30), e);
        }
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let (ok, cancel) = buttons(ui, "OK");
        if ok || enter {
            match parse_share_weight(text) {
                Ok(w) => {
                    actions::set_share_weight(app, id, w);
                    out = Outcome::Close;
                }
                Err(e) => *error = Some(e.to_string()),
            }
        } else if cancel {
            out = Outcome::Close;
        }
    });
    out
}

fn dynamic_default(
    ctx: &egui::Context,
    app: &mut App,
    text: &mut String,
    error: &mut Option<String>,
) -> Outcome {
    let mut out = Outcome::Keep;
    modal("Dynamic Shares").show(ctx, |ui| {
        ui.label("Default share count for everyone (or \"off\"):");
        ui.label(egui::RichText::new("Turning this on resets every share count.").weak());
        let resp = ui.add(egui::TextEdit::singleline(text).desired_width(120.0));
        if let Some(e) = error.as_deref() {
            ui.colored_label(Color32::from_rgb(220, 30, 30), e);
        }
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let mut off = false;
        ui.horizontal(|ui| {
            off = ui.button("Turn Off").clicked();
        });
        let (ok, cancel) = buttons(ui, "Apply");
        if off {
            actions::set_dynamic_default(app, None);
            out = Outcome::Close;
        } else if ok || enter {
            match parse_dynamic_default(text) {
                Ok(v) => {
                    actions::set_dynamic_default(app, v);
                    out = Outcome::Close;
                }
                Err(e) => *error = Some(e.to_string()),
            }
        } else if cancel {
            out = Outcome::Close;
        }
    });
    out
}
