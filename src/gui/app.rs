// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{settings, state::AppState},
    import::{ImportEvent, ImportJob, ImportOutput, ImportSource},
    payout::amount::format_isk,
};

use super::dialogs::Dialog;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "FC Payout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // pool field UX (we map this <-> PayoutConfig.pool_amount)
    pub pool_text: String,
    pub pool_invalid: bool,

    // status line + the one import allowed at a time
    pub status: String,
    pub job: Option<ImportJob>,

    pub dialog: Dialog,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        if let Some(n) = state.settings.dynamic_default {
            state.session.enable_dynamic_shares(n);
        }
        logf!(
            "Init: esi_lookup={}, window={}x{}",
            state.settings.import.esi_lookup,
            state.settings.window_w,
            state.settings.window_h
        );
        let pool_text = format_isk(state.session.config().pool_amount);
        Self {
            state,
            pool_text,
            pool_invalid: false,
            status: s!("Idle"),
            job: None,
            dialog: Dialog::None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool { self.job.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Hand `source` to a worker; events come back through `drain_job`.
    pub fn start_import(&mut self, source: Box<dyn ImportSource>, ctx: &egui::Context) {
        if self.running() {
            self.status("An import is already running");
            return;
        }
        let ctx2 = ctx.clone();
        let job = ImportJob::spawn(source, move || ctx2.request_repaint());
        self.status(format!("Importing from {}…", job.label()));
        self.job = Some(job);
    }

    /// Apply everything the worker posted since last frame.
    fn drain_job(&mut self) {
        let Some(job) = self.job.as_mut() else { return };
        let label = job.label();

        let mut events = Vec::new();
        while let Some(ev) = job.poll() {
            events.push(ev);
        }
        if job.is_finished() {
            self.job = None;
        }

        for ev in events {
            match ev {
                ImportEvent::Status(msg) => self.status(msg),
                ImportEvent::Finished(ImportOutput::Batch(batch)) => {
                    super::actions::apply_batch(self, batch);
                }
                ImportEvent::Finished(ImportOutput::Teams(teams)) => {
                    logf!("Import: {label} offered {} team(s)", teams.len());
                    self.status(format!("Pick a team ({} found)", teams.len()));
                    self.dialog = Dialog::team_pick(teams);
                }
                ImportEvent::Failed(e) => {
                    loge!("Import: {label} failed: {e}");
                    self.status(format!("Import failed: {e}"));
                }
            }
        }
    }

    /// Persist preferences (never the roster or pool).
    pub fn save_settings(&mut self) {
        let path = settings::default_path();
        if let Err(e) = settings::save(&path, &self.state.settings) {
            loge!("Settings: save failed {}: {e}", path.display());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_job();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            crate::gui::components::pool_bar::draw(ui, self);
            ui.separator();
            crate::gui::components::action_buttons::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            crate::gui::components::summary::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::participant_table::draw(ui, self);
        });

        crate::gui::dialogs::draw(ctx, self);
    }
}
