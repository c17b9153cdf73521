// src/gui/actions/roster.rs
use std::num::NonZeroU32;

use crate::{gui::app::App, payout::ParticipantId};

pub fn remove_selected(app: &mut App) {
    if app.state.gui.selected.is_empty() {
        app.status("Nothing selected");
        return;
    }
    let n = app.state.session.remove(&app.state.gui.selected);
    app.state.prune_selection();
    app.status(format!("Removed {n} participant(s)"));
}

pub fn clear_all(app: &mut App) {
    app.state.session.clear();
    app.state.prune_selection();
    app.pool_text.clear();
    app.pool_invalid = false;
    app.status("Cleared");
}

pub fn toggle_included(app: &mut App, id: ParticipantId) {
    match app.state.session.toggle_included(id) {
        Ok(now) => logd!("UI: {id} included → {now}"),
        Err(e) => {
            loge!("UI: toggle include failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn toggle_scout(app: &mut App, id: ParticipantId) {
    match app.state.session.toggle_role(id) {
        Ok(role) => logd!("UI: {id} role → {}", role.label()),
        Err(e) => {
            loge!("UI: toggle role failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn set_share_weight(app: &mut App, id: ParticipantId, weight: NonZeroU32) {
    match app.state.session.set_share_weight(id, weight) {
        Ok(()) => app.status(format!("Share count set to {weight}")),
        Err(e) => {
            loge!("UI: set weight failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

/// `None` turns dynamic shares off. The choice is remembered in settings.
pub fn set_dynamic_default(app: &mut App, default: Option<NonZeroU32>) {
    match default {
        Some(n) => {
            app.state.session.enable_dynamic_shares(n);
            app.status(format!("Dynamic shares on, default {n}"));
        }
        None => {
            app.state.session.disable_dynamic_shares();
            app.status("Dynamic shares off");
        }
    }
    if app.state.settings.dynamic_default != default {
        app.state.settings.dynamic_default = default;
        app.save_settings();
    }
}
