// src/config/state.rs
use std::collections::HashSet;

use crate::payout::{ParticipantId, Session};
use super::settings::Settings;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Rows highlighted in the participant table.
    pub selected: HashSet<ParticipantId>,
    /// Anchor for shift-click range selection.
    pub last_clicked: Option<ParticipantId>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
            last_clicked: None,
            window_w: super::consts::WINDOW_W,
            window_h: super::consts::WINDOW_H,
        }
    }
}

/// Everything the app owns: the payout session, loaded preferences, and
/// GUI-only state that never reaches the core.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: Session,
    pub settings: Settings,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let gui = GuiState {
            window_w: settings.window_w,
            window_h: settings.window_h,
            ..GuiState::default()
        };
        Self { session: Session::new(), settings, gui }
    }

    /// Drop selection entries whose participants are gone.
    pub fn prune_selection(&mut self) {
        let roster = self.session.roster();
        self.gui.selected.retain(|id| roster.get(*id).is_some());
        if self.gui.last_clicked.is_some_and(|id| roster.get(id).is_none()) {
            self.gui.last_clicked = None;
        }
    }
}
