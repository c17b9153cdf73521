// src/import/battle_report.rs
use crate::{
    config::options::ImportOptions,
    core::net,
    error::ImportError,
    progress::Progress,
    specs::battle_report,
};

use super::{ImportOutput, ImportSource, PageInput};

/// One battle report page; yields its teams for the user to choose from.
pub struct BattleReportSource {
    page: PageInput,
    options: ImportOptions,
}

impl BattleReportSource {
    pub fn new(page: PageInput, options: ImportOptions) -> Self {
        Self { page, options }
    }
}

impl ImportSource for BattleReportSource {
    fn label(&self) -> &'static str { "battle report" }

    fn collect(&self, mut progress: Option<&mut dyn Progress>) -> Result<ImportOutput, ImportError> {
        if let Some(p) = progress.as_deref_mut() {
            p.begin(1);
            p.log(&format!("Loading {}…", self.page.label()));
        }

        let client = if self.page.needs_network() { Some(net::client(&self.options)?) } else { None };
        let html = self.page.load(client.as_ref())?;
        let teams = battle_report::parse(&html)?;

        logf!(
            "Import: BR {} → {} team(s): {}",
            self.page.label(),
            teams.len(),
            teams.iter().map(|t| format!("{}={}", t.name, t.pilot_count())).collect::<Vec<_>>().join(" ")
        );

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&self.page.label());
            p.finish();
        }
        Ok(ImportOutput::Teams(teams))
    }
}
