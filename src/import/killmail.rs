// src/import/killmail.rs
use crate::{
    config::options::ImportOptions,
    core::net,
    error::ImportError,
    payout::amount::format_isk,
    progress::Progress,
    specs::{killmail, ImportRecord},
};

use super::{ImportBatch, ImportOutput, ImportSource, PageInput};

/// Attackers across one or more killmail pages. A page that fails to load
/// is skipped; the rest still import.
pub struct KillmailSource {
    pages: Vec<PageInput>,
    options: ImportOptions,
}

impl KillmailSource {
    pub fn new(pages: Vec<PageInput>, options: ImportOptions) -> Self {
        Self { pages, options }
    }
}

impl ImportSource for KillmailSource {
    fn label(&self) -> &'static str { "killmails" }

    fn collect(&self, mut progress: Option<&mut dyn Progress>) -> Result<ImportOutput, ImportError> {
        if self.pages.is_empty() {
            return Err(ImportError::EmptyInput);
        }
        if let Some(p) = progress.as_deref_mut() {
            p.begin(self.pages.len());
        }

        let client = if self.pages.iter().any(PageInput::needs_network) {
            Some(net::client(&self.options)?)
        } else {
            None
        };

        let mut records: Vec<ImportRecord> = Vec::new();
        let mut dropped = 0.0f64;
        let mut dropped_seen = false;

        for page in &self.pages {
            let label = page.label();
            match page.load(client.as_ref()) {
                Ok(html) => {
                    let bundle = killmail::parse(&html);
                    logd!("Import: killmail {label} attackers={} dropped={:?}", bundle.attackers.len(), bundle.dropped_isk);
                    if let Some(v) = bundle.dropped_isk {
                        dropped += v;
                        dropped_seen = true;
                    }
                    records.extend(bundle.attackers);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&label);
                    }
                }
                Err(e) => {
                    loge!("Import: killmail {label} failed: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&label, &e.to_string());
                    }
                }
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }

        let batch = ImportBatch::new(self.label(), records);
        Ok(ImportOutput::Batch(if dropped_seen {
            batch.with_note(format!("Dropped: {} ISK", format_isk(dropped)))
        } else {
            batch
        }))
    }
}
