// src/import/paste.rs
use crate::{error::ImportError, progress::Progress, specs::paste};

use super::{directory, Directory, ImportBatch, ImportOutput, ImportSource};

/// Free text pasted by the user: tagged BR composition, FAT link rows, or
/// plain names.
pub struct PasteSource {
    text: String,
    directory: Option<Box<dyn Directory>>,
}

impl PasteSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), directory: None }
    }

    /// Resolve names without ids through `directory`.
    pub fn with_directory(mut self, directory: Box<dyn Directory>) -> Self {
        self.directory = Some(directory);
        self
    }
}

impl ImportSource for PasteSource {
    fn label(&self) -> &'static str { "paste" }

    fn collect(&self, mut progress: Option<&mut dyn Progress>) -> Result<ImportOutput, ImportError> {
        if self.text.trim().is_empty() {
            return Err(ImportError::EmptyInput);
        }

        let (format, mut records) = paste::parse(&self.text);
        logf!("Import: paste format={:?} records={}", format, records.len());

        if let Some(dir) = self.directory.as_deref() {
            directory::fill_ids(dir, &mut records, progress.as_deref_mut());
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(ImportOutput::Batch(ImportBatch::new(self.label(), records)))
    }
}
