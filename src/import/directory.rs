// src/import/directory.rs
//
// Name → character id resolution. ESI's `/universe/ids/` is the real one;
// tests plug in their own.
use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    config::options::ImportOptions,
    core::net,
    error::ImportError,
    progress::Progress,
    specs::ImportRecord,
};

/// ESI rejects larger bodies.
const ESI_MAX_NAMES: usize = 500;

pub trait Directory: Send + Sync {
    /// Exact-name → id for the names the directory knows.
    fn resolve(&self, names: &[String]) -> Result<HashMap<String, String>, ImportError>;
}

pub struct EsiDirectory {
    options: ImportOptions,
}

impl EsiDirectory {
    pub fn new(options: ImportOptions) -> Self { Self { options } }
}

#[derive(Debug, Deserialize)]
struct IdsResponse {
    #[serde(default)]
    characters: Vec<NamedId>,
}

#[derive(Debug, Deserialize)]
struct NamedId {
    id: u64,
    name: String,
}

impl Directory for EsiDirectory {
    fn resolve(&self, names: &[String]) -> Result<HashMap<String, String>, ImportError> {
        let client = net::client(&self.options)?;
        let mut out = HashMap::with_capacity(names.len());
        for chunk in names.chunks(ESI_MAX_NAMES) {
            let resp: IdsResponse = net::post_json(&client, &self.options.esi_url, chunk)?;
            out.extend(resp.characters.into_iter().map(|c| (c.name, c.id.to_string())));
        }
        Ok(out)
    }
}

/// Fill missing ids in place. A failed lookup is logged and leaves the
/// records as they were; it never aborts the import.
pub fn fill_ids(
    directory: &dyn Directory,
    records: &mut [ImportRecord],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> usize {
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| r.external_id.is_none())
        .map(|r| r.name.clone())
        .collect();
    names.sort();
    names.dedup();
    if names.is_empty() {
        return 0;
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Looking up {} name(s)…", names.len()));
    }

    let found = match directory.resolve(&names) {
        Ok(map) => map,
        Err(e) => {
            loge!("Lookup: failed for {} name(s): {e}", names.len());
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed("name lookup", &e.to_string());
            }
            return 0;
        }
    };

    let mut filled = 0usize;
    for r in records.iter_mut().filter(|r| r.external_id.is_none()) {
        if let Some(id) = found.get(&r.name) {
            r.external_id = Some(id.clone());
            filled += 1;
        }
    }
    logf!("Lookup: resolved {filled}/{} name(s)", names.len());
    filled
}
