// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy_mail, ...}.

mod copy;    // src/gui/actions/copy.rs
mod import;  // src/gui/actions/import.rs
mod roster;  // src/gui/actions/roster.rs

pub use copy::copy_mail;
pub use import::{apply_batch, apply_team, import_br, import_killmails, import_paste};
pub use roster::{
    clear_all, remove_selected, set_dynamic_default, set_share_weight, toggle_included, toggle_scout,
};
