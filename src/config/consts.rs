// src/config/consts.rs

// Net config
pub const ESI_IDS_URL: &str = "https://esi.evetech.net/latest/universe/ids/";
pub const USER_AGENT: &str = "fc_payout/2.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local store (log + settings only; the roster is never saved)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.cfg";

// Battle report scan: how far past a character link to look for its affiliation marker
pub const BR_AFFILIATION_WINDOW: usize = 2000;

// Mail links: EVE `showinfo` type id for characters
pub const SHOWINFO_CHARACTER: u32 = 1383;

// GUI
pub const WINDOW_W: u32 = 900;
pub const WINDOW_H: u32 = 600;

/// NPCs that show up on killmails and battle reports (may not include everyone).
/// Source: https://zkillboard.com/corporation/1000274/top/
pub const IGNORED_CHAR_NAMES: &[&str] = &[
    "Hyleus Tyrannos",
    "Arithmos Tyrannos",
    "Agreus Tyrannos",
    "Scylla Tyrannos",
    "Karybdis Tyrannos",
    "Artemis Tyrannos",
    "Orpheus Tyrannos",
    "Apollo Tyrannos",
    "Phylarch Tyrannos",
    "Metis Tyrannos",
    "Tyrannos Strategos",
    "Tisiphone Tyrannos",
    "Tyrannos Navarkos",
    "Orion Tyrannos",
    "Tyrannos Polemos",
    "Hikanta Tyrannos",
];

#[inline]
pub fn is_ignored_name(name: &str) -> bool {
    IGNORED_CHAR_NAMES.contains(&name)
}
