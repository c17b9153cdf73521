// src/config/settings.rs
//
// Tolerant `key=value` settings file. Missing file or bad values fall back
// to defaults; unknown keys are ignored. Only preferences live here, never
// the roster or the pool amount.
use std::{fs, io, num::NonZeroU32, path::{Path, PathBuf}};

use super::consts::*;
use super::options::ImportOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub import: ImportOptions,
    pub window_w: u32,
    pub window_h: u32,
    /// Dynamic shares default offered when the user turns the mode on.
    pub dynamic_default: Option<NonZeroU32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            import: ImportOptions::default(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            dynamic_default: None,
        }
    }
}

pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(SETTINGS_FILE)
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn parse(text: &str) -> Settings {
    let mut cfg = Settings::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            logw!("Settings: ignoring line without '=': {line}");
            continue;
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "esi_lookup" => {
                if let Some(b) = parse_bool(val) { cfg.import.esi_lookup = b; }
            }
            "esi_url" => {
                if !val.is_empty() { cfg.import.esi_url = s!(val); }
            }
            "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() { cfg.import.timeout_secs = v.max(1); }
            }
            "window_w" => {
                if let Ok(v) = val.parse::<u32>() { cfg.window_w = v; }
            }
            "window_h" => {
                if let Ok(v) = val.parse::<u32>() { cfg.window_h = v; }
            }
            "dynamic_default" => {
                cfg.dynamic_default = val.parse::<NonZeroU32>().ok();
            }
            other => logd!("Settings: unknown key {other}"),
        }
    }
    cfg
}

pub fn load(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(text) => {
            logf!("Settings: loaded {}", path.display());
            parse(&text)
        }
        Err(e) => {
            logd!("Settings: using defaults ({}: {e})", path.display());
            Settings::default()
        }
    }
}

pub fn render(cfg: &Settings) -> String {
    let mut s = s!("# fc_payout settings\n");
    s.push_str(&format!("esi_lookup={}\n", if cfg.import.esi_lookup { 1 } else { 0 }));
    s.push_str(&format!("esi_url={}\n", cfg.import.esi_url));
    s.push_str(&format!("timeout_secs={}\n", cfg.import.timeout_secs));
    s.push_str(&format!("window_w={}\n", cfg.window_w));
    s.push_str(&format!("window_h={}\n", cfg.window_h));
    if let Some(n) = cfg.dynamic_default {
        s.push_str(&format!("dynamic_default={n}\n"));
    }
    s
}

pub fn save(path: &Path, cfg: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(cfg))?;
    logf!("Settings: saved {}", path.display());
    Ok(())
}
