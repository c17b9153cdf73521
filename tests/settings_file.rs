// tests/settings_file.rs
use std::fs;
use std::num::NonZeroU32;
use std::path::PathBuf;

use fc_payout::config::settings::{self, Settings};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fc_payout_settings_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

#[test]
fn missing_file_gives_defaults() {
    let p = tmp_dir("missing").join("nope.cfg");
    assert_eq!(settings::load(&p), Settings::default());
}

#[test]
fn tolerant_parse() {
    let text = "\
# comment
esi_lookup = off
timeout_secs=abc
window_w=1200
garbage line
unknown_key=1
dynamic_default=0
";
    let cfg = settings::parse(text);
    assert!(!cfg.import.esi_lookup);
    assert_eq!(cfg.import.timeout_secs, Settings::default().import.timeout_secs);
    assert_eq!(cfg.window_w, 1200);
    assert_eq!(cfg.window_h, Settings::default().window_h);
    assert_eq!(cfg.dynamic_default, None);
}

#[test]
fn save_then_load_keeps_everything() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("nested").join("settings.cfg");

    let mut cfg = Settings::default();
    cfg.import.esi_lookup = false;
    cfg.import.esi_url = String::from("http://localhost:9/ids/");
    cfg.window_h = 720;
    cfg.dynamic_default = NonZeroU32::new(3);

    settings::save(&path, &cfg).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("dynamic_default=3"));
    assert!(!text.contains("pool"));
    assert_eq!(settings::load(&path), cfg);
}
