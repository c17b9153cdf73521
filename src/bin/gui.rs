// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use fc_payout::{config::{settings, state::AppState}, gui};
use eframe::egui::{ IconData, ViewportBuilder };

/// 32x32 gold coin on a transparent background.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let c = (N as f32 - 1.0) / 2.0;
    let mut rgba = Vec::with_capacity((N * N * 4) as usize);
    for y in 0..N {
        for x in 0..N {
            let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
            let px: [u8; 4] = if d <= 11.0 {
                [0xF0, 0xC0, 0x3C, 0xFF]
            } else if d <= 14.5 {
                [0xB0, 0x80, 0x20, 0xFF]
            } else {
                [0, 0, 0, 0]
            };
            rgba.extend_from_slice(&px);
        }
    }
    IconData { rgba, width: N, height: N }
}

fn main() {
    let cfg = settings::load(&settings::default_path());
    let size = [cfg.window_w as f32, cfg.window_h as f32];

    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size(size)
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppState::new(cfg)) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
