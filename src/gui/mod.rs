// src/gui/mod.rs
pub mod app;
mod actions;
mod components;
mod dialogs;

pub use app::run;
