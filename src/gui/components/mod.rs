// src/gui/components/mod.rs
pub mod action_buttons;
pub mod participant_table;
pub mod pool_bar;
pub mod summary;
