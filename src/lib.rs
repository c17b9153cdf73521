// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod payout;
pub mod mail;

pub mod import;
pub mod progress;

pub mod cli;
pub mod gui;
