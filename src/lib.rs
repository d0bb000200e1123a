// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod cli;
pub mod compare;
pub mod config;
pub mod core;
pub mod live;
pub mod loader;
pub mod report;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
