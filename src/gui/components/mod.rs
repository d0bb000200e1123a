// src/gui/components/mod.rs
pub mod comparison_table;
pub mod export_bar;
pub mod selector_panel;
pub mod summary_cards;
