// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{compare,copy,export,...}.

mod compare; // src/gui/actions/compare.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use compare::{clear_cache, compare, poll, refresh};
pub use copy::copy;
pub use export::export;
