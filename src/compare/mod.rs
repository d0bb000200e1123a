// src/compare/mod.rs
//! Spec comparison engine.
//!
//! Pure and synchronous: two [`SpecDocument`]s in, one [`ComparisonResult`]
//! out. The baseline document defines which rows exist and in what order;
//! competitor-only categories and attributes are never surfaced.
//!
//! ```text
//! catalog / live fetch → SpecDocument ×2 → Comparator → VerdictEngine per row
//!                                                ↘ ComparisonResult → report / gui
//! ```

pub mod comparator;
pub mod document;
pub mod verdict;

pub use comparator::{CategoryGroup, Comparator, ComparisonResult, ComparisonRow, compare};
pub use document::{SpecCategory, SpecDocument};
pub use verdict::{Direction, DirectionalityPolicy, NOT_SPECIFIED, Verdict, VerdictEngine, extract_number};
