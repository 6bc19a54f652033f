//! Core tables for Guaxiang: trigrams, the five elements, and the 64 hexagrams.
//!
//! Everything in this crate is immutable, process-wide data plus pure lookup
//! functions. The divination engine in `gx-oracle` builds on these tables;
//! nothing here performs I/O or holds mutable state.

/// Long-form commentary attached to some hexagrams.
pub mod detail;
/// The five elements (五行) and their attributes.
pub mod element;
/// Error types used throughout the crate.
pub mod error;
/// The 64-entry hexagram table and its lookups.
pub mod hexagram;
/// The eight trigrams, their lines, and the single-line transition table.
pub mod trigram;

/// Re-export the detail table lookup.
pub use detail::{HexagramDetail, hexagram_detail};
/// Re-export element types.
pub use element::{Element, ElementInfo, Relation};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hexagram types and lookups.
pub use hexagram::{Hexagram, all_hexagrams, find_hexagram, hexagram};
/// Re-export trigram types.
pub use trigram::{Line, LinePosition, Trigram, TrigramInfo};
