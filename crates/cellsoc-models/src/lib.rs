//! Reference models for the cellsoc simulation core.
//!
//! | Model | Alphabet | Discipline | Default neighbourhood |
//! |-------|----------|------------|-----------------------|
//! | [`GameOfLife`] | [`LifeState`] | snapshot-then-commit | `Square8` |
//! | [`Percolation`] | [`PercolationState`] | snapshot-then-commit | `Square4` |
//! | [`WaTor`] | [`WaTorState`] | in place, row-major | `Square4` |
//!
//! All three default to bounded edges.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod life;
pub mod percolation;
pub mod rulestring;
pub mod wator;

pub use life::{GameOfLife, LifeRule, LifeState};
pub use percolation::{Percolation, PercolationState};
pub use rulestring::RuleParseError;
pub use wator::{WaTor, WaTorBuilder, WaTorCell, WaTorState};
