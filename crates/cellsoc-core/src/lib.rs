//! Core types and traits for the cellsoc cellular automata workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the
//! [`Coord`] and [`TickId`] identifiers, the [`CellState`] alphabet and
//! [`Cell`] traits, and the tick-level [`StepError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;

pub use cell::{Cell, CellState};
pub use error::StepError;
pub use id::{Coord, TickId};
