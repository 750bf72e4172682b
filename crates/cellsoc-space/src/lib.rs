//! Grid topology for cellsoc simulations.
//!
//! This crate answers one question for every model: given a cell and the
//! grid extents, which coordinates are its neighbours? The answer is split
//! into three orthogonal parts:
//!
//! - [`EdgeBehavior`]: bounded (absorb) or toroidal (wrap) edges
//! - [`Neighbourhood`]: the offset set (4-, 6-, 8-direction, downward, custom)
//! - [`Topology`]: extents plus both of the above, with bounds checking,
//!   offset resolution, and the row-major canonical ordering

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub(crate) mod grid2d;
pub mod neighbourhood;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use neighbourhood::{Neighbourhood, Offsets};
pub use topology::Topology;
