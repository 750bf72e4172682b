//! Coordinate-indexed cell storage for cellsoc simulations.
//!
//! A [`Grid`] owns exactly one cell per in-bounds coordinate of its
//! [`Topology`](cellsoc_space::Topology), stored in a flat arena indexed
//! by row-major rank:
//!
//! ```text
//! Grid<C>
//! ├── Topology (extents, edge behavior, neighbourhood)
//! └── Vec<C>   (slot i holds the cell at topology.coord_at(i))
//! ```
//!
//! Slots are replaced ([`Grid::put`]) or exchanged ([`Grid::swap`]) but
//! never removed, so the key set is the full `rows x cols` rectangle for
//! the grid's whole life. [`GridSnapshot`] is the owned, model-agnostic
//! read view handed to renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod snapshot;

pub use grid::Grid;
pub use snapshot::GridSnapshot;
