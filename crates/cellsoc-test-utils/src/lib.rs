//! Test utilities and fixtures for cellsoc development.
//!
//! Grids and seed maps are written as ASCII art, one string per row:
//!
//! ```
//! use cellsoc_core::Coord;
//! use cellsoc_test_utils::seeds_from_art;
//!
//! let seeds = seeds_from_art(&[".#.", "..."], &[('.', 0), ('#', 1)]);
//! assert_eq!(seeds.len(), 6);
//! assert_eq!(seeds[&Coord::new(0, 1)], 1);
//! ```
//!
//! Helpers panic on malformed art; they are for tests only.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use cellsoc_automaton::{Automaton, StateOf};
use cellsoc_core::{Cell, CellState, Coord};
use cellsoc_grid::Grid;
use cellsoc_space::{EdgeBehavior, Neighbourhood, Topology};
use indexmap::IndexMap;

/// Row count and column count of a block of ASCII art.
///
/// Panics if the art is empty or ragged.
pub fn art_dims(art: &[&str]) -> (u32, u32) {
    assert!(!art.is_empty(), "art must have at least one row");
    let cols = art[0].chars().count();
    for (r, row) in art.iter().enumerate() {
        assert_eq!(row.chars().count(), cols, "row {r} of art is ragged");
    }
    (art.len() as u32, cols as u32)
}

/// `(coord, char)` pairs of a block of art, row-major.
pub fn art_cells<'a>(art: &'a [&'a str]) -> impl Iterator<Item = (Coord, char)> + 'a {
    art.iter().enumerate().flat_map(|(r, row)| {
        row.chars()
            .enumerate()
            .map(move |(c, ch)| (Coord::new(r as i32, c as i32), ch))
    })
}

/// A complete sparse seed map from art, translating each glyph through
/// `legend` to a state code.
pub fn seeds_from_art(art: &[&str], legend: &[(char, i32)]) -> IndexMap<Coord, i32> {
    art_dims(art);
    art_cells(art)
        .map(|(at, ch)| (at, lookup(legend, ch)))
        .collect()
}

/// Only the coordinates whose glyph is in `legend`; other glyphs are left
/// out of the map.
pub fn sparse_seeds_from_art(art: &[&str], legend: &[(char, i32)]) -> IndexMap<Coord, i32> {
    art_dims(art);
    art_cells(art)
        .filter_map(|(at, ch)| {
            legend
                .iter()
                .find(|(g, _)| *g == ch)
                .map(|&(_, code)| (at, code))
        })
        .collect()
}

/// A grid for `automaton` drawn from art, using the automaton's default
/// neighbourhood and the given edge behavior.
pub fn grid_from_art<A: Automaton>(
    automaton: &A,
    art: &[&str],
    edge: EdgeBehavior,
    legend: &[(char, StateOf<A>)],
) -> Grid<A::Cell> {
    grid_from_art_with(automaton, art, edge, automaton.default_neighbourhood(), legend)
}

/// Like [`grid_from_art`] with an explicit neighbourhood.
pub fn grid_from_art_with<A: Automaton>(
    automaton: &A,
    art: &[&str],
    edge: EdgeBehavior,
    neighbourhood: Neighbourhood,
    legend: &[(char, StateOf<A>)],
) -> Grid<A::Cell> {
    let (rows, cols) = art_dims(art);
    let topo = Topology::new(rows, cols, edge, neighbourhood).expect("art topology");
    let glyphs: Vec<char> = art_cells(art).map(|(_, ch)| ch).collect();
    let mut next = glyphs.into_iter();
    Grid::from_fn(topo, |_| {
        let ch = next.next().expect("one glyph per cell");
        automaton.spawn(lookup(legend, ch))
    })
}

/// Render a grid back to art, one string per row.
pub fn grid_to_art<C: Cell>(grid: &Grid<C>, legend: &[(char, C::State)]) -> Vec<String> {
    let cols = grid.cols() as usize;
    let glyphs: Vec<char> = grid
        .cells()
        .iter()
        .map(|c| {
            let s = c.state();
            legend
                .iter()
                .find(|(_, st)| *st == s)
                .map(|&(g, _)| g)
                .unwrap_or_else(|| panic!("no glyph for state {s:?}"))
        })
        .collect();
    glyphs
        .chunks(cols)
        .map(|row| row.iter().collect())
        .collect()
}

/// Number of cells in each state of the alphabet, in alphabet order.
pub fn census<C: Cell>(grid: &Grid<C>) -> Vec<(C::State, usize)> {
    C::State::ALL
        .iter()
        .map(|&s| (s, grid.count_state(s)))
        .collect()
}

fn lookup<T: Copy>(legend: &[(char, T)], ch: char) -> T {
    legend
        .iter()
        .find(|(g, _)| *g == ch)
        .map(|&(_, v)| v)
        .unwrap_or_else(|| panic!("glyph {ch:?} not in legend"))
}
