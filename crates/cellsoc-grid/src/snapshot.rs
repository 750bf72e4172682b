//! Owned, model-agnostic view of a grid's states.

use crate::grid::Grid;
use cellsoc_core::{Cell, CellState, Coord};

/// A copy of every cell's state code, row-major.
///
/// This is what a renderer consumes: it needs no knowledge of the model's
/// cell type, only the code of each position and the legend mapping codes
/// to labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    rows: u32,
    cols: u32,
    codes: Vec<i32>,
    legend: Vec<(i32, &'static str)>,
}

impl GridSnapshot {
    /// Capture the current states of `grid`.
    pub fn of<C: Cell>(grid: &Grid<C>) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            codes: grid.cells().iter().map(|c| c.state().code()).collect(),
            legend: C::State::ALL.iter().map(|s| (s.code(), s.label())).collect(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// State codes in row-major order.
    pub fn codes(&self) -> &[i32] {
        &self.codes
    }

    /// Every `(code, label)` pair of the model's alphabet.
    pub fn legend(&self) -> &[(i32, &'static str)] {
        &self.legend
    }

    /// The state code at `coord`, or `None` if out of bounds.
    pub fn code_at(&self, coord: Coord) -> Option<i32> {
        if coord.row < 0
            || coord.col < 0
            || coord.row >= self.rows as i32
            || coord.col >= self.cols as i32
        {
            return None;
        }
        let i = (coord.row as usize) * (self.cols as usize) + coord.col as usize;
        self.codes.get(i).copied()
    }

    /// The state label at `coord`, or `None` if out of bounds.
    pub fn label_at(&self, coord: Coord) -> Option<&'static str> {
        let code = self.code_at(coord)?;
        self.legend
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// `(coord, code)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        let cols = self.cols as usize;
        self.codes
            .iter()
            .enumerate()
            .map(move |(i, &code)| (Coord::new((i / cols) as i32, (i % cols) as i32), code))
    }

    /// Render as text, one line per row, using `glyph` for each code.
    pub fn to_text(&self, glyph: impl Fn(i32) -> char) -> String {
        let mut out = String::with_capacity(self.codes.len() + self.rows as usize);
        for row in self.codes.chunks(self.cols as usize) {
            out.extend(row.iter().map(|&c| glyph(c)));
            out.push('\n');
        }
        out
    }
}
