//! The mutable grid a chain is folded onto.
//!
//! A [`Board`] stores one [`Cell`] per storage position. Monomers live on
//! lattice sites; the cells between them hold the glyphs of the bonds drawn by
//! [`Board::draw_link`]. The glyphs are purely cosmetic: the search only ever
//! reads lattice sites, so a glyph can never be mistaken for a monomer.
//!
//! The search mutates a single board in place and undoes every change on
//! backtrack. Archived foldings are independent clones.

use std::{fmt::Display, marker::PhantomData};

use crate::{
    lattice::{Coord, Lattice},
    pattern::Monomer,
};

/// Contents of one storage position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Monomer(Monomer),
    /// A bond glyph drawn between two monomers.
    Link(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character this cell renders as.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Monomer(m) => m.symbol(),
            Cell::Link(glyph) => glyph,
        }
    }
}

/// A square occupancy grid over the lattice `L`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<L: Lattice> {
    dim: usize,
    stride: usize,
    cells: Vec<Cell>,
    lattice: PhantomData<L>,
}

impl<L: Lattice> Board<L> {
    /// Construct an empty board spanning `dim` lattice units per axis.
    pub fn new(dim: usize) -> Self {
        let stride = dim * L::SCALE as usize;
        Self {
            dim,
            stride,
            cells: vec![Cell::Empty; stride * stride],
            lattice: PhantomData,
        }
    }

    /// Construct an empty board large enough for any folding of a chain with
    /// `len` monomers started at [`Board::center`].
    pub fn for_chain(len: usize) -> Self {
        Self::new(L::required_dim(len))
    }

    /// The site foldings are started from.
    pub fn center(&self) -> Coord {
        let c = (self.dim / 2) as i32;
        Coord::new(c, c)
    }

    /// Map a storage position to its slot in `cells`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the board. A board that is too
    /// small for its chain would otherwise silently corrupt every result.
    fn slot(&self, row: i32, col: i32) -> usize {
        let s = self.stride as i32;
        if row < 0 || row >= s || col < 0 || col >= s {
            panic!(
                "board is too small: cell ({row}, {col}) lies outside the {s}x{s} grid; \
                 increase the board dimension"
            );
        }
        row as usize * self.stride + col as usize
    }

    /// Return the contents of the lattice site `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.slot(coord.row * L::SCALE, coord.col * L::SCALE)]
    }

    /// Overwrite the lattice site `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let slot = self.slot(coord.row * L::SCALE, coord.col * L::SCALE);
        self.cells[slot] = cell;
    }

    /// Reset every cell to [`Cell::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Draw the bond leaving the monomer at `coord` in direction `dir`.
    pub fn draw_link(&mut self, coord: Coord, dir: usize) {
        let (offsets, glyph) = L::link(dir);
        self.paint_link(coord, offsets, Cell::Link(glyph));
    }

    /// Erase the bond drawn by [`Board::draw_link`] with the same arguments.
    pub fn erase_link(&mut self, coord: Coord, dir: usize) {
        let (offsets, _) = L::link(dir);
        self.paint_link(coord, offsets, Cell::Empty);
    }

    fn paint_link(&mut self, coord: Coord, offsets: &[(i32, i32)], cell: Cell) {
        let (row, col) = (coord.row * L::SCALE, coord.col * L::SCALE);
        for (dr, dc) in offsets {
            let slot = self.slot(row + dr, col + dc);
            self.cells[slot] = cell;
        }
    }

    /// Return `true` iff no cell holds a monomer or a glyph.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Iterate over every placed monomer and its site, in storage order.
    pub fn monomers(&self) -> impl Iterator<Item = (Coord, Monomer)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| match cell {
            Cell::Monomer(m) => {
                let row = (i / self.stride) as i32 / L::SCALE;
                let col = (i % self.stride) as i32 / L::SCALE;
                Some((Coord::new(row, col), *m))
            }
            _ => None,
        })
    }

    fn row_is_empty(&self, row: usize) -> bool {
        self.cells[row * self.stride..(row + 1) * self.stride]
            .iter()
            .all(|c| c.is_empty())
    }

    fn col_is_empty(&self, col: usize) -> bool {
        (0..self.stride).all(|row| self.cells[row * self.stride + col].is_empty())
    }
}

/// Render the occupied bounding box as bordered ASCII art, with a one-cell
/// margin on the left and right.
impl<L: Lattice> Display for Board<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<usize> = (0..self.stride).filter(|&r| !self.row_is_empty(r)).collect();
        let cols: Vec<usize> = (0..self.stride).filter(|&c| !self.col_is_empty(c)).collect();

        let (Some(&min_row), Some(&max_row), Some(&min_col), Some(&max_col)) =
            (rows.first(), rows.last(), cols.first(), cols.last())
        else {
            return writeln!(f, " \n ");
        };
        let min_col = min_col.saturating_sub(1);
        let max_col = (max_col + 1).min(self.stride - 1);
        let border = "-".repeat(max_col - min_col + 1);

        writeln!(f, " {border}")?;
        for row in min_row..=max_row {
            let line: String = (min_col..=max_col)
                .map(|col| self.cells[row * self.stride + col].symbol())
                .collect();
            writeln!(f, "|{line}|")?;
        }
        writeln!(f, " {border}")
    }
}
