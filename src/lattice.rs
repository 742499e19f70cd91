//! Lattice topologies a chain can be folded on.
//!
//! A [`Lattice`] is a stateless description of a 2D grid: which directions a
//! monomer can step in, the coordinate offset of each direction, and how the
//! bond between two neighboring monomers is drawn. Coordinates are matrix
//! style, so `row` grows downward and `col` grows rightward.
//!
//! Monomers never sit on adjacent storage cells. On the [`Square`] lattice
//! successive monomers are two units apart, leaving the cell in between for a
//! `|` or `-` glyph. The [`Hexagonal`] lattice additionally stores its cells
//! at double resolution so diagonal `/` and `\` glyphs have room.

use std::{
    fmt::{Debug, Display},
    ops::Add,
};

use clap::ValueEnum;
use serde::Deserialize;

/// A position on a lattice, in lattice units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Self) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Runtime selector for the lattice a search runs on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LatticeKind {
    /// Square grid, four neighbors per site.
    #[default]
    Square,
    /// Triangular grid drawn with hexagonal spacing, six neighbors per site.
    Hexagonal,
}

impl Display for LatticeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatticeKind::Square => write!(f, "square"),
            LatticeKind::Hexagonal => write!(f, "hexagonal"),
        }
    }
}

/// Static description of a 2D lattice.
///
/// Direction 0 is the direction of the first bond of every folding, so
/// "turning" always means leaving direction 0.
pub trait Lattice: Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// The runtime tag of this lattice.
    const KIND: LatticeKind;

    /// Offset of each direction; the number of entries is the coordination
    /// number of the lattice.
    const DELTAS: &'static [Coord];

    /// Storage cells per lattice unit along each axis.
    const SCALE: i32;

    /// Return `true` iff stepping in direction 0 and then in `dir` is a right
    /// turn. The search forbids these moves until the chain first turns, so
    /// each folding is enumerated once up to reflection.
    fn is_right_turn(dir: usize) -> bool;

    /// Storage cells (relative to the scaled position of the monomer the bond
    /// leaves from) covered by the bond glyph in direction `dir`, and the
    /// glyph itself.
    fn link(dir: usize) -> (&'static [(i32, i32)], char);

    /// Mirror `coord` across the line through `origin` along direction 0.
    fn reflect(origin: Coord, coord: Coord) -> Coord;

    /// Number of neighbor directions.
    #[inline]
    fn directions() -> usize {
        Self::DELTAS.len()
    }

    /// The site reached by stepping from `coord` in direction `dir`.
    #[inline]
    fn neighbor(coord: Coord, dir: usize) -> Coord {
        coord + Self::DELTAS[dir]
    }

    /// Lattice extent (per axis) of a board that can hold any folding of a
    /// chain with `len` monomers started at the board center, together with
    /// every neighbor lookup the search performs around it.
    ///
    /// No lattice step moves more than two units along an axis, and lookups
    /// reach at most two steps past the most recently placed monomer.
    fn required_dim(len: usize) -> usize {
        4 * len + 3
    }
}

/// The square lattice. Directions are N, E, S, W.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Square;

impl Lattice for Square {
    const KIND: LatticeKind = LatticeKind::Square;

    const DELTAS: &'static [Coord] = &[
        Coord::new(-2, 0),
        Coord::new(0, 2),
        Coord::new(2, 0),
        Coord::new(0, -2),
    ];

    const SCALE: i32 = 1;

    fn is_right_turn(dir: usize) -> bool {
        dir == 1
    }

    fn link(dir: usize) -> (&'static [(i32, i32)], char) {
        match dir {
            0 => (&[(-1, 0)], '|'),
            1 => (&[(0, 1)], '-'),
            2 => (&[(1, 0)], '|'),
            _ => (&[(0, -1)], '-'),
        }
    }

    fn reflect(origin: Coord, coord: Coord) -> Coord {
        Coord::new(coord.row, 2 * origin.col - coord.col)
    }
}

/// The triangular lattice, drawn with hexagonal spacing. Directions are E,
/// NE, NW, W, SW, SE.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Hexagonal;

impl Lattice for Hexagonal {
    const KIND: LatticeKind = LatticeKind::Hexagonal;

    const DELTAS: &'static [Coord] = &[
        Coord::new(0, 2),
        Coord::new(-1, 1),
        Coord::new(-1, -1),
        Coord::new(0, -2),
        Coord::new(1, -1),
        Coord::new(1, 1),
    ];

    const SCALE: i32 = 2;

    fn is_right_turn(dir: usize) -> bool {
        dir == 4 || dir == 5
    }

    fn link(dir: usize) -> (&'static [(i32, i32)], char) {
        match dir {
            0 => (&[(0, 1), (0, 2), (0, 3)], '-'),
            1 => (&[(-1, 1)], '/'),
            2 => (&[(-1, -1)], '\\'),
            3 => (&[(0, -1), (0, -2), (0, -3)], '-'),
            4 => (&[(1, -1)], '/'),
            _ => (&[(1, 1)], '\\'),
        }
    }

    fn reflect(origin: Coord, coord: Coord) -> Coord {
        Coord::new(2 * origin.row - coord.row, coord.col)
    }
}
