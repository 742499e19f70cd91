//! Count the contents of the lattice sites around a site.

use crate::{
    board::{Board, Cell},
    lattice::{Coord, Lattice},
    pattern::Monomer,
};

/// H monomers and empty sites among the neighbors of one site.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NeighborCount {
    pub h: i32,
    pub empty: i32,
}

/// Count the H monomers and empty sites among the lattice neighbors of
/// `coord`. Only lattice sites are inspected, never bond glyphs.
pub fn count_neighbors<L: Lattice>(board: &Board<L>, coord: Coord) -> NeighborCount {
    let mut count = NeighborCount::default();
    for dir in 0..L::directions() {
        match board.get(L::neighbor(coord, dir)) {
            Cell::Monomer(Monomer::H) => count.h += 1,
            Cell::Empty => count.empty += 1,
            _ => (),
        }
    }
    count
}
