//! Prune partial foldings from which the best score cannot be reached.
//!
//! Each bound combines information about the current partial folding into an
//! upper bound on the score the rest of the chain can still add. Let `score`
//! be the score of the partial folding, `best` the highest score archived so
//! far, and `delta` the bound. If ever `score + delta < best`, no completion
//! of this partial folding can be archived, so it is pruned.
//!
//! Two quantities feed the bound:
//!
//! - *Potential*: roughly the number of empty sites next to placed H
//!   monomers, i.e. contacts that future monomers could still make. It is
//!   maintained incrementally by the search.
//! - *Degree*: a geometry-independent bound on the contacts every remaining H
//!   monomer could make, computed from the pattern alone.

use clap::ValueEnum;
use serde::Deserialize;

use crate::{
    board::{Board, Cell},
    lattice::{Coord, Lattice},
    neighbors::count_neighbors,
    pattern::Pattern,
};

/// Pruning rule applied by the search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bound {
    /// Bound the remaining score by the smaller of the remaining degree and
    /// the current potential, where each potential slot beyond the degree is
    /// shared by at most two future contacts.
    Contact,
    /// Remove from the potential every empty site next to the previous
    /// monomer that has no empty neighbors left, since no future monomer can
    /// ever reach it. Only single-site pockets are detected. Tightens
    /// [`Bound::Contact`] and has no effect without it.
    Pocket,
}

impl Bound {
    /// The bounds used when none are requested explicitly.
    pub fn all() -> Vec<Bound> {
        vec![Bound::Contact, Bound::Pocket]
    }
}

/// For every index `i`, the total degree of the H monomers after `i`.
///
/// An H monomer can touch at most `D - 2` non-bonded monomers when it sits
/// inside the chain (one neighbor site is taken by the chain on each side),
/// or `D - 1` when it is the last monomer. Its bonded neighbors count too
/// when they are H, since backbone H-H adjacencies score.
pub fn remaining_degrees(pattern: &Pattern, directions: usize) -> Vec<i32> {
    let n = pattern.len();
    let base = directions as i32 - 2;
    let mut degrees = vec![0; n];
    let mut total = 0;
    for i in (1..n).rev() {
        degrees[i] = total;
        if pattern[i].is_h() {
            let prev = pattern[i - 1].is_h() as i32;
            let next = if i == n - 1 { 1 } else { pattern[i + 1].is_h() as i32 };
            total += base + prev + next;
        }
    }
    if n > 0 {
        degrees[0] = total;
    }
    degrees
}

/// Upper bound on the score still obtainable, from the remaining `degree` and
/// the current `potential`.
#[inline]
pub fn delta(degree: i32, potential: i32) -> i32 {
    if degree < potential {
        degree
    } else {
        potential + (degree - potential) / 2
    }
}

/// Return `true` iff a partial folding with this `score`, `degree`, and
/// `potential` can no longer reach `best`.
#[inline]
pub fn bound_exceeded(score: i32, degree: i32, potential: i32, best: i32) -> bool {
    score + delta(degree, potential) < best
}

/// Potential stranded around `from` once the next monomer is placed in
/// direction `skip`: the H-neighbor count of every empty neighbor of `from`
/// that has no empty neighbor of its own.
pub fn isolated_potential<L: Lattice>(board: &Board<L>, from: Coord, skip: usize) -> i32 {
    (0..L::directions())
        .filter(|&dir| dir != skip)
        .map(|dir| L::neighbor(from, dir))
        .filter(|&site| board.get(site) == Cell::Empty)
        .map(|site| count_neighbors(board, site))
        .filter(|count| count.empty == 0)
        .map(|count| count.h)
        .sum()
}
