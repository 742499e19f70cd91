//! The best foldings found by a search.
//!
//! An [`Archive`] holds the highest score seen among complete foldings and
//! every [`Folding`] that achieved it. A strictly better score discards all
//! previously archived foldings. Foldings are independent snapshots of the
//! live board, never references into it.

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::{
    board::Board,
    lattice::{Coord, Lattice},
    pattern::Pattern,
};

/// A complete folding of a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folding<L: Lattice> {
    board: Board<L>,
    coords: Vec<Coord>,
    score: i32,
}

impl<L: Lattice> Folding<L> {
    pub fn new(board: Board<L>, coords: Vec<Coord>, score: i32) -> Self {
        Self {
            board,
            coords,
            score,
        }
    }

    /// The rendered board of this folding.
    pub fn board(&self) -> &Board<L> {
        &self.board
    }

    /// The site of every monomer, in chain order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The score the search reported for this folding.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Score this folding from scratch: the number of lattice-adjacent pairs
    /// of H monomers. Pairs bonded along the chain count as well.
    pub fn recompute_score(&self, pattern: &Pattern) -> i32 {
        let sites: HashMap<Coord, usize> =
            self.coords.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let mut score = 0;
        for (i, &c) in self.coords.iter().enumerate() {
            if !pattern[i].is_h() {
                continue;
            }
            for dir in 0..L::directions() {
                if let Some(&j) = sites.get(&L::neighbor(c, dir)) {
                    if j > i && pattern[j].is_h() {
                        score += 1;
                    }
                }
            }
        }
        score
    }

    /// Return `true` iff no two monomers share a site.
    pub fn is_self_avoiding(&self) -> bool {
        let mut seen = HashSet::new();
        self.coords.iter().all(|c| seen.insert(*c))
    }

    /// Return `true` iff every pair of consecutive monomers are lattice
    /// neighbors.
    pub fn is_connected(&self) -> bool {
        self.coords
            .windows(2)
            .all(|w| (0..L::directions()).any(|dir| L::neighbor(w[0], dir) == w[1]))
    }

    /// Return `true` iff the chain never leaves direction 0, i.e. the folding
    /// is its own mirror image.
    pub fn is_straight(&self) -> bool {
        self.coords.windows(2).all(|w| L::neighbor(w[0], 0) == w[1])
    }

    /// Sites of the mirror image of this folding, reflected across the line of
    /// its first bond.
    pub fn mirrored(&self) -> Vec<Coord> {
        let Some(&origin) = self.coords.first() else {
            return Vec::new();
        };
        self.coords.iter().map(|&c| L::reflect(origin, c)).collect()
    }
}

impl<L: Lattice> Display for Folding<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// What [`Archive::record`] did with a complete folding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The folding beat every previous score; older foldings were dropped.
    NewRecord,
    /// The folding matched the best score and was kept alongside the others.
    Tie,
    /// The folding scored below the best and was not kept.
    Discarded,
}

/// The best score seen so far and every folding achieving it.
#[derive(Debug, Clone)]
pub struct Archive<L: Lattice> {
    max_score: i32,
    solutions: Vec<Folding<L>>,
}

impl<L: Lattice> Archive<L> {
    /// Construct an empty archive that only accepts scores of at least
    /// `floor`.
    pub fn new(floor: i32) -> Self {
        Self {
            max_score: floor,
            solutions: Vec::new(),
        }
    }

    /// Offer a complete folding with the given `score`. The snapshot is only
    /// taken if the folding is kept.
    pub fn record(&mut self, score: i32, snapshot: impl FnOnce() -> Folding<L>) -> Outcome {
        if score > self.max_score {
            self.solutions.clear();
            self.solutions.push(snapshot());
            self.max_score = score;
            Outcome::NewRecord
        } else if score == self.max_score {
            self.solutions.push(snapshot());
            Outcome::Tie
        } else {
            Outcome::Discarded
        }
    }

    /// The best score seen, or the floor if nothing reached it.
    pub fn max_score(&self) -> i32 {
        self.max_score
    }

    pub fn solutions(&self) -> &[Folding<L>] {
        &self.solutions
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn into_parts(self) -> (i32, Vec<Folding<L>>) {
        (self.max_score, self.solutions)
    }
}
