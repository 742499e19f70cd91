//! Exhaustive branch-and-bound search over the foldings of a chain.
//!
//! The search places one monomer per recursive call, stepping from the most
//! recently placed monomer to each empty neighboring site in turn. Before
//! placing, it updates the running score and potential and asks the enabled
//! [`Bound`]s whether the best archived score is still reachable; if not, the
//! branch is pruned. Every placement is undone when its call returns, so the
//! board holds exactly the current partial folding at all times.
//!
//! Two rules keep the search from enumerating symmetric copies of the same
//! folding. The first two monomers are placed by the caller along direction 0
//! (rotations), and until the chain first turns away from direction 0, right
//! turns are forbidden (reflections).

use tracing::{debug, info, trace};

use crate::{
    archive::{Archive, Folding, Outcome},
    board::{Board, Cell},
    bounds::{bound_exceeded, isolated_potential, remaining_degrees, Bound},
    lattice::{Coord, Lattice},
    neighbors::{count_neighbors, NeighborCount},
    pattern::Pattern,
    state::SearchState,
};

/// Partial foldings of this many monomers are logged at trace level.
const INTERIM_INDEX: usize = 8;

/// Counters describing how much of the search tree was visited.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls, i.e. partial foldings visited.
    pub placements: u64,
    /// Candidate placements rejected by a bound.
    pub pruned: u64,
    /// Complete foldings reached, archived or not.
    pub completed: u64,
}

/// One run of the search over a single board.
///
/// The search exclusively owns its board, the chain of placed sites, and its
/// archive, so independent searches never share state.
pub struct Search<'a, L: Lattice> {
    pattern: &'a Pattern,
    board: Board<L>,
    path: Vec<Coord>,
    archive: Archive<L>,
    degrees: Vec<i32>,
    contact_bound: bool,
    pocket_bound: bool,
    break_mirror_symmetry: bool,
    stats: SearchStats,
}

impl<'a, L: Lattice> Search<'a, L> {
    /// Prepare a search of `pattern` on `board`, which must already hold the
    /// monomers at the sites in `path` (in chain order). Only foldings scoring
    /// at least `floor` are archived.
    pub fn new(
        pattern: &'a Pattern,
        board: Board<L>,
        path: Vec<Coord>,
        floor: i32,
        bounds: &[Bound],
        break_mirror_symmetry: bool,
    ) -> Self {
        Self {
            pattern,
            board,
            path,
            archive: Archive::new(floor),
            degrees: remaining_degrees(pattern, L::directions()),
            contact_bound: bounds.contains(&Bound::Contact),
            pocket_bound: bounds.contains(&Bound::Pocket),
            break_mirror_symmetry,
            stats: SearchStats::default(),
        }
    }

    /// Explore every completion of the partial folding described by `state`.
    pub fn run(&mut self, state: SearchState) {
        self.stats.placements += 1;
        let index = state.index();

        if index == INTERIM_INDEX {
            trace!(
                score = state.score(),
                potential = state.potential(),
                "interim folding\n{}",
                self.board
            );
        }

        if index == self.pattern.len() {
            self.complete(state.score());
            return;
        }

        let monomer = self.pattern[index];
        let from = state.from();
        for dir in 0..L::directions() {
            let to = L::neighbor(from, dir);
            if !self.board.get(to).is_empty()
                || (self.break_mirror_symmetry && !state.turned() && L::is_right_turn(dir))
            {
                continue;
            }

            let NeighborCount { h, empty } = count_neighbors(&self.board, to);
            let (score, mut potential) = if monomer.is_h() {
                (state.score() + h, state.potential() + empty - h)
            } else {
                (state.score(), state.potential() - h)
            };

            if self.pocket_bound {
                potential -= isolated_potential(&self.board, from, dir);
            }

            if self.contact_bound
                && bound_exceeded(score, self.degrees[index], potential, self.archive.max_score())
            {
                self.stats.pruned += 1;
                continue;
            }

            self.board.set(to, Cell::Monomer(monomer));
            self.board.draw_link(from, dir);
            self.path.push(to);

            self.run(state.advance(to, dir, score, potential));

            self.path.pop();
            self.board.erase_link(from, dir);
            self.board.set(to, Cell::Empty);
        }
    }

    fn complete(&mut self, score: i32) {
        self.stats.completed += 1;
        let (board, path) = (&self.board, &self.path);
        match self
            .archive
            .record(score, || Folding::new(board.clone(), path.clone(), score))
        {
            Outcome::NewRecord => info!(score, "new max score\n{}", self.board),
            Outcome::Tie => debug!(score, "matched max score\n{}", self.board),
            Outcome::Discarded => (),
        }
    }

    /// The live board, holding whatever the search has not undone.
    pub fn board(&self) -> &Board<L> {
        &self.board
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn into_parts(self) -> (Board<L>, Archive<L>) {
        (self.board, self.archive)
    }
}
