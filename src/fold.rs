//! Fold a chain: validate it, provision and seed a board, run the search, and
//! time it.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{
    archive::Folding,
    board::{Board, Cell},
    bounds::Bound,
    error::FoldError,
    lattice::{Coord, Hexagonal, Lattice, LatticeKind, Square},
    pattern::Pattern,
    search::{Search, SearchStats},
    state::SearchState,
};

/// Chain folded on the square lattice when none is given (optimum 15).
pub const DEFAULT_SQUARE_PATTERN: &str = "PPHPHHPHPPHPHPHPPHPHHPHPPHPHPH";

/// Chain folded on the hexagonal lattice when none is given.
pub const DEFAULT_HEXAGONAL_PATTERN: &str = "HHPPHPPPHHPPHPHPHPH";

/// The chain folded on `lattice` when none is given.
pub fn default_pattern(lattice: LatticeKind) -> &'static str {
    match lattice {
        LatticeKind::Square => DEFAULT_SQUARE_PATTERN,
        LatticeKind::Hexagonal => DEFAULT_HEXAGONAL_PATTERN,
    }
}

/// Search parameters independent of the lattice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldOptions {
    /// Only foldings scoring at least this much are reported. Raising it
    /// lets the bounds prune more, at the risk of finding nothing.
    pub initial_max_score: i32,
    /// Pruning rules; empty for an exhaustive enumeration.
    pub bounds: Vec<Bound>,
    /// Forbid right turns until the chain first turns, so mirror images are
    /// only enumerated once.
    pub break_mirror_symmetry: bool,
    /// Lattice extent of the board; derived from the chain length if `None`.
    pub dimension: Option<usize>,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            initial_max_score: 0,
            bounds: Bound::all(),
            break_mirror_symmetry: true,
            dimension: None,
        }
    }
}

impl FoldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_max_score(mut self, score: i32) -> Self {
        self.initial_max_score = score;
        self
    }

    pub fn bounds(mut self, bounds: &[Bound]) -> Self {
        self.bounds = bounds.to_vec();
        self
    }

    pub fn break_mirror_symmetry(mut self, enabled: bool) -> Self {
        self.break_mirror_symmetry = enabled;
        self
    }

    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }
}

/// Result of folding a chain on the lattice `L`.
#[derive(Debug, Clone)]
pub struct FoldReport<L: Lattice> {
    /// The best score found, or the initial floor if nothing reached it.
    pub max_score: i32,
    /// Every folding achieving `max_score`.
    pub solutions: Vec<Folding<L>>,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    pub stats: SearchStats,
}

/// Lattice-independent result of [`fold_on`], with rendered foldings.
#[derive(Debug, Clone)]
pub struct Summary {
    pub lattice: LatticeKind,
    pub max_score: i32,
    pub solutions: Vec<String>,
    pub elapsed: Duration,
    pub stats: SearchStats,
}

impl<L: Lattice> From<FoldReport<L>> for Summary {
    fn from(report: FoldReport<L>) -> Self {
        Self {
            lattice: L::KIND,
            max_score: report.max_score,
            solutions: report.solutions.iter().map(|f| f.to_string()).collect(),
            elapsed: report.elapsed,
            stats: report.stats,
        }
    }
}

/// Place the first two monomers of `pattern` at the center of `board` along
/// direction 0, which fixes the orientation of every folding.
///
/// Returns the initial search state and the sites placed so far.
pub fn seed<L: Lattice>(pattern: &Pattern, board: &mut Board<L>) -> (SearchState, Vec<Coord>) {
    let first = board.center();
    let second = L::neighbor(first, 0);
    board.set(first, Cell::Monomer(pattern[0]));
    board.set(second, Cell::Monomer(pattern[1]));
    board.draw_link(first, 0);

    let score = (pattern[0].is_h() && pattern[1].is_h()) as i32;
    // Each of them could still touch D - 1 more monomers.
    let h = pattern[0].is_h() as i32 + pattern[1].is_h() as i32;
    let potential = (L::directions() as i32 - 1) * h;

    (SearchState::seeded(second, score, potential), vec![first, second])
}

/// Undo [`seed`].
fn unseed<L: Lattice>(board: &mut Board<L>, path: &[Coord]) {
    board.erase_link(path[0], 0);
    board.set(path[1], Cell::Empty);
    board.set(path[0], Cell::Empty);
}

/// Find every optimal folding of `pattern` on the lattice `L`.
pub fn fold<L: Lattice>(pattern: &Pattern, options: &FoldOptions) -> Result<FoldReport<L>, FoldError> {
    let len = pattern.len();
    if len < 2 {
        return Err(FoldError::PatternTooShort { len });
    }

    let required = L::required_dim(len);
    let dimension = options.dimension.unwrap_or(required);
    if dimension < required {
        return Err(FoldError::BoardTooSmall {
            dimension,
            required,
            len,
        });
    }
    debug!(lattice = %L::KIND, dimension, bounds = ?options.bounds, "provisioning board");

    let mut board = Board::<L>::new(dimension);
    let (state, path) = seed(pattern, &mut board);

    let start = Instant::now();
    let mut search = Search::new(
        pattern,
        board,
        path.clone(),
        options.initial_max_score,
        &options.bounds,
        options.break_mirror_symmetry,
    );
    search.run(state);
    let elapsed = start.elapsed();

    let stats = search.stats();
    let (mut board, archive) = search.into_parts();
    unseed(&mut board, &path);
    debug_assert!(board.is_clear(), "search left placements on the board");

    let (max_score, solutions) = archive.into_parts();
    info!(
        max_score,
        solutions = solutions.len(),
        placements = stats.placements,
        pruned = stats.pruned,
        elapsed_ms = elapsed.as_millis() as u64,
        "search finished"
    );

    Ok(FoldReport {
        max_score,
        solutions,
        elapsed,
        stats,
    })
}

/// Find every optimal folding of `pattern` on the lattice selected at run
/// time by `lattice`.
pub fn fold_on(lattice: LatticeKind, pattern: &Pattern, options: &FoldOptions) -> Result<Summary, FoldError> {
    match lattice {
        LatticeKind::Square => fold::<Square>(pattern, options).map(Summary::from),
        LatticeKind::Hexagonal => fold::<Hexagonal>(pattern, options).map(Summary::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Monomer;

    fn parse(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn two_h_monomers_score_one() {
        let report = fold::<Square>(&parse("HH"), &FoldOptions::default()).unwrap();
        assert_eq!(report.max_score, 1);
        assert_eq!(report.solutions.len(), 1);
        assert!(report.solutions[0].is_straight());
        assert_eq!(report.stats.placements, 1);
    }

    #[test]
    fn hph_cannot_make_contacts() {
        let report = fold::<Square>(&parse("HPH"), &FoldOptions::default()).unwrap();
        assert_eq!(report.max_score, 0);
        // Straight, or one left turn.
        assert_eq!(report.solutions.len(), 2);
        assert_eq!(report.solutions.iter().filter(|f| f.is_straight()).count(), 1);
    }

    #[test]
    fn hph_bends_into_a_triangle_on_the_hexagonal_lattice() {
        let report = fold::<Hexagonal>(&parse("HPH"), &FoldOptions::default()).unwrap();
        assert_eq!(report.max_score, 1);
        assert_eq!(report.solutions.len(), 1);
    }

    #[test]
    fn seeding_places_two_bonded_monomers() {
        let pattern = parse("HPH");
        let mut board = Board::<Square>::for_chain(pattern.len());
        let (state, path) = seed(&pattern, &mut board);
        assert_eq!(state.index(), 2);
        assert_eq!(state.score(), 0);
        assert_eq!(state.potential(), 3);
        assert_eq!(state.from(), path[1]);
        assert_eq!(board.get(path[0]), Cell::Monomer(Monomer::H));
        assert_eq!(board.get(path[1]), Cell::Monomer(Monomer::P));

        unseed(&mut board, &path);
        assert!(board.is_clear());
    }

    #[test]
    fn unreachable_floor_yields_no_solutions() {
        let options = FoldOptions::new().initial_max_score(3);
        let report = fold::<Square>(&parse("HPPH"), &options).unwrap();
        assert_eq!(report.max_score, 3);
        assert!(report.solutions.is_empty());
    }

    #[test]
    fn single_monomer_is_rejected() {
        let err = fold::<Square>(&parse("H"), &FoldOptions::default()).unwrap_err();
        assert!(matches!(err, FoldError::PatternTooShort { len: 1 }));
    }

    #[test]
    fn undersized_board_is_rejected() {
        let options = FoldOptions::new().dimension(10);
        let err = fold::<Hexagonal>(&parse("HPHPH"), &options).unwrap_err();
        assert!(matches!(
            err,
            FoldError::BoardTooSmall {
                dimension: 10,
                required: 23,
                len: 5
            }
        ));
    }

    #[test]
    fn oversized_board_gives_the_same_answer() {
        let options = FoldOptions::new().dimension(60);
        let report = fold::<Square>(&parse("HPHPPHHPH"), &options).unwrap();
        assert_eq!(report.max_score, 3);
        assert_eq!(report.solutions.len(), 21);
    }

    #[test]
    fn evenly_spaced_h_monomers_fold_into_a_single_optimum() {
        let pattern = parse("HPHPPHPPHPPH");
        let report = fold::<Square>(&pattern, &FoldOptions::default()).unwrap();
        assert_eq!(report.max_score, 5);
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].recompute_score(&pattern), 5);

        let naive = fold::<Square>(&pattern, &FoldOptions::new().bounds(&[])).unwrap();
        assert_eq!(naive.max_score, 5);
        assert_eq!(naive.solutions.len(), 1);
        assert!(report.stats.placements < naive.stats.placements);
    }

    #[test]
    fn runtime_selection_matches_static_selection() {
        let pattern = parse("HHPPHH");
        let summary = fold_on(LatticeKind::Hexagonal, &pattern, &FoldOptions::default()).unwrap();
        assert_eq!(summary.lattice, LatticeKind::Hexagonal);
        assert_eq!(summary.max_score, 5);
        assert_eq!(summary.solutions.len(), 4);
        assert!(summary.solutions.iter().all(|s| s.contains('H')));
    }
}
