use crate::lattice::Coord;

/// The per-frame state of the search, passed by value down the recursion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchState {
    index: usize,
    from: Coord,
    score: i32,
    potential: i32,
    turned: bool,
}

impl SearchState {
    /// State after the first two monomers of a chain have been placed along
    /// direction 0, the second one at `from`.
    pub fn seeded(from: Coord, score: i32, potential: i32) -> Self {
        Self {
            index: 2,
            from,
            score,
            potential,
            turned: false,
        }
    }

    /// State after placing monomer `index` at `to` by stepping in `dir`.
    pub fn advance(&self, to: Coord, dir: usize, score: i32, potential: i32) -> Self {
        Self {
            index: self.index + 1,
            from: to,
            score,
            potential,
            turned: self.turned || dir != 0,
        }
    }

    /// Index of the next monomer to place.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Site of the most recently placed monomer.
    pub fn from(&self) -> Coord {
        self.from
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn potential(&self) -> i32 {
        self.potential
    }

    /// Whether the chain has left direction 0 yet.
    pub fn turned(&self) -> bool {
        self.turned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_is_sticky() {
        let s = SearchState::seeded(Coord::new(0, 0), 0, 6);
        let straight = s.advance(Coord::new(-2, 0), 0, 0, 6);
        assert_eq!(straight.index(), 3);
        assert!(!straight.turned());

        let turned = straight.advance(Coord::new(-2, -2), 3, 1, 4);
        assert!(turned.turned());
        assert!(turned.advance(Coord::new(-4, -2), 0, 1, 4).turned());
    }
}
