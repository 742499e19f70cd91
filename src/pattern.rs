//! Monomer sequences of the HP model.
//!
//! A [`Pattern`] is the immutable chain being folded: an ordered sequence of
//! hydrophobic (`H`) and polar (`P`) [`Monomer`]s. Patterns are parsed from
//! strings such as `"HPHPPHHPH"`; anything other than the characters `H` and
//! `P` is rejected.

use std::{fmt::Display, ops::Index, str::FromStr};

use thiserror::Error;

/// One unit of the chain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Monomer {
    /// Hydrophobic. Lattice-adjacent pairs of these score.
    H,
    /// Polar.
    P,
}

impl Monomer {
    /// Return `true` iff this monomer is hydrophobic.
    pub fn is_h(self) -> bool {
        self == Monomer::H
    }

    /// The character this monomer is written (and rendered) as.
    pub fn symbol(self) -> char {
        match self {
            Monomer::H => 'H',
            Monomer::P => 'P',
        }
    }
}

impl Display for Monomer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Thrown by [`Monomer::try_from`] for any character other than `H` or `P`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseMonomerError(pub char);

impl TryFrom<char> for Monomer {
    type Error = ParseMonomerError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'H' => Ok(Monomer::H),
            'P' => Ok(Monomer::P),
            c => Err(ParseMonomerError(c)),
        }
    }
}

/// Thrown by [`Pattern::from_str`] when the input is not a non-empty string
/// over the alphabet `{H, P}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("invalid monomer {found:?} at position {index} (expected 'H' or 'P')")]
    InvalidMonomer { index: usize, found: char },
}

/// An ordered, immutable chain of monomers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    monomers: Vec<Monomer>,
}

impl Pattern {
    /// Number of monomers in the chain.
    pub fn len(&self) -> usize {
        self.monomers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monomers.is_empty()
    }

    /// Number of hydrophobic monomers in the chain.
    pub fn h_count(&self) -> usize {
        self.monomers.iter().filter(|m| m.is_h()).count()
    }
}

impl Index<usize> for Pattern {
    type Output = Monomer;

    fn index(&self, index: usize) -> &Self::Output {
        &self.monomers[index]
    }
}

impl FromStr for Pattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePatternError::Empty);
        }
        let monomers = s
            .chars()
            .enumerate()
            .map(|(index, c)| {
                Monomer::try_from(c)
                    .map_err(|ParseMonomerError(found)| ParsePatternError::InvalidMonomer { index, found })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { monomers })
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.monomers {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monomer_from_char() {
        assert_eq!(Monomer::try_from('H'), Ok(Monomer::H));
        assert_eq!(Monomer::try_from('P'), Ok(Monomer::P));
        assert_eq!(Monomer::try_from('h'), Err(ParseMonomerError('h')));
    }

    #[test]
    fn pattern_round_trips_through_display() {
        let p: Pattern = "PPHPHHPH".parse().unwrap();
        assert_eq!(p.len(), 8);
        assert_eq!(p.h_count(), 4);
        assert_eq!(p[2], Monomer::H);
        assert_eq!(p.to_string(), "PPHPHHPH");
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert_eq!("".parse::<Pattern>(), Err(ParsePatternError::Empty));
    }

    #[test]
    fn foreign_characters_are_rejected() {
        assert_eq!(
            "HPXH".parse::<Pattern>(),
            Err(ParsePatternError::InvalidMonomer { index: 2, found: 'X' })
        );
        assert!("HP H".parse::<Pattern>().is_err());
    }
}
