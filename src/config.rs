//! Fold settings loaded from TOML files and command-line overrides.
//!
//! ```toml
//! pattern = "HPHPPHHPHPPHPHHPPHPH"
//! lattice = "square"
//! min-score = 0
//! bounds = ["contact", "pocket"]
//! break-mirror-symmetry = true
//! dimension = 120
//! ```
//!
//! Every key is optional. Missing keys fall back to [`FoldOptions::default`]
//! and to the default chain of the selected lattice.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{
    bounds::Bound,
    error::{ConfigError, FoldError},
    fold::{default_pattern, FoldOptions},
    lattice::LatticeKind,
    pattern::Pattern,
};

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FoldConfig {
    pub pattern: Option<String>,
    pub lattice: Option<LatticeKind>,
    pub min_score: Option<i32>,
    pub bounds: Option<Vec<Bound>>,
    pub break_mirror_symmetry: Option<bool>,
    pub dimension: Option<usize>,
}

impl FoldConfig {
    /// Load a configuration from the TOML file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading fold configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Combine two configurations; values set in `overrides` win.
    pub fn merge(self, overrides: FoldConfig) -> FoldConfig {
        FoldConfig {
            pattern: overrides.pattern.or(self.pattern),
            lattice: overrides.lattice.or(self.lattice),
            min_score: overrides.min_score.or(self.min_score),
            bounds: overrides.bounds.or(self.bounds),
            break_mirror_symmetry: overrides.break_mirror_symmetry.or(self.break_mirror_symmetry),
            dimension: overrides.dimension.or(self.dimension),
        }
    }

    pub fn lattice(&self) -> LatticeKind {
        self.lattice.unwrap_or_default()
    }

    /// The chain to fold, or the default chain of the selected lattice.
    pub fn pattern(&self) -> Result<Pattern, FoldError> {
        let raw = self
            .pattern
            .as_deref()
            .unwrap_or_else(|| default_pattern(self.lattice()));
        Ok(raw.trim().parse()?)
    }

    pub fn options(&self) -> FoldOptions {
        let defaults = FoldOptions::default();
        FoldOptions {
            initial_max_score: self.min_score.unwrap_or(defaults.initial_max_score),
            bounds: self.bounds.clone().unwrap_or(defaults.bounds),
            break_mirror_symmetry: self
                .break_mirror_symmetry
                .unwrap_or(defaults.break_mirror_symmetry),
            dimension: self.dimension.or(defaults.dimension),
        }
    }
}
