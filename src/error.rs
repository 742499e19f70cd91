use std::path::PathBuf;

use thiserror::Error;

use crate::pattern::ParsePatternError;

#[derive(Debug, Error)]
pub enum FoldError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] ParsePatternError),

    #[error("pattern has {len} monomer(s), but at least 2 are required")]
    PatternTooShort { len: usize },

    #[error(
        "board dimension {dimension} is too small for a chain of {len} monomers \
         (at least {required} is required)"
    )]
    BoardTooSmall {
        dimension: usize,
        required: usize,
        len: usize,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
