// Monomer alphabet and chains
pub mod pattern;

// Lattice topologies and coordinates
pub mod lattice;

// Occupancy grid with bond glyphs and ASCII rendering
pub mod board;

// Neighbor counting for scoring and bounds
pub mod neighbors;

// Pruning bounds
pub mod bounds;

// Per-frame search state
pub mod state;

// Best foldings found so far
pub mod archive;

// The hard bit: branch-and-bound search over foldings
pub mod search;

// Driver: validation, seeding, timing
pub mod fold;

// Settings from TOML files and the command line
pub mod config;

// Error types
pub mod error;

pub use fold::{fold, fold_on, FoldOptions, FoldReport, Summary};
