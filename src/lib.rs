//! # Dungeon Roller
//!
//! Rolls the weekly guild dungeon schedule: a handful of random dungeon paths
//! per difficulty tier, formatted as a ready-to-post announcement.
//!
//! ## Architecture Overview
//!
//! - **Catalog**: the fixed table of dungeons, their paths and difficulties
//! - **Selection**: samplers that pick distinct eligible paths for a tier
//! - **Rendering**: announcement text and JSON output
//! - **CLI**: argument parsing and boundary validation
//!
//! All randomness flows through a single [`rand::rngs::StdRng`], so a fixed
//! seed reproduces a schedule exactly.

pub mod catalog;
pub mod cli;
pub mod rendering;
pub mod selection;
pub mod utils;

pub use catalog::*;
pub use rendering::*;
pub use selection::*;
pub use utils::*;

pub use cli::Args;

/// Core error type for the dungeon roller.
#[derive(thiserror::Error, Debug)]
pub enum RollerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// More paths requested than the catalog can provide
    #[error("Requested {requested} {difficulty} paths but only {eligible} are eligible")]
    InvalidQuantity {
        difficulty: Difficulty,
        requested: usize,
        eligible: usize,
    },

    /// Catalog data breaks one of its invariants
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Result type used throughout the dungeon roller.
pub type RollerResult<T> = Result<T, RollerError>;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants.
pub mod config {
    /// Easy paths rolled when `--easy` is not given
    pub const DEFAULT_EASY_PATHS: usize = 3;

    /// Medium paths rolled when `--medium` is not given
    pub const DEFAULT_MEDIUM_PATHS: usize = 2;

    /// Hard paths rolled when `--hard` is not given
    pub const DEFAULT_HARD_PATHS: usize = 1;

    /// Second line of every announcement
    pub const GATHERING_NOTICE: &str =
        "*Gather in the Guild Hall to form groups at 20:00 CET/CEST*";

    /// Width the dungeon name is padded to in each selection line
    pub const DUNGEON_NAME_WIDTH: usize = 20;

    /// Indentation in front of each selection line
    pub const SELECTION_INDENT: &str = "    ";
}
