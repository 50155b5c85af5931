//! # Utilities Module
//!
//! Calendar helpers shared by scheduling and rendering.

pub mod dates;

pub use dates::*;
