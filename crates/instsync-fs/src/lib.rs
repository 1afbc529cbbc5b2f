//! Filesystem helpers for the instruction file synchronizer
//!
//! Provides directory resolution, text I/O and modification-time lookups,
//! reporting every failure together with the path it happened on.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::resolve_dir;
