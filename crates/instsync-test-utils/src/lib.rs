//! Shared test utilities for the instruction sync workspace.
//!
//! Dev-dependency only; never published.

pub mod dir;

pub use dir::TestDir;
