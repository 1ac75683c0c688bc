//! Temporary file tree fixtures for tests.
//!
//! Describe a small tree as a list of paths (with optional contents), and
//! [`FileTree`] builds it inside a fresh temporary directory and removes it
//! again afterwards.

pub mod config;
pub mod errors;
pub mod fixture;
pub mod fs_op;
pub mod logging;
pub mod shape;

pub use crate::config::TreeConfig;
pub use crate::errors::{Result, TreeError};
pub use crate::fixture::{FileTree, TreeState};
pub use crate::shape::{normalize_entry, normalize_shape, Entry, RawEntry};
