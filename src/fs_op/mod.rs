//! Filesystem primitives the fixture is built from.
//!
//! Each helper wraps a single `std::fs` call and maps its failure into a
//! [`TreeError`](crate::errors::TreeError) carrying the offending path.

pub mod create;
pub mod path;
pub mod remove;
pub mod stat;

pub use create::{create_dir, create_new_file};
pub use path::resolve_entry_path;
pub use remove::remove_path;
pub use stat::PathType;
