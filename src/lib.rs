//! Recursive directory walking filtered by exact extension match.
//!
//! [`walk`] descends without bound from a start directory and collects
//! the path of every reachable entry whose extension is byte-for-byte
//! equal to one of the requested extensions, in traversal order. It is
//! a filtering primitive for higher-level programs, not a tool in its
//! own right: no globbing, no content inspection, no symlink
//! following, no deduplication.
//!
//! ```no_run
//! use extwalk::walk;
//!
//! let manifests = walk("project", ".yaml")?;
//! let tracked = walk("project", [".yaml", ".meta"])?;
//! # Ok::<(), extwalk::WalkError>(())
//! ```
//!
//! A walk either fully succeeds or fails with a [`WalkError`]; an I/O
//! failure anywhere in the tree aborts the call with no partial
//! results. [`walk_value`] fronts the same operation for callers
//! holding untyped (JSON-shaped) arguments.

mod error;
mod extensions;
mod walker;

pub use error::WalkError;
pub use extensions::Extensions;
pub use walker::{walk, walk_value};
