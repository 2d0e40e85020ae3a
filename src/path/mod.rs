//! Path module - Dot-separated addressing into value trees.
//!
//! Paths are the only addressing mechanism between a delta and the trees it
//! describes. This module provides reading, writing and deleting at a path,
//! depth-first walks, leaf flattening and the handled-path bookkeeping used
//! while building a delta.

mod handled;
mod path;
mod traverse;
mod walk;

pub use handled::*;
pub use path::*;
pub use traverse::*;
pub use walk::*;
