//! Value module - In-memory representation of JSON/YAML-like trees.
//!
//! This module provides the tagged value type shared by every delta operation,
//! along with the structural and loose equality tests used to diff trees.

mod compare;
mod value;

pub use compare::*;
pub use value::*;
