//! Delta module - Creating and applying structured tree deltas.
//!
//! A delta records how one tree differs from another as NoSQL-style update
//! operators keyed by path: `$set`, `$unset`, `$push`, `$pull` and `$rename`,
//! plus `$setOnInsert` and `$inc` when applying.

mod apply;
mod array;
mod create;
mod delta;
mod rename;

#[cfg(test)]
mod create_test;



pub use apply::*;
pub use array::*;
pub use create::*;
pub use delta::*;
pub use rename::*;
