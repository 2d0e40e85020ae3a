//! # Tree Delta
//!
//! Structured deltas between JSON-like trees.
//!
//! [`create`] compares an original tree with a current one and describes the
//! difference as NoSQL-style update operators keyed by dot-separated paths.
//! [`apply`] replays such a delta onto a tree without touching the input, so
//! only the change has to be stored or sent.
//!
//! ## Modules
//!
//! - [`value`] - In-memory representation of JSON/YAML-like trees and their equality
//! - [`path`] - Dot-separated paths: traversal, writes, deletes, walks and flattening
//! - [`delta`] - The delta document, its construction and its application
//! - [`error`] - Errors raised by delta construction and application

pub mod delta;
pub mod error;
pub mod path;
pub mod value;

pub use delta::{apply, apply_delta, create, Delta, Operator};
pub use error::{DeltaError, DeltaResult};
pub use path::Path;
pub use value::Value;
