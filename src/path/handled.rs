//! Bookkeeping of paths already attributed to an operator.

use super::path::Path;
use std::collections::HashSet;

/// HandledPaths records paths whose divergence has already been recorded,
/// so that neither the path nor anything below it is recorded again.
#[derive(Debug, Clone, Default)]
pub struct HandledPaths {
    paths: HashSet<Path>,
}

impl HandledPaths {
    pub fn new() -> Self {
        HandledPaths {
            paths: HashSet::new(),
        }
    }

    pub fn mark(&mut self, path: &Path) {
        self.paths.insert(path.clone());
    }

    /// Reports whether `path` or one of its ancestors has been marked.
    pub fn covers(&self, path: &Path) -> bool {
        let segments = path.segments();
        (1..=segments.len()).any(|n| self.paths.contains(&segments[..n]))
    }
}
