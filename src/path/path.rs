//! Path type.

use std::borrow::Borrow;
use std::fmt;

/// Path addresses a node of a tree as a sequence of segments.
///
/// The textual form joins segments with `.`. A segment names a map key or,
/// when applied to a list, a base-10 index; which one is decided by the
/// container the segment is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Creates the root path.
    pub fn new() -> Self {
        Path {
            segments: Vec::new(),
        }
    }

    /// Parses a dot-separated path. Every string yields at least one
    /// segment, so `""` names the empty key; the root is only [`Path::new`].
    pub fn parse(s: &str) -> Self {
        Path {
            segments: s.split('.').map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Creates a new path with the given segment appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push(segment);
        child
    }

    /// Returns the path made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Self {
        Path {
            segments: self.segments[..len.min(self.segments.len())].to_vec(),
        }
    }

    /// Reports whether `ancestor` is this path or one of its ancestors.
    pub fn starts_with(&self, ancestor: &Path) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }
}

/// Interprets a segment as a list index. Only canonical base-10 forms are
/// accepted, so `"01"` and `"+1"` are not indices.
pub fn parse_index(segment: &str) -> Option<usize> {
    let canonical = segment == "0"
        || (!segment.is_empty()
            && !segment.starts_with('0')
            && segment.bytes().all(|b| b.is_ascii_digit()));
    if canonical {
        segment.parse().ok()
    } else {
        None
    }
}

impl Borrow<[String]> for Path {
    fn borrow(&self) -> &[String] {
        &self.segments
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl FromIterator<String> for Path {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Path {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
