// SPDX-FileCopyrightText: The im-treewalk authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::Indices;

/// Address of a node relative to some root node.
///
/// Each element is the index of a child within the ordered children
/// of the node reached by the preceding elements. The empty path
/// addresses the root node itself.
///
/// Paths are cheap to extend: with the `im` feature enabled the
/// indices are stored in a persistent vector that shares structure
/// between a parent path and all of its child paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPath(Indices);

impl IndexPath {
    /// The path of the root node.
    #[must_use]
    pub fn root() -> Self {
        Self(Indices::new())
    }

    /// Check if this path addresses the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of indices, i.e. the depth of the addressed node.
    ///
    /// The root node has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Synonym for [`Self::depth()`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.depth()
    }

    /// Synonym for [`Self::is_root()`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// The child index that is selected at the given depth.
    #[must_use]
    pub fn get(&self, depth: usize) -> Option<usize> {
        self.0.get(depth).copied()
    }

    /// The index of the addressed node within its parent.
    ///
    /// Returns `None` for the root path.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.depth().checked_sub(1).and_then(|depth| self.get(depth))
    }

    /// Iterate over all indices, starting at the root.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// The path of the child at `index` below the addressed node.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.extend(std::iter::once(index));
        Self(indices)
    }

    /// The path of the parent node.
    ///
    /// Returns `None` for the root path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let depth = self.depth().checked_sub(1)?;
        Some(self.prefix(depth))
    }

    /// The path of the ancestor at the given depth.
    ///
    /// Returns a clone of `self` if `depth` exceeds the depth of this path.
    #[must_use]
    pub fn prefix(&self, depth: usize) -> Self {
        self.iter().take(depth).collect()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl FromIterator<usize> for IndexPath {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<usize>> for IndexPath {
    fn from(indices: Vec<usize>) -> Self {
        indices.into_iter().collect()
    }
}

impl From<&[usize]> for IndexPath {
    fn from(indices: &[usize]) -> Self {
        indices.iter().copied().collect()
    }
}

impl<const N: usize> From<[usize; N]> for IndexPath {
    fn from(indices: [usize; N]) -> Self {
        indices.into_iter().collect()
    }
}

impl From<IndexPath> for Vec<usize> {
    fn from(from: IndexPath) -> Self {
        from.to_vec()
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for index in self.iter() {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}
