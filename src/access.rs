// SPDX-FileCopyrightText: The im-treewalk authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use thiserror::Error;

use crate::IndexPath;

/// Configuration for [`access()`] and [`access_path()`].
#[derive(Clone, Copy)]
pub struct BaseOptions<G> {
    /// Returns the ordered children of a node.
    ///
    /// Receives the node and the index path leading to it.
    pub get_children: G,
}

impl<G> BaseOptions<G> {
    pub const fn new<T>(get_children: G) -> Self
    where
        G: FnMut(&T, &IndexPath) -> Vec<T>,
    {
        Self { get_children }
    }
}

impl<G> fmt::Debug for BaseOptions<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseOptions").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A path segment does not select an existing child.
    #[error("index {index} at depth {depth} is out of range for {child_count} children")]
    IndexOutOfRange {
        /// Depth of the node whose children have been requested.
        depth: usize,
        index: usize,
        child_count: usize,
    },
}

/// Resolve the node at `index_path` below `node`.
///
/// An empty path resolves to `node` itself.
///
/// # Errors
///
/// Fails if a path segment is out of range for the children
/// that are returned at the corresponding depth.
pub fn access<T, G>(
    node: T,
    index_path: &IndexPath,
    options: BaseOptions<G>,
) -> Result<T, AccessError>
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
{
    let BaseOptions { get_children } = options;
    descend(node, index_path, get_children, |_| {})
}

/// Resolve all nodes along `index_path` below `node`.
///
/// Returns the lineage from `node` down to the addressed node, both
/// inclusive. The result contains `index_path.depth() + 1` nodes.
///
/// # Errors
///
/// Fails if a path segment is out of range for the children
/// that are returned at the corresponding depth.
pub fn access_path<T, G>(
    node: T,
    index_path: &IndexPath,
    options: BaseOptions<G>,
) -> Result<Vec<T>, AccessError>
where
    T: Clone,
    G: FnMut(&T, &IndexPath) -> Vec<T>,
{
    let BaseOptions { get_children } = options;
    let mut lineage = Vec::with_capacity(index_path.depth() + 1);
    let last_node = descend(node, index_path, get_children, |ancestor| {
        lineage.push(ancestor.clone());
    })?;
    lineage.push(last_node);
    debug_assert_eq!(lineage.len(), index_path.depth() + 1);
    Ok(lineage)
}

/// Walk down from `node` along `index_path`.
///
/// Invokes `on_ancestor` for every node that is passed on the way
/// down, i.e. all nodes except the addressed one.
fn descend<T>(
    node: T,
    index_path: &IndexPath,
    mut get_children: impl FnMut(&T, &IndexPath) -> Vec<T>,
    mut on_ancestor: impl FnMut(&T),
) -> Result<T, AccessError> {
    let mut current_node = node;
    let mut current_path = IndexPath::root();
    for (depth, index) in index_path.iter().enumerate() {
        let mut children = get_children(&current_node, &current_path);
        let child_count = children.len();
        if index >= child_count {
            log::debug!(
                "Index {index} of path {index_path} is out of range for {child_count} children"
            );
            return Err(AccessError::IndexOutOfRange {
                depth,
                index,
                child_count,
            });
        }
        on_ancestor(&current_node);
        current_node = children.swap_remove(index);
        current_path = current_path.child(index);
    }
    Ok(current_node)
}
