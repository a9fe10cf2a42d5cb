// SPDX-FileCopyrightText: The im-treewalk authors
// SPDX-License-Identifier: MPL-2.0

use std::{fmt, ops::ControlFlow};

use crate::IndexPath;

/// Signature of the default [`FindOptions::should_descend`] callback.
pub type ShouldDescendFn<T> = fn(&T, &IndexPath) -> bool;

/// Configuration for the `find*` family of functions.
#[derive(Clone, Copy)]
pub struct FindOptions<G, P, D> {
    /// Returns the ordered children of a node.
    pub get_children: G,

    /// Selects the matching nodes.
    pub predicate: P,

    /// Decides if the children of a node are searched.
    ///
    /// Evaluated after the node itself has been tested against
    /// [`Self::predicate`]. The children of a node for which this
    /// callback returns `false` are neither requested nor searched.
    pub should_descend: D,
}

impl<T, G, P> FindOptions<G, P, ShouldDescendFn<T>> {
    /// Search the whole tree.
    pub fn new(get_children: G, predicate: P) -> Self
    where
        G: FnMut(&T, &IndexPath) -> Vec<T>,
        P: FnMut(&T, &IndexPath) -> bool,
    {
        Self {
            get_children,
            predicate,
            should_descend: always_descend,
        }
    }
}

impl<G, P, D> FindOptions<G, P, D> {
    /// Replace the pruning callback.
    pub fn with_should_descend<T, E>(self, should_descend: E) -> FindOptions<G, P, E>
    where
        E: FnMut(&T, &IndexPath) -> bool,
    {
        let Self {
            get_children,
            predicate,
            should_descend: _,
        } = self;
        FindOptions {
            get_children,
            predicate,
            should_descend,
        }
    }
}

impl<G, P, D> fmt::Debug for FindOptions<G, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindOptions").finish_non_exhaustive()
    }
}

const fn always_descend<T>(_: &T, _: &IndexPath) -> bool {
    true
}

/// Find the first matching node in depth-first pre-order.
///
/// Returns `None` if no node matches.
pub fn find<T, G, P, D>(node: T, options: FindOptions<G, P, D>) -> Option<T>
where
    T: Clone,
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    P: FnMut(&T, &IndexPath) -> bool,
    D: FnMut(&T, &IndexPath) -> bool,
{
    let mut found = None;
    search(node, options, |node, _| {
        found = Some(node.clone());
        ControlFlow::Break(())
    });
    found
}

/// Find the index path of the first matching node in depth-first pre-order.
///
/// Returns `None` if no node matches.
pub fn find_index_path<T, G, P, D>(node: T, options: FindOptions<G, P, D>) -> Option<IndexPath>
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    P: FnMut(&T, &IndexPath) -> bool,
    D: FnMut(&T, &IndexPath) -> bool,
{
    let mut found = None;
    search(node, options, |_, index_path| {
        found = Some(index_path.clone());
        ControlFlow::Break(())
    });
    found
}

/// Find all matching nodes in depth-first pre-order.
///
/// A match does not prevent its descendants from being searched,
/// i.e. both a node and some of its descendants might be returned.
pub fn find_all<T, G, P, D>(node: T, options: FindOptions<G, P, D>) -> Vec<T>
where
    T: Clone,
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    P: FnMut(&T, &IndexPath) -> bool,
    D: FnMut(&T, &IndexPath) -> bool,
{
    let mut found = Vec::new();
    search(node, options, |node, _| {
        found.push(node.clone());
        ControlFlow::Continue(())
    });
    found
}

/// Find the index paths of all matching nodes in depth-first pre-order.
///
/// See also: [`find_all()`]
pub fn find_all_index_paths<T, G, P, D>(node: T, options: FindOptions<G, P, D>) -> Vec<IndexPath>
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    P: FnMut(&T, &IndexPath) -> bool,
    D: FnMut(&T, &IndexPath) -> bool,
{
    let mut found = Vec::new();
    search(node, options, |_, index_path| {
        found.push(index_path.clone());
        ControlFlow::Continue(())
    });
    found
}

/// Depth-first pre-order search.
///
/// Every match is reported to `on_match`, which decides if the
/// search continues.
fn search<T, G, P, D>(
    node: T,
    options: FindOptions<G, P, D>,
    mut on_match: impl FnMut(&T, &IndexPath) -> ControlFlow<()>,
) where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    P: FnMut(&T, &IndexPath) -> bool,
    D: FnMut(&T, &IndexPath) -> bool,
{
    let FindOptions {
        mut get_children,
        mut predicate,
        mut should_descend,
    } = options;
    // Pending nodes in reverse order of traversal
    let mut stack = vec![(node, IndexPath::root())];
    while let Some((node, index_path)) = stack.pop() {
        if predicate(&node, &index_path) {
            log::trace!("Found matching node at {index_path}");
            if on_match(&node, &index_path).is_break() {
                return;
            }
        }
        if !should_descend(&node, &index_path) {
            log::trace!("Skipping children of node at {index_path}");
            continue;
        }
        let children = get_children(&node, &index_path);
        stack.extend(
            children
                .into_iter()
                .enumerate()
                .rev()
                .map(|(index, child)| (child, index_path.child(index))),
        );
    }
}
