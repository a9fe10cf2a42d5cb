// SPDX-FileCopyrightText: The im-treewalk authors
// SPDX-License-Identifier: MPL-2.0

use std::{convert::Infallible, fmt};

use crate::IndexPath;

/// Returned when entering a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnterAction {
    /// Visit the children of the node.
    #[default]
    Continue,

    /// Do not visit the children of the node.
    ///
    /// The node is still left.
    SkipChildren,

    /// Stop the whole traversal immediately.
    Abort,
}

/// Returned when leaving a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeaveAction {
    #[default]
    Continue,

    /// Stop the whole traversal immediately.
    Abort,
}

/// Callback for entering a node.
///
/// Implemented for all matching closures.
pub trait OnEnter<T, E> {
    /// Invoked before the children of `node` are visited.
    ///
    /// # Errors
    ///
    /// Errors abort the traversal and are passed on to the caller.
    fn on_enter(&mut self, node: &T, index_path: &IndexPath) -> Result<EnterAction, E>;
}

impl<T, E, F> OnEnter<T, E> for F
where
    F: FnMut(&T, &IndexPath) -> Result<EnterAction, E>,
{
    fn on_enter(&mut self, node: &T, index_path: &IndexPath) -> Result<EnterAction, E> {
        self(node, index_path)
    }
}

/// Callback for leaving a node.
///
/// Implemented for all matching closures.
pub trait OnLeave<T, E> {
    /// Invoked after the children of `node` have been visited or skipped.
    ///
    /// # Errors
    ///
    /// Errors abort the traversal and are passed on to the caller.
    fn on_leave(&mut self, node: &T, index_path: &IndexPath) -> Result<LeaveAction, E>;
}

impl<T, E, F> OnLeave<T, E> for F
where
    F: FnMut(&T, &IndexPath) -> Result<LeaveAction, E>,
{
    fn on_leave(&mut self, node: &T, index_path: &IndexPath) -> Result<LeaveAction, E> {
        self(node, index_path)
    }
}

/// Callback that does nothing and always continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Noop;

impl<T, E> OnEnter<T, E> for Noop {
    fn on_enter(&mut self, _: &T, _: &IndexPath) -> Result<EnterAction, E> {
        Ok(EnterAction::Continue)
    }
}

impl<T, E> OnLeave<T, E> for Noop {
    fn on_leave(&mut self, _: &T, _: &IndexPath) -> Result<LeaveAction, E> {
        Ok(LeaveAction::Continue)
    }
}

/// Configuration for [`visit()`] and [`try_visit()`].
///
/// The callbacks return a [`Result`]. The error type is [`Infallible`]
/// for [`visit()`].
#[derive(Clone, Copy)]
pub struct VisitOptions<G, N, L> {
    /// Returns the ordered children of a node.
    pub get_children: G,

    /// Invoked before the children of a node are visited.
    pub on_enter: N,

    /// Invoked after the children of a node have been visited.
    ///
    /// Also invoked for nodes whose children have been skipped.
    pub on_leave: L,
}

impl<G> VisitOptions<G, Noop, Noop> {
    /// Visit all nodes without any callbacks.
    pub const fn new<T>(get_children: G) -> Self
    where
        G: FnMut(&T, &IndexPath) -> Vec<T>,
    {
        Self {
            get_children,
            on_enter: Noop,
            on_leave: Noop,
        }
    }
}

impl<G, N, L> VisitOptions<G, N, L> {
    /// Replace the callback for entering nodes.
    pub fn with_on_enter<T, E, M>(self, on_enter: M) -> VisitOptions<G, M, L>
    where
        M: FnMut(&T, &IndexPath) -> Result<EnterAction, E>,
    {
        let Self {
            get_children,
            on_enter: _,
            on_leave,
        } = self;
        VisitOptions {
            get_children,
            on_enter,
            on_leave,
        }
    }

    /// Replace the callback for leaving nodes.
    pub fn with_on_leave<T, E, M>(self, on_leave: M) -> VisitOptions<G, N, M>
    where
        M: FnMut(&T, &IndexPath) -> Result<LeaveAction, E>,
    {
        let Self {
            get_children,
            on_enter,
            on_leave: _,
        } = self;
        VisitOptions {
            get_children,
            on_enter,
            on_leave,
        }
    }
}

impl<G, N, L> fmt::Debug for VisitOptions<G, N, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitOptions").finish_non_exhaustive()
    }
}

/// Outcome of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visited {
    /// All nodes have been visited, except those that have been skipped.
    Completed,

    /// A callback has aborted the traversal.
    Aborted,
}

/// Visit all nodes in depth-first order.
///
/// Nodes are entered in pre-order and left in post-order.
pub fn visit<T, G, N, L>(node: T, options: VisitOptions<G, N, L>) -> Visited
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    N: OnEnter<T, Infallible>,
    L: OnLeave<T, Infallible>,
{
    match try_visit(node, options) {
        Ok(visited) => visited,
        Err(never) => match never {},
    }
}

/// Step of the explicit traversal stack.
enum Step<T> {
    Enter(T, IndexPath),
    Leave(T, IndexPath),
}

/// Visit all nodes in depth-first order with fallible callbacks.
///
/// See also: [`visit()`]
///
/// # Errors
///
/// Returns the first error of a callback unmodified. No more callbacks
/// are invoked after an error occurred.
pub fn try_visit<T, E, G, N, L>(node: T, options: VisitOptions<G, N, L>) -> Result<Visited, E>
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    N: OnEnter<T, E>,
    L: OnLeave<T, E>,
{
    let VisitOptions {
        mut get_children,
        mut on_enter,
        mut on_leave,
    } = options;
    let mut stack = vec![Step::Enter(node, IndexPath::root())];
    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node, index_path) => match on_enter.on_enter(&node, &index_path)? {
                EnterAction::Continue => {
                    let children = get_children(&node, &index_path);
                    let child_steps = children
                        .into_iter()
                        .enumerate()
                        .rev()
                        .map(|(index, child)| Step::Enter(child, index_path.child(index)))
                        .collect::<Vec<_>>();
                    // The node is left after all its children
                    stack.push(Step::Leave(node, index_path));
                    stack.extend(child_steps);
                }
                EnterAction::SkipChildren => {
                    log::trace!("Skipping children of node at {index_path}");
                    stack.push(Step::Leave(node, index_path));
                }
                EnterAction::Abort => {
                    log::debug!("Aborted traversal when entering node at {index_path}");
                    return Ok(Visited::Aborted);
                }
            },
            Step::Leave(node, index_path) => match on_leave.on_leave(&node, &index_path)? {
                LeaveAction::Continue => (),
                LeaveAction::Abort => {
                    log::debug!("Aborted traversal when leaving node at {index_path}");
                    return Ok(Visited::Aborted);
                }
            },
        }
    }
    Ok(Visited::Completed)
}
