// SPDX-FileCopyrightText: The im-treewalk authors
// SPDX-License-Identifier: MPL-2.0

//! Traversal, search, and diagram rendering for arbitrary trees.
//!
//! The tree structure is owned by the caller. All functions access
//! the children of a node through a callback that is passed with
//! each call. Nodes are addressed by an [`IndexPath`], i.e. the
//! indices of the children that are selected on the way down from
//! the root node.
//!
//! All traversals are depth-first and use an explicit stack instead
//! of recursion, so that deep trees do not overflow the call stack.

mod access;
pub use self::access::{access, access_path, AccessError, BaseOptions};

mod diagram;
pub use self::diagram::{diagram, DiagramOptions};

mod find;
pub use self::find::{
    find, find_all, find_all_index_paths, find_index_path, FindOptions, ShouldDescendFn,
};

mod index_path;
pub use self::index_path::IndexPath;

mod visit;
pub use self::visit::{
    try_visit, visit, EnterAction, LeaveAction, Noop, OnEnter, OnLeave, VisitOptions, Visited,
};

#[cfg(feature = "im")]
type Indices = im::Vector<usize>;

#[cfg(not(feature = "im"))]
type Indices = Vec<usize>;
