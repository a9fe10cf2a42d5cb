// SPDX-FileCopyrightText: The im-treewalk authors
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use crate::IndexPath;

/// Configuration for [`diagram()`].
#[derive(Clone, Copy)]
pub struct DiagramOptions<G, L> {
    /// Returns the ordered children of a node.
    pub get_children: G,

    /// Returns the text of a node.
    ///
    /// The text may span multiple lines.
    pub get_label: L,
}

impl<G, L> DiagramOptions<G, L> {
    pub const fn new<T>(get_children: G, get_label: L) -> Self
    where
        G: FnMut(&T, &IndexPath) -> Vec<T>,
        L: FnMut(&T, &IndexPath) -> String,
    {
        Self {
            get_children,
            get_label,
        }
    }
}

impl<G, L> fmt::Debug for DiagramOptions<G, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramOptions").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum LinePrefix {
    #[display(fmt = "├── ")]
    Child,
    #[display(fmt = "└── ")]
    LastChild,
    #[display(fmt = "│   ")]
    NestedChild,
    #[display(fmt = "    ")]
    LastNestedChild,
}

impl LinePrefix {
    /// Prefixes for the first and all following lines of a child.
    const fn for_child(is_last: bool) -> (Self, Self) {
        if is_last {
            (Self::LastChild, Self::LastNestedChild)
        } else {
            (Self::Child, Self::NestedChild)
        }
    }
}

const LINE_SEPARATOR: char = '\n';

const COLLAPSED_LABEL_SEPARATOR: &str = " / ";

fn is_multiline(label: &str) -> bool {
    label.contains(LINE_SEPARATOR)
}

/// A single, possibly multi-line entry of the diagram.
#[derive(Debug)]
struct Line {
    label: String,

    /// Prepended to the first line of the label.
    prefix: String,

    /// Prepended to all following lines of the label.
    multiline_prefix: String,
}

impl Line {
    fn write_into(&self, output: &mut String) {
        for (index, label_line) in self.label.split(LINE_SEPARATOR).enumerate() {
            if index > 0 {
                output.push(LINE_SEPARATOR);
                output.push_str(&self.multiline_prefix);
            } else {
                output.push_str(&self.prefix);
            }
            output.push_str(label_line);
        }
    }
}

/// Pending node of the explicit traversal stack.
struct Pending<T> {
    node: T,
    index_path: IndexPath,

    /// Prefix of the first line of the node.
    prefix: String,

    /// Prefix of all following lines, including those of descendants.
    multiline_prefix: String,

    /// Labels of collapsed ancestors, including the trailing separator.
    collapsed_labels: String,
}

/// Render a tree as text, one line per node.
///
/// Children are connected to their parent with box-drawing characters:
///
/// ```text
/// root
/// ├── a
/// │   └── b
/// └── c / d
/// ```
///
/// A node with a single-line label and exactly one child is collapsed
/// into the line of that child. An empty label of the root node is
/// omitted.
pub fn diagram<T, G, L>(node: T, options: DiagramOptions<G, L>) -> String
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    L: FnMut(&T, &IndexPath) -> String,
{
    diagram_lines(node, options)
        .iter()
        .enumerate()
        .fold(String::new(), |mut output, (index, line)| {
            if index > 0 {
                output.push(LINE_SEPARATOR);
            }
            line.write_into(&mut output);
            output
        })
}

/// Collect the lines of the diagram in pre-order.
fn diagram_lines<T, G, L>(node: T, options: DiagramOptions<G, L>) -> Vec<Line>
where
    G: FnMut(&T, &IndexPath) -> Vec<T>,
    L: FnMut(&T, &IndexPath) -> String,
{
    let DiagramOptions {
        mut get_children,
        mut get_label,
    } = options;
    let mut lines = Vec::new();
    let mut stack = vec![Pending {
        node,
        index_path: IndexPath::root(),
        prefix: String::new(),
        multiline_prefix: String::new(),
        collapsed_labels: String::new(),
    }];
    while let Some(Pending {
        node,
        index_path,
        prefix,
        multiline_prefix,
        mut collapsed_labels,
    }) = stack.pop()
    {
        let label = get_label(&node, &index_path);
        let mut children = get_children(&node, &index_path);
        if children.len() == 1 && !is_multiline(&label) {
            let hide_root = index_path.is_root() && label.is_empty();
            if hide_root {
                collapsed_labels.push_str(COLLAPSED_LABEL_SEPARATOR.trim_start());
            } else {
                collapsed_labels.push_str(&label);
                collapsed_labels.push_str(COLLAPSED_LABEL_SEPARATOR);
            }
            log::trace!("Collapsing node at {index_path} into its single child");
            let child_index_path = index_path.child(0);
            stack.push(Pending {
                node: children.swap_remove(0),
                index_path: child_index_path,
                prefix,
                multiline_prefix,
                collapsed_labels,
            });
            continue;
        }
        let hide_root = index_path.is_root() && label.is_empty() && !children.is_empty();
        if !hide_root {
            collapsed_labels.push_str(&label);
            lines.push(Line {
                label: collapsed_labels,
                prefix,
                multiline_prefix: multiline_prefix.clone(),
            });
        }
        let last_index = children.len().saturating_sub(1);
        stack.extend(
            children
                .into_iter()
                .enumerate()
                .rev()
                .map(|(index, child)| {
                    let (child_prefix, child_multiline_prefix) =
                        LinePrefix::for_child(index == last_index);
                    Pending {
                        node: child,
                        index_path: index_path.child(index),
                        prefix: format!("{multiline_prefix}{child_prefix}"),
                        multiline_prefix: format!("{multiline_prefix}{child_multiline_prefix}"),
                        collapsed_labels: String::new(),
                    }
                }),
        );
    }
    lines
}
