//! Step-by-step cursor over a built tree.
//!
//! The cursor moves between *navigable* nodes: Group and Root wrappers are
//! looked through, so entering a Fraction lands on its numerator content
//! rather than on the Group that holds it.
//!
//! Each `enter` pushes a frame recording the node that was entered and the
//! sibling index the cursor had there. The sibling list for `next` and
//! `previous` is always the navigable children of the innermost frame's
//! origin, recomputed on every call; `exit` pops the frame and returns to
//! the origin.

use crate::describe::{accessibility_of, describe};
use crate::{Metadata, SemanticNode, TreePath};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    origin: TreePath,
    sibling_index: usize,
}

/// A cursor over one tree. Not meant to be shared between callers.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    root: &'a SemanticNode,
    current: TreePath,
    sibling_index: usize,
    position_stack: Vec<Frame>,
}

impl<'a> Navigator<'a> {
    /// A cursor positioned on `root`.
    pub fn new(root: &'a SemanticNode) -> Self {
        Self {
            root,
            current: TreePath::new(),
            sibling_index: 0,
            position_stack: Vec::new(),
        }
    }

    pub fn root(&self) -> &'a SemanticNode {
        self.root
    }

    /// The node under the cursor.
    pub fn current(&self) -> &'a SemanticNode {
        // `current` is only ever set to paths taken from this tree.
        self.root.node_at(&self.current).unwrap_or(self.root)
    }

    pub fn current_path(&self) -> &[usize] {
        &self.current
    }

    /// Position of the cursor within its navigable sibling list.
    pub fn sibling_index(&self) -> usize {
        self.sibling_index
    }

    /// Length of the navigable sibling list, or 0 at the root.
    pub fn sibling_count(&self) -> usize {
        self.siblings().len()
    }

    /// Number of `enter` steps between the root and the cursor.
    pub fn depth(&self) -> usize {
        self.position_stack.len()
    }

    /// Move to the first navigable child of the current node.
    pub fn enter(&mut self) -> bool {
        let Some((offset, _)) = self
            .current()
            .navigable_children_with_paths()
            .into_iter()
            .next()
        else {
            return false;
        };

        let origin = self.current.clone();
        self.position_stack.push(Frame {
            origin: origin.clone(),
            sibling_index: self.sibling_index,
        });
        self.current = join(&origin, &offset);
        self.sibling_index = 0;
        true
    }

    /// Return to the node last entered from.
    pub fn exit(&mut self) -> bool {
        let Some(frame) = self.position_stack.pop() else {
            return false;
        };
        self.current = frame.origin;
        self.sibling_index = frame.sibling_index;
        true
    }

    /// Move to the next navigable sibling.
    pub fn next(&mut self) -> bool {
        self.move_to(self.sibling_index.checked_add(1))
    }

    /// Move to the previous navigable sibling.
    pub fn previous(&mut self) -> bool {
        self.move_to(self.sibling_index.checked_sub(1))
    }

    /// Back to the root with an empty stack.
    pub fn reset(&mut self) {
        self.current.clear();
        self.sibling_index = 0;
        self.position_stack.clear();
    }

    /// Every node from the root to the cursor, wrappers included.
    pub fn path(&self) -> Vec<&'a SemanticNode> {
        self.root
            .ancestors(&self.current)
            .unwrap_or_else(|| vec![self.root])
    }

    /// Short description of the current node, e.g. `"variable a"`.
    pub fn describe(&self) -> String {
        describe(self.current())
    }

    /// Accessibility metadata of the current node, generated when the node
    /// carries none.
    pub fn accessibility(&self) -> Metadata {
        accessibility_of(self.current())
    }

    /// Descriptions of each entered node and the cursor, joined with `" > "`.
    pub fn breadcrumb(&self) -> String {
        self.position_stack
            .iter()
            .filter_map(|frame| self.root.node_at(&frame.origin))
            .chain(std::iter::once(self.current()))
            .map(describe)
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn siblings(&self) -> Vec<TreePath> {
        let Some(frame) = self.position_stack.last() else {
            return Vec::new();
        };
        let Some(origin) = self.root.node_at(&frame.origin) else {
            return Vec::new();
        };
        origin
            .navigable_children_with_paths()
            .into_iter()
            .map(|(offset, _)| join(&frame.origin, &offset))
            .collect()
    }

    fn move_to(&mut self, index: Option<usize>) -> bool {
        let Some(index) = index else {
            return false;
        };
        match self.siblings().into_iter().nth(index) {
            Some(path) => {
                self.current = path;
                self.sibling_index = index;
                true
            }
            None => false,
        }
    }
}

fn join(base: &[usize], offset: &[usize]) -> TreePath {
    base.iter().chain(offset).copied().collect()
}
