// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Traversal paths and mutation slots.
//!
//! A [`Path`] binds one structural node to the chain of positions
//! above it and to the mutation capabilities scoped to the slot it
//! occupies. Paths are ephemeral: the engine creates one immediately
//! before visiting a node and discards it right after, so the borrow
//! rules guarantee a capability never outlives the traversal step
//! that issued it.
//!
//! Mutations are recorded in a [`PendingEdit`] owned by the caller of
//! the visit step and committed once that step completes: a
//! replacement lands in the owning collection index (or optional
//! field), and pruned entries are filtered out only after the whole
//! collection has been visited.

use crate::error::VisitError;
use crate::nodes::{Node, NodeKind};

// ============================================================================
// Parent Links
// ============================================================================

/// One link in the borrowed chain of enclosing structural positions.
///
/// Links live on the stack of the traversal frames above the current
/// node, nearest first; [`ParentLink::ancestors`] walks the chain
/// rootward.
#[derive(Debug, Clone, Copy)]
pub struct ParentLink<'p> {
    kind: NodeKind,
    name: Option<&'p str>,
    prev: Option<&'p ParentLink<'p>>,
}

impl<'p> ParentLink<'p> {
    pub(crate) fn new(
        kind: NodeKind,
        name: Option<&'p str>,
        prev: Option<&'p ParentLink<'p>>,
    ) -> Self {
        ParentLink { kind, name, prev }
    }

    /// Kind tag of the enclosing node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Name of the enclosing node, when it has one.
    pub fn name(&self) -> Option<&'p str> {
        self.name
    }

    /// The next link up the chain, or `None` at the region root.
    pub fn parent(&self) -> Option<&'p ParentLink<'p>> {
        self.prev
    }

    /// Iterate this position and its ancestors, nearest first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }
}

/// Iterator over a [`ParentLink`] chain, nearest position first.
pub struct Ancestors<'p> {
    next: Option<&'p ParentLink<'p>>,
}

impl<'p> Iterator for Ancestors<'p> {
    type Item = &'p ParentLink<'p>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

// ============================================================================
// Pending Edits
// ============================================================================

/// Deferred mutation recorded by [`Path::replace`] and [`Path::prune`].
///
/// The engine creates one per slot, hands it to the Path for the
/// duration of the visit, and commits it afterwards. A recorded
/// replacement always survives; `pruned` only removes the slot when
/// nothing replaced its original occupant.
#[derive(Debug, Default)]
pub(crate) struct PendingEdit {
    pub(crate) replacement: Option<Node>,
    pub(crate) pruned: bool,
}

// ============================================================================
// Paths
// ============================================================================

/// Ephemeral handle for one structural-node visit.
///
/// Holds a borrow of the node inside the caller-owned tree (the
/// engine never copies or owns nodes), the chain of enclosing
/// positions, and the mutation capabilities for the slot the node
/// occupies. The synthetic root path has no slot: `replace` and
/// `prune` fail there.
pub struct Path<'n, 'p> {
    pub(crate) node: &'n mut Node,
    pub(crate) parent: Option<&'p ParentLink<'p>>,
    pub(crate) slot: Option<&'n mut PendingEdit>,
    pub(crate) descended: bool,
}

impl<'n, 'p> Path<'n, 'p> {
    /// Path for a node occupying a collection index or optional field.
    pub(crate) fn new(
        node: &'n mut Node,
        parent: Option<&'p ParentLink<'p>>,
        slot: &'n mut PendingEdit,
    ) -> Self {
        Path {
            node,
            parent,
            slot: Some(slot),
            descended: false,
        }
    }

    /// Path for the markup region root. No owning slot exists, so
    /// mutation capabilities fail.
    pub(crate) fn root(node: &'n mut Node) -> Self {
        Path {
            node,
            parent: None,
            slot: None,
            descended: false,
        }
    }

    /// Kind tag of the node at this position.
    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    /// The node at this position.
    pub fn node(&self) -> &Node {
        self.node
    }

    /// Mutable access to the node at this position.
    pub fn node_mut(&mut self) -> &mut Node {
        self.node
    }

    /// The nearest enclosing structural position, or `None` at the
    /// markup region root.
    ///
    /// Historically exposed under both the `parent` and `parentPath`
    /// names; they always denoted this same value.
    pub fn parent(&self) -> Option<&'p ParentLink<'p>> {
        self.parent
    }

    /// Replace the node in its owning slot with `node`.
    ///
    /// The write is committed when this path's visit completes:
    /// sibling traversal order is unaffected, the subtree already
    /// visited under the old node is not revisited, and the new node
    /// is not itself visited by the current pass. Repeated calls keep
    /// the last replacement.
    ///
    /// Fails with [`VisitError::UnsupportedRootOperation`] at the
    /// markup region root.
    pub fn replace(&mut self, node: Node) -> Result<(), VisitError> {
        match self.slot.as_deref_mut() {
            Some(edit) => {
                edit.replacement = Some(node);
                Ok(())
            }
            None => Err(VisitError::at_root("replace")),
        }
    }

    /// Mark the node's original occupant for removal.
    ///
    /// Removal is deferred: all siblings scheduled for traversal are
    /// still visited, and this node still completes its own default
    /// descent; pruning does not short-circuit descent into the
    /// pruned node's children. A collection is rewritten without the
    /// node only after the whole collection finishes; the
    /// branch-alternative slot is cleared to empty instead.
    ///
    /// Fails with [`VisitError::UnsupportedRootOperation`] at the
    /// markup region root.
    pub fn prune(&mut self) -> Result<(), VisitError> {
        match self.slot.as_deref_mut() {
            Some(edit) => {
                edit.pruned = true;
                Ok(())
            }
            None => Err(VisitError::at_root("prune")),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
