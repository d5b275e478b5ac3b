// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A hybrid component-template syntax tree and visitor library.
//!
//! Component-template source files parse into two interleaved node
//! languages: a structural markup tree (elements, text, branch and
//! loop blocks, directives, attributes) and an embedded
//! general-purpose expression language (inside mustache-style
//! interpolations, directive values, and the host script region).
//! This crate owns the traversal and in-place mutation of that hybrid
//! tree; parsing and printing belong to its collaborators.
//!
//! # Overview
//!
//! - **Traversal**: [`visit`] walks a parsed [`Template`] depth-first
//!   in source order, dispatching each node to the caller's
//!   [`Visitor`] / [`ExpressionVisitor`] methods by kind.
//! - **Mutation**: a visitor method receives a [`Path`] whose
//!   [`replace`](Path::replace) and [`prune`](Path::prune)
//!   capabilities rewrite the slot the node occupies, safely deferred
//!   so that sibling order and in-progress descent are unaffected.
//! - **Dialect bridge**: descent into an embedded expression subtree
//!   hands the same visitor to the expression walker, back-filling
//!   the structural position as the parent of the topmost expression
//!   node ([`ExprParent::Template`]).
//!
//! # Quick Start
//!
//! ```
//! use weft_ast::{
//!     visit, ExpressionVisitor, Flow, Node, NodeKind, Path, Template, VisitError, Visitor,
//! };
//!
//! /// Removes every attribute from the tree.
//! struct StripAttributes;
//!
//! impl ExpressionVisitor for StripAttributes {}
//!
//! impl Visitor for StripAttributes {
//!     fn visit_attribute(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
//!         path.prune()?;
//!         Ok(Flow::Suppress)
//!     }
//! }
//!
//! let mut element = Node::new(NodeKind::Element);
//! element.name = Some("span".to_string());
//! element.attributes.push(Node::new(NodeKind::Attribute));
//! element.children.push(Node::new(NodeKind::Text));
//!
//! let mut template = Template {
//!     script: None,
//!     markup: Some(element),
//! };
//! visit(&mut template, &mut StripAttributes)?;
//!
//! let markup = template.markup.as_ref().expect("markup region");
//! assert!(markup.attributes.is_empty());
//! assert_eq!(markup.children.len(), 1);
//! # Ok::<(), weft_ast::VisitError>(())
//! ```
//!
//! # Handler Contract
//!
//! A visitor method that runs must either call [`traverse`] (or
//! [`traverse_expression`] on the expression side) on its own path, or
//! return [`Flow::Suppress`]. Doing both or neither aborts the visit
//! with [`VisitError::ContractViolation`]. Methods you don't override
//! descend by default.
//!
//! # Ownership
//!
//! The tree is owned by the caller before, during, and after a visit;
//! the engine only mutates fields reachable from it and returns
//! nothing. Traversal is fully synchronous and single-threaded, and
//! recursion depth equals tree depth with no depth guard.

// ============================================================================
// Public modules and re-exports
// ============================================================================

/// Error taxonomy for traversal.
pub mod error;
pub use error::VisitError;

/// The embedded expression dialect and its walker.
pub mod expr;
pub use expr::{
    traverse_expression, walk_expression, ExprKind, ExprNode, ExprParent, ExprPath,
    ExpressionVisitor,
};

/// Structural node schema.
pub mod nodes;
pub use nodes::{Node, NodeKind, Template};

/// Visitor infrastructure and the traversal engine.
pub mod visitor;
pub use visitor::{traverse, visit, Ancestors, Flow, ParentLink, Path, Visitor};
