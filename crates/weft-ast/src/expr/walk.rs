// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions and visitor methods for the expression dialect.
//!
//! The walker mirrors the structural engine's handler contract: a
//! visitor method either calls [`traverse_expression`] on its own path
//! or returns [`Flow::Suppress`]; doing both or neither aborts the
//! visit with a contract violation. Un-overridden methods descend by
//! default.
//!
//! # Parent back-fill
//!
//! Every expression position below the top of a subtree gets its
//! parent from this walker. The topmost position has no
//! expression-side parent; when the subtree hangs off a structural
//! node, the caller passes that position as the `boundary` argument
//! and it is back-filled as [`ExprParent::Template`]. The boundary
//! never overrides a parent this walker established itself, and a
//! root expression tree (the host script region) has no parent at all.

use super::{ExprKind, ExprNode};
use crate::error::VisitError;
use crate::visitor::{Flow, ParentLink};

// ============================================================================
// Expression Paths
// ============================================================================

/// The nearest enclosing position of an expression node, across the
/// dialect boundary.
#[derive(Debug, Clone, Copy)]
pub enum ExprParent<'p> {
    /// The enclosing structural position, back-filled at the topmost
    /// expression position of a subtree nested inside a markup node.
    Template(&'p ParentLink<'p>),
    /// A position established by the expression walker itself.
    Expression(ExprKind),
}

/// Ephemeral handle for one expression-node visit.
///
/// Created immediately before visiting a node and discarded right
/// after; it has no existence outside a single traversal step.
pub struct ExprPath<'n, 'p> {
    pub(crate) node: &'n mut ExprNode,
    pub(crate) parent: Option<ExprParent<'p>>,
    pub(crate) descended: bool,
}

impl<'n, 'p> ExprPath<'n, 'p> {
    /// Kind tag of the node at this position.
    pub fn kind(&self) -> ExprKind {
        self.node.kind
    }

    /// The node at this position.
    pub fn node(&self) -> &ExprNode {
        self.node
    }

    /// Mutable access to the node at this position.
    pub fn node_mut(&mut self) -> &mut ExprNode {
        self.node
    }

    /// The nearest enclosing position, or `None` at the root of a
    /// host script region.
    ///
    /// Historically exposed under both the `parent` and `parentPath`
    /// names; they always denoted this same value.
    pub fn parent(&self) -> Option<ExprParent<'p>> {
        self.parent
    }
}

// ============================================================================
// Visitor Methods
// ============================================================================

/// Macro to generate expression visitor method signatures.
///
/// Each method receives the [`ExprPath`] for its node and defaults to
/// descending into the node's operands.
macro_rules! expression_visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $kind:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit an [`ExprKind::", stringify!($kind), "`](crate::expr::ExprKind::", stringify!($kind), ") position.")]
                #[doc = ""]
                #[doc = "Either call [`traverse_expression`] on the path or return [`Flow::Suppress`]."]
                fn [<visit_ $base_name>](
                    &mut self,
                    path: &mut ExprPath<'_, '_>,
                ) -> Result<Flow, VisitError> {
                    traverse_expression(self, path)?;
                    Ok(Flow::Continue)
                }
            )*
        }
    };
}

/// Visitor methods for the expression dialect.
///
/// One method per [`ExprKind`]. The provided default bodies perform
/// default descent, so implementing the trait with no overrides walks
/// the whole subtree. [`Visitor`](crate::visitor::Visitor) requires
/// this trait: one visitor value serves both dialects, and the
/// structural engine hands it to [`walk_expression`] unmodified.
pub trait ExpressionVisitor: Sized {
    expression_visitor_methods! {
        program: Program,
        expression_statement: ExpressionStatement,
        variable_declaration: VariableDeclaration,
        variable_declarator: VariableDeclarator,
    }

    expression_visitor_methods! {
        identifier: Identifier,
        literal: Literal,
        template_literal: TemplateLiteral,
    }

    expression_visitor_methods! {
        array_expression: ArrayExpression,
        object_expression: ObjectExpression,
        property: Property,
        spread_element: SpreadElement,
    }

    expression_visitor_methods! {
        member_expression: MemberExpression,
        call_expression: CallExpression,
        binary_expression: BinaryExpression,
        logical_expression: LogicalExpression,
        unary_expression: UnaryExpression,
        conditional_expression: ConditionalExpression,
        arrow_function_expression: ArrowFunctionExpression,
    }
}

// ============================================================================
// Walk Functions
// ============================================================================

/// Walk an expression subtree with the caller's visitor.
///
/// `boundary` is the nearest structural position when the subtree
/// hangs off a markup node; it seeds the parent link of the topmost
/// expression position only. Pass `None` for a root expression tree
/// (the host script region).
pub fn walk_expression<'p, V: ExpressionVisitor>(
    visitor: &mut V,
    node: &mut ExprNode,
    boundary: Option<&'p ParentLink<'p>>,
) -> Result<(), VisitError> {
    let mut path = ExprPath {
        node,
        parent: boundary.map(ExprParent::Template),
        descended: false,
    };
    visit_expr_node(visitor, &mut path)
}

/// Default descent for one expression position: visit each operand in
/// order, left-to-right.
///
/// Calling this marks the path as traversed for the handler contract.
pub fn traverse_expression<V: ExpressionVisitor>(
    visitor: &mut V,
    path: &mut ExprPath<'_, '_>,
) -> Result<(), VisitError> {
    path.descended = true;
    let kind = path.node.kind;
    for operand in path.node.operands.iter_mut() {
        let mut child = ExprPath {
            node: operand,
            parent: Some(ExprParent::Expression(kind)),
            descended: false,
        };
        visit_expr_node(visitor, &mut child)?;
    }
    Ok(())
}

/// Dispatch one expression position to its visitor method and enforce
/// the handler contract.
fn visit_expr_node<V: ExpressionVisitor>(
    visitor: &mut V,
    path: &mut ExprPath<'_, '_>,
) -> Result<(), VisitError> {
    let kind = path.kind();
    let flow = match kind {
        ExprKind::Program => visitor.visit_program(path),
        ExprKind::ExpressionStatement => visitor.visit_expression_statement(path),
        ExprKind::VariableDeclaration => visitor.visit_variable_declaration(path),
        ExprKind::VariableDeclarator => visitor.visit_variable_declarator(path),
        ExprKind::Identifier => visitor.visit_identifier(path),
        ExprKind::Literal => visitor.visit_literal(path),
        ExprKind::TemplateLiteral => visitor.visit_template_literal(path),
        ExprKind::ArrayExpression => visitor.visit_array_expression(path),
        ExprKind::ObjectExpression => visitor.visit_object_expression(path),
        ExprKind::Property => visitor.visit_property(path),
        ExprKind::SpreadElement => visitor.visit_spread_element(path),
        ExprKind::MemberExpression => visitor.visit_member_expression(path),
        ExprKind::CallExpression => visitor.visit_call_expression(path),
        ExprKind::BinaryExpression => visitor.visit_binary_expression(path),
        ExprKind::LogicalExpression => visitor.visit_logical_expression(path),
        ExprKind::UnaryExpression => visitor.visit_unary_expression(path),
        ExprKind::ConditionalExpression => visitor.visit_conditional_expression(path),
        ExprKind::ArrowFunctionExpression => visitor.visit_arrow_function_expression(path),
    }?;
    match (path.descended, flow) {
        (true, Flow::Continue) | (false, Flow::Suppress) => Ok(()),
        (true, Flow::Suppress) | (false, Flow::Continue) => {
            Err(VisitError::contract(kind.as_str()))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
