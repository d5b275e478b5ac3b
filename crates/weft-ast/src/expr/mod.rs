// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The embedded expression dialect and its walker.
//!
//! Component templates interleave two node languages: the structural
//! markup tree ([`Node`](crate::nodes::Node)) and a general-purpose
//! expression language that appears inside interpolation tags,
//! directive values, destructuring bindings, and the host script
//! region. This module owns the expression side: the node shape, the
//! per-kind [`ExpressionVisitor`] methods, and the walk functions.
//!
//! The structural engine treats expression subtrees as opaque. It
//! crosses the dialect boundary in exactly one way: handing a subtree
//! to [`walk_expression`] together with the nearest structural
//! position, which seeds the parent link of the topmost expression
//! position only. Everything below that is this module's business.

mod walk;

pub use walk::{traverse_expression, walk_expression, ExprParent, ExprPath, ExpressionVisitor};

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Expression Kinds
// ============================================================================

/// The kind tag of an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExprKind {
    Program,
    ExpressionStatement,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    Literal,
    TemplateLiteral,
    ArrayExpression,
    ObjectExpression,
    Property,
    SpreadElement,
    MemberExpression,
    CallExpression,
    BinaryExpression,
    LogicalExpression,
    UnaryExpression,
    ConditionalExpression,
    ArrowFunctionExpression,
}

impl ExprKind {
    /// The tag as it appears in the parser's `"type"` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExprKind::Program => "Program",
            ExprKind::ExpressionStatement => "ExpressionStatement",
            ExprKind::VariableDeclaration => "VariableDeclaration",
            ExprKind::VariableDeclarator => "VariableDeclarator",
            ExprKind::Identifier => "Identifier",
            ExprKind::Literal => "Literal",
            ExprKind::TemplateLiteral => "TemplateLiteral",
            ExprKind::ArrayExpression => "ArrayExpression",
            ExprKind::ObjectExpression => "ObjectExpression",
            ExprKind::Property => "Property",
            ExprKind::SpreadElement => "SpreadElement",
            ExprKind::MemberExpression => "MemberExpression",
            ExprKind::CallExpression => "CallExpression",
            ExprKind::BinaryExpression => "BinaryExpression",
            ExprKind::LogicalExpression => "LogicalExpression",
            ExprKind::UnaryExpression => "UnaryExpression",
            ExprKind::ConditionalExpression => "ConditionalExpression",
            ExprKind::ArrowFunctionExpression => "ArrowFunctionExpression",
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Expression Node
// ============================================================================

/// One node of an embedded expression tree.
///
/// `operands` holds the node's ordered operand positions (a program's
/// statements, a call's callee and arguments, a binary expression's
/// left and right sides) and is walked left-to-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprNode {
    /// Kind tag (the parser's `"type"` field).
    #[serde(rename = "type")]
    pub kind: ExprKind,

    /// Identifier or member-property name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Literal source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Ordered operand positions. Empty means the node is a leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operands: Vec<ExprNode>,
}

impl ExprNode {
    /// Create a leaf node of the given kind.
    pub fn new(kind: ExprKind) -> Self {
        ExprNode {
            kind,
            name: None,
            raw: None,
            operands: Vec::new(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
