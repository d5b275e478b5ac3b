// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Structural node schema for component templates.
//!
//! The parser collaborator produces a [`Template`] before
//! [`visit`](crate::visit) is called: an optional host script region
//! (an expression tree rooted at a `Program`) and an optional markup
//! region (a [`Node`] tree, conventionally rooted at a `Fragment`).
//!
//! A [`Node`] is a kind tag plus a fixed set of generic fields. Which
//! fields are populated depends on the kind, but the traversal engine
//! never special-cases kinds: it detects which fields are present and
//! descends into them in a fixed order. Absent fields (empty
//! collections, `None` options) are skipped, not rejected.
//!
//! The serde shape mirrors the parser's JSON output: the kind tag is
//! serialized as `"type"`, the branch-alternative slot as `"else"`,
//! and absent fields are omitted entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::expr::ExprNode;

// ============================================================================
// Node Kinds
// ============================================================================

/// The kind tag of a structural node.
///
/// The catalog is fixed by the template grammar. Dispatch in the
/// traversal engine is a `match` over this enum; the engine itself
/// attaches no meaning to individual kinds beyond their tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Fragment,
    Text,
    Comment,
    Element,
    InlineComponent,
    SlotTemplate,
    Title,
    Slot,
    Head,
    Options,
    Window,
    Document,
    Body,
    Attribute,
    SpreadAttribute,
    MustacheTag,
    RawMustacheTag,
    ConstTag,
    DebugTag,
    IfBlock,
    ElseBlock,
    EachBlock,
    KeyBlock,
    Action,
    Animation,
    Binding,
    Class,
    EventHandler,
    Let,
    Ref,
    StyleDirective,
    Transition,
}

impl NodeKind {
    /// The tag as it appears in the parser's `"type"` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Fragment => "Fragment",
            NodeKind::Text => "Text",
            NodeKind::Comment => "Comment",
            NodeKind::Element => "Element",
            NodeKind::InlineComponent => "InlineComponent",
            NodeKind::SlotTemplate => "SlotTemplate",
            NodeKind::Title => "Title",
            NodeKind::Slot => "Slot",
            NodeKind::Head => "Head",
            NodeKind::Options => "Options",
            NodeKind::Window => "Window",
            NodeKind::Document => "Document",
            NodeKind::Body => "Body",
            NodeKind::Attribute => "Attribute",
            NodeKind::SpreadAttribute => "SpreadAttribute",
            NodeKind::MustacheTag => "MustacheTag",
            NodeKind::RawMustacheTag => "RawMustacheTag",
            NodeKind::ConstTag => "ConstTag",
            NodeKind::DebugTag => "DebugTag",
            NodeKind::IfBlock => "IfBlock",
            NodeKind::ElseBlock => "ElseBlock",
            NodeKind::EachBlock => "EachBlock",
            NodeKind::KeyBlock => "KeyBlock",
            NodeKind::Action => "Action",
            NodeKind::Animation => "Animation",
            NodeKind::Binding => "Binding",
            NodeKind::Class => "Class",
            NodeKind::EventHandler => "EventHandler",
            NodeKind::Let => "Let",
            NodeKind::Ref => "Ref",
            NodeKind::StyleDirective => "StyleDirective",
            NodeKind::Transition => "Transition",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Structural Node
// ============================================================================

/// One structural node of the markup tree.
///
/// Fields beyond `kind` are generic: the traversal engine descends
/// into whichever are populated, in the order `children` →
/// `else_block` → `attributes` → `expression` → `identifiers` →
/// `value`. `expression` and `identifiers` hold embedded-expression
/// subtrees and are opaque to the structural engine; they are handed
/// to the expression walker at the dialect boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Kind tag (the parser's `"type"` field).
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Element, component, directive, or attribute name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Text or comment content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Ordered child nodes. Empty means the field is absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    /// Ordered attribute nodes. Empty means the field is absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Node>,

    /// Embedded expression subtree (interpolations, directive and
    /// block expressions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<ExprNode>,

    /// Destructuring bindings introduced by the node (loop contexts,
    /// const tags, let directives). Expression subtrees, walked by the
    /// expression dialect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<ExprNode>,

    /// Directive or attribute value parts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<Node>,

    /// The branch-alternative slot. A single optional nested node, not
    /// a collection: pruning it clears the field to `None`.
    #[serde(rename = "else", default, skip_serializing_if = "Option::is_none")]
    pub else_block: Option<Box<Node>>,
}

impl Node {
    /// Create an empty node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            name: None,
            data: None,
            children: Vec::new(),
            attributes: Vec::new(),
            expression: None,
            identifiers: Vec::new(),
            value: Vec::new(),
            else_block: None,
        }
    }
}

// ============================================================================
// Template
// ============================================================================

/// A parsed component-template source file.
///
/// Both regions are optional; [`visit`](crate::visit) walks the script
/// region first and the markup region second, matching authored source
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Host script region: an already-parsed expression tree rooted at
    /// a `Program`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<ExprNode>,

    /// Markup region root, conventionally a `Fragment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markup: Option<Node>,
}

// ============================================================================
// Tests
// ============================================================================
