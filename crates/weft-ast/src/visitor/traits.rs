// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor trait definition for structural traversal.

use super::dispatch::traverse;
use super::path::Path;
use crate::error::VisitError;
use crate::expr::ExpressionVisitor;

// ============================================================================
// Flow
// ============================================================================

/// What a visitor method reports back to the engine.
///
/// Together with whether the method called [`traverse`], this drives
/// the handler contract: exactly one of {called `traverse`, returned
/// `Suppress`} must hold after every handler, or the visit aborts
/// with [`VisitError::ContractViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flow {
    /// The handler ran and performed its own descent via [`traverse`].
    #[default]
    Continue,

    /// Do not descend into this subtree. Siblings and ancestors are
    /// unaffected.
    Suppress,
}

// ============================================================================
// Visitor Methods
// ============================================================================

/// Macro to generate visitor trait method signatures.
///
/// Each method receives the [`Path`] for its node. The default body
/// performs default structural descent and returns [`Flow::Continue`],
/// so a kind with no override behaves exactly as if no handler were
/// registered for it.
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $kind:ident
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`NodeKind::", stringify!($kind), "`](crate::nodes::NodeKind::", stringify!($kind), ") node.")]
                #[doc = ""]
                #[doc = "Either call [`traverse`] on the path or return [`Flow::Suppress`]; doing both or neither is a contract violation."]
                fn [<visit_ $base_name>](
                    &mut self,
                    path: &mut Path<'_, '_>,
                ) -> Result<Flow, VisitError> {
                    traverse(self, path)?;
                    Ok(Flow::Continue)
                }
            )*
        }
    };
}

/// Visitor for structural template traversal.
///
/// One method per structural node kind, dispatched by the engine
/// through a static match on the kind tag. Override the kinds you
/// care about; everything else gets default structural descent.
///
/// [`ExpressionVisitor`] is a supertrait: the same visitor value
/// serves both dialects, and the engine hands it to the expression
/// walker unmodified when descent crosses the boundary into an
/// embedded expression subtree.
///
/// # Handler Contract
///
/// A method that runs must either call [`traverse`] on its own path
/// or return [`Flow::Suppress`]. Doing both or neither aborts the
/// whole visit with [`VisitError::ContractViolation`].
///
/// # Example
///
/// ```ignore
/// struct StripAttributes;
///
/// impl ExpressionVisitor for StripAttributes {}
///
/// impl Visitor for StripAttributes {
///     fn visit_attribute(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
///         path.prune()?;
///         Ok(Flow::Suppress)
///     }
/// }
/// ```
pub trait Visitor: ExpressionVisitor {
    // Region and leaf nodes
    visitor_methods! {
        fragment: Fragment,
        text: Text,
        comment: Comment,
    }

    // Elements and element-shaped specials
    visitor_methods! {
        element: Element,
        inline_component: InlineComponent,
        slot_template: SlotTemplate,
        title: Title,
        slot: Slot,
        head: Head,
        options: Options,
        window: Window,
        document: Document,
        body: Body,
    }

    // Attributes
    visitor_methods! {
        attribute: Attribute,
        spread_attribute: SpreadAttribute,
    }

    // Interpolation and special tags
    visitor_methods! {
        mustache_tag: MustacheTag,
        raw_mustache_tag: RawMustacheTag,
        const_tag: ConstTag,
        debug_tag: DebugTag,
    }

    // Branch and loop blocks
    visitor_methods! {
        if_block: IfBlock,
        else_block: ElseBlock,
        each_block: EachBlock,
        key_block: KeyBlock,
    }

    // Directives
    visitor_methods! {
        action: Action,
        animation: Animation,
        binding: Binding,
        class_directive: Class,
        event_handler: EventHandler,
        let_directive: Let,
        ref_directive: Ref,
        style_directive: StyleDirective,
        transition: Transition,
    }
}

// ============================================================================
// Tests
// ============================================================================
