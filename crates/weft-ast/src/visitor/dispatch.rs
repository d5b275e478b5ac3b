// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk functions for structural template traversal.
//!
//! Traversal is strict depth-first pre-order: a node's visitor method
//! runs before its fields are descended into, and fields are walked
//! left-to-right in a fixed order:
//!
//! 1. `children`
//! 2. `else_block` (single optional slot)
//! 3. `attributes`
//! 4. `expression` (handed to the expression walker with the current
//!    position as boundary parent)
//! 5. `identifiers` (each entry handed to the expression walker, in
//!    order)
//! 6. `value`
//!
//! Fields are handled generically; the engine detects which are
//! populated and never special-cases node kinds.
//!
//! # Mutation during traversal
//!
//! Replacements commit when the replaced node's visit completes.
//! Pruned entries are filtered out of their collection only after the
//! whole collection has been visited, preserving the relative order
//! of survivors; later traversal steps in the same pass observe the
//! filtered collection. A pruned branch-alternative slot is cleared
//! to empty instead.

use crate::error::VisitError;
use crate::expr::walk_expression;
use crate::nodes::{Node, NodeKind, Template};
use crate::visitor::path::{ParentLink, Path, PendingEdit};
use crate::visitor::traits::{Flow, Visitor};

// ============================================================================
// Entry Point
// ============================================================================

/// Visit a parsed template, mutating it in place.
///
/// Runs two sequential, independent passes in authored source order:
/// the host script region first (handed directly to the expression
/// walker as a root expression tree), then the markup region from a
/// synthetic root path. No state is shared between the passes.
///
/// The first contract or usage failure aborts the call immediately:
/// if the script pass fails, the markup pass does not run; if the
/// markup pass fails, the script pass's mutations remain committed.
/// There is no rollback.
///
/// Traversal recurses to the nesting depth of the tree with no depth
/// guard; pathologically deep input can exhaust the stack.
pub fn visit<V: Visitor>(template: &mut Template, visitor: &mut V) -> Result<(), VisitError> {
    if let Some(script) = template.script.as_mut() {
        tracing::trace!("visiting host script region");
        walk_expression(visitor, script, None)?;
    }
    if let Some(markup) = template.markup.as_mut() {
        tracing::trace!("visiting markup region");
        let mut path = Path::root(markup);
        visit_node(visitor, &mut path)?;
    }
    Ok(())
}

// ============================================================================
// Node Dispatch
// ============================================================================

/// Dispatch one structural position to its visitor method and enforce
/// the handler contract: exactly one of {the method called
/// [`traverse`], the method returned [`Flow::Suppress`]} must hold.
pub(crate) fn visit_node<V: Visitor>(
    visitor: &mut V,
    path: &mut Path<'_, '_>,
) -> Result<(), VisitError> {
    let kind = path.kind();
    let flow = match kind {
        NodeKind::Fragment => visitor.visit_fragment(path),
        NodeKind::Text => visitor.visit_text(path),
        NodeKind::Comment => visitor.visit_comment(path),
        NodeKind::Element => visitor.visit_element(path),
        NodeKind::InlineComponent => visitor.visit_inline_component(path),
        NodeKind::SlotTemplate => visitor.visit_slot_template(path),
        NodeKind::Title => visitor.visit_title(path),
        NodeKind::Slot => visitor.visit_slot(path),
        NodeKind::Head => visitor.visit_head(path),
        NodeKind::Options => visitor.visit_options(path),
        NodeKind::Window => visitor.visit_window(path),
        NodeKind::Document => visitor.visit_document(path),
        NodeKind::Body => visitor.visit_body(path),
        NodeKind::Attribute => visitor.visit_attribute(path),
        NodeKind::SpreadAttribute => visitor.visit_spread_attribute(path),
        NodeKind::MustacheTag => visitor.visit_mustache_tag(path),
        NodeKind::RawMustacheTag => visitor.visit_raw_mustache_tag(path),
        NodeKind::ConstTag => visitor.visit_const_tag(path),
        NodeKind::DebugTag => visitor.visit_debug_tag(path),
        NodeKind::IfBlock => visitor.visit_if_block(path),
        NodeKind::ElseBlock => visitor.visit_else_block(path),
        NodeKind::EachBlock => visitor.visit_each_block(path),
        NodeKind::KeyBlock => visitor.visit_key_block(path),
        NodeKind::Action => visitor.visit_action(path),
        NodeKind::Animation => visitor.visit_animation(path),
        NodeKind::Binding => visitor.visit_binding(path),
        NodeKind::Class => visitor.visit_class_directive(path),
        NodeKind::EventHandler => visitor.visit_event_handler(path),
        NodeKind::Let => visitor.visit_let_directive(path),
        NodeKind::Ref => visitor.visit_ref_directive(path),
        NodeKind::StyleDirective => visitor.visit_style_directive(path),
        NodeKind::Transition => visitor.visit_transition(path),
    }?;
    match (path.descended, flow) {
        (true, Flow::Continue) | (false, Flow::Suppress) => Ok(()),
        (true, Flow::Suppress) | (false, Flow::Continue) => {
            Err(VisitError::contract(kind.as_str()))
        }
    }
}

// ============================================================================
// Default Descent
// ============================================================================

/// Default structural descent for one position.
///
/// Walks the node's present fields in the fixed order documented on
/// this module, wiring the current position into the parent chain of
/// everything below it. Calling this marks the path as traversed for
/// the handler contract.
pub fn traverse<V: Visitor>(visitor: &mut V, path: &mut Path<'_, '_>) -> Result<(), VisitError> {
    path.descended = true;
    let parent = path.parent;
    let Node {
        kind,
        name,
        children,
        attributes,
        expression,
        identifiers,
        value,
        else_block,
        ..
    } = &mut *path.node;
    let link = ParentLink::new(*kind, name.as_deref(), parent);

    walk_collection(visitor, children, Some(&link))?;

    if else_block.is_some() {
        let mut edit = PendingEdit::default();
        if let Some(alt) = else_block.as_deref_mut() {
            let mut alt_path = Path::new(alt, Some(&link), &mut edit);
            visit_node(visitor, &mut alt_path)?;
        }
        if let Some(replacement) = edit.replacement {
            *else_block = Some(Box::new(replacement));
        } else if edit.pruned {
            tracing::debug!("clearing pruned branch-alternative slot");
            *else_block = None;
        }
    }

    walk_collection(visitor, attributes, Some(&link))?;

    if let Some(expression) = expression.as_mut() {
        walk_expression(visitor, expression, Some(&link))?;
    }

    for identifier in identifiers.iter_mut() {
        walk_expression(visitor, identifier, Some(&link))?;
    }

    walk_collection(visitor, value, Some(&link))?;

    Ok(())
}

// ============================================================================
// Collection Traversal
// ============================================================================

/// Visit every entry of an ordered collection, then commit pruning.
///
/// Each entry gets a path whose `replace` writes to its index and
/// whose `prune` marks the index for removal. All entries are visited
/// before any removal applies; the rewrite preserves the original
/// relative order of survivors. A replaced entry survives even when
/// its original occupant was also pruned.
fn walk_collection<V: Visitor>(
    visitor: &mut V,
    nodes: &mut Vec<Node>,
    parent: Option<&ParentLink<'_>>,
) -> Result<(), VisitError> {
    if nodes.is_empty() {
        return Ok(());
    }
    let mut pruned: Vec<usize> = Vec::new();
    for (index, slot_node) in nodes.iter_mut().enumerate() {
        let mut edit = PendingEdit::default();
        {
            let mut path = Path::new(&mut *slot_node, parent, &mut edit);
            visit_node(visitor, &mut path)?;
        }
        if let Some(replacement) = edit.replacement {
            *slot_node = replacement;
        } else if edit.pruned {
            pruned.push(index);
        }
    }
    if !pruned.is_empty() {
        tracing::debug!(count = pruned.len(), "rewriting collection after pruning");
        let mut index = 0;
        nodes.retain(|_| {
            let keep = !pruned.contains(&index);
            index += 1;
            keep
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
