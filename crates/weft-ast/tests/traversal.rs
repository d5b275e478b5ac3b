// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Traversal-order and contract tests for the template visitor engine.
//!
//! Trees are built in the parser's JSON wire shape: `"type"` kind
//! tags, `"else"` for the branch-alternative slot, absent fields
//! omitted.

use serde_json::json;
use weft_ast::{
    traverse, traverse_expression, visit, ExprNode, ExprParent, ExprPath, ExpressionVisitor, Flow,
    Node, NodeKind, Path, Template, VisitError, Visitor,
};

/// Build a markup node from parser-shaped JSON.
fn markup(value: serde_json::Value) -> Node {
    serde_json::from_value(value).expect("valid markup JSON")
}

/// Build an expression node from parser-shaped JSON.
fn expression(value: serde_json::Value) -> ExprNode {
    serde_json::from_value(value).expect("valid expression JSON")
}

/// Records every node it has handlers for, in visit order.
#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl ExpressionVisitor for Recorder {
    fn visit_identifier(&mut self, path: &mut ExprPath<'_, '_>) -> Result<Flow, VisitError> {
        let name = path.node().name.clone().unwrap_or_default();
        self.events.push(format!("identifier:{name}"));
        traverse_expression(self, path)?;
        Ok(Flow::Continue)
    }
}

impl Visitor for Recorder {
    fn visit_text(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
        let data = path.node().data.clone().unwrap_or_default();
        self.events.push(format!("text:{data}"));
        traverse(self, path)?;
        Ok(Flow::Continue)
    }

    fn visit_element(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
        let name = path.node().name.clone().unwrap_or_default();
        self.events.push(format!("element:{name}"));
        traverse(self, path)?;
        Ok(Flow::Continue)
    }

    fn visit_mustache_tag(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
        self.events.push("mustache".to_string());
        traverse(self, path)?;
        Ok(Flow::Continue)
    }

    fn visit_attribute(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
        let name = path.node().name.clone().unwrap_or_default();
        self.events.push(format!("attribute:{name}"));
        traverse(self, path)?;
        Ok(Flow::Continue)
    }
}

#[test]
fn descent_is_preorder_and_source_order() {
    let mut template = Template {
        script: None,
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [
                {
                    "type": "Element",
                    "name": "span",
                    "attributes": [ { "type": "Attribute", "name": "title" } ],
                    "children": [
                        { "type": "Text", "data": "a" },
                        {
                            "type": "MustacheTag",
                            "expression": { "type": "Identifier", "name": "x" }
                        }
                    ]
                },
                { "type": "Text", "data": "b" }
            ]
        }))),
    };

    let mut recorder = Recorder::default();
    visit(&mut template, &mut recorder).expect("walk succeeds");

    // Children before attributes, expression inside the mustache after
    // the structural position that owns it.
    assert_eq!(
        recorder.events,
        [
            "element:span",
            "text:a",
            "mustache",
            "identifier:x",
            "attribute:title",
            "text:b",
        ]
    );
}

#[test]
fn suppress_skips_one_subtree_and_nothing_else() {
    struct SuppressElements {
        events: Vec<String>,
    }

    impl ExpressionVisitor for SuppressElements {}

    impl Visitor for SuppressElements {
        fn visit_element(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            let name = path.node().name.clone().unwrap_or_default();
            self.events.push(format!("element:{name}"));
            Ok(Flow::Suppress)
        }

        fn visit_text(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            let data = path.node().data.clone().unwrap_or_default();
            self.events.push(format!("text:{data}"));
            traverse(self, path)?;
            Ok(Flow::Continue)
        }
    }

    let mut template = Template {
        script: None,
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [
                {
                    "type": "Element",
                    "name": "span",
                    "children": [ { "type": "Text", "data": "inside" } ]
                },
                { "type": "Text", "data": "after" }
            ]
        }))),
    };

    let mut visitor = SuppressElements { events: Vec::new() };
    visit(&mut template, &mut visitor).expect("walk succeeds");

    assert_eq!(visitor.events, ["element:span", "text:after"]);
}

#[test]
fn traversing_and_suppressing_is_a_contract_violation() {
    struct Both;

    impl ExpressionVisitor for Both {}

    impl Visitor for Both {
        fn visit_element(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            traverse(self, path)?;
            Ok(Flow::Suppress)
        }
    }

    let mut template = Template {
        script: None,
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [ { "type": "Element", "name": "div" } ]
        }))),
    };

    let err = visit(&mut template, &mut Both).expect_err("contract violation");
    assert!(matches!(
        err,
        VisitError::ContractViolation { kind: "Element" }
    ));
}

#[test]
fn doing_neither_is_a_contract_violation() {
    struct Neither;

    impl ExpressionVisitor for Neither {}

    impl Visitor for Neither {
        fn visit_element(&mut self, _path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            Ok(Flow::Continue)
        }
    }

    let mut template = Template {
        script: None,
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [ { "type": "Element", "name": "div" } ]
        }))),
    };

    let err = visit(&mut template, &mut Neither).expect_err("contract violation");
    assert!(matches!(
        err,
        VisitError::ContractViolation { kind: "Element" }
    ));
}

#[test]
fn unhandled_kinds_descend_exactly_like_an_immediate_traverse() {
    // The same tree walked twice: once with no handler for Element at
    // all, once with an Element handler that immediately traverses
    // and continues. Leaf handlers record what gets visited and in
    // what order; both walks must agree.
    struct Unhandled {
        events: Vec<String>,
    }

    impl ExpressionVisitor for Unhandled {
        fn visit_identifier(&mut self, path: &mut ExprPath<'_, '_>) -> Result<Flow, VisitError> {
            let name = path.node().name.clone().unwrap_or_default();
            self.events.push(format!("identifier:{name}"));
            traverse_expression(self, path)?;
            Ok(Flow::Continue)
        }
    }

    impl Visitor for Unhandled {
        fn visit_text(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            let data = path.node().data.clone().unwrap_or_default();
            self.events.push(format!("text:{data}"));
            traverse(self, path)?;
            Ok(Flow::Continue)
        }
    }

    struct WithElementHandler {
        events: Vec<String>,
    }

    impl ExpressionVisitor for WithElementHandler {
        fn visit_identifier(&mut self, path: &mut ExprPath<'_, '_>) -> Result<Flow, VisitError> {
            let name = path.node().name.clone().unwrap_or_default();
            self.events.push(format!("identifier:{name}"));
            traverse_expression(self, path)?;
            Ok(Flow::Continue)
        }
    }

    impl Visitor for WithElementHandler {
        fn visit_element(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            traverse(self, path)?;
            Ok(Flow::Continue)
        }

        fn visit_text(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            let data = path.node().data.clone().unwrap_or_default();
            self.events.push(format!("text:{data}"));
            traverse(self, path)?;
            Ok(Flow::Continue)
        }
    }

    let tree = json!({
        "type": "Fragment",
        "children": [
            {
                "type": "Element",
                "name": "div",
                "children": [
                    { "type": "Text", "data": "one" },
                    {
                        "type": "MustacheTag",
                        "expression": { "type": "Identifier", "name": "two" }
                    },
                    { "type": "Text", "data": "three" }
                ]
            }
        ]
    });

    let mut unhandled = Template {
        script: None,
        markup: Some(markup(tree.clone())),
    };
    let mut with_handler = Template {
        script: None,
        markup: Some(markup(tree)),
    };

    let mut a = Unhandled { events: Vec::new() };
    let mut b = WithElementHandler { events: Vec::new() };
    visit(&mut unhandled, &mut a).expect("walk succeeds");
    visit(&mut with_handler, &mut b).expect("walk succeeds");

    assert_eq!(a.events, b.events);
    assert_eq!(a.events, ["text:one", "identifier:two", "text:three"]);
    assert_eq!(unhandled, with_handler);
}

#[test]
fn script_region_is_visited_before_the_markup_region() {
    let mut template = Template {
        script: Some(expression(json!({
            "type": "Program",
            "operands": [
                {
                    "type": "ExpressionStatement",
                    "operands": [ { "type": "Identifier", "name": "scripted" } ]
                }
            ]
        }))),
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [ { "type": "Text", "data": "rendered" } ]
        }))),
    };

    let mut recorder = Recorder::default();
    visit(&mut template, &mut recorder).expect("walk succeeds");

    assert_eq!(recorder.events, ["identifier:scripted", "text:rendered"]);
}

#[test]
fn a_failing_script_pass_prevents_the_markup_pass() {
    struct BadInScript {
        texts: usize,
    }

    impl ExpressionVisitor for BadInScript {
        fn visit_identifier(&mut self, _path: &mut ExprPath<'_, '_>) -> Result<Flow, VisitError> {
            // Neither traverses nor suppresses.
            Ok(Flow::Continue)
        }
    }

    impl Visitor for BadInScript {
        fn visit_text(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            self.texts += 1;
            traverse(self, path)?;
            Ok(Flow::Continue)
        }
    }

    let mut template = Template {
        script: Some(expression(json!({
            "type": "Program",
            "operands": [ { "type": "Identifier", "name": "x" } ]
        }))),
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [ { "type": "Text", "data": "never" } ]
        }))),
    };

    let mut visitor = BadInScript { texts: 0 };
    let err = visit(&mut template, &mut visitor).expect_err("contract violation in script");
    assert!(matches!(
        err,
        VisitError::ContractViolation { kind: "Identifier" }
    ));
    assert_eq!(visitor.texts, 0);
}

#[test]
fn root_path_has_no_parent() {
    struct RootProbe {
        saw_root: bool,
    }

    impl ExpressionVisitor for RootProbe {}

    impl Visitor for RootProbe {
        fn visit_fragment(&mut self, path: &mut Path<'_, '_>) -> Result<Flow, VisitError> {
            assert!(path.parent().is_none());
            self.saw_root = true;
            traverse(self, path)?;
            Ok(Flow::Continue)
        }
    }

    let mut template = Template {
        script: None,
        markup: Some(markup(json!({ "type": "Fragment" }))),
    };

    let mut visitor = RootProbe { saw_root: false };
    visit(&mut template, &mut visitor).expect("walk succeeds");
    assert!(visitor.saw_root);
}

#[test]
fn identifiers_are_delegated_to_the_expression_walker_in_order() {
    struct ContextProbe {
        events: Vec<String>,
    }

    impl ExpressionVisitor for ContextProbe {
        fn visit_identifier(&mut self, path: &mut ExprPath<'_, '_>) -> Result<Flow, VisitError> {
            let name = path.node().name.clone().unwrap_or_default();
            let parent = match path.parent() {
                Some(ExprParent::Template(link)) => format!("template:{}", link.kind()),
                Some(ExprParent::Expression(kind)) => format!("expression:{kind}"),
                None => "none".to_string(),
            };
            self.events.push(format!("{name}@{parent}"));
            traverse_expression(self, path)?;
            Ok(Flow::Continue)
        }
    }

    impl Visitor for ContextProbe {}

    let mut template = Template {
        script: None,
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [
                {
                    "type": "EachBlock",
                    "expression": { "type": "Identifier", "name": "items" },
                    "identifiers": [
                        { "type": "Identifier", "name": "item" },
                        { "type": "Identifier", "name": "index" }
                    ],
                    "children": [ { "type": "Text", "data": "row" } ]
                }
            ]
        }))),
    };

    let mut probe = ContextProbe { events: Vec::new() };
    visit(&mut template, &mut probe).expect("walk succeeds");

    // The block expression comes before the destructuring bindings,
    // and every topmost expression position reports the owning
    // structural node as its parent.
    assert_eq!(
        probe.events,
        [
            "items@template:EachBlock",
            "item@template:EachBlock",
            "index@template:EachBlock",
        ]
    );
}

#[test]
fn boundary_parent_chain_reaches_the_enclosing_ancestors() {
    struct ChainProbe {
        chains: Vec<Vec<NodeKind>>,
    }

    impl ExpressionVisitor for ChainProbe {
        fn visit_binary_expression(
            &mut self,
            path: &mut ExprPath<'_, '_>,
        ) -> Result<Flow, VisitError> {
            if let Some(ExprParent::Template(link)) = path.parent() {
                self.chains
                    .push(link.ancestors().map(|l| l.kind()).collect());
            }
            traverse_expression(self, path)?;
            Ok(Flow::Continue)
        }

        fn visit_identifier(&mut self, path: &mut ExprPath<'_, '_>) -> Result<Flow, VisitError> {
            // Inner positions belong to the expression tree, not the
            // structural boundary.
            assert!(matches!(
                path.parent(),
                Some(ExprParent::Expression(_)) | None
            ));
            traverse_expression(self, path)?;
            Ok(Flow::Continue)
        }
    }

    impl Visitor for ChainProbe {}

    let mut template = Template {
        script: None,
        markup: Some(markup(json!({
            "type": "Fragment",
            "children": [
                {
                    "type": "Element",
                    "name": "span",
                    "children": [
                        {
                            "type": "MustacheTag",
                            "expression": {
                                "type": "BinaryExpression",
                                "operands": [
                                    { "type": "Identifier", "name": "a" },
                                    { "type": "Identifier", "name": "b" }
                                ]
                            }
                        }
                    ]
                }
            ]
        }))),
    };

    let mut probe = ChainProbe { chains: Vec::new() };
    visit(&mut template, &mut probe).expect("walk succeeds");

    assert_eq!(
        probe.chains,
        [vec![
            NodeKind::MustacheTag,
            NodeKind::Element,
            NodeKind::Fragment,
        ]]
    );
}
