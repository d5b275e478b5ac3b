// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor infrastructure for structural template traversal.
//!
//! This module provides the traversal engine for the markup side of a
//! parsed template: the [`Visitor`] trait (one method per node kind,
//! defaulting to descent), the [`Path`] handle with its scoped
//! mutation capabilities, and the [`visit`] entry point that composes
//! the script-region and markup-region passes.
//!
//! # Traversal Order
//!
//! - **Depth-first, pre-order**: a node's method runs before its
//!   fields are descended into
//! - **Source order**: collections are walked left-to-right, and the
//!   script region is visited before the markup region
//!
//! # Control Flow
//!
//! Every method that runs must either call [`traverse`] on its own
//! path or return [`Flow::Suppress`], and never both.
//! Suppression skips one subtree; siblings and ancestors continue
//! normally. There is no other cancellation primitive: the only way
//! to stop a visit early is to return an error.

mod dispatch;
mod path;
mod traits;

pub use dispatch::{traverse, visit};
pub use path::{Ancestors, ParentLink, Path};
pub use traits::{Flow, Visitor};
