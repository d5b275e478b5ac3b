// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for template traversal.
//!
//! Every variant of [`VisitError`] is fatal to the enclosing
//! [`visit`](crate::visit) call: the first error aborts the traversal
//! synchronously and the tree is left exactly as mutated so far. There
//! are no recoverable variants, no error collection, and no retries.

use thiserror::Error;

// ============================================================================
// Visit Errors
// ============================================================================

/// Fatal failures raised while a traversal is in progress.
#[derive(Debug, Error)]
pub enum VisitError {
    /// A visitor method neither called `traverse` nor returned
    /// [`Flow::Suppress`](crate::visitor::Flow::Suppress), or did both.
    ///
    /// Exactly one of the two is required from every handler that runs.
    #[error("visitor for {kind} must either call traverse or return Flow::Suppress")]
    ContractViolation {
        /// Tag of the node whose handler broke the contract.
        kind: &'static str,
    },

    /// `replace` or `prune` was invoked on the synthetic root path.
    ///
    /// The root occupies no collection index or optional field, so
    /// there is no slot to rewrite.
    #[error("{op} is not supported at the template root")]
    UnsupportedRootOperation {
        /// The capability that was invoked: `"replace"` or `"prune"`.
        op: &'static str,
    },
}

impl VisitError {
    /// Create a contract-violation error for the given node tag.
    pub(crate) fn contract(kind: &'static str) -> Self {
        VisitError::ContractViolation { kind }
    }

    /// Create a root-operation error for the given capability name.
    pub(crate) fn at_root(op: &'static str) -> Self {
        VisitError::UnsupportedRootOperation { op }
    }
}

// ============================================================================
// Tests
// ============================================================================
