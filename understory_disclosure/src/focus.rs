// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional focus: post-render focus effects and the host trait that runs them.
//!
//! Wrappers do not move focus themselves. When a render crosses the relevant
//! transition (closed → open for a target, open → closed for a trigger) the
//! wrapper returns a [`FocusRequest`]. After mounting the element, the host
//! applies it through its [`FocusHost`] implementation.
//!
//! ```
//! use understory_disclosure::{FocusHost, FocusOptions, FocusRequest, NodeRef};
//!
//! #[derive(Default)]
//! struct Recorder(Vec<u32>);
//!
//! impl FocusHost<u32> for Recorder {
//!     fn focus(&mut self, node: u32, _options: FocusOptions) -> bool {
//!         self.0.push(node);
//!         true
//!     }
//! }
//!
//! let node_ref = NodeRef::new();
//! let request = FocusRequest::new(node_ref.clone(), FocusOptions::default());
//! let mut host = Recorder::default();
//!
//! // Not mounted yet: nothing to focus.
//! assert!(!request.apply(&mut host));
//!
//! node_ref.attach(5);
//! assert!(request.apply(&mut host));
//! assert_eq!(host.0, vec![5]);
//! ```

use crate::element::NodeRef;

/// How a focus request should be carried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FocusOptions {
    /// Allow the root node itself to receive focus, not only its focusable
    /// descendants.
    pub include_root: bool,
    /// Ask the host not to scroll the focused node into view.
    pub prevent_scroll: bool,
}

/// Host-side focus management.
pub trait FocusHost<K> {
    /// Moves focus to `node`, or to the first focusable node within it.
    ///
    /// Returns `true` if focus moved.
    fn focus(&mut self, node: K, options: FocusOptions) -> bool;
}

/// A pending focus effect for a wrapped element.
#[derive(Clone, Debug)]
pub struct FocusRequest<K> {
    node_ref: NodeRef<K>,
    options: FocusOptions,
}

impl<K: Copy> FocusRequest<K> {
    /// Creates a request to focus whatever `node_ref` is attached to.
    #[must_use]
    pub fn new(node_ref: NodeRef<K>, options: FocusOptions) -> Self {
        Self { node_ref, options }
    }

    /// The node the request targets, if mounted.
    #[must_use]
    pub fn node(&self) -> Option<K> {
        self.node_ref.get()
    }

    /// The requested options.
    #[must_use]
    pub fn options(&self) -> FocusOptions {
        self.options
    }

    /// Runs the request against `host`.
    ///
    /// Returns `false` when the element is not mounted or the host declines.
    pub fn apply<H>(&self, host: &mut H) -> bool
    where
        H: FocusHost<K> + ?Sized,
    {
        match self.node_ref.get() {
            Some(node) => host.focus(node, self.options),
            None => false,
        }
    }
}
