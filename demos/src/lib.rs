// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the disclosure demos.
//!
//! The demos have no window or DOM. [`ConsoleHost`] stands in for one: it
//! hands out node ids, performs focus requests by remembering the focused
//! node, and prints decorated elements as markup-like lines.

use understory_disclosure::{Element, FocusHost, FocusOptions, Placement, PortalTarget, Rendered};

/// Node handle used by the demos.
pub type NodeId = u32;

/// A stand-in host that prints what a real one would draw.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    next_node: NodeId,
    focused: Option<NodeId>,
}

impl ConsoleHost {
    /// Creates a host with nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The node that last received focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Mounts `rendered` under a fresh node id, runs its focus effect, and
    /// prints it.
    pub fn commit(&mut self, label: &str, rendered: &Rendered<NodeId>) -> NodeId {
        self.next_node += 1;
        let node = self.next_node;
        rendered.element.mount(node);
        if let Some(request) = &rendered.focus {
            request.apply(self);
        }
        println!("{label:>8}: {}{}", describe(&rendered.element), placement(&rendered.placement));
        node
    }
}

impl FocusHost<NodeId> for ConsoleHost {
    fn focus(&mut self, node: NodeId, options: FocusOptions) -> bool {
        println!("   focus -> node {node} (prevent_scroll: {})", options.prevent_scroll);
        self.focused = Some(node);
        true
    }
}

/// Formats an element as a single markup-like line.
pub fn describe(element: &Element<NodeId>) -> String {
    let mut out = format!("<{}", element.tag());
    for (name, value) in element.attributes.iter() {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    if let Some(class_name) = element.class.to_class_name() {
        out.push_str(&format!(" class=\"{class_name}\""));
    }
    if !element.style.is_empty() {
        out.push_str(&format!(" style=\"{}\"", element.style));
    }
    out.push('>');
    out
}

fn placement(placement: &Placement<NodeId>) -> String {
    match placement {
        Placement::Inline => String::new(),
        Placement::Portal(PortalTarget::Selector(selector)) => format!("  [portal {selector}]"),
        Placement::Portal(PortalTarget::Container(node)) => format!("  [portal node {node}]"),
    }
}
