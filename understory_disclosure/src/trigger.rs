// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure triggers: the control that toggles the open state.
//!
//! A trigger decorates its element with `aria-controls` (the disclosure id),
//! `aria-expanded` (`"true"`/`"false"`), open/closed class and style variants,
//! and button semantics. Activating it toggles the disclosure before the
//! element's own click handlers run.
//!
//! After a render that finds the disclosure closed when the previous render
//! found it open, the trigger asks for focus so keyboard users land back on
//! the control that opened the content.
//!
//! ```
//! use understory_disclosure::{ClickEvent, Disclosure, Element, Trigger, TriggerOptions};
//!
//! let disclosure = Disclosure::default();
//! let mut trigger = Trigger::<u32>::new(disclosure.clone(), TriggerOptions::new());
//!
//! let mut rendered = trigger.render(Element::new("button"));
//! assert_eq!(rendered.element.attributes.get("aria-expanded"), Some("false"));
//!
//! rendered.element.click(&mut ClickEvent::pointer());
//! assert!(disclosure.is_open());
//!
//! let rendered = trigger.render(Element::new("button"));
//! assert_eq!(rendered.element.attributes.get("aria-expanded"), Some("true"));
//! ```

use crate::attrs::{ClassList, StyleMap};
use crate::element::{Element, NodeRef, Rendered};
use crate::focus::{FocusOptions, FocusRequest};
use crate::portal::Placement;
use crate::state::{Disclosure, DisclosureContext, DisclosureId};

/// Options for a disclosure trigger.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerOptions {
    /// Classes added while open.
    pub open_class: ClassList,
    /// Classes added while closed.
    pub closed_class: ClassList,
    /// Style laid over the element's own style while open.
    pub open_style: StyleMap,
    /// Style laid over the element's own style while closed.
    pub closed_style: StyleMap,
}

impl TriggerOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the open-state classes.
    #[must_use]
    pub fn open_class(mut self, class_name: &str) -> Self {
        self.open_class = ClassList::parse(class_name);
        self
    }

    /// Sets the closed-state classes.
    #[must_use]
    pub fn closed_class(mut self, class_name: &str) -> Self {
        self.closed_class = ClassList::parse(class_name);
        self
    }

    /// Sets the open-state style.
    #[must_use]
    pub fn open_style(mut self, style: StyleMap) -> Self {
        self.open_style = style;
        self
    }

    /// Sets the closed-state style.
    #[must_use]
    pub fn closed_style(mut self, style: StyleMap) -> Self {
        self.closed_style = style;
        self
    }

    /// Computes trigger props for an element with no class or style of its own.
    #[must_use]
    pub fn props(&self, context: &DisclosureContext) -> TriggerProps {
        self.props_over(context, &ClassList::new(), &StyleMap::new())
    }

    /// Computes trigger props merged over an element's own class and style.
    #[must_use]
    pub fn props_over(
        &self,
        context: &DisclosureContext,
        class: &ClassList,
        style: &StyleMap,
    ) -> TriggerProps {
        let is_open = context.is_open();
        let (variant_class, variant_style) = if is_open {
            (&self.open_class, &self.open_style)
        } else {
            (&self.closed_class, &self.closed_style)
        };
        TriggerProps {
            aria_controls: context.id().clone(),
            aria_expanded: is_open,
            class: ClassList::merged(class, variant_class),
            style: StyleMap::merged(style, variant_style),
        }
    }
}

/// Attributes computed for a trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerProps {
    /// The id of the controlled target.
    pub aria_controls: DisclosureId,
    /// Always equal to the open state.
    pub aria_expanded: bool,
    /// Merged classes.
    pub class: ClassList,
    /// Merged style.
    pub style: StyleMap,
}

impl TriggerProps {
    /// Writes the props onto `element` and gives it button semantics.
    pub fn apply<K: Copy>(self, element: &mut Element<K>) {
        element
            .attributes
            .set("aria-controls", self.aria_controls.as_str());
        element
            .attributes
            .set("aria-expanded", if self.aria_expanded { "true" } else { "false" });
        element.class = self.class;
        element.style = self.style;
        element.make_button();
    }
}

/// A disclosure trigger instance.
#[derive(Debug)]
pub struct Trigger<K> {
    disclosure: Disclosure,
    options: TriggerOptions,
    node_ref: NodeRef<K>,
    was_open: Option<bool>,
}

impl<K: Copy> Trigger<K> {
    /// Creates a trigger bound to `disclosure`.
    #[must_use]
    pub fn new(disclosure: Disclosure, options: TriggerOptions) -> Self {
        Self {
            disclosure,
            options,
            node_ref: NodeRef::new(),
            was_open: None,
        }
    }

    /// The trigger's options.
    #[must_use]
    pub fn options(&self) -> &TriggerOptions {
        &self.options
    }

    /// Replaces the options for subsequent renders.
    pub fn set_options(&mut self, options: TriggerOptions) {
        self.options = options;
    }

    /// The ref attached to the trigger's host node once mounted.
    #[must_use]
    pub fn node_ref(&self) -> &NodeRef<K> {
        &self.node_ref
    }

    /// Decorates `child` for the current state.
    pub fn render(&mut self, mut child: Element<K>) -> Rendered<K> {
        let context = self.disclosure.context();
        let is_open = context.is_open();
        self.options
            .props_over(&context, &child.class, &child.style)
            .apply(&mut child);

        let controls = self.disclosure.controls();
        child.click_handlers.set_action(move |_| controls.toggle());
        child.add_ref(self.node_ref.clone());

        let closed = !is_open && self.was_open.unwrap_or(false);
        self.was_open = Some(is_open);
        let focus = closed.then(|| {
            FocusRequest::new(
                self.node_ref.clone(),
                FocusOptions {
                    include_root: true,
                    prevent_scroll: false,
                },
            )
        });

        Rendered {
            element: child,
            placement: Placement::Inline,
            focus,
        }
    }
}
