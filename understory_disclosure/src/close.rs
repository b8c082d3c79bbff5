// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Close buttons: an explicit control that only ever closes the disclosure.

use crate::element::{Element, Rendered};
use crate::state::{Disclosure, DisclosureContext, DisclosureId};

/// Accessible name used when the element does not declare its own `aria-label`.
pub const DEFAULT_CLOSE_LABEL: &str = "Close";

/// Attributes computed for a close button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseProps {
    /// The id of the controlled target.
    pub aria_controls: DisclosureId,
    /// Always equal to the open state.
    pub aria_expanded: bool,
    /// Default accessible name.
    pub aria_label: &'static str,
}

impl CloseProps {
    /// Computes close button props for `context`.
    #[must_use]
    pub fn new(context: &DisclosureContext) -> Self {
        Self {
            aria_controls: context.id().clone(),
            aria_expanded: context.is_open(),
            aria_label: DEFAULT_CLOSE_LABEL,
        }
    }

    /// Writes the props onto `element` and gives it button semantics.
    ///
    /// An `aria-label` already present on the element is kept, even if empty.
    pub fn apply<K: Copy>(self, element: &mut Element<K>) {
        element
            .attributes
            .set("aria-controls", self.aria_controls.as_str());
        element
            .attributes
            .set("aria-expanded", if self.aria_expanded { "true" } else { "false" });
        element.attributes.set_default("aria-label", self.aria_label);
        element.make_button();
    }
}

/// A close button bound to a disclosure.
///
/// ```
/// use understory_disclosure::{ClickEvent, CloseButton, Disclosure, DisclosureConfig, Element};
///
/// let disclosure = Disclosure::new(DisclosureConfig::new().default_open(true));
/// let close = CloseButton::new(disclosure.clone());
///
/// let mut rendered = close.render(Element::<u32>::new("button"));
/// assert_eq!(rendered.element.attributes.get("aria-label"), Some("Close"));
///
/// rendered.element.click(&mut ClickEvent::pointer());
/// assert!(!disclosure.is_open());
/// ```
#[derive(Clone, Debug)]
pub struct CloseButton {
    disclosure: Disclosure,
}

impl CloseButton {
    /// Creates a close button bound to `disclosure`.
    #[must_use]
    pub fn new(disclosure: Disclosure) -> Self {
        Self { disclosure }
    }

    /// Decorates `child` for the current state.
    pub fn render<K: Copy>(&self, mut child: Element<K>) -> Rendered<K> {
        CloseProps::new(&self.disclosure.context()).apply(&mut child);
        let controls = self.disclosure.controls();
        child.click_handlers.set_action(move |_| controls.close());
        Rendered::inline(child)
    }
}
