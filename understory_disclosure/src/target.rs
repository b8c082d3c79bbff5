// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure targets: the content whose visibility the disclosure controls.
//!
//! A target decorates its element with:
//!
//! - `aria-hidden`: `"true"` while closed, `"false"` while open.
//! - `id`: the disclosure id, so controls can point at it with `aria-controls`.
//! - `visibility: hidden|visible`, then the element's own style, then the
//!   open/closed variant style.
//! - The element's classes followed by the open/closed variant class.
//! - An `Escape` key-down handler that closes the disclosure, unless
//!   [`TargetOptions::close_on_escape`] is `false`.
//!
//! After a render that finds the disclosure open when the previous render
//! found it closed (or when there was no previous render), the target asks for
//! focus through [`Rendered::focus`].
//!
//! ```
//! use ui_events::keyboard::{Key, NamedKey};
//! use understory_disclosure::{Disclosure, Element, KeyEvent, Target, TargetOptions};
//!
//! let disclosure = Disclosure::default();
//! let options = TargetOptions::new().open_class("open");
//! let mut target = Target::<u32>::new(disclosure.clone(), options);
//!
//! let rendered = target.render(Element::new("div").with_class("panel"));
//! assert_eq!(rendered.element.attributes.get("aria-hidden"), Some("true"));
//! assert_eq!(rendered.element.style.get("visibility"), Some("hidden"));
//!
//! disclosure.open();
//! let mut rendered = target.render(Element::new("div").with_class("panel"));
//! assert_eq!(rendered.element.class.to_class_name().as_deref(), Some("panel open"));
//! assert!(rendered.focus.is_some());
//!
//! rendered.element.key_down(&mut KeyEvent::down(Key::Named(NamedKey::Escape)));
//! assert!(!disclosure.is_open());
//! ```

use crate::attrs::{ClassList, StyleMap};
use crate::element::{Element, NodeRef, Rendered};
use crate::focus::{FocusOptions, FocusRequest};
use crate::portal::Portal;
use crate::state::{Disclosure, DisclosureContext, DisclosureId};
use ui_events::keyboard::NamedKey;

/// Options for a disclosure target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetOptions {
    /// Close when `Escape` is pressed inside the target. Defaults to `true`.
    pub close_on_escape: bool,
    /// Classes added while open.
    pub open_class: ClassList,
    /// Classes added while closed.
    pub closed_class: ClassList,
    /// Style laid over the element's own style while open.
    pub open_style: StyleMap,
    /// Style laid over the element's own style while closed.
    pub closed_style: StyleMap,
    /// Ask the host not to scroll when focusing the opened target.
    pub prevent_scroll: bool,
}

impl Default for TargetOptions {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            open_class: ClassList::new(),
            closed_class: ClassList::new(),
            open_style: StyleMap::new(),
            closed_style: StyleMap::new(),
            prevent_scroll: false,
        }
    }
}

impl TargetOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`TargetOptions::close_on_escape`].
    #[must_use]
    pub fn close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
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

    /// Sets [`TargetOptions::prevent_scroll`].
    #[must_use]
    pub fn prevent_scroll(mut self, prevent_scroll: bool) -> Self {
        self.prevent_scroll = prevent_scroll;
        self
    }

    /// Computes target props for an element with no class or style of its own.
    #[must_use]
    pub fn props(&self, context: &DisclosureContext) -> TargetProps {
        self.props_over(context, &ClassList::new(), &StyleMap::new())
    }

    /// Computes target props merged over an element's own class and style.
    #[must_use]
    pub fn props_over(
        &self,
        context: &DisclosureContext,
        class: &ClassList,
        style: &StyleMap,
    ) -> TargetProps {
        let is_open = context.is_open();
        let (variant_class, variant_style) = if is_open {
            (&self.open_class, &self.open_style)
        } else {
            (&self.closed_class, &self.closed_style)
        };

        let mut merged_style =
            StyleMap::new().with("visibility", if is_open { "visible" } else { "hidden" });
        merged_style.extend(style);
        merged_style.extend(variant_style);

        TargetProps {
            aria_hidden: !is_open,
            id: context.id().clone(),
            class: ClassList::merged(class, variant_class),
            style: merged_style,
        }
    }
}

/// Attributes computed for a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetProps {
    /// Always the negation of the open state.
    pub aria_hidden: bool,
    /// The disclosure id.
    pub id: DisclosureId,
    /// Merged classes.
    pub class: ClassList,
    /// Merged style, including `visibility`.
    pub style: StyleMap,
}

impl TargetProps {
    /// Writes the props onto `element`, replacing its class and style.
    pub fn apply<K: Copy>(self, element: &mut Element<K>) {
        element
            .attributes
            .set("aria-hidden", if self.aria_hidden { "true" } else { "false" });
        element.attributes.set("id", self.id.as_str());
        element.class = self.class;
        element.style = self.style;
    }
}

/// A disclosure target instance.
///
/// Keep one `Target` per mounted target and call [`Target::render`] each time
/// the host re-renders it; the instance remembers the previous open state to
/// decide when to request focus.
#[derive(Debug)]
pub struct Target<K> {
    disclosure: Disclosure,
    options: TargetOptions,
    portal: Portal<K>,
    node_ref: NodeRef<K>,
    was_open: Option<bool>,
}

impl<K: Copy> Target<K> {
    /// Creates a target bound to `disclosure`.
    #[must_use]
    pub fn new(disclosure: Disclosure, options: TargetOptions) -> Self {
        Self {
            disclosure,
            options,
            portal: Portal::Inline,
            node_ref: NodeRef::new(),
            was_open: None,
        }
    }

    /// Renders through `portal` instead of inline.
    #[must_use]
    pub fn with_portal(mut self, portal: impl Into<Portal<K>>) -> Self {
        self.portal = portal.into();
        self
    }

    /// The target's options.
    #[must_use]
    pub fn options(&self) -> &TargetOptions {
        &self.options
    }

    /// Replaces the options for subsequent renders.
    pub fn set_options(&mut self, options: TargetOptions) {
        self.options = options;
    }

    /// The ref attached to the target's host node once mounted.
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

        if self.options.close_on_escape {
            let controls = self.disclosure.controls();
            child.key_down_handlers.set_action(move |event| {
                if event.is_named(NamedKey::Escape) {
                    controls.close();
                }
            });
        } else {
            child.key_down_handlers.clear_action();
        }
        child.add_ref(self.node_ref.clone());

        let opened = is_open && !self.was_open.unwrap_or(false);
        self.was_open = Some(is_open);
        let focus = opened.then(|| {
            FocusRequest::new(
                self.node_ref.clone(),
                FocusOptions {
                    include_root: true,
                    prevent_scroll: self.options.prevent_scroll,
                },
            )
        });

        Rendered {
            element: child,
            placement: self.portal.placement(),
            focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEvent;
    use crate::portal::{Placement, PortalTarget};
    use ui_events::keyboard::Key;
    use crate::state::DisclosureConfig;

    #[test]
    fn props_follow_open_state() {
        let options = TargetOptions::new()
            .open_class("open")
            .closed_class("closed")
            .closed_style(StyleMap::new().with("display", "none"));

        let closed = options.props(&DisclosureContext::new("t", false));
        assert!(closed.aria_hidden);
        assert_eq!(closed.class.to_class_name().as_deref(), Some("closed"));
        assert_eq!(closed.style.get("visibility"), Some("hidden"));
        assert_eq!(closed.style.get("display"), Some("none"));

        let open = options.props(&DisclosureContext::new("t", true));
        assert!(!open.aria_hidden);
        assert_eq!(open.id.as_str(), "t");
        assert_eq!(open.class.to_class_name().as_deref(), Some("open"));
        assert_eq!(open.style.get("visibility"), Some("visible"));
        assert!(!open.style.contains("display"));
    }

    #[test]
    fn child_style_overrides_visibility_and_variant_overrides_child() {
        let options = TargetOptions::new().open_style(StyleMap::new().with("color", "red"));
        let child_style = StyleMap::new()
            .with("visibility", "collapse")
            .with("color", "blue");
        let props = options.props_over(
            &DisclosureContext::new("t", true),
            &ClassList::new(),
            &child_style,
        );
        assert_eq!(props.style.get("visibility"), Some("collapse"));
        assert_eq!(props.style.get("color"), Some("red"));
    }

    #[test]
    fn child_id_is_replaced() {
        let disclosure = Disclosure::new(DisclosureConfig::new().id("foobar"));
        let mut target = Target::<u32>::new(disclosure, TargetOptions::new());
        let rendered = target.render(Element::new("div").with_attribute("id", "mine"));
        assert_eq!(rendered.element.attributes.get("id"), Some("foobar"));
    }

    #[test]
    fn focus_requested_only_on_closed_to_open() {
        let disclosure = Disclosure::default();
        let mut target = Target::<u32>::new(disclosure.clone(), TargetOptions::new());
        assert!(target.render(Element::new("div")).focus.is_none());

        disclosure.open();
        let rendered = target.render(Element::new("div"));
        let request = rendered.focus.expect("opening should request focus");
        assert!(request.options().include_root);
        assert!(!request.options().prevent_scroll);

        assert!(target.render(Element::new("div")).focus.is_none());
        disclosure.close();
        assert!(target.render(Element::new("div")).focus.is_none());
    }

    #[test]
    fn initially_open_target_requests_focus_on_first_render() {
        let disclosure = Disclosure::new(DisclosureConfig::new().default_open(true));
        let mut target = Target::<u32>::new(disclosure, TargetOptions::new().prevent_scroll(true));
        let rendered = target.render(Element::new("div"));
        let request = rendered.focus.expect("first open render should request focus");
        assert!(request.options().prevent_scroll);
    }

    #[test]
    fn escape_disabled_keeps_open() {
        let disclosure = Disclosure::new(DisclosureConfig::new().default_open(true));
        let mut target =
            Target::<u32>::new(disclosure.clone(), TargetOptions::new().close_on_escape(false));
        let mut rendered = target.render(Element::new("div"));
        rendered.element.key_down(&mut KeyEvent::down(Key::Named(NamedKey::Escape)));
        assert!(disclosure.is_open());
        assert!(rendered.element.key_down_handlers.is_empty());
    }

    #[test]
    fn other_keys_do_not_close() {
        let disclosure = Disclosure::new(DisclosureConfig::new().default_open(true));
        let mut target = Target::<u32>::new(disclosure.clone(), TargetOptions::new());
        let mut rendered = target.render(Element::new("div"));
        rendered.element.key_down(&mut KeyEvent::down(Key::Named(NamedKey::Enter)));
        rendered.element.key_down(&mut KeyEvent::down(Key::Character("q".into())));
        assert!(disclosure.is_open());
    }

    #[test]
    fn portal_placement_is_forwarded() {
        let mut target =
            Target::<u32>::new(Disclosure::default(), TargetOptions::new()).with_portal(true);
        let rendered = target.render(Element::new("div"));
        assert_eq!(
            rendered.placement,
            Placement::Portal(PortalTarget::Selector("#portals".into()))
        );

        let mut inline = Target::<u32>::new(Disclosure::default(), TargetOptions::new());
        assert_eq!(inline.render(Element::new("div")).placement, Placement::Inline);
    }

    #[test]
    fn wrapper_ref_joins_child_ref() {
        let mut target = Target::<u32>::new(Disclosure::default(), TargetOptions::new());
        let own = NodeRef::new();
        let rendered = target.render(Element::new("div").with_ref(own.clone()));
        rendered.element.mount(3);
        assert_eq!(own.get(), Some(3));
        assert_eq!(target.node_ref().get(), Some(3));
    }

    #[test]
    fn rendering_a_rendered_element_closes_once() {
        let disclosure = Disclosure::new(DisclosureConfig::new().default_open(true));
        let mut target = Target::<u32>::new(disclosure.clone(), TargetOptions::new());
        let first = target.render(Element::new("div"));
        let mut second = target.render(first.element);
        assert_eq!(second.element.key_down_handlers.len(), 1);
        assert_eq!(second.element.refs().len(), 1);

        second
            .element
            .key_down(&mut KeyEvent::down(Key::Named(NamedKey::Escape)));
        assert!(!disclosure.is_open());
    }

    #[test]
    fn disabling_escape_removes_a_previous_escape_action() {
        let disclosure = Disclosure::new(DisclosureConfig::new().default_open(true));
        let mut target = Target::<u32>::new(disclosure.clone(), TargetOptions::new());
        let first = target.render(Element::new("div"));
        target.set_options(TargetOptions::new().close_on_escape(false));
        let mut second = target.render(first.element);

        second
            .element
            .key_down(&mut KeyEvent::down(Key::Named(NamedKey::Escape)));
        assert!(disclosure.is_open());
    }
}
