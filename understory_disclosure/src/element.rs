// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic element descriptors.
//!
//! An [`Element`] describes a caller-owned element: its tag, attributes,
//! classes, inline style, event handlers, and the [`NodeRef`]s that learn the
//! host node once it is mounted. The disclosure wrappers never create elements
//! of their own; they take the caller's element and return it decorated.
//!
//! `K` is the host's node handle type (an index, a generational key, and so on).
//!
//! ## Merge rules
//!
//! When a wrapper decorates an element:
//!
//! - Computed attributes replace same-named attributes on the element, except
//!   where a wrapper documents a default it only fills in (`aria-label` on a
//!   close button).
//! - Classes are merged with [`ClassList::extend`]: the element's own classes
//!   come first, then the wrapper's.
//! - Styles are merged with [`StyleMap::extend`]: the wrapper's declarations
//!   win on conflicts.
//! - Handlers are chained: the wrapper's handler occupies the chain's action
//!   slot and runs first, then the element's own handlers, all on the same
//!   event. Decorating an already decorated element replaces the action.
//! - Refs are accumulated: [`Element::mount`] attaches every ref.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use smallvec::SmallVec;

use crate::attrs::{Attributes, ClassList, StyleMap};
use crate::event::{ActivationSource, ClickEvent, HandlerChain, KeyEvent};
use ui_events::keyboard::NamedKey;
use crate::focus::FocusRequest;
use crate::portal::Placement;

/// A shared slot that holds a host node once its element is mounted.
pub struct NodeRef<K> {
    slot: Rc<Cell<Option<K>>>,
}

impl<K: Copy> NodeRef<K> {
    /// Creates an empty ref.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Rc::new(Cell::new(None)),
        }
    }

    /// Returns the attached node, if mounted.
    #[must_use]
    pub fn get(&self) -> Option<K> {
        self.slot.get()
    }

    /// Returns `true` while a node is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Attaches `node`.
    pub fn attach(&self, node: K) {
        self.slot.set(Some(node));
    }

    /// Detaches the current node.
    pub fn detach(&self) {
        self.slot.set(None);
    }

    /// Returns `true` if both refs share a slot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<K> Clone for NodeRef<K> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<K: Copy> Default for NodeRef<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.slot.take();
        let result = f.debug_tuple("NodeRef").field(&node).finish();
        self.slot.set(node);
        result
    }
}

/// A caller-owned element description.
pub struct Element<K> {
    tag: String,
    /// Attributes other than `class` and `style`.
    pub attributes: Attributes,
    /// Class tokens.
    pub class: ClassList,
    /// Inline style.
    pub style: StyleMap,
    /// Runs on click and on emulated keyboard activation.
    pub click_handlers: HandlerChain<ClickEvent>,
    /// Runs on key press.
    pub key_down_handlers: HandlerChain<KeyEvent>,
    /// Runs on key release.
    pub key_up_handlers: HandlerChain<KeyEvent>,
    refs: SmallVec<[NodeRef<K>; 2]>,
    emulates_button: bool,
}

impl<K: Copy> Element<K> {
    /// Creates a bare element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            class: ClassList::new(),
            style: StyleMap::new(),
            click_handlers: HandlerChain::new(),
            key_down_handlers: HandlerChain::new(),
            key_up_handlers: HandlerChain::new(),
            refs: SmallVec::new(),
            emulates_button: false,
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` for a native `button` element.
    #[must_use]
    pub fn is_native_button(&self) -> bool {
        self.tag.eq_ignore_ascii_case("button")
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Adds whitespace-separated class tokens.
    #[must_use]
    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class.extend(&ClassList::parse(class_name));
        self
    }

    /// Declares an inline style property.
    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    /// Adds a ref that is attached when the element mounts.
    #[must_use]
    pub fn with_ref(mut self, node_ref: NodeRef<K>) -> Self {
        self.add_ref(node_ref);
        self
    }

    /// Appends a click handler.
    #[must_use]
    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut ClickEvent) + 'static,
    {
        self.click_handlers.push(handler);
        self
    }

    /// Appends a key-down handler.
    #[must_use]
    pub fn on_key_down<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut KeyEvent) + 'static,
    {
        self.key_down_handlers.push(handler);
        self
    }

    /// Appends a key-up handler.
    #[must_use]
    pub fn on_key_up<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&mut KeyEvent) + 'static,
    {
        self.key_up_handlers.push(handler);
        self
    }

    /// Adds a ref, skipping one that shares a slot with an existing ref.
    pub fn add_ref(&mut self, node_ref: NodeRef<K>) {
        if !self.refs.iter().any(|r| r.ptr_eq(&node_ref)) {
            self.refs.push(node_ref);
        }
    }

    /// Returns the refs attached on mount.
    #[must_use]
    pub fn refs(&self) -> &[NodeRef<K>] {
        &self.refs
    }

    /// Attaches `node` to every ref.
    pub fn mount(&self, node: K) {
        for node_ref in &self.refs {
            node_ref.attach(node);
        }
    }

    /// Detaches every ref.
    pub fn unmount(&self) {
        for node_ref in &self.refs {
            node_ref.detach();
        }
    }

    /// Returns `true` if the element has been given button semantics.
    #[must_use]
    pub fn emulates_button(&self) -> bool {
        self.emulates_button
    }

    /// Gives the element button semantics: `role="button"`, `tabindex="0"`,
    /// and, for non-`button` tags, keyboard activation.
    pub fn make_button(&mut self) {
        self.attributes.set("role", "button");
        self.attributes.set("tabindex", "0");
        self.emulates_button = true;
    }

    /// Dispatches a click to the click handlers.
    pub fn click(&mut self, event: &mut ClickEvent) {
        self.click_handlers.call(event);
    }

    /// Dispatches a key press.
    ///
    /// On an emulated button, `Enter` then activates the element unless a
    /// handler prevented default.
    pub fn key_down(&mut self, event: &mut KeyEvent) {
        self.key_down_handlers.call(event);
        if event.is_named(NamedKey::Enter) && self.activates_from_keyboard(event) {
            self.click(&mut ClickEvent::new(ActivationSource::Keyboard));
        }
    }

    /// Dispatches a key release.
    ///
    /// On an emulated button, `Space` then activates the element unless a
    /// handler prevented default.
    pub fn key_up(&mut self, event: &mut KeyEvent) {
        self.key_up_handlers.call(event);
        if event.is_space() && self.activates_from_keyboard(event) {
            self.click(&mut ClickEvent::new(ActivationSource::Keyboard));
        }
    }

    /// Native buttons activate themselves; the host delivers those as clicks.
    fn activates_from_keyboard(&self, event: &KeyEvent) -> bool {
        self.emulates_button && !self.is_native_button() && !event.default_prevented()
    }
}

impl<K> fmt::Debug for Element<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("class", &self.class)
            .field("style", &self.style)
            .field("click_handlers", &self.click_handlers)
            .field("key_down_handlers", &self.key_down_handlers)
            .field("key_up_handlers", &self.key_up_handlers)
            .field("refs", &self.refs.len())
            .field("emulates_button", &self.emulates_button)
            .finish()
    }
}

/// The output of rendering a wrapper: the decorated element plus what the
/// host should do with it.
#[derive(Debug)]
pub struct Rendered<K> {
    /// The decorated element.
    pub element: Element<K>,
    /// Where the element should be placed.
    pub placement: Placement<K>,
    /// A focus effect to run once the element is mounted.
    pub focus: Option<FocusRequest<K>>,
}

impl<K> Rendered<K> {
    /// Wraps an inline element with no focus effect.
    #[must_use]
    pub fn inline(element: Element<K>) -> Self {
        Self {
            element,
            placement: Placement::Inline,
            focus: None,
        }
    }
}
