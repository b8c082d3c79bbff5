// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activation and keyboard events, and the handler chains that receive them.
//!
//! Keyboard input arrives as a [`ui_events::keyboard::KeyboardEvent`]. Both
//! event kinds carry a `default_prevented` flag in the manner of DOM events: a
//! handler that prevents default suppresses follow-up behavior such as the
//! synthetic click of an emulated button. Every handler in a chain still runs.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;
use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers, NamedKey};

/// What produced an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationSource {
    /// A pointer click or tap.
    Pointer,
    /// A keyboard activation (Enter or Space on a button).
    Keyboard,
}

/// A click, or an equivalent keyboard activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    /// Where the activation came from.
    pub source: ActivationSource,
    default_prevented: bool,
}

impl ClickEvent {
    /// Creates an activation from `source`.
    #[must_use]
    pub fn new(source: ActivationSource) -> Self {
        Self {
            source,
            default_prevented: false,
        }
    }

    /// A pointer click.
    #[must_use]
    pub fn pointer() -> Self {
        Self::new(ActivationSource::Pointer)
    }

    /// Marks the default action as prevented.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` if a handler prevented the default action.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A key press or release, as delivered to element handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The underlying keyboard event.
    pub keyboard: KeyboardEvent,
    default_prevented: bool,
}

impl KeyEvent {
    /// Wraps a keyboard event.
    #[must_use]
    pub fn new(keyboard: KeyboardEvent) -> Self {
        Self {
            keyboard,
            default_prevented: false,
        }
    }

    /// An unmodified press of `key`.
    #[must_use]
    pub fn down(key: Key) -> Self {
        Self::new(KeyboardEvent {
            state: KeyState::Down,
            key,
            ..KeyboardEvent::default()
        })
    }

    /// An unmodified release of `key`.
    #[must_use]
    pub fn up(key: Key) -> Self {
        Self::new(KeyboardEvent {
            state: KeyState::Up,
            key,
            ..KeyboardEvent::default()
        })
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.keyboard.modifiers = modifiers;
        self
    }

    /// The logical key.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.keyboard.key
    }

    /// Returns `true` if the logical key is the named key `named`.
    #[must_use]
    pub fn is_named(&self, named: NamedKey) -> bool {
        matches!(&self.keyboard.key, Key::Named(key) if *key == named)
    }

    /// Returns `true` for the space bar.
    #[must_use]
    pub fn is_space(&self) -> bool {
        matches!(&self.keyboard.key, Key::Character(c) if c == " ")
    }

    /// Marks the default action as prevented.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` if a handler prevented the default action.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<KeyboardEvent> for KeyEvent {
    fn from(keyboard: KeyboardEvent) -> Self {
        Self::new(keyboard)
    }
}

type Handler<E> = Box<dyn FnMut(&mut E)>;

/// An ordered list of event handlers, all of which run on dispatch.
///
/// Besides the list, a chain has one action slot for the wrapper that
/// decorated the element. The action runs before every listed handler, and
/// setting it again replaces it, so decorating the same element twice still
/// runs the wrapper's behavior once.
pub struct HandlerChain<E> {
    action: Option<Handler<E>>,
    handlers: SmallVec<[Handler<E>; 2]>,
}

impl<E> HandlerChain<E> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            action: None,
            handlers: SmallVec::new(),
        }
    }

    /// Returns `true` if the chain has no action and no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.handlers.is_empty()
    }

    /// Returns the number of handlers, counting the action.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len() + usize::from(self.action.is_some())
    }

    /// Returns `true` if an action is installed.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Installs the action, replacing any previous one.
    pub fn set_action<F>(&mut self, action: F)
    where
        F: FnMut(&mut E) + 'static,
    {
        self.action = Some(Box::new(action));
    }

    /// Removes the action.
    pub fn clear_action(&mut self) {
        self.action = None;
    }

    /// Appends a handler to run after the existing ones.
    pub fn push<F>(&mut self, handler: F)
    where
        F: FnMut(&mut E) + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Inserts a handler to run before the existing ones, after the action.
    pub fn prepend<F>(&mut self, handler: F)
    where
        F: FnMut(&mut E) + 'static,
    {
        self.handlers.insert(0, Box::new(handler));
    }

    /// Runs the action, then every handler in order.
    pub fn call(&mut self, event: &mut E) {
        if let Some(action) = &mut self.action {
            action(event);
        }
        for handler in &mut self.handlers {
            handler(event);
        }
    }
}

impl<E> Default for HandlerChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for HandlerChain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("action", &self.action.is_some())
            .field("len", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn chain_runs_prepended_handlers_first() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::<ClickEvent>::new();
        let (a, b) = (order.clone(), order.clone());
        chain.push(move |_| a.borrow_mut().push("child"));
        chain.prepend(move |_| b.borrow_mut().push("disclosure"));

        chain.call(&mut ClickEvent::pointer());
        assert_eq!(*order.borrow(), vec!["disclosure", "child"]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn prevent_default_is_visible_to_later_handlers() {
        let mut chain = HandlerChain::<KeyEvent>::new();
        let saw = Rc::new(RefCell::new(false));
        let flag = saw.clone();
        chain.push(KeyEvent::prevent_default);
        chain.push(move |e| *flag.borrow_mut() = e.default_prevented());

        let mut event =
            KeyEvent::down(Key::Named(NamedKey::Enter)).with_modifiers(Modifiers::SHIFT);
        chain.call(&mut event);
        assert!(event.default_prevented());
        assert!(*saw.borrow());
        assert!(event.keyboard.modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn action_runs_first_and_is_replaced() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut chain = HandlerChain::<ClickEvent>::new();
        let (a, b, c) = (order.clone(), order.clone(), order.clone());
        chain.push(move |_| a.borrow_mut().push("child"));
        chain.set_action(move |_| b.borrow_mut().push("first action"));
        chain.set_action(move |_| c.borrow_mut().push("second action"));
        assert_eq!(chain.len(), 2);

        chain.call(&mut ClickEvent::pointer());
        assert_eq!(*order.borrow(), vec!["second action", "child"]);

        chain.clear_action();
        assert!(!chain.has_action());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn key_classification() {
        assert!(KeyEvent::down(Key::Named(NamedKey::Escape)).is_named(NamedKey::Escape));
        assert!(!KeyEvent::down(Key::Named(NamedKey::Enter)).is_named(NamedKey::Escape));
        assert!(KeyEvent::up(Key::Character(" ".into())).is_space());
        assert!(!KeyEvent::up(Key::Character("q".into())).is_space());
        assert_eq!(KeyEvent::up(Key::Character(" ".into())).keyboard.state, KeyState::Up);
    }
}
