// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_disclosure --heading-base-level=0

//! Understory Disclosure: headless show/hide primitives.
//!
//! A disclosure is the UI pattern where a control toggles the visibility of
//! some associated content (FAQ answers, collapsible panels, drop-down menus).
//! This crate supplies the behavior and accessibility wiring for that pattern
//! without dictating markup or styling:
//!
//! - [`Disclosure`]: the state container. An open/closed switch plus a stable
//!   id, with optional controlled mode and a change callback.
//! - [`Target`]: decorates the content element with `aria-hidden`, `id`,
//!   `visibility`, open/closed classes and styles, closes on `Escape`, requests
//!   focus when opened, and optionally renders through a [`Portal`].
//! - [`Trigger`]: decorates the toggle control with `aria-controls`,
//!   `aria-expanded`, open/closed classes and styles, and button semantics;
//!   requests focus back when the disclosure closes.
//! - [`CloseButton`]: decorates an explicit close control.
//!
//! The wrappers never create elements. They take a caller-provided
//! [`Element`] descriptor and return it decorated, merging classes, styles,
//! handlers and refs according to the rules documented in the `element` module.
//! The host owns the real nodes: it mounts elements (attaching their
//! [`NodeRef`]s), dispatches clicks and keys into them, resolves
//! [`Placement`]s, and runs [`FocusRequest`]s through a [`FocusHost`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_disclosure::{
//!     ClickEvent, Disclosure, DisclosureConfig, Element, Target, TargetOptions, Trigger,
//!     TriggerOptions,
//! };
//!
//! let disclosure = Disclosure::new(DisclosureConfig::new().id("answer"));
//! let mut target = Target::<u32>::new(disclosure.clone(), TargetOptions::new());
//! let mut trigger = Trigger::<u32>::new(disclosure.clone(), TriggerOptions::new());
//!
//! let content = target.render(Element::new("div"));
//! let mut button = trigger.render(Element::new("button"));
//! assert_eq!(content.element.attributes.get("aria-hidden"), Some("true"));
//! assert_eq!(button.element.attributes.get("aria-controls"), Some("answer"));
//!
//! // The host routes a click into the decorated trigger, then re-renders.
//! button.element.click(&mut ClickEvent::pointer());
//! let content = target.render(Element::new("div"));
//! assert_eq!(content.element.attributes.get("aria-hidden"), Some("false"));
//!
//! button.element.click(&mut ClickEvent::pointer());
//! let content = target.render(Element::new("div"));
//! assert_eq!(content.element.attributes.get("aria-hidden"), Some("true"));
//! ```
//!
//! ## Sharing state
//!
//! [`Disclosure`] is a cheap `Rc` handle; clone it into every wrapper that
//! belongs to the same disclosure. Hosts that can only pass ids down the tree
//! can keep a [`DisclosureRegistry`] for the enclosing scope instead.
//!
//! This crate is `no_std` and uses `alloc`. It is single-threaded: handles are
//! neither `Send` nor `Sync`.

#![no_std]

extern crate alloc;

mod attrs;
mod close;
mod element;
mod event;
mod focus;
mod portal;
mod registry;
mod state;
mod target;
mod trigger;

pub use attrs::{Attributes, ClassList, StyleMap};
pub use close::{CloseButton, CloseProps, DEFAULT_CLOSE_LABEL};
pub use element::{Element, NodeRef, Rendered};
pub use event::{ActivationSource, ClickEvent, HandlerChain, KeyEvent};
pub use focus::{FocusHost, FocusOptions, FocusRequest};
pub use portal::{DEFAULT_PORTAL_SELECTOR, Placement, Portal, PortalTarget};
pub use registry::{DisclosureRegistry, DuplicateIdError};
pub use state::{
    Disclosure, DisclosureConfig, DisclosureContext, DisclosureControls, DisclosureId,
};
pub use target::{Target, TargetOptions, TargetProps};
pub use trigger::{Trigger, TriggerOptions, TriggerProps};
