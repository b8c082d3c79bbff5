// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure state container: an open/closed switch plus a stable id.
//!
//! A [`Disclosure`] is a cheap, clonable handle. Every clone refers to the same
//! container, so the handle is what gets passed to [`Target`](crate::Target),
//! [`Trigger`](crate::Trigger) and [`CloseButton`](crate::CloseButton), and
//! what their event handlers capture.
//!
//! ## Controlled and uncontrolled
//!
//! The container always keeps an internal switch, seeded from
//! [`DisclosureConfig::default_open`]. When a controlled value is present
//! (see [`DisclosureConfig::open`] and [`Disclosure::set_controlled`]), the
//! visible state is that value and the internal switch is ignored for
//! presentation. Transitions still update the internal switch, so dropping
//! the controlled value reveals whatever the internal switch says.
//!
//! ## Change notification
//!
//! The change callback observes the visible state. It runs once per change of
//! the visible value, after the mutation completes, and never at construction.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_disclosure::{Disclosure, DisclosureConfig};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let disclosure = Disclosure::new(DisclosureConfig::new().open(true));
//! let log = seen.clone();
//! disclosure.on_change(move |open| log.borrow_mut().push(open));
//!
//! // Controlled: internal toggles do not change what is shown.
//! disclosure.toggle();
//! assert!(disclosure.is_open());
//!
//! // A new controlled value does.
//! disclosure.set_controlled(Some(false));
//! assert!(!disclosure.is_open());
//! assert_eq!(*seen.borrow(), vec![false]);
//! ```

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::borrow::Borrow;
use core::cell::Cell;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Identifier linking a disclosure's target (`id`) to its controls (`aria-controls`).
///
/// Cloning is cheap; the string is shared.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisclosureId(Rc<str>);

impl DisclosureId {
    /// Creates a fresh id of the form `disclosure-<n>`.
    ///
    /// Ids are unique within the process.
    #[must_use]
    pub fn generate() -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self(Rc::from(format!("disclosure-{n}")))
    }

    /// Returns the id as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DisclosureId {
    fn from(value: &str) -> Self {
        Self(Rc::from(value))
    }
}

impl From<String> for DisclosureId {
    fn from(value: String) -> Self {
        Self(Rc::from(value))
    }
}

impl Borrow<str> for DisclosureId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisclosureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DisclosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DisclosureId").field(&&*self.0).finish()
    }
}

impl fmt::Display for DisclosureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Construction options for a [`Disclosure`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureConfig {
    /// Caller-supplied id. When `None`, one is generated.
    pub id: Option<DisclosureId>,
    /// Controlled open state. When `Some`, this is the visible state.
    pub open: Option<bool>,
    /// Initial value of the internal switch. Defaults to closed.
    pub default_open: bool,
}

impl DisclosureConfig {
    /// Creates the default configuration: generated id, uncontrolled, closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `id` instead of a generated one.
    #[must_use]
    pub fn id(mut self, id: impl Into<DisclosureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Makes the disclosure controlled with the given visible state.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Sets the initial value of the internal switch.
    #[must_use]
    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }
}

type ChangeCallback = Box<dyn FnMut(bool)>;

struct Shared {
    id: DisclosureId,
    internal: Cell<bool>,
    controlled: Cell<Option<bool>>,
    /// Last visible value reported to observers.
    notified: Cell<bool>,
    notifying: Cell<bool>,
    revision: Cell<u64>,
    on_change: Cell<Option<ChangeCallback>>,
    /// Bumped whenever the callback is installed or cleared.
    callback_generation: Cell<u64>,
}

impl Shared {
    fn visible(&self) -> bool {
        self.controlled.get().unwrap_or(self.internal.get())
    }

    fn notify(&self) {
        // A notification already in progress picks this change up when the
        // callback returns.
        if self.notifying.replace(true) {
            return;
        }
        let _notifying = ResetOnDrop(&self.notifying);
        loop {
            let visible = self.visible();
            if visible == self.notified.get() {
                break;
            }
            self.notified.set(visible);
            self.revision.set(self.revision.get().wrapping_add(1));
            if let Some(callback) = self.on_change.take() {
                let mut running = RunningCallback {
                    shared: self,
                    generation: self.callback_generation.get(),
                    callback: Some(callback),
                };
                running.call(visible);
            }
        }
    }

    fn replace_callback(&self, callback: Option<ChangeCallback>) {
        self.callback_generation
            .set(self.callback_generation.get().wrapping_add(1));
        drop(self.on_change.replace(callback));
    }
}

/// Clears a flag when dropped, including while unwinding.
struct ResetOnDrop<'a>(&'a Cell<bool>);

impl Drop for ResetOnDrop<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A change callback taken out of its slot for the duration of a call.
///
/// Dropping it puts the callback back, unless the slot was replaced or
/// cleared while the callback ran.
struct RunningCallback<'a> {
    shared: &'a Shared,
    generation: u64,
    callback: Option<ChangeCallback>,
}

impl RunningCallback<'_> {
    fn call(&mut self, open: bool) {
        if let Some(callback) = &mut self.callback {
            callback(open);
        }
    }
}

impl Drop for RunningCallback<'_> {
    fn drop(&mut self) {
        if self.shared.callback_generation.get() == self.generation {
            self.shared.on_change.set(self.callback.take());
        }
    }
}

/// Shared handle to one disclosure's open/closed state.
///
/// Single-threaded: all transitions run synchronously on the caller's thread,
/// one after another.
#[derive(Clone)]
pub struct Disclosure {
    shared: Rc<Shared>,
}

impl Disclosure {
    /// Creates a disclosure from `config`.
    #[must_use]
    pub fn new(config: DisclosureConfig) -> Self {
        let id = config.id.unwrap_or_else(DisclosureId::generate);
        let visible = config.open.unwrap_or(config.default_open);
        Self {
            shared: Rc::new(Shared {
                id,
                internal: Cell::new(config.default_open),
                controlled: Cell::new(config.open),
                notified: Cell::new(visible),
                notifying: Cell::new(false),
                revision: Cell::new(0),
                on_change: Cell::new(None),
                callback_generation: Cell::new(0),
            }),
        }
    }

    /// Returns the disclosure's id.
    #[must_use]
    #[inline]
    pub fn id(&self) -> &DisclosureId {
        &self.shared.id
    }

    /// Returns the visible open state.
    #[must_use]
    #[inline]
    pub fn is_open(&self) -> bool {
        self.shared.visible()
    }

    /// Returns `true` while a controlled value overrides the internal switch.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.shared.controlled.get().is_some()
    }

    /// Returns a snapshot of the id and visible state.
    #[must_use]
    pub fn context(&self) -> DisclosureContext {
        DisclosureContext {
            id: self.shared.id.clone(),
            is_open: self.is_open(),
        }
    }

    /// Returns a handle exposing only the three transitions.
    #[must_use]
    pub fn controls(&self) -> DisclosureControls {
        DisclosureControls {
            disclosure: self.clone(),
        }
    }

    /// Sets the internal switch to open.
    pub fn open(&self) {
        self.set_internal(true);
    }

    /// Sets the internal switch to closed.
    pub fn close(&self) {
        self.set_internal(false);
    }

    /// Flips the internal switch.
    pub fn toggle(&self) {
        self.set_internal(!self.shared.internal.get());
    }

    /// Replaces the controlled value.
    ///
    /// `Some(open)` makes `open` the visible state; `None` hands presentation
    /// back to the internal switch.
    pub fn set_controlled(&self, open: Option<bool>) {
        self.shared.controlled.set(open);
        self.shared.notify();
    }

    /// Installs `callback` as the change callback, replacing any previous one.
    ///
    /// The callback receives the new visible state.
    pub fn on_change<F>(&self, callback: F)
    where
        F: FnMut(bool) + 'static,
    {
        self.shared.replace_callback(Some(Box::new(callback)));
    }

    /// Removes the change callback.
    ///
    /// Called from inside the callback, the removal takes effect once the
    /// callback returns.
    pub fn clear_on_change(&self) {
        self.shared.replace_callback(None);
    }

    /// Returns a counter bumped once per change of the visible state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }

    /// Returns `true` if both handles refer to the same container.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    fn set_internal(&self, open: bool) {
        self.shared.internal.set(open);
        self.shared.notify();
    }
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::new(DisclosureConfig::default())
    }
}

impl fmt::Debug for Disclosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disclosure")
            .field("id", &self.shared.id)
            .field("is_open", &self.is_open())
            .field("controlled", &self.shared.controlled.get())
            .field("revision", &self.revision())
            .finish_non_exhaustive()
    }
}

/// A snapshot of a disclosure: its id and visible state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureContext {
    id: DisclosureId,
    is_open: bool,
}

impl DisclosureContext {
    /// Creates a snapshot directly, for computing props without a container.
    #[must_use]
    pub fn new(id: impl Into<DisclosureId>, is_open: bool) -> Self {
        Self {
            id: id.into(),
            is_open,
        }
    }

    /// The disclosure's id.
    #[must_use]
    pub fn id(&self) -> &DisclosureId {
        &self.id
    }

    /// The visible open state at snapshot time.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// The open/close/toggle transitions of one disclosure.
#[derive(Clone, Debug)]
pub struct DisclosureControls {
    disclosure: Disclosure,
}

impl DisclosureControls {
    /// Opens the disclosure.
    pub fn open(&self) {
        self.disclosure.open();
    }

    /// Closes the disclosure.
    pub fn close(&self) {
        self.disclosure.close();
    }

    /// Toggles the disclosure.
    pub fn toggle(&self) {
        self.disclosure.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn recorder(disclosure: &Disclosure) -> Rc<RefCell<Vec<bool>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        disclosure.on_change(move |open| log.borrow_mut().push(open));
        seen
    }

    #[test]
    fn starts_closed_by_default() {
        let d = Disclosure::default();
        assert!(!d.is_open());
        assert!(!d.is_controlled());
        assert_eq!(d.revision(), 0);
    }

    #[test]
    fn default_open_seeds_the_switch() {
        let d = Disclosure::new(DisclosureConfig::new().default_open(true));
        assert!(d.is_open());
        d.toggle();
        assert!(!d.is_open());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = Disclosure::default();
        let b = Disclosure::default();
        assert_ne!(a.id(), b.id());
        assert!(a.id().as_str().starts_with("disclosure-"));
    }

    #[test]
    fn custom_id_is_kept() {
        let d = Disclosure::new(DisclosureConfig::new().id("foobar"));
        assert_eq!(d.id().as_str(), "foobar");
        assert_eq!(d.context().id().as_str(), "foobar");
    }

    #[test]
    fn transitions_are_named_and_idempotent() {
        let d = Disclosure::default();
        d.open();
        d.open();
        assert!(d.is_open());
        d.close();
        d.close();
        assert!(!d.is_open());
    }

    #[test]
    fn toggling_pairs_restores_state() {
        let d = Disclosure::default();
        for _ in 0..4 {
            d.toggle();
        }
        assert!(!d.is_open());
    }

    #[test]
    fn on_change_fires_once_per_visible_transition() {
        let d = Disclosure::default();
        let seen = recorder(&d);
        d.toggle();
        d.open();
        d.toggle();
        d.close();
        assert_eq!(*RefCell::borrow(&seen), vec![true, false]);
        assert_eq!(d.revision(), 2);
    }

    #[test]
    fn on_change_never_fires_on_construction() {
        let d = Disclosure::new(DisclosureConfig::new().default_open(true));
        let seen = recorder(&d);
        assert!(RefCell::borrow(&seen).is_empty());
    }

    #[test]
    fn controlled_value_overrides_internal_switch() {
        let d = Disclosure::new(DisclosureConfig::new().open(true));
        let seen = recorder(&d);
        d.toggle();
        d.close();
        assert!(d.is_open());
        assert!(RefCell::borrow(&seen).is_empty());

        d.set_controlled(Some(false));
        assert!(!d.is_open());
        assert_eq!(*RefCell::borrow(&seen), vec![false]);
    }

    #[test]
    fn releasing_control_shows_internal_switch() {
        let d = Disclosure::new(DisclosureConfig::new().open(false));
        d.open();
        assert!(!d.is_open());
        d.set_controlled(None);
        assert!(d.is_open());
        assert!(!d.is_controlled());
    }

    #[test]
    fn releasing_control_reports_only_a_visible_change() {
        let differs = Disclosure::new(DisclosureConfig::new().open(false));
        let seen = recorder(&differs);
        differs.open();
        assert!(RefCell::borrow(&seen).is_empty());
        differs.set_controlled(None);
        assert_eq!(*RefCell::borrow(&seen), vec![true]);

        let matches = Disclosure::new(DisclosureConfig::new().open(true));
        let seen = recorder(&matches);
        matches.open();
        matches.set_controlled(None);
        assert!(matches.is_open());
        assert!(RefCell::borrow(&seen).is_empty());
        assert_eq!(matches.revision(), 0);
    }

    #[test]
    fn reentrant_transition_is_reported_after_callback() {
        let d = Disclosure::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let handle = d.clone();
        d.on_change(move |open| {
            log.borrow_mut().push(open);
            if open {
                handle.close();
            }
        });
        d.open();
        assert!(!d.is_open());
        assert_eq!(*RefCell::borrow(&seen), vec![true, false]);
    }

    #[test]
    fn callback_replaced_from_inside_callback_is_kept() {
        let d = Disclosure::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let handle = d.clone();
        d.on_change(move |_| {
            let log = log.clone();
            handle.on_change(move |open| log.borrow_mut().push(open));
        });
        d.open();
        assert!(RefCell::borrow(&seen).is_empty());
        d.close();
        assert_eq!(*RefCell::borrow(&seen), vec![false]);
    }

    #[test]
    fn callback_cleared_from_inside_callback_stays_cleared() {
        let d = Disclosure::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let handle = d.clone();
        d.on_change(move |open| {
            log.borrow_mut().push(open);
            handle.clear_on_change();
        });
        d.open();
        d.close();
        assert_eq!(*RefCell::borrow(&seen), vec![true]);
        assert_eq!(d.revision(), 2);
    }

    #[test]
    fn controls_share_the_container() {
        let d = Disclosure::default();
        let controls = d.controls();
        controls.open();
        assert!(d.is_open());
        controls.toggle();
        assert!(!d.is_open());
        assert!(d.ptr_eq(&d.clone()));
        assert!(!d.ptr_eq(&Disclosure::default()));
    }
}
