// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scoped registry of disclosures keyed by id.
//!
//! Most hosts pass the [`Disclosure`] handle straight to the wrappers that need
//! it. When a descendant only knows an id (for example, markup that refers to a
//! disclosure declared elsewhere), a [`DisclosureRegistry`] owned by the
//! enclosing scope provides the lookup.
//!
//! ```
//! use understory_disclosure::{Disclosure, DisclosureConfig, DisclosureRegistry};
//!
//! let mut registry = DisclosureRegistry::new();
//! registry.insert(Disclosure::new(DisclosureConfig::new().id("faq-1"))).unwrap();
//!
//! registry.get("faq-1").unwrap().open();
//! assert!(registry.get("faq-1").unwrap().is_open());
//!
//! let duplicate = registry.insert(Disclosure::new(DisclosureConfig::new().id("faq-1")));
//! assert!(duplicate.is_err());
//! ```

use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::state::{Disclosure, DisclosureId};

/// Error returned when registering a disclosure whose id is already taken.
#[derive(Clone, PartialEq, Eq)]
pub struct DuplicateIdError {
    /// The id already present in the registry.
    pub id: DisclosureId,
}

impl fmt::Debug for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DuplicateIdError {{ id: {:?} }}", self.id.as_str())
    }
}

impl fmt::Display for DuplicateIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a disclosure with id `{}` is already registered", self.id)
    }
}

impl core::error::Error for DuplicateIdError {}

/// Disclosures reachable by id within one scope.
#[derive(Clone, Debug, Default)]
pub struct DisclosureRegistry {
    entries: HashMap<DisclosureId, Disclosure>,
}

impl DisclosureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of registered disclosures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Registers `disclosure` under its id.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateIdError`] if the id is taken; the registry is unchanged.
    pub fn insert(&mut self, disclosure: Disclosure) -> Result<(), DuplicateIdError> {
        match self.entries.entry(disclosure.id().clone()) {
            Entry::Occupied(entry) => Err(DuplicateIdError {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(disclosure);
                Ok(())
            }
        }
    }

    /// Looks up a disclosure by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Disclosure> {
        self.entries.get(id)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Unregisters and returns the disclosure with `id`.
    pub fn remove(&mut self, id: &str) -> Option<Disclosure> {
        self.entries.remove(id)
    }

    /// Iterates over registered disclosures in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Disclosure> + '_ {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DisclosureConfig;
    use alloc::string::ToString;

    #[test]
    fn duplicate_insert_keeps_original() {
        let mut registry = DisclosureRegistry::new();
        let first = Disclosure::new(DisclosureConfig::new().id("a"));
        registry.insert(first.clone()).unwrap();

        let err = registry
            .insert(Disclosure::new(DisclosureConfig::new().id("a").default_open(true)))
            .unwrap_err();
        assert_eq!(err.id.as_str(), "a");
        assert_eq!(err.to_string(), "a disclosure with id `a` is already registered");
        assert!(registry.get("a").unwrap().ptr_eq(&first));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_and_iterate() {
        let mut registry = DisclosureRegistry::new();
        registry.insert(Disclosure::new(DisclosureConfig::new().id("a"))).unwrap();
        registry.insert(Disclosure::new(DisclosureConfig::new().id("b"))).unwrap();
        assert_eq!(registry.iter().count(), 2);

        assert!(registry.remove("a").is_some());
        assert!(!registry.contains("a"));
        assert!(registry.remove("a").is_none());
        assert!(!registry.is_empty());
    }

    #[test]
    fn handles_from_registry_share_state() {
        let mut registry = DisclosureRegistry::new();
        let disclosure = Disclosure::new(DisclosureConfig::new().id("menu"));
        registry.insert(disclosure.clone()).unwrap();
        registry.get("menu").unwrap().toggle();
        assert!(disclosure.is_open());
    }
}
