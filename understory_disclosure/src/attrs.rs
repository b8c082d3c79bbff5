// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute, class, and style containers with explicit merge rules.
//!
//! - [`Attributes`]: insertion-ordered name → value pairs. Setting an existing
//!   name replaces its value in place.
//! - [`ClassList`]: ordered class tokens without duplicates. Merging appends the
//!   tokens that are not already present, so existing classes are never lost.
//! - [`StyleMap`]: style declarations sorted by property name. Merging lays an
//!   overlay on top of a base; the overlay wins on conflicts.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// Insertion-ordered element attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    /// Returns `true` if `name` is set, whatever its value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Sets `name` to `value`, returning the previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Sets `name` only if it is not already present. Returns `true` if set.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.entries.push((name, value.into()));
        true
    }

    /// Removes `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.entries.remove(idx).1)
    }

    /// Builder form of [`Attributes::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}

/// Ordered class tokens without duplicates.
///
/// ```
/// use understory_disclosure::ClassList;
///
/// let mut classes = ClassList::parse("card  shadow");
/// classes.extend(&ClassList::parse("open shadow"));
/// assert_eq!(classes.to_class_name().as_deref(), Some("card shadow open"));
/// assert_eq!(ClassList::new().to_class_name(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Creates an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `class_name` on whitespace into tokens.
    #[must_use]
    pub fn parse(class_name: &str) -> Self {
        let mut list = Self::new();
        for token in class_name.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if `token` is present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Appends `token` unless present or blank. Returns `true` if added.
    pub fn add(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Appends every token of `other` that is not already present.
    pub fn extend(&mut self, other: &Self) {
        for token in &other.tokens {
            self.add(token);
        }
    }

    /// Returns `base` followed by the new tokens of `overlay`.
    #[must_use]
    pub fn merged(base: &Self, overlay: &Self) -> Self {
        let mut out = base.clone();
        out.extend(overlay);
        out
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(String::as_str)
    }

    /// Joins the tokens with single spaces, or `None` when empty.
    #[must_use]
    pub fn to_class_name(&self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.join(" "))
        }
    }
}

impl From<&str> for ClassList {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Style declarations keyed by property name.
///
/// Entries are kept sorted by name for binary search, so iteration order is
/// alphabetical rather than insertion order.
///
/// ```
/// use understory_disclosure::StyleMap;
///
/// let base = StyleMap::new().with("font-size", "2rem").with("display", "flex");
/// let overlay = StyleMap::new().with("display", "block");
/// let merged = StyleMap::merged(&base, &overlay);
/// assert_eq!(merged.get("display"), Some("block"));
/// assert_eq!(merged.get("font-size"), Some("2rem"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty style map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value of `property`, if declared.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.search(property)
            .ok()
            .map(|idx| self.entries[idx].1.as_str())
    }

    /// Returns `true` if `property` is declared.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.search(property).is_ok()
    }

    /// Declares `property: value`, returning the previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let property = property.into();
        let value = value.into();
        match self.search(&property) {
            Ok(idx) => Some(core::mem::replace(&mut self.entries[idx].1, value)),
            Err(idx) => {
                self.entries.insert(idx, (property, value));
                None
            }
        }
    }

    /// Removes `property`, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.search(property)
            .ok()
            .map(|idx| self.entries.remove(idx).1)
    }

    /// Builder form of [`StyleMap::set`].
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Lays every declaration of `overlay` over this map.
    pub fn extend(&mut self, overlay: &Self) {
        for (property, value) in &overlay.entries {
            self.set(property.as_str(), value.as_str());
        }
    }

    /// Returns `base` with `overlay` laid over it.
    #[must_use]
    pub fn merged(base: &Self, overlay: &Self) -> Self {
        let mut out = base.clone();
        out.extend(overlay);
        out
    }

    /// Iterates over `(property, value)` pairs sorted by property.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    fn search(&self, property: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(p, _)| p.as_str().cmp(property))
    }
}

impl fmt::Display for StyleMap {
    /// Formats as inline CSS, e.g. `display: block; visibility: visible`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn attributes_replace_in_place() {
        let mut attrs = Attributes::new().with("id", "a").with("role", "region");
        assert_eq!(attrs.set("id", "b"), Some("a".to_string()));
        let names: Vec<_> = attrs.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["id", "role"]);
        assert_eq!(attrs.get("id"), Some("b"));
    }

    #[test]
    fn attributes_set_default_keeps_existing_value() {
        let mut attrs = Attributes::new().with("aria-label", "");
        assert!(!attrs.set_default("aria-label", "Close"));
        assert_eq!(attrs.get("aria-label"), Some(""));
        assert!(attrs.set_default("title", "x"));
        assert_eq!(attrs.remove("title"), Some("x".to_string()));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn class_list_ignores_blank_and_duplicate_tokens() {
        let mut classes = ClassList::parse("  a b  a ");
        assert_eq!(classes.len(), 2);
        assert!(!classes.add(" "));
        assert!(!classes.add("b"));
        assert!(classes.add("c"));
        assert_eq!(classes.to_string(), "a b c");
    }

    #[test]
    fn class_list_merge_keeps_base_first() {
        let merged = ClassList::merged(&ClassList::parse("custom"), &ClassList::parse("open"));
        assert_eq!(merged.iter().collect::<Vec<_>>(), vec!["custom", "open"]);
        assert!(ClassList::merged(&ClassList::new(), &ClassList::new()).is_empty());
    }

    #[test]
    fn style_map_sorted_and_overlaid() {
        let mut style = StyleMap::new().with("visibility", "hidden").with("display", "none");
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["display", "visibility"]);

        style.extend(&StyleMap::new().with("visibility", "visible"));
        assert_eq!(style.get("visibility"), Some("visible"));
        assert_eq!(style.to_string(), "display: none; visibility: visible");
        assert_eq!(style.remove("display"), Some("none".to_string()));
        assert!(!style.contains("display"));
    }
}
