// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portal placement for disclosure targets.
//!
//! A [`Portal`] is the caller's request; a [`Placement`] is the resolved answer
//! handed to the host alongside the rendered element. Resolving a selector to a
//! concrete container is the host's job.
//!
//! ```
//! use understory_disclosure::{Placement, Portal, PortalTarget, DEFAULT_PORTAL_SELECTOR};
//!
//! assert_eq!(Portal::<u32>::from(false).placement(), Placement::Inline);
//! assert_eq!(
//!     Portal::<u32>::from(true).placement(),
//!     Placement::Portal(PortalTarget::Selector(DEFAULT_PORTAL_SELECTOR.into())),
//! );
//! assert_eq!(
//!     Portal::<u32>::from(".portals").placement(),
//!     Placement::Portal(PortalTarget::Selector(".portals".into())),
//! );
//! assert_eq!(Portal::<u32>::from("").placement(), Placement::Inline);
//! assert_eq!(
//!     Portal::container(9_u32).placement(),
//!     Placement::Portal(PortalTarget::Container(9)),
//! );
//! ```

use alloc::string::String;

/// Selector of the container used by [`Portal::Default`].
pub const DEFAULT_PORTAL_SELECTOR: &str = "#portals";

/// Where a target asks to be rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Portal<K> {
    /// In place, inside its logical parent.
    Inline,
    /// Into the container matching [`DEFAULT_PORTAL_SELECTOR`].
    Default,
    /// Into the container matching an id or CSS selector.
    Selector(String),
    /// Into an explicit container node.
    Container(K),
}

impl<K> Portal<K> {
    /// Requests rendering into `container`.
    #[must_use]
    pub fn container(container: K) -> Self {
        Self::Container(container)
    }

    /// Returns `true` for [`Portal::Inline`].
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline)
    }
}

impl<K: Clone> Portal<K> {
    /// Resolves the request into a placement.
    #[must_use]
    pub fn placement(&self) -> Placement<K> {
        match self {
            Self::Inline => Placement::Inline,
            Self::Default => {
                Placement::Portal(PortalTarget::Selector(DEFAULT_PORTAL_SELECTOR.into()))
            }
            Self::Selector(selector) => {
                Placement::Portal(PortalTarget::Selector(selector.clone()))
            }
            Self::Container(container) => {
                Placement::Portal(PortalTarget::Container(container.clone()))
            }
        }
    }
}

impl<K> Default for Portal<K> {
    fn default() -> Self {
        Self::Inline
    }
}

impl<K> From<bool> for Portal<K> {
    fn from(value: bool) -> Self {
        if value { Self::Default } else { Self::Inline }
    }
}

/// A blank selector names no container, so it renders inline.
impl<K> From<&str> for Portal<K> {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Inline
        } else {
            Self::Selector(value.into())
        }
    }
}

impl<K> From<String> for Portal<K> {
    fn from(value: String) -> Self {
        if value.trim().is_empty() {
            Self::Inline
        } else {
            Self::Selector(value)
        }
    }
}

impl<K> From<Option<bool>> for Portal<K> {
    fn from(value: Option<bool>) -> Self {
        value.map(Self::from).unwrap_or_default()
    }
}

/// A resolved portal container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortalTarget<K> {
    /// The container matching an id or CSS selector.
    Selector(String),
    /// An explicit container node.
    Container(K),
}

/// Where the host should put a rendered element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Placement<K> {
    /// In place.
    Inline,
    /// Inside the given portal container.
    Portal(PortalTarget<K>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_selectors_render_inline() {
        assert!(Portal::<u32>::from("").is_inline());
        assert!(Portal::<u32>::from("  ").is_inline());
        assert!(Portal::<u32>::from(String::new()).is_inline());
        assert_eq!(Portal::<u32>::from(None::<bool>).placement(), Placement::Inline);
    }

    #[test]
    fn named_selectors_are_kept_verbatim() {
        assert_eq!(
            Portal::<u32>::from(String::from("#overlay")).placement(),
            Placement::Portal(PortalTarget::Selector("#overlay".into()))
        );
        assert_eq!(
            Portal::<u32>::from(Some(true)).placement(),
            Placement::Portal(PortalTarget::Selector(DEFAULT_PORTAL_SELECTOR.into()))
        );
    }
}
