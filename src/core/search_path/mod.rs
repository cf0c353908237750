// envdump: Startup Environment Reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Search-path chains.
//!
//! ```text
//! leaf                                              root
//! config-search-path -> executable-search-path -> ... -> system-linker
//!   [cwd, exe dir]        [PATH entries]                  (no entries)
//! ```
//!
//! Nodes are owned by the host. [`SearchPathChain`] walks borrowed nodes from
//! the leaf to the root and never takes ownership.

/// Longest chain accepted before the ancestry is assumed to be cyclic.
pub const MAX_SEARCH_PATH_DEPTH: usize = 256;

/// One scope in a chain of code or resource lookup locations.
pub trait SearchPathNode {
    /// Name of the concrete node kind.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Ordered lookup locations, or `None` if this kind cannot list them.
    fn entries(&self) -> Option<&[String]>;

    /// The next, less specific scope.
    fn parent(&self) -> Option<&dyn SearchPathNode>;
}

/// Iterator from a leaf node to the root of its chain.
#[derive(Clone, Copy)]
pub struct SearchPathChain<'a> {
    next: Option<&'a dyn SearchPathNode>,
}

impl<'a> SearchPathChain<'a> {
    #[must_use]
    pub fn new(leaf: Option<&'a dyn SearchPathNode>) -> Self {
        Self { next: leaf }
    }
}

impl<'a> Iterator for SearchPathChain<'a> {
    type Item = &'a dyn SearchPathNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}

impl std::fmt::Debug for SearchPathChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPathChain")
            .field("next", &self.next.map(SearchPathNode::type_name))
            .finish()
    }
}

/// Plain-data search-path node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchScope {
    name: String,
    entries: Option<Vec<String>>,
    parent: Option<Box<SearchScope>>,
}

impl SearchScope {
    /// Creates a scope that lists its entries.
    pub fn new<I, S>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            entries: Some(entries.into_iter().map(Into::into).collect()),
            parent: None,
        }
    }

    /// Creates a scope whose entries cannot be listed.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: None,
            parent: None,
        }
    }

    /// Sets the next, less specific scope.
    #[must_use]
    pub fn with_parent(mut self, parent: Self) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Walks this scope and its ancestors.
    #[must_use]
    pub fn chain(&self) -> SearchPathChain<'_> {
        SearchPathChain::new(Some(self))
    }
}

impl SearchPathNode for SearchScope {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> Option<&[String]> {
        self.entries.as_deref()
    }

    fn parent(&self) -> Option<&dyn SearchPathNode> {
        self.parent.as_deref().map(|p| p as &dyn SearchPathNode)
    }
}
