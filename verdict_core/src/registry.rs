//! Name -> node registry for a single variant.

use crate::error::NetworkError;
use crate::node::Node;
use crate::variant::Variant;

use std::collections::{BTreeSet, HashMap};

/// Owned registry of the nodes of one variant.
///
/// Entries are added on construction and only removed all at once.
#[derive(Debug, Clone)]
pub struct Registry<V: Variant> {
    nodes: HashMap<String, Node<V>>,
}

impl<V: Variant> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> Registry<V> {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Registers a node, returning the node it replaced, if any.
    pub fn insert(&mut self, node: Node<V>) -> Option<Node<V>> {
        self.nodes.insert(node.name().to_string(), node)
    }

    pub fn get(&self, name: &str) -> Option<&Node<V>> {
        self.nodes.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Node<V>> {
        self.nodes.get_mut(name)
    }

    /// Looks up a node, failing with `UnknownNode` on a miss.
    pub fn resolve(&self, name: &str) -> Result<&Node<V>, NetworkError> {
        self.get(name).ok_or_else(|| NetworkError::unknown(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<V>> {
        self.nodes.values()
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns `name` plus every node whose predictions depend on it,
    /// directly or through other correlates.
    ///
    /// Walks the correlation graph backwards; cycles terminate because each
    /// node is visited once.
    pub fn dependents_of(&self, name: &str) -> BTreeSet<String> {
        let mut affected = BTreeSet::new();
        let mut frontier = vec![name.to_string()];

        while let Some(current) = frontier.pop() {
            if !affected.insert(current.clone()) {
                continue;
            }
            frontier.extend(
                self.iter()
                    .filter(|node| node.depends_on(&current))
                    .map(|node| node.name().to_string()),
            );
        }

        affected
    }
}
