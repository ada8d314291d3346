//! Hash maps over the bucket trie.
use std::{fmt, hash::Hash};

use crate::node::{Keyed, Tree};


/// A map keyed by the crate's fixed hash function.
pub struct HashMap<K, V> {
    len: usize,
    tree: Tree<Pair<K, V>>,
}

impl<K, V> Default for HashMap<K, V> {
    fn default() -> Self {
        HashMap {
            len: 0,
            tree: Tree::default(),
        }
    }
}

impl<K: Hash + Eq + Ord, V> HashMap<K, V> {
    /// The number of mappings currently in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether or not the map is empty.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.tree.is_empty(), self.len == 0);
        self.len == 0
    }

    /// Inserts the mapping `key -> value` if `key` is not yet present, and
    /// returns whether it was inserted. An existing mapping for `key` is
    /// kept unchanged, unlike `std::collections::HashMap`.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let inserted = self.tree.insert(Pair(key, value));
        self.len += inserted as usize;
        inserted
    }

    /// Removes the mapping for `key`. Returns whether one was present.
    pub fn erase(&mut self, key: &K) -> bool {
        let removed = self.tree.erase(key);
        self.len -= removed as usize;
        removed
    }

    /// The value mapped to `key`, if one is stored.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree.find(key).map(|pair| &pair.1)
    }

    /// Whether or not a mapping for `key` is in the map.
    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.find(key).is_some()
    }

    /// Some mapping whose key occurs in both maps, or `None` if the key
    /// sets are disjoint. The mapping may be drawn from either map.
    pub fn find_common<'a>(&'a self, other: &'a HashMap<K, V>) -> Option<(&'a K, &'a V)> {
        self.tree
            .find_common(&other.tree)
            .map(|pair| (&pair.0, &pair.1))
    }

    /// Applies `f` to the mappings in an unspecified order, stopping as
    /// soon as `f` returns true. Returns whether `f` halted the traversal.
    pub fn for_each(&self, mut f: impl FnMut(&K, &V) -> bool) -> bool {
        self.tree.for_each(&mut |pair: &Pair<K, V>| f(&pair.0, &pair.1))
    }

    /// Drops every mapping and resets the map to empty.
    pub fn clear(&mut self) {
        self.tree.clear();
        self.len = 0;
    }
}

impl<K: Hash + Eq + Ord + Clone, V: Clone> Clone for HashMap<K, V> {
    fn clone(&self) -> Self {
        HashMap {
            len: self.len,
            tree: self.tree.clone(),
        }
    }
}

impl<K: Hash + Eq + Ord, V: PartialEq> PartialEq for HashMap<K, V> {
    fn eq(&self, other: &HashMap<K, V>) -> bool {
        self.len == other.len && !self.for_each(|key, value| other.get(key) != Some(value))
    }
}

impl<K: Hash + Eq + Ord, V: Eq> Eq for HashMap<K, V> {}

impl<K: Hash + Eq + Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for HashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.for_each(|key, value| {
            map.entry(key, value);
            false
        });
        map.finish()
    }
}

#[derive(Clone)]
struct Pair<K, V>(K, V);

impl<K: Hash + Eq + Ord, V> Keyed for Pair<K, V> {
    type Key = K;

    fn key(&self) -> &K {
        &self.0
    }
}
