use std::collections::HashSet;
use std::hash::Hash;

/// Reports items the first time they are seen.
///
/// Feed it the full current set on every scan; only newcomers come back, in
/// the order given. Items that disappear and return are not reported again.
#[derive(Debug, Clone)]
pub struct Watcher<K> {
    seen: HashSet<K>,
}

impl<K> Default for Watcher<K> {
    fn default() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Watcher<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan<I>(&mut self, current: I) -> Vec<K>
    where
        I: IntoIterator<Item = K>,
    {
        current
            .into_iter()
            .filter(|item| self.seen.insert(item.clone()))
            .collect()
    }

    pub fn has_seen(&self, item: &K) -> bool {
        self.seen.contains(item)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
