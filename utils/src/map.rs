use std::hash::Hash;

use fnv::FnvHashMap;

/// FNV-hashed map for small keys such as `(name, arity)` pairs.
pub struct Map<K, V>(pub FnvHashMap<K, V>);

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> Map<K, V> {
    pub fn new() -> Self {
        Self(FnvHashMap::<K, V>::default())
    }

    pub fn insert(&mut self, k: K, data: V) -> Option<V> {
        self.0.insert(k, data)
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.0.get(k)
    }

    pub fn contains_key(&self, k: &K) -> bool {
        self.0.contains_key(k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::Map;

    #[test]
    fn insert_replaces_previous_value() {
        let mut map: Map<(&str, usize), u32> = Map::new();
        assert!(map.insert(("dot", 2), 1).is_none());
        assert_eq!(map.insert(("dot", 2), 7), Some(1));
        assert_eq!(map.get(&("dot", 2)), Some(&7));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn lookup_distinguishes_key_components() {
        let mut map: Map<(&str, usize), u32> = Map::new();
        map.insert(("dot", 2), 1);
        assert!(!map.contains_key(&("dot", 3)));
        assert!(map.get(&("dop", 2)).is_none());
    }
}
