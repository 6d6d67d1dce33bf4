//! Keyed, ordered list of display items.

/// Ordered collection of items keyed by name. Adding an existing key
/// replaces the item in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList<T> {
    items: Vec<(&'static str, T)>,
}

impl<T> ItemList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, key: &'static str, item: T) {
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = item,
            None => self.items.push((key, item)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<T> {
        let idx = self.items.iter().position(|(k, _)| *k == key)?;
        Some(self.items.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.items.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items.into_iter().map(|(_, v)| v).collect()
    }
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut list = ItemList::new();
        list.add("a", 1);
        list.add("b", 2);
        assert_eq!(list.keys(), vec!["a", "b"]);
        assert_eq!(list.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_add_existing_key_replaces_in_place() {
        let mut list = ItemList::new();
        list.add("a", 1);
        list.add("b", 2);
        list.add("a", 3);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("a"), Some(&3));
        assert_eq!(list.into_vec(), vec![3, 2]);
    }

    #[test]
    fn test_remove() {
        let mut list = ItemList::new();
        list.add("a", 1);
        assert_eq!(list.remove("a"), Some(1));
        assert_eq!(list.remove("a"), None);
        assert!(list.is_empty());
    }
}
