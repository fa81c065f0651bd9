//! Insertion-ordered entity collection.

use minierp_core::Entity;

/// Ordered collection of entities keyed by their id.
///
/// Iteration follows insertion order. Lookups are linear; collections are
/// expected to stay small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// First entity matching `pred`.
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|&item| pred(item))
    }

    pub fn find_mut(&mut self, pred: impl Fn(&T) -> bool) -> Option<&mut T> {
        self.items.iter_mut().find(|item| pred(&**item))
    }

    /// Mutate the entity with `id` in place; `None` if absent.
    pub fn update_with(&mut self, id: &T::Id, f: impl FnOnce(&mut T)) -> Option<&T> {
        let item = self.get_mut(id)?;
        f(item);
        Some(&*item)
    }

    /// Remove the entity with `id`, keeping the relative order of the rest.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(pos))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    fn rows() -> Collection<Row> {
        let mut c = Collection::new();
        for (id, label) in [(1, "a"), (2, "b"), (3, "c")] {
            c.push(Row { id, label });
        }
        c
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut c = rows();
        let removed = c.remove(&2).unwrap();
        assert_eq!(removed.label, "b");
        let ids: Vec<u32> = c.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut c = rows();
        assert!(c.remove(&9).is_none());
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn update_with_mutates_in_place() {
        let mut c = rows();
        let updated = c.update_with(&3, |r| r.label = "z").unwrap();
        assert_eq!(updated.label, "z");
        assert!(c.update_with(&9, |r| r.label = "never").is_none());
        assert_eq!(c.as_slice()[2].label, "z");
    }

    #[test]
    fn find_returns_first_match() {
        let mut c = rows();
        c.push(Row { id: 4, label: "a" });
        assert_eq!(c.find(|r| r.label == "a").map(|r| r.id), Some(1));
    }
}
