//! In-place vector extensions

use crate::slice::compare_optional;

/// Mutating conveniences on `Vec`.
pub trait VecExt<T> {
    /// Insert `item` at the front.
    fn prepend(&mut self, item: T);

    /// Swap two elements; ignored when the indices are equal or either is
    /// out of range.
    fn safe_swap(&mut self, index: usize, other: usize);

    /// Keep the leading elements up to the first one failing `condition`.
    fn keep_while<F: FnMut(&T) -> bool>(&mut self, condition: F);

    /// Remove every element equal to `item`.
    fn remove_all_eq(&mut self, item: &T)
    where
        T: PartialEq;

    /// Remove every element contained in `items`.
    fn remove_all_in(&mut self, items: &[T])
    where
        T: PartialEq;

    /// Remove repeated elements, keeping the first occurrence of each.
    fn remove_duplicates(&mut self)
    where
        T: PartialEq;

    /// Stable in-place sort on an optional key; elements without a key go last.
    fn sort_by_optional_key<K, F>(&mut self, key: F, ascending: bool)
    where
        K: Ord,
        F: FnMut(&T) -> Option<K>;
}

impl<T> VecExt<T> for Vec<T> {
    fn prepend(&mut self, item: T) {
        self.insert(0, item);
    }

    fn safe_swap(&mut self, index: usize, other: usize) {
        if index == other || index >= self.len() || other >= self.len() {
            return;
        }
        self.swap(index, other);
    }

    fn keep_while<F: FnMut(&T) -> bool>(&mut self, mut condition: F) {
        if let Some(cut) = self.iter().position(|item| !condition(item)) {
            self.truncate(cut);
        }
    }

    fn remove_all_eq(&mut self, item: &T)
    where
        T: PartialEq,
    {
        self.retain(|value| value != item);
    }

    fn remove_all_in(&mut self, items: &[T])
    where
        T: PartialEq,
    {
        if items.is_empty() {
            return;
        }
        self.retain(|value| !items.contains(value));
    }

    fn remove_duplicates(&mut self)
    where
        T: PartialEq,
    {
        let mut unique: Vec<T> = Vec::with_capacity(self.len());
        for item in self.drain(..) {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        *self = unique;
    }

    fn sort_by_optional_key<K, F>(&mut self, mut key: F, ascending: bool)
    where
        K: Ord,
        F: FnMut(&T) -> Option<K>,
    {
        self.sort_by(|a, b| compare_optional(key(a), key(b), ascending));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend() {
        let mut items = vec![2, 3, 4, 5];
        items.prepend(1);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_safe_swap() {
        let mut items = vec![1, 2, 3, 4, 5];
        items.safe_swap(3, 0);
        assert_eq!(items, vec![4, 2, 3, 1, 5]);

        items.safe_swap(1, 1);
        items.safe_swap(0, 10);
        assert_eq!(items, vec![4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_keep_while() {
        let mut items = vec![0, 2, 4, 7, 6];
        items.keep_while(|x| x % 2 == 0);
        assert_eq!(items, vec![0, 2, 4]);

        let mut all = vec![2, 4];
        all.keep_while(|x| x % 2 == 0);
        assert_eq!(all, vec![2, 4]);
    }

    #[test]
    fn test_remove_all() {
        let mut items = vec![1, 2, 2, 3, 4, 5];
        items.remove_all_eq(&2);
        assert_eq!(items, vec![1, 3, 4, 5]);

        let mut letters = vec!["h", "e", "l", "l", "o"];
        letters.remove_all_in(&["l", "h"]);
        assert_eq!(letters, vec!["e", "o"]);

        let mut untouched = vec![1, 2];
        untouched.remove_all_in(&[]);
        assert_eq!(untouched, vec![1, 2]);
    }

    #[test]
    fn test_remove_duplicates_keeps_order() {
        let mut items = vec![3, 1, 3, 2, 1, 4];
        items.remove_duplicates();
        assert_eq!(items, vec![3, 1, 2, 4]);

        let mut letters = vec!["h", "e", "l", "l", "o"];
        letters.remove_duplicates();
        assert_eq!(letters, vec!["h", "e", "l", "o"]);
    }

    #[test]
    fn test_sort_by_optional_key() {
        let mut items = vec![Some(3), None, Some(1), Some(2)];
        items.sort_by_optional_key(|x| *x, true);
        assert_eq!(items, vec![Some(1), Some(2), Some(3), None]);
    }
}
