//! Read-only slice extensions

use std::cmp::Ordering;

/// Convenience methods on slices.
///
/// Methods that return owned elements require `T: Clone`; everything else
/// works on references.
pub trait SliceExt<T> {
    /// Element at `index`, `None` for negative or out-of-range indices.
    fn item_at(&self, index: isize) -> Option<&T>;

    /// Index of the first element matching `condition`.
    fn first_index_where<F: FnMut(&T) -> bool>(&self, condition: F) -> Option<usize>;

    /// Index of the last element matching `condition`.
    fn last_index_where<F: FnMut(&T) -> bool>(&self, condition: F) -> Option<usize>;

    /// Indices of all elements matching `condition`, `None` when there are
    /// none.
    fn indices_where<F: FnMut(&T) -> bool>(&self, condition: F) -> Option<Vec<usize>>;

    /// Every element matches (vacuously true when empty).
    fn all_matching<F: FnMut(&T) -> bool>(&self, condition: F) -> bool;

    /// No element matches.
    fn none_matching<F: FnMut(&T) -> bool>(&self, condition: F) -> bool;

    /// Last element matching `condition`.
    fn last_where<F: FnMut(&T) -> bool>(&self, condition: F) -> Option<&T>;

    /// Elements that do not match `condition`.
    fn reject<F: FnMut(&T) -> bool>(&self, condition: F) -> Vec<T>
    where
        T: Clone;

    /// Number of elements matching `condition`.
    fn count_where<F: FnMut(&T) -> bool>(&self, condition: F) -> usize;

    /// Call `body` on each element, last to first.
    fn for_each_reversed<F: FnMut(&T)>(&self, body: F);

    /// Call `body` on each element matching `condition`.
    fn for_each_where<C, F>(&self, condition: C, body: F)
    where
        C: FnMut(&T) -> bool,
        F: FnMut(&T);

    /// Transform the elements matching `is_included`.
    fn filtered_map<U, C, F>(&self, is_included: C, transform: F) -> Vec<U>
    where
        C: FnMut(&T) -> bool,
        F: FnMut(&T) -> U;

    /// Leading elements up to the first one failing `condition`.
    fn take_while_vec<F: FnMut(&T) -> bool>(&self, condition: F) -> Vec<T>
    where
        T: Clone;

    /// Call `body` with consecutive chunks of `size` elements; the last chunk
    /// may be shorter. Nothing is called for a zero size or an empty slice.
    fn for_each_slice<F: FnMut(&[T])>(&self, size: usize, body: F);

    /// Consecutive chunks of `size` elements; the last may be shorter.
    ///
    /// Returns `None` for a zero size or an empty slice.
    ///
    /// ```
    /// use gn_collections::SliceExt;
    /// assert_eq!([0, 2, 4, 7, 6].group_by_size(2), Some(vec![vec![0, 2], vec![4, 7], vec![6]]));
    /// assert_eq!([0, 2].group_by_size(0), None);
    /// ```
    fn group_by_size(&self, size: usize) -> Option<Vec<Vec<T>>>
    where
        T: Clone;

    /// Split into `(matching, non_matching)`, preserving order.
    fn divided<F: FnMut(&T) -> bool>(&self, condition: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone;

    /// Stable sort on an optional key; elements without a key go last.
    fn sorted_by_optional_key<K, F>(&self, key: F, ascending: bool) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> Option<K>;

    /// Every element of `elements` is present (true when `elements` is empty).
    fn contains_all(&self, elements: &[T]) -> bool
    where
        T: PartialEq;

    /// Indices of every element equal to `item`.
    fn indices_of(&self, item: &T) -> Vec<usize>
    where
        T: PartialEq;

    /// Index of the first element equal to `item`.
    fn first_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    /// Index of the last element equal to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;
}

impl<T> SliceExt<T> for [T] {
    fn item_at(&self, index: isize) -> Option<&T> {
        usize::try_from(index).ok().and_then(|i| self.get(i))
    }

    fn first_index_where<F: FnMut(&T) -> bool>(&self, condition: F) -> Option<usize> {
        self.iter().position(condition)
    }

    fn last_index_where<F: FnMut(&T) -> bool>(&self, condition: F) -> Option<usize> {
        self.iter().rposition(condition)
    }

    fn indices_where<F: FnMut(&T) -> bool>(&self, mut condition: F) -> Option<Vec<usize>> {
        let indices: Vec<usize> = self
            .iter()
            .enumerate()
            .filter(|(_, item)| condition(item))
            .map(|(i, _)| i)
            .collect();
        (!indices.is_empty()).then_some(indices)
    }

    fn all_matching<F: FnMut(&T) -> bool>(&self, condition: F) -> bool {
        self.iter().all(condition)
    }

    fn none_matching<F: FnMut(&T) -> bool>(&self, condition: F) -> bool {
        !self.iter().any(condition)
    }

    fn last_where<F: FnMut(&T) -> bool>(&self, mut condition: F) -> Option<&T> {
        self.iter().rev().find(|item| condition(item))
    }

    fn reject<F: FnMut(&T) -> bool>(&self, mut condition: F) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().filter(|item| !condition(item)).cloned().collect()
    }

    fn count_where<F: FnMut(&T) -> bool>(&self, mut condition: F) -> usize {
        self.iter().filter(|item| condition(item)).count()
    }

    fn for_each_reversed<F: FnMut(&T)>(&self, body: F) {
        self.iter().rev().for_each(body);
    }

    fn for_each_where<C, F>(&self, mut condition: C, body: F)
    where
        C: FnMut(&T) -> bool,
        F: FnMut(&T),
    {
        self.iter().filter(|item| condition(item)).for_each(body);
    }

    fn filtered_map<U, C, F>(&self, mut is_included: C, transform: F) -> Vec<U>
    where
        C: FnMut(&T) -> bool,
        F: FnMut(&T) -> U,
    {
        self.iter().filter(|item| is_included(item)).map(transform).collect()
    }

    fn take_while_vec<F: FnMut(&T) -> bool>(&self, mut condition: F) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().take_while(|item| condition(item)).cloned().collect()
    }

    fn for_each_slice<F: FnMut(&[T])>(&self, size: usize, body: F) {
        if size == 0 {
            return;
        }
        self.chunks(size).for_each(body);
    }

    fn group_by_size(&self, size: usize) -> Option<Vec<Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 || self.is_empty() {
            return None;
        }
        Some(self.chunks(size).map(<[T]>::to_vec).collect())
    }

    fn divided<F: FnMut(&T) -> bool>(&self, mut condition: F) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
    {
        self.iter().cloned().partition(|item| condition(item))
    }

    fn sorted_by_optional_key<K, F>(&self, mut key: F, ascending: bool) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> Option<K>,
    {
        let mut sorted = self.to_vec();
        sorted.sort_by(|a, b| compare_optional(key(a), key(b), ascending));
        sorted
    }

    fn contains_all(&self, elements: &[T]) -> bool
    where
        T: PartialEq,
    {
        elements.iter().all(|element| self.contains(element))
    }

    fn indices_of(&self, item: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter(|(_, value)| *value == item)
            .map(|(i, _)| i)
            .collect()
    }

    fn first_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|value| value == item)
    }

    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|value| value == item)
    }
}

/// Ordering for optional keys: present keys in the requested direction,
/// missing keys after all present ones.
pub(crate) fn compare_optional<K: Ord>(a: Option<K>, b: Option<K>, ascending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if ascending => a.cmp(&b),
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
