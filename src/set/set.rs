use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Difference, Intersection, IntoIter, Iter, ReserveError, SymmetricDifference, Union};
use crate::util::fmt::SetNotation;

/// An unordered collection of unique elements, tracked as the keys of a [`HashMap`].
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the Set. Because of this, Set's API never hands out mutable references to its
/// elements.
///
/// Iteration order is unspecified and may differ between two calls on the same Set.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
/// - `m`: The number of items in the other Set.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `is_subset` | `O(n)` |
/// | `union` | `O(n + m)` |
/// | `intersection` | `O(min(n, m))` |
/// | `difference` | `O(n)` |
///
/// \* Amortized, and assuming a hasher that spreads elements well.
#[derive(Clone)]
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    // The unit type takes no space, leaving only the keys.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> Set<T, B> {
    /// Creates a new, empty Set using the default value for `B`. Memory is only allocated once an
    /// element is inserted.
    pub fn new() -> Set<T, B> {
        Set {
            inner: HashMap::default(),
        }
    }

    /// Creates a new, empty Set able to hold at least `cap` elements without reallocating.
    pub fn with_cap(cap: usize) -> Set<T, B> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, B::default()),
        }
    }

    /// Creates a Set containing every distinct element of `seq`. Duplicates collapse into a single
    /// membership.
    pub fn from_seq<I: IntoIterator<Item = T>>(seq: I) -> Set<T, B> {
        seq.into_iter().collect()
    }

    /// Creates a Set from the keys of a map, ignoring its values.
    ///
    /// Accepts anything producing key-value pairs, so an owned [`HashMap`] or
    /// [`BTreeMap`](std::collections::BTreeMap) works directly. A borrowed map produces a Set of
    /// references to its keys.
    pub fn from_keys<V, M: IntoIterator<Item = (T, V)>>(map: M) -> Set<T, B> {
        map.into_iter().map(|(key, _)| key).collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Creates a new, empty Set which will use the provided `hasher`.
    pub const fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the Set can hold before it needs to grow.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Returns true if `item` is a member of the Set.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Inserts `item`, returning true if it wasn't already a member. Inserting an existing member
    /// leaves the Set unchanged.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Removes `item`, returning true if it was a member. Removing an absent item is a no-op.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes `item` and returns the owned element that was stored, if any.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(key, _)| key)
    }

    /// Inserts every element of `items`.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let iter = items.into_iter();
        // Items may already be members, so only an empty Set trusts the whole hint.
        let extra = if self.is_empty() {
            iter.size_hint().0
        } else {
            iter.size_hint().0.div_ceil(2)
        };
        self.reserve(extra);

        for item in iter {
            self.insert(item);
        }
    }

    /// Removes every element of `items` that is a member. Elements that aren't members are
    /// ignored.
    pub fn remove_all<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for item in items {
            let item: &T = item.borrow();
            self.remove(item);
        }
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|item, _| keep(item))
    }

    /// Reserves capacity for at least `extra` more elements.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Reserves capacity for at least `extra` more elements, returning an error rather than
    /// panicking or aborting if the allocation can't be made.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), ReserveError> {
        self.inner
            .try_reserve(extra)
            .map_err(|source| ReserveError { extra, source })
    }

    /// Returns an iterator over all elements in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Consumes the Set, returning its elements in an unspecified order.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    pub fn iter_difference<'a>(&'a self, other: &'a Set<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn iter_symmetric_difference<'a>(
        &'a self,
        other: &'a Set<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.iter_difference(other).chain(other.iter_difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    pub fn iter_intersection<'a>(&'a self, other: &'a Set<T, B>) -> Intersection<'a, T, B> {
        // Probe the larger Set with the elements of the smaller one.
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        Intersection {
            inner: smaller.iter(),
            other: larger,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    pub fn iter_union<'a>(&'a self, other: &'a Set<T, B>) -> Union<'a, T, B> {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        Union {
            inner: larger.iter().chain(smaller.iter_difference(larger)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    ///
    /// The empty Set is a subset of every Set, including itself.
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        if self.len() > other.len() {
            return false;
        }

        self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` is a subset of `other` and `other` has at least one element that
    /// `self` doesn't. (`self ⊂ other`)
    ///
    /// Two equal Sets are never proper subsets of each other.
    pub fn is_proper_subset(&self, other: &Set<T, B>) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns true if `self` is a superset of `other` and has at least one element that `other`
    /// doesn't. (`self ⊃ other`)
    pub fn is_proper_superset(&self, other: &Set<T, B>) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common.
    pub fn is_disjoint(&self, other: &Set<T, B>) -> bool {
        self.iter_intersection(other).next().is_none()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher> Set<T, B> {
    /// Returns a copy of every element in an unspecified order. The length of the result always
    /// equals [`len`](Set::len), but two calls may order the elements differently.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Set<T, B> {
    /// Returns a new Set of the elements in either `self` or `other`. Neither operand is modified.
    pub fn union(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_union(other).cloned().collect()
    }

    /// Returns a new Set of the elements in both `self` and `other`. Neither operand is modified.
    pub fn intersection(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_intersection(other).cloned().collect()
    }

    /// Returns a new Set of the elements in `self` that aren't in `other`. Neither operand is
    /// modified.
    ///
    /// Unlike union and intersection, this isn't symmetric: `a.difference(&b)` keeps what is
    /// unique to `a`.
    pub fn difference(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_difference(other).cloned().collect()
    }

    /// Returns a new Set of the elements in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Set<T, B>) -> Set<T, B> {
        self.iter_symmetric_difference(other).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for Set<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = Set::new();
        set.insert_all(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for Set<T, B> {
    fn from(value: [T; N]) -> Self {
        let mut set = Set::with_cap(N);
        set.insert_all(value);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter)
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for Set<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a Set<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field("contents", &SetNotation(self.iter()))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&SetNotation(self.iter()), f)
    }
}
