use std::collections::hash_set;
use std::collections::HashSet;
use std::hash::Hash;

use crate::location::Location;


/// A set of distinct locations.
///
/// Values are only ever added, so the size never shrinks.
#[derive(Debug, Clone)]
pub struct LocationSet<T = Location> {
    elements: HashSet<T>,
}

impl<T> LocationSet<T> {
    /// Construct an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// Number of distinct values in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Test if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the values in the set in an unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T> LocationSet<T>
where
    T: Eq + Hash,
{
    /// Add a value, returns `true` if it was not already present.
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Test if the set contains the given value.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

impl<T> Default for LocationSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LocationSet<T>
where
    T: Eq + Hash,
{
    #[inline]
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(iter);
    }
}

impl<T> FromIterator<T> for LocationSet<T>
where
    T: Eq + Hash,
{
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            elements: HashSet::from_iter(iter),
        }
    }
}

impl<'a, T> IntoIterator for &'a LocationSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
