use serde::{Deserialize, Serialize};

/// A two-field record, the unit of [`zip`](crate::slices::zip),
/// [`unzip`](crate::slices::unzip), [`join`](crate::slices::join),
/// [`from_pairs`](crate::slices::from_pairs) and
/// [`to_pairs`](crate::maps::to_pairs).
///
/// # Example
/// ```
/// use toolz::Pair;
///
/// let p = Pair::new(1, "one");
/// assert_eq!(p.first, 1);
/// assert_eq!(p.into_tuple(), (1, "one"));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pair<T1, T2> {
    pub first: T1,
    pub second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    pub const fn new(first: T1, second: T2) -> Self {
        Self { first, second }
    }

    pub fn into_tuple(self) -> (T1, T2) {
        (self.first, self.second)
    }

    /// Borrow both fields as a tuple of references.
    pub const fn as_refs(&self) -> (&T1, &T2) {
        (&self.first, &self.second)
    }

    /// Swap the fields: `Pair(a, b)` becomes `Pair(b, a)`.
    #[must_use]
    pub fn swap(self) -> Pair<T2, T1> {
        Pair::new(self.second, self.first)
    }
}

impl<T1, T2> From<(T1, T2)> for Pair<T1, T2> {
    fn from((first, second): (T1, T2)) -> Self {
        Self { first, second }
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    fn from(p: Pair<T1, T2>) -> Self {
        (p.first, p.second)
    }
}
