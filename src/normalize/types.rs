//! Result type of normalization.

/// Outcome of normalizing one submitted collection.
///
/// `Absent` tells the content store to delete whatever it held for the item;
/// an empty collection is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized<T> {
    /// Retained data to persist.
    Present(T),
    /// Nothing survived; delete any stored value.
    Absent,
}

impl<T> Normalized<T> {
    /// True for [`Normalized::Absent`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Absent)
    }

    /// Borrows the retained data.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Normalized::Present(value) => Some(value),
            Normalized::Absent => None,
        }
    }

    /// Takes the retained data.
    pub fn into_option(self) -> Option<T> {
        match self {
            Normalized::Present(value) => Some(value),
            Normalized::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Normalized<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Normalized::Present(value),
            None => Normalized::Absent,
        }
    }
}
