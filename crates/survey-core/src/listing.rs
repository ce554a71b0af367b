//! Explicit result type for catalog reads that are allowed to degrade.
//!
//! The form must still render when the catalog is unreachable. Instead of
//! swallowing the error and logging on the side, reads that feed the form
//! return a `Listing`, and the caller decides what to do with the diagnostic.

/// Outcome of a degradable read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    /// The read succeeded. The vector may be empty.
    Available(Vec<T>),
    /// The read failed. Callers substitute an empty list.
    Unavailable { diagnostic: String },
}

impl<T> Listing<T> {
    /// Build a listing from a fallible read.
    pub fn from_result<E: std::fmt::Display>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => Self::Available(items),
            Err(error) => Self::Unavailable {
                diagnostic: error.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The failure description, if the read failed.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable { diagnostic } => Some(diagnostic),
        }
    }

    /// Items of a successful read, or an empty slice.
    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Available(items) => items,
            Self::Unavailable { .. } => &[],
        }
    }

    /// Consume the listing, degrading a failed read to an empty vector.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Available(items) => items,
            Self::Unavailable { .. } => Vec::new(),
        }
    }
}
