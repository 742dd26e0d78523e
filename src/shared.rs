//! `Shared<T>` — the handle external holders receive for a singleton.
//!
//! The slot keeps exclusive ownership of the instance; everyone else gets a
//! `Shared<T>`.  Cloning a handle is identity-preserving — any request for
//! a "copy" of a singleton resolves to the same instance, never to a
//! duplicate.  Mutable state inside a singleton lives behind interior
//! mutability, so there is no mutable-copy escape hatch either.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, read-only handle to a singleton instance.
///
/// Dropping a `Shared<T>` never deallocates the instance while its slot is
/// populated: the slot holds its own strong reference.  After an explicit
/// destroy, outstanding handles keep the old instance alive until the last
/// one is dropped.
pub struct Shared<T> {
    inner: Arc<T>,
}

impl<T> Shared<T> {
    pub(crate) fn from_arc(inner: Arc<T>) -> Self {
        Self { inner }
    }

    /// Return `true` if both handles refer to the same instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Borrow the underlying `Arc`.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.inner
    }

    /// Unwrap the handle into its underlying `Arc`.
    pub fn into_arc(self) -> Arc<T> {
        self.inner
    }
}

impl<T> Clone for Shared<T> {
    /// Returns a handle to the *same* instance.  A singleton is never
    /// duplicated by cloning.
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared({:?})", self.inner)
    }
}
