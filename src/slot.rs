//! `SingletonSlot<T>` — the per-type storage cell.
//!
//! A slot holds at most one instance of its type behind a reader-writer
//! guard.  Access follows the double-checked-locking protocol: a timed read
//! on the fast path, then a timed write acquisition with a re-check before
//! constructing.  Construction happens under the write guard, so no thread
//! can observe a partially initialized instance.
//!
//! Every guard acquisition is bounded ([`LOCK_TIMEOUT`] by default).
//! Exceeding the bound is treated as a probable deadlock and surfaces as
//! [`Error::LockTimeout`] — the classic trigger is an init hook that
//! re-enters the shared-instance path for its own type.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;

use crate::errors::{Error, Result};

/// Default bounded wait on slot and registry guards.
pub const LOCK_TIMEOUT: Duration = Duration::from_secs(10);

/// A process-wide storage cell holding at most one instance of `T`.
///
/// Slots are normally created and owned by the [registry][crate::registry];
/// they are public so that the protocol can be used (and tested) on a local
/// cell as well.
pub struct SingletonSlot<T> {
    cell: RwLock<Option<Arc<T>>>,
    timeout: Duration,
}

impl<T> SingletonSlot<T> {
    /// Create an empty slot with the default bounded wait.
    pub const fn new() -> Self {
        Self::with_timeout(LOCK_TIMEOUT)
    }

    /// Create an empty slot with a custom bounded wait.
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self {
            cell: RwLock::new(None),
            timeout,
        }
    }

    /// The bounded wait applied to every guard acquisition on this slot.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn timed_out(&self) -> Error {
        Error::LockTimeout {
            owner: type_name::<T>(),
            waited: self.timeout,
        }
    }

    /// Fast-path read: return the stored instance, if any.
    ///
    /// Does not block beyond the guard acquisition itself; while another
    /// thread is constructing, the read waits (bounded) for publication.
    pub fn get(&self) -> Result<Option<Arc<T>>> {
        let cell = self
            .cell
            .try_read_for(self.timeout)
            .ok_or_else(|| self.timed_out())?;
        Ok(cell.clone())
    }

    /// Return the stored instance, constructing it first if the slot is
    /// empty.
    ///
    /// Exactly one construction ever happens per populated lifetime of the
    /// slot: concurrent first callers race to the write guard and all but
    /// the winner find the slot populated on the re-check.  `construct`
    /// runs under the write guard, so it must not touch this slot again.
    pub fn get_or_init<F>(&self, construct: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> T,
    {
        if let Some(existing) = self.get()? {
            return Ok(existing);
        }
        let mut cell = self
            .cell
            .try_write_for(self.timeout)
            .ok_or_else(|| self.timed_out())?;
        // Double-check: another thread may have raced ahead of us.
        if let Some(existing) = cell.as_ref() {
            return Ok(Arc::clone(existing));
        }
        let instance = Arc::new(construct());
        *cell = Some(Arc::clone(&instance));
        Ok(instance)
    }

    /// Clear the slot, returning the instance it held.
    ///
    /// A subsequent [`get_or_init`][Self::get_or_init] constructs a fresh
    /// instance with a new identity.  Outstanding references to the old
    /// instance remain valid.
    pub fn clear(&self) -> Result<Option<Arc<T>>> {
        let mut cell = self
            .cell
            .try_write_for(self.timeout)
            .ok_or_else(|| self.timed_out())?;
        Ok(cell.take())
    }

    /// Non-blocking probe: `true` if the slot currently holds an instance.
    ///
    /// Returns `false` while the slot is write-locked (i.e. mid
    /// construction or destruction).
    pub fn is_initialized(&self) -> bool {
        self.cell
            .try_read()
            .map(|cell| cell.is_some())
            .unwrap_or(false)
    }
}

impl<T> Default for SingletonSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SingletonSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SingletonSlot<{}>(initialized: {})",
            type_name::<T>(),
            self.is_initialized()
        )
    }
}
