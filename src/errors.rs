//! Error types for singleton-init.
//!
//! The library has a single failure mode that callers can observe: a guard
//! acquisition that does not complete within its bounded wait.  Everything
//! else the upstream idiom reported (ownership mismatch, destroy notices)
//! is a non-fatal diagnostic emitted through the `log` facade, because
//! blocking on those would only mask further misuse.

use std::time::Duration;

use thiserror::Error;

/// The top-level error type used throughout singleton-init.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A slot or registry guard was not acquired within the bounded wait.
    ///
    /// This almost always means a deadlock: the most common cause is a
    /// [`singleton_init`][crate::Singleton::singleton_init] hook that
    /// re-enters the shared-instance path for its own type while the
    /// construction guard is still held.
    #[error(
        "timed out after {waited:?} waiting for the `{owner}` singleton guard \
         (possible deadlock)"
    )]
    LockTimeout {
        /// Name of the type whose guard was being acquired.
        owner: &'static str,
        /// How long the acquisition waited before giving up.
        waited: Duration,
    },
}

/// Shorthand `Result` type used throughout singleton-init.
pub type Result<T, E = Error> = std::result::Result<T, E>;
