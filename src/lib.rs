//! # singleton-init
//!
//! Lazy, thread-safe singletons for arbitrary types: shared-instance
//! access with double-checked locking, interception of the conventional
//! construction path, identity-preserving handles instead of copies, and
//! optional destruction with lazy reconstruction.
//!
//! A type opts in by implementing [`Singleton`] (requiring only `Default`)
//! and optionally overriding the [`singleton_init`][Singleton::singleton_init]
//! hook, which the framework runs exactly once per constructed instance.
//! Every guard acquisition is bounded (10 seconds by default); exceeding
//! the bound is treated as a probable deadlock.
//!
//! ## Quick start
//!
//! ```
//! use singleton_init::{define_singleton, Shared, Singleton};
//!
//! #[derive(Default)]
//! struct Logger {
//!     prefix: String,
//! }
//!
//! impl Singleton for Logger {
//!     fn singleton_init(&mut self) {
//!         self.prefix = "app".to_owned();
//!     }
//! }
//!
//! define_singleton!(Logger);
//!
//! let logger = Logger::shared();
//! assert_eq!(logger.prefix, "app");
//!
//! // Generic construction converges on the same instance.
//! assert!(Shared::ptr_eq(&logger, &Logger::new()));
//!
//! // Cloning a handle never duplicates the singleton.
//! assert!(Shared::ptr_eq(&logger, &logger.clone()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `Result` alias.
pub mod errors;

/// The `define_singleton!` macro front-end.
pub mod macros;

/// The process-wide slot registry and its configuration surface.
pub mod registry;

/// The `Shared<T>` handle.
pub mod shared;

/// The `Singleton` trait.
pub mod singleton;

/// The per-type storage cell and locking protocol.
pub mod slot;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use shared::Shared;
pub use singleton::Singleton;
pub use slot::{SingletonSlot, LOCK_TIMEOUT};

#[doc(hidden)]
pub use log;
