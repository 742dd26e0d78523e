//! The `Singleton` trait — shared access, destruction, and two-phase
//! initialization.
//!
//! Implementing [`Singleton`] opts a type into "exactly one instance"
//! semantics.  Construction is two-phase: the fixed base step is
//! `Default::default()`, invoked by the framework; the user-supplied
//! [`singleton_init`][Singleton::singleton_init] hook then runs exactly
//! once, before any thread can observe the instance.  There is no chained
//! call to forget.
//!
//! | Cocoa idiom | Rust |
//! |-------------|------|
//! | `+sharedInstance` | [`shared`][Singleton::shared] / [`try_shared`][Singleton::try_shared] |
//! | `-singletonInit` (call-super chain) | [`singleton_init`][Singleton::singleton_init] (single hook, auto base step) |
//! | `+destroySingleton` | [`destroy`][Singleton::destroy] / [`try_destroy`][Singleton::try_destroy] |
//! | `-destroySingleton` | [`destroy_singleton`][Singleton::destroy_singleton] |
//! | `-copy` / `-mutableCopy` returning `self` | identity-preserving [`Clone`] on [`Shared<T>`] |
//! | retain/release no-ops under MRC | the slot keeps its own strong `Arc` |

use std::any::type_name;

use crate::errors::Result;
use crate::registry;
use crate::shared::Shared;

/// Opt-in trait for types with exactly one shared instance.
///
/// All methods are provided; the only override point is the optional
/// [`singleton_init`][Singleton::singleton_init] hook.
///
/// # Example
/// ```
/// use singleton_init::{Shared, Singleton};
///
/// #[derive(Default)]
/// struct Logger {
///     prefix: String,
/// }
///
/// impl Singleton for Logger {
///     fn singleton_init(&mut self) {
///         self.prefix = "app".to_owned();
///     }
/// }
///
/// let a = Logger::shared();
/// let b = Logger::shared();
/// assert!(Shared::ptr_eq(&a, &b));
/// assert_eq!(a.prefix, "app");
/// ```
pub trait Singleton: Default + Send + Sync + 'static {
    /// Post-construction hook; runs exactly once per constructed instance,
    /// immediately after the base `Default` step and before publication.
    ///
    /// Runs again only when the slot is destroyed and later reconstructed.
    /// Defaults to a no-op, so any `Default` type can participate.
    ///
    /// The construction guard is held while the hook runs: re-entering the
    /// shared-instance path for `Self` from here deadlocks and is cut off
    /// by the bounded wait.
    fn singleton_init(&mut self) {}

    /// Return the shared instance, constructing it on first access.
    ///
    /// Fast path: a timed read of the slot.  Slow path: timed write
    /// acquisition, re-check under the guard, then two-phase construction.
    ///
    /// Errors with [`Error::LockTimeout`][crate::Error::LockTimeout] if a
    /// guard is not acquired within the bounded wait (probable deadlock).
    fn try_shared() -> Result<Shared<Self>> {
        let slot = registry::slot_of::<Self>()?;
        let instance = slot.get_or_init(|| {
            let mut instance = Self::default();
            instance.singleton_init();
            instance
        })?;
        Ok(Shared::from_arc(instance))
    }

    /// Return the shared instance, panicking on a guard timeout.
    ///
    /// This is the conventional accessor: a timeout means a probable
    /// deadlock, which is surfaced as a fatal assertion rather than a
    /// silent hang.  Use [`try_shared`][Singleton::try_shared] where
    /// forward progress is preferable to termination.
    fn shared() -> Shared<Self> {
        match Self::try_shared() {
            Ok(instance) => instance,
            Err(err) => panic!("singleton access failed: {err}"),
        }
    }

    /// Destroy the shared instance, if any.
    ///
    /// Returns `true` if an instance was dropped from the slot.  The next
    /// access constructs a new instance — a new identity — and re-runs the
    /// hook.  Outstanding [`Shared`] handles keep the old instance alive
    /// until they are dropped.
    fn try_destroy() -> Result<bool> {
        let slot = registry::slot_of::<Self>()?;
        let dropped = slot.clear()?;
        if dropped.is_some() {
            log::info!(
                "singleton `{}` destroyed; the next access will construct a new instance",
                type_name::<Self>()
            );
        }
        Ok(dropped.is_some())
    }

    /// Destroy the shared instance, panicking on a guard timeout.
    fn destroy() {
        if let Err(err) = Self::try_destroy() {
            panic!("singleton destruction failed: {err}");
        }
    }

    /// Instance-level convenience: forwards to the type-level
    /// [`destroy`][Singleton::destroy].
    fn destroy_singleton(&self) {
        Self::destroy();
    }

    /// Non-blocking probe: `true` if the shared instance currently exists.
    ///
    /// Returns `false` while the slot is mid construction or destruction.
    fn is_initialized() -> bool {
        registry::slot_of::<Self>()
            .map(|slot| slot.is_initialized())
            .unwrap_or(false)
    }
}
