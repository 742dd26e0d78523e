//! The `define_singleton!` macro front-end.
//!
//! [`Singleton`][crate::Singleton] provides the trait surface; this macro
//! adds the inherent conveniences a trait cannot: interception of the
//! conventional construction path (`new`) and delegated access for types
//! that deliberately share another type's instance.

/// Generate inherent singleton accessors for a type.
///
/// # Interception form
///
/// `define_singleton!(T)` generates `T::new()` and `T::instance()`, both
/// returning the shared instance.  Generic construction through `new`
/// thereby becomes indistinguishable from shared-instance retrieval:
///
/// ```
/// use singleton_init::{define_singleton, Shared, Singleton};
///
/// #[derive(Default)]
/// struct Cache;
/// impl Singleton for Cache {}
/// define_singleton!(Cache);
///
/// let a = Cache::new();
/// let b = Cache::instance();
/// assert!(Shared::ptr_eq(&a, &b));
/// ```
///
/// # Delegation form
///
/// `define_singleton!(Sub => Owner)` generates `Sub::shared()` returning
/// the instance owned by `Owner`.  This mirrors accessing a singleton
/// through a type that does not own the slot: a non-fatal warning is
/// logged and the *owning* type's instance is returned — note that the
/// handle is a `Shared<Owner>`, not a `Shared<Sub>`, which may surprise
/// callers expecting a distinct instance.  Construction of `Sub` itself is
/// deliberately not intercepted; it keeps its ordinary allocation path.
#[macro_export]
macro_rules! define_singleton {
    ($ty:ty) => {
        impl $ty {
            /// Shared instance accessor (alias of `Singleton::shared`).
            pub fn instance() -> $crate::Shared<$ty> {
                <$ty as $crate::Singleton>::shared()
            }

            /// Generic construction resolves to the shared instance; a
            /// fresh object is never allocated here.
            pub fn new() -> $crate::Shared<$ty> {
                <$ty as $crate::Singleton>::shared()
            }
        }
    };
    ($sub:ty => $owner:ty) => {
        impl $sub {
            /// Shared-instance access delegated to the owning type.
            ///
            /// Logs a warning and returns the instance owned by the
            /// delegate target — not an instance of this type.
            pub fn shared() -> $crate::Shared<$owner> {
                $crate::log::warn!(
                    "`{}` requested the singleton owned by `{}`; returning `{}`'s instance",
                    stringify!($sub),
                    stringify!($owner),
                    stringify!($owner),
                );
                <$owner as $crate::Singleton>::shared()
            }
        }
    };
}
