//! Process-wide slot registry, keyed by type identity.
//!
//! Every registered type owns exactly one [`SingletonSlot`], stored
//! type-erased in a global map.  The map lives in a `static OnceLock`, so
//! the registry itself — and each slot's guard with it — is created exactly
//! once, race-free, on first access.
//!
//! Slots are keyed by `TypeId`: exact type identity, never a super- or
//! subtype.  Each slot is independent; no operation spans two slots.

use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use parking_lot::RwLock;

use crate::errors::{Error, Result};
use crate::slot::{SingletonSlot, LOCK_TIMEOUT};

type SlotEntry = Arc<dyn Any + Send + Sync>;

static REGISTRY: OnceLock<RwLock<HashMap<TypeId, SlotEntry>>> = OnceLock::new();

fn slots() -> &'static RwLock<HashMap<TypeId, SlotEntry>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

fn registry_timed_out(owner: &'static str) -> Error {
    Error::LockTimeout {
        owner,
        waited: LOCK_TIMEOUT,
    }
}

fn downcast<T: Send + Sync + 'static>(entry: &SlotEntry) -> Arc<SingletonSlot<T>> {
    Arc::clone(entry)
        .downcast::<SingletonSlot<T>>()
        .unwrap_or_else(|_| {
            // TypeId keying makes this impossible.
            unreachable!(
                "registry entry for `{}` holds a slot of another type",
                type_name::<T>()
            )
        })
}

/// Return the slot owned by `T`, creating it on first access.
///
/// Lookup is double-checked as well: a timed read first, then a timed write
/// with an `entry` re-check, so concurrent first callers agree on a single
/// slot.
pub(crate) fn slot_of<T: Send + Sync + 'static>() -> Result<Arc<SingletonSlot<T>>> {
    let key = TypeId::of::<T>();
    {
        let map = slots()
            .try_read_for(LOCK_TIMEOUT)
            .ok_or_else(|| registry_timed_out(type_name::<T>()))?;
        if let Some(entry) = map.get(&key) {
            return Ok(downcast::<T>(entry));
        }
    }
    let mut map = slots()
        .try_write_for(LOCK_TIMEOUT)
        .ok_or_else(|| registry_timed_out(type_name::<T>()))?;
    let entry = map.entry(key).or_insert_with(|| {
        let slot: SlotEntry = Arc::new(SingletonSlot::<T>::new());
        slot
    });
    Ok(downcast::<T>(entry))
}

/// Configure the bounded guard wait for `T`'s slot before its first use.
///
/// Returns `true` if the slot was created with the given timeout, `false`
/// if `T`'s slot already exists (a live slot's timeout cannot change) or
/// the registry guard could not be acquired.
pub fn set_lock_timeout<T: Send + Sync + 'static>(timeout: Duration) -> bool {
    let Some(mut map) = slots().try_write_for(LOCK_TIMEOUT) else {
        return false;
    };
    match map.entry(TypeId::of::<T>()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(vacant) => {
            vacant.insert(Arc::new(SingletonSlot::<T>::with_timeout(timeout)));
            true
        }
    }
}
