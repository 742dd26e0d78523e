//! Lifecycle and concurrency tests for the `Singleton` trait.
//!
//! Each test declares its own local type: slots are process-wide and keyed
//! by type identity, so sharing a type across tests would couple them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use singleton_init::{registry, Error, Shared, Singleton};

#[test]
fn concurrent_first_access_constructs_once() {
    static INITS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Logger {
        ready: bool,
    }

    impl Singleton for Logger {
        fn singleton_init(&mut self) {
            INITS.fetch_add(1, Ordering::SeqCst);
            self.ready = true;
        }
    }

    let barrier = Arc::new(Barrier::new(8));
    let workers: Vec<_> = (0..8)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                Logger::shared()
            })
        })
        .collect();

    let handles: Vec<Shared<Logger>> = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .collect();

    for pair in handles.windows(2) {
        assert!(Shared::ptr_eq(&pair[0], &pair[1]));
    }
    assert!(handles[0].ready);
    assert_eq!(INITS.load(Ordering::SeqCst), 1);
}

#[test]
fn destroy_then_reconstruct_yields_a_new_identity() {
    static INITS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Sessions;

    impl Singleton for Sessions {
        fn singleton_init(&mut self) {
            INITS.fetch_add(1, Ordering::SeqCst);
        }
    }

    let first = Sessions::shared();
    assert!(Sessions::is_initialized());
    assert_eq!(INITS.load(Ordering::SeqCst), 1);

    Sessions::destroy();
    assert!(!Sessions::is_initialized());

    // `first` is still held, so the fresh allocation cannot alias it.
    let second = Sessions::shared();
    assert!(!Shared::ptr_eq(&first, &second));
    assert_eq!(INITS.load(Ordering::SeqCst), 2);
}

#[test]
fn destroying_an_uninitialized_slot_is_a_no_op() {
    #[derive(Default)]
    struct Untouched;

    impl Singleton for Untouched {}

    assert!(!Untouched::is_initialized());
    assert_eq!(Untouched::try_destroy(), Ok(false));
    assert!(!Untouched::is_initialized());
}

#[test]
fn instance_level_destroy_forwards_to_the_type() {
    #[derive(Default)]
    struct Cursor;

    impl Singleton for Cursor {}

    let handle = Cursor::shared();
    handle.destroy_singleton();
    assert!(!Cursor::is_initialized());
}

#[test]
fn outstanding_handles_survive_destruction() {
    #[derive(Default)]
    struct Store {
        label: &'static str,
    }

    impl Singleton for Store {
        fn singleton_init(&mut self) {
            self.label = "live";
        }
    }

    let handle = Store::shared();
    // Slot + this handle.
    assert_eq!(Arc::strong_count(handle.as_arc()), 2);

    Store::destroy();
    // The slot gave up its reference; the handle alone keeps the old
    // instance alive and fully usable.
    assert_eq!(Arc::strong_count(handle.as_arc()), 1);
    assert_eq!(handle.label, "live");
}

#[test]
fn reentrant_hook_reports_a_probable_deadlock() {
    #[derive(Default)]
    struct Knot {
        reentry: Option<Error>,
    }

    impl Singleton for Knot {
        fn singleton_init(&mut self) {
            // The construction guard is held here: this must time out, not
            // hang.
            self.reentry = Self::try_shared().err();
        }
    }

    assert!(registry::set_lock_timeout::<Knot>(Duration::from_millis(50)));
    let knot = Knot::shared();
    assert!(matches!(knot.reentry, Some(Error::LockTimeout { .. })));
}

#[test]
fn hook_runs_before_any_thread_observes_the_instance() {
    static OBSERVED_UNINITIALIZED: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct Slow {
        ready: bool,
    }

    impl Singleton for Slow {
        fn singleton_init(&mut self) {
            thread::sleep(Duration::from_millis(100));
            self.ready = true;
        }
    }

    let barrier = Arc::new(Barrier::new(4));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if !Slow::shared().ready {
                    OBSERVED_UNINITIALIZED.fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(OBSERVED_UNINITIALIZED.load(Ordering::SeqCst), 0);
}
