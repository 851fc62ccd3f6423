///
/// # Collector Installation Tests
///
/// Installing a collector is process-wide and one-shot, so this file holds
/// a single test and runs as its own binary.
///

use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};

use ember_runtime::*;

struct CountingCollector {
    allocations: AtomicUsize,
    reallocations: AtomicUsize,
}

impl Heap for CountingCollector {
    fn allocate(&self, bytes: usize) -> NonNull<u8> {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        SystemHeap.allocate(bytes)
    }

    unsafe fn reallocate(&self, handle: *mut u8, bytes: usize) -> NonNull<u8> {
        self.reallocations.fetch_add(1, Ordering::Relaxed);
        unsafe { SystemHeap.reallocate(handle, bytes) }
    }
}

static COLLECTOR: CountingCollector = CountingCollector {
    allocations: AtomicUsize::new(0),
    reallocations: AtomicUsize::new(0),
};

#[test]
fn test_installed_collector_serves_every_allocation() {
    install_collector(&COLLECTOR).expect("first installation succeeds");

    unsafe {
        let array = Array__number__constructor();
        assert_eq!(COLLECTOR.allocations.load(Ordering::Relaxed), 1);

        for i in 0..100 {
            Array__number__push(array, i as f64);
        }
        // 1, 2, 4, ..., 128
        assert_eq!(COLLECTOR.reallocations.load(Ordering::Relaxed), 8);

        let a = EmberString::from_static(b"ab").unwrap();
        let b = EmberString::from_static(b"cde").unwrap();
        let _ = string__concat(a, b);
        assert_eq!(COLLECTOR.allocations.load(Ordering::Relaxed), 2);

        let ptr = gc__allocate(16);
        let _ = gc__reallocate(ptr, 32);
        assert_eq!(COLLECTOR.allocations.load(Ordering::Relaxed), 3);
        assert_eq!(COLLECTOR.reallocations.load(Ordering::Relaxed), 9);
    }

    assert_eq!(
        install_collector(&SystemHeap),
        Err(RuntimeError::CollectorAlreadyInstalled)
    );
}
