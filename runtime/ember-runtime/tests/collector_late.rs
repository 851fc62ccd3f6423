///
/// # Late Collector Installation Tests
///
/// Once the default heap has served an allocation the collector slot is
/// settled. Runs as its own binary so no other test allocates first or
/// installs a collector.
///

use ember_runtime::*;

#[test]
fn test_install_after_first_allocation_fails() {
    let array = Array__number__constructor();
    unsafe {
        Array__number__push(array, 1.0);
    }

    assert_eq!(
        install_collector(&SystemHeap),
        Err(RuntimeError::CollectorAlreadyInstalled)
    );

    unsafe {
        Array__number__push(array, 2.0);
        assert_eq!(Array__number__length(array), 2.0);
        assert_eq!(*Array__number__subscript(array, 1.0), 2.0);
    }
}
