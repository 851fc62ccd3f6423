//!
//! Allocation Indirection
//!
//! Every byte the runtime owns is acquired through the two operations of
//! the `Heap` trait: `allocate` and `reallocate`. There is deliberately no
//! `free`; memory is never reclaimed today.
//!
//! `GcHeap` is the process-wide heap used by default. It forwards to the
//! collector installed with `install_collector`, falling back to
//! `SystemHeap` (plain `malloc`/`realloc`) when none was installed.
//!
//! Allocation failure is fatal and goes through the standard
//! allocation-error hook, which aborts the process.
//!

use std::alloc::{Layout, handle_alloc_error};
use std::ptr::NonNull;
use std::sync::OnceLock;

use crate::error::{Result, RuntimeError};

/// Alignment every handle returned by the platform allocator satisfies.
/// Element types stored in runtime containers must not need more.
pub const HEAP_ALIGN: usize = 8;

/// Source of runtime memory.
///
/// Every handle an implementation returns, from either operation, must be
/// aligned to at least `HEAP_ALIGN`. Arrays and their headers are written
/// straight into these handles.
pub trait Heap {
    /// Returns at least `bytes` bytes of uninitialized memory.
    fn allocate(&self, bytes: usize) -> NonNull<u8>;

    /// Resizes `handle` to at least `bytes` bytes, keeping the leading
    /// `min(old, new)` bytes. A null `handle` behaves like `allocate`.
    ///
    /// # Safety
    /// `handle` must be null or a live handle obtained from this heap.
    /// It must not be used again after the call.
    unsafe fn reallocate(&self, handle: *mut u8, bytes: usize) -> NonNull<u8>;
}

impl<H: Heap + ?Sized> Heap for &H {
    #[inline]
    fn allocate(&self, bytes: usize) -> NonNull<u8> {
        (**self).allocate(bytes)
    }

    #[inline]
    unsafe fn reallocate(&self, handle: *mut u8, bytes: usize) -> NonNull<u8> {
        unsafe { (**self).reallocate(handle, bytes) }
    }
}

/// Pass-through to the platform allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHeap;

impl Heap for SystemHeap {
    fn allocate(&self, bytes: usize) -> NonNull<u8> {
        // malloc(0) may legally return null
        let bytes = bytes.max(1);
        let ptr = unsafe { libc::malloc(bytes) } as *mut u8;
        NonNull::new(ptr).unwrap_or_else(|| allocation_failed(bytes))
    }

    unsafe fn reallocate(&self, handle: *mut u8, bytes: usize) -> NonNull<u8> {
        let bytes = bytes.max(1);
        let ptr = unsafe { libc::realloc(handle.cast(), bytes) } as *mut u8;
        NonNull::new(ptr).unwrap_or_else(|| allocation_failed(bytes))
    }
}

#[cold]
#[inline(never)]
fn allocation_failed(bytes: usize) -> ! {
    match Layout::from_size_align(bytes, HEAP_ALIGN) {
        Ok(layout) => handle_alloc_error(layout),
        Err(_) => std::process::abort(),
    }
}

static SYSTEM_HEAP: SystemHeap = SystemHeap;
static COLLECTOR: OnceLock<&'static (dyn Heap + Sync)> = OnceLock::new();

/// Installs the process-wide collector behind `GcHeap`.
///
/// Must happen before the first allocation; once any allocation has gone
/// through the default `SystemHeap`, or another collector was installed,
/// this fails with `CollectorAlreadyInstalled`.
pub fn install_collector(collector: &'static (dyn Heap + Sync)) -> Result<()> {
    COLLECTOR
        .set(collector)
        .map_err(|_| RuntimeError::CollectorAlreadyInstalled)?;
    tracing::trace!("collector installed");
    Ok(())
}

/// The collector currently serving `GcHeap`.
pub fn collector() -> &'static (dyn Heap + Sync) {
    *COLLECTOR.get_or_init(|| &SYSTEM_HEAP)
}

/// The process-wide heap every runtime container allocates from by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcHeap;

impl Heap for GcHeap {
    #[inline]
    fn allocate(&self, bytes: usize) -> NonNull<u8> {
        collector().allocate(bytes)
    }

    #[inline]
    unsafe fn reallocate(&self, handle: *mut u8, bytes: usize) -> NonNull<u8> {
        unsafe { collector().reallocate(handle, bytes) }
    }
}

/// Allocates from the process-wide heap.
pub fn allocate(bytes: usize) -> NonNull<u8> {
    GcHeap.allocate(bytes)
}

/// Reallocates through the process-wide heap.
///
/// # Safety
/// Same contract as `Heap::reallocate`.
pub unsafe fn reallocate(handle: *mut u8, bytes: usize) -> NonNull<u8> {
    unsafe { GcHeap.reallocate(handle, bytes) }
}
