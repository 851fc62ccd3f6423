//!
//! Allocation Runtime Functions
//!
//! The only memory entry points generated code sees. Both forward to the
//! process-wide heap; sizes arrive as 32-bit byte counts.
//!

#![allow(non_snake_case)]

use ember_std_core::heap;

#[unsafe(no_mangle)]
pub extern "C" fn gc__allocate(bytes: u32) -> *mut u8 {
    heap::allocate(bytes as usize).as_ptr()
}

/// # Safety
/// `ptr` must be null or a live handle returned by `gc__allocate` or
/// `gc__reallocate`; it must not be used after this call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn gc__reallocate(ptr: *mut u8, bytes: u32) -> *mut u8 {
    unsafe { heap::reallocate(ptr, bytes as usize) }.as_ptr()
}
