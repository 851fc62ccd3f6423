//!
//! Runtime Array Type
//!
//! A growable array of `Copy` elements. Generated code uses three
//! instantiations: `f64` (number), `bool` (boolean) and `EmberString`
//! (string). Storage comes from a `Heap`, the process-wide `GcHeap`
//! unless another one is supplied.
//!
//! Capacity doubles when a push finds the array full (0, 1, 2, 4, ...)
//! and never shrinks. Elements are never dropped and storage is never
//! freed.
//!

use std::fmt;
use std::mem;
use std::ptr;
use std::slice;

use crate::error::{Result, RuntimeError};
use crate::heap::{GcHeap, HEAP_ALIGN, Heap};

#[repr(C)]
pub struct EmberArray<T, H: Heap = GcHeap> {
    elements: *mut T,
    size: u32,
    capacity: u32,
    heap: H,
}

impl<T: Copy> EmberArray<T> {
    pub const fn new() -> Self {
        Self::new_in(GcHeap)
    }
}

impl<T: Copy, H: Heap> EmberArray<T, H> {
    /// An empty array that will allocate from `heap` on its first push.
    pub const fn new_in(heap: H) -> Self {
        const {
            assert!(mem::align_of::<T>() <= HEAP_ALIGN);
        }

        Self {
            elements: ptr::null_mut(),
            size: 0,
            capacity: 0,
            heap,
        }
    }

    pub fn len(&self) -> u32 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        if self.size == self.capacity {
            self.reserve(next_capacity(self.capacity)?)?;
        }

        unsafe {
            self.elements.add(self.size as usize).write(value);
        }
        self.size += 1;
        Ok(())
    }

    pub fn get(&self, index: u32) -> Result<&T> {
        self.check_index(index)?;
        Ok(unsafe { &*self.elements.add(index as usize) })
    }

    pub fn get_mut(&mut self, index: u32) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(unsafe { &mut *self.elements.add(index as usize) })
    }

    /// Mutable access to the element at `index`; the reference stays valid
    /// until the next push.
    pub fn subscript(&mut self, index: u32) -> Result<&mut T> {
        self.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        if self.elements.is_null() {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.elements, self.size as usize) }
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    fn check_index(&self, index: u32) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(RuntimeError::IndexOutOfBounds {
                index,
                size: self.size,
            })
        }
    }

    fn reserve(&mut self, min_capacity: u32) -> Result<()> {
        if min_capacity <= self.capacity {
            return Ok(());
        }

        let bytes = mem::size_of::<T>()
            .checked_mul(min_capacity as usize)
            .filter(|bytes| *bytes <= isize::MAX as usize)
            .ok_or(RuntimeError::CapacityOverflow {
                capacity: self.capacity,
            })?;

        let handle = unsafe { self.heap.reallocate(self.elements.cast(), bytes) };
        tracing::trace!(
            from = self.capacity,
            to = min_capacity,
            element_size = mem::size_of::<T>(),
            "array grew"
        );

        self.elements = handle.as_ptr().cast();
        self.capacity = min_capacity;
        Ok(())
    }
}

/// Capacity after growing a full array: `max(1, capacity * 2)`.
pub fn next_capacity(capacity: u32) -> Result<u32> {
    if capacity == 0 {
        return Ok(1);
    }
    capacity
        .checked_mul(2)
        .ok_or(RuntimeError::CapacityOverflow { capacity })
}

impl<T: Copy> Default for EmberArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Copy, H: Heap> IntoIterator for &'a EmberArray<T, H> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Copy + fmt::Debug, H: Heap> fmt::Debug for EmberArray<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
