//!
//! Runtime String Type
//!
//! An `EmberString` is a pointer to `length` bytes. The bytes are never
//! mutated once the value exists; concatenation always produces a fresh
//! buffer. The layout matches the `string` struct generated code passes
//! by value: `{ data: *const u8, length: u32 }`.
//!

use std::borrow::Cow;
use std::fmt;
use std::ptr;

use crate::error::{Result, RuntimeError};
use crate::heap::{GcHeap, Heap};

#[repr(C)]
#[derive(Clone, Copy)]
pub struct EmberString {
    data: *const u8,
    length: u32,
}

impl EmberString {
    pub const fn empty() -> Self {
        Self {
            data: ptr::null(),
            length: 0,
        }
    }

    /// Borrow a static byte literal without copying it.
    pub fn from_static(bytes: &'static [u8]) -> Result<Self> {
        let length = string_length(bytes.len())?;
        Ok(Self {
            data: bytes.as_ptr(),
            length,
        })
    }

    /// Copy `bytes` into a fresh buffer on the process-wide heap.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_in(&GcHeap, bytes)
    }

    pub fn from_bytes_in<H: Heap>(heap: &H, bytes: &[u8]) -> Result<Self> {
        let length = string_length(bytes.len())?;
        let data = heap.allocate(bytes.len()).as_ptr();
        unsafe {
            ptr::copy_nonoverlapping(bytes.as_ptr(), data, bytes.len());
        }
        Ok(Self { data, length })
    }

    /// # Safety
    /// `data` must be valid for reads of `length` bytes for as long as the
    /// returned value is used, and those bytes must never change. `data`
    /// may be null only when `length` is zero.
    pub const unsafe fn from_raw_parts(data: *const u8, length: u32) -> Self {
        Self { data, length }
    }

    pub fn len(&self) -> u32 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        if self.length == 0 || self.data.is_null() {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(self.data, self.length as usize) }
        }
    }

    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Concatenate into a new buffer on the process-wide heap.
    pub fn concat(&self, other: &EmberString) -> Result<EmberString> {
        concat_in(&GcHeap, self, other)
    }
}

/// Allocates `a.len() + b.len()` bytes from `heap` and copies `a` then `b`
/// into them. Neither operand is touched.
pub fn concat_in<H: Heap>(heap: &H, a: &EmberString, b: &EmberString) -> Result<EmberString> {
    let length = a
        .length
        .checked_add(b.length)
        .ok_or(RuntimeError::LengthOverflow {
            left: a.length,
            right: b.length,
        })?;

    let data = heap.allocate(length as usize).as_ptr();
    let (left, right) = (a.as_bytes(), b.as_bytes());
    unsafe {
        ptr::copy_nonoverlapping(left.as_ptr(), data, left.len());
        ptr::copy_nonoverlapping(right.as_ptr(), data.add(left.len()), right.len());
    }

    Ok(EmberString { data, length })
}

fn string_length(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| RuntimeError::StringTooLong { length: len })
}

impl Default for EmberString {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for EmberString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for EmberString {}

impl fmt::Debug for EmberString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for EmberString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
