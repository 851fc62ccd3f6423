//!
//! Array Runtime Functions
//!
//! One symbol set per element type, stamped out by `array_abi!`:
//!
//! - `Array__<type>__constructor() -> array`
//! - `Array__<type>__push(array, value)`
//! - `Array__<type>__subscript(array, index: f64) -> *mut element`
//! - `Array__<type>__length(array) -> f64`
//!
//! Indices arrive as f64 and are truncated toward zero. A bad index is
//! fatal: the process prints the index and the array size, then aborts.
//! A null array reports length 0 and faults on subscript like an empty
//! one; pushing onto it is fatal.
//!

#![allow(non_snake_case)]

use std::mem;

use ember_std_core::{EmberArray, EmberString, Result, RuntimeError, heap};

use crate::{OrFatal, fatal};

/// Truncate a numeric index toward zero. Values with no unsigned 32-bit
/// representation after truncation (negative, NaN, too large) are
/// rejected instead of wrapping onto a valid slot.
pub(crate) fn index_from_number(index: f64, size: u32) -> Result<u32> {
    let truncated = index.trunc();
    if truncated >= 0.0 && truncated <= u32::MAX as f64 {
        Ok(truncated as u32)
    } else {
        Err(RuntimeError::InvalidIndex { index, size })
    }
}

fn construct<T: Copy>() -> *mut EmberArray<T> {
    crate::init();
    let array = heap::allocate(mem::size_of::<EmberArray<T>>()).cast::<EmberArray<T>>();
    unsafe {
        array.as_ptr().write(EmberArray::new());
    }
    array.as_ptr()
}

unsafe fn push<T: Copy>(array: *mut EmberArray<T>, value: T) {
    match unsafe { array.as_mut() } {
        Some(array) => array.push(value).or_fatal(),
        None => fatal(&RuntimeError::NullArray),
    }
}

unsafe fn subscript<T: Copy>(array: *mut EmberArray<T>, index: f64) -> *mut T {
    match unsafe { array.as_mut() } {
        Some(array) => {
            let index = index_from_number(index, array.len()).or_fatal();
            array.subscript(index).or_fatal() as *mut T
        }
        None => {
            let index = index_from_number(index, 0).or_fatal();
            fatal(&RuntimeError::IndexOutOfBounds { index, size: 0 })
        }
    }
}

unsafe fn length<T: Copy>(array: *const EmberArray<T>) -> f64 {
    unsafe { array.as_ref() }.map_or(0.0, |array| f64::from(array.len()))
}

macro_rules! array_abi {
    ($($name:literal: $elem:ty => $constructor:ident, $push:ident, $subscript:ident, $length:ident;)*) => {
        $(
            #[doc = concat!("Allocate an empty ", $name, " array.")]
            #[unsafe(no_mangle)]
            pub extern "C" fn $constructor() -> *mut EmberArray<$elem> {
                construct::<$elem>()
            }

            #[doc = concat!("Append a value to a ", $name, " array; aborts on a null array.")]
            ///
            /// # Safety
            /// `array` must be null or come from the matching constructor.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $push(array: *mut EmberArray<$elem>, value: $elem) {
                unsafe { push(array, value) }
            }

            #[doc = concat!("Pointer to an element of a ", $name, " array; aborts on a bad index.")]
            ///
            /// # Safety
            /// `array` must be null or come from the matching constructor.
            /// The pointer is invalidated by the next push.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $subscript(array: *mut EmberArray<$elem>, index: f64) -> *mut $elem {
                unsafe { subscript(array, index) }
            }

            #[doc = concat!("Element count of a ", $name, " array.")]
            ///
            /// # Safety
            /// `array` must be null or come from the matching constructor.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $length(array: *const EmberArray<$elem>) -> f64 {
                unsafe { length(array) }
            }
        )*
    };
}

array_abi! {
    "number": f64 => Array__number__constructor, Array__number__push, Array__number__subscript, Array__number__length;
    "boolean": bool => Array__boolean__constructor, Array__boolean__push, Array__boolean__subscript, Array__boolean__length;
    "string": EmberString => Array__string__constructor, Array__string__push, Array__string__subscript, Array__string__length;
}
