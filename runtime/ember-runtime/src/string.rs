//!
//! String Runtime Functions
//!
//! Strings cross the boundary by value as `{ data, length }`.
//!

#![allow(non_snake_case)]

use ember_std_core::EmberString;

use crate::OrFatal;

/// Concatenate two strings into a freshly allocated buffer.
/// Aborts if the combined length does not fit in 32 bits.
#[unsafe(no_mangle)]
pub extern "C" fn string__concat(a: EmberString, b: EmberString) -> EmberString {
    a.concat(&b).or_fatal()
}
