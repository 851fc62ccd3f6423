//!
//! ember-std-core - Core Runtime Types
//!
//! This crate provides the fundamental types behind every ember runtime symbol:
//!
//! - `Heap`, `GcHeap` and `SystemHeap`, the allocation indirection layer
//! - `EmberString` for immutable byte strings
//! - `EmberArray` for growable arrays of numbers, booleans and strings
//! - `RuntimeError` for faults detected by the runtime
//! - `RuntimeConfig` and logging setup
//!
//! Nothing here ever frees memory. All storage is acquired through `Heap`
//! so a collector can be installed later without touching the containers.
//!

pub mod array;
pub mod config;
pub mod error;
pub mod heap;
pub mod logging;
pub mod string;

pub use array::*;
pub use config::*;
pub use error::*;
pub use heap::{GcHeap, Heap, SystemHeap, install_collector};
pub use string::*;
