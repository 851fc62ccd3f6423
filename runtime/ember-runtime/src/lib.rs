///
/// ember Runtime Static Library
///
/// Provides every runtime symbol compiled ember programs call.
/// This crate produces a static library (libember_runtime.a) that gets
/// linked with the compiled object file to produce a standalone binary.
///
/// Contains:
/// - Allocation indirection (gc__allocate, gc__reallocate)
/// - Array symbol sets per element type (Array__number__*, Array__boolean__*,
///   Array__string__*)
/// - String concatenation (string__concat)
/// - Console output (console__log)
///
/// Faults detected at this boundary are fatal: the diagnostic goes to
/// stderr and the process aborts.
///

mod array;
mod gc;
mod print;
mod string;

use std::sync::Once;

pub use ember_std_core::{
    DEFAULT_LOG_FILTER, EmberArray, EmberString, GcHeap, Heap, LOG_ANSI_ENV, LOG_ENV, Result,
    RuntimeConfig, RuntimeError, SystemHeap, concat_in, heap, install_collector, logging,
    next_capacity,
};

pub use array::*;
pub use gc::*;
pub use print::*;
pub use string::*;

static INIT: Once = Once::new();

/// Install logging from the environment. Runs at most once per process;
/// every later call, including `init_with`, is a no-op.
pub fn init() {
    INIT.call_once(|| install(&RuntimeConfig::from_env()));
}

/// Like `init`, with an explicit configuration.
pub fn init_with(config: RuntimeConfig) {
    INIT.call_once(|| install(&config));
}

fn install(config: &RuntimeConfig) {
    let installed = logging::init(config);
    tracing::debug!(
        filter = %config.log_filter,
        installed,
        "ember runtime initialized"
    );
}

/// Explicit initialization hook for generated program prologues.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn ember__init() {
    init();
}

/// Report `err` and terminate the process. Never returns.
///
/// The plain diagnostic line on stderr is the one program users see; the
/// structured event only shows up when `EMBER_LOG` asks for debug output.
#[cold]
#[inline(never)]
pub fn fatal(err: &RuntimeError) -> ! {
    init();
    tracing::debug!(error = %err, "fatal runtime error");
    eprintln!("{}", err);
    std::process::abort()
}

/// Unwraps runtime results at the C boundary, where every error is fatal.
pub trait OrFatal<T> {
    fn or_fatal(self) -> T;
}

impl<T> OrFatal<T> for Result<T> {
    #[inline]
    fn or_fatal(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => fatal(&err),
        }
    }
}
