//!
//! Console Runtime Functions
//!
//! `console__log` writes the raw string bytes and a newline to stdout.
//! Bytes are written as-is; invalid UTF-8 is not replaced.
//!

#![allow(non_snake_case)]

use std::io::{self, Write};

use ember_std_core::EmberString;

#[unsafe(no_mangle)]
pub extern "C" fn console__log(message: EmberString) {
    crate::init();
    if let Err(err) = write_line(&mut io::stdout().lock(), &message) {
        tracing::warn!(error = %err, "console__log failed to write to stdout");
    }
}

fn write_line<W: Write>(out: &mut W, message: &EmberString) -> io::Result<()> {
    out.write_all(message.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
