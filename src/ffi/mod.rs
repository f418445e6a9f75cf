//! C FFI layer.
//!
//! Exports the C ABI functions declared in `include/by2.h`.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `arith` and `logging` modules. These functions are
//! thin wrappers that handle null checks, C string conversion and status codes.
//! No panic unwinds out of them.

pub mod add;
pub mod logging;

pub use add::by2_add;
pub use logging::by2_log_init;
