//! by2 - 32-bit integer addition over a C ABI
//!
//! This library exports `by2_add` for C and any language with a C FFI, as a
//! shared module (`cdylib`) or a static archive (`staticlib`). The declarations
//! live in `include/by2.h`; Rust consumers link through the `by2-sys` crate.
//!
//! Each addition is reported through `tracing`. Install a subscriber in the
//! host, or call `by2_log_init` to get one.

pub mod arith;
pub mod error;
pub mod ffi;
pub mod linkage;
pub mod logging;

pub use error::{Error, Result};
pub use ffi::{by2_add, by2_log_init};
pub use linkage::{Linkage, Packaging, Platform, Role};
