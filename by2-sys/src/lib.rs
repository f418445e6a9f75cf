//! Rust bindings to libby2 through its C ABI.
//!
//! The symbols are declared here rather than reached through `by2`'s Rust API,
//! so this crate consumes libby2 exactly as any foreign caller would:
//!
//! - `static` (default): the `by2` library is linked into this crate and the
//!   declarations resolve at link time, without annotation.
//! - `shared`: the declarations are imported from the libby2 shared module
//!   (`#[link(kind = "dylib")]`), which must be found at build and run time.
//!
//! `shared` takes precedence when both features are enabled. The `kind`
//! strings are the ones `by2::linkage::Linkage::link_kind` gives for the
//! consumer rows of the decision table.
//!
//! The shared configuration needs libby2 built before the consumer:
//!
//! ```text
//! cargo build -p by2
//! cargo test -p by2-sys --no-default-features --features shared
//! ```
//!
//! Set `BY2_LIB_DIR` to use a libby2 from somewhere other than `target/`.

use std::os::raw::c_char;

#[cfg(all(feature = "static", not(feature = "shared")))]
use by2 as _;

#[cfg(not(any(feature = "static", feature = "shared")))]
compile_error!("by2-sys needs either the `static` or the `shared` feature");

pub mod ffi {
    use super::c_char;

    // Status codes from `include/by2.h`.
    pub const BY2_OK: i32 = 0;
    pub const BY2_ERR_INVALID_FILTER: i32 = 1;
    pub const BY2_ERR_INVALID_UTF8: i32 = 2;
    pub const BY2_ERR_ALREADY_INITIALIZED: i32 = 3;

    #[cfg_attr(feature = "shared", link(name = "by2", kind = "dylib"))]
    extern "C" {
        pub fn by2_add(a: i32, b: i32) -> i32;
        pub fn by2_log_init(filter: *const c_char) -> i32;
    }
}

/// Consumer-side rows of `by2::linkage::Linkage`. Kept local because the
/// `shared` configuration must not link the `by2` rlib.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Linkage {
    Import,
    Default,
}

/// How this build reaches libby2.
pub const LINKAGE: Linkage = if cfg!(feature = "shared") {
    Linkage::Import
} else {
    Linkage::Default
};

/// Calls `by2_add` through the C ABI.
pub fn add(a: i32, b: i32) -> i32 {
    unsafe { ffi::by2_add(a, b) }
}
