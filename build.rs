//! Linker settings for the shared module.
//!
//! Apple targets get an `@rpath` install name so consumers can relocate the
//! dylib next to their own binaries. Other targets need nothing extra.
use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if matches!(target_os.as_str(), "macos" | "ios") {
        println!("cargo:rustc-cdylib-link-arg=-Wl,-install_name,@rpath/libby2.dylib");
    }
}
