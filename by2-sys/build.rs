//! Locate the libby2 shared module when the `shared` feature is enabled.
//!
//! Search order: `BY2_LIB_DIR`, then the workspace `target/<profile>` and
//! `target/debug`, `target/release`. Build libby2 first
//! (`cargo build -p by2`). Fails fast when nothing is found.
//! The static configuration needs no build-time work.
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BY2_LIB_DIR");

    if env::var_os("CARGO_FEATURE_SHARED").is_none() {
        return;
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let repo_root = crate_dir
        .parent()
        .expect("by2-sys should be one level below the workspace root")
        .to_path_buf();

    let candidates = env::var("BY2_LIB_DIR")
        .ok()
        .map(PathBuf::from)
        .into_iter()
        .chain([
            repo_root.join("target").join(&profile),
            repo_root.join("target").join("debug"),
            repo_root.join("target").join("release"),
        ]);

    let lib_dir = candidates
        .into_iter()
        .find(|dir| has_shared_module(dir, &target_os))
        .unwrap_or_else(|| {
            panic!(
                "libby2 shared module not found; set BY2_LIB_DIR or run `cargo build -p by2` first"
            )
        });

    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    if target_os != "windows" {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", lib_dir.display());
    }
}

fn has_shared_module(dir: &Path, target_os: &str) -> bool {
    let file = match target_os {
        "windows" => "by2.dll.lib",
        "macos" | "ios" => "libby2.dylib",
        _ => "libby2.so",
    };
    dir.join(file).exists()
}
