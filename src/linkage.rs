//! Export / import selection for the C entry points.
//!
//! A symbol is annotated according to which side of the link is being built
//! and how the library is packaged:
//!
//! | role  | packaging | linkage   |
//! |-------|-----------|-----------|
//! | build | shared    | `Export`  |
//! | use   | shared    | `Import`  |
//! | any   | static    | `Default` |
//!
//! Everything here is `const` and resolved at compile time. On the Rust side
//! the producer is fixed (`by2` always builds with exported, unmangled entry
//! points in every crate type) and the consumer picks its row through the
//! `shared` / `static` features of `by2-sys`. C consumers get the same table
//! through the `BY2_API` macro in `include/by2.h`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Compiling the library itself.
    Build,
    /// Compiling against the library.
    Use,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Packaging {
    Shared,
    Static,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Linkage {
    Export,
    Import,
    /// Plain linkage, no annotation.
    Default,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Windows and Cygwin: `__declspec` attributes.
    Windows,
    /// Everything else. `gnu_visibility` is whether the compiler understands
    /// `__attribute__((visibility))` (GCC 4 and later, Clang).
    Unix { gnu_visibility: bool },
}

/// Linkage of the entry points as compiled into this crate.
pub const PRODUCER: Linkage = Linkage::select(Role::Build, Packaging::Shared);

impl Linkage {
    pub const fn select(role: Role, packaging: Packaging) -> Self {
        match (role, packaging) {
            (_, Packaging::Static) => Linkage::Default,
            (Role::Build, Packaging::Shared) => Linkage::Export,
            (Role::Use, Packaging::Shared) => Linkage::Import,
        }
    }

    /// C attribute a header should place on the declaration, if any.
    ///
    /// ELF and Mach-O consumers resolve imports without annotation, so only
    /// Windows has an import attribute.
    pub const fn c_attribute(self, platform: Platform) -> Option<&'static str> {
        match (platform, self) {
            (Platform::Windows, Linkage::Export) => Some("__declspec(dllexport)"),
            (Platform::Windows, Linkage::Import) => Some("__declspec(dllimport)"),
            (
                Platform::Unix {
                    gnu_visibility: true,
                },
                Linkage::Export,
            ) => Some("__attribute__((visibility(\"default\")))"),
            _ => None,
        }
    }

    /// `kind` a Rust consumer passes to `#[link]` for this linkage. `by2-sys`
    /// uses the `Import` value for its `shared` feature.
    pub const fn link_kind(self) -> Option<&'static str> {
        match self {
            Linkage::Import => Some("dylib"),
            Linkage::Default => Some("static"),
            Linkage::Export => None,
        }
    }
}

impl Platform {
    pub const fn current() -> Self {
        if cfg!(any(windows, target_os = "cygwin")) {
            Platform::Windows
        } else {
            // rustc always controls symbol visibility itself.
            Platform::Unix {
                gnu_visibility: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = include_str!("../include/by2.h");
    const UNIX: Platform = Platform::Unix {
        gnu_visibility: true,
    };
    const OLD_UNIX: Platform = Platform::Unix {
        gnu_visibility: false,
    };

    #[test]
    fn test_decision_table() {
        assert_eq!(Linkage::select(Role::Build, Packaging::Shared), Linkage::Export);
        assert_eq!(Linkage::select(Role::Use, Packaging::Shared), Linkage::Import);
        assert_eq!(Linkage::select(Role::Build, Packaging::Static), Linkage::Default);
        assert_eq!(Linkage::select(Role::Use, Packaging::Static), Linkage::Default);
    }

    #[test]
    fn test_producer_exports() {
        assert_eq!(PRODUCER, Linkage::Export);
    }

    #[test]
    fn test_windows_attributes() {
        assert_eq!(
            Linkage::Export.c_attribute(Platform::Windows),
            Some("__declspec(dllexport)")
        );
        assert_eq!(
            Linkage::Import.c_attribute(Platform::Windows),
            Some("__declspec(dllimport)")
        );
        assert_eq!(Linkage::Default.c_attribute(Platform::Windows), None);
    }

    #[test]
    fn test_unix_attributes() {
        assert_eq!(
            Linkage::Export.c_attribute(UNIX),
            Some("__attribute__((visibility(\"default\")))")
        );
        assert_eq!(Linkage::Import.c_attribute(UNIX), None);
        assert_eq!(Linkage::Default.c_attribute(UNIX), None);
    }

    #[test]
    fn test_no_visibility_support_means_no_attribute() {
        for linkage in [Linkage::Export, Linkage::Import, Linkage::Default] {
            assert_eq!(linkage.c_attribute(OLD_UNIX), None);
        }
    }

    #[test]
    fn test_link_kinds() {
        assert_eq!(Linkage::Import.link_kind(), Some("dylib"));
        assert_eq!(Linkage::Default.link_kind(), Some("static"));
        assert_eq!(Linkage::Export.link_kind(), None);
    }

    #[test]
    fn test_consumer_uses_import_link_kind() {
        let consumer = include_str!("../by2-sys/src/lib.rs");
        let kind = Linkage::select(Role::Use, Packaging::Shared)
            .link_kind()
            .unwrap();
        let attr = format!("link(name = \"by2\", kind = \"{kind}\")");
        assert!(consumer.contains(&attr), "by2-sys does not use `{attr}`");
    }

    #[test]
    fn test_current_platform() {
        let platform = Platform::current();
        if cfg!(any(windows, target_os = "cygwin")) {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, UNIX);
        }
    }

    #[test]
    fn test_header_agrees_with_attributes() {
        for platform in [Platform::Windows, UNIX] {
            for linkage in [Linkage::Export, Linkage::Import] {
                if let Some(attr) = linkage.c_attribute(platform) {
                    assert!(HEADER.contains(attr), "header is missing {attr}");
                }
            }
        }
    }

    #[test]
    fn test_header_declares_entry_points() {
        assert!(HEADER.contains("BY2_API int32_t by2_add(int32_t a, int32_t b);"));
        assert!(HEADER.contains("BY2_API int32_t by2_log_init(const char *filter);"));
    }
}
