//! Logging setup for hosts without a `tracing` subscriber.

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error::{Error, BY2_OK};
use crate::logging::{self, LogConfig};

/// Installs a global stderr subscriber.
///
/// # Arguments
/// * `filter` - NUL-terminated `EnvFilter` directives, or null to use `BY2_LOG`
///   (falling back to `"info"`)
///
/// # Returns
/// `BY2_OK` on success, otherwise one of the `BY2_ERR_*` codes.
///
/// # Safety
/// - `filter` must be null or point to a valid NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn by2_log_init(filter: *const c_char) -> i32 {
    let config = if filter.is_null() {
        LogConfig::default()
    } else {
        match CStr::from_ptr(filter).to_str() {
            Ok(filter) => LogConfig::default().with_filter(filter),
            Err(err) => return Error::from(err).code(),
        }
    };

    match logging::init(&config) {
        Ok(()) => BY2_OK,
        Err(err) => err.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BY2_ERR_INVALID_FILTER, BY2_ERR_INVALID_UTF8};

    // Only failure paths here; a successful install is global to the test
    // binary and is covered by `tests/log_init.rs`.

    #[test]
    fn test_invalid_filter() {
        let filter = c"by2=loud";
        unsafe {
            assert_eq!(by2_log_init(filter.as_ptr()), BY2_ERR_INVALID_FILTER);
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes = [b'b', 0xff, 0];
        let filter = CStr::from_bytes_with_nul(&bytes).unwrap();
        unsafe {
            assert_eq!(by2_log_init(filter.as_ptr()), BY2_ERR_INVALID_UTF8);
        }
    }
}
