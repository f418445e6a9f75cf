//! Exported addition.

use crate::arith::add_observed;

/// Adds two 32-bit integers with wraparound and logs the operation.
///
/// Logging never affects the returned value.
#[no_mangle]
pub extern "C" fn by2_add(a: i32, b: i32) -> i32 {
    add_observed(a, b)
}
