//! Integer addition and its observed variant.
//!
//! `add` is the pure computation. `add_observed` is the wrapper the C ABI
//! calls: it computes the sum first and only then reports it, so nothing the
//! logging side does can change the result.

use std::panic;

use tracing::info;

/// Two's complement addition of two 32-bit integers.
///
/// Overflow wraps: `add(i32::MAX, 1) == i32::MIN`.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Adds `a` and `b` and reports the operation at INFO level.
///
/// Reporting is fire-and-forget. With no subscriber installed the event is
/// dropped, and a subscriber that panics while recording it is contained here.
pub fn add_observed(a: i32, b: i32) -> i32 {
    let sum = add(a, b);
    let _ = panic::catch_unwind(|| report(a, b, sum));
    sum
}

fn report(a: i32, b: i32, sum: i32) {
    info!(a, b, sum, "adding {a} + {b} = {sum}");
}
