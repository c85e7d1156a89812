//! Monotonic tick source.
//!
//! The sandbox subsystem has no architecture code of its own, so the
//! tick counter is a hook the platform registers at boot. Before
//! registration every accessor returns `0`; the test harness only uses
//! ticks for elapsed-time reporting, so a zero source is harmless.

use spin::Once;

static TICK_SOURCE: Once<fn() -> u64> = Once::new();

/// Register the platform tick source. First registration wins.
pub fn register_tick_source(source: fn() -> u64) {
    TICK_SOURCE.call_once(|| source);
}

/// Current monotonic tick count, or `0` before a source is registered.
#[inline]
pub fn ticks() -> u64 {
    match TICK_SOURCE.get() {
        Some(source) => source(),
        None => 0,
    }
}
