//! Thread sleep with millisecond granularity

use std::time::Duration;

/// Block the calling thread for at least `ms` milliseconds.
///
/// std maps this to `nanosleep` on Unix and a high resolution waitable timer
/// on Windows where available. Not cancellable.
pub fn sleep_milliseconds(ms: u32) {
    if ms == 0 {
        return;
    }
    std::thread::sleep(Duration::from_millis(u64::from(ms)));
}
