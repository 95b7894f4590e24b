//! Time measurement utilities.

use std::time::{Duration, Instant};

/// Milliseconds elapsed since `start`, saturating at `u64::MAX`.
#[must_use]
pub fn elapsed_ms(start: Instant) -> u64 {
    duration_ms(start.elapsed())
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
#[must_use]
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_ms_truncates_to_whole_millis() {
        assert_eq!(duration_ms(Duration::from_micros(2_999)), 2);
        assert_eq!(duration_ms(Duration::ZERO), 0);
    }

    #[test]
    fn duration_ms_saturates_instead_of_wrapping() {
        assert_eq!(duration_ms(Duration::MAX), u64::MAX);
    }

    #[test]
    fn elapsed_ms_is_monotonic() {
        let start = Instant::now();
        let first = elapsed_ms(start);
        assert!(elapsed_ms(start) >= first);
    }
}
