use std::time::Duration;

/// Quartic ease-out curve: fast start, smooth landing.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Eased counter value after `elapsed` of a sweep from 0 toward `target`.
///
/// Clamped so that `elapsed >= duration` always yields exactly `target`,
/// regardless of floating point rounding along the way.
pub fn eased_value(elapsed: Duration, duration: Duration, target: u64) -> u64 {
    if duration.is_zero() || elapsed >= duration {
        return target;
    }
    let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
    (target as f64 * ease_out_quart(progress)).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(2_000);

    #[test]
    fn test_sweep_starts_at_zero() {
        assert_eq!(eased_value(Duration::ZERO, WINDOW, 100), 0);
    }

    #[test]
    fn test_sweep_ends_exactly_on_target() {
        assert_eq!(eased_value(WINDOW, WINDOW, 100), 100);
        assert_eq!(eased_value(Duration::from_millis(5_000), WINDOW, 100), 100);
    }

    #[test]
    fn test_sweep_is_monotonic() {
        let mut previous = 0;
        for ms in (0..=2_000).step_by(16) {
            let value = eased_value(Duration::from_millis(ms), WINDOW, 100);
            assert!(
                value >= previous,
                "value dropped from {} to {} at {}ms",
                previous,
                value,
                ms
            );
            previous = value;
        }
    }

    #[test]
    fn test_zero_target_stays_zero() {
        for ms in [0, 500, 2_000, 3_000] {
            assert_eq!(eased_value(Duration::from_millis(ms), WINDOW, 0), 0);
        }
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        assert_eq!(eased_value(Duration::ZERO, Duration::ZERO, 42), 42);
    }

    #[test]
    fn test_ease_out_quart_shape() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        // Ease-out spends its speed early: past half the window the curve
        // is already most of the way there
        assert!(ease_out_quart(0.5) > 0.9);
    }
}
