/// Quartic ease-out: fast start, gentle landing.
///
/// `progress` is clamped to `[0, 1]`; non-finite input maps to `0`.
#[must_use]
pub fn ease_out_quart(progress: f64) -> f64 {
    let progress = clamp_progress(progress);
    1.0 - (1.0 - progress).powi(4)
}

/// Normalized progress of an animation that started at `started_at_ms`.
#[must_use]
pub fn progress_at(started_at_ms: f64, now_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    clamp_progress((now_ms - started_at_ms) / duration_ms)
}

/// Displayed counter value for `progress`.
///
/// Intermediate values are floored; completion yields `end` exactly.
#[must_use]
pub fn counter_value(start: i64, end: i64, progress: f64) -> i64 {
    let progress = clamp_progress(progress);
    if progress >= 1.0 {
        return end;
    }

    let range = end as f64 - start as f64;
    (start as f64 + range * ease_out_quart(progress)).floor() as i64
}

fn clamp_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else if progress == f64::INFINITY {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{counter_value, ease_out_quart, progress_at};

    #[test]
    fn ease_endpoints_are_exact() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(-3.0), 0.0);
        assert_eq!(ease_out_quart(f64::NAN), 0.0);
    }

    #[test]
    fn halfway_is_well_past_half() {
        // 1 - 0.5^4
        assert!((ease_out_quart(0.5) - 0.9375).abs() <= 1e-12);
        assert_eq!(counter_value(0, 200, 0.5), 187);
    }

    #[test]
    fn zero_duration_is_immediately_complete() {
        assert_eq!(progress_at(10.0, 10.0, 0.0), 1.0);
    }
}
