//! Short-window trend detection

use crate::models::Trend;

/// Number of most recent points fed to the regression
pub const TREND_WINDOW: usize = 5;

/// Minimum absolute slope (units per sample) to call a direction
pub const TREND_SLOPE_THRESHOLD: f64 = 0.5;

/// Classify the direction of a newest-first series.
///
/// Uses ordinary least squares over at most the [`TREND_WINDOW`] newest
/// points, reordered chronologically, with the sample index as x. Samples are
/// treated as equally spaced whatever their real timestamps. Fewer than three
/// points is always stable.
pub fn detect_trend(newest_first: &[f64]) -> Trend {
    if newest_first.len() < 3 {
        return Trend::Stable;
    }

    let chronological: Vec<f64> = newest_first
        .iter()
        .take(TREND_WINDOW)
        .rev()
        .copied()
        .collect();

    let slope = regression_slope(&chronological);
    if slope > TREND_SLOPE_THRESHOLD {
        Trend::Rising
    } else if slope < -TREND_SLOPE_THRESHOLD {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

/// Least-squares slope of `points` against x = 0..n-1
pub fn regression_slope(points: &[f64]) -> f64 {
    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_x2) = points.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sx2), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sx2 + x * x)
        },
    );

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_is_stable() {
        assert_eq!(detect_trend(&[]), Trend::Stable);
        assert_eq!(detect_trend(&[10.0]), Trend::Stable);
        assert_eq!(detect_trend(&[40.0, 10.0]), Trend::Stable);
    }

    #[test]
    fn test_flat_series_is_stable() {
        assert_eq!(detect_trend(&[20.0, 20.0, 20.0]), Trend::Stable);
    }

    #[test]
    fn test_newest_first_rising() {
        // Chronologically 22 -> 30
        assert_eq!(detect_trend(&[30.0, 28.0, 26.0, 24.0, 22.0]), Trend::Rising);
    }

    #[test]
    fn test_newest_first_falling() {
        assert_eq!(detect_trend(&[22.0, 24.0, 26.0, 28.0, 30.0]), Trend::Falling);
    }

    #[test]
    fn test_only_five_newest_points_count() {
        // The old spike at the tail is outside the window
        let series = [20.0, 20.0, 20.0, 20.0, 20.0, 80.0, 90.0];
        assert_eq!(detect_trend(&series), Trend::Stable);
    }

    #[test]
    fn test_slope_threshold_is_exclusive() {
        // slope exactly 0.5
        assert_eq!(regression_slope(&[0.0, 0.5, 1.0]), 0.5);
        assert_eq!(detect_trend(&[1.0, 0.5, 0.0]), Trend::Stable);
    }

    #[test]
    fn test_regression_slope_degenerate() {
        assert_eq!(regression_slope(&[]), 0.0);
        assert_eq!(regression_slope(&[5.0]), 0.0);
    }
}
