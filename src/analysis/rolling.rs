//! Rolling win-rate window over the most recent matches

use serde::Serialize;

/// Win rate over the last `window` matches and how it evolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollingStats {
    pub window: usize,
    /// Mean outcome over the last `min(n, window)` matches
    pub average: f64,
    /// Rolling win rate ending at each of the last `min(n, window)` matches, oldest first
    pub trend: Vec<f64>,
}

/// Computes rolling statistics over outcomes sorted oldest first.
///
/// A window of zero is treated as one. The window never reaches past the
/// available outcomes: with fewer outcomes than the window, the average is
/// the overall win rate.
pub fn rolling_stats(outcomes: &[bool], window: usize) -> RollingStats {
    let window = window.max(1);
    let n = outcomes.len();
    let span = n.min(window);

    let trend: Vec<f64> = (n - span..n)
        .map(|end| {
            let start = (end + 1).saturating_sub(window);
            win_fraction(&outcomes[start..=end])
        })
        .collect();

    RollingStats {
        window,
        average: win_fraction(&outcomes[n - span..]),
        trend,
    }
}

/// Fraction of `true` outcomes, 0 for an empty slice
pub fn win_fraction(outcomes: &[bool]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    outcomes.iter().filter(|&&won| won).count() as f64 / outcomes.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_history_uses_everything() {
        let stats = rolling_stats(&[true, false, true], 10);
        assert_eq!(stats.window, 10);
        assert!((stats.average - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.trend, vec![1.0, 0.5, 2.0 / 3.0]);
    }

    #[test]
    fn test_window_slides_over_recent_matches() {
        // Five losses then five wins, window 4
        let outcomes: Vec<bool> = (0..10).map(|i| i >= 5).collect();
        let stats = rolling_stats(&outcomes, 4);
        assert_eq!(stats.trend.len(), 4);
        assert_eq!(stats.trend, vec![0.5, 0.75, 1.0, 1.0]);
        assert_eq!(stats.average, 1.0);
    }

    #[test]
    fn test_last_trend_point_is_average() {
        let outcomes = [true, true, false, true, false, false, true, false, true, true, true, false];
        let stats = rolling_stats(&outcomes, 10);
        assert_eq!(stats.trend.len(), 10);
        assert_eq!(stats.trend.last().copied(), Some(stats.average));
        assert!(stats.trend.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn test_empty_and_zero_window() {
        let empty = rolling_stats(&[], 10);
        assert!(empty.trend.is_empty());
        assert_eq!(empty.average, 0.0);

        let zero = rolling_stats(&[true, false], 0);
        assert_eq!(zero.window, 1);
        assert_eq!(zero.trend, vec![0.0]);
    }
}
