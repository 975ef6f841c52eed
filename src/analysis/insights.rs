//! Threshold classification of headline metrics into strengths and weaknesses

use serde::Serialize;

use super::GameMetrics;
use crate::constants::thresholds;

/// Where a metric sits relative to its good / bad thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Good,
    Average,
    Poor,
}

/// `>= good` is good, `<= bad` is poor, anything between is average.
pub fn performance_level(value: f64, (good, bad): (f64, f64)) -> PerformanceLevel {
    if value >= good {
        PerformanceLevel::Good
    } else if value <= bad {
        PerformanceLevel::Poor
    } else {
        PerformanceLevel::Average
    }
}

/// Which headline number a [`HeadlineMetric`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    WinRate,
    FirstDragon,
    GoldAt15,
    RoundWinRate,
    FirstBlood,
    EcoConversion,
}

impl MetricKind {
    pub fn thresholds(self) -> (f64, f64) {
        match self {
            MetricKind::WinRate => thresholds::WIN_RATE,
            MetricKind::FirstDragon => thresholds::FIRST_DRAGON,
            MetricKind::GoldAt15 => thresholds::GOLD_AT_15,
            MetricKind::RoundWinRate => thresholds::ROUND_WIN_RATE,
            MetricKind::FirstBlood => thresholds::FIRST_BLOOD,
            MetricKind::EcoConversion => thresholds::ECO_CONVERSION,
        }
    }

    fn strength(self, value: f64) -> String {
        match self {
            MetricKind::WinRate => format!("Wins consistently ({value:.1}% win rate)"),
            MetricKind::FirstDragon => format!("Early dragon control ({value:.1}% first dragon)"),
            MetricKind::GoldAt15 => format!("Builds mid-game gold leads ({value:+.0}g @ 15min)"),
            MetricKind::RoundWinRate => format!("Wins the round battle ({value:.1}% of rounds)"),
            MetricKind::FirstBlood => format!("Wins opening duels ({value:.1}% first blood)"),
            MetricKind::EcoConversion => format!("Converts eco rounds ({value:.1}% eco wins)"),
        }
    }

    fn weakness(self, value: f64) -> String {
        match self {
            MetricKind::WinRate => format!("Loses more than it wins ({value:.1}% win rate)"),
            MetricKind::FirstDragon => format!("Concedes early dragons ({value:.1}% first dragon)"),
            MetricKind::GoldAt15 => format!("Falls behind in gold ({value:+.0}g @ 15min)"),
            MetricKind::RoundWinRate => format!("Drops most rounds ({value:.1}% of rounds)"),
            MetricKind::FirstBlood => format!("Loses opening duels ({value:.1}% first blood)"),
            MetricKind::EcoConversion => format!("Predictable on eco rounds ({value:.1}% eco wins)"),
        }
    }
}

/// A headline number with the count of samples it was computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineMetric {
    pub kind: MetricKind,
    pub value: f64,
    pub samples: usize,
}

impl HeadlineMetric {
    pub fn level(&self) -> PerformanceLevel {
        performance_level(self.value, self.kind.thresholds())
    }
}

/// Headline metrics for a summary. `win_rate_percent` is on the 0-100 scale.
pub fn headline_metrics(
    win_rate_percent: f64,
    matches: usize,
    game_metrics: Option<&GameMetrics>,
) -> Vec<HeadlineMetric> {
    let mut metrics = vec![HeadlineMetric {
        kind: MetricKind::WinRate,
        value: win_rate_percent,
        samples: matches,
    }];

    match game_metrics {
        Some(GameMetrics::LeagueOfLegends(lol)) => {
            metrics.push(HeadlineMetric {
                kind: MetricKind::FirstDragon,
                value: lol.objective_control.first_dragon_rate,
                samples: lol.objective_control.first_dragon_samples,
            });
            metrics.push(HeadlineMetric {
                kind: MetricKind::GoldAt15,
                value: lol.gold_efficiency.gold_diff_at_15min,
                samples: lol.gold_efficiency.samples_at_15,
            });
        }
        Some(GameMetrics::Valorant(val)) => {
            metrics.push(HeadlineMetric {
                kind: MetricKind::RoundWinRate,
                value: val.round_win_rate,
                samples: val.total_rounds_played,
            });
            metrics.push(HeadlineMetric {
                kind: MetricKind::FirstBlood,
                value: val.opening_duels.first_blood_rate,
                samples: val.opening_duels.total_rounds,
            });
            metrics.push(HeadlineMetric {
                kind: MetricKind::EcoConversion,
                value: val.economy.eco_conversion_rate,
                samples: val.economy.eco_rounds_played,
            });
        }
        None => {}
    }

    metrics
}

/// Splits headline metrics into (strengths, weaknesses). Metrics without
/// samples are neither.
pub fn strengths_and_weaknesses(metrics: &[HeadlineMetric]) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for metric in metrics.iter().filter(|m| m.samples > 0) {
        match metric.level() {
            PerformanceLevel::Good => strengths.push(metric.kind.strength(metric.value)),
            PerformanceLevel::Poor => weaknesses.push(metric.kind.weakness(metric.value)),
            PerformanceLevel::Average => {}
        }
    }

    (strengths, weaknesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_level_boundaries() {
        assert_eq!(performance_level(60.0, (60.0, 40.0)), PerformanceLevel::Good);
        assert_eq!(performance_level(59.9, (60.0, 40.0)), PerformanceLevel::Average);
        assert_eq!(performance_level(40.0, (60.0, 40.0)), PerformanceLevel::Poor);
        assert_eq!(performance_level(-750.0, (500.0, -500.0)), PerformanceLevel::Poor);
    }

    #[test]
    fn test_strengths_and_weaknesses() {
        let metrics = [
            HeadlineMetric {
                kind: MetricKind::WinRate,
                value: 70.0,
                samples: 10,
            },
            HeadlineMetric {
                kind: MetricKind::GoldAt15,
                value: -800.0,
                samples: 10,
            },
            HeadlineMetric {
                kind: MetricKind::FirstDragon,
                value: 50.0,
                samples: 10,
            },
        ];
        let (strengths, weaknesses) = strengths_and_weaknesses(&metrics);
        assert_eq!(strengths, vec!["Wins consistently (70.0% win rate)"]);
        assert_eq!(weaknesses, vec!["Falls behind in gold (-800g @ 15min)"]);
    }

    #[test]
    fn test_metrics_without_samples_are_ignored() {
        let metrics = [HeadlineMetric {
            kind: MetricKind::FirstDragon,
            value: 0.0,
            samples: 0,
        }];
        let (strengths, weaknesses) = strengths_and_weaknesses(&metrics);
        assert!(strengths.is_empty());
        assert!(weaknesses.is_empty());
    }

    #[test]
    fn test_headline_metrics_without_game() {
        let metrics = headline_metrics(0.0, 0, None);
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].kind, MetricKind::WinRate);
    }
}
