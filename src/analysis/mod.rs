//! Descriptive statistics over a team's recent matches.
//!
//! [`analyze`] is a pure function of the records it is given: it sorts a
//! copy by date, never reads beyond the slice, and never fails. An empty
//! slice yields an empty summary.

pub mod consistency;
pub mod insights;
pub mod lol;
pub mod rolling;
pub mod valorant;

use serde::Serialize;
use tracing::debug;

use crate::constants::analysis::ROLLING_WINDOW;
use crate::data_fetcher::models::{Game, MatchRecord};

pub use consistency::{Consistency, MetricSpread};
pub use insights::{HeadlineMetric, MetricKind, PerformanceLevel, performance_level};
pub use lol::LolMetrics;
pub use rolling::RollingStats;
pub use valorant::ValorantMetrics;

/// Game-specific metric bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMetrics {
    LeagueOfLegends(LolMetrics),
    Valorant(ValorantMetrics),
}

impl GameMetrics {
    pub fn lol(&self) -> Option<&LolMetrics> {
        match self {
            GameMetrics::LeagueOfLegends(m) => Some(m),
            GameMetrics::Valorant(_) => None,
        }
    }

    pub fn valorant(&self) -> Option<&ValorantMetrics> {
        match self {
            GameMetrics::Valorant(m) => Some(m),
            GameMetrics::LeagueOfLegends(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatsSummary {
    pub team_name: String,
    /// Absent when there were no matches
    pub game: Option<Game>,
    pub matches_analyzed: usize,
    pub wins: usize,
    /// Fraction of matches won, in [0, 1]
    pub win_rate: f64,
    pub rolling: RollingStats,
    pub consistency: Consistency,
    pub game_metrics: Option<GameMetrics>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl TeamStatsSummary {
    /// Headline metrics with their thresholds, as used for strengths and stat cards
    pub fn headline_metrics(&self) -> Vec<HeadlineMetric> {
        insights::headline_metrics(
            self.win_rate * 100.0,
            self.matches_analyzed,
            self.game_metrics.as_ref(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.matches_analyzed == 0
    }
}

/// Rounds to one decimal place, ties to even
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Analyzes records with the default rolling window.
pub fn analyze(records: &[MatchRecord]) -> TeamStatsSummary {
    analyze_with_window(records, ROLLING_WINDOW)
}

pub fn analyze_with_window(records: &[MatchRecord], window: usize) -> TeamStatsSummary {
    let mut sorted: Vec<&MatchRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let outcomes: Vec<bool> = sorted.iter().map(|r| r.won).collect();
    let wins = outcomes.iter().filter(|&&w| w).count();
    let win_rate = rolling::win_fraction(&outcomes);
    let rolling = rolling::rolling_stats(&outcomes, window);

    let latest = sorted.last();
    let game = latest.map(|r| r.game());
    let team_name = latest.map(|r| r.team.clone()).unwrap_or_default();

    let (game_metrics, primary_metric) = match game {
        Some(Game::LeagueOfLegends) => {
            let stats: Vec<_> = sorted.iter().filter_map(|r| r.lol()).collect();
            let gold_at_15: Vec<f64> = stats
                .iter()
                .filter_map(|s| lol::gold_at_15(s))
                .map(|g| g as f64)
                .collect();
            (
                Some(GameMetrics::LeagueOfLegends(lol::analyze(&stats))),
                MetricSpread::from_values("gold difference @ 15min", &gold_at_15),
            )
        }
        Some(Game::Valorant) => {
            let stats: Vec<_> = sorted.iter().filter_map(|r| r.valorant()).collect();
            let differentials: Vec<f64> = stats
                .iter()
                .map(|s| s.round_differential() as f64)
                .collect();
            (
                Some(GameMetrics::Valorant(valorant::analyze(&stats))),
                MetricSpread::from_values("round differential", &differentials),
            )
        }
        None => (None, None),
    };

    let headline =
        insights::headline_metrics(win_rate * 100.0, outcomes.len(), game_metrics.as_ref());
    let (strengths, weaknesses) = insights::strengths_and_weaknesses(&headline);

    debug!(
        "Analyzed {} matches: win rate {:.3}, {} strengths, {} weaknesses",
        outcomes.len(),
        win_rate,
        strengths.len(),
        weaknesses.len()
    );

    TeamStatsSummary {
        team_name,
        game,
        matches_analyzed: outcomes.len(),
        wins,
        win_rate,
        rolling,
        consistency: Consistency::from_outcomes(&outcomes, primary_metric),
        game_metrics,
        strengths,
        weaknesses,
    }
}
