//! League of Legends metrics: jungle pathing, objective control, gold efficiency

use serde::Serialize;

use super::consistency::mean;
use super::round1;
use crate::constants::analysis::{GOLD_WINDOW_10, GOLD_WINDOW_15, GOLD_WINDOW_20};
use crate::data_fetcher::models::{Lane, LolMatchStats, ObjectiveEvent};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LolMetrics {
    pub avg_game_duration_minutes: f64,
    pub jungle_proximity: JungleProximity,
    pub objective_control: ObjectiveControl,
    pub gold_efficiency: GoldEfficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JungleProximity {
    pub top_lane_percent: f64,
    pub mid_lane_percent: f64,
    pub bot_lane_percent: f64,
    pub total_samples: usize,
    pub dominant_lane: Option<Lane>,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectiveControl {
    pub first_dragon_rate: f64,
    pub overall_dragon_rate: f64,
    pub herald_control_rate: f64,
    pub baron_control_rate: f64,
    /// Matches in which at least one dragon was taken
    pub first_dragon_samples: usize,
    pub total_dragons: usize,
    pub team_dragons: usize,
    pub total_heralds: usize,
    pub team_heralds: usize,
    pub total_barons: usize,
    pub team_barons: usize,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoldEfficiency {
    pub gold_diff_at_10min: f64,
    pub gold_diff_at_15min: f64,
    pub gold_diff_at_20min: f64,
    /// Gold per minute gained between 10 and 15 minutes, 0 unless both averages are non-zero
    pub gold_growth_rate: f64,
    pub samples_at_10: usize,
    pub samples_at_15: usize,
    pub samples_at_20: usize,
    pub insight: String,
}

pub fn analyze(matches: &[&LolMatchStats]) -> LolMetrics {
    let durations: Vec<f64> = matches
        .iter()
        .map(|m| f64::from(m.duration_seconds))
        .collect();

    LolMetrics {
        avg_game_duration_minutes: round1(mean(&durations) / 60.0),
        jungle_proximity: jungle_proximity(matches),
        objective_control: objective_control(matches),
        gold_efficiency: gold_efficiency(matches),
    }
}

fn jungle_proximity(matches: &[&LolMatchStats]) -> JungleProximity {
    let mut counts = [0usize; 3];
    for position in matches.iter().flat_map(|m| &m.jungle_positions) {
        counts[lane_index(position.lane)] += 1;
    }
    let total: usize = counts.iter().sum();

    if total == 0 {
        return JungleProximity {
            top_lane_percent: 0.0,
            mid_lane_percent: 0.0,
            bot_lane_percent: 0.0,
            total_samples: 0,
            dominant_lane: None,
            insight: "No jungle tracking data".to_string(),
        };
    }

    let percent = |count: usize| count as f64 / total as f64 * 100.0;

    // First lane wins ties
    let dominant = Lane::ALL
        .iter()
        .copied()
        .fold(Lane::Top, |best, lane| {
            if counts[lane_index(lane)] > counts[lane_index(best)] {
                lane
            } else {
                best
            }
        });

    JungleProximity {
        top_lane_percent: round1(percent(counts[0])),
        mid_lane_percent: round1(percent(counts[1])),
        bot_lane_percent: round1(percent(counts[2])),
        total_samples: total,
        dominant_lane: Some(dominant),
        insight: format!(
            "Jungler focuses {:.1}% on {} lane",
            percent(counts[lane_index(dominant)]),
            dominant.name()
        ),
    }
}

fn lane_index(lane: Lane) -> usize {
    match lane {
        Lane::Top => 0,
        Lane::Mid => 1,
        Lane::Bot => 2,
    }
}

fn objective_control(matches: &[&LolMatchStats]) -> ObjectiveControl {
    let first_dragons: Vec<bool> = matches
        .iter()
        .filter_map(|m| m.dragons.iter().min_by_key(|d| d.timestamp))
        .map(|d| d.taken_by_team)
        .collect();
    let first_dragons_taken = first_dragons.iter().filter(|&&taken| taken).count();

    let (team_dragons, total_dragons) = tally(matches.iter().flat_map(|m| &m.dragons));
    let (team_heralds, total_heralds) = tally(matches.iter().flat_map(|m| &m.heralds));
    let (team_barons, total_barons) = tally(matches.iter().flat_map(|m| &m.barons));

    let first_dragon_rate = percentage(first_dragons_taken, first_dragons.len());

    ObjectiveControl {
        first_dragon_rate: round1(first_dragon_rate),
        overall_dragon_rate: round1(percentage(team_dragons, total_dragons)),
        herald_control_rate: round1(percentage(team_heralds, total_heralds)),
        baron_control_rate: round1(percentage(team_barons, total_barons)),
        first_dragon_samples: first_dragons.len(),
        total_dragons,
        team_dragons,
        total_heralds,
        team_heralds,
        total_barons,
        team_barons,
        insight: format!(
            "{} early objective control ({:.0}% first dragon rate)",
            if first_dragon_rate > 70.0 {
                "DOMINATES"
            } else {
                "STRUGGLES WITH"
            },
            first_dragon_rate
        ),
    }
}

/// (taken by team, total)
fn tally<'a>(events: impl Iterator<Item = &'a ObjectiveEvent>) -> (usize, usize) {
    events.fold((0, 0), |(team, total), event| {
        (team + usize::from(event.taken_by_team), total + 1)
    })
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn gold_efficiency(matches: &[&LolMatchStats]) -> GoldEfficiency {
    let in_window = |(from, to): (u32, u32)| -> Vec<f64> {
        matches
            .iter()
            .flat_map(|m| &m.gold_updates)
            .filter(|update| (from..=to).contains(&update.timestamp))
            .map(|update| update.gold_difference as f64)
            .collect()
    };

    let at_10 = in_window(GOLD_WINDOW_10);
    let at_15 = in_window(GOLD_WINDOW_15);
    let at_20 = in_window(GOLD_WINDOW_20);

    let avg_10 = mean(&at_10);
    let avg_15 = mean(&at_15);
    let avg_20 = mean(&at_20);

    let growth_rate = if avg_10 != 0.0 && avg_15 != 0.0 {
        (avg_15 - avg_10) / 5.0 * 60.0
    } else {
        0.0
    };

    GoldEfficiency {
        gold_diff_at_10min: avg_10.round(),
        gold_diff_at_15min: avg_15.round(),
        gold_diff_at_20min: avg_20.round(),
        gold_growth_rate: growth_rate.round(),
        samples_at_10: at_10.len(),
        samples_at_15: at_15.len(),
        samples_at_20: at_20.len(),
        insight: format!(
            "{} mid-game scaling ({:+}g @ 15min)",
            if avg_15 > 0.0 { "Strong" } else { "Weak" },
            avg_15.trunc() as i64
        ),
    }
}

/// Gold difference at 15 minutes for one match, when a snapshot exists
pub fn gold_at_15(stats: &LolMatchStats) -> Option<i64> {
    stats.gold_difference_between(GOLD_WINDOW_15.0, GOLD_WINDOW_15.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    fn stats_of(records: &[crate::data_fetcher::models::MatchRecord]) -> Vec<&LolMatchStats> {
        records.iter().filter_map(|r| r.lol()).collect()
    }

    #[test]
    fn test_jungle_proximity() {
        let records = TestDataBuilder::lol_series("T1", &[true, false]);
        let proximity = jungle_proximity(&stats_of(&records));

        assert_eq!(proximity.total_samples, 8);
        assert_eq!(proximity.top_lane_percent, 50.0);
        assert_eq!(proximity.mid_lane_percent, 25.0);
        assert_eq!(proximity.bot_lane_percent, 25.0);
        assert_eq!(proximity.dominant_lane, Some(Lane::Top));
        assert_eq!(proximity.insight, "Jungler focuses 50.0% on Top lane");
    }

    #[test]
    fn test_objective_control() {
        // Wins take the first dragon, herald and baron; the second dragon always goes to the team
        let records = TestDataBuilder::lol_series("T1", &[true, true, true, false]);
        let control = objective_control(&stats_of(&records));

        assert_eq!(control.first_dragon_rate, 75.0);
        assert_eq!(control.first_dragon_samples, 4);
        assert_eq!(control.total_dragons, 8);
        assert_eq!(control.team_dragons, 7);
        assert_eq!(control.overall_dragon_rate, 87.5);
        assert_eq!(control.herald_control_rate, 75.0);
        assert_eq!(control.baron_control_rate, 75.0);
        assert_eq!(
            control.insight,
            "DOMINATES early objective control (75% first dragon rate)"
        );
    }

    #[test]
    fn test_gold_efficiency() {
        let records = TestDataBuilder::lol_series("T1", &[true, true, false]);
        let gold = gold_efficiency(&stats_of(&records));

        // +1000, +1000, -1000 in every window
        assert_eq!(gold.samples_at_10, 3);
        assert_eq!(gold.samples_at_15, 3);
        assert_eq!(gold.samples_at_20, 3);
        assert_eq!(gold.gold_diff_at_15min, 333.0);
        assert_eq!(gold.gold_growth_rate, 0.0);
        assert_eq!(gold.insight, "Strong mid-game scaling (+333g @ 15min)");
    }

    #[test]
    fn test_losing_team_gold_insight() {
        let records = TestDataBuilder::lol_series("T1", &[false, false]);
        let gold = gold_efficiency(&stats_of(&records));
        assert_eq!(gold.gold_diff_at_15min, -1000.0);
        assert_eq!(gold.insight, "Weak mid-game scaling (-1000g @ 15min)");
    }

    #[test]
    fn test_full_metrics() {
        let records = TestDataBuilder::lol_series("T1", &[true, false]);
        let metrics = analyze(&stats_of(&records));
        assert_eq!(metrics.avg_game_duration_minutes, 30.0);
        assert_eq!(gold_at_15(records[0].lol().unwrap()), Some(1000));
    }

    #[test]
    fn test_no_matches() {
        let metrics = analyze(&[]);
        assert_eq!(metrics.avg_game_duration_minutes, 0.0);
        assert_eq!(metrics.jungle_proximity.dominant_lane, None);
        assert_eq!(metrics.objective_control.first_dragon_rate, 0.0);
        assert_eq!(metrics.gold_efficiency.samples_at_15, 0);
    }
}
