//! The four headline stat cards at the top of the dashboard.

use crossterm::style::Color;

use super::charts::center;
use super::colors::{average_fg, level_fg, muted_fg, text_fg};
use super::page::{Line, Span};
use crate::analysis::{GameMetrics, MetricKind, TeamStatsSummary, performance_level};
use crate::data_fetcher::models::Game;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
    pub color: Color,
}

fn scored(title: &'static str, kind: MetricKind, value: f64, text: String, subtitle: String) -> StatCard {
    StatCard {
        title,
        value: text,
        subtitle,
        color: level_fg(performance_level(value, kind.thresholds())),
    }
}

/// Cards for the summary's game. `game` is used when the summary is empty.
pub fn stat_cards(summary: &TeamStatsSummary, game: Game) -> Vec<StatCard> {
    let win_rate = summary.win_rate * 100.0;
    match (summary.game.unwrap_or(game), summary.game_metrics.as_ref()) {
        (Game::LeagueOfLegends, metrics) => {
            let lol = metrics.and_then(GameMetrics::lol);
            let jungle = lol.map(|m| &m.jungle_proximity);
            let focus = jungle
                .map(|j| j.top_lane_percent.max(j.mid_lane_percent).max(j.bot_lane_percent))
                .unwrap_or(0.0);
            let focus_lane = jungle
                .and_then(|j| j.dominant_lane)
                .map(|lane| format!("{} lane", lane.name()))
                .unwrap_or_else(|| "No samples".to_string());
            let first_dragon = lol.map_or(0.0, |m| m.objective_control.first_dragon_rate);
            let gold_15 = lol.map_or(0.0, |m| m.gold_efficiency.gold_diff_at_15min);

            vec![
                scored(
                    "Win Rate",
                    MetricKind::WinRate,
                    win_rate,
                    format!("{win_rate:.1}%"),
                    format!("{} matches", summary.matches_analyzed),
                ),
                StatCard {
                    title: "Jungle Focus",
                    value: format!("{focus:.0}%"),
                    subtitle: focus_lane,
                    color: average_fg(),
                },
                scored(
                    "First Dragon",
                    MetricKind::FirstDragon,
                    first_dragon,
                    format!("{first_dragon:.0}%"),
                    "Control rate".to_string(),
                ),
                scored(
                    "Gold @ 15min",
                    MetricKind::GoldAt15,
                    gold_15,
                    format!("{:+}", gold_15.trunc() as i64),
                    "Average difference".to_string(),
                ),
            ]
        }
        (Game::Valorant, metrics) => {
            let val = metrics.and_then(GameMetrics::valorant);
            let round_win_rate = val.map_or(0.0, |m| m.round_win_rate);
            let rounds = val.map_or(0, |m| m.total_rounds_played);
            let first_blood = val.map_or(0.0, |m| m.opening_duels.first_blood_rate);
            let eco = val.map_or(0.0, |m| m.economy.eco_conversion_rate);

            vec![
                scored(
                    "Match Win Rate",
                    MetricKind::WinRate,
                    win_rate,
                    format!("{win_rate:.1}%"),
                    format!("{} matches", summary.matches_analyzed),
                ),
                scored(
                    "Round Win Rate",
                    MetricKind::RoundWinRate,
                    round_win_rate,
                    format!("{round_win_rate:.1}%"),
                    format!("{rounds} rounds"),
                ),
                scored(
                    "First Blood Rate",
                    MetricKind::FirstBlood,
                    first_blood,
                    format!("{first_blood:.1}%"),
                    "Opening duels".to_string(),
                ),
                scored(
                    "Eco Conversion",
                    MetricKind::EcoConversion,
                    eco,
                    format!("{eco:.1}%"),
                    "Save round wins".to_string(),
                ),
            ]
        }
    }
}

/// Lays cards out side by side, `card_width` columns each.
pub fn card_rows(cards: &[StatCard], card_width: usize) -> Vec<Line> {
    let row = |cell: &dyn Fn(&StatCard) -> Span| cards.iter().map(cell).collect::<Line>();
    vec![
        row(&|c| Span::colored(center(c.title, card_width), muted_fg())),
        row(&|c| Span::colored(center(&c.value, card_width), c.color).bold()),
        row(&|c| Span::colored(center(&c.subtitle, card_width), text_fg())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::dashboard::colors::{good_fg, poor_fg};
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_lol_cards() {
        let summary = analyze(&TestDataBuilder::lol_series("T1", &[true; 5]));
        let cards = stat_cards(&summary, Game::LeagueOfLegends);
        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Win Rate", "Jungle Focus", "First Dragon", "Gold @ 15min"]);
        assert_eq!(cards[0].value, "100.0%");
        assert_eq!(cards[0].color, good_fg());
        assert_eq!(cards[1].color, average_fg());
    }

    #[test]
    fn test_valorant_cards() {
        let records = vec![
            TestDataBuilder::valorant_match("Sentinels", 0, 5, 13),
            TestDataBuilder::valorant_match("Sentinels", 1, 7, 13),
        ];
        let cards = stat_cards(&analyze(&records), Game::Valorant);
        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Match Win Rate", "Round Win Rate", "First Blood Rate", "Eco Conversion"]
        );
        assert_eq!(cards[0].color, poor_fg());
        assert_eq!(cards[1].subtitle, "38 rounds");
    }

    #[test]
    fn test_empty_summary_uses_requested_game() {
        let cards = stat_cards(&analyze(&[]), Game::Valorant);
        assert_eq!(cards[0].title, "Match Win Rate");
        assert_eq!(cards[0].value, "0.0%");
    }

    #[test]
    fn test_card_rows_have_fixed_width() {
        let summary = analyze(&TestDataBuilder::lol_series("T1", &[true]));
        let rows = card_rows(&stat_cards(&summary, Game::LeagueOfLegends), 18);
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.len(), 4);
            assert!(row.iter().all(|span| span.text.chars().count() == 18));
        }
    }
}
