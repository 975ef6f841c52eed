//! Terminal dashboard: stat cards, charts, trend and the scouting report.

pub mod cards;
pub mod charts;
pub mod colors;
pub mod export;
pub mod page;

use crate::analysis::TeamStatsSummary;
use crate::analysis::lol::{LolMetrics, gold_at_15};
use crate::analysis::valorant::ValorantMetrics;
use crate::constants::credential_keys;
use crate::constants::mock::LOL_MAP_SIZE;
use crate::constants::ui::{
    BAR_WIDTH, CONTENT_MARGIN, HEATMAP_COLS, HEATMAP_ROWS, PAGE_WIDTH, TIMELINE_MATCHES,
};
use crate::data_fetcher::models::{Game, MatchRecord, ObjectiveEvent, Site};
use crate::data_fetcher::{DataOrigin, LoadOutcome};
use crate::error::AppError;
use crate::pipeline::ScoutAnalysis;
use crate::report::ScoutingReport;

use charts::{bar, center, heat_grid, minute_strip, pad_to_width, signed_bar, sparkline};
use colors::*;
use page::{Page, Span};

pub use export::{default_file_name, export_report, output_path};

const LABEL_WIDTH: usize = 16;

fn content_width() -> usize {
    PAGE_WIDTH - CONTENT_MARGIN
}

fn rule(page: &mut Page) {
    page.push_colored("─".repeat(content_width()), muted_fg());
}

fn title_bar(page: &mut Page, subtitle: &str) {
    let width = content_width();
    page.push(vec![
        Span::colored(center("VANGUARD SCOUT", width), header_fg()).bold(),
    ]);
    page.push_colored(center(subtitle, width), muted_fg());
    rule(page);
}

fn section(page: &mut Page, title: &str) {
    page.blank();
    page.push(vec![Span::colored(title.to_uppercase(), subheader_fg()).bold()]);
}

fn bar_line(page: &mut Page, label: &str, value: f64, max: f64, detail: String) {
    page.push(vec![
        Span::plain(pad_to_width(label, LABEL_WIDTH)),
        Span::colored(bar(value, max, BAR_WIDTH), accent_fg()),
        Span::plain(format!(" {detail}")),
    ]);
}

fn insight(page: &mut Page, text: &str) {
    page.push(vec![Span::colored(format!("» {text}"), text_fg())]);
}

fn header(page: &mut Page, game: Game, outcome: &LoadOutcome) {
    title_bar(page, "Moneyball for Esports");
    page.push(vec![
        Span::plain("Game: "),
        Span::colored(game.display_name(), text_fg()).bold(),
        Span::plain("   Team: "),
        Span::colored(outcome.team_name.as_str(), text_fg()).bold(),
        Span::plain("   Source: "),
        Span::colored(outcome.origin.label(), muted_fg()),
    ]);
    if let DataOrigin::Fallback { reason } = &outcome.origin {
        page.push(vec![
            Span::colored("! ", poor_fg()).bold(),
            Span::colored(
                format!("Live statistics unavailable, showing mock data: {reason}"),
                average_fg(),
            ),
        ]);
    }
}

fn lol_sections(page: &mut Page, metrics: &LolMetrics, records: &[MatchRecord]) {
    let jungle = &metrics.jungle_proximity;
    section(page, "Jungle lane focus");
    for (label, value) in [
        ("Top Lane", jungle.top_lane_percent),
        ("Mid Lane", jungle.mid_lane_percent),
        ("Bot Lane", jungle.bot_lane_percent),
    ] {
        bar_line(page, label, value, 100.0, format!("{value:.1}%"));
    }
    insight(page, &jungle.insight);
    jungle_heatmap(page, records);

    let objectives = &metrics.objective_control;
    section(page, "Objective control");
    bar_line(
        page,
        "First Dragon",
        objectives.first_dragon_rate,
        100.0,
        format!("{:.1}%", objectives.first_dragon_rate),
    );
    for (label, rate, taken, total) in [
        (
            "Dragons",
            objectives.overall_dragon_rate,
            objectives.team_dragons,
            objectives.total_dragons,
        ),
        (
            "Heralds",
            objectives.herald_control_rate,
            objectives.team_heralds,
            objectives.total_heralds,
        ),
        (
            "Barons",
            objectives.baron_control_rate,
            objectives.team_barons,
            objectives.total_barons,
        ),
    ] {
        bar_line(page, label, rate, 100.0, format!("{rate:.1}% ({taken}/{total})"));
    }
    insight(page, &objectives.insight);
    objective_timeline(page, records);

    let gold = &metrics.gold_efficiency;
    section(page, "Gold difference @ 15min per match");
    let per_match: Vec<(&MatchRecord, i64)> = records
        .iter()
        .filter_map(|r| r.lol().and_then(gold_at_15).map(|g| (r, g)))
        .collect();
    let max_abs = per_match
        .iter()
        .map(|(_, g)| g.unsigned_abs())
        .max()
        .unwrap_or(0) as f64;
    for (record, diff) in &per_match {
        let color = if *diff >= 0 { good_fg() } else { poor_fg() };
        page.push(vec![
            Span::plain(pad_to_width(
                &format!("{} {}", record.date.format("%m-%d"), if record.won { "W" } else { "L" }),
                LABEL_WIDTH,
            )),
            Span::colored(signed_bar(*diff as f64, max_abs, BAR_WIDTH / 2), color),
            Span::plain(format!(" {diff:+}")),
        ]);
    }
    page.push_text(format!(
        "Average: {:+} @10  {:+} @15  {:+} @20",
        gold.gold_diff_at_10min.trunc() as i64,
        gold.gold_diff_at_15min.trunc() as i64,
        gold.gold_diff_at_20min.trunc() as i64
    ));
    insight(page, &gold.insight);
}

/// Where the jungler was seen across all matches, top side up.
fn jungle_heatmap(page: &mut Page, records: &[MatchRecord]) {
    let map = f64::from(LOL_MAP_SIZE);
    let points: Vec<(f64, f64)> = records
        .iter()
        .filter_map(MatchRecord::lol)
        .flat_map(|stats| &stats.jungle_positions)
        .map(|p| (f64::from(p.x) / map, f64::from(p.y) / map))
        .collect();
    if points.is_empty() {
        return;
    }

    section(page, "Jungle heatmap");
    let border = format!("+{}+", "-".repeat(HEATMAP_COLS));
    let indent = " ".repeat(LABEL_WIDTH);
    page.push_colored(format!("{indent}{border}"), muted_fg());
    for row in heat_grid(&points, HEATMAP_COLS, HEATMAP_ROWS) {
        page.push(vec![
            Span::plain(indent.as_str()),
            Span::colored("|", muted_fg()),
            Span::colored(row, accent_fg()),
            Span::colored("|", muted_fg()),
        ]);
    }
    page.push_colored(format!("{indent}{border}"), muted_fg());
    page.push_colored(
        format!("{indent}{} positions, dense ░▒▓█", points.len()),
        muted_fg(),
    );
}

/// Minute-by-minute objectives of the most recent matches.
fn objective_timeline(page: &mut Page, records: &[MatchRecord]) {
    let mut recent: Vec<&MatchRecord> = records.iter().filter(|r| r.lol().is_some()).collect();
    if recent.is_empty() {
        return;
    }
    recent.sort_by_key(|r| std::cmp::Reverse(r.date));
    recent.truncate(TIMELINE_MATCHES);
    recent.reverse();

    fn marks(events: &[ObjectiveEvent], symbol: char) -> impl Iterator<Item = (u32, char)> + '_ {
        events.iter().map(move |e| {
            let symbol = if e.taken_by_team {
                symbol
            } else {
                symbol.to_ascii_lowercase()
            };
            (e.timestamp, symbol)
        })
    }

    section(page, "Objective timeline");
    for record in recent {
        let Some(stats) = record.lol() else { continue };
        // Barons last so they win a shared minute
        let events: Vec<(u32, char)> = marks(&stats.dragons, 'D')
            .chain(marks(&stats.heralds, 'H'))
            .chain(marks(&stats.barons, 'B'))
            .collect();
        let minutes = stats.duration_seconds.div_ceil(60) as usize;
        page.push(vec![
            Span::plain(pad_to_width(
                &format!("{} {}", record.date.format("%m-%d"), if record.won { "W" } else { "L" }),
                LABEL_WIDTH,
            )),
            Span::colored(minute_strip(&events, minutes), accent_fg()),
            Span::colored(format!(" {minutes}m"), muted_fg()),
        ]);
    }
    page.push_colored(
        "D/H/B dragon/herald/baron, uppercase = team, lowercase = enemy",
        muted_fg(),
    );
}

fn valorant_sections(page: &mut Page, metrics: &ValorantMetrics) {
    let duels = &metrics.opening_duels;
    section(page, "Opening duels");
    bar_line(
        page,
        "First Blood",
        duels.first_blood_rate,
        100.0,
        format!(
            "{:.1}% ({}/{} rounds)",
            duels.first_blood_rate, duels.rounds_with_first_blood, duels.total_rounds
        ),
    );
    bar_line(
        page,
        "FB Conversion",
        duels.first_blood_conversion,
        100.0,
        format!("{:.1}%", duels.first_blood_conversion),
    );
    insight(page, &duels.insight);

    let sites = &metrics.site_bias;
    section(page, "Site attack bias");
    for site in Site::ALL {
        let stats = sites.sites.iter().find(|s| s.site == site);
        let (percent, win_rate, attacks) =
            stats.map_or((0.0, 0.0, 0), |s| (s.attack_percent, s.win_rate, s.attacks));
        bar_line(
            page,
            &format!("{}-Site", site.name()),
            percent,
            100.0,
            format!("{percent:.1}% ({attacks} plants, {win_rate:.1}% won)"),
        );
    }
    insight(page, &sites.insight);

    let economy = &metrics.economy;
    section(page, "Economy");
    for (label, rate, rounds) in [
        ("Eco", economy.eco_conversion_rate, economy.eco_rounds_played),
        ("Force Buy", economy.force_buy_winrate, economy.force_rounds_played),
        ("Full Buy", economy.full_buy_winrate, economy.full_buy_rounds_played),
    ] {
        bar_line(page, label, rate, 100.0, format!("{rate:.1}% won ({rounds} rounds)"));
    }
    insight(page, &economy.insight);
}

fn trend_section(page: &mut Page, summary: &TeamStatsSummary) {
    section(page, "Form");
    let rolling = &summary.rolling;
    page.push(vec![
        Span::plain(pad_to_width(
            &format!("Last {}", rolling.trend.len()),
            LABEL_WIDTH,
        )),
        Span::colored(sparkline(&rolling.trend), accent_fg()),
        Span::plain(format!("  {:.1}% rolling win rate", rolling.average * 100.0)),
    ]);
    let consistency = &summary.consistency;
    let mut line = format!(
        "Consistency score {:.2} (outcome variance {:.3})",
        consistency.score, consistency.outcome_variance
    );
    if let Some(spread) = &consistency.primary_metric {
        line.push_str(&format!(
            ", {} {:+.0} ± {:.0}",
            spread.metric, spread.mean, spread.std_dev
        ));
    }
    page.push_colored(line, muted_fg());
}

fn strengths_section(page: &mut Page, summary: &TeamStatsSummary) {
    section(page, "Strengths");
    if summary.strengths.is_empty() {
        page.push_colored("None stand out", muted_fg());
    }
    for strength in &summary.strengths {
        page.push_colored(format!("+ {strength}"), good_fg());
    }
    section(page, "Weaknesses");
    if summary.weaknesses.is_empty() {
        page.push_colored("None stand out", muted_fg());
    }
    for weakness in &summary.weaknesses {
        page.push_colored(format!("- {weakness}"), poor_fg());
    }
}

/// Statistics part of the dashboard, everything above the report.
pub fn statistics_page(analysis: &ScoutAnalysis) -> Page {
    let summary = &analysis.summary;
    let game = analysis.context.game;
    let mut page = Page::new();

    header(&mut page, game, &analysis.outcome);
    page.blank();

    let card_width = content_width() / 4;
    for row in cards::card_rows(&cards::stat_cards(summary, game), card_width) {
        page.push(row);
    }

    if summary.is_empty() {
        page.blank();
        page.push_colored("No match data found", poor_fg());
        return page;
    }

    match summary.game_metrics.as_ref() {
        Some(metrics) => {
            if let Some(lol) = metrics.lol() {
                lol_sections(&mut page, lol, &analysis.outcome.records);
            }
            if let Some(val) = metrics.valorant() {
                valorant_sections(&mut page, val);
            }
        }
        None => page.push_colored("No game metrics available", muted_fg()),
    }

    trend_section(&mut page, summary);
    strengths_section(&mut page, summary);
    page
}

/// Full dashboard with the generated report at the bottom.
pub fn dashboard_page(analysis: &ScoutAnalysis, report: &ScoutingReport) -> Page {
    let mut page = statistics_page(analysis);
    page.blank();
    rule(&mut page);
    page.push(vec![
        Span::colored("AI SCOUTING REPORT", subheader_fg()).bold(),
        Span::colored(format!("  ({})", report.provider), muted_fg()),
    ]);
    page.blank();
    for line in report.text.lines() {
        page.push_colored(line, text_fg());
    }
    page
}

fn hint(error: &AppError) -> String {
    match error {
        AppError::GenerationFailed { provider, .. } => {
            let key = [
                ("OpenAI", credential_keys::OPENAI),
                ("Gemini", credential_keys::GEMINI),
                ("OpenRouter", credential_keys::OPENROUTER),
            ]
            .into_iter()
            .find(|(name, _)| *name == provider.as_str())
            .map(|(_, key)| key);
            match key {
                Some(key) => format!(
                    "Check {key} (secrets.toml, environment or --llm-api-key), or use --provider mock."
                ),
                None => "Try again or use --provider mock.".to_string(),
            }
        }
        AppError::InvalidRequest(_) => {
            "Use --team with a name or id and --matches with a positive count.".to_string()
        }
        AppError::Config(_) | AppError::TomlDeserialize(_) => {
            format!(
                "Fix the configuration file or remove it: {}",
                crate::config::Config::get_config_path()
            )
        }
        _ => "Run without --live to use mock data.".to_string(),
    }
}

/// Shown instead of a report when the run fails.
pub fn error_page(analysis: Option<&ScoutAnalysis>, error: &AppError) -> Page {
    let mut page = match analysis {
        Some(analysis) => {
            let mut page = Page::new();
            header(&mut page, analysis.context.game, &analysis.outcome);
            page
        }
        None => {
            let mut page = Page::new();
            title_bar(&mut page, "Moneyball for Esports");
            page
        }
    };
    page.blank();
    page.push(vec![
        Span::colored("An error occurred while generating the report", poor_fg()).bold(),
    ]);
    page.push_colored(error.to_string(), poor_fg());
    page.blank();
    page.push_colored(hint(error), average_fg());
    page
}
