//! VALORANT metrics: opening duels, site bias, economy

use serde::Serialize;

use super::round1;
use crate::constants::analysis::{ECO_LOADOUT_MAX, FULL_BUY_LOADOUT_MIN};
use crate::data_fetcher::models::{RoundRecord, Site, ValorantMatchStats};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValorantMetrics {
    pub round_win_rate: f64,
    pub total_rounds_played: usize,
    pub opening_duels: OpeningDuels,
    pub site_bias: SiteBias,
    pub economy: Economy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningDuels {
    pub first_blood_rate: f64,
    /// Share of first-blood rounds that were won
    pub first_blood_conversion: f64,
    pub rounds_with_first_blood: usize,
    pub rounds_won_with_fb: usize,
    pub rounds_won_without_fb: usize,
    pub total_rounds: usize,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteStats {
    pub site: Site,
    pub attacks: usize,
    pub attack_percent: f64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteBias {
    pub sites: Vec<SiteStats>,
    pub total_spike_plants: usize,
    pub favorite_site: Option<Site>,
    pub favorite_site_attacks: usize,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Economy {
    pub eco_conversion_rate: f64,
    pub eco_rounds_played: usize,
    pub eco_rounds_won: usize,
    pub force_buy_winrate: f64,
    pub force_rounds_played: usize,
    pub full_buy_winrate: f64,
    pub full_buy_rounds_played: usize,
    pub insight: String,
}

pub fn analyze(matches: &[&ValorantMatchStats]) -> ValorantMetrics {
    let rounds: Vec<&RoundRecord> = matches.iter().flat_map(|m| &m.rounds).collect();
    let rounds_won = rounds.iter().filter(|r| r.won).count();

    ValorantMetrics {
        round_win_rate: round1(percentage(rounds_won, rounds.len())),
        total_rounds_played: rounds.len(),
        opening_duels: opening_duels(&rounds),
        site_bias: site_bias(&rounds),
        economy: economy(&rounds),
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn opening_duels(rounds: &[&RoundRecord]) -> OpeningDuels {
    let with_fb = rounds.iter().filter(|r| r.first_blood_to_team).count();
    let won_with_fb = rounds
        .iter()
        .filter(|r| r.first_blood_to_team && r.won)
        .count();
    let won_without_fb = rounds
        .iter()
        .filter(|r| !r.first_blood_to_team && r.won)
        .count();

    let fb_rate = percentage(with_fb, rounds.len());
    let conversion = percentage(won_with_fb, with_fb);

    OpeningDuels {
        first_blood_rate: round1(fb_rate),
        first_blood_conversion: round1(conversion),
        rounds_with_first_blood: with_fb,
        rounds_won_with_fb: won_with_fb,
        rounds_won_without_fb: won_without_fb,
        total_rounds: rounds.len(),
        insight: format!(
            "{} opening duelist ({:.1}% FB rate, {:.1}% conversion)",
            if fb_rate > 55.0 { "ELITE" } else { "AVERAGE" },
            fb_rate,
            conversion
        ),
    }
}

fn site_bias(rounds: &[&RoundRecord]) -> SiteBias {
    let total_plants = rounds.iter().filter(|r| r.spike_planted()).count();

    let sites: Vec<SiteStats> = Site::ALL
        .iter()
        .map(|&site| {
            let attacks = rounds.iter().filter(|r| r.spike_site == Some(site)).count();
            let wins = rounds
                .iter()
                .filter(|r| r.spike_site == Some(site) && r.won)
                .count();
            SiteStats {
                site,
                attacks,
                attack_percent: round1(percentage(attacks, total_plants)),
                win_rate: round1(percentage(wins, attacks)),
            }
        })
        .collect();

    // First site wins ties
    let favorite = sites
        .iter()
        .filter(|s| s.attacks > 0)
        .fold(None::<&SiteStats>, |best, s| match best {
            Some(b) if b.attacks >= s.attacks => Some(b),
            _ => Some(s),
        });

    let insight = match favorite {
        Some(f) => format!(
            "HEAVILY favors {}-Site ({:.0}% of attacks)",
            f.site.name(),
            percentage(f.attacks, total_plants)
        ),
        None => "No spike plants recorded".to_string(),
    };

    SiteBias {
        total_spike_plants: total_plants,
        favorite_site: favorite.map(|f| f.site),
        favorite_site_attacks: favorite.map_or(0, |f| f.attacks),
        insight,
        sites,
    }
}

fn economy(rounds: &[&RoundRecord]) -> Economy {
    let (eco_won, eco_played) = band(rounds, |v| v < ECO_LOADOUT_MAX);
    let (force_won, force_played) =
        band(rounds, |v| (ECO_LOADOUT_MAX..FULL_BUY_LOADOUT_MIN).contains(&v));
    let (full_won, full_played) = band(rounds, |v| v >= FULL_BUY_LOADOUT_MIN);

    let eco_rate = percentage(eco_won, eco_played);

    Economy {
        eco_conversion_rate: round1(eco_rate),
        eco_rounds_played: eco_played,
        eco_rounds_won: eco_won,
        force_buy_winrate: round1(percentage(force_won, force_played)),
        force_rounds_played: force_played,
        full_buy_winrate: round1(percentage(full_won, full_played)),
        full_buy_rounds_played: full_played,
        insight: format!(
            "{} on eco rounds ({:.1}% win rate)",
            if eco_rate > 20.0 {
                "DANGEROUS"
            } else {
                "PREDICTABLE"
            },
            eco_rate
        ),
    }
}

/// (won, played) over rounds whose team loadout satisfies `keep`
fn band(rounds: &[&RoundRecord], keep: impl Fn(u32) -> bool) -> (usize, usize) {
    rounds
        .iter()
        .filter(|r| keep(r.team_loadout_value))
        .fold((0, 0), |(won, played), r| (won + usize::from(r.won), played + 1))
}
