//! Template report computed from the analysis, used when no language model is configured.

use super::providers::TextGenerator;
use super::{ReportContext, ScoutPrompt};
use crate::analysis::lol::LolMetrics;
use crate::analysis::valorant::ValorantMetrics;
use crate::data_fetcher::models::{Lane, Site};
use crate::error::AppError;

const FOOTER: &str = "---\n*Generated by Vanguard AI Scout | \"Moneyball for Esports\"*\n";

/// Offline "coach" that fills a fixed template. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineScout;

impl OfflineScout {
    pub fn render(context: &ReportContext) -> String {
        let metrics = context.summary.game_metrics.as_ref();
        match (metrics.and_then(|m| m.lol()), metrics.and_then(|m| m.valorant())) {
            (Some(lol), _) => render_lol(context, lol),
            (_, Some(valorant)) => render_valorant(context, valorant),
            _ => render_empty(context),
        }
    }
}

impl TextGenerator for OfflineScout {
    fn provider_name(&self) -> &'static str {
        "Offline scout"
    }

    async fn generate(&self, prompt: &ScoutPrompt<'_>) -> Result<String, AppError> {
        Ok(Self::render(prompt.context))
    }
}

fn header(context: &ReportContext) -> String {
    format!("---\n## SCOUTING REPORT: {}\n\n", context.team_name)
}

fn render_empty(context: &ReportContext) -> String {
    format!(
        "{}No {} matches were available for analysis, so there are no patterns to exploit yet.\n\n{FOOTER}",
        header(context),
        context.game.display_name()
    )
}

fn pick<T, U>(condition: bool, yes: T, no: U) -> String
where
    T: Into<String>,
    U: Into<String>,
{
    if condition { yes.into() } else { no.into() }
}

fn render_lol(context: &ReportContext, metrics: &LolMetrics) -> String {
    let jungle = &metrics.jungle_proximity;
    let objectives = &metrics.objective_control;
    let gold = &metrics.gold_efficiency;

    let lanes = [
        (Lane::Top, jungle.top_lane_percent),
        (Lane::Mid, jungle.mid_lane_percent),
        (Lane::Bot, jungle.bot_lane_percent),
    ];
    // First minimum wins ties
    let (weakest, weakest_percent) = lanes
        .iter()
        .copied()
        .fold(lanes[0], |low, lane| if lane.1 < low.1 { lane } else { low });
    let weakest = weakest.name();

    let first_dragon = objectives.first_dragon_rate;
    let gold_at_15 = gold.gold_diff_at_15min.trunc() as i64;
    let weak_early = first_dragon < 50.0;
    let bleeds_gold = gold_at_15 < 0;

    let mut report = header(context);
    report.push_str(&format!(
        "### Key Patterns\n\n\
         **Win Rate:** {:.1}% ({} matches analyzed)\n\n\
         1. **Jungle Pathing is PREDICTABLE** - Heavy focus on certain lanes leaves others vulnerable\n\
         2. **Early Objective Control is {}** - {:.0}% first dragon rate\n\
         3. **Mid-Game Scaling Shows {}** - {:+} gold @ 15min\n\n",
        context.win_rate * 100.0,
        context.matches_analyzed,
        pick(first_dragon > 70.0, "ELITE", "INCONSISTENT"),
        first_dragon,
        pick(gold_at_15 > 0, "STRENGTH", "WEAKNESS"),
        gold_at_15,
    ));

    report.push_str(&format!(
        "### Jungle Pressure Map\n\n\
         - Top Lane: {:.1}%\n\
         - Mid Lane: {:.1}%\n\
         - Bot Lane: {:.1}%\n\n\
         **CRITICAL INSIGHT:** {weakest} lane receives the LEAST jungle attention ({weakest_percent:.1}%). This is an exploitable weakness.\n\n",
        jungle.top_lane_percent, jungle.mid_lane_percent, jungle.bot_lane_percent,
    ));

    report.push_str(&format!(
        "### Objective Control Assessment\n\n\
         **First Dragon Control:** {first_dragon:.1}%\n\
         **Overall Dragon Control:** {:.1}%\n\
         **Rift Herald Control:** {:.1}%\n\
         **Baron Control:** {:.1}%\n\n{}\n\n",
        objectives.overall_dragon_rate,
        objectives.herald_control_rate,
        objectives.baron_control_rate,
        pick(
            weak_early,
            "They STRUGGLE to secure early objectives - contest every dragon spawn!",
            "Strong early objective control - must deny vision and contest aggressively."
        ),
    ));

    report.push_str(&format!(
        "### Economic Trends\n\n\
         **Gold @ 10min:** {:+}\n\
         **Gold @ 15min:** {gold_at_15:+}\n\
         **Gold @ 20min:** {:+}\n\n{}\n\n",
        gold.gold_diff_at_10min.trunc() as i64,
        gold.gold_diff_at_20min.trunc() as i64,
        pick(
            bleeds_gold,
            "They bleed gold in the mid-game - extend games and scale!",
            "They accelerate leads - must survive early game and prevent snowball."
        ),
    ));

    report.push_str(&format!(
        "### THE WIN CONDITION\n\n\
         **Their Fatal Flaw:** {weakest} lane is ABANDONED by their jungler ({weakest_percent:.1}% presence). {}\n\n\
         **Our Counter-Strategy:**\n\
         1. **Camp {weakest} Lane** - Set up repeated ganks in the 8-15 minute window\n\
         2. **Contest Every Drake** - Their {first_dragon:.0}% first dragon rate means we can steal early momentum\n\
         3. {}\n\n\
         **Timing Window:** **Minutes 8-15** - Their jungler is predictable, and their macro is weakest here.\n\n\
         **Target Priority:**\n\
         1. {weakest} laner (most isolated)\n\
         2. Contest dragon at 5:00, 10:00, 15:00 spawns\n\
         3. Deny vision around Baron pit after 20:00\n\n",
        pick(
            weak_early,
            "Early objective control is weak.",
            "They over-commit to objectives - can be baited."
        ),
        pick(
            bleeds_gold,
            "**Survive to 15 Minutes** - They lose gold leads, we scale better",
            "**Punish Their Early Aggression** - Force skirmishes before they establish vision control"
        ),
    ));

    report.push_str(FOOTER);
    report
}

fn render_valorant(context: &ReportContext, metrics: &ValorantMetrics) -> String {
    let duels = &metrics.opening_duels;
    let sites = &metrics.site_bias;
    let economy = &metrics.economy;

    let fb_rate = duels.first_blood_rate;
    let eco = economy.eco_conversion_rate;
    let favorite = sites.favorite_site.unwrap_or(Site::A);
    let site_line = |site: Site| {
        sites
            .sites
            .iter()
            .find(|s| s.site == site)
            .map(|s| (s.attack_percent, s.win_rate))
            .unwrap_or((0.0, 0.0))
    };
    let favorite_percent = site_line(favorite).0;
    let loses_opening = fb_rate < 50.0;
    let throws_ecos = eco < 15.0;

    let mut report = header(context);
    report.push_str(&format!(
        "### Key Patterns\n\n\
         **Match Win Rate:** {:.1}% | **Round Win Rate:** {:.1}%\n\
         **Matches Analyzed:** {} | **Total Rounds:** {}\n\n\
         1. **Opening Duels are {}** - {fb_rate:.1}% first blood rate\n\
         2. **HEAVILY PREDICTABLE Site Bias** - {favorite}-Site is attacked {favorite_percent:.0}% of the time\n\
         3. **Eco Rounds are {}** - {eco:.1}% win rate on saves\n\n",
        context.win_rate * 100.0,
        metrics.round_win_rate,
        context.matches_analyzed,
        metrics.total_rounds_played,
        pick(fb_rate > 55.0, "ELITE", "INCONSISTENT"),
        pick(eco > 20.0, "DANGEROUS", "PREDICTABLE"),
        favorite = favorite.name(),
    ));

    report.push_str(&format!(
        "### Opening Engagement Analysis\n\n\
         **First Blood Rate:** {fb_rate:.1}%\n\
         **First Blood Conversion:** {:.1}%\n\n\
         **Rounds Won WITH First Blood:** {}\n\
         **Rounds Won WITHOUT First Blood:** {}\n\n{}\n\n",
        duels.first_blood_conversion,
        duels.rounds_won_with_fb,
        duels.rounds_won_without_fb,
        pick(
            loses_opening,
            "They CRUMBLE when losing the opening duel - aggressive early peaks will tilt them!",
            "Strong early fraggers - must trade carefully and play post-plant."
        ),
    ));

    report.push_str("### Site Attack Tendencies\n\n");
    for site in Site::ALL {
        let (percent, win_rate) = site_line(site);
        report.push_str(&format!(
            "**Site {} Attacks:** {percent:.1}% (Win Rate: {win_rate:.1}%)\n",
            site.name()
        ));
    }
    report.push_str(&format!(
        "\n**EXPLOITABLE BIAS:** They attack **{favorite}-Site {favorite_percent:.0}%** of the time. Stack {favorite} and force rotations.\n\n",
        favorite = favorite.name(),
    ));

    report.push_str(&format!(
        "### Economic Discipline\n\n\
         **Eco Round Conversion:** {eco:.1}%\n\
         **Force Buy Win Rate:** {:.1}%\n\
         **Full Buy Win Rate:** {:.1}%\n\n{}\n\n",
        economy.force_buy_winrate,
        economy.full_buy_winrate,
        pick(
            throws_ecos,
            "They throw away eco rounds - sheriffs and spectres shut them down!",
            "Dangerous on eco - must respect their aim and positioning."
        ),
    ));

    report.push_str(&format!(
        "### THE WIN CONDITION\n\n\
         **Their Fatal Flaw:** OVER-COMMITMENT to **{favorite}-Site** ({favorite_percent:.0}% of attacks). {}\n\n\
         **Our Counter-Strategy:**\n\
         1. **Stack {favorite}-Site Early** - Put 3 players on {favorite} by default, they'll walk into the trap\n\
         2. **Challenge Opening Duels Aggressively** - {}\n\
         3. **{}** - {}\n\n\
         **Map Control Focus:**\n\
         - **Primary:** {favorite}-Site default setup (they WILL come here)\n\
         - **Secondary:** Mid control to fast-rotate when they finally hit other sites\n\n\
         **Round Type Exploit:**\n\
         - **Eco Rounds:** {}\n\
         - **Full Buy Rounds:** {}\n\n",
        pick(
            loses_opening,
            "They cannot win without first blood.",
            "Predictable eco-round strats."
        ),
        pick(
            loses_opening,
            "Take first blood and they fall apart",
            "Trade 1-for-1 and deny their entry fragger"
        ),
        pick(throws_ecos, "Punish Eco Rounds Relentlessly", "Respect Their Aim on Ecos"),
        pick(
            throws_ecos,
            "Sheriff headshots are free - push aggressively",
            "Play default and avoid risky peeks"
        ),
        pick(
            throws_ecos,
            "Push aggressively, they have no answer",
            "Play disciplined, they CAN upset"
        ),
        pick(
            loses_opening,
            "Deny their entry fragger and they crumble",
            "Trade carefully and play post-plant"
        ),
        favorite = favorite.name(),
    ));

    report.push_str(FOOTER);
    report
}
