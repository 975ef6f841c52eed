use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::data_fetcher::models::{
    GameStats, GoldSnapshot, JunglePosition, KillEvent, Lane, LolMatchStats, MatchRecord,
    ObjectiveEvent, RoundRecord, Site, ValorantMatchStats,
};

/// Test utilities for building deterministic match records
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Date of the `day`-th fixture match (day 0 is 2024-01-01 18:00 UTC)
    pub fn match_date(day: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
            + Duration::days(day)
    }

    /// Creates a 30 minute League of Legends game.
    ///
    /// A win has +1000 gold at every snapshot and the team takes the first
    /// dragon, the herald and the baron; a loss mirrors all of it. The
    /// second dragon always goes to the team. The jungler visits Top twice,
    /// Mid and Bot once.
    pub fn lol_match(team: &str, day: i64, won: bool) -> MatchRecord {
        let diff = if won { 1000 } else { -1000 };
        let gold_updates = (1..=6)
            .map(|i| {
                let minute = i * 5;
                GoldSnapshot {
                    timestamp: minute * 60,
                    team_gold: 15000 + i64::from(minute) * 300 + diff,
                    enemy_gold: 15000 + i64::from(minute) * 300,
                    gold_difference: diff,
                }
            })
            .collect();

        let objective = |timestamp: u32, taken_by_team: bool, dragon_type: Option<&str>| {
            ObjectiveEvent {
                timestamp,
                taken_by_team,
                dragon_type: dragon_type.map(str::to_string),
            }
        };

        let jungle_positions = [Lane::Top, Lane::Top, Lane::Mid, Lane::Bot]
            .into_iter()
            .enumerate()
            .map(|(i, lane)| JunglePosition {
                timestamp: 120 * (i as u32 + 1),
                x: 5000,
                y: 5000,
                lane,
            })
            .collect();

        MatchRecord {
            match_id: format!("LOL_{day}"),
            date: Self::match_date(day),
            team: team.to_string(),
            opponent: format!("Team_{day}"),
            won,
            stats: GameStats::LeagueOfLegends(LolMatchStats {
                duration_seconds: 1800,
                kills: (0..3)
                    .map(|k| KillEvent {
                        timestamp: 200 + k * 100,
                        x: 7000,
                        y: 7000,
                        is_first_blood: k == 0,
                    })
                    .collect(),
                dragons: vec![
                    objective(320, won, Some("Infernal")),
                    objective(650, true, Some("Ocean")),
                ],
                barons: vec![objective(1300, won, None)],
                heralds: vec![objective(560, won, None)],
                gold_updates,
                jungle_positions,
            }),
        }
    }

    /// Creates a VALORANT game with the given final score.
    ///
    /// The team wins the first `team_score` rounds and loses the rest, gets
    /// first blood exactly in the rounds it wins, and cycles loadouts
    /// eco (1000) / force (2500) / full (4000). The spike goes down on A in
    /// even rounds and on B in odd ones.
    pub fn valorant_match(team: &str, day: i64, team_score: u32, enemy_score: u32) -> MatchRecord {
        let total = team_score + enemy_score;
        let rounds = (1..=total)
            .map(|n| {
                let won = n <= team_score;
                RoundRecord {
                    round_number: n,
                    won,
                    team_loadout_value: match n % 3 {
                        1 => 1000,
                        2 => 2500,
                        _ => 4000,
                    },
                    enemy_loadout_value: 3900,
                    spike_site: Some(if n % 2 == 0 { Site::A } else { Site::B }),
                    first_blood_to_team: won,
                    round_duration_seconds: 60,
                }
            })
            .collect();

        MatchRecord {
            match_id: format!("VAL_{day}"),
            date: Self::match_date(day),
            team: team.to_string(),
            opponent: format!("Team_{day}"),
            won: team_score > enemy_score,
            stats: GameStats::Valorant(ValorantMatchStats {
                map: "Ascent".to_string(),
                team_score,
                enemy_score,
                rounds,
            }),
        }
    }

    /// League of Legends records following the given outcome sequence, one per day
    pub fn lol_series(team: &str, outcomes: &[bool]) -> Vec<MatchRecord> {
        outcomes
            .iter()
            .enumerate()
            .map(|(day, &won)| Self::lol_match(team, day as i64, won))
            .collect()
    }
}
