//! Synthetic match data for demos and for the statistics-feed fallback.
//!
//! Distributions follow what a real League of Legends or VALORANT team
//! would roughly produce: longer, bloodier games on wins, objective control
//! skewed toward the winner, first-to-13 VALORANT scores with pistol rounds
//! on 1 and 13.

use chrono::{Duration, Utc};
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constants::mock::{
    DRAGON_TYPES, LOL_MAP_SIZE, LOL_MATCH_SPACING_DAYS, VALORANT_MAPS,
    VALORANT_MATCH_SPACING_DAYS,
};
use crate::data_fetcher::models::{
    Game, GameStats, GoldSnapshot, JunglePosition, KillEvent, Lane, LolMatchStats, MatchRecord,
    ObjectiveEvent, RoundRecord, Site, ValorantMatchStats,
};

const DRAGON_SPAWN_INTERVAL: u32 = 300;
const LAST_DRAGON_SPAWN: u32 = 2400;
const BARON_SPAWN: u32 = 1200;
const HERALD_SPAWN: u32 = 480;
const HERALD_DESPAWN: u32 = 1185;
const PISTOL_ROUNDS: [u32; 2] = [1, 13];

/// Random match generator. Seeded generators produce identical output for
/// identical requests.
pub struct MockGenerator {
    rng: SmallRng,
    base_win_rate: f64,
}

impl MockGenerator {
    pub fn new(seed: Option<u64>, base_win_rate: f64) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            rng,
            base_win_rate: base_win_rate.clamp(0.0, 1.0),
        }
    }

    /// Generates `count` matches in ascending date order, the last one
    /// played a few days ago.
    pub fn generate(&mut self, game: Game, team: &str, count: usize) -> Vec<MatchRecord> {
        let outcomes: Vec<bool> = (0..count)
            .map(|_| self.rng.random_bool(self.base_win_rate))
            .collect();
        self.generate_with_outcomes(game, team, &outcomes)
    }

    /// A shuffled outcome sequence of length `count` with exactly
    /// `wins.min(count)` wins.
    pub fn outcomes_with_wins(&mut self, count: usize, wins: usize) -> Vec<bool> {
        let mut outcomes: Vec<bool> = (0..count).map(|i| i < wins).collect();
        outcomes.shuffle(&mut self.rng);
        outcomes
    }

    /// Generates one match per outcome, oldest first, with every other field
    /// drawn to agree with that outcome.
    pub fn generate_with_outcomes(
        &mut self,
        game: Game,
        team: &str,
        outcomes: &[bool],
    ) -> Vec<MatchRecord> {
        let count = outcomes.len();
        debug!(
            "Generating {count} mock {} matches for {team}",
            game.code()
        );

        outcomes
            .iter()
            .enumerate()
            .map(|(position, &won)| {
                // Match 1 is the most recent one
                let match_number = count - position;
                match game {
                    Game::LeagueOfLegends => self.lol_match(team, match_number, won),
                    Game::Valorant => self.valorant_match(team, match_number, won),
                }
            })
            .collect()
    }

    fn lol_match(&mut self, team: &str, match_number: usize, won: bool) -> MatchRecord {
        let rng = &mut self.rng;
        let duration: u32 = rng.random_range(1500..=2400);

        let num_kills = if won {
            rng.random_range(15..=35)
        } else {
            rng.random_range(8..=20)
        };
        let mut kills: Vec<KillEvent> = (0..num_kills)
            .map(|_| KillEvent {
                timestamp: rng.random_range(180..=duration),
                x: rng.random_range(1000..=LOL_MAP_SIZE - 1000),
                y: rng.random_range(1000..=LOL_MAP_SIZE - 1000),
                is_first_blood: false,
            })
            .collect();
        kills.sort_by_key(|k| k.timestamp);
        if let Some(first) = kills.first_mut() {
            first.is_first_blood = true;
        }

        let mut dragons = Vec::new();
        let mut spawn = DRAGON_SPAWN_INTERVAL;
        while spawn <= LAST_DRAGON_SPAWN && spawn < duration {
            if rng.random_bool(0.8) {
                dragons.push(ObjectiveEvent {
                    timestamp: spawn + rng.random_range(0..=120),
                    taken_by_team: rng.random_bool(if won { 0.75 } else { 0.35 }),
                    dragon_type: DRAGON_TYPES.choose(rng).map(|d| d.to_string()),
                });
            }
            spawn += DRAGON_SPAWN_INTERVAL;
        }

        let mut barons = Vec::new();
        if duration > BARON_SPAWN {
            for _ in 0..rng.random_range(0..=2) {
                barons.push(ObjectiveEvent {
                    timestamp: rng.random_range(BARON_SPAWN..=duration - 60),
                    taken_by_team: rng.random_bool(if won { 0.8 } else { 0.2 }),
                    dragon_type: None,
                });
            }
        }
        barons.sort_by_key(|b| b.timestamp);

        let mut heralds = Vec::new();
        if duration > HERALD_SPAWN {
            for _ in 0..rng.random_range(0..=2) {
                heralds.push(ObjectiveEvent {
                    timestamp: rng.random_range(HERALD_SPAWN..=HERALD_DESPAWN.min(duration)),
                    taken_by_team: rng.random_bool(if won { 0.7 } else { 0.3 }),
                    dragon_type: None,
                });
            }
        }
        heralds.sort_by_key(|h| h.timestamp);

        let base_advantage: i64 = if won { 500 } else { -500 };
        let gold_updates = (5..=duration / 60)
            .step_by(5)
            .map(|minute| {
                let minute = i64::from(minute);
                let gold_difference =
                    base_advantage + rng.random_range(-300..=300) + minute * 50;
                GoldSnapshot {
                    timestamp: (minute * 60) as u32,
                    team_gold: 15000 + minute * 300 + gold_difference,
                    enemy_gold: 15000 + minute * 300,
                    gold_difference,
                }
            })
            .collect();

        let mut jungle_positions: Vec<JunglePosition> = (0..rng.random_range(100..=200))
            .map(|_| {
                let timestamp = rng.random_range(0..=duration);
                let bias: f64 = rng.random();
                let (lane, x, y) = if bias < 0.35 {
                    (Lane::Top, rng.random_range(1000..=7000), rng.random_range(10000..=14000))
                } else if bias < 0.70 {
                    (Lane::Mid, rng.random_range(5000..=10000), rng.random_range(5000..=10000))
                } else {
                    (Lane::Bot, rng.random_range(8000..=14000), rng.random_range(1000..=5000))
                };
                JunglePosition { timestamp, x, y, lane }
            })
            .collect();
        jungle_positions.sort_by_key(|j| j.timestamp);

        MatchRecord {
            match_id: format!("LOL_{match_number}"),
            date: Utc::now() - Duration::days(match_number as i64 * LOL_MATCH_SPACING_DAYS),
            team: team.to_string(),
            opponent: format!("Team_{match_number}"),
            won,
            stats: GameStats::LeagueOfLegends(LolMatchStats {
                duration_seconds: duration,
                kills,
                dragons,
                barons,
                heralds,
                gold_updates,
                jungle_positions,
            }),
        }
    }

    fn valorant_match(&mut self, team: &str, match_number: usize, won: bool) -> MatchRecord {
        let rng = &mut self.rng;

        let (team_score, enemy_score) = if won {
            let team_score: u32 = rng.random_range(13..=15);
            let enemy_score = if team_score == 13 {
                rng.random_range(8..=11)
            } else {
                team_score - 2
            };
            (team_score, enemy_score)
        } else {
            let team_score: u32 = rng.random_range(8..=12);
            (team_score, 13)
        };
        let total_rounds = team_score + enemy_score;

        // Exactly `team_score` round wins, with the match winner taking the last round
        let mut round_outcomes: Vec<bool> = (0..total_rounds).map(|r| r < team_score).collect();
        round_outcomes.shuffle(rng);
        if let Some(last_winner_round) = round_outcomes.iter().rposition(|&w| w == won) {
            let last = round_outcomes.len() - 1;
            round_outcomes.swap(last_winner_round, last);
        }

        let rounds = round_outcomes
            .into_iter()
            .enumerate()
            .map(|(index, round_won)| {
                let round_number = index as u32 + 1;
                let (team_loadout_value, enemy_loadout_value) =
                    if PISTOL_ROUNDS.contains(&round_number) {
                        (800, 800)
                    } else {
                        (random_loadout(rng), random_loadout(rng))
                    };
                let spike_site = if rng.random_bool(0.85) {
                    Site::ALL.choose(rng).copied()
                } else {
                    None
                };
                RoundRecord {
                    round_number,
                    won: round_won,
                    team_loadout_value,
                    enemy_loadout_value,
                    spike_site,
                    first_blood_to_team: rng.random_bool(0.5),
                    round_duration_seconds: rng.random_range(30..=100),
                }
            })
            .collect();

        MatchRecord {
            match_id: format!("VAL_{match_number}"),
            date: Utc::now() - Duration::days(match_number as i64 * VALORANT_MATCH_SPACING_DAYS),
            team: team.to_string(),
            opponent: format!("Team_{match_number}"),
            won,
            stats: GameStats::Valorant(ValorantMatchStats {
                map: VALORANT_MAPS
                    .choose(rng)
                    .map(|m| m.to_string())
                    .unwrap_or_default(),
                team_score,
                enemy_score,
                rounds,
            }),
        }
    }
}

/// Eco, force buy or full buy, equally likely
fn random_loadout(rng: &mut SmallRng) -> u32 {
    match rng.random_range(0..3) {
        0 => rng.random_range(800..=1500),
        1 => rng.random_range(2000..=3000),
        _ => rng.random_range(3500..=5000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_count_in_date_order() {
        let mut generator = MockGenerator::new(Some(7), 0.7);
        for game in [Game::LeagueOfLegends, Game::Valorant] {
            let records = generator.generate(game, "Cloud9", 12);
            assert_eq!(records.len(), 12);
            assert!(records.windows(2).all(|w| w[0].date < w[1].date));
            assert!(records.iter().all(|r| r.game() == game));
            assert!(records.iter().all(|r| r.team == "Cloud9"));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = MockGenerator::new(Some(42), 0.7).generate(Game::Valorant, "Sentinels", 5);
        let b = MockGenerator::new(Some(42), 0.7).generate(Game::Valorant, "Sentinels", 5);
        let strip = |records: Vec<MatchRecord>| -> Vec<_> {
            records.into_iter().map(|r| (r.won, r.stats)).collect()
        };
        assert_eq!(strip(a), strip(b));
    }

    #[test]
    fn test_base_win_rate_extremes() {
        let all_wins = MockGenerator::new(Some(1), 1.0).generate(Game::LeagueOfLegends, "T1", 8);
        assert!(all_wins.iter().all(|r| r.won));

        let all_losses = MockGenerator::new(Some(1), 0.0).generate(Game::LeagueOfLegends, "T1", 8);
        assert!(all_losses.iter().all(|r| !r.won));
    }

    #[test]
    fn test_first_blood_is_earliest_kill() {
        let records = MockGenerator::new(Some(11), 0.5).generate(Game::LeagueOfLegends, "FNC", 15);
        for record in &records {
            let kills = &record.lol().expect("lol stats").kills;
            assert!(kills.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            assert_eq!(kills.iter().filter(|k| k.is_first_blood).count(), 1);
            assert!(kills[0].is_first_blood);
        }
    }

    #[test]
    fn test_lol_fields_within_bounds() {
        let records = MockGenerator::new(Some(3), 0.5).generate(Game::LeagueOfLegends, "G2", 10);
        for record in &records {
            let stats = record.lol().expect("lol stats");
            assert!((1500..=2400).contains(&stats.duration_seconds));
            let kill_range = if record.won { 15..=35 } else { 8..=20 };
            assert!(kill_range.contains(&stats.kills.len()));
            assert!(stats.kills.first().is_some_and(|k| k.is_first_blood));
            assert!((100..=200).contains(&stats.jungle_positions.len()));
            assert!(stats.barons.len() <= 2 && stats.heralds.len() <= 2);
            assert!(stats.dragons.iter().all(|d| d.dragon_type.is_some()));
            assert!(
                stats
                    .gold_updates
                    .windows(2)
                    .all(|w| w[0].timestamp < w[1].timestamp)
            );
        }
    }

    #[test]
    fn test_valorant_scores_agree_with_outcome() {
        let outcomes = [true, false, true, true, false, false];
        let records = MockGenerator::new(Some(11), 0.5).generate_with_outcomes(
            Game::Valorant,
            "FNATIC",
            &outcomes,
        );
        for (record, &won) in records.iter().zip(outcomes.iter()) {
            assert_eq!(record.won, won);
            let stats = record.valorant().expect("valorant stats");
            assert_eq!(stats.team_score > stats.enemy_score, won);
            assert_eq!(stats.rounds.len() as u32, stats.team_score + stats.enemy_score);
            let rounds_won = stats.rounds.iter().filter(|r| r.won).count() as u32;
            assert_eq!(rounds_won, stats.team_score);
            assert_eq!(stats.rounds.last().map(|r| r.won), Some(won));
            assert_eq!(stats.rounds[0].team_loadout_value, 800);
            assert!(VALORANT_MAPS.contains(&stats.map.as_str()));
        }
    }

    #[test]
    fn test_outcomes_with_wins() {
        let mut generator = MockGenerator::new(Some(5), 0.7);
        let outcomes = generator.outcomes_with_wins(20, 13);
        assert_eq!(outcomes.len(), 20);
        assert_eq!(outcomes.iter().filter(|&&w| w).count(), 13);

        let capped = generator.outcomes_with_wins(4, 9);
        assert!(capped.iter().all(|&w| w));
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        let records = MockGenerator::new(None, 0.7).generate(Game::LeagueOfLegends, "C9", 0);
        assert!(records.is_empty());
    }
}
