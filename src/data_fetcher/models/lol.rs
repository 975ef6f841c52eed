use serde::{Deserialize, Serialize};

/// Map region a jungler position sample falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Top,
    Mid,
    Bot,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Mid, Lane::Bot];

    pub fn name(self) -> &'static str {
        match self {
            Lane::Top => "Top",
            Lane::Mid => "Mid",
            Lane::Bot => "Bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillEvent {
    /// Seconds since game start
    pub timestamp: u32,
    pub x: i32,
    pub y: i32,
    pub is_first_blood: bool,
}

/// Dragon, baron or herald kill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveEvent {
    pub timestamp: u32,
    pub taken_by_team: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dragon_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldSnapshot {
    pub timestamp: u32,
    pub team_gold: i64,
    pub enemy_gold: i64,
    pub gold_difference: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunglePosition {
    pub timestamp: u32,
    pub x: i32,
    pub y: i32,
    pub lane: Lane,
}

/// Timestamped events of a single League of Legends game, each list sorted by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LolMatchStats {
    pub duration_seconds: u32,
    pub kills: Vec<KillEvent>,
    pub dragons: Vec<ObjectiveEvent>,
    pub barons: Vec<ObjectiveEvent>,
    pub heralds: Vec<ObjectiveEvent>,
    pub gold_updates: Vec<GoldSnapshot>,
    pub jungle_positions: Vec<JunglePosition>,
}

impl LolMatchStats {
    /// Gold difference of the last snapshot taken inside `[from, to]` seconds.
    pub fn gold_difference_between(&self, from: u32, to: u32) -> Option<i64> {
        self.gold_updates
            .iter()
            .filter(|g| (from..=to).contains(&g.timestamp))
            .map(|g| g.gold_difference)
            .last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gold_difference_between() {
        let stats = LolMatchStats {
            duration_seconds: 1800,
            kills: vec![],
            dragons: vec![],
            barons: vec![],
            heralds: vec![],
            gold_updates: vec![
                GoldSnapshot {
                    timestamp: 600,
                    team_gold: 18500,
                    enemy_gold: 18000,
                    gold_difference: 500,
                },
                GoldSnapshot {
                    timestamp: 900,
                    team_gold: 20500,
                    enemy_gold: 19500,
                    gold_difference: 1000,
                },
            ],
            jungle_positions: vec![],
        };

        assert_eq!(stats.gold_difference_between(540, 660), Some(500));
        assert_eq!(stats.gold_difference_between(840, 960), Some(1000));
        assert_eq!(stats.gold_difference_between(1140, 1260), None);
    }

    #[test]
    fn test_lane_names() {
        let names: Vec<_> = Lane::ALL.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Top", "Mid", "Bot"]);
    }
}
