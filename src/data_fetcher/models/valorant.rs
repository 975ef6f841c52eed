use serde::{Deserialize, Serialize};

/// Bomb site the spike was planted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Site {
    A,
    B,
    C,
}

impl Site {
    pub const ALL: [Site; 3] = [Site::A, Site::B, Site::C];

    pub fn name(self) -> &'static str {
        match self {
            Site::A => "A",
            Site::B => "B",
            Site::C => "C",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    /// Whether the scouted team won the round
    pub won: bool,
    pub team_loadout_value: u32,
    pub enemy_loadout_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spike_site: Option<Site>,
    pub first_blood_to_team: bool,
    pub round_duration_seconds: u32,
}

impl RoundRecord {
    pub fn spike_planted(&self) -> bool {
        self.spike_site.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValorantMatchStats {
    pub map: String,
    pub team_score: u32,
    pub enemy_score: u32,
    pub rounds: Vec<RoundRecord>,
}

impl ValorantMatchStats {
    /// Rounds won minus rounds lost
    pub fn round_differential(&self) -> i64 {
        i64::from(self.team_score) - i64::from(self.enemy_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_differential() {
        let stats = ValorantMatchStats {
            map: "Ascent".to_string(),
            team_score: 9,
            enemy_score: 13,
            rounds: vec![],
        };
        assert_eq!(stats.round_differential(), -4);
    }

    #[test]
    fn test_spike_planted() {
        let round = RoundRecord {
            round_number: 1,
            won: true,
            team_loadout_value: 800,
            enemy_loadout_value: 800,
            spike_site: Some(Site::B),
            first_blood_to_team: false,
            round_duration_seconds: 74,
        };
        assert!(round.spike_planted());
        assert!(!RoundRecord { spike_site: None, ..round }.spike_planted());
    }
}
