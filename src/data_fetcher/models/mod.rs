pub mod lol;
pub mod valorant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::titles;

pub use lol::{GoldSnapshot, JunglePosition, KillEvent, Lane, LolMatchStats, ObjectiveEvent};
pub use valorant::{RoundRecord, Site, ValorantMatchStats};

/// The titles the scout understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Game {
    LeagueOfLegends,
    Valorant,
}

impl Game {
    /// GRID numeric title identifier
    pub fn title_id(self) -> u32 {
        match self {
            Game::LeagueOfLegends => titles::LEAGUE_OF_LEGENDS,
            Game::Valorant => titles::VALORANT,
        }
    }

    /// Short code used on the command line and in file names
    pub fn code(self) -> &'static str {
        match self {
            Game::LeagueOfLegends => "lol",
            Game::Valorant => "valorant",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Game::LeagueOfLegends => "League of Legends",
            Game::Valorant => "VALORANT",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lol" | "league" | "league of legends" | "league_of_legends" => {
                Ok(Game::LeagueOfLegends)
            }
            "valorant" | "val" => Ok(Game::Valorant),
            other => Err(format!(
                "unknown game '{other}' (expected 'lol' or 'valorant')"
            )),
        }
    }
}

/// One completed match for the scouted team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: String,
    pub date: DateTime<Utc>,
    pub team: String,
    pub opponent: String,
    pub won: bool,
    pub stats: GameStats,
}

/// Game-specific stat bag attached to a [`MatchRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "snake_case")]
pub enum GameStats {
    LeagueOfLegends(LolMatchStats),
    Valorant(ValorantMatchStats),
}

impl MatchRecord {
    pub fn game(&self) -> Game {
        match self.stats {
            GameStats::LeagueOfLegends(_) => Game::LeagueOfLegends,
            GameStats::Valorant(_) => Game::Valorant,
        }
    }

    pub fn lol(&self) -> Option<&LolMatchStats> {
        match &self.stats {
            GameStats::LeagueOfLegends(stats) => Some(stats),
            GameStats::Valorant(_) => None,
        }
    }

    pub fn valorant(&self) -> Option<&ValorantMatchStats> {
        match &self.stats {
            GameStats::Valorant(stats) => Some(stats),
            GameStats::LeagueOfLegends(_) => None,
        }
    }
}
