/// Wire types for the analytics API
///
/// These structs mirror the JSON shapes the backend returns. Deserialization is
/// fully typed: a record with an unknown situation tag or a non-numeric count
/// fails at the boundary instead of flowing into the aggregation code.
/// Optional counting stats default to zero; `corsi_for_pct` stays `None` when
/// the backend omits it so the aggregator can weight only the records that
/// actually carry a value.
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// On-ice strength state under which a stat line was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Situation {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "5on5")]
    FiveOnFive,
    #[serde(rename = "5on4")]
    PowerPlay,
    #[serde(rename = "4on5")]
    PenaltyKill,
    #[serde(rename = "other")]
    Other,
}

impl Situation {
    /// Wire spelling, as the API returns it
    pub fn as_str(&self) -> &'static str {
        match self {
            Situation::All => "all",
            Situation::FiveOnFive => "5on5",
            Situation::PowerPlay => "5on4",
            Situation::PenaltyKill => "4on5",
            Situation::Other => "other",
        }
    }

    pub fn all_tags() -> [Situation; 5] {
        [
            Situation::All,
            Situation::FiveOnFive,
            Situation::PowerPlay,
            Situation::PenaltyKill,
            Situation::Other,
        ]
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Situation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Situation::All),
            "5on5" => Ok(Situation::FiveOnFive),
            "5on4" | "pp" => Ok(Situation::PowerPlay),
            "4on5" | "pk" => Ok(Situation::PenaltyKill),
            "other" => Ok(Situation::Other),
            _ => Err(format!(
                "unknown situation '{}' (expected one of: all, 5on5, 5on4, 4on5, other)",
                s
            )),
        }
    }
}

/// One skater stat line for a (season, team, situation, playoffs) combination
///
/// The backend may return several records for the same combination (mid-season
/// trades produce one per stint); consumers must sum them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterStatRecord {
    pub season: i32,
    pub team: String,
    pub situation: Situation,
    #[serde(default)]
    pub is_playoffs: bool,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub ice_time_seconds: f64,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub expected_goals: f64,
    #[serde(default)]
    pub corsi_for_pct: Option<f64>,
}

/// One goalie stat line for a (season, team, situation, playoffs) combination
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieStatRecord {
    pub season: i32,
    pub team: String,
    pub situation: Situation,
    #[serde(default)]
    pub is_playoffs: bool,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub ice_time_seconds: f64,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub shots_against: u32,
    #[serde(default)]
    pub goals_saved_above_expected: f64,
}

/// Player identity returned by `GET /players/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub player_id: i64,
    pub name: String,
    pub team_abbrev: String,
    pub position: String,
}

/// Pre-aggregated league-wide skater row for one season, used by the
/// distribution view
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSkaterRow {
    pub player_id: i64,
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub ice_time_seconds: f64,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub points: u32,
    #[serde(default)]
    pub shots: u32,
    #[serde(default)]
    pub expected_goals: f64,
}

impl LeagueSkaterRow {
    /// Points per 60 minutes of ice time, None when the player has no ice time
    pub fn points_per60(&self) -> Option<f64> {
        if self.ice_time_seconds > 0.0 {
            Some(self.points as f64 / (self.ice_time_seconds / 3600.0))
        } else {
            None
        }
    }
}

/// Errors surfaced by the analytics API client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
