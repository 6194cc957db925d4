/// HTTP client for the analytics backend
///
/// Thin wrapper over reqwest: every method issues one GET and decodes the JSON
/// body into the typed models. Responses are read as bytes and decoded with
/// serde_json so a schema mismatch reports the offending URL instead of a bare
/// decode error.
use std::time::Duration;

use tracing::debug;

use crate::model::{ApiError, GoalieStatRecord, LeagueSkaterRow, PlayerInfo, SkaterStatRecord};

/// Request timeout for all API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client against the given base URL (no trailing slash)
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("puckstats/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, url });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }

    pub async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, ApiError> {
        self.get_json(&format!("/players/{}", player_id)).await
    }

    pub async fn skater_stats(&self, player_id: i64) -> Result<Vec<SkaterStatRecord>, ApiError> {
        self.get_json(&format!("/players/{}/skater-stats", player_id))
            .await
    }

    pub async fn goalie_stats(&self, player_id: i64) -> Result<Vec<GoalieStatRecord>, ApiError> {
        self.get_json(&format!("/players/{}/goalie-stats", player_id))
            .await
    }

    pub async fn league_skaters(&self, season: i32) -> Result<Vec<LeagueSkaterRow>, ApiError> {
        self.get_json(&format!("/league/skaters?season={}", season))
            .await
    }
}
