/// Mock stats client for development and testing
use async_trait::async_trait;
use tracing::info;

use crate::data_provider::StatsProvider;
use crate::fixtures;
use crate::model::{ApiError, GoalieStatRecord, LeagueSkaterRow, PlayerInfo, SkaterStatRecord};

/// Mock client that returns fixture data instead of making real API calls
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for MockClient {
    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, ApiError> {
        info!("MockClient: Returning mock player info for {}", player_id);
        Ok(fixtures::create_player_info(player_id))
    }

    async fn skater_stats(&self, player_id: i64) -> Result<Vec<SkaterStatRecord>, ApiError> {
        info!("MockClient: Returning mock skater stats for {}", player_id);
        Ok(fixtures::create_skater_records())
    }

    async fn goalie_stats(&self, player_id: i64) -> Result<Vec<GoalieStatRecord>, ApiError> {
        info!("MockClient: Returning mock goalie stats for {}", player_id);
        Ok(fixtures::create_goalie_records())
    }

    async fn league_skaters(&self, season: i32) -> Result<Vec<LeagueSkaterRow>, ApiError> {
        info!("MockClient: Returning mock league skaters for {}", season);
        Ok(fixtures::create_league_rows(season))
    }
}
