/// Trait for providing analytics data, abstracting over the real API client
/// and mock implementations
use async_trait::async_trait;

use crate::model::{ApiError, GoalieStatRecord, LeagueSkaterRow, PlayerInfo, SkaterStatRecord};

/// Trait for analytics data providers, implemented by the real Client, the
/// caching decorator, and MockClient
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Get player identity (name, team, position)
    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, ApiError>;

    /// Get all per-season/team/situation skater stat records for a player
    async fn skater_stats(&self, player_id: i64) -> Result<Vec<SkaterStatRecord>, ApiError>;

    /// Get all per-season/team/situation goalie stat records for a player
    async fn goalie_stats(&self, player_id: i64) -> Result<Vec<GoalieStatRecord>, ApiError>;

    /// Get league-wide per-skater summary rows for a season
    async fn league_skaters(&self, season: i32) -> Result<Vec<LeagueSkaterRow>, ApiError>;

    /// Drop any cached data for a player so the next fetch reaches the
    /// backend; no-op for providers without a cache
    async fn invalidate_player(&self, _player_id: i64) {}
}

/// Implement the trait for the real API client
#[async_trait]
impl StatsProvider for crate::api::Client {
    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, ApiError> {
        self.player_info(player_id).await
    }

    async fn skater_stats(&self, player_id: i64) -> Result<Vec<SkaterStatRecord>, ApiError> {
        self.skater_stats(player_id).await
    }

    async fn goalie_stats(&self, player_id: i64) -> Result<Vec<GoalieStatRecord>, ApiError> {
        self.goalie_stats(player_id).await
    }

    async fn league_skaters(&self, season: i32) -> Result<Vec<LeagueSkaterRow>, ApiError> {
        self.league_skaters(season).await
    }
}
