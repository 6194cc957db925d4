/// Staleness-window caching for the analytics provider
///
/// `CachedProvider` decorates any `StatsProvider` with one timed, size-bounded
/// cache per endpoint. Unlike a process-global cache, the caches live on the
/// wrapper instance and are constructor-injected wherever a provider is
/// needed, so tests can pair a fresh cache with a counting inner provider.
/// Errors are never cached; only successful responses enter the window.
use async_trait::async_trait;
use cached::{Cached, TimedSizedCache};
use tokio::sync::Mutex;
use tracing::trace;

use crate::data_provider::StatsProvider;
use crate::model::{ApiError, GoalieStatRecord, LeagueSkaterRow, PlayerInfo, SkaterStatRecord};

/// Player identity barely changes; keep it for a day
const PLAYER_INFO_CAPACITY: usize = 100;
const PLAYER_INFO_TTL_SECS: u64 = 86400;

/// Stat records update after each game day; an hour is fresh enough
const STATS_CAPACITY: usize = 100;
const STATS_TTL_SECS: u64 = 3600;

/// League tables are large; cache only a few seasons
const LEAGUE_CAPACITY: usize = 4;
const LEAGUE_TTL_SECS: u64 = 3600;

pub struct CachedProvider<P> {
    inner: P,
    player_info: Mutex<TimedSizedCache<i64, PlayerInfo>>,
    skater_stats: Mutex<TimedSizedCache<i64, Vec<SkaterStatRecord>>>,
    goalie_stats: Mutex<TimedSizedCache<i64, Vec<GoalieStatRecord>>>,
    league_skaters: Mutex<TimedSizedCache<i32, Vec<LeagueSkaterRow>>>,
}

impl<P> CachedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            player_info: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                PLAYER_INFO_CAPACITY,
                PLAYER_INFO_TTL_SECS,
            )),
            skater_stats: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                STATS_CAPACITY,
                STATS_TTL_SECS,
            )),
            goalie_stats: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                STATS_CAPACITY,
                STATS_TTL_SECS,
            )),
            league_skaters: Mutex::new(TimedSizedCache::with_size_and_lifespan(
                LEAGUE_CAPACITY,
                LEAGUE_TTL_SECS,
            )),
        }
    }

    /// Drop every cached entry (manual refresh)
    pub async fn clear(&self) {
        self.player_info.lock().await.cache_clear();
        self.skater_stats.lock().await.cache_clear();
        self.goalie_stats.lock().await.cache_clear();
        self.league_skaters.lock().await.cache_clear();
    }

    /// Evict one player's cached identity and stat records so the next fetch
    /// goes to the backend
    pub async fn invalidate_player(&self, player_id: i64) {
        self.player_info.lock().await.cache_remove(&player_id);
        self.skater_stats.lock().await.cache_remove(&player_id);
        self.goalie_stats.lock().await.cache_remove(&player_id);
    }

    /// Entry counts per cache, in declaration order
    pub async fn entry_counts(&self) -> [usize; 4] {
        [
            self.player_info.lock().await.cache_size(),
            self.skater_stats.lock().await.cache_size(),
            self.goalie_stats.lock().await.cache_size(),
            self.league_skaters.lock().await.cache_size(),
        ]
    }
}

#[async_trait]
impl<P: StatsProvider> StatsProvider for CachedProvider<P> {
    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, ApiError> {
        if let Some(hit) = self.player_info.lock().await.cache_get(&player_id) {
            trace!("cache hit: player_info {}", player_id);
            return Ok(hit.clone());
        }
        let fresh = self.inner.player_info(player_id).await?;
        self.player_info
            .lock()
            .await
            .cache_set(player_id, fresh.clone());
        Ok(fresh)
    }

    async fn skater_stats(&self, player_id: i64) -> Result<Vec<SkaterStatRecord>, ApiError> {
        if let Some(hit) = self.skater_stats.lock().await.cache_get(&player_id) {
            trace!("cache hit: skater_stats {}", player_id);
            return Ok(hit.clone());
        }
        let fresh = self.inner.skater_stats(player_id).await?;
        self.skater_stats
            .lock()
            .await
            .cache_set(player_id, fresh.clone());
        Ok(fresh)
    }

    async fn goalie_stats(&self, player_id: i64) -> Result<Vec<GoalieStatRecord>, ApiError> {
        if let Some(hit) = self.goalie_stats.lock().await.cache_get(&player_id) {
            trace!("cache hit: goalie_stats {}", player_id);
            return Ok(hit.clone());
        }
        let fresh = self.inner.goalie_stats(player_id).await?;
        self.goalie_stats
            .lock()
            .await
            .cache_set(player_id, fresh.clone());
        Ok(fresh)
    }

    async fn league_skaters(&self, season: i32) -> Result<Vec<LeagueSkaterRow>, ApiError> {
        if let Some(hit) = self.league_skaters.lock().await.cache_get(&season) {
            trace!("cache hit: league_skaters {}", season);
            return Ok(hit.clone());
        }
        let fresh = self.inner.league_skaters(season).await?;
        self.league_skaters
            .lock()
            .await
            .cache_set(season, fresh.clone());
        Ok(fresh)
    }

    async fn invalidate_player(&self, player_id: i64) {
        CachedProvider::invalidate_player(self, player_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Inner provider that counts how many calls reach it
    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatsProvider for CountingProvider {
        async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::create_player_info(player_id))
        }

        async fn skater_stats(&self, _player_id: i64) -> Result<Vec<SkaterStatRecord>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::create_skater_records())
        }

        async fn goalie_stats(&self, _player_id: i64) -> Result<Vec<GoalieStatRecord>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::create_goalie_records())
        }

        async fn league_skaters(&self, season: i32) -> Result<Vec<LeagueSkaterRow>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(fixtures::create_league_rows(season))
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let provider = CachedProvider::new(CountingProvider::default());
        assert_eq!(provider.entry_counts().await, [0, 0, 0, 0]);
    }

    #[tokio::test]
    async fn test_second_fetch_is_a_hit() {
        let provider = CachedProvider::new(CountingProvider::default());

        let first = provider.skater_stats(8478402).await.unwrap();
        let second = provider.skater_stats(8478402).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.inner.calls(), 1);
        assert_eq!(provider.entry_counts().await, [0, 1, 0, 0]);
    }

    #[tokio::test]
    async fn test_distinct_keys_fetch_separately() {
        let provider = CachedProvider::new(CountingProvider::default());

        provider.player_info(1).await.unwrap();
        provider.player_info(2).await.unwrap();
        provider.player_info(1).await.unwrap();

        assert_eq!(provider.inner.calls(), 2);
    }

    #[tokio::test]
    async fn test_clear_forces_refetch() {
        let provider = CachedProvider::new(CountingProvider::default());

        provider.league_skaters(2024).await.unwrap();
        provider.clear().await;
        provider.league_skaters(2024).await.unwrap();

        assert_eq!(provider.inner.calls(), 2);
        assert_eq!(provider.entry_counts().await, [0, 0, 0, 1]);
    }

    #[tokio::test]
    async fn test_invalidate_player_evicts_player_caches() {
        let provider = CachedProvider::new(CountingProvider::default());

        provider.player_info(42).await.unwrap();
        provider.skater_stats(42).await.unwrap();
        provider.goalie_stats(42).await.unwrap();
        provider.league_skaters(2024).await.unwrap();
        provider.invalidate_player(42).await;

        // Everything keyed by the player is gone; the league cache survives
        assert_eq!(provider.entry_counts().await, [0, 0, 0, 1]);

        provider.skater_stats(42).await.unwrap();
        assert_eq!(provider.inner.calls(), 5);
    }

    #[tokio::test]
    async fn test_independent_instances_do_not_share_state() {
        // The point of the injected design: no cross-talk between providers
        let a = CachedProvider::new(CountingProvider::default());
        let b = CachedProvider::new(CountingProvider::default());

        a.skater_stats(99).await.unwrap();
        assert_eq!(a.entry_counts().await, [0, 1, 0, 0]);
        assert_eq!(b.entry_counts().await, [0, 0, 0, 0]);
    }
}
