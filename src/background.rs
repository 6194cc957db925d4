use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;
use tracing::warn;

use crate::data_provider::StatsProvider;
use crate::types::{PlayerKind, SharedDataHandle};

/// Fetch the player's identity and stat records and update shared state
pub async fn fetch_player(
    provider: &dyn StatsProvider,
    player_id: i64,
    kind: PlayerKind,
    shared_data: &SharedDataHandle,
) {
    let info = provider.player_info(player_id).await;

    let records = match kind {
        PlayerKind::Skater => provider
            .skater_stats(player_id)
            .await
            .map(|r| (Some(r), None)),
        PlayerKind::Goalie => provider
            .goalie_stats(player_id)
            .await
            .map(|r| (None, Some(r))),
    };

    match (info, records) {
        (Ok(info), Ok((skaters, goalies))) => {
            let mut shared = shared_data.write().await;
            shared.player = Some(info);
            if let Some(records) = skaters {
                shared.skater_records = Arc::new(records);
            }
            if let Some(records) = goalies {
                shared.goalie_records = Arc::new(records);
            }
            shared.last_refresh = Some(SystemTime::now());
            shared.error_message = None; // Clear any previous errors
            shared.loading = false;
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Background fetch failed for player {}: {}", player_id, e);
            let mut shared = shared_data.write().await;
            shared.error_message = Some(format!("Failed to fetch player {}: {}", player_id, e));
            shared.loading = false;
        }
    }
}

/// Background task loop that periodically refreshes the displayed player
///
/// Refreshes on the configured interval and whenever the TUI sends a manual
/// trigger on the channel. Each refresh evicts the player's cached entries
/// first; a refresh that only re-reads the staleness cache would be a no-op.
pub async fn fetch_data_loop(
    provider: Arc<dyn StatsProvider>,
    player_id: i64,
    kind: PlayerKind,
    shared_data: SharedDataHandle,
    interval: u64,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval.max(1)));
    interval_timer.tick().await; // First tick completes immediately

    loop {
        fetch_player(provider.as_ref(), player_id, kind, &shared_data).await;

        // Wait for either the interval timer or a manual refresh signal
        tokio::select! {
            _ = interval_timer.tick() => {
                // Regular interval refresh
            }
            signal = refresh_rx.recv() => {
                if signal.is_none() {
                    // TUI dropped its sender; nothing left to refresh for
                    return;
                }
            }
        }

        provider.invalidate_player(player_id).await;
    }
}
