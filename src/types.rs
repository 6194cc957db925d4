/// Shared types used across the application
///
/// This module contains type definitions that are shared between
/// the library (commands, tui, background) and the binary (main.rs).
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::model::{GoalieStatRecord, PlayerInfo, SkaterStatRecord};

/// Whether the interactive view renders the skater or the goalie table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Skater,
    Goalie,
}

/// Data shared between the background fetch task and the TUI
#[derive(Clone)]
pub struct SharedData {
    pub player: Option<PlayerInfo>,
    pub skater_records: Arc<Vec<SkaterStatRecord>>,
    pub goalie_records: Arc<Vec<GoalieStatRecord>>,
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
    pub loading: bool,
}

impl Default for SharedData {
    fn default() -> Self {
        SharedData {
            player: None,
            skater_records: Arc::new(Vec::new()),
            goalie_records: Arc::new(Vec::new()),
            config: Config::default(),
            last_refresh: None,
            error_message: None,
            loading: true,
        }
    }
}

pub type SharedDataHandle = Arc<RwLock<SharedData>>;
