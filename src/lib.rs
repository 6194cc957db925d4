pub mod api;
pub mod background;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod fixtures;
pub mod formatting;
pub mod model;
pub mod stats;
pub mod team_abbrev;
pub mod tui;
pub mod types;

#[cfg(feature = "development")]
pub mod dev;
