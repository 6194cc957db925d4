pub mod distribution;
pub mod goalie;
pub mod skater;

use anyhow::{Context, Result};

use crate::model::Situation;

/// Parse an optional situation tag, defaulting to all situations
///
/// Accepts the wire spellings (all, 5on5, 5on4, 4on5, other) plus the pp/pk
/// shorthands. Returns an error naming the valid set for anything else.
pub fn parse_situation(situation: Option<String>) -> Result<Situation> {
    match situation {
        Some(tag) => tag
            .parse::<Situation>()
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Invalid situation '{}'", tag)),
        None => Ok(Situation::All),
    }
}
