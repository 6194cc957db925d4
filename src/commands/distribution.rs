/// `distribution` subcommand: league-wide histogram of one skater metric
use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::data_provider::StatsProvider;
use crate::formatting::format_header;
use crate::model::LeagueSkaterRow;
use crate::stats::{build_histogram_bins, HistogramBin};

// Layout Constants
/// Width of the bin-label column
const LABEL_COL_WIDTH: usize = 12;

/// Width of the count column
const COUNT_COL_WIDTH: usize = 4;

/// Maximum bar length in characters; bars scale to the fullest bin
const MAX_BAR_WIDTH: usize = 50;

/// Skater metric whose league-wide distribution is plotted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Goals,
    Assists,
    Points,
    Shots,
    ExpectedGoals,
    PointsPer60,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::Assists => "assists",
            Self::Points => "points",
            Self::Shots => "shots",
            Self::ExpectedGoals => "expected goals",
            Self::PointsPer60 => "points per 60",
        }
    }

    /// Extract the metric value from one league row
    ///
    /// Players without ice time have no per-60 rate and are skipped for that
    /// metric rather than plotted as zero.
    pub fn extract(&self, row: &LeagueSkaterRow) -> Option<f64> {
        match self {
            Self::Goals => Some(row.goals as f64),
            Self::Assists => Some(row.assists as f64),
            Self::Points => Some(row.points as f64),
            Self::Shots => Some(row.shots as f64),
            Self::ExpectedGoals => Some(row.expected_goals),
            Self::PointsPer60 => row.points_per60(),
        }
    }
}

/// Render histogram bins as labeled text bars
pub fn format_distribution(bins: &[HistogramBin], display: &DisplayConfig) -> String {
    let mut output = String::new();
    let fullest = bins.iter().map(|b| b.count).max().unwrap_or(0);

    for bin in bins {
        let bar_len = if fullest > 0 {
            bin.count * MAX_BAR_WIDTH / fullest
        } else {
            0
        };
        output.push_str(&format!(
            "{:>label$} {:>count$} {}\n",
            bin.label,
            bin.count,
            display.box_chars.double_horizontal.repeat(bar_len),
            label = LABEL_COL_WIDTH,
            count = COUNT_COL_WIDTH,
        ));
    }

    output
}

/// Run the distribution command: fetch league rows, bucket one metric, print
pub async fn run(
    provider: &dyn StatsProvider,
    season: i32,
    metric: Metric,
    bin_count: usize,
    display: &DisplayConfig,
) -> Result<()> {
    let rows = provider
        .league_skaters(season)
        .await
        .with_context(|| format!("Failed to fetch league skaters for season {}", season))?;

    let values: Vec<f64> = rows.iter().filter_map(|r| metric.extract(r)).collect();
    let bins = build_histogram_bins(&values, bin_count);

    let title = format!(
        "{} distribution - {} season - {} skaters",
        metric.name(),
        season,
        values.len()
    );
    println!("{}", format_header(&title, true, display));

    if bins.is_empty() {
        println!("No data for season {}", season);
        return Ok(());
    }

    print!("{}", format_distribution(&bins, display));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_metric_extract() {
        let rows = fixtures::create_league_rows(2024);
        assert_eq!(Metric::Goals.extract(&rows[0]), Some(rows[0].goals as f64));
        assert!(Metric::PointsPer60.extract(&rows[0]).is_some());
    }

    #[test]
    fn test_format_distribution_scales_bars() {
        let values: Vec<f64> = fixtures::create_league_rows(2024)
            .iter()
            .map(|r| r.goals as f64)
            .collect();
        let bins = build_histogram_bins(&values, 10);
        let display = DisplayConfig::default();

        let out = format_distribution(&bins, &display);
        assert_eq!(out.lines().count(), 10);
        // The fullest bin renders a full-width bar
        let longest = out
            .lines()
            .map(|l| l.chars().filter(|&c| c == '═').count())
            .max()
            .unwrap();
        assert_eq!(longest, MAX_BAR_WIDTH);
    }

    #[test]
    fn test_format_distribution_empty() {
        let display = DisplayConfig::default();
        assert!(format_distribution(&[], &display).is_empty());
    }
}
