/// `skater` subcommand: season-by-season table plus career totals
use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::data_provider::StatsProvider;
use crate::formatting::{
    format_f1, format_header, format_opt_u32, format_pct1, format_rate2, format_toi,
};
use crate::model::Situation;
use crate::stats::{skater_career_totals, skater_season_rows, SkaterCareerTotals, SkaterSeasonRow};
use crate::team_abbrev::team_name;

// Layout Constants
/// Width of the season column
const SEASON_COL_WIDTH: usize = 6;

/// Width of the team column
const TEAM_COL_WIDTH: usize = 4;

/// Width of small counting-stat columns
const COUNT_COL_WIDTH: usize = 4;

/// Width of rate/derived columns
const RATE_COL_WIDTH: usize = 6;

/// Width of the ice-time column
const TOI_COL_WIDTH: usize = 8;

fn format_skater_row(label: &str, team: &str, row: &SkaterSeasonRow) -> String {
    let (po_gp, po_g, po_pts) = match &row.playoffs {
        Some(p) => (Some(p.games_played), Some(p.goals), Some(p.points)),
        None => (None, None, None),
    };
    format!(
        "{:<season$} {:<team$} {:>n$} {:>n$} {:>n$} {:>n$} {:>n$} {:>r$} {:>r$} {:>r$} {:>r$} {:>toi$} {:>n$} {:>n$} {:>n$}\n",
        label,
        team,
        row.games_played,
        row.goals,
        row.assists,
        row.points,
        row.shots,
        format_f1(row.expected_goals),
        format_pct1(row.corsi_for_pct),
        format_rate2(row.goals_per60()),
        format_rate2(row.points_per60()),
        format_toi(row.ice_time_seconds),
        format_opt_u32(po_gp),
        format_opt_u32(po_g),
        format_opt_u32(po_pts),
        season = SEASON_COL_WIDTH,
        team = TEAM_COL_WIDTH,
        n = COUNT_COL_WIDTH,
        r = RATE_COL_WIDTH,
        toi = TOI_COL_WIDTH,
    )
}

fn format_totals_row(totals: &SkaterCareerTotals) -> String {
    format!(
        "{:<season$} {:<team$} {:>n$} {:>n$} {:>n$} {:>n$} {:>n$} {:>r$} {:>r$} {:>r$} {:>r$} {:>toi$} {:>n$} {:>n$} {:>n$}\n",
        "TOTAL",
        "",
        totals.games_played,
        totals.goals,
        totals.assists,
        totals.points,
        totals.shots,
        format_f1(totals.expected_goals),
        format_pct1(totals.corsi_for_pct),
        format_rate2(totals.goals_per60()),
        format_rate2(totals.points_per60()),
        format_toi(totals.ice_time_seconds),
        totals.playoff_games_played,
        totals.playoff_goals,
        totals.playoff_points,
        season = SEASON_COL_WIDTH,
        team = TEAM_COL_WIDTH,
        n = COUNT_COL_WIDTH,
        r = RATE_COL_WIDTH,
        toi = TOI_COL_WIDTH,
    )
}

/// Render the full skater table for already-aggregated rows
pub fn format_skater_table(
    rows: &[SkaterSeasonRow],
    totals: &SkaterCareerTotals,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<season$} {:<team$} {:>n$} {:>n$} {:>n$} {:>n$} {:>n$} {:>r$} {:>r$} {:>r$} {:>r$} {:>toi$} {:>n$} {:>n$} {:>n$}\n",
        "Season",
        "Team",
        "GP",
        "G",
        "A",
        "PTS",
        "SOG",
        "xG",
        "CF%",
        "G/60",
        "P/60",
        "TOI",
        "PGP",
        "PG",
        "PPTS",
        season = SEASON_COL_WIDTH,
        team = TEAM_COL_WIDTH,
        n = COUNT_COL_WIDTH,
        r = RATE_COL_WIDTH,
        toi = TOI_COL_WIDTH,
    ));

    let table_width = SEASON_COL_WIDTH
        + TEAM_COL_WIDTH
        + 8 * (COUNT_COL_WIDTH + 1)
        + 4 * (RATE_COL_WIDTH + 1)
        + TOI_COL_WIDTH
        + 2;
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(table_width)
    ));

    for row in rows {
        output.push_str(&format_skater_row(
            &row.season.to_string(),
            &row.team,
            row,
        ));
    }

    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(table_width)
    ));
    output.push_str(&format_totals_row(totals));
    output
}

/// Run the skater command: fetch, aggregate for one situation, print
pub async fn run(
    provider: &dyn StatsProvider,
    player_id: i64,
    situation: Situation,
    display: &DisplayConfig,
) -> Result<()> {
    let info = provider
        .player_info(player_id)
        .await
        .with_context(|| format!("Failed to fetch player {}", player_id))?;
    let records = provider
        .skater_stats(player_id)
        .await
        .with_context(|| format!("Failed to fetch skater stats for player {}", player_id))?;

    let rows = skater_season_rows(&records, situation);
    let totals = skater_career_totals(&rows);

    let team = team_name(&info.team_abbrev).unwrap_or(&info.team_abbrev);
    let title = format!(
        "{} ({}) - {} - situation: {}",
        info.name, info.position, team, situation
    );
    println!("{}", format_header(&title, true, display));

    if rows.is_empty() {
        println!("No regular-season records for situation '{}'", situation);
        return Ok(());
    }

    print!("{}", format_skater_table(&rows, &totals, display));
    Ok(())
}
