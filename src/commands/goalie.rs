/// `goalie` subcommand: season-by-season table plus career totals
use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::data_provider::StatsProvider;
use crate::formatting::{
    format_f1, format_header, format_opt_u32, format_rate2, format_sv_pct, format_toi,
};
use crate::model::Situation;
use crate::stats::{goalie_career_totals, goalie_season_rows, GoalieCareerTotals, GoalieSeasonRow};
use crate::team_abbrev::team_name;

// Layout Constants
const SEASON_COL_WIDTH: usize = 6;
const TEAM_COL_WIDTH: usize = 4;
const COUNT_COL_WIDTH: usize = 5;
const RATE_COL_WIDTH: usize = 6;
const TOI_COL_WIDTH: usize = 8;

fn format_goalie_row(label: &str, team: &str, row: &GoalieSeasonRow) -> String {
    let (po_gp, po_ga, po_sv) = match &row.playoffs {
        Some(p) => (
            Some(p.games_played),
            Some(p.goals_against),
            p.save_pct(),
        ),
        None => (None, None, None),
    };
    format!(
        "{:<season$} {:<team$} {:>n$} {:>n$} {:>n$} {:>r$} {:>r$} {:>r$} {:>toi$} {:>n$} {:>n$} {:>r$}\n",
        label,
        team,
        row.games_played,
        row.goals_against,
        row.shots_against,
        format_sv_pct(row.save_pct()),
        format_rate2(row.gaa()),
        format_f1(row.goals_saved_above_expected),
        format_toi(row.ice_time_seconds),
        format_opt_u32(po_gp),
        format_opt_u32(po_ga),
        format_sv_pct(po_sv),
        season = SEASON_COL_WIDTH,
        team = TEAM_COL_WIDTH,
        n = COUNT_COL_WIDTH,
        r = RATE_COL_WIDTH,
        toi = TOI_COL_WIDTH,
    )
}

fn format_totals_row(totals: &GoalieCareerTotals) -> String {
    format!(
        "{:<season$} {:<team$} {:>n$} {:>n$} {:>n$} {:>r$} {:>r$} {:>r$} {:>toi$} {:>n$} {:>n$} {:>r$}\n",
        "TOTAL",
        "",
        totals.games_played,
        totals.goals_against,
        totals.shots_against,
        format_sv_pct(totals.save_pct()),
        format_rate2(totals.gaa()),
        format_f1(totals.goals_saved_above_expected),
        format_toi(totals.ice_time_seconds),
        totals.playoff_games_played,
        totals.playoff_goals_against,
        format_sv_pct(totals.playoff_save_pct()),
        season = SEASON_COL_WIDTH,
        team = TEAM_COL_WIDTH,
        n = COUNT_COL_WIDTH,
        r = RATE_COL_WIDTH,
        toi = TOI_COL_WIDTH,
    )
}

/// Render the full goalie table for already-aggregated rows
pub fn format_goalie_table(
    rows: &[GoalieSeasonRow],
    totals: &GoalieCareerTotals,
    display: &DisplayConfig,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<season$} {:<team$} {:>n$} {:>n$} {:>n$} {:>r$} {:>r$} {:>r$} {:>toi$} {:>n$} {:>n$} {:>r$}\n",
        "Season",
        "Team",
        "GP",
        "GA",
        "SA",
        "SV%",
        "GAA",
        "GSAx",
        "TOI",
        "PGP",
        "PGA",
        "PSV%",
        season = SEASON_COL_WIDTH,
        team = TEAM_COL_WIDTH,
        n = COUNT_COL_WIDTH,
        r = RATE_COL_WIDTH,
        toi = TOI_COL_WIDTH,
    ));

    let table_width = SEASON_COL_WIDTH
        + TEAM_COL_WIDTH
        + 5 * (COUNT_COL_WIDTH + 1)
        + 4 * (RATE_COL_WIDTH + 1)
        + TOI_COL_WIDTH
        + 2;
    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(table_width)
    ));

    for row in rows {
        output.push_str(&format_goalie_row(&row.season.to_string(), &row.team, row));
    }

    output.push_str(&format!(
        "{}\n",
        display.box_chars.horizontal.repeat(table_width)
    ));
    output.push_str(&format_totals_row(totals));
    output
}

/// Run the goalie command: fetch, aggregate for one situation, print
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
        .goalie_stats(player_id)
        .await
        .with_context(|| format!("Failed to fetch goalie stats for player {}", player_id))?;

    let rows = goalie_season_rows(&records, situation);
    let totals = goalie_career_totals(&rows);

    let team = team_name(&info.team_abbrev).unwrap_or(&info.team_abbrev);
    let title = format!(
        "{} (G) - {} - situation: {}",
        info.name, team, situation
    );
    println!("{}", format_header(&title, true, display));

    if rows.is_empty() {
        println!("No regular-season records for situation '{}'", situation);
        return Ok(());
    }

    print!("{}", format_goalie_table(&rows, &totals, display));
    Ok(())
}
