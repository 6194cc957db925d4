/// Rendering for the interactive player view
///
/// Three fixed regions: a one-line title bar, the season table, and a one-line
/// status bar. The table is rebuilt from the shared records on every draw so
/// situation switches and sort changes take effect immediately.
use chrono::{DateTime, Local};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::formatting::{format_f1, format_pct1, format_rate2, format_sv_pct, format_toi};
use crate::stats::{
    goalie_career_totals, goalie_season_rows, skater_career_totals, skater_season_rows,
    GoalieCareerTotals, SkaterCareerTotals,
};
use crate::team_abbrev;
use crate::types::{PlayerKind, SharedData};

use super::app::App;
use super::table::{self, Alignment, ColumnDef};

pub fn draw(frame: &mut Frame, app: &App, data: &SharedData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], app, data);
    match app.kind {
        PlayerKind::Skater => draw_skater_table(frame, chunks[1], app, data),
        PlayerKind::Goalie => draw_goalie_table(frame, chunks[1], app, data),
    }
    draw_status(frame, chunks[2], app, data);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App, data: &SharedData) {
    let mut title = match &data.player {
        Some(player) => {
            let team = team_abbrev::team_name(&player.team_abbrev)
                .unwrap_or(player.team_abbrev.as_str());
            format!("{} ({}) | {}", player.name, player.position, team)
        }
        None if data.loading => "Loading...".to_string(),
        None => "No player".to_string(),
    };
    title.push_str(&format!(" | {}", app.situation));

    if let Some(refreshed) = data.last_refresh {
        let local: DateTime<Local> = refreshed.into();
        title.push_str(&format!(" | updated {}", local.format("%H:%M:%S")));
    }

    // Truncate by display width so wide characters in names don't overflow
    let max = area.width as usize;
    while title.width() > max {
        title.pop();
    }

    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(data.config.theme.header_fg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, data: &SharedData) {
    let (text, style) = match &data.error_message {
        Some(err) => (err.clone(), Style::default().fg(ratatui::style::Color::Red)),
        None => {
            let playoffs = if app.show_playoffs { "hide" } else { "show" };
            (
                format!(
                    "q quit | r refresh | left/right column | s sort | p {} playoffs | 1-5 situation",
                    playoffs
                ),
                Style::default().add_modifier(Modifier::DIM),
            )
        }
    };
    frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

fn draw_skater_table(frame: &mut Frame, area: Rect, app: &App, data: &SharedData) {
    let columns = table::skater_columns();
    let mut rows = skater_season_rows(&data.skater_records, app.situation);
    app.sort
        .order(&mut rows, |row, key| columns[key].sort_value(row));
    let totals = skater_career_totals(&rows);

    render_table(
        frame,
        area,
        app,
        data,
        &columns,
        &rows,
        skater_total_cells(&totals),
    );
}

fn draw_goalie_table(frame: &mut Frame, area: Rect, app: &App, data: &SharedData) {
    let columns = table::goalie_columns();
    let mut rows = goalie_season_rows(&data.goalie_records, app.situation);
    app.sort
        .order(&mut rows, |row, key| columns[key].sort_value(row));
    let totals = goalie_career_totals(&rows);

    render_table(
        frame,
        area,
        app,
        data,
        &columns,
        &rows,
        goalie_total_cells(&totals),
    );
}

/// Cells for the career TOTAL row, in skater column order
fn skater_total_cells(totals: &SkaterCareerTotals) -> Vec<String> {
    vec![
        "TOTAL".to_string(),
        String::new(),
        totals.games_played.to_string(),
        totals.goals.to_string(),
        totals.assists.to_string(),
        totals.points.to_string(),
        totals.shots.to_string(),
        format_f1(totals.expected_goals),
        format_pct1(totals.corsi_for_pct),
        format_rate2(totals.goals_per60()),
        format_rate2(totals.points_per60()),
        format_toi(totals.ice_time_seconds),
        totals.playoff_games_played.to_string(),
        totals.playoff_goals.to_string(),
        totals.playoff_points.to_string(),
    ]
}

/// Cells for the career TOTAL row, in goalie column order
fn goalie_total_cells(totals: &GoalieCareerTotals) -> Vec<String> {
    vec![
        "TOTAL".to_string(),
        String::new(),
        totals.games_played.to_string(),
        totals.goals_against.to_string(),
        totals.shots_against.to_string(),
        format_sv_pct(totals.save_pct()),
        format_rate2(totals.gaa()),
        format_f1(totals.goals_saved_above_expected),
        format_toi(totals.ice_time_seconds),
        totals.playoff_games_played.to_string(),
        totals.playoff_goals_against.to_string(),
        format_sv_pct(totals.playoff_save_pct()),
    ]
}

fn cell_alignment(align: Alignment) -> ratatui::layout::Alignment {
    match align {
        Alignment::Left => ratatui::layout::Alignment::Left,
        Alignment::Right => ratatui::layout::Alignment::Right,
    }
}

fn render_table<T>(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    data: &SharedData,
    columns: &[ColumnDef<T>],
    rows: &[T],
    total_cells: Vec<String>,
) {
    if rows.is_empty() {
        let text = if data.loading {
            "Loading..."
        } else {
            "No records for this situation"
        };
        frame.render_widget(Paragraph::new(text), area);
        return;
    }

    let visible: Vec<(usize, &ColumnDef<T>)> = columns
        .iter()
        .enumerate()
        .filter(|(_, c)| app.show_playoffs || !c.playoff)
        .collect();

    let selection = Style::default()
        .fg(data.config.theme.selection_fg)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(visible.iter().map(|(i, col)| {
        let mut label = col.header.to_string();
        if app.sort.key() == Some(*i) {
            label.push_str(app.sort.direction().indicator());
        }
        let style = if *i == app.selected_col {
            selection
        } else {
            Style::default()
                .fg(data.config.theme.header_fg)
                .add_modifier(Modifier::BOLD)
        };
        Cell::from(Text::from(label).alignment(cell_alignment(col.align))).style(style)
    }));

    let mut body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(visible.iter().map(|(i, col)| {
                let style = if *i == app.selected_col {
                    selection
                } else {
                    Style::default()
                };
                Cell::from(Text::from(col.cell(row)).alignment(cell_alignment(col.align)))
                    .style(style)
            }))
        })
        .collect();

    body.push(
        Row::new(visible.iter().map(|(i, col)| {
            let text = total_cells.get(*i).cloned().unwrap_or_default();
            Cell::from(Text::from(text).alignment(cell_alignment(col.align)))
        }))
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let widths: Vec<Constraint> = visible
        .iter()
        .map(|(_, col)| Constraint::Length(col.width))
        .collect();

    frame.render_widget(Table::new(body, widths).header(header).column_spacing(1), area);
}
