/// Statistical shaping shared by the CLI commands and the TUI
///
/// Everything here is synchronous, pure computation over in-memory slices:
/// season/team aggregation for skaters and goalies, career-total reducers,
/// the sortable-table state machine, and histogram bucketing.
pub mod goalie;
pub mod histogram;
pub mod skater;
pub mod sort;

pub use goalie::{goalie_career_totals, goalie_season_rows, GoalieCareerTotals, GoalieSeasonRow};
pub use histogram::{build_histogram_bins, HistogramBin, DEFAULT_BIN_COUNT};
pub use skater::{skater_career_totals, skater_season_rows, SkaterCareerTotals, SkaterSeasonRow};
pub use sort::{SortDirection, SortState};
