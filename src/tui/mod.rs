pub mod app;
pub mod table;
pub mod view;

pub use app::{App, AppAction};
pub use table::{Alignment, ColumnDef};

use std::io;
use std::str::FromStr;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::debug;

use crate::model::Situation;
use crate::types::{PlayerKind, SharedDataHandle};

/// Main entry point for TUI mode
///
/// The caller owns the background fetch task; this loop only reads the shared
/// state and pokes the refresh channel when the user asks for a reload.
pub async fn run(
    shared_data: SharedDataHandle,
    refresh_tx: mpsc::Sender<()>,
    kind: PlayerKind,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial_situation = {
        let data = shared_data.read().await;
        Situation::from_str(&data.config.default_situation).unwrap_or(Situation::All)
    };
    let mut app = App::new(kind, initial_situation);

    // Main loop
    loop {
        {
            let data = shared_data.read().await;
            terminal.draw(|frame| view::draw(frame, &app, &data))?;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key) {
                    Some(AppAction::Quit) => break,
                    Some(AppAction::Refresh) => {
                        // A full channel means a refresh is already queued
                        if let Err(e) = refresh_tx.try_send(()) {
                            debug!("Refresh signal not sent: {}", e);
                        }
                    }
                    Some(AppAction::Redraw) | None => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
