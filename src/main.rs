mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Settings;
use controller::AppController;
use model::{AppModel, ArtworkSlots, CancellableFetcher, HttpTransport, QueryBuilder, SearchEngine};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env()?;

    if let Err(e) = logging::init_logging(&settings.log_dir) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(
        endpoint = %settings.endpoint,
        limit = settings.result_limit,
        "=== Store Search Starting ==="
    );

    let transport = HttpTransport::new(settings.request_timeout, &settings.user_agent)?;
    let fetcher = CancellableFetcher::new(Arc::new(transport));

    let (search, search_deliveries) = SearchEngine::new(
        fetcher.clone(),
        QueryBuilder::new(settings.endpoint.clone(), settings.result_limit),
    );
    let (artwork, artwork_deliveries) = ArtworkSlots::new(fetcher);

    let controller = AppController::new(
        AppModel::new(search, artwork),
        search_deliveries,
        artwork_deliveries,
    );

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Store Search shutting down");
    Ok(())
}

/// The UI loop. Every model mutation happens here, one step at a time:
/// finished fetches are applied, the frame is drawn, then one key is handled.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: AppController,
) -> io::Result<()> {
    loop {
        controller.pump_deliveries();

        terminal.draw(|f| {
            AppView::render(f, controller.model());
        })?;

        // Short poll so deliveries show up promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key);
            }
        }

        if controller.model().should_quit() {
            break;
        }
    }

    Ok(())
}
