mod config;
mod controller;
mod links;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::AppConfig;
use controller::AppController;
use links::SystemOpener;
use model::{AppModel, Catalog, HashLocation, TerminalFullscreen, ViewportClassifier};
use view::{AppView, RenderReport};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== AEONLIGHTS starting ===");

    let config = Arc::new(AppConfig::from_env()?);
    let catalog = Arc::new(Catalog::embedded()?);

    // An optional first argument is the initial location hash, e.g. `#/releases`
    let initial_hash = std::env::args().nth(1).unwrap_or_default();

    let (events_tx, events_rx) = unbounded_channel();
    let (cols, rows) = terminal::size()?;
    let width = config.window_width_px(cols, reported_pixel_width());

    let app_model = AppModel::new(
        catalog,
        config.base_path.clone(),
        ViewportClassifier::new(width, false),
        HashLocation::new(initial_hash, Some(events_tx.clone())),
        Box::new(TerminalFullscreen::new((cols, rows), Some(events_tx.clone()))),
    );
    let model = Arc::new(Mutex::new(app_model));

    let controller = AppController::new(
        model.clone(),
        Arc::new(SystemOpener),
        config.clone(),
        events_tx,
    );
    controller.start_platform_event_listener(events_rx);

    tracing::info!(cols, rows, width, "Starting TUI...");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model.clone(), controller, &config).await;

    model.lock().await.teardown();
    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("AEONLIGHTS shutting down");
    Ok(())
}

/// Raw mode, the alternate screen and mouse capture, undone on drop even
/// when the loop exits with an error.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen) {
            tracing::warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            tracing::warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Pixel width reported by the terminal, or 0 when it does not say.
fn reported_pixel_width() -> u16 {
    terminal::window_size().map(|size| size.width).unwrap_or(0)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    config: &AppConfig,
) -> io::Result<()> {
    loop {
        // Get current state
        let (ui_state, should_quit) = {
            let mut model_guard = model.lock().await;

            // Auto-clear old notices (after 5 seconds)
            model_guard.auto_clear_old_notices();

            (model_guard.ui_state(), model_guard.should_quit())
        };

        if should_quit {
            break;
        }

        // Draw UI
        let mut report = RenderReport::default();
        terminal.draw(|f| {
            report = AppView::render(f, &ui_state, config);
        })?;
        model
            .lock()
            .await
            .after_render(report.anchors, report.page_overflow_rows);

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Err(e) = controller.handle_key_event(key).await {
                        tracing::warn!(error = %e, "Key handling failed");
                    }
                }
                Event::Mouse(mouse) => controller.handle_mouse_event(mouse).await,
                Event::Resize(cols, rows) => {
                    controller
                        .handle_resize(cols, rows, reported_pixel_width())
                        .await;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
