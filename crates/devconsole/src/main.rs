use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod sim;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::Action;
use devconsole_config::ConsoleConfig;
use devconsole_core::{Console, ConsoleOptions};
use middleware::{
    console::ConsoleMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    simulation::SimulationMiddleware,
};
use sim::SimHost;
use state::AppState;
use store::Store;
use theme::Theme;

const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let (config, config_error) = match ConsoleConfig::try_load() {
        Ok(config) => (config, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };
    let logger = logger::init(config.capture_level_filter())?;

    log::info!("Starting devconsole");
    log::debug!("Config: {:?}", config);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let host = SimHost::new().with_runtime(runtime.handle().clone());

    let options = ConsoleOptions {
        privileged: config.debug_mode,
        chat_prefix: config.chat_prefix,
        max_log_count: config.retention(),
    };
    let console = Console::new(host.services(), options).context("Invalid command table")?;
    logger.attach(console.sink());
    if let Some(e) = config_error {
        log::warn!("{:#}, using defaults", e);
    }

    let mut store = Store::new(AppState::from_config(&config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SimulationMiddleware::new(host)));
    store.add_middleware(Box::new(ConsoleMiddleware::new(console)));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store, &Theme::default());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Terminal loop failed: {}", err);
    }

    log::info!(
        "Exiting devconsole, log written to {}",
        logger.log_file().display()
    );
    result.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    theme: &Theme,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        let height = views::console_view::log_height(Rect::new(0, 0, size.width, size.height));
        if height != store.state().console.visible_height {
            store.dispatch(Action::SetVisibleHeight(height));
        }

        store.dispatch(Action::Tick);

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), theme, area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::GlobalKeyPressed(key));
                }
            }
        }
    }

    Ok(())
}
