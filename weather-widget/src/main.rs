//! Weather widget - terminal front end
//!
//! FRAMEWORK PATTERN: EffectRuntime loop
//! - EffectStore with the app reducer and an action-logging middleware
//! - TaskManager runs the widget controller on `r`
//! - Subscriptions drive the spinner tick
//! - RefreshLifecycle re-runs the controller every interval; its renders come
//!   back through the runtime's action channel
//!
//! # Usage
//!
//! ```sh
//! # Locate by IP, refresh every 15 minutes
//! cargo run -p weather-widget
//!
//! # Fixed location, metric units, print once and exit
//! cargo run -p weather-widget -- --lat 50.45 --lon 30.52 --units metric --once
//! ```

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;
use tui_dispatch::{EffectRuntime, EffectStoreWithMiddleware};
use weather_widget_core::{
    OpenMeteoClient, RefreshLifecycle, TextSurface, WidgetConfig, WidgetController,
};

use weather_widget::action::Action;
use weather_widget::app::{self, ActionLog, AppController};
use weather_widget::cli::{Args, SelectedLocator};
use weather_widget::reducer::reducer;
use weather_widget::state::{AppState, LOADING_ANIM_TICK_MS};
use weather_widget::surface::ActionSurface;
use weather_widget::terminal::TerminalGuard;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = args.resolve_config().context("invalid configuration")?;
    let locator = args.locator().context("invalid location")?;
    let client =
        OpenMeteoClient::new(config.endpoint.clone()).context("failed to build HTTP client")?;

    if args.once {
        return run_once(locator, client, config).await;
    }

    // ===== Terminal setup (restored when the guard drops) =====
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, locator, client, config).await
}

/// Logs go to stderr with `--once`, to `--log-file` otherwise, or nowhere
fn init_tracing(args: &Args) -> anyhow::Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if args.once {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    } else if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }
    Ok(())
}

async fn run_once(
    locator: SelectedLocator,
    client: OpenMeteoClient,
    config: WidgetConfig,
) -> anyhow::Result<()> {
    let surface = Arc::new(TextSurface::new());
    let controller = WidgetController::new(locator, client, surface.clone(), config);
    controller.run().await;
    println!("{}", surface.contents());
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    locator: SelectedLocator,
    client: OpenMeteoClient,
    config: WidgetConfig,
) -> anyhow::Result<()> {
    let auto_refresh = config.refresh_interval();
    let store = EffectStoreWithMiddleware::new(AppState::new(auto_refresh), reducer, ActionLog);
    let mut runtime = EffectRuntime::from_store(store);

    // Tick timer for loading animation
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    let controller: Arc<AppController<SelectedLocator, OpenMeteoClient>> =
        Arc::new(WidgetController::new(
            locator,
            client,
            ActionSurface::new(runtime.action_tx()),
            config,
        ));

    // Runs now, then every interval until stopped
    let lifecycle = RefreshLifecycle::start(controller.clone(), auto_refresh);

    let result = runtime
        .run(
            terminal,
            |frame, area, state, _render_ctx| app::render(frame, area, state),
            app::map_event,
            |action| matches!(action, Action::Quit),
            |effect, ctx| app::handle_effect(effect, ctx.tasks(), &controller),
        )
        .await;

    lifecycle.stop();
    result.context("terminal loop failed")
}
