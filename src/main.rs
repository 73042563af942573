use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use postdash::adapters::ReqwestHttpClient;
use postdash::api::PlaceholderApi;
use postdash::app::{App, AppMessage};
use postdash::cli::{parse_args, run_cli_command};
use postdash::config::AppConfig;
use postdash::logging::init_logging;
use postdash::terminal::{setup_panic_hook, TerminalManager};
use postdash::ui;

fn main() -> Result<()> {
    // Handle CLI flags before any initialization
    let route = match run_cli_command(parse_args(std::env::args())) {
        Ok(Some(route)) => route,
        Ok(None) => return Ok(()),
        Err(code) => std::process::exit(code),
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = AppConfig::from_env();
    init_logging(&config)?;
    tracing::info!(api = %config.api_base_url, route = %route, "Starting postdash");

    // A single thread drives the UI and all fetches
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let api = PlaceholderApi::with_base_url(
            config.api_base_url.clone(),
            Arc::new(ReqwestHttpClient::new()),
        );
        let mut app = App::new(api);
        app.navigate(&route);

        let mut manager = TerminalManager::new()?;
        let result = run_app(manager.terminal(), &mut app, config.tick_rate).await;
        manager.restore();

        if let Err(ref e) = result {
            tracing::error!(error = %e, "App exited with error");
        }
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
