use discuss::adapters::{ApiStore, ReqwestHttpClient};
use discuss::app::{App, AppMessage};
use discuss::cli::{handle_version_command, parse_args, CliCommand, USAGE};
use discuss::config::Config;
use discuss::logging;
use discuss::session::Session;
use discuss::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Poll interval for animations and revision checks.
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => handle_version_command(),
        CliCommand::Invalid(message) => {
            eprintln!("{}\n{}", message, USAGE);
            std::process::exit(2);
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = Config::load(&options)?;
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    info!(
        "Starting discuss {} against {} (sort {})",
        env!("CARGO_PKG_VERSION"),
        config.base_url,
        config.sort
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: Config) -> Result<()> {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;
    let session = Session::new();
    let store = Arc::new(ApiStore::new(
        Arc::new(http),
        config.base_url.clone(),
        session.clone(),
    ));

    // Log in before the list subscribes so the first fetch is already
    // authenticated.
    if let Some(token) = config.token.clone() {
        session.log_in(token);
    }

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(store, session.clone(), &config);

    let result = run_app(manager.terminal(), &mut app).await;
    app.list.teardown();
    manager.restore()?;

    if let Err(e) = &result {
        error!("Exited with error: {}", e);
    }
    info!("Goodbye");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        app.sync_revision();
        if app.needs_redraw {
            terminal.draw(|f| app.draw(f))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                            app.handle_click(mouse.column, mouse.row);
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
