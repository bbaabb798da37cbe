pub mod app;
pub mod browser;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod definitions;
pub mod error;
pub mod event;
pub mod headless;
pub mod i18n;
pub mod logging;
pub mod page;
pub mod recommend;
pub mod tui;
pub mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::Settings;
use crossterm::event::EventStream;
use event::Event;
use futures_util::StreamExt;
use i18n::LanguageCode;
use log::{debug, info, warn};
use recommend::HttpRecommender;
use std::time::Duration;
use tui::{init, restore};
use ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    if let Some(text) = cli.ask.as_deref() {
        logging::init_stderr_logging(&settings);
        return headless::run(&settings, text).await;
    }

    logging::init_file_logging(&settings)?;
    let mut backend = HttpRecommender::new(&settings).context("建立 HTTP 客戶端失敗")?;
    match backend.bootstrap().await {
        Ok(true) => {}
        Ok(false) => warn!("no csrftoken cookie; requests go out without X-CSRFToken"),
        Err(err) => warn!("cookie bootstrap failed: {err}"),
    }
    info!(
        "recommendation endpoint: {} (cookies: {})",
        backend.endpoint(),
        if backend.cookies().is_empty() { "none" } else { "present" }
    );

    let strings = settings.string_table();
    for lang in LanguageCode::all() {
        debug!("string table {lang}: {} entries", strings.len(lang));
    }
    let mut app = App::new(settings.language, strings, Box::new(backend));
    let mut tui = init()?;
    let outcome = run_loop(&mut tui, &mut app).await;
    restore()?;
    outcome
}

async fn run_loop(tui: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut stream = EventStream::new();
    let mut interval = tokio::time::interval(Duration::from_millis(100));

    while !app.should_quit {
        tui.draw(|frame| render(frame, app))?;

        let event = tokio::select! {
            _ = interval.tick() => Event::Tick,
            maybe_event = stream.next() => {
                match maybe_event {
                    Some(Ok(raw)) => match Event::from_terminal(raw) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(_)) | None => break,
                }
            }
        };

        match event {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.handle_key(key).await,
            Event::Mouse(mouse) => app.handle_mouse(mouse).await,
            Event::Paste(text) => app.handle_paste(&text),
        }
    }
    Ok(())
}
