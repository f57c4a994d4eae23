mod app;
mod components;
mod config;
mod error;
mod event;
mod fs;
mod handler;
mod logging;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use crate::app::App;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::tui::{install_panic_hook, Tui};

/// Interactive disk usage tree.
#[derive(Parser, Debug)]
#[command(name = "dut", version, about)]
struct Cli {
    /// Directory to scan (defaults to the current directory)
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::load();
    let log_path = logging::init(&config);
    tracing::info!(log = ?log_path, "dut starting");

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &AppConfig) -> error::Result<()> {
    let root = fs::scanner::resolve_root(cli.path)?;

    println!("Scanning {}... (may take a while)", root.display());
    let tree = fs::scanner::scan(&root)?;

    let theme = theme::resolve_theme(&config.theme);
    let mut app = App::new(tree, config);

    install_panic_hook();
    let mut tui = Tui::new()?;
    let result = event_loop(&mut tui, &mut app, &theme);
    tui.restore()?;
    result
}

fn event_loop(tui: &mut Tui, app: &mut App, theme: &theme::ThemeColors) -> error::Result<()> {
    let events = EventHandler::new(Duration::from_millis(250));

    while !app.should_quit {
        tui.terminal_mut().draw(|frame| ui::render(app, theme, frame))?;

        match events.next()? {
            Event::Key(key) => handler::handle_key_event(app, key),
            Event::Tick | Event::Resize(_, _) => {}
        }
    }
    Ok(())
}
