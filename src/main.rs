#![warn(clippy::all, clippy::pedantic)]

use std::io;
use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, error, info};
use minofall::app::App;
use minofall::config::{self, Config};
use minofall::input::{KeyAction, map_key};
use minofall::ui;
use ratatui::{Terminal, prelude::*};

fn main() -> Result<()> {
    // Create log file and redirect stderr to it
    let log_path = "minofall.log";
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)
        .with_context(|| format!("failed to create log file {log_path}"))?;

    // Safety: dup2 on two descriptors we own; the log file outlives the process' use of stderr
    unsafe {
        libc::dup2(log_file.as_raw_fd(), io::stderr().as_raw_fd());
    }

    // Configure the logger to use stderr (which is now redirected to our file)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    info!("Starting minofall");

    let config = match config::load_config() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {e}; using defaults");
            Config::default()
        }
    };

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(33); // ~30 FPS
    let res = run_app(&mut terminal, App::new(config), tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("Game error: {err:?}");
        return Err(err);
    }

    info!("Exiting minofall");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    // Flush any pending input events that might be in the buffer
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }

    loop {
        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            terminal.draw(|f| ui::render(f, &app))?;
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                debug!("Key event: {key:?}");
                match map_key(key, app.session().is_game_over()) {
                    Some(KeyAction::Quit) => app.should_quit = true,
                    Some(KeyAction::Game(input)) => app.push_input(input),
                    None => {}
                }
            }
        }
    }
}
