mod config;
mod error;
mod models;
mod ui;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Config, default_config_path, load_config};
use crate::ui::{App, render};

#[derive(Parser, Debug)]
#[command(author, version, about = "jotlist: a small in-memory list manager", long_about = None)]
struct Cli {
    /// Path to the config file (defaults to <config_dir>/jotlist/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file. Filter with JOTLIST_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// 终端被 TUI 占用，只在指定日志文件时安装 subscriber
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("JOTLIST_LOG")
        .unwrap_or_else(|_| EnvFilter::new("jotlist=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        .init();
    Ok(())
}

fn load(cli: &Cli) -> Result<Config> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => default_config_path(),
    };

    match path {
        Some(path) => load_config(&path).context("failed to load config"),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load(&cli)?;
    init_tracing(cli.log_file.as_ref().or(config.log_file.as_ref()))?;

    let mut app = App::new(config.title, config.theme);
    info!("starting");

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    let restored = restore_terminal(&mut terminal);

    info!(items = app.store.len(), "exiting");
    finish(result, restored)
}

/// 合并主循环与终端恢复的结果，主循环的错误优先
fn finish(result: io::Result<()>, restored: io::Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            tracing::error!(error = %restore_err, "failed to restore terminal");
            Err(err).context("terminal loop failed")
        }
        (Err(err), Ok(())) => Err(err).context("terminal loop failed"),
        (Ok(()), restored) => restored.context("failed to restore terminal"),
    }
}

/// 依次执行全部恢复步骤，返回第一个错误
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(message: &str) -> io::Result<()> {
        Err(io::Error::other(message.to_string()))
    }

    #[test]
    fn test_finish_ok() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_finish_keeps_loop_error_when_restore_fails() {
        let err = finish(failure("read failed"), failure("raw mode")).unwrap_err();
        assert_eq!(err.to_string(), "terminal loop failed");
        assert_eq!(err.root_cause().to_string(), "read failed");
    }

    #[test]
    fn test_finish_reports_restore_error() {
        let err = finish(Ok(()), failure("raw mode")).unwrap_err();
        assert_eq!(err.to_string(), "failed to restore terminal");
        assert_eq!(err.root_cause().to_string(), "raw mode");
    }
}
