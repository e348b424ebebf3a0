// walkthrough: step through a scripted product demo in the terminal

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use walkthrough::catalog;
use walkthrough::config::Config;
use walkthrough::logging;
use walkthrough::ui::{print, App};
use walkthrough::viewer::StepViewer;

#[derive(Parser)]
#[command(name = "walkthrough")]
#[command(about = "Step through a scripted product demo in the terminal")]
#[command(version)]
struct Cli {
    /// Step catalog (TOML). Defaults to the built-in demo.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Step to open first (1-based)
    #[arg(short, long, default_value_t = 1)]
    step: usize,

    /// Print the step to stdout instead of starting the TUI
    #[arg(short, long)]
    print: bool,

    /// With --print, print every step
    #[arg(long, requires = "print")]
    all: bool,

    /// Disable colors in --print output
    #[arg(long)]
    no_color: bool,

    /// Write the catalog as TOML to stdout and exit
    #[arg(long)]
    dump_catalog: bool,

    /// Log file for TUI mode (overrides config)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(path) = cli.log_file.clone() {
        config.logging.file = Some(path);
    }

    let is_tui_mode = !cli.print && !cli.dump_catalog;
    let logging_handle = logging::init_logging(&config.logging, is_tui_mode, cli.debug)?;
    if let Some(path) = &logging_handle.log_file_path {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let steps = match &cli.catalog {
        Some(path) => catalog::load(path)?,
        None => catalog::builtin(),
    };

    if cli.dump_catalog {
        print!("{}", catalog::to_toml(&steps)?);
        return Ok(());
    }

    let mut viewer = StepViewer::new(steps)?;
    let start = cli
        .step
        .checked_sub(1)
        .context("--step is 1-based; use 1 for the first step")?;
    viewer
        .select(start)
        .with_context(|| format!("cannot open step {}", cli.step))?;

    if cli.print {
        return print_steps(&mut viewer, cli.all, !cli.no_color);
    }

    run_tui(viewer, &config)
}

fn print_steps(viewer: &mut StepViewer, all: bool, color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let total = viewer.len();

    if all {
        for index in 0..total {
            viewer.select(index)?;
            if index > 0 {
                writeln!(out)?;
            }
            print::write_step(&mut out, &viewer.render(), total, color)?;
        }
    } else {
        print::write_step(&mut out, &viewer.render(), total, color)?;
    }

    out.flush()?;
    Ok(())
}

fn run_tui(viewer: StepViewer, config: &Config) -> Result<()> {
    tracing::info!(steps = viewer.len(), "starting walkthrough");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(viewer, &config.reveal);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
