use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::{error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use animal_tables::controller::Controller;
use animal_tables::domain::{AppConfig, AppError};
use animal_tables::html;
use animal_tables::model::{Model, Status};
use animal_tables::ui::TableUI;

/// Editable, sortable animal tables.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Write the tables as an HTML page to this path ("-" for stdout) and exit
    #[arg(long)]
    html: Option<String>,

    /// Log file, the terminal is used by the ui
    #[arg(long, default_value = "animal-tables.log")]
    log_file: String,

    /// Event poll time in milliseconds
    #[arg(long, default_value_t = 100)]
    poll_ms: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Err(e) => {
            error!("Exiting with error: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}

fn expand_path(path: &str) -> Result<PathBuf, AppError> {
    shellexpand::full(path)
        .map(|p| PathBuf::from(p.as_ref()))
        .map_err(|e| AppError::InvalidPath(e.to_string()))
}

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| AppError::LoggingSetup(e.to_string()))
}

fn run(args: Args) -> Result<(), AppError> {
    let cfg = AppConfig::default()
        .event_poll_time(args.poll_ms)
        .log_file(expand_path(&args.log_file)?);
    init_logging(&cfg.log_file)?;
    info!("Starting animal tables with {cfg:?}");

    let mut model = Model::init(&cfg)?;

    if let Some(target) = args.html {
        let page = html::render_page(&model.views());
        if target == "-" {
            std::io::stdout().write_all(page.as_bytes())?;
        } else {
            let path = expand_path(&target)?;
            std::fs::write(&path, page)?;
            info!("Wrote html page to {}", path.display());
        }
        return Ok(());
    }

    let mut ui = TableUI::new(&cfg);
    let controller = Controller::new(&cfg);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut model, &mut ui, &controller);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    model: &mut Model,
    ui: &mut TableUI,
    controller: &Controller,
) -> Result<(), AppError> {
    while model.status != Status::Quitting {
        // Render the current view
        terminal.draw(|f| ui.draw(&model.get_uidata(), f))?;

        // Handle events and map to a Message
        if let Some(message) = controller.handle_event(model)? {
            model.update(Some(message))?;
        };
    }
    Ok(())
}
