use clap::{Parser, ValueEnum};
use roiplan::{App, init_logging, report};
use roiplan_core::{ParamField, ParameterSet, derive_metrics, validate};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roiplan")]
#[command(about = "A terminal-based ROI estimator for production-management improvements")]
struct Args {
    /// Path to the data directory (default: ~/.roiplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Override a parameter before starting, e.g. --set numberOfLines=25
    #[arg(short, long, value_name = "FIELD=VALUE")]
    set: Vec<String>,

    /// Print a report to stdout instead of starting the UI
    #[arg(short, long, value_enum)]
    report: Option<ReportFormat>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roiplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let mut params = ParameterSet::default();
    for assignment in &args.set {
        let (field, value) = ParamField::parse_assignment(assignment)?;
        field.set(&mut params, value);
    }

    if let Some(format) = args.report {
        let metrics = derive_metrics(&params);
        let warnings = validate(&params);
        match format {
            ReportFormat::Text => print!("{}", report::render_text(&params, &metrics, &warnings)),
            ReportFormat::Json => {
                println!("{}", report::render_json(&params, &metrics, &warnings)?)
            }
        }
        return Ok(());
    }

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_params(params);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
