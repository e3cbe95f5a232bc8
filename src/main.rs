use analysis_toolkit::analysis::report;
use analysis_toolkit::analysis::returns::calculate_daily_returns;
use analysis_toolkit::config::{Config, DEFAULT_CONFIG_PATH};
use analysis_toolkit::templates::emitter::TemplateEmitter;
use analysis_toolkit::templates::{prompt_base_name, resolve_base_name};
use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "analysis-toolkit")]
#[command(about = "Daily return calculator and analysis template generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the YAML config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Append a daily_return column to a price CSV and print the full table
    Returns {
        /// Price CSV (defaults to returns.input_path from the config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Also write the augmented table as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write <name>.py and <name>.ipynb starter files
    Generate {
        /// Base file name; prompted for when omitted
        #[arg(short, long)]
        name: Option<String>,

        /// Directory to write into (defaults to templates.output_dir)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    match cli.command {
        Commands::Returns { input, output } => {
            let input = input.unwrap_or_else(|| config.returns.input_path.clone());
            let calculator = config.return_calculator();

            let mut df = calculate_daily_returns(&input, &calculator)
                .with_context(|| format!("Failed to calculate returns for {}", input.display()))?;
            println!("{}", report::render_table(&df));

            if let Some(output) = output {
                report::write_csv(&mut df, &output)?;
            }
        }

        Commands::Generate { name, output_dir } => {
            let fallback = config.templates.default_base_name.as_str();
            let base_name = match name {
                Some(name) => resolve_base_name(&name, fallback),
                None => prompt_base_name(io::stdin().lock(), io::stdout(), fallback)?,
            };

            let emitter = match output_dir {
                Some(dir) => TemplateEmitter::new(dir),
                None => config.template_emitter(),
            };

            let today = Local::now().date_naive();
            let script = emitter.emit_script(&base_name, today)?;
            println!("Created Python script: {}", script.display());
            let notebook = emitter.emit_notebook(&base_name, today)?;
            println!("Created Jupyter notebook: {}", notebook.display());

            println!("\nFiles created successfully!");
            println!("- Python script: {}", script.display());
            println!("- Jupyter notebook: {}", notebook.display());
        }
    }

    Ok(())
}
