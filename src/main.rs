use anyhow::Context;
use clap::{Parser, Subcommand};
use pagekit::{init_logging, Config, ExportPlanner, Session};
use pagekit_settings::ConfigFormat;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "pagekit",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about = "Plan PDF assembly and export with pdftk"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (.toml or .json); defaults to the platform config directory.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset (overrides the config file).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a session file and print the pdftk invocation without running it.
    Plan {
        /// Session file (JSON).
        #[arg(value_name = "SESSION")]
        session: PathBuf,

        /// Output PDF (overrides the session and the config).
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Print the plan as JSON instead of a command line.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML.
    Config,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            Err(_) => Ok(Config::default()),
        },
    }
}

fn plan(
    config: &Config,
    session_path: &Path,
    output: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let session = Session::load(session_path)?;
    let base_dir = session_path.parent().unwrap_or_else(|| Path::new(""));
    let documents = session.replay(base_dir, config.editor.last_page_policy)?;

    let output = output
        .or_else(|| session.output.as_ref().map(|out| base_dir.join(out)))
        .unwrap_or_else(|| base_dir.join(&config.export.output_file_name));

    let planner = ExportPlanner::with_program(&config.export.pdftk_path);
    let plan = planner
        .plan(documents.export_inputs(), &output)
        .context("Failed to plan export")?;

    tracing::info!(
        "{} documents, {} pages, {} ranges",
        plan.bindings().len(),
        plan.page_count(),
        plan.tokens().len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", plan.command_line()?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(level)?;

    match cli.command {
        Command::Plan {
            session,
            output,
            json,
        } => plan(&config, &session, output, json),
        Command::Config => {
            print!("{}", config.render(ConfigFormat::Toml)?);
            Ok(())
        }
    }
}
