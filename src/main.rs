use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wochenplan::{catalog, config, generate, index, naming, output, refresh, regenerate};

#[derive(Parser)]
#[command(name = "wochenplan")]
#[command(about = "Weekly meal-plan generator")]
#[command(long_about = "\
Weekly meal-plan generator

Picks three meals (one quick, one freezer-friendly, one salad), two snacks
and a beverage tip from the built-in recipe catalog and writes them as text
and HTML into the output directory:

  wochenplaene/
  ├── index.html                   # All plans, grouped by ISO year
  ├── wochenplan_2024-05-10.txt    # Canonical text, edit this by hand
  ├── wochenplan_2024-05-10.html   # Canonical page
  ├── kw19-2024.txt / .html        # Week alias
  └── kw19.txt / .html             # Legacy week alias

After editing a text file, 'wochenplan render' rebuilds the pages.

Run 'wochenplan gen-config' to generate a documented wochenplan.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = defaults)
    #[arg(long, default_value = "wochenplan.toml", global = true)]
    config: PathBuf,

    /// Output directory (overrides output_dir from the config)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select and write this week's plan (only on the generation day)
    Generate {
        /// Ignore the generation day and overwrite existing files
        #[arg(long)]
        force: bool,
        /// Date the plan N weeks from today
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        week_offset: i64,
    },
    /// Generate a plan only if the target week has none yet
    Refresh {
        /// Run the generator even if a plan exists
        #[arg(long)]
        force: bool,
        /// Target week relative to the current one
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        week_offset: i64,
        /// Shorthand for one additional week of offset
        #[arg(long)]
        next_week: bool,
    },
    /// Rebuild HTML pages from the plan text files
    Render {
        /// Plan directory (defaults to the configured output directory)
        #[arg(value_name = "DIR")]
        plan_dir: Option<PathBuf>,
        /// Skip regenerating index.html
        #[arg(long)]
        no_index: bool,
    },
    /// Rebuild index.html only
    Index,
    /// Print a stock wochenplan.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fehler: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let now = Local::now().naive_local();
    let today = now.date();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Generate { force, week_offset } => {
            let config = load_config(&cli.config, cli.dir.as_ref())?;
            let options = generate::GenerateOptions { force, week_offset };
            let report = generate::generate(
                &config,
                &catalog::builtin(),
                &options,
                today,
                now,
                &mut rand::rng(),
            )?;
            output::print_generate_output(&report);
        }
        Command::Refresh {
            force,
            week_offset,
            next_week,
        } => {
            let config = load_config(&cli.config, cli.dir.as_ref())?;
            let options = refresh::RefreshOptions {
                force,
                week_offset,
                next_week,
            };
            let mut generator = refresh::SubprocessGenerator {
                exe: std::env::current_exe()?,
                config: cli.config.clone(),
                dir: cli.dir.clone(),
            };
            let outcome = refresh::refresh(&config.output_path(), &options, today, &mut generator)?;
            output::print_refresh_output(&outcome);
        }
        Command::Render { plan_dir, no_index } => {
            let config = load_config(&cli.config, cli.dir.as_ref())?;
            let dir = plan_dir.unwrap_or_else(|| config.output_path());
            let title = (!no_index).then_some(config.index.title.as_str());
            let report = regenerate::regenerate(&dir, title, now)?;
            output::print_regenerate_output(&report);
        }
        Command::Index => {
            let config = load_config(&cli.config, cli.dir.as_ref())?;
            let stamp = naming::format_timestamp(now);
            let (path, plans) =
                index::write_index(&config.output_path(), &config.index.title, &stamp)?;
            output::print_index_output(&path, plans);
        }
    }

    Ok(())
}

/// Load the config file and apply the `--dir` override.
fn load_config(
    path: &Path,
    dir: Option<&PathBuf>,
) -> Result<config::PlannerConfig, config::ConfigError> {
    let mut config = config::load_config(path)?;
    if let Some(dir) = dir {
        config.output_dir = dir.display().to_string();
    }
    tracing::debug!(?config, "config loaded");
    Ok(config)
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
