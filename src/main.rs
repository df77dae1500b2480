//! maturity-pulse: AI maturity self-assessment engine
//!
//! Scores pulse-check answers per pillar, evaluates context gates and
//! produces ranked executive guidance.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use maturity_pulse::{
    cli::{self, CatalogSection},
    config::{AppConfig, CliOverrides, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "maturity-pulse")]
#[command(version)]
#[command(about = "Deterministic AI-maturity pulse assessment", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Assessment completed
    1  Average maturity below --min-average
    2  Gates triggered with --fail-on-gates
    3  Error occurred

EXAMPLES:
    # Score a pulse check and print a terminal summary
    maturity-pulse assess team.json

    # CI check: fail when any safeguard applies
    maturity-pulse assess team.json -o json --fail-on-gates

    # Explain every gate against a context profile
    maturity-pulse gates profile.json --explain

    # Compare many teams at once
    maturity-pulse batch teams/*.json -o markdown -O pulse.md")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "MATURITY_PULSE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long, global = true)]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by commands that produce an assessment.
#[derive(Parser)]
struct AssessmentArgs {
    /// Skip unknown questions and off-scale answers instead of failing
    #[arg(long)]
    lenient: bool,

    /// Exit with code 2 if any gate fires
    #[arg(long)]
    fail_on_gates: bool,

    /// Exit with code 1 if the average maturity (0-3) is below this value
    #[arg(long)]
    min_average: Option<f64>,

    /// Leave the value overlay out of the report
    #[arg(long)]
    no_overlay: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one input document (profile + responses)
    Assess {
        /// Path to the assessment JSON document
        input: PathBuf,

        #[command(flatten)]
        args: AssessmentArgs,
    },

    /// Evaluate a context profile against the gate catalog
    Gates {
        /// Path to a profile JSON (bare or inside an assessment document)
        profile: PathBuf,

        /// Show every gate with actual values and required thresholds
        #[arg(long)]
        explain: bool,

        /// Exit with code 2 if any gate fires
        #[arg(long)]
        fail_on_gates: bool,
    },

    /// Show context-aware value-overlay metric defaults for a profile
    Metrics {
        /// Path to a profile JSON (bare or inside an assessment document)
        profile: PathBuf,
    },

    /// Print the question, gate and metric catalogs
    Catalog {
        /// Section to print
        #[arg(value_enum, default_value_t = CatalogSection::All)]
        section: CatalogSection,
    },

    /// Assess many input documents in parallel
    Batch {
        /// Assessment JSON documents
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        args: AssessmentArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .maturity-pulse.yaml in the current directory
    Init,
    /// Print the JSON Schema for the config file format
    Schema,
}

impl Cli {
    fn overrides(&self, args: Option<&AssessmentArgs>) -> CliOverrides {
        let mut overrides = CliOverrides {
            format: self.output,
            output_file: self.output_file.clone(),
            no_color: self.no_color,
            quiet: self.quiet,
            ..CliOverrides::default()
        };
        if let Some(args) = args {
            overrides.lenient = args.lenient;
            overrides.fail_on_gates = args.fail_on_gates;
            overrides.min_average = args.min_average;
            overrides.no_overlay = args.no_overlay;
        }
        overrides
    }

    fn load_config(&self, args: Option<&AssessmentArgs>) -> Result<AppConfig> {
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(self.config.as_deref(), &self.overrides(args));
        if let Some(path) = loaded_from {
            tracing::debug!("Using config file {}", path.display());
        }
        let errors = config.validate();
        if !errors.is_empty() {
            let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
            anyhow::bail!("invalid configuration:\n  {}", listed.join("\n  "));
        }
        Ok(config)
    }
}

fn exit_with(code: i32) -> Result<()> {
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match &cli.command {
        Commands::Assess { input, args } => {
            let config = cli.load_config(Some(args))?;
            exit_with(cli::run_assess(input, &config)?)
        }

        Commands::Gates {
            profile,
            explain,
            fail_on_gates,
        } => {
            let mut config = cli.load_config(None)?;
            if *fail_on_gates {
                config.assessment.fail_on_gates = true;
            }
            exit_with(cli::run_gates(profile, *explain, &config)?)
        }

        Commands::Metrics { profile } => {
            let config = cli.load_config(None)?;
            cli::run_metrics(profile, &config)
        }

        Commands::Catalog { section } => {
            let config = cli.load_config(None)?;
            cli::run_catalog(*section, &config)
        }

        Commands::Batch { inputs, args } => {
            let config = cli.load_config(Some(args))?;
            exit_with(cli::run_batch(inputs, &config)?)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    maturity_pulse::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths = [
                    std::env::current_dir().ok(),
                    maturity_pulse::config::user_config_dir(),
                    dirs::home_dir(),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {}", path.display());
                }
                eprintln!("  (plus the enclosing git repository root)");
                eprintln!();
                match maturity_pulse::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".maturity-pulse.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = maturity_pulse::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema => {
                let schema = maturity_pulse::config::generate_json_schema()
                    .context("failed to render config schema")?;
                match &cli.output_file {
                    Some(path) => std::fs::write(path, schema)
                        .with_context(|| format!("failed to write {}", path.display()))?,
                    None => println!("{schema}"),
                }
                Ok(())
            }
        },
    }
}
