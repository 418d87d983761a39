// SkinConsult - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Dispatch to the recommend / interactive / options / classify commands

use clap::{Args, Parser, Subcommand};
use skinconsult::app::catalog_store::CatalogStore;
use skinconsult::app::consultant;
use skinconsult::core::classify::classify;
use skinconsult::core::model::{Concern, RoutineRequest, SkinType};
use skinconsult::platform::config::{self, AppConfig, OutputFormat, PlatformPaths};
use skinconsult::platform::fs;
use skinconsult::ui::report::{self, ReportOptions};
use skinconsult::util::constants;
use skinconsult::util::error::ConsultError;
use std::io;
use std::path::{Path, PathBuf};

/// SkinConsult - skincare routine consultant.
///
/// Builds a morning, evening and night product routine from a CSV catalog
/// for a given skin type and concern, optionally avoiding an ingredient.
#[derive(Parser, Debug)]
#[command(name = "skinconsult", version, about)]
struct Cli {
    /// Product catalog CSV (overrides config).
    #[arg(short = 'c', long = "catalog", global = true)]
    catalog: Option<PathBuf>,

    /// Explicit config.toml (errors reading it are fatal).
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a routine for one profile.
    Recommend(RecommendArgs),

    /// Prompt for profiles repeatedly, loading the catalog once.
    Interactive(OutputArgs),

    /// List the accepted skin types and concerns.
    Options,

    /// Show the routine step assigned to each product name.
    Classify {
        /// Product names to classify.
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct RecommendArgs {
    /// Skin type (Oily, Dry, Combination, Normal, Sensitive).
    #[arg(short = 's', long = "skin-type")]
    skin_type: SkinType,

    /// Primary concern (Acne, Pigmentation, Hydration, "Sun protection", Pimples).
    #[arg(short = 'k', long = "concern")]
    concern: Concern,

    /// Allergy guard: skip products whose name contains this text.
    #[arg(short = 'a', long = "avoid")]
    avoid: Option<String>,

    /// Write the result to a file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output format: text, json or csv (overrides config).
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,

    /// Omit the title and footer captions from text output.
    #[arg(long = "no-captions")]
    no_captions: bool,
}

impl OutputArgs {
    fn format(&self, config: &AppConfig) -> OutputFormat {
        self.format.unwrap_or(config.output_format)
    }

    fn report_options(&self, config: &AppConfig) -> ReportOptions {
        ReportOptions {
            show_captions: config.show_captions && !self.no_captions,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are replayed below.
    let (app_config, config_warnings) = match cli.config.as_deref() {
        Some(path) => match config::load_config_file(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Error: {}", ConsultError::from(e));
                std::process::exit(constants::EXIT_FAILURE);
            }
        },
        None => config::load_config(&PlatformPaths::resolve().config_dir),
    };

    skinconsult::util::logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "SkinConsult starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    match run(&cli, &app_config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            std::process::exit(constants::EXIT_FAILURE);
        }
    }
}

/// Execute the selected command, returning the process exit code.
fn run(cli: &Cli, app_config: &AppConfig) -> Result<i32, ConsultError> {
    let stdout = io::stdout();
    match &cli.command {
        Command::Recommend(args) => {
            let store = catalog_store(cli, app_config);
            let request = RoutineRequest::from_profile(args.skin_type, args.concern, args.avoid.clone());
            let format = args.output.format(app_config);
            let options = args.output.report_options(app_config);

            let matched = match args.output_file.as_deref() {
                Some(path) => {
                    let mut file = open_output(path)?;
                    let matched = consultant::recommend(&store, &request, format, options, &mut file, path)?;
                    tracing::info!(path = %path.display(), format = format.label(), "Routine written");
                    matched
                }
                None => consultant::recommend(
                    &store,
                    &request,
                    format,
                    options,
                    &mut stdout.lock(),
                    Path::new("<stdout>"),
                )?,
            };

            if matched {
                Ok(0)
            } else {
                // The text report already carries the message.
                if format != OutputFormat::Text || args.output_file.is_some() {
                    eprintln!("{}", constants::NO_MATCH_MESSAGE);
                }
                Ok(constants::EXIT_NO_MATCH)
            }
        }
        Command::Interactive(args) => {
            let store = catalog_store(cli, app_config);
            let format = args.format(app_config);
            let options = args.report_options(app_config);
            let stdin = io::stdin();
            let mut input = stdin.lock();

            let stats = consultant::run_interactive(
                &store,
                format,
                options,
                &mut input,
                &mut stdout.lock(),
            )?;
            eprintln!(
                "{} routine(s) built, {} without matching products.",
                stats.routines, stats.no_matches
            );
            Ok(0)
        }
        Command::Options => {
            report::render_options(&mut stdout.lock()).map_err(stdout_err)?;
            Ok(0)
        }
        Command::Classify { names } => {
            let rows: Vec<_> = names.iter().map(|n| (n.clone(), classify(n))).collect();
            report::render_classification(&rows, &mut stdout.lock()).map_err(stdout_err)?;
            Ok(0)
        }
    }
}

fn catalog_store(cli: &Cli, app_config: &AppConfig) -> CatalogStore {
    let path = app_config.resolve_catalog_path(cli.catalog.as_deref());
    tracing::debug!(path = %path.display(), "Catalog source selected");
    CatalogStore::new(path)
}

fn open_output(path: &Path) -> Result<io::BufWriter<std::fs::File>, ConsultError> {
    fs::create_output_file(path).map_err(|source| ConsultError::Io {
        path: path.to_path_buf(),
        operation: "create output",
        source,
    })
}

fn stdout_err(source: io::Error) -> ConsultError {
    ConsultError::Io {
        path: PathBuf::from("<stdout>"),
        operation: "write",
        source,
    }
}
