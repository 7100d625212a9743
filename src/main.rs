use clap::{Parser, Subcommand};
use recipe_scale::config::{LoggingSettings, Settings};
use recipe_scale::core::{convert, infer_scaling_rule, list_units, present_in_system, scale_cooking_time, Scaler};
use recipe_scale::models::{ConversionResponse, ErrorResponse, RecipeInput, UnitSystem};
use recipe_scale::ScalingError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Scale recipes and convert kitchen units
#[derive(Parser)]
#[command(name = "recipe-scale")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to config/default.toml + config/local.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale a recipe file (JSON or TOML) to a new serving count
    Scale {
        /// Recipe file
        file: PathBuf,

        /// Target serving count
        #[arg(short, long)]
        servings: u32,

        /// Override the recipe's own serving count
        #[arg(short, long)]
        base_servings: Option<u32>,

        /// Present amounts in this measurement system (metric, imperial)
        #[arg(long)]
        system: Option<UnitSystem>,
    },

    /// Convert an amount between units
    Convert {
        amount: f64,
        from: String,
        to: String,
    },

    /// List known units
    Units,

    /// Show the default scaling rule for ingredient names
    Infer {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Scale a cook or prep time in minutes
    Time {
        minutes: u32,

        /// Serving count the time was written for
        #[arg(long)]
        from: u32,

        /// Target serving count
        #[arg(long)]
        to: u32,
    },
}

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Scaling(#[from] ScalingError),
}

impl CliError {
    fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "invalid_config",
            CliError::Io { .. } => "io_error",
            CliError::Json(_) => "invalid_json",
            CliError::Toml(_) => "invalid_toml",
            CliError::Validation(_) => "validation_failed",
            CliError::Scaling(_) => "scaling_error",
        }
    }
}

/// Command-line front end for the recipe scaling engine.
///
/// ```bash
/// # Scale a recipe file to 8 servings
/// recipe-scale scale bread.json --servings 8
///
/// # Same, presenting amounts in imperial units
/// recipe-scale scale bread.toml --servings 8 --system imperial
///
/// # Convert between units
/// recipe-scale convert 2 cups ml
///
/// # List known units, guess rules, scale a bake time
/// recipe-scale units
/// recipe-scale infer "dry yeast" "sea salt"
/// recipe-scale time 35 --from 8 --to 16
/// ```
///
/// Results are printed to stdout as JSON; logs go to stderr.
fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match settings {
        Ok(settings) => {
            init_logging(&settings.logging);
            settings
        }
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return fail(CliError::from(e));
        }
    };

    info!("Configuration loaded");

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(e),
    }
}

/// Initialize logging on stderr; RUST_LOG overrides the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn fail(err: CliError) -> ExitCode {
    error!("{}", err);

    let response = ErrorResponse {
        error: err.code().to_string(),
        message: err.to_string(),
    };
    if let Ok(json) = serde_json::to_string_pretty(&response) {
        println!("{}", json);
    }

    ExitCode::FAILURE
}

fn run(command: Commands, settings: &Settings) -> Result<(), CliError> {
    match command {
        Commands::Scale {
            file,
            servings,
            base_servings,
            system,
        } => {
            let input = read_recipe(&file)?;
            input.validate()?;

            let mut recipe = input.into_recipe(settings.scaling.default_servings);
            if let Some(base) = base_servings {
                recipe.servings = base;
            }

            let scaler = Scaler::new(settings.scaling.negative_amounts);

            info!(
                "Scaling '{}' from {} to {} servings ({} ingredients, negative amounts: {:?})",
                recipe.title,
                recipe.servings,
                servings,
                recipe.ingredients.len(),
                scaler.policy()
            );

            let mut scaled = scaler.scale_recipe_card(&recipe, servings)?;

            if let Some(system) = system.or(settings.units.preferred_system) {
                scaled.ingredients = scaled
                    .ingredients
                    .into_iter()
                    .map(|ingredient| present_in_system(ingredient, system))
                    .collect();
            }

            print_json(&scaled)
        }
        Commands::Convert { amount, from, to } => {
            let result = convert(amount, &from, &to)?;
            print_json(&ConversionResponse {
                amount,
                from,
                to,
                result,
            })
        }
        Commands::Units => print_json(&list_units()),
        Commands::Infer { names } => {
            let rules: Vec<_> = names
                .iter()
                .map(|name| serde_json::json!({ "name": name, "scalingRule": infer_scaling_rule(name) }))
                .collect();
            print_json(&rules)
        }
        Commands::Time { minutes, from, to } => {
            let scaled = scale_cooking_time(minutes, from, to)?;
            print_json(&serde_json::json!({
                "baseMinutes": minutes,
                "baseServings": from,
                "servings": to,
                "minutes": scaled,
            }))
        }
    }
}

/// Read a recipe file, choosing the format by extension
fn read_recipe(path: &Path) -> Result<RecipeInput, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(serde_json::from_str(&contents)?)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
