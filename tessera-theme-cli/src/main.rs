use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tessera_theme::{Projection, ThemeMode};

mod commands;
mod output;

use commands::{ThemeArgs, tokens::TokenFormat};

#[derive(Parser)]
#[command(name = "tessera-theme")]
#[command(version, about = "Material 3 color themes from a seed color", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the design tokens of one mode
    Tokens {
        #[command(flatten)]
        theme: ThemeArgs,
        /// Light or dark tokens (default from config, or light)
        #[arg(short, long)]
        mode: Option<ThemeMode>,
        /// Token projection policy (role-direct or tone-direct)
        #[arg(short, long)]
        projection: Option<Projection>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = TokenFormat::Css)]
        format: TokenFormat,
        /// CSS selector the custom properties are declared on
        #[arg(long, default_value = ":root")]
        selector: String,
        /// CSS custom property prefix
        #[arg(long, default_value = tessera_theme::DEFAULT_CSS_PREFIX)]
        prefix: String,
    },
    /// Print the full theme (both schemes and custom colors) as JSON
    Theme {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Compare key roles across all variants
    Variants {
        /// Seed color, e.g. #006494
        #[arg(short, long)]
        seed: String,
        /// Light or dark scheme
        #[arg(short, long, default_value_t = ThemeMode::Light)]
        mode: ThemeMode,
        /// Contrast level in [-1.0, 1.0]
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        contrast: f64,
    },
    /// Read seed colors from stdin and print each republished stylesheet
    Stream {
        /// Path to a tessera-theme.toml (default: ./tessera-theme.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
        /// CSS selector the custom properties are declared on
        #[arg(long, default_value = ":root")]
        selector: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Tokens {
            theme,
            mode,
            projection,
            format,
            selector,
            prefix,
        } => {
            commands::tokens::execute(commands::tokens::TokensOptions {
                theme,
                mode,
                projection,
                format,
                selector,
                prefix,
            })?;
        }
        Commands::Theme { theme } => {
            commands::theme::execute(&theme)?;
        }
        Commands::Variants {
            seed,
            mode,
            contrast,
        } => {
            commands::variants::execute(&seed, mode, contrast)?;
        }
        Commands::Stream { config, selector } => {
            commands::stream::execute(config.as_deref(), &selector)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,tessera_theme=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
