use anyhow::{Context, Result};
use clap::ValueEnum;
use tessera_theme::{Projection, ThemeMode, project_tokens_with};

use super::ThemeArgs;
use crate::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TokenFormat {
    /// CSS custom properties
    Css,
    /// JSON object of token name to hex value
    Json,
}

pub struct TokensOptions {
    pub theme: ThemeArgs,
    pub mode: Option<ThemeMode>,
    pub projection: Option<Projection>,
    pub format: TokenFormat,
    pub selector: String,
    pub prefix: String,
}

pub fn execute(options: TokensOptions) -> Result<()> {
    let config = options.theme.resolve()?;
    let mode = options.mode.unwrap_or(config.mode);
    let projection = options.projection.unwrap_or(config.projection);
    let theme = super::build(&config)?;
    let tokens = project_tokens_with(&theme, mode, projection);

    let rendered = match options.format {
        TokenFormat::Css => tokens.to_css(&options.selector, &options.prefix),
        TokenFormat::Json => {
            serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?
        }
    };
    print!("{rendered}");
    if options.format == TokenFormat::Json {
        println!();
    }

    output::status(
        "Generated",
        format!(
            "{} {mode} tokens from {} ({}, {projection})",
            tokens.len(),
            theme.source,
            theme.variant
        ),
    );
    Ok(())
}
