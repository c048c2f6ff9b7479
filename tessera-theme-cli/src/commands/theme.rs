use anyhow::{Context, Result};

use super::ThemeArgs;
use crate::output;

pub fn execute(args: &ThemeArgs) -> Result<()> {
    let config = args.resolve()?;
    let theme = super::build(&config)?;
    let json = serde_json::to_string_pretty(&theme).context("Failed to serialize theme")?;
    println!("{json}");

    output::status(
        "Generated",
        format!(
            "{} theme from {} with {} custom colors",
            theme.variant,
            theme.source,
            theme.custom_colors.len()
        ),
    );
    Ok(())
}
