use std::{
    io::{self, BufRead},
    path::Path,
    sync::Arc,
};

use anyhow::{Context, Result};
use tessera_theme::{
    DEFAULT_CSS_PREFIX, StoreEvent, StoreOptions, ThemeMode, ThemeStore, TokenMap,
};

use crate::output;

/// Feeds stdin into a [`ThemeStore`].
///
/// Each line is a seed color, `light`/`dark` to switch modes or `toggle` to
/// flip the mode. Blank lines and lines starting with `#` followed by a space
/// are skipped.
pub fn execute(config: Option<&Path>, selector: &str) -> Result<()> {
    let config = super::load_config(config)?;
    let store = match &config {
        Some(config) => ThemeStore::with_engine(config.engine(), config.store_options()),
        None => ThemeStore::new(StoreOptions::default()),
    }
    .context("Invalid theme settings in config")?;

    let selector = selector.to_owned();
    store.attach_surface(Arc::new(move |tokens: &TokenMap| {
        println!("{}", tokens.to_css(&selector, DEFAULT_CSS_PREFIX));
    }));
    store.subscribe(|event| match event {
        StoreEvent::ThemeChanged(snapshot) => output::status(
            "Published",
            format!("{} ({})", snapshot.theme.source, snapshot.mode),
        ),
        StoreEvent::ModeChanged(snapshot) => {
            output::status("Switched", format!("to {}", snapshot.mode))
        }
        StoreEvent::BuildFailed(_) => {}
    });

    if let Some(config) = &config
        && let Err(err) = store.set_source_color(config.seed.clone())
    {
        output::error(format!("config seed {}: {err}", config.seed));
    }

    let stdin = io::stdin();
    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with("# ") {
            continue;
        }

        if line.eq_ignore_ascii_case("toggle") {
            store.toggle_mode();
            continue;
        }
        if let Ok(mode) = line.parse::<ThemeMode>() {
            store.set_mode(mode);
            continue;
        }
        if let Err(err) = store.set_source_color(line) {
            output::error(format!("line {}: {err}", index + 1));
            if store.is_ready() {
                output::note("keeping the previous theme");
            }
        }
    }

    Ok(())
}
