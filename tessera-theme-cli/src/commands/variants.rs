use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use tessera_theme::{
    ColorRole, MaterialPaletteEngine, Rgb, Scheme, ThemeBuilder, ThemeMode, Variant,
};

use crate::output;

const KEY_ROLES: [ColorRole; 6] = [
    ColorRole::Primary,
    ColorRole::Secondary,
    ColorRole::Tertiary,
    ColorRole::PrimaryContainer,
    ColorRole::Surface,
    ColorRole::SurfaceVariant,
];

pub fn execute(seed: &str, mode: ThemeMode, contrast: f64) -> Result<()> {
    let builder = ThemeBuilder::new(MaterialPaletteEngine::default());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec![Cell::new("variant").add_attribute(Attribute::Bold)];
    header.extend(
        KEY_ROLES
            .iter()
            .map(|role| Cell::new(role.token_name()).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for variant in Variant::ALL {
        let theme = builder
            .build(seed, variant, contrast, &[])
            .with_context(|| format!("Failed to build {variant} theme from {seed}"))?;
        let scheme = theme.scheme(mode);
        let mut row = vec![Cell::new(variant.name())];
        row.extend(KEY_ROLES.iter().map(|role| swatch(scheme, *role)));
        table.add_row(row);
    }

    println!("{table}");
    output::note(format!("{mode} schemes at contrast {contrast}"));
    Ok(())
}

/// The role's hex value on its own color, written in its content color.
fn swatch(scheme: &Scheme, role: ColorRole) -> Cell {
    let background = scheme.role(role);
    let cell = Cell::new(background.to_hex()).bg(table_color(background));
    match Scheme::content_role_for(role) {
        Some(content) => cell.fg(table_color(scheme.role(content))),
        None => cell,
    }
}

fn table_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}
