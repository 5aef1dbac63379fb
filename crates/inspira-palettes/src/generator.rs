use crate::catalog::{theme_base, title_case, DEFAULT_THEME_BASE};
use crate::color::complementary;
use crate::error::ColorError;
use crate::model::{Palette, PaletteSource};

/// Builds `count` palettes from the theme's base colors plus the complement
/// of the first base color. Output depends only on `theme` and `count`.
pub fn generate(theme: &str, count: usize) -> Result<Vec<Palette>, ColorError> {
    let base = theme_base(theme);
    let colors = palette_colors(base)?;
    let title = title_case(theme);

    Ok((0..count)
        .map(|i| Palette {
            id: format!("{theme}-generated-{i}"),
            name: format!("{title} Palette {}", i + 1),
            colors: colors.clone(),
            source: PaletteSource::Generated,
        })
        .collect())
}

fn palette_colors(base: &[&str]) -> Result<[String; 5], ColorError> {
    // Short bases borrow the missing slots from the default base.
    let slot = |i: usize| base.get(i).copied().unwrap_or(DEFAULT_THEME_BASE[i]);
    let accent = complementary(slot(0))?;
    Ok([
        slot(0).to_string(),
        slot(1).to_string(),
        slot(2).to_string(),
        slot(3).to_string(),
        accent,
    ])
}
