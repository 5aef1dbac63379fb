//! Compiled-in palette data: the tag list, hand-picked palettes and the base
//! colors the generator works from.

use std::fmt::{Display, Formatter};

use crate::error::PaletteError;
use crate::model::{owned_colors, Palette, PaletteSource};

pub const TAGS: [&str; 24] = [
    "autumn",
    "cold",
    "cyberpunk",
    "beach",
    "desert",
    "neon",
    "harvest",
    "frost",
    "vintage",
    "blossom",
    "storm",
    "ocean",
    "forest",
    "sunset",
    "gradient",
    "pastel",
    "warm",
    "monochrome",
    "tropical",
    "spring",
    "winter",
    "summer",
    "elegant",
    "cozy",
];

pub const DEFAULT_THEME_BASE: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"];

pub const FALLBACK_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CuratedPalette {
    pub name: &'static str,
    pub colors: [&'static str; 5],
}

const CURATED: &[(&str, &[CuratedPalette])] = &[
    (
        "autumn",
        &[
            CuratedPalette {
                name: "Autumn Leaves",
                colors: ["#8B4513", "#CD853F", "#D2691E", "#FF8C00", "#FFD700"],
            },
            CuratedPalette {
                name: "Harvest Moon",
                colors: ["#B8860B", "#DAA520", "#F4A460", "#DEB887", "#D2B48C"],
            },
        ],
    ),
    (
        "cyberpunk",
        &[
            CuratedPalette {
                name: "Neon Nights",
                colors: ["#FF00FF", "#00FFFF", "#FF1493", "#7FFF00", "#1E90FF"],
            },
            CuratedPalette {
                name: "Digital Dreams",
                colors: ["#FF0080", "#8000FF", "#0080FF", "#00FF80", "#FF8000"],
            },
        ],
    ),
    (
        "beach",
        &[
            CuratedPalette {
                name: "Ocean Breeze",
                colors: ["#4682B4", "#87CEEB", "#B0E0E6", "#F0F8FF", "#E0FFFF"],
            },
            CuratedPalette {
                name: "Sunset Beach",
                colors: ["#FF7F50", "#FF6347", "#FFD700", "#FFA500", "#FF69B4"],
            },
        ],
    ),
    (
        "cold",
        &[
            CuratedPalette {
                name: "Winter Frost",
                colors: ["#B0C4DE", "#E6E6FA", "#F0F8FF", "#F5F5F5", "#DCDCDC"],
            },
            CuratedPalette {
                name: "Arctic Chill",
                colors: ["#4169E1", "#6495ED", "#87CEEB", "#ADD8E6", "#E0F6FF"],
            },
        ],
    ),
    (
        "desert",
        &[
            CuratedPalette {
                name: "Desert Sand",
                colors: ["#DEB887", "#F4A460", "#D2B48C", "#BC9A6A", "#A0522D"],
            },
            CuratedPalette {
                name: "Cactus Bloom",
                colors: ["#8FBC8F", "#9ACD32", "#6B8E23", "#556B2F", "#808000"],
            },
        ],
    ),
];

const THEME_BASES: &[(&str, &[&str])] = &[
    ("autumn", &["#8B4513", "#CD853F", "#D2691E", "#FF8C00"]),
    ("cyberpunk", &["#FF00FF", "#00FFFF", "#FF1493", "#7FFF00"]),
    ("beach", &["#4682B4", "#87CEEB", "#20B2AA", "#FF7F50"]),
    ("cold", &["#B0C4DE", "#E6E6FA", "#F0F8FF", "#4169E1"]),
    ("desert", &["#DEB887", "#F4A460", "#D2B48C", "#CD853F"]),
    ("neon", &["#FF073A", "#39FF14", "#FF10F0", "#FFFF33"]),
    ("forest", &["#228B22", "#32CD32", "#90EE90", "#006400"]),
    ("sunset", &["#FF6B35", "#F7931E", "#FFD23F", "#EE4B2B"]),
];

/// A tag from the known set. Only obtainable through [`Tag::lookup`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tag(&'static str);

impl Tag {
    pub fn lookup(raw: &str) -> Result<Self, PaletteError> {
        TAGS.iter()
            .find(|tag| **tag == raw)
            .map(|tag| Self(*tag))
            .ok_or_else(|| PaletteError::UnknownTag(raw.to_string()))
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub fn tags() -> Vec<&'static str> {
    TAGS.to_vec()
}

fn curated_entries(tag: &str) -> &'static [CuratedPalette] {
    CURATED
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, palettes)| *palettes)
        .unwrap_or(&[])
}

/// Curated palettes for `tag`; empty when the tag has none.
pub fn curated_palettes(tag: &str) -> Vec<Palette> {
    curated_entries(tag)
        .iter()
        .enumerate()
        .map(|(i, entry)| entry.to_palette(tag, i))
        .collect()
}

/// Every curated palette, in catalog order.
pub fn all_curated() -> Vec<Palette> {
    CURATED
        .iter()
        .flat_map(|(tag, _)| curated_palettes(tag))
        .collect()
}

/// Base colors for the generator, or [`DEFAULT_THEME_BASE`] for unknown themes.
pub fn theme_base(tag: &str) -> &'static [&'static str] {
    THEME_BASES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, base)| *base)
        .unwrap_or(&DEFAULT_THEME_BASE)
}

impl CuratedPalette {
    fn to_palette(self, tag: &str, index: usize) -> Palette {
        Palette {
            id: format!("{tag}-curated-{index}"),
            name: self.name.to_string(),
            colors: owned_colors(self.colors),
            source: PaletteSource::Curated,
        }
    }
}

/// Capitalizes the first letter of every alphabetic run, lowercasing the rest.
pub(crate) fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
