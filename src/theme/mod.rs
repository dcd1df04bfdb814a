//! Sandbox editor themes
//!
//! Each [`ThemeId`] resolves to exactly one static [`SandboxTheme`], the
//! theme object handed to the sandbox unchanged. The shape mirrors what the
//! sandbox's theming engine accepts: a surface/accent color block, per-token
//! syntax colors and font settings.
//!
//! The same objects drive the terminal editor pane, which converts the hex
//! strings with [`parse_hex`].

use crate::error::{Control, SelectionError};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Color theme offered by the theme control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    SandpackDark,
    NightOwl,
    AtomDark,
    Dracula,
}

impl ThemeId {
    /// All variants, in the order the dropdown lists them
    pub const ALL: [ThemeId; 4] = [
        ThemeId::SandpackDark,
        ThemeId::NightOwl,
        ThemeId::AtomDark,
        ThemeId::Dracula,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ThemeId::SandpackDark => "sandpackDark",
            ThemeId::NightOwl => "nightOwl",
            ThemeId::AtomDark => "atomDark",
            ThemeId::Dracula => "dracula",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeId::SandpackDark => "Sandpack Dark",
            ThemeId::NightOwl => "Night Owl",
            ThemeId::AtomDark => "Atom Dark",
            ThemeId::Dracula => "Dracula",
        }
    }

    /// Position within [`ThemeId::ALL`]
    pub fn index(self) -> usize {
        match self {
            ThemeId::SandpackDark => 0,
            ThemeId::NightOwl => 1,
            ThemeId::AtomDark => 2,
            ThemeId::Dracula => 3,
        }
    }

    /// The theme object for this id
    pub fn theme(self) -> &'static SandboxTheme {
        match self {
            ThemeId::SandpackDark => &SANDPACK_DARK,
            ThemeId::NightOwl => &NIGHT_OWL,
            ThemeId::AtomDark => &ATOM_DARK,
            ThemeId::Dracula => &DRACULA,
        }
    }

    fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.id()).collect()
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ThemeId {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| SelectionError::invalid(Control::Theme, s, &Self::ids()))
    }
}

impl Serialize for ThemeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SandboxTheme {
    pub colors: ThemeColors,
    pub syntax: SyntaxColors,
    pub font: ThemeFont,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub surface1: &'static str,
    pub surface2: &'static str,
    pub surface3: &'static str,
    pub disabled: &'static str,
    pub base: &'static str,
    pub clickable: &'static str,
    pub hover: &'static str,
    pub accent: &'static str,
    pub error: &'static str,
    pub error_surface: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct SyntaxColors {
    pub plain: SyntaxStyle,
    pub comment: SyntaxStyle,
    pub keyword: SyntaxStyle,
    pub tag: SyntaxStyle,
    pub punctuation: SyntaxStyle,
    pub definition: SyntaxStyle,
    pub property: SyntaxStyle,
    #[serde(rename = "static")]
    pub static_: SyntaxStyle,
    pub string: SyntaxStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// A token color, optionally with a font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SyntaxStyle {
    Color(&'static str),
    Styled {
        color: &'static str,
        #[serde(rename = "fontStyle")]
        font_style: FontStyle,
    },
}

impl SyntaxStyle {
    pub fn color(&self) -> &'static str {
        match *self {
            SyntaxStyle::Color(color) | SyntaxStyle::Styled { color, .. } => color,
        }
    }

    pub fn is_italic(&self) -> bool {
        matches!(
            self,
            SyntaxStyle::Styled {
                font_style: FontStyle::Italic,
                ..
            }
        )
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFont {
    pub body: &'static str,
    pub mono: &'static str,
    pub size: &'static str,
    pub line_height: &'static str,
}

const DEFAULT_FONT: ThemeFont = ThemeFont {
    body: "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Oxygen, Ubuntu, Cantarell, \"Fira Sans\", \"Droid Sans\", \"Helvetica Neue\", sans-serif",
    mono: "\"Fira Mono\", \"DejaVu Sans Mono\", Menlo, Consolas, \"Liberation Mono\", Monaco, \"Lucida Console\", monospace",
    size: "13px",
    line_height: "20px",
};

const fn italic(color: &'static str) -> SyntaxStyle {
    SyntaxStyle::Styled {
        color,
        font_style: FontStyle::Italic,
    }
}

pub static SANDPACK_DARK: SandboxTheme = SandboxTheme {
    colors: ThemeColors {
        surface1: "#151515",
        surface2: "#252525",
        surface3: "#2F2F2F",
        disabled: "#4D4D4D",
        base: "#808080",
        clickable: "#999999",
        hover: "#C5C5C5",
        accent: "#90e86f",
        error: "#E1CFF8",
        error_surface: "#b08df8",
    },
    syntax: SyntaxColors {
        plain: SyntaxStyle::Color("#f0fdaf"),
        comment: italic("#757575"),
        keyword: SyntaxStyle::Color("#e5fd78"),
        tag: SyntaxStyle::Color("#f0fdaf"),
        punctuation: SyntaxStyle::Color("#ffffff"),
        definition: SyntaxStyle::Color("#eeeeee"),
        property: SyntaxStyle::Color("#90e86f"),
        static_: SyntaxStyle::Color("#ffffff"),
        string: SyntaxStyle::Color("#dafecf"),
    },
    font: DEFAULT_FONT,
};

pub static NIGHT_OWL: SandboxTheme = SandboxTheme {
    colors: ThemeColors {
        surface1: "#011627",
        surface2: "#243b4c",
        surface3: "#112331",
        disabled: "#4D4D4D",
        base: "#808080",
        clickable: "#6988a1",
        hover: "#c5e4fd",
        accent: "#c5e4fd",
        error: "#ffcdca",
        error_surface: "#811e18",
    },
    syntax: SyntaxColors {
        plain: SyntaxStyle::Color("#d6deeb"),
        comment: italic("#999999"),
        keyword: italic("#c792ea"),
        tag: SyntaxStyle::Color("#7fdbca"),
        punctuation: SyntaxStyle::Color("#7fdbca"),
        definition: SyntaxStyle::Color("#82aaff"),
        property: italic("#addb67"),
        static_: SyntaxStyle::Color("#f78c6c"),
        string: SyntaxStyle::Color("#ecc48d"),
    },
    font: DEFAULT_FONT,
};

pub static ATOM_DARK: SandboxTheme = SandboxTheme {
    colors: ThemeColors {
        surface1: "#282c34",
        surface2: "#21252b",
        surface3: "#2c313c",
        disabled: "#4d4d4d",
        base: "#a8b1c2",
        clickable: "#a8b1c2",
        hover: "#e8effc",
        accent: "#c678dd",
        error: "#e06c75",
        error_surface: "#ffeceb",
    },
    syntax: SyntaxColors {
        plain: SyntaxStyle::Color("#a8b1c2"),
        comment: italic("#757575"),
        keyword: SyntaxStyle::Color("#c678dd"),
        tag: SyntaxStyle::Color("#e06c75"),
        punctuation: SyntaxStyle::Color("#a8b1c2"),
        definition: SyntaxStyle::Color("#62aeef"),
        property: SyntaxStyle::Color("#d19a66"),
        static_: SyntaxStyle::Color("#a8b1c2"),
        string: SyntaxStyle::Color("#98c379"),
    },
    font: DEFAULT_FONT,
};

pub static DRACULA: SandboxTheme = SandboxTheme {
    colors: ThemeColors {
        surface1: "#282a36",
        surface2: "#44475a",
        surface3: "#44475a",
        disabled: "#6272a4",
        base: "#f8f8f2",
        clickable: "#6272a4",
        hover: "#f8f8f2",
        accent: "#bd93f9",
        error: "#f8f8f2",
        error_surface: "#44475a",
    },
    syntax: SyntaxColors {
        plain: SyntaxStyle::Color("#f8f8f2"),
        comment: italic("#6272a4"),
        keyword: SyntaxStyle::Color("#ff79c6"),
        tag: SyntaxStyle::Color("#ff79c6"),
        punctuation: SyntaxStyle::Color("#ff79c6"),
        definition: SyntaxStyle::Color("#f8f8f2"),
        property: SyntaxStyle::Color("#50fa7b"),
        static_: SyntaxStyle::Color("#bd93f9"),
        string: SyntaxStyle::Color("#f1fa8c"),
    },
    font: DEFAULT_FONT,
};

/// Parse `#rgb` or `#rrggbb` into its components
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut parts = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((parts.next()??, parts.next()??, parts.next()??))
        }
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((channel(0)?, channel(2)?, channel(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_id_maps_to_a_distinct_theme() {
        for (i, a) in ThemeId::ALL.iter().enumerate() {
            for b in &ThemeId::ALL[i + 1..] {
                assert!(!std::ptr::eq(a.theme(), b.theme()));
                assert_ne!(a.theme(), b.theme(), "{} and {} share colors", a, b);
            }
        }
    }

    #[test]
    fn every_theme_color_is_valid_hex() {
        for id in ThemeId::ALL {
            let theme = id.theme();
            let c = &theme.colors;
            for color in [
                c.surface1,
                c.surface2,
                c.surface3,
                c.disabled,
                c.base,
                c.clickable,
                c.hover,
                c.accent,
                c.error,
                c.error_surface,
            ] {
                assert!(parse_hex(color).is_some(), "{}: bad color {}", id, color);
            }
            let s = &theme.syntax;
            for style in [
                s.plain,
                s.comment,
                s.keyword,
                s.tag,
                s.punctuation,
                s.definition,
                s.property,
                s.static_,
                s.string,
            ] {
                assert!(parse_hex(style.color()).is_some(), "{}: bad syntax color", id);
            }
        }
    }

    #[test]
    fn parse_hex_handles_short_and_long_forms() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#282a36"), Some((0x28, 0x2a, 0x36)));
        assert_eq!(parse_hex("282a36"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn styled_syntax_serializes_as_object() {
        let json = serde_json::to_value(&NIGHT_OWL.syntax).unwrap();
        assert_eq!(json["plain"], "#d6deeb");
        assert_eq!(json["keyword"]["color"], "#c792ea");
        assert_eq!(json["keyword"]["fontStyle"], "italic");
        assert_eq!(json["static"], "#f78c6c");
    }

    #[test]
    fn theme_ids_round_trip_through_from_str() {
        for id in ThemeId::ALL {
            assert_eq!(id.id().parse::<ThemeId>(), Ok(id));
        }
        assert!("Dracula".parse::<ThemeId>().is_err());
    }
}
