use crate::theme::{parse_hex, SandboxTheme, SyntaxStyle};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

/// Chrome colors for the header and status bar; independent of the selection
pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
};

/// Terminal colors for the sandbox panes, taken from the selected theme object
#[derive(Debug, Clone, Copy)]
pub struct SandboxPalette {
    pub surface: Color,
    pub surface_alt: Color,
    pub border: Color,
    pub accent: Color,
    pub muted: Color,
    pub plain: Style,
    pub comment: Style,
    pub keyword: Style,
    pub tag: Style,
    pub punctuation: Style,
    pub definition: Style,
    pub property: Style,
    pub constant: Style,
    pub string: Style,
}

/// Hex string to a terminal color; unknown formats fall back to the terminal default
pub fn hex_color(hex: &str) -> Color {
    parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Reset)
}

fn token_style(style: &SyntaxStyle) -> Style {
    let base = Style::default().fg(hex_color(style.color()));
    if style.is_italic() {
        base.add_modifier(Modifier::ITALIC)
    } else {
        base
    }
}

impl SandboxPalette {
    pub fn from_theme(theme: &SandboxTheme) -> Self {
        let syntax = &theme.syntax;
        SandboxPalette {
            surface: hex_color(theme.colors.surface1),
            surface_alt: hex_color(theme.colors.surface2),
            border: hex_color(theme.colors.surface3),
            accent: hex_color(theme.colors.accent),
            muted: hex_color(theme.colors.clickable),
            plain: token_style(&syntax.plain),
            comment: token_style(&syntax.comment),
            keyword: token_style(&syntax.keyword),
            tag: token_style(&syntax.tag),
            punctuation: token_style(&syntax.punctuation),
            definition: token_style(&syntax.definition),
            property: token_style(&syntax.property),
            constant: token_style(&syntax.static_),
            string: token_style(&syntax.string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DRACULA, NIGHT_OWL};

    #[test]
    fn palette_follows_theme_object() {
        let palette = SandboxPalette::from_theme(&DRACULA);
        assert_eq!(palette.surface, Color::Rgb(0x28, 0x2a, 0x36));
        assert_eq!(palette.keyword.fg, Some(Color::Rgb(0xff, 0x79, 0xc6)));
        assert!(palette.comment.add_modifier.contains(Modifier::ITALIC));
        assert!(!palette.keyword.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn italic_keywords_carry_over() {
        let palette = SandboxPalette::from_theme(&NIGHT_OWL);
        assert!(palette.keyword.add_modifier.contains(Modifier::ITALIC));
    }
}
