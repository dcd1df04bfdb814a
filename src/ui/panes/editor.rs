//! Editor pane rendering with file tabs and syntax highlighting
//!
//! This module renders the sandbox editor: a tab strip with one tab per
//! visible file, then the active file with line numbers. Colors come from the
//! selected theme object, so switching themes repaints the code.
//!
//! # Rendering
//!
//! The pane uses a simple character-by-character tokenizer to apply syntax
//! highlighting styles without requiring a full lexer. It understands enough
//! of JavaScript, TypeScript, HTML, Vue and CSS to color the starter files.

use crate::ui::theme::SandboxPalette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Source language, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Script,
    Markup,
    Stylesheet,
}

impl Language {
    pub fn for_path(path: &str) -> Self {
        match path.rsplit('.').next() {
            Some("css") => Language::Stylesheet,
            Some("html") | Some("vue") => Language::Markup,
            _ => Language::Script,
        }
    }
}

const KEYWORDS: &[&str] = &[
    "import", "export", "default", "from", "function", "return", "const", "let", "var", "if",
    "else", "for", "while", "class", "new", "this", "extends", "async", "await",
];

const CONSTANTS: &[&str] = &["true", "false", "null", "undefined"];

/// Data needed to render the editor pane
pub struct EditorRenderData<'a> {
    pub visible_files: &'a [&'static str],
    pub active_tab: usize,
    pub content: &'a str,
    pub show_line_numbers: bool,
    pub show_tabs: bool,
}

/// Highlight a single line of source
pub fn highlight_line<'a>(line: &'a str, language: Language, palette: &SandboxPalette) -> Line<'a> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    // Byte offset of each char, plus the end of the line
    let offsets: Vec<usize> = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        let starts_comment = match language {
            Language::Script => c == '/' && chars.get(i + 1) == Some(&'/'),
            Language::Stylesheet => c == '/' && chars.get(i + 1) == Some(&'*'),
            Language::Markup => line[offsets[i]..].starts_with("<!--"),
        };
        if starts_comment {
            flush_word(&mut spans, &mut current_word, None, language, palette);
            spans.push(Span::styled(&line[offsets[i]..], palette.comment));
            break;
        }

        // Handle strings
        if c == '"' || c == '\'' || c == '`' {
            flush_word(&mut spans, &mut current_word, None, language, palette);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            spans.push(Span::styled(&line[offsets[i]..offsets[end]], palette.string));
            i = end;
            continue;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' && c != '-' && c != '$' {
            flush_word(&mut spans, &mut current_word, Some(c), language, palette);
            let style = match c {
                ' ' | '\t' => palette.plain,
                '<' | '>' | '/' if language == Language::Markup => palette.tag,
                '#' if language == Language::Stylesheet => palette.constant,
                _ => palette.punctuation,
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, None, language, palette);
    Line::from(spans)
}

fn flush_word(
    spans: &mut Vec<Span<'_>>,
    word: &mut String,
    next: Option<char>,
    language: Language,
    palette: &SandboxPalette,
) {
    if word.is_empty() {
        return;
    }
    let prev = spans.last().map(|s| s.content.as_ref());
    let style = word_style(word, prev, next, language, palette);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(
    word: &str,
    prev: Option<&str>,
    next: Option<char>,
    language: Language,
    palette: &SandboxPalette,
) -> Style {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return palette.constant;
    }
    match language {
        Language::Markup if matches!(prev, Some("<") | Some("/")) => palette.tag,
        Language::Markup if next == Some('=') => palette.property,
        Language::Stylesheet if next == Some(':') => palette.property,
        Language::Stylesheet if prev == Some(".") => palette.definition,
        Language::Stylesheet if prev == Some("#") => palette.constant,
        _ if KEYWORDS.contains(&word) => palette.keyword,
        _ if CONSTANTS.contains(&word) => palette.constant,
        Language::Script if next == Some('(') => palette.definition,
        _ => palette.plain,
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, data: &EditorRenderData, palette: &SandboxPalette) {
    let mut spans = Vec::new();
    for (idx, path) in data.visible_files.iter().copied().enumerate() {
        let name = path.rsplit('/').next().unwrap_or(path);
        let style = if idx == data.active_tab {
            Style::default()
                .fg(palette.accent)
                .bg(palette.surface_alt)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(format!(" {} ", name), style));
        spans.push(Span::raw(" "));
    }
    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.surface));
    frame.render_widget(tabs, area);
}

/// Render the editor pane
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    data: EditorRenderData,
    palette: &SandboxPalette,
    is_focused: bool,
    scroll_offset: usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };

    let path = data.visible_files.get(data.active_tab).copied().unwrap_or("");
    let block = Block::default()
        .title(format!(" {} ", path))
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(palette.surface));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (tabs_area, code_area) = if data.show_tabs && inner.height > 1 {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        (Some(rows[0]), rows[1])
    } else {
        (None, inner)
    };

    if let Some(tabs_area) = tabs_area {
        render_tabs(frame, tabs_area, &data, palette);
    }

    let language = Language::for_path(path);
    let visible_height = code_area.height.max(1) as usize;
    let total_lines = data.content.lines().count();
    let gutter = total_lines.to_string().len().max(3);

    let visible_lines: Vec<Line> = data
        .content
        .lines()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = Vec::new();
            if data.show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", idx + 1, width = gutter),
                    Style::default().fg(palette.muted),
                ));
            }
            spans.extend(highlight_line(line, language, palette).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).style(Style::default().bg(palette.surface));
    frame.render_widget(paragraph, code_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DRACULA;

    fn styled_words(line: &Line<'_>) -> Vec<(String, Style)> {
        line.spans
            .iter()
            .filter(|s| !s.content.trim().is_empty())
            .map(|s| (s.content.to_string(), s.style))
            .collect()
    }

    #[test]
    fn script_keywords_strings_and_calls() {
        let palette = SandboxPalette::from_theme(&DRACULA);
        let line = highlight_line(
            "import { useState } from 'react';",
            Language::Script,
            &palette,
        );
        let words = styled_words(&line);
        assert_eq!(words[0], ("import".to_string(), palette.keyword));
        assert!(words.contains(&("from".to_string(), palette.keyword)));
        assert!(words.contains(&("'react'".to_string(), palette.string)));

        let line = highlight_line("  const [count, setCount] = useState(0);", Language::Script, &palette);
        let words = styled_words(&line);
        assert!(words.contains(&("useState".to_string(), palette.definition)));
        assert!(words.contains(&("0".to_string(), palette.constant)));
    }

    #[test]
    fn line_text_is_preserved() {
        let palette = SandboxPalette::from_theme(&DRACULA);
        let source = "    <button @click=\"count++\">// not a comment";
        let line = highlight_line(source, Language::Markup, &palette);
        let rebuilt: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn markup_tags_and_css_properties() {
        let palette = SandboxPalette::from_theme(&DRACULA);
        let line = highlight_line("<div class=\"card\">", Language::Markup, &palette);
        let words = styled_words(&line);
        assert!(words.contains(&("div".to_string(), palette.tag)));
        assert!(words.contains(&("class".to_string(), palette.property)));

        let line = highlight_line("  background-color: #0971F1;", Language::Stylesheet, &palette);
        let words = styled_words(&line);
        assert_eq!(words[0], ("background-color".to_string(), palette.property));
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        let palette = SandboxPalette::from_theme(&DRACULA);
        let line = highlight_line("x = 'oops", Language::Script, &palette);
        assert_eq!(line.spans.last().unwrap().content, "'oops");
    }

    #[test]
    fn language_from_extension() {
        assert_eq!(Language::for_path("/App.js"), Language::Script);
        assert_eq!(Language::for_path("/src/app/app.component.ts"), Language::Script);
        assert_eq!(Language::for_path("/src/App.vue"), Language::Markup);
        assert_eq!(Language::for_path("/styles.css"), Language::Stylesheet);
    }
}
