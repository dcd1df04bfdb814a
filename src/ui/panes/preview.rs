//! Preview pane: what the sandbox was asked to run
//!
//! Execution belongs to the sandbox, so the terminal preview lists the
//! outbound configuration instead of a live page. The console area sits at
//! the bottom and is hidden unless toggled on.

use crate::sandbox::SandboxConfig;
use crate::ui::theme::SandboxPalette;
use std::collections::VecDeque;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
};

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Lines describing `config`, one `key: value` pair per line
pub fn summary_lines(config: &SandboxConfig) -> Vec<(String, String)> {
    let options = &config.options;
    vec![
        ("template".to_string(), config.template.id().to_string()),
        ("theme".to_string(), config.theme_id.label().to_string()),
        ("files".to_string(), options.visible_files.join(", ")),
        ("autorun".to_string(), on_off(options.autorun).to_string()),
        ("auto reload".to_string(), on_off(options.auto_reload).to_string()),
        ("line numbers".to_string(), on_off(options.show_line_numbers).to_string()),
        ("inline errors".to_string(), on_off(options.show_inline_errors).to_string()),
        ("editor height".to_string(), format!("{}px", options.editor_height)),
        ("editor width".to_string(), format!("{}%", options.editor_width_percentage)),
    ]
}

/// Render the preview pane with its optional console
pub fn render_preview_pane(
    frame: &mut Frame,
    area: Rect,
    config: &SandboxConfig,
    palette: &SandboxPalette,
    console: Option<&VecDeque<String>>,
) {
    let (summary_area, console_area) = match console {
        Some(_) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (rows[0], Some(rows[1]))
        }
        None => (area, None),
    };

    let key_style = Style::default().fg(palette.muted);
    let lines: Vec<Line> = summary_lines(config)
        .into_iter()
        .map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", key), key_style),
                Span::styled(value, palette.plain),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .padding(Padding::new(1, 0, 0, 0))
        .style(Style::default().bg(palette.surface));
    frame.render_widget(Paragraph::new(lines).block(block), summary_area);

    if let (Some(area), Some(lines)) = (console_area, console) {
        let block = Block::default()
            .title(" Console ")
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .padding(Padding::new(1, 0, 0, 0))
            .style(Style::default().bg(palette.surface_alt));

        // Keep the newest lines in view
        let visible_height = area.height.saturating_sub(2).max(1) as usize;
        let items: Vec<ListItem> = lines
            .iter()
            .skip(lines.len().saturating_sub(visible_height))
            .map(|line| ListItem::new(line.as_str()).style(palette.plain))
            .collect();
        frame.render_widget(List::new(items).block(block), area);
    }
}
