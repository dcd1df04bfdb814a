//! Header bar with the framework and theme dropdowns
//!
//! The header shows the application title and one selector box per control.
//! When a dropdown is open its option list is drawn as a popup beneath the
//! selector, over whatever pane sits below.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub const HEADER_TITLE: &str = "Online Code Editor";

/// One choice control as the header draws it
pub struct SelectorView<'a> {
    pub label: &'a str,
    pub options: &'a [&'a str],
    pub selected: usize,
    pub is_focused: bool,
    /// Highlighted option while the dropdown is open
    pub open_highlight: Option<usize>,
}

/// Data needed to render the header
pub struct HeaderRenderData<'a> {
    pub framework: SelectorView<'a>,
    pub theme: SelectorView<'a>,
}

/// Screen areas of the two selector boxes, used to anchor the popups
pub struct HeaderLayout {
    pub framework: Rect,
    pub theme: Rect,
}

pub fn header_layout(area: Rect) -> (Rect, HeaderLayout) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(HEADER_TITLE.len() as u16 + 4),
            Constraint::Length(26),
            Constraint::Length(28),
        ])
        .split(area);
    (
        columns[0],
        HeaderLayout {
            framework: columns[1],
            theme: columns[2],
        },
    )
}

fn render_selector(frame: &mut Frame, area: Rect, view: &SelectorView) {
    let border_style = if view.is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let arrow = if view.open_highlight.is_some() { "▴" } else { "▾" };
    let current = view.options.get(view.selected).copied().unwrap_or("");
    let line = Line::from(vec![
        Span::styled(
            format!("{} ", view.label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            current.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", arrow), Style::default().fg(DEFAULT_THEME.primary)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the option list for an open dropdown anchored under `anchor`
pub fn render_dropdown(frame: &mut Frame, anchor: Rect, view: &SelectorView, bounds: Rect) {
    let Some(highlight) = view.open_highlight else {
        return;
    };

    let height = (view.options.len() as u16 + 2).min(bounds.height);
    let y = anchor.y + anchor.height;
    let popup = Rect {
        x: anchor.x,
        y: y.min(bounds.bottom().saturating_sub(height)),
        width: anchor.width,
        height,
    };

    let items: Vec<ListItem> = view
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let marker = if idx == view.selected { "● " } else { "  " };
            let style = if idx == highlight {
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(format!("{}{}", marker, option)).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
        .style(Style::default().bg(DEFAULT_THEME.bg));
    frame.render_widget(Clear, popup);
    frame.render_widget(List::new(items).block(block), popup);
}

/// Render the header bar (title and both selectors)
pub fn render_header(frame: &mut Frame, area: Rect, data: &HeaderRenderData) -> HeaderLayout {
    let (title_area, layout) = header_layout(area);

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", HEADER_TITLE),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(title, title_area);

    render_selector(frame, layout.framework, &data.framework);
    render_selector(frame, layout.theme, &data.theme);
    layout
}
