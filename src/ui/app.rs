//! Main TUI application state and logic

use super::panes::{
    EditorRenderData, HeaderRenderData, SelectorView, render_dropdown, render_editor_pane,
    render_header, render_preview_pane, render_status_bar,
};
use super::preview_host::PreviewHost;
use super::theme::SandboxPalette;
use crate::catalog::FrameworkId;
use crate::controller::SelectorController;
use crate::sandbox::SandboxConfig;
use crate::theme::ThemeId;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;

const FRAMEWORK_LABELS: [&str; 3] = ["React", "Vue", "Angular"];
const THEME_LABELS: [&str; 4] = ["Sandpack Dark", "Night Owl", "Atom Dark", "Dracula"];

/// Which control currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Framework,
    Theme,
    Editor,
}

impl Focus {
    /// Move focus to the next control (framework -> theme -> editor)
    pub fn next(self) -> Self {
        match self {
            Focus::Framework => Focus::Theme,
            Focus::Theme => Focus::Editor,
            Focus::Editor => Focus::Framework,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Framework => Focus::Editor,
            Focus::Theme => Focus::Framework,
            Focus::Editor => Focus::Theme,
        }
    }
}

/// The main application state
pub struct App {
    controller: SelectorController<PreviewHost>,

    /// Currently focused control
    pub focus: Focus,

    /// Highlighted option of the open dropdown, if any
    pub dropdown: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an app showing the default selection
    pub fn new() -> Self {
        App {
            controller: SelectorController::new(PreviewHost::new()),
            focus: Focus::Framework,
            dropdown: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    pub fn controller(&self) -> &SelectorController<PreviewHost> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectorController<PreviewHost> {
        &mut self.controller
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();
        let config = self.controller.config();
        let host = self.controller.host();
        let selection = self.controller.selection();
        let palette = SandboxPalette::from_theme(config.theme);

        // Header, sandbox body, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Max(editor_rows(config)),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let header_area = main_chunks[0];
        let body_area = main_chunks[1];
        let status_area = main_chunks[3];

        let editor_share = config.options.editor_width_percentage.min(100);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(editor_share),
                Constraint::Percentage(100 - editor_share),
            ])
            .split(body_area);

        let content = host.active_file().map(|(_, content)| content).unwrap_or("");
        render_editor_pane(
            frame,
            columns[0],
            EditorRenderData {
                visible_files: config.visible_files(),
                active_tab: host.active_tab(),
                content,
                show_line_numbers: config.options.show_line_numbers,
                show_tabs: config.options.show_tabs,
            },
            &palette,
            self.focus == Focus::Editor,
            host.scroll(),
        );

        let console = host.console_visible().then(|| host.console_lines());
        render_preview_pane(frame, columns[1], config, &palette, console);

        render_status_bar(
            frame,
            status_area,
            &self.status_message,
            selection,
            host.console_visible(),
            config.options.show_console_button,
        );

        let header = HeaderRenderData {
            framework: SelectorView {
                label: "Framework:",
                options: &FRAMEWORK_LABELS,
                selected: selection.framework.index(),
                is_focused: self.focus == Focus::Framework,
                open_highlight: self.dropdown.filter(|_| self.focus == Focus::Framework),
            },
            theme: SelectorView {
                label: "Theme:",
                options: &THEME_LABELS,
                selected: selection.theme.index(),
                is_focused: self.focus == Focus::Theme,
                open_highlight: self.dropdown.filter(|_| self.focus == Focus::Theme),
            },
        };
        let anchors = render_header(frame, header_area, &header);

        // Popups go last so they draw over the panes
        match self.focus {
            Focus::Framework => render_dropdown(frame, anchors.framework, &header.framework, size),
            Focus::Theme => render_dropdown(frame, anchors.theme, &header.theme, size),
            Focus::Editor => {}
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.dropdown = None;
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.dropdown = None;
                self.focus = self.focus.prev();
            }
            KeyCode::Esc => {
                self.dropdown = None;
            }
            KeyCode::Enter => match self.dropdown {
                Some(highlight) => {
                    self.dropdown = None;
                    self.commit(highlight);
                }
                None => self.open_dropdown(),
            },
            KeyCode::Up => match self.dropdown {
                Some(highlight) => self.dropdown = Some(highlight.saturating_sub(1)),
                None if self.focus == Focus::Editor => {
                    self.controller.host_mut().scroll_by(-1);
                }
                None => {}
            },
            KeyCode::Down => match self.dropdown {
                Some(highlight) => {
                    let last = self.option_count().saturating_sub(1);
                    self.dropdown = Some((highlight + 1).min(last));
                }
                None if self.focus == Focus::Editor => {
                    self.controller.host_mut().scroll_by(1);
                }
                None => self.open_dropdown(),
            },
            KeyCode::PageUp if self.focus == Focus::Editor => {
                self.controller.host_mut().scroll_by(-10);
            }
            KeyCode::PageDown if self.focus == Focus::Editor => {
                self.controller.host_mut().scroll_by(10);
            }
            KeyCode::Left if self.dropdown.is_none() => {
                self.controller.host_mut().prev_tab();
                self.report_active_file();
            }
            KeyCode::Right if self.dropdown.is_none() => {
                self.controller.host_mut().next_tab();
                self.report_active_file();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.controller.host_mut().toggle_console();
                self.status_message = if self.controller.host().console_visible() {
                    "Console shown".to_string()
                } else {
                    "Console hidden".to_string()
                };
            }
            _ => {}
        }
    }

    fn option_count(&self) -> usize {
        match self.focus {
            Focus::Framework => FrameworkId::ALL.len(),
            Focus::Theme => ThemeId::ALL.len(),
            Focus::Editor => 0,
        }
    }

    fn open_dropdown(&mut self) {
        let selection = self.controller.selection();
        self.dropdown = match self.focus {
            Focus::Framework => Some(selection.framework.index()),
            Focus::Theme => Some(selection.theme.index()),
            Focus::Editor => None,
        };
    }

    fn commit(&mut self, highlight: usize) {
        match self.focus {
            Focus::Framework => {
                if let Some(&framework) = FrameworkId::ALL.get(highlight) {
                    self.controller.select_framework(framework);
                    self.status_message = format!("Framework: {}", framework);
                }
            }
            Focus::Theme => {
                if let Some(&theme) = ThemeId::ALL.get(highlight) {
                    self.controller.select_theme(theme);
                    self.status_message = format!("Theme: {}", theme);
                }
            }
            Focus::Editor => {}
        }
    }

    fn report_active_file(&mut self) {
        if let Some((path, _)) = self.controller.host().active_file() {
            self.status_message = format!("Editing {}", path);
        }
    }
}

/// Terminal rows for the configured editor height, using the theme's line height
fn editor_rows(config: &SandboxConfig) -> u16 {
    let line_height = config
        .theme
        .font
        .line_height
        .trim_end_matches("px")
        .parse::<u32>()
        .unwrap_or(20)
        .max(1);
    (config.options.editor_height / line_height).min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn labels_follow_enumeration_order() {
        for framework in FrameworkId::ALL {
            assert_eq!(FRAMEWORK_LABELS[framework.index()], framework.label());
        }
        for theme in ThemeId::ALL {
            assert_eq!(THEME_LABELS[theme.index()], theme.label());
        }
    }

    #[test]
    fn dropdown_selects_framework() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.dropdown, Some(0));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.dropdown, Some(2));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.dropdown, None);
        assert_eq!(app.controller().selection().framework, FrameworkId::Angular);
        assert_eq!(app.status_message, "Framework: Angular");
    }

    #[test]
    fn escape_discards_highlight() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Theme);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller().selection().theme, ThemeId::SandpackDark);
        assert_eq!(app.controller().host().generation(), 1);
    }

    #[test]
    fn tab_closes_open_dropdown() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.dropdown, None);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn arrows_switch_files_and_c_toggles_console() {
        let mut app = App::new();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.status_message, "Editing /styles.css");
        press(&mut app, KeyCode::Char('c'));
        assert!(app.controller().host().console_visible());
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.controller().host().console_visible());
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn editor_rows_use_theme_line_height() {
        let app = App::new();
        assert_eq!(editor_rows(app.controller().config()), 40);
    }
}
