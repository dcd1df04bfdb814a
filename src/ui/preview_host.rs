//! In-terminal sandbox host
//!
//! [`PreviewHost`] stands in for the browser widget when running in a
//! terminal. It keeps the latest configuration plus the view state a sandbox
//! owns (active tab, scroll positions, console visibility) and resets that
//! state on every [`SandboxHost::configure`] call, the way the widget
//! re-initialises when its props change.

use crate::error::HostError;
use crate::sandbox::{SandboxConfig, SandboxHost};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Console history kept for the preview pane
const CONSOLE_CAPACITY: usize = 200;

#[derive(Debug, Default)]
pub struct PreviewHost {
    config: Option<SandboxConfig>,
    active_tab: usize,
    scroll: FxHashMap<&'static str, usize>,
    console_visible: bool,
    console: VecDeque<String>,
    generation: usize,
}

impl PreviewHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many configurations have been applied
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Path and content of the file shown in the editor
    pub fn active_file(&self) -> Option<(&'static str, &'static str)> {
        let config = self.config.as_ref()?;
        let path = *config.visible_files().get(self.active_tab)?;
        config.files.get(path).map(|content| (path, content))
    }

    pub fn next_tab(&mut self) {
        let count = self.tab_count();
        if count > 0 {
            self.active_tab = (self.active_tab + 1) % count;
        }
    }

    pub fn prev_tab(&mut self) {
        let count = self.tab_count();
        if count > 0 {
            self.active_tab = (self.active_tab + count - 1) % count;
        }
    }

    /// Scroll offset of the active file
    pub fn scroll(&self) -> usize {
        self.active_file()
            .and_then(|(path, _)| self.scroll.get(path).copied())
            .unwrap_or(0)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let Some((path, content)) = self.active_file() else {
            return;
        };
        let max = content.lines().count().saturating_sub(1);
        let offset = self.scroll.entry(path).or_insert(0);
        *offset = offset.saturating_add_signed(delta).min(max);
    }

    pub fn console_visible(&self) -> bool {
        self.console_visible
    }

    pub fn toggle_console(&mut self) {
        let can_toggle = self
            .config
            .as_ref()
            .is_some_and(|c| c.options.show_console_button);
        if can_toggle {
            self.console_visible = !self.console_visible;
        }
    }

    pub fn console_lines(&self) -> &VecDeque<String> {
        &self.console
    }

    fn tab_count(&self) -> usize {
        self.config
            .as_ref()
            .map(|c| c.visible_files().len())
            .unwrap_or(0)
    }

    fn log(&mut self, line: String) {
        if self.console.len() == CONSOLE_CAPACITY {
            self.console.pop_front();
        }
        self.console.push_back(line);
    }
}

impl SandboxHost for PreviewHost {
    fn configure(&mut self, config: &SandboxConfig) -> Result<(), HostError> {
        self.generation += 1;
        self.active_tab = 0;
        self.scroll.clear();
        self.console_visible = config.options.show_console;
        self.config = Some(config.clone());

        let entry = config.files.entry().map(|(path, _)| path).unwrap_or("-");
        self.log(format!(
            "[{}] {} template, {} theme, {} file(s)",
            self.generation,
            config.template.id(),
            config.theme_id.id(),
            config.files.len()
        ));
        if config.options.autorun {
            self.log(format!("[{}] running {}", self.generation, entry));
        }
        Ok(())
    }
}
