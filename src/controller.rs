//! Selector controller: owns the selection and drives the sandbox host
//!
//! The controller is the only owner of [`SelectionState`]. Every accepted
//! selection replaces one field, re-derives the [`SandboxConfig`] and hands it
//! to the host. All of this happens synchronously on the caller's thread.

use crate::catalog::FrameworkId;
use crate::error::SelectionError;
use crate::sandbox::{SandboxConfig, SandboxHost};
use crate::theme::ThemeId;
use tracing::{debug, info, warn};

/// The pair of user choices; defaults to (React, Sandpack Dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectionState {
    pub framework: FrameworkId,
    pub theme: ThemeId,
}

/// Selection by id, as it arrives from outside the dropdowns
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionRequest<'a> {
    pub framework: Option<&'a str>,
    pub theme: Option<&'a str>,
}

pub struct SelectorController<H: SandboxHost> {
    selection: SelectionState,
    config: SandboxConfig,
    host: H,
}

impl<H: SandboxHost> SelectorController<H> {
    /// Start from the default selection and configure `host` once
    pub fn new(host: H) -> Self {
        let selection = SelectionState::default();
        let mut controller = SelectorController {
            selection,
            config: SandboxConfig::derive(&selection),
            host,
        };
        controller.push_config();
        controller
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// The configuration derived from the current selection
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn select_framework(&mut self, framework: FrameworkId) {
        if self.selection.framework == framework {
            debug!(framework = framework.id(), "framework already selected");
            return;
        }
        info!(
            from = self.selection.framework.id(),
            to = framework.id(),
            "framework selected"
        );
        self.selection.framework = framework;
        self.refresh();
    }

    pub fn select_theme(&mut self, theme: ThemeId) {
        if self.selection.theme == theme {
            debug!(theme = theme.id(), "theme already selected");
            return;
        }
        info!(
            from = self.selection.theme.id(),
            to = theme.id(),
            "theme selected"
        );
        self.selection.theme = theme;
        self.refresh();
    }

    /// Select a framework by its template id (`"react"`, `"vue"`, `"angular"`)
    pub fn select_framework_id(&mut self, id: &str) -> Result<(), SelectionError> {
        let framework = id.parse::<FrameworkId>().inspect_err(|e| {
            warn!(error = %e, "rejected framework selection");
        })?;
        self.select_framework(framework);
        Ok(())
    }

    /// Select a theme by its id (`"sandpackDark"`, `"nightOwl"`, ...)
    pub fn select_theme_id(&mut self, id: &str) -> Result<(), SelectionError> {
        let theme = id.parse::<ThemeId>().inspect_err(|e| {
            warn!(error = %e, "rejected theme selection");
        })?;
        self.select_theme(theme);
        Ok(())
    }

    /// Apply both parts of `request`, or neither if either id is invalid
    pub fn apply(&mut self, request: SelectionRequest<'_>) -> Result<(), SelectionError> {
        let framework = request.framework.map(str::parse::<FrameworkId>).transpose()?;
        let theme = request.theme.map(str::parse::<ThemeId>).transpose()?;
        if let Some(framework) = framework {
            self.select_framework(framework);
        }
        if let Some(theme) = theme {
            self.select_theme(theme);
        }
        Ok(())
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn refresh(&mut self) {
        self.config = SandboxConfig::derive(&self.selection);
        debug!(
            template = self.config.template.id(),
            files = self.config.files.len(),
            "derived sandbox configuration"
        );
        self.push_config();
    }

    fn push_config(&mut self) {
        // Host failures belong to the host; the selection still stands.
        if let Err(e) = self.host.configure(&self.config) {
            warn!(error = %e, "sandbox host failed to apply configuration");
        }
    }
}
