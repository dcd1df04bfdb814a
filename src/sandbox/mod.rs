//! Configuration payload for the embedded code sandbox
//!
//! The sandbox itself (bundling, module resolution, execution and preview)
//! is an external collaborator. This module only builds the configuration it
//! consumes and defines the [`SandboxHost`] seam through which a collaborator
//! receives it.
//!
//! # Derivation
//!
//! [`SandboxConfig::derive`] maps a [`SelectionState`] to a payload:
//!
//! ```text
//! (framework, theme) -> template + theme object + files + options
//! ```
//!
//! Only `template`, `files`, `options.visibleFiles` and `theme` depend on the
//! selection; every other option is fixed.

mod json;

pub use json::JsonHost;

use crate::catalog::{get_files, FileSet, FrameworkId};
use crate::controller::SelectionState;
use crate::error::HostError;
use crate::theme::{SandboxTheme, ThemeId};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Editor pane height in pixels
pub const EDITOR_HEIGHT: u32 = 800;

/// Share of the sandbox width given to the editor, in percent
pub const EDITOR_WIDTH_PERCENTAGE: u16 = 50;

/// Sandbox CSS class overrides, `sandbox class -> custom class`
pub const CLASS_OVERRIDES: [(&str, &str); 5] = [
    ("sp-wrapper", "custom-wrapper"),
    ("sp-editor", "custom-editor"),
    ("sp-tab-button", "custom-tab"),
    ("sp-preview", "custom-preview"),
    ("sp-file-explorer", "custom-explorer"),
];

/// The full configuration object handed to a sandbox host
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxConfig {
    pub template: FrameworkId,
    pub theme: &'static SandboxTheme,
    /// Kept alongside the theme object so hosts can show which theme it is
    #[serde(skip)]
    pub theme_id: ThemeId,
    pub files: FileSet,
    pub options: SandboxOptions,
    pub custom_setup: CustomSetup,
}

impl SandboxConfig {
    /// Build the payload for `selection`
    pub fn derive(selection: &SelectionState) -> Self {
        let files = get_files(selection.framework);
        SandboxConfig {
            template: selection.framework,
            theme: selection.theme.theme(),
            theme_id: selection.theme,
            files,
            options: SandboxOptions::with_visible_files(files.paths()),
            custom_setup: CustomSetup::default(),
        }
    }

    pub fn visible_files(&self) -> &[&'static str] {
        &self.options.visible_files
    }
}

/// Presentation options; all fixed except `visible_files`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxOptions {
    pub autorun: bool,
    pub auto_reload: bool,
    pub show_line_numbers: bool,
    pub show_inline_errors: bool,
    pub show_refresh_button: bool,
    /// Left unset; the sandbox then falls back to its own default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_navigator: Option<bool>,
    pub show_tabs: bool,
    pub editor_height: u32,
    pub show_console: bool,
    pub show_console_button: bool,
    pub editor_width_percentage: u16,
    pub visible_files: Vec<&'static str>,
    pub classes: ClassOverrides,
}

impl SandboxOptions {
    pub fn with_visible_files(visible_files: Vec<&'static str>) -> Self {
        SandboxOptions {
            autorun: true,
            auto_reload: false,
            show_line_numbers: true,
            show_inline_errors: true,
            show_refresh_button: true,
            show_navigator: None,
            show_tabs: true,
            editor_height: EDITOR_HEIGHT,
            show_console: false,
            show_console_button: true,
            editor_width_percentage: EDITOR_WIDTH_PERCENTAGE,
            visible_files,
            classes: ClassOverrides,
        }
    }
}

/// Serializes [`CLASS_OVERRIDES`] as a JSON object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassOverrides;

impl Serialize for ClassOverrides {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CLASS_OVERRIDES.len()))?;
        for (from, to) in CLASS_OVERRIDES.iter() {
            map.serialize_entry(from, to)?;
        }
        map.end()
    }
}

/// Extra npm dependencies installed into the sandbox; none by default
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CustomSetup {
    pub dependencies: std::collections::BTreeMap<String, String>,
}

/// A collaborator that renders a sandbox from a configuration.
///
/// `configure` is called once at startup and again after every selection
/// change. Implementations re-initialise from scratch each time; no ordering
/// or cancellation guarantees are made across calls.
pub trait SandboxHost {
    fn configure(&mut self, config: &SandboxConfig) -> Result<(), HostError>;
}

/// Discards every configuration; used when only the derived payload matters
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl SandboxHost for NullHost {
    fn configure(&mut self, _config: &SandboxConfig) -> Result<(), HostError> {
        Ok(())
    }
}

impl<H: SandboxHost + ?Sized> SandboxHost for Box<H> {
    fn configure(&mut self, config: &SandboxConfig) -> Result<(), HostError> {
        (**self).configure(config)
    }
}
