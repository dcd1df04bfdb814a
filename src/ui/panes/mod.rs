//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`header`]: Title bar with the framework and theme dropdowns
//! - [`editor`]: Sandbox editor with file tabs, line numbers and theme-driven highlighting
//! - [`preview`]: Outbound configuration summary and the toggleable console
//! - [`status`]: Status bar with keybindings and the current selection
//!
//! Each pane module exports a primary `render_*` function that draws from
//! borrowed data and keeps no state of its own.

pub mod editor;
pub mod header;
pub mod preview;
pub mod status;

// Re-export render functions for convenience
pub use editor::{render_editor_pane, EditorRenderData};
pub use header::{render_dropdown, render_header, HeaderRenderData, SelectorView};
pub use preview::render_preview_pane;
pub use status::render_status_bar;
