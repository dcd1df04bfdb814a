//! # Introduction
//!
//! SandTTY lets a user pick a front-end framework and an editor theme, then
//! hands an embeddable code sandbox the configuration for that pair: a
//! starter project, a theme object and a fixed set of presentation options.
//! Bundling, execution and live preview belong to the sandbox; this crate
//! owns the selection and the payload.
//!
//! ## Pipeline
//!
//! ```text
//! Dropdown → SelectorController → SandboxConfig → SandboxHost
//! ```
//!
//! 1. [`catalog`] — the static starter projects, one [`catalog::FileSet`] per
//!    [`catalog::FrameworkId`].
//! 2. [`theme`] — [`theme::ThemeId`] and the theme objects it resolves to.
//! 3. [`controller`] — owns the [`controller::SelectionState`] and re-derives
//!    the payload on every change.
//! 4. [`sandbox`] — the [`sandbox::SandboxConfig`] payload and the
//!    [`sandbox::SandboxHost`] seam, with a JSON host for web embedding.
//! 5. [`ui`] — ratatui-based TUI with an in-terminal host; not part of the
//!    stable library API.
//!
//! ## Choices
//!
//! Frameworks: React, Vue, Angular.
//! Themes: Sandpack Dark, Night Owl, Atom Dark, Dracula.

pub mod catalog;
pub mod cli;
pub mod controller;
pub mod error;
pub mod logging;
pub mod sandbox;
pub mod theme;
pub mod ui;
