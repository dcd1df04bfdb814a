//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, focus and dropdown handling
//! - **[`preview_host`]** — the in-terminal sandbox host that receives each configuration
//! - **[`panes`]** — stateless render functions for each visible pane (header, editor,
//!   preview, status bar)
//! - **[`theme`]** — chrome palette and the palette derived from the selected sandbox theme
//!
//! The entry point for consumers is [`App`]: construct it and call [`App::run`] to
//! start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod preview_host;
pub mod theme;

pub use app::App;
pub use preview_host::PreviewHost;
