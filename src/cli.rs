//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Pick a framework and theme for an embeddable code sandbox
#[derive(Parser, Debug, Default)]
#[command(name = "sandtty", version, about)]
pub struct Args {
    /// Framework to select after startup: react, vue or angular
    #[arg(long, value_name = "ID")]
    pub framework: Option<String>,

    /// Theme to select after startup: sandpackDark, nightOwl, atomDark or dracula
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the sandbox configuration as JSON and exit instead of starting the TUI
    #[arg(long)]
    pub print_config: bool,

    /// Pretty-print the JSON written by --print-config
    #[arg(long, requires = "print_config")]
    pub pretty: bool,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_flags() {
        let args = Args::try_parse_from([
            "sandtty",
            "--framework",
            "vue",
            "--theme",
            "dracula",
            "--print-config",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(args.framework.as_deref(), Some("vue"));
        assert_eq!(args.theme.as_deref(), Some("dracula"));
        assert!(args.print_config);
        assert!(args.pretty);
    }

    #[test]
    fn pretty_requires_print_config() {
        assert!(Args::try_parse_from(["sandtty", "--pretty"]).is_err());
    }

    #[test]
    fn no_flags_means_tui_with_defaults() {
        let args = Args::try_parse_from(["sandtty"]).unwrap();
        assert!(args.framework.is_none());
        assert!(args.theme.is_none());
        assert!(!args.print_config);
    }
}
