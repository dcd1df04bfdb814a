// SandTTY: framework and theme picker for an embeddable code sandbox

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use sandtty::cli::Args;
use sandtty::controller::{SelectionRequest, SelectorController};
use sandtty::logging::{self, LogTarget};
use sandtty::sandbox::{JsonHost, NullHost, SandboxHost};
use sandtty::ui::App;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        logging::init(match &args.log_file {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        })?;
        return print_config(&args);
    }

    logging::init(match &args.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Discard,
    })?;

    // Apply command-line selections before touching the terminal so a bad id
    // is reported on a normal screen
    let mut app = App::new();
    apply_selection(app.controller_mut(), &args)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("starting TUI");
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn apply_selection<H: SandboxHost>(controller: &mut SelectorController<H>, args: &Args) -> Result<()> {
    controller.apply(SelectionRequest {
        framework: args.framework.as_deref(),
        theme: args.theme.as_deref(),
    })?;
    Ok(())
}

fn print_config(args: &Args) -> Result<()> {
    let mut controller = SelectorController::new(NullHost);
    apply_selection(&mut controller, args)?;

    let stdout = io::stdout();
    let mut host = if args.pretty {
        JsonHost::pretty(stdout.lock())
    } else {
        JsonHost::new(stdout.lock())
    };
    host.configure(controller.config())?;
    host.into_inner().flush()?;
    Ok(())
}
