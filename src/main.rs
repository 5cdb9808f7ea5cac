// tapetty: self-accelerating tape interpreter with live tape visualization

use std::fs::OpenOptions;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tapetty::cli::{Cli, LogTarget};
use tapetty::headless::run_headless;
use tapetty::interpreter::engine::Engine;
use tapetty::interpreter::shared::SharedEngine;
use tapetty::parser::Program;
use tapetty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let source = cli.load_source()?;

    if cli.headless {
        let summary = run_headless(&source, io::stdin().lock(), io::stdout(), cli.max_ticks)?;
        log::info!(
            "{} instructions in {} ticks",
            summary.dispatched,
            summary.ticks
        );
        return Ok(());
    }

    let program = Program::parse(&source);
    log::info!("Loaded {} instructions", program.len());
    let engine = SharedEngine::new(Engine::new(program));

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine.clone(), cli.rate);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;

    let view = engine.view();
    if !view.output.is_empty() {
        println!("{}", view.output);
    }
    if let Some(fault) = view.fault {
        return Err(fault.into());
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    // No logger at all while the UI owns the screen, whatever RUST_LOG says
    if cli.log_target() == LogTarget::Off {
        return Ok(());
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    match cli.log_target() {
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        LogTarget::Stderr | LogTarget::Off => {}
    }

    builder.init();
    Ok(())
}
