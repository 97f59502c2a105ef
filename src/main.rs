// algotrace: step through classic algorithms in the terminal

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotrace::algorithms::Registry;
use algotrace::config::{Cli, PlayerConfig};
use algotrace::trace::Trace;
use algotrace::ui::App;

fn init_tracing(config: &PlayerConfig) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        // The player owns the terminal, so stderr logging is only safe for --json
        None if config.json => builder.with_writer(io::stderr).init(),
        None => {}
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = PlayerConfig::from_cli(&cli);
    init_tracing(&config)?;

    let registry = Registry::standard();
    let trace = match Trace::record(&cli.command, &registry) {
        Ok(trace) => trace,
        Err(e) => {
            tracing::warn!(error = %e, "could not record run");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.json {
        println!("{}", trace.to_json()?);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(trace, &config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::warn!(error = %err, "player exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
