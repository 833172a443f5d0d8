mod api;
mod config;
mod logging;
mod todo;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::thread;
use tokio::sync::mpsc;

use api::client::ApiClient;
use config::{Config, ConfigError};
use todo::store::{StoreEvent, TodoStore};
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "tasks")]
#[command(about = "A TUI for a shared task list served over REST")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (currently only 'backend_url' is supported)")]
        key: String,
        #[arg(help = "Configuration value", value_hint = ValueHint::Url)]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app().await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            if key != "backend_url" {
                eprintln!("Error: Unknown configuration key '{}'. Only 'backend_url' is supported.", key);
                std::process::exit(1);
            }

            let mut config = match Config::load() {
                Ok(config) => config,
                Err(ConfigError::ConfigNotFound) => Config {
                    backend_url: String::new(),
                },
                Err(e) => return Err(e),
            };

            config.set_backend_url(value);
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            if key != "backend_url" {
                eprintln!("Error: Unknown configuration key '{}'. Only 'backend_url' is supported.", key);
                std::process::exit(1);
            }

            let config = Config::load()?;
            println!("{}", config.backend_url);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("backend_url = {}", config.backend_url);
        }
    }
    Ok(())
}

async fn run_main_app() -> Result<()> {
    logging::init();

    let config = Config::resolve()
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    let (store_tx, store_rx) = mpsc::unbounded_channel();
    let client = ApiClient::new(&config.backend_url)?;
    let mut store = TodoStore::new(client, store_tx);
    store.load();

    let mut app = App::new(store);
    run_tui(&mut app, store_rx).await
}

async fn run_tui(app: &mut App, store_rx: mpsc::UnboundedReceiver<StoreEvent>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, store_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Terminal input is read on its own thread; the async loop multiplexes it
/// with store completions.
fn spawn_input_thread() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut store_rx: mpsc::UnboundedReceiver<StoreEvent>,
) -> Result<()> {
    let mut input_rx = spawn_input_thread();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            Some(ev) = input_rx.recv() => {
                if let Event::Key(key) = ev {
                    app.handle_key_event(key);
                }
            }
            Some(update) = store_rx.recv() => {
                app.apply_store_event(update);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
