mod app;
mod config;
mod contact_client;
mod input;
mod terminal;
mod views;

use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use common::config::{FileContentConfigProvider, KeyValueStore, YamlKeyValueStore};
use common::contact::ContactRequest;
use common::logger::{self, LogTarget};
use common::theme::ThemeStore;
use common::log;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};

use app::App;
use config::{ClientConfig, beside_executable};
use contact_client::{ContactClient, SubmitOutcome, form_indicator};
use input::AppCommand;
use terminal::TerminalGuard;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "portfolio_client", about = "Terminal edition of the portfolio site")]
struct Args {
    /// Path to the client config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Boot screen, typing banner and the snake game
    Play,
    /// Send a message through the contact relay
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args = Args::parse();

    let config = config::get_config_manager(args.config).get_config()?;
    logger::init_logger(
        Some("Client".to_string()),
        LogTarget::File(beside_executable(&config.log_file)),
    );

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            play(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Contact {
            name,
            email,
            message,
        } => contact(&config, ContactRequest::new(name, email, message)).await,
    }
}

async fn contact(config: &ClientConfig, request: ContactRequest) -> Result<ExitCode, Box<dyn Error>> {
    let client = ContactClient::new(config.relay_url.clone())?;
    println!("{}", form_indicator(&request));
    let outcome = client.submit(&request).await;

    if outcome.is_sent() {
        println!("{}", outcome.user_message());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{}", outcome.user_message());
        if let SubmitOutcome::Failed { reason } = &outcome {
            eprintln!("({})", reason);
        }
        Ok(ExitCode::FAILURE)
    }
}

async fn play(config: &ClientConfig) -> Result<(), Box<dyn Error>> {
    let store = YamlKeyValueStore::open(FileContentConfigProvider::new(beside_executable(
        &config.prefs_file,
    )))?;
    let (width, height) = crossterm::terminal::size()?;
    let mut app = App::new(config, ThemeStore::load(store), Rect::new(0, 0, width, height))?;
    log!("Terminal client started ({}x{})", width, height);

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, &mut app).await;
    app.shutdown().await;
    drop(guard);

    log!("Terminal client exited");
    result
}

async fn run_app<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), Box<dyn Error>> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    let mut last_frame = Instant::now();

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.update(now.duration_since(last_frame));
                last_frame = now;

                app.refresh().await;
                terminal.draw(|frame| app.render(frame))?;
            }
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if let Some(command) = app.handle_event(event) {
                        if command == AppCommand::Quit {
                            return Ok(());
                        }
                        app.handle_command(command).await;
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            }
        }
    }
}
