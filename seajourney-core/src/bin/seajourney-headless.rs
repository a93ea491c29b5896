//! Terminal driver for the landing page.
//!
//! Reads one command per line from stdin and prints page snapshots as JSON
//! on stdout. Logs go to stderr.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use chrono::Utc;
use clap::Parser;
use seajourney_config::ConfigLoader;
use seajourney_core::{
    carousel::Viewport,
    page::{LandingPage, PageSnapshot},
    runtime::{self, PageHandle, RuntimeSettings, SystemClock, UserAction},
    subscription::build_store,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "seajourney-headless")]
#[command(about = "Drive the Sea Journey landing page from a terminal")]
struct Cli {
    /// TOML configuration file
    #[arg(long, env = "SEAJOURNEY_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Viewport width in logical pixels; selects how many slides are visible
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Do not read `.env` from the working directory
    #[arg(long, default_value_t = false)]
    no_env_file: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Action(UserAction),
    Show,
    Help,
    Quit,
}

const HELP: &str =
    "commands: next | prev | goto <index> | email <address> | submit | show | help | quit";

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "next" => Command::Action(UserAction::Next),
        "prev" => Command::Action(UserAction::Previous),
        "goto" => {
            let index = rest
                .parse()
                .with_context(|| format!("`goto` expects a slide index, got `{rest}`"))?;
            Command::Action(UserAction::JumpTo(index))
        }
        "email" => Command::Action(UserAction::EmailChanged(rest.to_string())),
        "submit" => Command::Action(UserAction::Submit),
        "show" | "" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command `{other}`"),
    };
    Ok(command)
}

fn print_snapshot(snapshot: &PageSnapshot) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(snapshot)?);
    Ok(())
}

/// Print each notice once, as it appears.
fn spawn_notice_printer(handle: &PageHandle) -> tokio::task::JoinHandle<()> {
    let mut updates = handle.subscribe();
    tokio::spawn(async move {
        let mut last_seen = None;
        while updates.changed().await.is_ok() {
            let latest = updates.borrow_and_update().notices.last().cloned();
            if let Some(notice) = latest
                && last_seen.is_none_or(|id| notice.id > id)
            {
                last_seen = Some(notice.id);
                println!("{}", serde_json::json!({ "notice": notice }));
            }
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config {
        loader = loader.with_config_path(path);
    }
    if cli.no_env_file {
        loader = loader.without_env_file();
    }
    let load = loader.load().context("failed to load configuration")?;
    let config = load.config;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    for warning in &load.warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    let store = build_store(&config.subscriptions).context("failed to build subscription store")?;
    let page = LandingPage::from_config(&config, Utc::now())?;
    let settings =
        RuntimeSettings::from_config(&config).with_viewport(Viewport::from_width(cli.width));

    info!(
        store = store.name(),
        launch = %config.launch.target.to_rfc3339(),
        viewport = ?settings.viewport,
        "starting headless page"
    );

    let handle = runtime::spawn(page, store, settings, Arc::new(SystemClock));
    let printer = spawn_notice_printer(&handle);
    print_snapshot(&handle.snapshot())?;
    eprintln!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received");
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };

        match parse_command(&line) {
            Ok(Command::Action(action)) => {
                let mut updates = handle.subscribe();
                updates.borrow_and_update();
                handle.send(action).await?;
                if updates.changed().await.is_ok() {
                    print_snapshot(&updates.borrow())?;
                }
            }
            Ok(Command::Show) => print_snapshot(&handle.snapshot())?,
            Ok(Command::Help) => eprintln!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(err) => eprintln!("{err}\n{HELP}"),
        }
    }

    handle.shutdown().await?;
    printer.await?;
    Ok(())
}
