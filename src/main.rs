use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::watch,
};
use tracing::info;

use shortlink::{
    logging::{self, LogSettings},
    Config, InteractionState, ShorteningController,
};

#[derive(Debug, Parser)]
#[command(name = "shortlink", version, about = "Shorten URLs with a remote shortening service")]
struct Cli {
    /// URL to shorten; omit it to start an interactive session
    url: Option<String>,

    /// Copy the short URL to the clipboard once it is available
    #[arg(long)]
    copy: bool,

    /// Shortening service endpoint, overrides SHORTLINK_ENDPOINT
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    dotenv().ok();
    let _log_guard = logging::init(&LogSettings::from_env());

    let config = match cli.endpoint.as_deref() {
        Some(endpoint) => Config::with_endpoint(endpoint),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    info!(endpoint = %config.endpoint, "Using shortening service");

    let controller = ShorteningController::from_config(&config);
    match cli.url {
        Some(url) => Ok(run_once(&controller, &url, cli.copy).await),
        None => run_interactive(&controller).await,
    }
}

async fn run_once(controller: &ShorteningController, url: &str, copy: bool) -> ExitCode {
    match controller.submit(url).await {
        InteractionState::Success(short_url) => {
            println!("{short_url}");
            if copy {
                match controller.copy() {
                    Ok(true) => eprintln!("Short URL copied!"),
                    Ok(false) => {}
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            ExitCode::SUCCESS
        }
        InteractionState::Failure(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
        _ => ExitCode::FAILURE,
    }
}

async fn run_interactive(controller: &ShorteningController) -> anyhow::Result<ExitCode> {
    println!("Enter a long URL to shorten (:copy to copy the result, :quit to exit)");
    let renderer = tokio::spawn(render(
        controller.subscribe(),
        controller.subscribe_notice(),
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":copy" => match controller.copy() {
                Ok(true) => {}
                Ok(false) => println!("Nothing to copy yet"),
                Err(e) => eprintln!("error: {e}"),
            },
            _ => {
                controller.submit(&line).await;
            }
        }
    }

    renderer.abort();
    Ok(ExitCode::SUCCESS)
}

async fn render(mut state: watch::Receiver<InteractionState>, mut notice: watch::Receiver<bool>) {
    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = state.borrow_and_update().clone();
                match current {
                    InteractionState::Idle => {}
                    InteractionState::Submitting => println!("Shortening..."),
                    InteractionState::Success(short_url) => println!("Short URL: {short_url}"),
                    InteractionState::Failure(message) => println!("Error: {message}"),
                }
            }
            changed = notice.changed() => {
                if changed.is_err() {
                    break;
                }
                if *notice.borrow_and_update() {
                    println!("Short URL copied!");
                }
            }
        }
    }
}
