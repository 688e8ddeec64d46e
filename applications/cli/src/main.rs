/// Cadence - headless music player
use cadence_cli::{ClockPrimitive, CliConfig, Command, Flow, Player};
use cadence_client::{CadenceClient, ClientConfig};
use cadence_playback::{FileSessionStore, PlayEventSink, PlaybackController};
use clap::Parser;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Headless Cadence player driven from stdin", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./cadence.toml if present)
    #[arg(short, long, env = "CADENCE_CONFIG")]
    config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for player output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence=info,cadence_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.server.url = url;
    }
    config.validate()?;

    tracing::info!("Starting Cadence");
    tracing::info!("Server: {}", config.server.url);
    tracing::info!("Session directory: {:?}", config.session.directory);

    let timeout = Duration::from_secs(config.server.timeout_secs);
    let client = Arc::new(CadenceClient::new(
        ClientConfig::new(config.server.url.clone())
            .with_timeouts(timeout, timeout.min(Duration::from_secs(10))),
    )?);
    let store = FileSessionStore::new(&config.session.directory)?;

    let controller = PlaybackController::new(
        ClockPrimitive::new(),
        store,
        Arc::clone(&client) as Arc<dyn PlayEventSink>,
        config.player.clone(),
    );
    let mut player = Player::new(controller);
    player.start(client.as_ref()).await;
    print_lines(player.take_output());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.clock.tick_ms));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        let shuffle_deadline = player.shuffle_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.parse::<Command>() {
                    Ok(command) => match player.execute(command) {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => println!("error: {}", e),
                    },
                    Err(e) => println!("{}", e),
                }
            }
            _ = ticker.tick() => player.tick(),
            _ = async {
                match shuffle_deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => std::future::pending().await,
                }
            } => player.finish_shuffle(),
        }

        print_lines(player.take_output());
    }

    player.shutdown();
    print_lines(player.take_output());
    tracing::info!("Session saved, exiting");

    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
