//! mpris-ctl - control an MPRIS media player from the command line
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use futures::StreamExt;
use mpris_remote::{ClientConfig, LoopStatus, MediaPlayer, Player, tracing_config};
use tokio_util::sync::CancellationToken;
use tracing::info;

const BUS_NAME_PREFIX: &str = "org.mpris.MediaPlayer2.";

#[derive(Parser)]
#[command(name = "mpris-ctl")]
#[command(about = "Control an MPRIS media player")]
struct Cli {
    /// Player bus name, or its suffix such as "vlc"
    #[arg(short, long)]
    player: String,

    /// TOML client configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Previous,
    /// Seek by an offset in microseconds
    Seek {
        #[arg(allow_negative_numbers = true)]
        offset: i64,
    },
    /// Jump to a position in microseconds within the given track
    SetPosition { track_id: String, position: i64 },
    Open { uri: String },
    Raise,
    Quit,
    /// Print playback status and settings
    Status,
    /// Print the current track's metadata as JSON
    Metadata,
    SetLoop { status: LoopStatus },
    SetShuffle {
        #[arg(action = clap::ArgAction::Set)]
        shuffle: bool,
    },
    SetVolume { volume: f64 },
    SetRate { rate: f64 },
    /// Print positions reported by Seeked until interrupted
    WatchSeeked,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_config::init()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    let name = bus_name(&cli.player);

    if matches!(cli.command, Commands::Raise | Commands::Quit) {
        let media_player = MediaPlayer::connect_with_config(name, &config).await?;
        match cli.command {
            Commands::Raise => media_player.raise().await,
            _ => media_player.quit().await,
        }
        media_player.close().await?;
        return Ok(());
    }

    let player = Player::connect_with_config(name, &config).await?;

    match cli.command {
        Commands::Play => player.play().await,
        Commands::Pause => player.pause().await,
        Commands::PlayPause => player.play_pause().await,
        Commands::Stop => player.stop().await,
        Commands::Next => player.next().await,
        Commands::Previous => player.previous().await,
        Commands::Seek { offset } => player.seek_to(offset).await,
        Commands::SetPosition { track_id, position } => {
            player.set_position(track_id, position).await;
        }
        Commands::Open { uri } => player.open_uri(&uri).await,
        Commands::Status => print_status(&player).await?,
        Commands::Metadata => {
            let metadata = player.metadata().await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Commands::SetLoop { status } => player.set_loop_status(status).await?,
        Commands::SetShuffle { shuffle } => player.set_shuffle(shuffle).await?,
        Commands::SetVolume { volume } => player.set_volume(volume).await?,
        Commands::SetRate { rate } => player.set_rate(rate).await?,
        Commands::WatchSeeked => watch_seeked(&player).await?,
        Commands::Raise | Commands::Quit => {}
    }

    player.close().await?;
    Ok(())
}

fn bus_name(player: &str) -> String {
    if player.contains('.') {
        player.to_string()
    } else {
        format!("{BUS_NAME_PREFIX}{player}")
    }
}

async fn print_status(player: &Player) -> mpris_remote::Result<()> {
    println!("Status:   {}", player.playback_status().await?);
    println!("Loop:     {}", player.loop_status().await?);
    println!("Shuffle:  {}", player.shuffle().await?);
    println!("Volume:   {:.2}", player.volume().await?);
    println!("Rate:     {:.2}", player.rate().await?);
    println!("Position: {}us", player.position().await?);
    Ok(())
}

async fn watch_seeked(player: &Player) -> mpris_remote::Result<()> {
    let cancel = CancellationToken::new();
    let mut positions = player.subscribe_to_position_changes(cancel.clone()).await?;

    let interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupted, stopping subscription");
            interrupt.cancel();
        }
    });

    while let Some(position) = positions.next().await {
        println!("{position}");
    }

    Ok(())
}
