//! Command-line entry point.
//!
//! # Startup sequence
//!
//! 1. Parse arguments.
//! 2. Initialise logging.
//! 3. Load [`AppConfig`] (default on first run) and apply CLI overrides.
//! 4. Start a [`SignSession`] fed either by the positional words or by
//!    stdin, one final segment per line.
//! 5. Print every published playback snapshot as one JSON line on stdout
//!    until the source is exhausted and playback is idle.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use sign_speech::config::AppConfig;
use sign_speech::input::{LineSource, QueuedSource, WordSource};
use sign_speech::pose::known_words;
use sign_speech::sequencer::{PlaybackSnapshot, SequencePlayer};
use sign_speech::SignSession;

/// Render text as a timed stream of sign-language avatar poses.
#[derive(Parser, Debug)]
#[command(name = "sign-speech")]
#[command(version)]
#[command(about = "Convert words into a timed sequence of sign-language poses")]
struct Cli {
    /// Words to sign. Reads lines from stdin when omitted.
    words: Vec<String>,

    /// Playback speed multiplier (higher is faster).
    #[arg(long)]
    speed: Option<f32>,

    /// Base pause per word in milliseconds.
    #[arg(long)]
    pause: Option<u64>,

    /// Settings file to use instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the dictionary vocabulary and exit.
    #[arg(long)]
    list_words: bool,
}

fn load_config(cli: &Cli) -> AppConfig {
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    if let Some(speed) = cli.speed {
        config.playback.speed_multiplier = speed;
    }
    if let Some(pause) = cli.pause {
        config.playback.pause_duration_ms = pause;
    }
    if let Err(e) = config.playback.validate() {
        log::warn!("{e}; replacing invalid playback settings");
        config.playback = config.playback.repaired();
    }
    config
}

fn print_snapshot(out: &mut impl Write, snapshot: &PlaybackSnapshot) -> Result<()> {
    let line = serde_json::to_string(snapshot).context("serialising snapshot")?;
    writeln!(out, "{line}").context("writing snapshot")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("sign-speech starting up");

    if cli.list_words {
        for word in known_words() {
            println!("{word}");
        }
        return Ok(());
    }

    let config = load_config(&cli);
    let player = SequencePlayer::new();
    let mut updates = player.subscribe();

    let mut source: Box<dyn WordSource> = if cli.words.is_empty() {
        log::info!("reading transcript lines from stdin");
        Box::new(LineSource::new(BufReader::new(tokio::io::stdin())))
    } else {
        Box::new(QueuedSource::new([cli.words.join(" ")]))
    };

    let mut session = SignSession::new(player, config);
    let mut feeder = tokio::spawn(async move { session.run(source.as_mut()).await });

    let mut stdout = std::io::stdout();
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                print_snapshot(&mut stdout, &snapshot)?;
            }
            finished = &mut feeder => {
                finished.context("session task failed")??;
                if updates.has_changed().unwrap_or(false) {
                    let snapshot = updates.borrow_and_update().clone();
                    print_snapshot(&mut stdout, &snapshot)?;
                }
                break;
            }
        }
    }

    log::info!("sign-speech done");
    Ok(())
}
