// Soundboard - a fixed catalog of short clips played on demand
// Module declarations
pub mod audio;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod haptics;
pub mod query;
pub mod settings;
pub mod state;

#[cfg(test)]
mod test_util;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use audio::{AudioBackend, CpalBackend, UnavailableBackend};
use catalog::AssetCatalog;
use error::PlaybackError;
use haptics::NoHaptics;
use settings::BoardSettings;
use state::Soundboard;

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "SOUNDBOARD_SETTINGS";

/// Process entry: load settings, open the audio device and drive the board
/// from stdin (`/text` searches, `!stop` silences, anything else plays).
pub fn run() -> Result<()> {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let settings = match std::env::var_os(SETTINGS_ENV) {
        Some(path) => BoardSettings::load_from(Path::new(&path))?,
        None => BoardSettings::load(&std::env::current_dir()?)?,
    };

    let catalog = Arc::new(AssetCatalog::load());

    let (completion_tx, completion_rx) = tokio::sync::mpsc::unbounded_channel();
    // Without a device the board still lists and searches; presses report the failure
    let backend: Arc<dyn AudioBackend> =
        match CpalBackend::init(&settings.output, settings.playback.volume, completion_tx) {
            Ok(backend) => Arc::new(backend),
            Err(e) => {
                log::warn!("{}; clips will not play", e);
                let reason = match e {
                    PlaybackError::BackendUnavailable(reason) => reason,
                    other => other.to_string(),
                };
                Arc::new(UnavailableBackend::new(reason))
            }
        };

    let board = Arc::new(Soundboard::new(catalog, settings, backend, Arc::new(NoHaptics)));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async move {
        let completions = board.attach_completions(completion_rx);
        let result = drive_from_stdin(&board).await;

        if let Err(e) = commands::stop_all(&board) {
            log::warn!("{}", e);
        }
        // The backend holds the completion sender, so the loop never ends on its own
        completions.abort();
        result
    })
}

async fn drive_from_stdin(board: &Arc<Soundboard>) -> Result<()> {
    print_json(&board.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(query) = line.strip_prefix('/') {
            print_json(&commands::on_query_changed(board, query));
        } else if line == "!stop" {
            if let Err(e) = commands::stop_all(board) {
                log::warn!("{}", e);
            }
        } else if line == "!status" {
            print_json(&commands::get_board_status(board));
        } else {
            let board = Arc::clone(board);
            let key = line.to_string();
            tokio::spawn(async move {
                print_json(&commands::on_activate(&board, &key).await);
            });
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize response: {}", e),
    }
}
