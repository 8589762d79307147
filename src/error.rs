// Error taxonomy for the play path
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::audio::ChannelId;

/// The payload is not valid transport-encoded (base64) data.
#[derive(Error, Debug)]
#[error("Malformed clip payload: {0}")]
pub struct DecodeError(#[source] pub base64::DecodeError);

/// The transient backing resource could not be created, written or removed.
#[derive(Error, Debug)]
pub enum BackingResourceError {
    #[error("Failed to create backing file in {dir:?}: {source}")]
    Create { dir: PathBuf, source: io::Error },

    #[error("Failed to write backing file {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to remove backing file {path:?}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}

/// The backend refused to start (or stop) playback.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// No audio subsystem, or it has been torn down
    #[error("Audio backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend could not open or parse the clip
    #[error("Backend rejected clip {path:?}: {reason}")]
    Rejected { path: PathBuf, reason: String },

    #[error("No such playback channel: {0}")]
    NoSuchChannel(ChannelId),
}

/// An optional capability (haptics) is missing. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Capability unavailable: {0}")]
pub struct CapabilityUnavailable(pub &'static str);

/// Everything that can go wrong between a button press and a sound.
#[derive(Error, Debug)]
pub enum SoundboardError {
    #[error("Unknown clip: {0}")]
    UnknownAsset(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    BackingResource(#[from] BackingResourceError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("Playback worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}
