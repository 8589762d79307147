// Audio playback module
// Transport decoding, the temp-file bridge, the channel pool and the cpal backend

pub mod backend;
pub mod bridge;
pub mod decoder;
pub mod engine;
pub mod output;
pub mod resample;

pub use backend::{AudioBackend, CompletionSender, CpalBackend, UnavailableBackend};
pub use bridge::{BufferBridge, HandleId, PlayableHandle};
pub use decoder::{decode, encode, DecodedBuffer};
pub use engine::{ChannelState, PlaybackEngine, PlaybackOutcome};

/// Index of a slot in the playback channel pool
pub type ChannelId = usize;

/// One playing clip inside the backend.
///
/// `channel` is `None` for clips started on the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Voice {
    pub channel: Option<ChannelId>,
    pub handle: HandleId,
}
