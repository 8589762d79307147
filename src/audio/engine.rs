// Playback engine
// A fixed pool of channels over an AudioBackend. Each playing channel owns
// its backing resource, which is released when the backend reports
// completion (or the channel is stopped).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedReceiver;

use super::backend::AudioBackend;
use super::bridge::{BufferBridge, HandleId, PlayableHandle};
use super::{ChannelId, Voice};
use crate::error::PlaybackError;

/// Upper bound on pool size; mobile backends cap concurrent voices
pub const MAX_CHANNELS: usize = 16;

/// Where a play request ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum PlaybackOutcome {
    /// Playing on a pool channel
    Channel {
        channel: ChannelId,
        #[serde(skip)]
        handle: HandleId,
    },
    /// Every channel was busy; playing untracked by the pool
    Fallback {
        #[serde(skip)]
        handle: HandleId,
    },
}

impl PlaybackOutcome {
    pub fn channel(&self) -> Option<ChannelId> {
        match self {
            PlaybackOutcome::Channel { channel, .. } => Some(*channel),
            PlaybackOutcome::Fallback { .. } => None,
        }
    }

    pub fn handle(&self) -> HandleId {
        match self {
            PlaybackOutcome::Channel { handle, .. } | PlaybackOutcome::Fallback { handle } => *handle,
        }
    }

    pub fn voice(&self) -> Voice {
        Voice {
            channel: self.channel(),
            handle: self.handle(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelState {
    Idle,
    Playing,
}

enum Slot {
    Idle,
    Playing(PlayableHandle),
}

impl Slot {
    fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }
}

pub struct PlaybackEngine {
    backend: Arc<dyn AudioBackend>,
    bridge: Arc<BufferBridge>,
    channels: Mutex<Vec<Slot>>,
    // Fallback plays, kept only so their backing files can be released
    detached: Mutex<HashMap<HandleId, PlayableHandle>>,
}

impl PlaybackEngine {
    /// Create an engine with `channels` pool slots (clamped to 1..=16)
    pub fn new(backend: Arc<dyn AudioBackend>, bridge: Arc<BufferBridge>, channels: usize) -> Self {
        let channels = channels.clamp(1, MAX_CHANNELS);
        log::info!("[Engine] Playback pool with {} channels", channels);
        Self {
            backend,
            bridge,
            channels: Mutex::new((0..channels).map(|_| Slot::Idle).collect()),
            detached: Mutex::new(HashMap::new()),
        }
    }

    /// Start playing `handle` on the first idle channel, or on the fallback
    /// path when the pool is full.
    pub fn play(&self, handle: PlayableHandle) -> Result<PlaybackOutcome, PlaybackError> {
        let id = handle.id();
        let path = handle.path().to_path_buf();

        // Claim under the lock, start outside it
        let claimed = {
            let mut slots = self.channels.lock();
            match slots.iter().position(Slot::is_idle) {
                Some(channel) => {
                    slots[channel] = Slot::Playing(handle);
                    Ok(channel)
                }
                None => Err(handle),
            }
        };

        match claimed {
            Ok(channel) => {
                let voice = Voice {
                    channel: Some(channel),
                    handle: id,
                };
                if let Err(e) = self.backend.start(voice, &path) {
                    log::warn!("[Engine] Channel {} failed to start {}: {}", channel, id, e);
                    if let Some(handle) = self.vacate(channel, id) {
                        self.release(handle);
                    }
                    return Err(e);
                }
                log::debug!("[Engine] {} playing on channel {}", id, channel);
                Ok(PlaybackOutcome::Channel { channel, handle: id })
            }
            Err(handle) => {
                self.detached.lock().insert(id, handle);
                let voice = Voice {
                    channel: None,
                    handle: id,
                };
                if let Err(e) = self.backend.start(voice, &path) {
                    log::warn!("[Engine] Fallback failed to start {}: {}", id, e);
                    if let Some(handle) = self.detached.lock().remove(&id) {
                        self.release(handle);
                    }
                    return Err(e);
                }
                log::debug!("[Engine] All channels busy, {} on fallback path", id);
                Ok(PlaybackOutcome::Fallback { handle: id })
            }
        }
    }

    /// Backend reported that `voice` played to the end
    pub fn on_complete(&self, voice: Voice) {
        let handle = match voice.channel {
            Some(channel) => self.vacate(channel, voice.handle),
            None => self.detached.lock().remove(&voice.handle),
        };
        match handle {
            Some(handle) => {
                log::debug!("[Engine] {} finished on {:?}", voice.handle, voice.channel);
                self.release(handle);
            }
            // Stopped or already reassigned
            None => log::debug!("[Engine] Ignoring stale completion for {}", voice.handle),
        }
    }

    /// Drain completion events until every sender is gone
    pub async fn run_completions(self: Arc<Self>, mut completions: UnboundedReceiver<Voice>) {
        while let Some(voice) = completions.recv().await {
            self.on_complete(voice);
        }
        log::debug!("[Engine] Completion channel closed");
    }

    /// Stop whatever is playing on `channel` and free it
    pub fn stop(&self, channel: ChannelId) -> Result<(), PlaybackError> {
        let handle = {
            let mut slots = self.channels.lock();
            let slot = slots
                .get_mut(channel)
                .ok_or(PlaybackError::NoSuchChannel(channel))?;
            match std::mem::replace(slot, Slot::Idle) {
                Slot::Playing(handle) => handle,
                Slot::Idle => return Ok(()),
            }
        };

        let result = self.backend.stop(Voice {
            channel: Some(channel),
            handle: handle.id(),
        });
        self.release(handle);
        result
    }

    /// Stop every channel and every fallback play
    pub fn stop_all(&self) -> Result<(), PlaybackError> {
        let result = self.backend.stop_all();

        let mut handles: Vec<PlayableHandle> = {
            let mut slots = self.channels.lock();
            slots
                .iter_mut()
                .filter_map(|slot| match std::mem::replace(slot, Slot::Idle) {
                    Slot::Playing(handle) => Some(handle),
                    Slot::Idle => None,
                })
                .collect()
        };
        handles.extend(self.detached.lock().drain().map(|(_, handle)| handle));

        log::info!("[Engine] Stopped {} clips", handles.len());
        for handle in handles {
            self.release(handle);
        }
        result
    }

    pub fn channel_states(&self) -> Vec<ChannelState> {
        self.channels
            .lock()
            .iter()
            .map(|slot| match slot {
                Slot::Idle => ChannelState::Idle,
                Slot::Playing(_) => ChannelState::Playing,
            })
            .collect()
    }

    pub fn idle_channels(&self) -> usize {
        self.channels.lock().iter().filter(|slot| slot.is_idle()).count()
    }

    pub fn capacity(&self) -> usize {
        self.channels.lock().len()
    }

    /// Number of fallback plays still holding a backing resource
    pub fn detached_plays(&self) -> usize {
        self.detached.lock().len()
    }

    // Free `channel` only if it still belongs to `id`
    fn vacate(&self, channel: ChannelId, id: HandleId) -> Option<PlayableHandle> {
        let mut slots = self.channels.lock();
        let slot = slots.get_mut(channel)?;
        if !matches!(slot, Slot::Playing(handle) if handle.id() == id) {
            return None;
        }
        match std::mem::replace(slot, Slot::Idle) {
            Slot::Playing(handle) => Some(handle),
            Slot::Idle => None,
        }
    }

    fn release(&self, handle: PlayableHandle) {
        if let Err(e) = self.bridge.release(handle) {
            log::warn!("[Engine] {}", e);
        }
    }
}
