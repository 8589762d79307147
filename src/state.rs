// Application state: the board and everything it owns
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::audio::{decoder, AudioBackend, BufferBridge, PlaybackEngine, PlaybackOutcome, Voice};
use crate::catalog::AssetCatalog;
use crate::error::SoundboardError;
use crate::haptics::Haptics;
use crate::query::{BoardView, QueryService};
use crate::settings::BoardSettings;

pub struct Soundboard {
    catalog: Arc<AssetCatalog>,
    query: QueryService,
    bridge: Arc<BufferBridge>,
    engine: Arc<PlaybackEngine>,
    haptics: Arc<dyn Haptics>,
    settings: BoardSettings,
}

impl Soundboard {
    pub fn new(
        catalog: Arc<AssetCatalog>,
        settings: BoardSettings,
        backend: Arc<dyn AudioBackend>,
        haptics: Arc<dyn Haptics>,
    ) -> Self {
        let bridge = Arc::new(BufferBridge::new(
            settings.backing.directory.clone(),
            settings.backing.prefix.clone(),
        ));
        log::info!("[Board] Backing files go to {:?}", bridge.dir());
        let engine = Arc::new(PlaybackEngine::new(
            backend,
            Arc::clone(&bridge),
            settings.playback.channels,
        ));
        Self {
            query: QueryService::new(Arc::clone(&catalog)),
            catalog,
            bridge,
            engine,
            haptics,
            settings,
        }
    }

    /// Feed backend completion events to the engine on the current runtime
    pub fn attach_completions(&self, completions: UnboundedReceiver<Voice>) -> JoinHandle<()> {
        tokio::spawn(Arc::clone(&self.engine).run_completions(completions))
    }

    /// Re-filter the board for new search text
    pub fn set_query(&self, text: &str) -> BoardView {
        self.query.set_query(text)
    }

    pub fn view(&self) -> BoardView {
        self.query.view()
    }

    /// Press the button for `key`: haptic pulse, then decode, materialize
    /// and play off the calling thread.
    pub async fn activate(&self, key: &str) -> Result<PlaybackOutcome, SoundboardError> {
        if self.catalog.get(key).is_none() {
            return Err(SoundboardError::UnknownAsset(key.to_string()));
        }

        if self.settings.haptics.enabled {
            self.haptics
                .try_vibrate(Duration::from_millis(self.settings.haptics.pulse_ms));
        }

        let catalog = Arc::clone(&self.catalog);
        let bridge = Arc::clone(&self.bridge);
        let engine = Arc::clone(&self.engine);
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> Result<PlaybackOutcome, SoundboardError> {
            let asset = catalog
                .get(&key)
                .ok_or_else(|| SoundboardError::UnknownAsset(key.clone()))?;
            let buffer = decoder::decode(asset.payload())?;
            let handle = bridge.materialize(buffer)?;
            let outcome = engine.play(handle)?;
            log::info!("[Board] Playing {:?} ({:?})", key, outcome.channel());
            Ok(outcome)
        })
        .await?
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::ChannelState;
    use crate::error::{CapabilityUnavailable, PlaybackError};
    use crate::test_util::wav_payload;
    use parking_lot::Mutex;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct SilentBackend;

    impl AudioBackend for SilentBackend {
        fn start(&self, _voice: Voice, _source: &Path) -> Result<(), PlaybackError> {
            Ok(())
        }
        fn stop(&self, _voice: Voice) -> Result<(), PlaybackError> {
            Ok(())
        }
        fn stop_all(&self) -> Result<(), PlaybackError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingHaptics {
        pulses: AtomicUsize,
        last: Mutex<Option<Duration>>,
    }

    impl Haptics for CountingHaptics {
        fn vibrate(&self, duration: Duration) -> Result<(), CapabilityUnavailable> {
            self.pulses.fetch_add(1, Ordering::SeqCst);
            *self.last.lock() = Some(duration);
            Ok(())
        }
    }

    fn board(dir: &Path, haptics: Arc<dyn Haptics>, enabled: bool) -> Soundboard {
        let catalog = AssetCatalog::from_entries([
            ("Ouch.wav".to_string(), wav_payload()),
            ("Broken.wav".to_string(), "not-valid-base64!!".to_string()),
        ]);
        let mut settings = BoardSettings::default();
        settings.backing.directory = Some(dir.to_path_buf());
        settings.haptics.enabled = enabled;
        Soundboard::new(Arc::new(catalog), settings, Arc::new(SilentBackend), haptics)
    }

    #[tokio::test]
    async fn test_activate_plays_on_first_channel_with_haptic_pulse() {
        let dir = tempfile::tempdir().unwrap();
        let haptics = Arc::new(CountingHaptics::default());
        let board = board(dir.path(), haptics.clone(), true);

        let outcome = board.activate("Ouch.wav").await.unwrap();

        assert_eq!(outcome.channel(), Some(0));
        assert_eq!(board.engine().channel_states()[0], ChannelState::Playing);
        assert_eq!(haptics.pulses.load(Ordering::SeqCst), 1);
        assert_eq!(*haptics.last.lock(), Some(Duration::from_millis(40)));
    }

    #[tokio::test]
    async fn test_disabled_haptics_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let haptics = Arc::new(CountingHaptics::default());
        let board = board(dir.path(), haptics.clone(), false);

        board.activate("Ouch.wav").await.unwrap();
        assert_eq!(haptics.pulses.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_haptics_do_not_block_playback() {
        let dir = tempfile::tempdir().unwrap();
        let board = board(dir.path(), Arc::new(crate::haptics::NoHaptics), true);
        assert!(board.activate("Ouch.wav").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_clips_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let board = board(dir.path(), Arc::new(CountingHaptics::default()), true);

        assert!(matches!(
            board.activate("Nope.wav").await,
            Err(SoundboardError::UnknownAsset(_))
        ));
        assert!(matches!(
            board.activate("Broken.wav").await,
            Err(SoundboardError::Decode(_))
        ));
        assert_eq!(board.engine().idle_channels(), board.engine().capacity());
    }

    #[tokio::test]
    async fn test_query_filters_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let board = board(dir.path(), Arc::new(CountingHaptics::default()), true);

        assert_eq!(board.view().entries.len(), 2);
        let view = board.set_query("OUCH");
        assert_eq!(view.entries.len(), 1);
        assert_eq!(view.entries[0].label, "Ouch");
    }
}
