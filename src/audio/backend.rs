// Audio backend seam
// The engine talks to the platform through this trait; CpalBackend is the
// desktop implementation. Completion is reported asynchronously.

use std::path::Path;

use tokio::sync::mpsc::UnboundedSender;

use super::decoder::PcmDecoder;
use super::output::{AudioOutput, Clip, MixerCommand};
use super::resample::resample;
use super::Voice;
use crate::error::PlaybackError;
use crate::settings::OutputSettings;

/// Where a backend reports voices that played to the end
pub type CompletionSender = UnboundedSender<Voice>;

pub trait AudioBackend: Send + Sync {
    /// Open `source` and start playing it as `voice`.
    /// Must fail rather than return Ok when nothing will be heard.
    fn start(&self, voice: Voice, source: &Path) -> Result<(), PlaybackError>;

    /// Silence `voice`. A stopped voice is not reported as completed.
    fn stop(&self, voice: Voice) -> Result<(), PlaybackError>;

    /// Silence everything
    fn stop_all(&self) -> Result<(), PlaybackError>;
}

/// Plays clips through the default output device.
///
/// Created with [`CpalBackend::init`]; dropping it closes the stream.
pub struct CpalBackend {
    output: AudioOutput,
}

impl CpalBackend {
    pub fn init(
        settings: &OutputSettings,
        volume: f32,
        completions: CompletionSender,
    ) -> Result<Self, PlaybackError> {
        let output = AudioOutput::start(
            settings,
            volume,
            Box::new(move |voice: Voice| {
                // Receiver gone means the engine is shutting down
                let _ = completions.send(voice);
            }),
        )?;
        Ok(Self { output })
    }

}

/// Decode the backing file at `source` into a clip at `target_rate`.
/// Anything symphonia cannot read as audio is rejected.
pub fn load_clip(source: &Path, target_rate: u32) -> Result<Clip, PlaybackError> {
    let rejected = |reason: String| PlaybackError::Rejected {
        path: source.to_path_buf(),
        reason,
    };

    let mut decoder = PcmDecoder::open(source).map_err(|e| rejected(e.to_string()))?;
    let samples = decoder.decode_all().map_err(|e| rejected(e.to_string()))?;
    let channels = decoder.channels();
    if channels == 0 || samples.is_empty() {
        return Err(rejected("clip contains no audio".into()));
    }

    let samples = resample(&samples, channels, decoder.sample_rate(), target_rate);
    Ok(Clip { samples, channels })
}

impl AudioBackend for CpalBackend {
    fn start(&self, voice: Voice, source: &Path) -> Result<(), PlaybackError> {
        let mixer = self.output.mixer();
        if !mixer.is_available() {
            return Err(PlaybackError::BackendUnavailable("output device lost".into()));
        }
        let clip = load_clip(source, mixer.sample_rate())?;
        log::debug!(
            "[Backend] Starting {} ({} frames) on {:?}",
            voice.handle,
            clip.samples.len() / clip.channels,
            voice.channel
        );
        self.output.mixer().send(MixerCommand::Start { voice, clip })
    }

    fn stop(&self, voice: Voice) -> Result<(), PlaybackError> {
        self.output.mixer().send(MixerCommand::Stop(voice))
    }

    fn stop_all(&self) -> Result<(), PlaybackError> {
        self.output.mixer().send(MixerCommand::StopAll)
    }
}

/// Stands in when no audio device could be opened. The board stays up and
/// every press fails with the reason the device was unavailable.
pub struct UnavailableBackend {
    reason: String,
}

impl UnavailableBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl AudioBackend for UnavailableBackend {
    fn start(&self, _voice: Voice, _source: &Path) -> Result<(), PlaybackError> {
        Err(PlaybackError::BackendUnavailable(self.reason.clone()))
    }

    // Nothing is ever playing
    fn stop(&self, _voice: Voice) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn stop_all(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HandleId;
    use crate::test_util::wav_bytes;
    use std::io::Write;

    fn clip_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_garbage_is_rejected() {
        let file = clip_file(b"definitely not a wav file, just text");
        let err = load_clip(file.path(), 48000).unwrap_err();
        match err {
            PlaybackError::Rejected { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_clip_is_resampled_to_device_rate() {
        let file = clip_file(&wav_bytes(&[1000; 80], 8000));
        let clip = load_clip(file.path(), 48000).unwrap();
        assert_eq!(clip.channels, 1);
        assert_eq!(clip.samples.len(), 480);
    }

    #[test]
    fn test_uneven_rate_ratio_loads() {
        let file = clip_file(&wav_bytes(&[1000; 21], 4200));
        let clip = load_clip(file.path(), 48000).unwrap();
        assert_eq!(clip.samples.len(), 240);
    }

    #[test]
    fn test_matching_rate_is_untouched() {
        let file = clip_file(&wav_bytes(&[0, 16384, -16384], 22050));
        let clip = load_clip(file.path(), 22050).unwrap();
        assert_eq!(clip.samples.len(), 3);
        assert!((clip.samples[1] - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_unavailable_backend_fails_every_start() {
        let backend = UnavailableBackend::new("No output device available");
        let voice = Voice {
            channel: Some(0),
            handle: HandleId::from_raw(0),
        };
        let err = backend.start(voice, Path::new("clip.wav")).unwrap_err();
        assert!(matches!(err, PlaybackError::BackendUnavailable(ref r) if r == "No output device available"));
        assert!(backend.stop(voice).is_ok());
        assert!(backend.stop_all().is_ok());
    }
}
