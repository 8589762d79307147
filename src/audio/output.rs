// Audio output using cpal
// A mixer of active voices runs inside the output callback. New voices and
// stop requests reach it through a lock-free ring buffer.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, Stream, StreamConfig};
use parking_lot::Mutex;
use ringbuf::{HeapRb, traits::{Consumer, Producer, Split}};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;

use super::Voice;
use crate::error::PlaybackError;
use crate::settings::OutputSettings;

const COMMAND_QUEUE_SIZE: usize = 64;
const MAX_VOICES: usize = 32;

type CommandProducer = ringbuf::HeapProd<MixerCommand>;
type CommandConsumer = ringbuf::HeapCons<MixerCommand>;

/// Called from the audio thread when a voice has played to the end
pub type FinishedCallback = Box<dyn FnMut(Voice) + Send + 'static>;

/// Interleaved samples already at the device sample rate
#[derive(Debug, Clone)]
pub struct Clip {
    pub samples: Vec<f32>,
    pub channels: usize,
}

impl Clip {
    fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }
}

pub enum MixerCommand {
    Start { voice: Voice, clip: Clip },
    Stop(Voice),
    StopAll,
}

struct ActiveVoice {
    voice: Voice,
    clip: Clip,
    frame: usize,
}

impl ActiveVoice {
    fn finished(&self) -> bool {
        self.frame >= self.clip.frames()
    }

    // Mono clips feed every output channel; wider clips wrap around
    fn sample(&self, out_channel: usize) -> f32 {
        if self.finished() {
            return 0.0;
        }
        let ch = out_channel % self.clip.channels;
        self.clip.samples[self.frame * self.clip.channels + ch]
    }
}

/// Mixes active voices into an interleaved output buffer
pub struct Mixer {
    commands: CommandConsumer,
    voices: Vec<ActiveVoice>,
    out_channels: usize,
    on_finished: FinishedCallback,
}

impl Mixer {
    fn new(commands: CommandConsumer, out_channels: usize, on_finished: FinishedCallback) -> Self {
        Self {
            commands,
            voices: Vec::with_capacity(MAX_VOICES),
            out_channels: out_channels.max(1),
            on_finished,
        }
    }

    fn apply_commands(&mut self) {
        while let Some(command) = self.commands.try_pop() {
            match command {
                MixerCommand::Start { voice, clip } => {
                    if clip.frames() == 0 {
                        (self.on_finished)(voice);
                    } else {
                        self.voices.push(ActiveVoice { voice, clip, frame: 0 });
                    }
                }
                // Stopped voices are not reported as finished
                MixerCommand::Stop(voice) => self.voices.retain(|v| v.voice != voice),
                MixerCommand::StopAll => self.voices.clear(),
            }
        }
    }

    /// Fill `out` with the next block of mixed audio
    pub fn render(&mut self, out: &mut [f32], volume: f32) {
        self.apply_commands();

        for frame in out.chunks_mut(self.out_channels) {
            for (c, sample) in frame.iter_mut().enumerate() {
                let mixed: f32 = self.voices.iter().map(|v| v.sample(c)).sum();
                *sample = (mixed * volume).clamp(-1.0, 1.0);
            }
            for voice in self.voices.iter_mut() {
                voice.frame += 1;
            }
        }

        let on_finished = &mut self.on_finished;
        self.voices.retain(|v| {
            if v.finished() {
                on_finished(v.voice);
                false
            } else {
                true
            }
        });
    }

    /// The device is gone: report every voice, queued or playing, as
    /// finished so its channel is freed.
    pub fn abandon(&mut self) {
        self.apply_commands();
        for active in self.voices.drain(..) {
            (self.on_finished)(active.voice);
        }
    }

    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }
}

/// Control side of the mixer, usable from any thread
pub struct MixerHandle {
    producer: Mutex<CommandProducer>,
    volume: Arc<Mutex<f32>>,
    available: Arc<AtomicBool>,
    sample_rate: u32,
}

impl MixerHandle {
    pub fn send(&self, command: MixerCommand) -> Result<(), PlaybackError> {
        if !self.is_available() {
            return Err(PlaybackError::BackendUnavailable("output device lost".into()));
        }
        self.producer
            .lock()
            .try_push(command)
            .map_err(|_| PlaybackError::BackendUnavailable("mixer command queue is full".into()))
    }

    /// Get the output sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Set the output volume (0.0 to 1.0)
    pub fn set_volume(&self, vol: f32) {
        *self.volume.lock() = vol.clamp(0.0, 1.0);
    }

    pub fn volume(&self) -> f32 {
        *self.volume.lock()
    }

    /// False once the output stream has lost its device
    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }
}

/// Create a mixer and its control handle, for driving without a device
pub fn mixer_pair(
    sample_rate: u32,
    channels: u16,
    volume: f32,
    on_finished: FinishedCallback,
) -> (MixerHandle, Mixer) {
    let rb = HeapRb::<MixerCommand>::new(COMMAND_QUEUE_SIZE);
    let (producer, consumer) = rb.split();
    let handle = MixerHandle {
        producer: Mutex::new(producer),
        volume: Arc::new(Mutex::new(volume.clamp(0.0, 1.0))),
        available: Arc::new(AtomicBool::new(true)),
        sample_rate,
    };
    (handle, Mixer::new(consumer, channels as usize, on_finished))
}

/// Mixer state shared by the data and error callbacks of one stream
struct SharedMixer {
    mixer: Arc<Mutex<Mixer>>,
    volume: Arc<Mutex<f32>>,
    available: Arc<AtomicBool>,
}

/// A running output stream.
///
/// cpal streams cannot move between threads, so the stream lives on its own
/// thread until this value is dropped.
pub struct AudioOutput {
    mixer: MixerHandle,
    shutdown: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl AudioOutput {
    /// Open the default output device and start the stream
    pub fn start(
        settings: &OutputSettings,
        volume: f32,
        on_finished: FinishedCallback,
    ) -> Result<Self, PlaybackError> {
        let settings = settings.clone();
        let (ready_tx, ready_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let thread = std::thread::Builder::new()
            .name("soundboard-output".into())
            .spawn(move || {
                let stream = match Self::open_stream(&settings, volume, on_finished) {
                    Ok((stream, mixer)) => {
                        let _ = ready_tx.send(Ok(mixer));
                        stream
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                // Blocks until shutdown is requested or the sender is dropped
                let _ = shutdown_rx.recv();
                drop(stream);
                log::info!("[Output] Stream closed");
            })
            .map_err(|e| PlaybackError::BackendUnavailable(format!("Failed to spawn output thread: {}", e)))?;

        let mixer = ready_rx
            .recv()
            .map_err(|_| PlaybackError::BackendUnavailable("output thread exited".into()))??;

        Ok(Self {
            mixer,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    fn open_stream(
        settings: &OutputSettings,
        volume: f32,
        on_finished: FinishedCallback,
    ) -> Result<(Stream, MixerHandle), PlaybackError> {
        let host = cpal::default_host();

        let device = host
            .default_output_device()
            .ok_or_else(|| PlaybackError::BackendUnavailable("No output device available".into()))?;

        let config = device.default_output_config().map_err(|e| {
            PlaybackError::BackendUnavailable(format!("Failed to get default output config: {}", e))
        })?;

        let mut stream_config: StreamConfig = config.config();
        if let Some(rate) = settings.sample_rate {
            stream_config.sample_rate = SampleRate(rate);
        }
        if let Some(frames) = settings.buffer_frames {
            stream_config.buffer_size = BufferSize::Fixed(frames);
        }

        log::info!(
            "[Output] {} on {}: {} channels, {}Hz",
            host.id().name(),
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            stream_config.channels,
            stream_config.sample_rate.0
        );

        let (handle, mixer) = mixer_pair(
            stream_config.sample_rate.0,
            stream_config.channels,
            volume,
            on_finished,
        );
        let shared = SharedMixer {
            mixer: Arc::new(Mutex::new(mixer)),
            volume: Arc::clone(&handle.volume),
            available: Arc::clone(&handle.available),
        };

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => Self::build_stream::<f32>(&device, &stream_config, shared)?,
            cpal::SampleFormat::I16 => Self::build_stream::<i16>(&device, &stream_config, shared)?,
            cpal::SampleFormat::U16 => Self::build_stream::<u16>(&device, &stream_config, shared)?,
            format => {
                return Err(PlaybackError::BackendUnavailable(format!(
                    "Unsupported sample format: {:?}",
                    format
                )))
            }
        };

        stream
            .play()
            .map_err(|e| PlaybackError::BackendUnavailable(format!("Failed to start stream: {}", e)))?;

        Ok((stream, handle))
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &StreamConfig,
        shared: SharedMixer,
    ) -> Result<Stream, PlaybackError> {
        let SharedMixer {
            mixer,
            volume,
            available,
        } = shared;
        let error_mixer = Arc::clone(&mixer);
        let mut scratch: Vec<f32> = Vec::new();
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    scratch.resize(data.len(), 0.0);
                    let vol = *volume.lock();
                    mixer.lock().render(&mut scratch, vol);
                    for (out, &sample) in data.iter_mut().zip(scratch.iter()) {
                        *out = T::from_sample(sample);
                    }
                },
                move |err| {
                    log::error!("[Output] Stream error: {}", err);
                    // No more callbacks will come, so nothing would ever finish
                    if let cpal::StreamError::DeviceNotAvailable = err {
                        available.store(false, Ordering::Release);
                        error_mixer.lock().abandon();
                    }
                },
                None,
            )
            .map_err(|e| PlaybackError::BackendUnavailable(format!("Failed to build output stream: {}", e)))
    }

    pub fn mixer(&self) -> &MixerHandle {
        &self.mixer
    }
}

impl Drop for AudioOutput {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::HandleId;
    use std::sync::mpsc::Receiver;

    fn voice(channel: Option<usize>, handle: u64) -> Voice {
        Voice {
            channel,
            handle: HandleId::from_raw(handle),
        }
    }

    fn pair(channels: u16) -> (MixerHandle, Mixer, Receiver<Voice>) {
        let (tx, rx) = mpsc::channel();
        let (handle, mixer) = mixer_pair(48000, channels, 1.0, Box::new(move |v: Voice| {
            let _ = tx.send(v);
        }));
        (handle, mixer, rx)
    }

    #[test]
    fn test_mono_clip_feeds_every_output_channel() {
        let (handle, mut mixer, _rx) = pair(2);
        let clip = Clip { samples: vec![0.25, 0.5], channels: 1 };
        handle.send(MixerCommand::Start { voice: voice(Some(0), 0), clip }).unwrap();

        let mut out = [0.0f32; 4];
        mixer.render(&mut out, 1.0);
        assert_eq!(out, [0.25, 0.25, 0.5, 0.5]);
    }

    #[test]
    fn test_voices_sum_and_clamp() {
        let (handle, mut mixer, _rx) = pair(1);
        for id in 0..3 {
            let clip = Clip { samples: vec![0.5, 0.1], channels: 1 };
            handle.send(MixerCommand::Start { voice: voice(Some(id), id as u64), clip }).unwrap();
        }

        let mut out = [0.0f32; 2];
        mixer.render(&mut out, 1.0);
        assert_eq!(out[0], 1.0);
        assert!((out[1] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_finished_voice_is_reported_once() {
        let (handle, mut mixer, rx) = pair(1);
        let v = voice(None, 7);
        let clip = Clip { samples: vec![0.1, 0.2, 0.3], channels: 1 };
        handle.send(MixerCommand::Start { voice: v, clip }).unwrap();

        let mut out = [0.0f32; 2];
        mixer.render(&mut out, 1.0);
        assert!(rx.try_recv().is_err());
        assert_eq!(mixer.active_voices(), 1);

        mixer.render(&mut out, 1.0);
        assert_eq!(out, [0.3, 0.0]);
        assert_eq!(rx.try_recv().unwrap(), v);
        assert_eq!(mixer.active_voices(), 0);

        mixer.render(&mut out, 1.0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_stopped_voice_is_silent_and_unreported() {
        let (handle, mut mixer, rx) = pair(1);
        let v = voice(Some(3), 1);
        let clip = Clip { samples: vec![0.5; 16], channels: 1 };
        handle.send(MixerCommand::Start { voice: v, clip }).unwrap();
        handle.send(MixerCommand::Stop(v)).unwrap();

        let mut out = [1.0f32; 4];
        mixer.render(&mut out, 1.0);
        assert_eq!(out, [0.0; 4]);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_volume_scales_output() {
        let (handle, mut mixer, _rx) = pair(1);
        let clip = Clip { samples: vec![0.8], channels: 1 };
        handle.send(MixerCommand::Start { voice: voice(Some(0), 0), clip }).unwrap();

        let mut out = [0.0f32; 1];
        mixer.render(&mut out, 0.5);
        assert!((out[0] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_abandon_reports_playing_and_queued_voices() {
        let (handle, mut mixer, rx) = pair(1);
        let playing = voice(Some(0), 1);
        handle
            .send(MixerCommand::Start { voice: playing, clip: Clip { samples: vec![0.5; 64], channels: 1 } })
            .unwrap();
        let mut out = [0.0f32; 4];
        mixer.render(&mut out, 1.0);

        let queued = voice(None, 2);
        handle
            .send(MixerCommand::Start { voice: queued, clip: Clip { samples: vec![0.5; 64], channels: 1 } })
            .unwrap();
        mixer.abandon();

        let reported: Vec<Voice> = rx.try_iter().collect();
        assert_eq!(reported, [playing, queued]);
        assert_eq!(mixer.active_voices(), 0);
    }

    #[test]
    fn test_lost_device_refuses_new_voices() {
        let (handle, _mixer, _rx) = pair(1);
        handle.available.store(false, Ordering::Release);
        assert!(!handle.is_available());

        let clip = Clip { samples: vec![0.1], channels: 1 };
        let result = handle.send(MixerCommand::Start { voice: voice(Some(0), 0), clip });
        assert!(matches!(result, Err(PlaybackError::BackendUnavailable(_))));
    }

    #[test]
    fn test_set_volume_clamps() {
        let (handle, _mixer, _rx) = pair(2);
        handle.set_volume(3.0);
        assert_eq!(handle.volume(), 1.0);
        handle.set_volume(-1.0);
        assert_eq!(handle.volume(), 0.0);
    }
}
