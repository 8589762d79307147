// Clip decoding
// Transport decoding (base64 -> container bytes) and container decoding
// (container -> interleaved f32 PCM) using Symphonia

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use symphonia::core::audio::{AudioBufferRef, AudioPlanes, Signal};
use symphonia::core::codecs::{Decoder, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::Sample;
use std::fs::File;
use std::path::Path;

use crate::error::DecodeError;

/// Fully decoded container bytes (e.g. a whole WAV file) for one play request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBuffer {
    bytes: Vec<u8>,
}

impl DecodedBuffer {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File extension matching the container's magic bytes.
    /// Unrecognized data is assumed to be WAV.
    pub fn container(&self) -> &'static str {
        let b = &self.bytes;
        if b.len() >= 12 && &b[..4] == b"RIFF" && &b[8..12] == b"WAVE" {
            "wav"
        } else if b.starts_with(b"OggS") {
            "ogg"
        } else if b.starts_with(b"fLaC") {
            "flac"
        } else if b.starts_with(b"ID3") || (b.len() >= 2 && b[0] == 0xFF && b[1] & 0xE0 == 0xE0) {
            "mp3"
        } else {
            "wav"
        }
    }
}

/// Decode a transport-encoded payload. ASCII whitespace is ignored so the
/// clip table may be line-wrapped.
pub fn decode(payload: &str) -> Result<DecodedBuffer, DecodeError> {
    let compact: Vec<u8> = payload
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(compact).map_err(DecodeError)?;
    Ok(DecodedBuffer { bytes })
}

/// Inverse of [`decode`], used to produce clip table entries
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a backing file into interleaved f32 samples
pub struct PcmDecoder {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    sample_rate: u32,
    channels: usize,
}

impl PcmDecoder {
    /// Open an audio file and prepare for decoding
    pub fn open(path: &Path) -> Result<Self, SymphoniaError> {
        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;
        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or(SymphoniaError::Unsupported("no audio track"))?;

        let track_id = track.id;
        let sample_rate = track
            .codec_params
            .sample_rate
            .ok_or(SymphoniaError::Unsupported("unknown sample rate"))?;
        let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);

        let decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())?;

        Ok(Self {
            format,
            decoder,
            track_id,
            sample_rate,
            channels,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Decode the whole stream. Clips are short, so this is done eagerly.
    pub fn decode_all(&mut self) -> Result<Vec<f32>, SymphoniaError> {
        let mut samples = Vec::new();
        while let Some(chunk) = self.decode_next()? {
            samples.extend_from_slice(&chunk);
        }
        Ok(samples)
    }

    /// Decode next packet, returns interleaved f32 samples
    /// Returns None when end of stream is reached
    pub fn decode_next(&mut self) -> Result<Option<Vec<f32>>, SymphoniaError> {
        loop {
            let packet = match self.format.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None);
                }
                Err(SymphoniaError::ResetRequired) => {
                    self.decoder.reset();
                    continue;
                }
                Err(e) => return Err(e),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            match self.decoder.decode(&packet) {
                Ok(decoded) => return Ok(Some(Self::audio_buf_to_f32(&decoded))),
                Err(SymphoniaError::DecodeError(e)) => {
                    log::warn!("[Decoder] Skipping corrupt packet: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Convert any AudioBufferRef to interleaved f32 samples
    fn audio_buf_to_f32(buf: &AudioBufferRef) -> Vec<f32> {
        match buf {
            AudioBufferRef::F32(b) => Self::interleave(b.planes(), b.frames(), |s: f32| s),
            AudioBufferRef::F64(b) => Self::interleave(b.planes(), b.frames(), |s: f64| s as f32),
            AudioBufferRef::S8(b) => {
                Self::interleave(b.planes(), b.frames(), |s: i8| s as f32 / 128.0)
            }
            AudioBufferRef::S16(b) => {
                Self::interleave(b.planes(), b.frames(), |s: i16| s as f32 / 32768.0)
            }
            AudioBufferRef::S24(b) => {
                Self::interleave(b.planes(), b.frames(), |s| s.inner() as f32 / 8388608.0)
            }
            AudioBufferRef::S32(b) => {
                Self::interleave(b.planes(), b.frames(), |s: i32| s as f32 / 2147483648.0)
            }
            AudioBufferRef::U8(b) => {
                Self::interleave(b.planes(), b.frames(), |s: u8| (s as f32 - 128.0) / 128.0)
            }
            AudioBufferRef::U16(b) => {
                Self::interleave(b.planes(), b.frames(), |s: u16| (s as f32 - 32768.0) / 32768.0)
            }
            AudioBufferRef::U24(b) => Self::interleave(b.planes(), b.frames(), |s| {
                (s.inner() as f32 - 8388608.0) / 8388608.0
            }),
            AudioBufferRef::U32(b) => Self::interleave(b.planes(), b.frames(), |s: u32| {
                (s as f64 - 2147483648.0) as f32 / 2147483648.0
            }),
        }
    }

    fn interleave<T: Sample + Copy, F: Fn(T) -> f32>(
        planes: AudioPlanes<T>,
        frames: usize,
        convert: F,
    ) -> Vec<f32> {
        let planes = planes.planes();
        if planes.is_empty() || frames == 0 {
            return vec![];
        }

        let mut interleaved = Vec::with_capacity(frames * planes.len());
        for frame in 0..frames {
            for plane in planes {
                interleaved.push(convert(plane[frame]));
            }
        }
        interleaved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::wav_bytes;

    #[test]
    fn test_round_trip_arbitrary_bytes() {
        let inputs: [&[u8]; 4] = [b"", b"\x00", b"\xff\xfe\x00\x01\x80", &[7u8; 1000]];
        for bytes in inputs {
            assert_eq!(decode(&encode(bytes)).unwrap().bytes(), bytes);
        }
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let encoded = encode(b"hello soundboard");
        let wrapped = format!("{}\n  {}\r\n", &encoded[..8], &encoded[8..]);
        assert_eq!(decode(&wrapped).unwrap().bytes(), b"hello soundboard");
    }

    #[test]
    fn test_invalid_payload_is_an_error() {
        assert!(decode("not-valid-base64!!").is_err());
        assert!(decode("abc").is_err());
    }

    #[test]
    fn test_container_sniffing() {
        let wav = decode(&encode(&wav_bytes(&[0, 1, 2], 8000))).unwrap();
        assert_eq!(wav.container(), "wav");
        assert_eq!(decode(&encode(b"OggS....")).unwrap().container(), "ogg");
        assert_eq!(decode(&encode(b"fLaC....")).unwrap().container(), "flac");
        assert_eq!(decode(&encode(b"ID3.....")).unwrap().container(), "mp3");
        assert_eq!(decode(&encode(b"junk")).unwrap().container(), "wav");
    }

    #[test]
    fn test_pcm_decoder_reads_wav_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, wav_bytes(&[0, 16384, -16384, 32767], 22050)).unwrap();

        let mut decoder = PcmDecoder::open(&path).unwrap();
        assert_eq!(decoder.sample_rate(), 22050);
        assert_eq!(decoder.channels(), 1);

        let samples = decoder.decode_all().unwrap();
        assert_eq!(samples.len(), 4);
        assert!((samples[1] - 0.5).abs() < 1e-3);
        assert!((samples[2] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_pcm_decoder_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.wav");
        std::fs::write(&path, b"definitely not a wav file").unwrap();
        assert!(PcmDecoder::open(&path).is_err());
    }
}
