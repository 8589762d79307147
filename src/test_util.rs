// Shared fixtures for unit tests
use std::io::Cursor;

use crate::audio::decoder;

/// A mono 16-bit PCM WAV file in memory
pub fn wav_bytes(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// A short clip as it would appear in the clip table
pub fn wav_payload() -> String {
    decoder::encode(&wav_bytes(&[0, 1000, -1000, 0], 8000))
}
