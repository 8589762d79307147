// Whole-clip sample rate conversion by linear interpolation
// Clips are short and resampled once before they reach the mixer

/// Resample interleaved `input` from `from_rate` to `to_rate`.
pub fn resample(input: &[f32], channels: usize, from_rate: u32, to_rate: u32) -> Vec<f32> {
    if channels == 0 || input.is_empty() || from_rate == 0 || to_rate == 0 {
        return Vec::new();
    }
    if from_rate == to_rate {
        return input.to_vec();
    }

    let input_frames = input.len() / channels;
    let step = from_rate as f64 / to_rate as f64; // input frames per output frame
    let output_frames =
        ((input_frames as u64 * to_rate as u64).div_ceil(from_rate as u64)) as usize;

    let mut output = Vec::with_capacity(output_frames * channels);
    for n in 0..output_frames {
        let pos = n as f64 * step;
        // Rounding can push the last position onto the frame past the end
        let idx = (pos as usize).min(input_frames - 1);
        let frac = (pos - idx as f64) as f32;
        let next = (idx + 1).min(input_frames - 1);

        for c in 0..channels {
            let a = input[idx * channels + c];
            let b = input[next * channels + c];
            output.push(a + (b - a) * frac);
        }
    }
    output
}
