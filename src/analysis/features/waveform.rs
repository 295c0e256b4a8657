// Waveform module - fixed-length amplitude envelope digest

/// Reduce a buffer to `points` block-mean amplitudes scaled to integers
///
/// Block size is `len / points` (truncated); the trailing remainder is not
/// visited. Each point is `floor(mean |x| × scale)`. When the buffer is
/// shorter than `points` every block is empty and every point is 0.
pub fn digest(audio: &[f32], points: usize, scale: f64) -> Vec<u32> {
    if points == 0 {
        return Vec::new();
    }

    let block_size = audio.len() / points;
    if block_size == 0 {
        return vec![0; points];
    }

    (0..points)
        .map(|i| {
            let start = i * block_size;
            let sum: f64 = (start..start + block_size)
                .map(|idx| audio.get(idx).map_or(0.0, |x| x.abs() as f64))
                .sum();
            ((sum / block_size as f64) * scale).floor() as u32
        })
        .collect()
}
