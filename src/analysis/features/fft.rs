// FFT module - Fast Fourier Transform computation
//
// Only used by the FFT centroid method. The whole recording is transformed in
// one pass with a Hann window to reduce spectral leakage.

use rustfft::{num_complex::Complex, FftPlanner};

/// Compute the magnitude spectrum of a whole buffer
///
/// Applies a Hann window, performs a forward FFT of length `audio.len()` and
/// returns magnitudes for the non-negative frequencies (`len / 2 + 1` bins).
pub fn magnitude_spectrum(audio: &[f32]) -> Vec<f32> {
    let fft_size = audio.len();
    if fft_size == 0 {
        return Vec::new();
    }

    let denominator = (fft_size as f32 - 1.0).max(1.0);
    let mut buffer: Vec<Complex<f32>> = audio
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let window =
                0.5 * (1.0 - ((2.0 * std::f32::consts::PI * i as f32) / denominator).cos());
            Complex::new(sample * window, 0.0)
        })
        .collect();

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(fft_size);
    fft.process(&mut buffer);

    buffer[..fft_size / 2 + 1].iter().map(|c| c.norm()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spectrum_length() {
        assert_eq!(magnitude_spectrum(&vec![0.0; 1024]).len(), 513);
        assert_eq!(magnitude_spectrum(&vec![0.0; 1000]).len(), 501);
        assert!(magnitude_spectrum(&[]).is_empty());
    }

    #[test]
    fn test_sine_peak_bin() {
        let sample_rate = 16_000.0f32;
        let size = 1600;
        let audio: Vec<f32> = (0..size)
            .map(|i| (2.0 * std::f32::consts::PI * 1000.0 * i as f32 / sample_rate).sin())
            .collect();
        let spectrum = magnitude_spectrum(&audio);
        let (peak, _) = spectrum
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap();
        // bin width = 10 Hz
        assert_eq!(peak, 100);
    }
}
