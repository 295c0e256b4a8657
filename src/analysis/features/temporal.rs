// Temporal module - Time-domain feature extraction
//
// Everything here works directly on the sample buffer: ambient noise in the
// opening span, windowed RMS silence analysis, window energy variability,
// dynamic range, mean level and zero-crossing rate.
//
// Window energies divide by the nominal window length even for the trailing
// partial window, so a short tail reads quieter than it is. Scores were
// calibrated with this behavior.

use crate::config::AnalysisConfig;

/// Result of windowed silence analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SilenceAnalysis {
    /// Fraction of windows whose RMS falls below the silence floor
    pub silence_ratio: f64,
    /// Silence ratio lies strictly inside the breath band
    pub has_breaths: bool,
}

/// Temporal feature computation functions
pub struct TemporalFeatures {
    sample_rate: u32,
    config: AnalysisConfig,
}

impl TemporalFeatures {
    /// Create a new temporal features processor
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `config` - Thresholds and window lengths
    pub fn new(sample_rate: u32, config: AnalysisConfig) -> Self {
        Self {
            sample_rate,
            config,
        }
    }

    /// Samples per energy window (20ms by default), truncated
    pub fn window_size(&self) -> usize {
        (self.sample_rate as f64 * self.config.energy_window_secs).floor() as usize
    }

    /// Detect ambient background noise in the opening span
    ///
    /// Counts samples whose absolute amplitude lies in the open band
    /// (noise_floor, noise_ceiling) within the first `noise_window_secs`.
    /// Samples are widened to f64 before the comparison.
    pub fn detect_background_noise(&self, audio: &[f32]) -> bool {
        let span = (self.sample_rate as f64 * self.config.noise_window_secs).ceil() as usize;
        let floor = self.config.noise_floor;
        let ceiling = self.config.noise_ceiling;

        let in_band = audio
            .iter()
            .take(span)
            .filter(|&&x| {
                let amplitude = x.abs() as f64;
                amplitude > floor && amplitude < ceiling
            })
            .count();

        in_band > self.config.noise_min_count
    }

    /// Partition into energy windows and measure the share of silent ones
    ///
    /// A window is silent when `sqrt(Σx² / window_size)` is below the
    /// configured RMS threshold.
    pub fn analyze_silence(&self, audio: &[f32]) -> SilenceAnalysis {
        let window_size = self.window_size();
        if window_size == 0 || audio.is_empty() {
            return SilenceAnalysis {
                silence_ratio: 0.0,
                has_breaths: false,
            };
        }

        let mut total_windows = 0usize;
        let mut silent_windows = 0usize;
        for window in audio.chunks(window_size) {
            let energy: f64 = window.iter().map(|&x| (x as f64) * (x as f64)).sum();
            let rms = (energy / window_size as f64).sqrt();

            total_windows += 1;
            if rms < self.config.silence_rms_threshold {
                silent_windows += 1;
            }
        }

        let silence_ratio = silent_windows as f64 / total_windows as f64;
        let has_breaths = silence_ratio > self.config.breath_min_silence_ratio
            && silence_ratio < self.config.breath_max_silence_ratio;

        SilenceAnalysis {
            silence_ratio,
            has_breaths,
        }
    }

    /// Speech variability: population std-dev of window mean |x|, scaled
    pub fn compute_variability(&self, audio: &[f32]) -> f64 {
        let window_size = self.window_size();
        if window_size == 0 || audio.is_empty() {
            return 0.0;
        }

        let energies: Vec<f64> = audio
            .chunks(window_size)
            .map(|window| {
                let sum: f64 = window.iter().map(|&x| x.abs() as f64).sum();
                sum / window_size as f64
            })
            .collect();

        let count = energies.len() as f64;
        let mean = energies.iter().sum::<f64>() / count;
        let variance = energies.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / count;

        variance.sqrt() * self.config.variability_scale
    }

    /// Normalized dynamic range of absolute amplitude
    ///
    /// `(max - min) / (max + epsilon)`; the epsilon keeps an all-zero buffer
    /// at 0 instead of dividing by zero.
    pub fn compute_energy_distribution(&self, audio: &[f32]) -> f64 {
        let mut max_energy = 0.0f64;
        let mut min_energy = f64::INFINITY;

        for &x in audio {
            let energy = x.abs() as f64;
            if energy > max_energy {
                max_energy = energy;
            }
            if energy < min_energy {
                min_energy = energy;
            }
        }

        if min_energy.is_infinite() {
            min_energy = 0.0;
        }

        (max_energy - min_energy) / (max_energy + self.config.energy_epsilon)
    }

    /// Mean absolute amplitude
    pub fn compute_average_energy(&self, audio: &[f32]) -> f64 {
        if audio.is_empty() {
            return 0.0;
        }
        let total: f64 = audio.iter().map(|&x| x.abs() as f64).sum();
        total / audio.len() as f64
    }

    /// Compute zero-crossing rate (ZCR)
    ///
    /// Counts sign changes between adjacent samples, treating 0 as
    /// non-negative, normalized by the total sample count.
    pub fn compute_zcr(&self, audio: &[f32]) -> f64 {
        if audio.len() < 2 {
            return 0.0;
        }

        let crossings = audio
            .windows(2)
            .filter(|pair| (pair[1] >= 0.0) != (pair[0] >= 0.0))
            .count();

        crossings as f64 / audio.len() as f64
    }
}
