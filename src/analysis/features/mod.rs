// FeatureExtractor - acoustic feature extraction for humanity scoring
//
// This module extracts the features the confidence scorer uses to judge
// whether a short recording is a natural human utterance rather than
// synthetic, replayed or silent input.
//
// Module organization:
// - types: Data structures (FeatureSet)
// - temporal: Windowed energy, noise band, silence/breath, ZCR
// - spectral: Spectral centroid (index proxy or FFT)
// - fft: Magnitude spectrum for the FFT centroid
// - waveform: Fixed-length envelope digest
// - mod.rs: Coordinator (FeatureExtractor)
//
// Features extracted:
// 1. Background noise: ambient band occupancy in the first 100ms
// 2. Silence ratio / breath sounds: share of quiet 20ms windows
// 3. Speech variability: spread of 20ms window energies
// 4. Energy distribution: normalized dynamic range
// 5. Average energy: mean absolute amplitude
// 6. Spectral centroid
// 7. Zero-crossing rate
// 8. Waveform digest

mod fft;
mod spectral;
mod temporal;
mod types;
pub mod waveform;

pub use temporal::SilenceAnalysis;
pub use types::FeatureSet;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use spectral::SpectralFeatures;
use temporal::TemporalFeatures;

/// FeatureExtractor coordinates the feature extraction pipeline
///
/// Holds no state across calls; one extractor may serve any number of
/// recordings at the same sample rate.
pub struct FeatureExtractor {
    sample_rate: u32,
    temporal_features: TemporalFeatures,
    spectral_features: SpectralFeatures,
    config: AnalysisConfig,
}

impl FeatureExtractor {
    /// Create a new FeatureExtractor with default calibration
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz (e.g., 48000)
    pub fn new(sample_rate: u32) -> Self {
        Self::with_config(sample_rate, AnalysisConfig::default())
    }

    pub fn with_config(sample_rate: u32, config: AnalysisConfig) -> Self {
        Self {
            sample_rate,
            temporal_features: TemporalFeatures::new(sample_rate, config.clone()),
            spectral_features: SpectralFeatures::new(sample_rate, config.centroid_method),
            config,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Extract all features with the configured waveform length
    pub fn extract(&self, audio: &[f32]) -> Result<FeatureSet, AnalysisError> {
        self.extract_with_points(audio, self.config.waveform_points)
    }

    /// Extract all features from a complete recording
    ///
    /// # Arguments
    /// * `audio` - Mono samples in [-1.0, 1.0]
    /// * `waveform_points` - Length of the waveform digest
    ///
    /// # Errors
    /// Rejects an empty buffer, a sample rate too low to form an energy
    /// window, and a zero-length digest.
    pub fn extract_with_points(
        &self,
        audio: &[f32],
        waveform_points: usize,
    ) -> Result<FeatureSet, AnalysisError> {
        if audio.is_empty() {
            return Err(AnalysisError::EmptyBuffer);
        }
        if self.temporal_features.window_size() == 0 {
            return Err(AnalysisError::InvalidSampleRate {
                sample_rate: self.sample_rate,
            });
        }
        if waveform_points == 0 {
            return Err(AnalysisError::InvalidWaveformPoints {
                points: waveform_points,
            });
        }

        let silence = self.temporal_features.analyze_silence(audio);

        let features = FeatureSet {
            duration: audio.len() as f64 / self.sample_rate as f64,
            has_background_noise: self.temporal_features.detect_background_noise(audio),
            has_breath_sounds: silence.has_breaths,
            speech_variability: self.temporal_features.compute_variability(audio),
            energy_distribution: self.temporal_features.compute_energy_distribution(audio),
            silence_ratio: silence.silence_ratio,
            spectral_centroid: self.spectral_features.compute_centroid(audio),
            zero_crossing_rate: self.temporal_features.compute_zcr(audio),
            average_energy: self.temporal_features.compute_average_energy(audio),
            waveform: waveform::digest(audio, waveform_points, self.config.waveform_scale),
        };

        log::debug!(
            "[Features] duration={:.3}s silence={:.3} variability={:.2} centroid={:.1}Hz zcr={:.4}",
            features.duration,
            features.silence_ratio,
            features.speech_variability,
            features.spectral_centroid,
            features.zero_crossing_rate
        );

        Ok(features)
    }
}

/// Extract features with default calibration
pub fn extract_features(
    audio: &[f32],
    sample_rate: u32,
    waveform_points: usize,
) -> Result<FeatureSet, AnalysisError> {
    FeatureExtractor::new(sample_rate).extract_with_points(audio, waveform_points)
}

#[cfg(test)]
mod tests;
