// Types module - Data structures for voice features
//
// This module defines the feature record produced once per recording and
// consumed once by the confidence scorer.

use serde::{Deserialize, Serialize};

/// Acoustic features extracted from one mono recording
///
/// Ratio fields are in [0, 1]. `waveform` has exactly the number of points
/// requested from the extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Recording length in seconds (samples / sample rate)
    pub duration: f64,

    /// Ambient room noise detected in the first 100ms
    ///
    /// Real rooms hum at a low but non-zero level; digital silence and
    /// loud clipped openings both fail the band test.
    pub has_background_noise: bool,

    /// Natural pauses present (silence ratio strictly inside the breath band)
    pub has_breath_sounds: bool,

    /// Scaled standard deviation of 20ms window energies (>= 0)
    pub speech_variability: f64,

    /// (peak - trough) / (peak + epsilon) of absolute amplitude, in [0, 1]
    pub energy_distribution: f64,

    /// Fraction of 20ms windows below the RMS silence floor, in [0, 1]
    pub silence_ratio: f64,

    /// Spectral centroid in Hz (see `CentroidMethod`)
    pub spectral_centroid: f64,

    /// Sign changes per sample, in [0, 1]
    pub zero_crossing_rate: f64,

    /// Mean absolute amplitude
    pub average_energy: f64,

    /// Amplitude envelope digest for on-chain storage and display
    ///
    /// Values are not clamped here; the mint payload clamps to u16.
    pub waveform: Vec<u32>,
}
