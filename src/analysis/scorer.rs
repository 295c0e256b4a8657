// Scorer - additive humanity rubric
//
// Each feature earns full credit inside its "natural speech" band and partial
// credit in a wider band. Rows are independent and additive; the sum is
// capped at `max_score`. There is no floor: a silent clip legitimately
// scores 0 on most rows.
//
// Band edges are fixed here; point values come from ScoringConfig.

use serde::{Deserialize, Serialize};

use crate::analysis::features::FeatureSet;
use crate::config::ScoringConfig;

/// Full credit for 0.5s..=5s (inclusive)
pub const DURATION_FULL_SECS: (f64, f64) = (0.5, 5.0);
/// Partial credit for 0.2s..10s (exclusive)
pub const DURATION_PARTIAL_SECS: (f64, f64) = (0.2, 10.0);
/// Silence ratio band rewarded by the breath and silence rows (exclusive)
pub const NATURAL_SILENCE_BAND: (f64, f64) = (0.02, 0.6);
/// Partial silence band (exclusive)
pub const PARTIAL_SILENCE_BAND: (f64, f64) = (0.0, 0.8);
/// Variability must exceed this for any credit
pub const VARIABILITY_MIN: f64 = 1.0;
/// Variability at or above this earns partial credit only
pub const VARIABILITY_HIGH: f64 = 100.0;
pub const ENERGY_DISTRIBUTION_FULL: f64 = 0.2;
pub const ENERGY_DISTRIBUTION_PARTIAL: f64 = 0.1;
/// Voice-range centroid band in Hz (exclusive)
pub const CENTROID_BAND_HZ: (f64, f64) = (200.0, 5_000.0);
/// Voice-like zero-crossing band (exclusive)
pub const ZCR_BAND: (f64, f64) = (0.01, 0.3);
pub const AVERAGE_ENERGY_MIN: f64 = 0.01;

fn within(value: f64, band: (f64, f64)) -> bool {
    value > band.0 && value < band.1
}

/// Points earned by each rubric row, before capping
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub duration: u32,
    pub background_noise: u32,
    pub breath: u32,
    pub variability: u32,
    pub energy_distribution: u32,
    pub silence: u32,
    pub spectral_centroid: u32,
    pub zero_crossing: u32,
    pub average_energy: u32,
}

impl ScoreBreakdown {
    /// Uncapped rubric sum
    pub fn raw_total(&self) -> u32 {
        self.duration
            + self.background_noise
            + self.breath
            + self.variability
            + self.energy_distribution
            + self.silence
            + self.spectral_centroid
            + self.zero_crossing
            + self.average_energy
    }
}

/// ConfidenceScorer applies the humanity rubric to a FeatureSet
pub struct ConfidenceScorer {
    config: ScoringConfig,
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ConfidenceScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a recording in [0, max_score]
    pub fn score(&self, features: &FeatureSet) -> u8 {
        let capped = self
            .breakdown(features)
            .raw_total()
            .min(self.config.max_score as u32);
        capped as u8
    }

    /// Evaluate every rubric row
    pub fn breakdown(&self, features: &FeatureSet) -> ScoreBreakdown {
        let c = &self.config;

        let duration = if features.duration >= DURATION_FULL_SECS.0
            && features.duration <= DURATION_FULL_SECS.1
        {
            c.duration_full
        } else if within(features.duration, DURATION_PARTIAL_SECS) {
            c.duration_partial
        } else {
            0
        };

        let background_noise = if features.has_background_noise {
            c.noise_present
        } else {
            c.noise_absent
        };

        let breath = if features.has_breath_sounds {
            c.breath_full
        } else if within(features.silence_ratio, NATURAL_SILENCE_BAND) {
            c.breath_partial
        } else {
            0
        };

        let variability = if features.speech_variability > VARIABILITY_MIN {
            if features.speech_variability < VARIABILITY_HIGH {
                c.variability_full
            } else {
                c.variability_partial
            }
        } else {
            0
        };

        let energy_distribution = if features.energy_distribution > ENERGY_DISTRIBUTION_FULL {
            c.energy_distribution_full
        } else if features.energy_distribution > ENERGY_DISTRIBUTION_PARTIAL {
            c.energy_distribution_partial
        } else {
            0
        };

        let silence = if within(features.silence_ratio, NATURAL_SILENCE_BAND) {
            c.silence_full
        } else if within(features.silence_ratio, PARTIAL_SILENCE_BAND) {
            c.silence_partial
        } else {
            0
        };

        let spectral_centroid = if within(features.spectral_centroid, CENTROID_BAND_HZ) {
            c.centroid_full
        } else if features.spectral_centroid > 0.0 {
            c.centroid_partial
        } else {
            0
        };

        let zero_crossing = if within(features.zero_crossing_rate, ZCR_BAND) {
            c.zero_crossing
        } else {
            0
        };

        let average_energy = if features.average_energy > AVERAGE_ENERGY_MIN {
            c.average_energy
        } else {
            0
        };

        ScoreBreakdown {
            duration,
            background_noise,
            breath,
            variability,
            energy_distribution,
            silence,
            spectral_centroid,
            zero_crossing,
            average_energy,
        }
    }
}

/// Score a FeatureSet with the default rubric
pub fn score_confidence(features: &FeatureSet) -> u8 {
    ConfidenceScorer::default().score(features)
}
