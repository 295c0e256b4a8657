//! Configuration management for analysis, scoring and mint policy
//!
//! Every calibration constant of the humanity pipeline lives here as a named
//! field whose default reproduces the deployed behavior. The values can be
//! overridden from a JSON file for experimentation without recompiling;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub scoring: ScoringConfig,
    pub policy: PolicyConfig,
    pub codec: CodecConfig,
}

/// How the spectral centroid feature is computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentroidMethod {
    /// Amplitude-weighted sample index mapped onto [0, rate/2]
    #[default]
    IndexProxy,
    /// Magnitude-weighted FFT bin frequency. Changes score distributions;
    /// the rubric thresholds were calibrated against `IndexProxy`.
    Fft,
}

/// Feature extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Leading span inspected for ambient room noise
    pub noise_window_secs: f64,
    /// Exclusive lower bound of the ambient noise amplitude band
    pub noise_floor: f64,
    /// Exclusive upper bound of the ambient noise amplitude band
    pub noise_ceiling: f64,
    /// Noise is present when more samples than this fall in the band
    pub noise_min_count: usize,
    /// Window length for silence and variability analysis
    pub energy_window_secs: f64,
    /// Windows with RMS below this are silent
    pub silence_rms_threshold: f64,
    /// Breath sounds need a silence ratio strictly inside (min, max)
    pub breath_min_silence_ratio: f64,
    pub breath_max_silence_ratio: f64,
    /// Multiplier applied to the std-dev of window energies
    pub variability_scale: f64,
    /// Added to the peak in the energy-distribution denominator
    pub energy_epsilon: f64,
    /// Default waveform digest length
    pub waveform_points: usize,
    /// Multiplier applied to block mean amplitude in the digest
    pub waveform_scale: f64,
    pub centroid_method: CentroidMethod,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            noise_window_secs: 0.1,
            noise_floor: 0.001,
            noise_ceiling: 0.05,
            noise_min_count: 20,
            energy_window_secs: 0.02,
            silence_rms_threshold: 0.008,
            breath_min_silence_ratio: 0.02,
            breath_max_silence_ratio: 0.6,
            variability_scale: 1000.0,
            energy_epsilon: 0.001,
            waveform_points: 50,
            waveform_scale: 1000.0,
            centroid_method: CentroidMethod::IndexProxy,
        }
    }
}

/// Points awarded by each rubric row
///
/// Band thresholds are fixed in `analysis::scorer`; only the credit values
/// are tunable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub duration_full: u32,
    pub duration_partial: u32,
    pub noise_present: u32,
    pub noise_absent: u32,
    pub breath_full: u32,
    pub breath_partial: u32,
    pub variability_full: u32,
    pub variability_partial: u32,
    pub energy_distribution_full: u32,
    pub energy_distribution_partial: u32,
    pub silence_full: u32,
    pub silence_partial: u32,
    pub centroid_full: u32,
    pub centroid_partial: u32,
    pub zero_crossing: u32,
    pub average_energy: u32,
    /// Hard cap applied to the rubric sum
    pub max_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            duration_full: 25,
            duration_partial: 15,
            noise_present: 15,
            noise_absent: 5,
            breath_full: 20,
            breath_partial: 10,
            variability_full: 20,
            variability_partial: 10,
            energy_distribution_full: 15,
            energy_distribution_partial: 8,
            silence_full: 10,
            silence_partial: 5,
            centroid_full: 10,
            centroid_partial: 5,
            zero_crossing: 10,
            average_energy: 5,
            max_score: 100,
        }
    }
}

/// Caller-side acceptance thresholds applied before minting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub max_silence_ratio: f64,
    pub min_average_energy: f64,
    /// Minimum `duration * (1 - silence_ratio)`
    pub min_speech_secs: f64,
    pub min_humanity_score: u8,
    /// On-chain storage ceiling shared with the contract
    pub max_payload_bytes: usize,
    /// Cross-check a transcript against the assigned word when one is available
    pub verify_word: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_silence_ratio: 0.7,
            min_average_energy: 0.005,
            min_speech_secs: 0.3,
            min_humanity_score: 60,
            max_payload_bytes: 20_480,
            verify_word: true,
        }
    }
}

/// On-chain encoding and capture parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Sample rate of the PCM stored on chain
    pub target_sample_rate: u32,
    /// Capture hint for callers owning the microphone: auto-stop after this long
    pub max_recording_secs: f64,
    /// Capture hint: encoder bitrate requested from the recorder
    pub recording_bitrate: u32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: 16_000,
            max_recording_secs: 3.0,
            recording_bitrate: 16_000,
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// Falls back to defaults (with a warning) when the file is missing or
    /// does not parse.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from the conventional asset location
    pub fn load() -> Self {
        Self::load_from_file("assets/voice_config.json")
    }
}
