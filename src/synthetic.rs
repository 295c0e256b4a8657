//! Deterministic synthetic recordings for fixtures and diagnostics.
//!
//! The CLI and the test suites need recordings with known properties without
//! touching a microphone. Every generator here is deterministic: noise comes
//! from a seeded `StdRng`, so the same spec always yields the same samples.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::str::FromStr;

/// Seed used when a spec does not name one.
pub const DEFAULT_SEED: u64 = 0x5A5A_FFF0;

/// Supported deterministic recording patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntheticPattern {
    /// Digital silence
    Silence,
    /// Steady sine tone
    Sine,
    /// Uniform white noise
    WhiteNoise,
    /// Single loud burst padded with near-silence
    Burst,
    /// Room noise, a pitch-gliding voiced syllable, room noise
    SpeechLike,
}

impl FromStr for SyntheticPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "silence" => Ok(Self::Silence),
            "sine" => Ok(Self::Sine),
            "white_noise" | "noise" => Ok(Self::WhiteNoise),
            "burst" => Ok(Self::Burst),
            "speech" | "speech_like" => Ok(Self::SpeechLike),
            other => Err(format!("unknown synthetic pattern '{other}'")),
        }
    }
}

/// Declarative description of a synthetic recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSpec {
    pub pattern: SyntheticPattern,
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl SyntheticSpec {
    pub fn new(pattern: SyntheticPattern) -> Self {
        Self {
            pattern,
            sample_rate: default_sample_rate(),
            duration_secs: default_duration_secs(),
            amplitude: default_amplitude(),
            seed: default_seed(),
        }
    }

    pub fn with_duration(mut self, duration_secs: f32) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Render the spec to mono samples.
    pub fn render(&self) -> Vec<f32> {
        let len = (self.sample_rate as f32 * self.duration_secs).round() as usize;
        match self.pattern {
            SyntheticPattern::Silence => vec![0.0; len],
            SyntheticPattern::Sine => sine(self.sample_rate, 220.0, self.amplitude, len),
            SyntheticPattern::WhiteNoise => white_noise(self.seed, self.amplitude, len),
            SyntheticPattern::Burst => {
                let burst_len = (self.sample_rate as f32 * 0.2) as usize;
                let start = len.saturating_sub(burst_len) * 2 / 5;
                burst(len, start, burst_len, self.amplitude, 0.0)
            }
            SyntheticPattern::SpeechLike => {
                speech_like(self.sample_rate, len, self.amplitude, self.seed)
            }
        }
    }
}

fn default_sample_rate() -> u32 {
    16_000
}

fn default_duration_secs() -> f32 {
    0.6
}

fn default_amplitude() -> f32 {
    0.3
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Steady sine tone.
pub fn sine(sample_rate: u32, frequency_hz: f32, amplitude: f32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * frequency_hz * i as f32 / sample_rate as f32).sin())
        .collect()
}

/// Uniform noise in (-amplitude, amplitude).
pub fn white_noise(seed: u64, amplitude: f32, len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(-amplitude..amplitude))
        .collect()
}

/// Constant-level burst of `burst_len` samples at `start`, padded with `pad`.
pub fn burst(len: usize, start: usize, burst_len: usize, amplitude: f32, pad: f32) -> Vec<f32> {
    (0..len)
        .map(|i| {
            if i >= start && i < start + burst_len {
                amplitude
            } else {
                pad
            }
        })
        .collect()
}

/// Room noise framing one voiced syllable.
///
/// The first and last sixth of the clip carry only uniform noise at ±0.01
/// (inside the ambient band, below the silence floor). The middle carries a
/// 180→240 Hz glide with 5ms fades, on top of the same noise.
pub fn speech_like(sample_rate: u32, len: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut samples = white_noise(seed, 0.01, len);
    let voiced_start = len / 6;
    let voiced_end = len - len / 6;
    let voiced_len = voiced_end.saturating_sub(voiced_start);
    if voiced_len == 0 {
        return samples;
    }

    let fade = ((sample_rate as f32 * 0.005) as usize).max(1);
    let mut phase = 0.0f32;
    for (offset, sample) in samples[voiced_start..voiced_end].iter_mut().enumerate() {
        let progress = offset as f32 / voiced_len as f32;
        let frequency = 180.0 + 60.0 * progress;
        phase += 2.0 * PI * frequency / sample_rate as f32;

        let remaining = voiced_len - offset;
        let envelope = (offset.min(remaining) as f32 / fade as f32).min(1.0);
        *sample += amplitude * envelope * phase.sin();
    }
    samples
}
