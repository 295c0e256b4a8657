// Mint policy - caller-side acceptance checks
//
// Check order: silence → energy → speech length → spoken word → score →
// payload size. The first failing check is reported.

use crate::analysis::features::FeatureSet;
use crate::config::PolicyConfig;
use crate::error::PolicyRejection;
use crate::verification::transcript_matches;

/// Decides whether an analyzed recording may be minted
#[derive(Debug, Clone, Default)]
pub struct MintPolicy {
    config: PolicyConfig,
}

impl MintPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Seconds of the recording that are not silence
    pub fn speech_seconds(features: &FeatureSet) -> f64 {
        features.duration * (1.0 - features.silence_ratio)
    }

    /// Signal and score checks, run before the recording is encoded
    ///
    /// `transcript` is whatever a speech recognizer heard, if one ran. Without
    /// it (or with `verify_word` off) the word check is skipped.
    pub fn check_recording(
        &self,
        features: &FeatureSet,
        score: u8,
        expected_word: &str,
        transcript: Option<&str>,
    ) -> Result<(), PolicyRejection> {
        let c = &self.config;

        if features.silence_ratio > c.max_silence_ratio {
            return Err(PolicyRejection::TooSilent {
                silence_ratio: features.silence_ratio,
                max: c.max_silence_ratio,
            });
        }

        if features.average_energy < c.min_average_energy {
            return Err(PolicyRejection::TooQuiet {
                average_energy: features.average_energy,
                min: c.min_average_energy,
            });
        }

        let speech_seconds = Self::speech_seconds(features);
        if speech_seconds < c.min_speech_secs {
            return Err(PolicyRejection::TooShort {
                speech_seconds,
                min: c.min_speech_secs,
            });
        }

        if c.verify_word {
            if let Some(heard) = transcript {
                if !expected_word.is_empty() && !transcript_matches(expected_word, heard) {
                    return Err(PolicyRejection::WordMismatch {
                        heard: heard.to_string(),
                        expected: expected_word.to_string(),
                    });
                }
            }
        }

        if score < c.min_humanity_score {
            return Err(PolicyRejection::ScoreTooLow {
                score,
                min: c.min_humanity_score,
            });
        }

        Ok(())
    }

    /// On-chain size ceiling; `len` is the decoded (not hex) byte count
    pub fn check_payload(&self, len: usize) -> Result<(), PolicyRejection> {
        if len > self.config.max_payload_bytes {
            return Err(PolicyRejection::PayloadTooLarge {
                bytes: len,
                max: self.config.max_payload_bytes,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good_features() -> FeatureSet {
        FeatureSet {
            duration: 0.6,
            has_background_noise: true,
            has_breath_sounds: true,
            speech_variability: 40.0,
            energy_distribution: 0.9,
            silence_ratio: 0.3,
            spectral_centroid: 3_000.0,
            zero_crossing_rate: 0.1,
            average_energy: 0.05,
            waveform: vec![0; 50],
        }
    }

    #[test]
    fn test_good_recording_accepted() {
        let policy = MintPolicy::default();
        assert_eq!(
            policy.check_recording(&good_features(), 80, "Privacy", Some("privacy")),
            Ok(())
        );
        assert_eq!(policy.check_recording(&good_features(), 80, "Privacy", None), Ok(()));
    }

    #[test]
    fn test_silence_checked_first() {
        let mut features = good_features();
        features.silence_ratio = 0.75;
        features.average_energy = 0.0;
        let rejection = MintPolicy::default()
            .check_recording(&features, 10, "Privacy", Some("nothing"))
            .unwrap_err();
        assert!(matches!(rejection, PolicyRejection::TooSilent { .. }));
    }

    #[test]
    fn test_quiet_before_short() {
        let mut features = good_features();
        features.average_energy = 0.004;
        features.duration = 0.1;
        let rejection = MintPolicy::default()
            .check_recording(&features, 80, "Privacy", None)
            .unwrap_err();
        assert!(matches!(rejection, PolicyRejection::TooQuiet { .. }));
    }

    #[test]
    fn test_too_short_speech() {
        let mut features = good_features();
        features.duration = 0.4;
        features.silence_ratio = 0.5;
        let rejection = MintPolicy::default()
            .check_recording(&features, 80, "Privacy", None)
            .unwrap_err();
        match rejection {
            PolicyRejection::TooShort { speech_seconds, min } => {
                approx::assert_abs_diff_eq!(speech_seconds, 0.2, epsilon = 1e-12);
                approx::assert_abs_diff_eq!(min, 0.3);
            }
            other => panic!("unexpected rejection {:?}", other),
        }
    }

    #[test]
    fn test_word_mismatch_before_score() {
        let rejection = MintPolicy::default()
            .check_recording(&good_features(), 10, "Privacy", Some("liberty"))
            .unwrap_err();
        assert_eq!(
            rejection,
            PolicyRejection::WordMismatch {
                heard: "liberty".to_string(),
                expected: "Privacy".to_string(),
            }
        );
    }

    #[test]
    fn test_word_check_can_be_disabled() {
        let policy = MintPolicy::new(PolicyConfig {
            verify_word: false,
            ..PolicyConfig::default()
        });
        assert!(policy
            .check_recording(&good_features(), 80, "Privacy", Some("liberty"))
            .is_ok());
    }

    #[test]
    fn test_score_threshold_inclusive() {
        let policy = MintPolicy::default();
        assert!(policy.check_recording(&good_features(), 60, "Privacy", None).is_ok());
        assert_eq!(
            policy.check_recording(&good_features(), 59, "Privacy", None),
            Err(PolicyRejection::ScoreTooLow { score: 59, min: 60 })
        );
    }

    #[test]
    fn test_payload_ceiling() {
        let policy = MintPolicy::default();
        assert_eq!(policy.check_payload(20_480), Ok(()));
        assert_eq!(
            policy.check_payload(20_481),
            Err(PolicyRejection::PayloadTooLarge {
                bytes: 20_481,
                max: 20_480
            })
        );
    }
}
