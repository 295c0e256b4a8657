// Mint policy rejection types and constants

use crate::error::ErrorCode;
use log::warn;
use std::fmt;

/// Policy rejection code constants
///
/// Error code range: 3001-3006
pub struct PolicyRejectionCodes {}

impl PolicyRejectionCodes {
    pub const TOO_SILENT: i32 = 3001;
    pub const TOO_QUIET: i32 = 3002;
    pub const TOO_SHORT: i32 = 3003;
    pub const WORD_MISMATCH: i32 = 3004;
    pub const SCORE_TOO_LOW: i32 = 3005;
    pub const PAYLOAD_TOO_LARGE: i32 = 3006;
}

/// Log a rejection at warn level; rejections are user-recoverable
pub fn log_policy_rejection(rejection: &PolicyRejection, context: &str) {
    warn!(
        "Recording rejected in {}: code={}, component=MintPolicy, message={}",
        context,
        rejection.code(),
        rejection.message()
    );
}

/// Reasons a recording is refused before minting
///
/// These are expected outcomes (the user re-records), not failures of the
/// core. Messages are phrased for direct display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum PolicyRejection {
    TooSilent { silence_ratio: f64, max: f64 },
    TooQuiet { average_energy: f64, min: f64 },
    TooShort { speech_seconds: f64, min: f64 },
    WordMismatch { heard: String, expected: String },
    ScoreTooLow { score: u8, min: u8 },
    PayloadTooLarge { bytes: usize, max: usize },
}

impl ErrorCode for PolicyRejection {
    fn code(&self) -> i32 {
        match self {
            PolicyRejection::TooSilent { .. } => PolicyRejectionCodes::TOO_SILENT,
            PolicyRejection::TooQuiet { .. } => PolicyRejectionCodes::TOO_QUIET,
            PolicyRejection::TooShort { .. } => PolicyRejectionCodes::TOO_SHORT,
            PolicyRejection::WordMismatch { .. } => PolicyRejectionCodes::WORD_MISMATCH,
            PolicyRejection::ScoreTooLow { .. } => PolicyRejectionCodes::SCORE_TOO_LOW,
            PolicyRejection::PayloadTooLarge { .. } => PolicyRejectionCodes::PAYLOAD_TOO_LARGE,
        }
    }

    fn message(&self) -> String {
        match self {
            PolicyRejection::TooSilent { .. } => {
                "Recording is too silent. Please speak the word clearly.".to_string()
            }
            PolicyRejection::TooQuiet { .. } => {
                "Recording is too quiet. Please speak louder and closer to the microphone."
                    .to_string()
            }
            PolicyRejection::TooShort { speech_seconds, .. } => format!(
                "Recording is too short ({:.2}s of speech). Please speak the word clearly.",
                speech_seconds
            ),
            PolicyRejection::WordMismatch { heard, expected } => format!(
                "Word verification failed. You said \"{}\" but should have said \"{}\".",
                heard, expected
            ),
            PolicyRejection::ScoreTooLow { score, min } => format!(
                "Humanity score too low ({}). Minimum score is {}.",
                score, min
            ),
            PolicyRejection::PayloadTooLarge { bytes, max } => format!(
                "Audio payload too large: {} bytes (maximum {} bytes).",
                bytes, max
            ),
        }
    }
}

impl fmt::Display for PolicyRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PolicyRejection (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for PolicyRejection {}
