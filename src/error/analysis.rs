// Analysis error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Analysis error code constants
///
/// Error code range: 1001-1003
pub struct AnalysisErrorCodes {}

impl AnalysisErrorCodes {
    /// Sample buffer contained no samples
    pub const EMPTY_BUFFER: i32 = 1001;

    /// Sample rate too low to form a 20ms analysis window
    pub const INVALID_SAMPLE_RATE: i32 = 1002;

    /// Waveform digest requested with zero points
    pub const INVALID_WAVEFORM_POINTS: i32 = 1003;
}

/// Log an analysis error with structured context
pub fn log_analysis_error(err: &AnalysisError, context: &str) {
    error!(
        "Analysis error in {}: code={}, component=FeatureExtractor, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Errors raised when the extractor is handed input it cannot measure
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Zero-length sample buffer
    EmptyBuffer,

    /// Sample rate is zero or below 50 Hz (20ms window would be empty)
    InvalidSampleRate { sample_rate: u32 },

    /// Waveform digest point count must be > 0
    InvalidWaveformPoints { points: usize },
}

impl ErrorCode for AnalysisError {
    fn code(&self) -> i32 {
        match self {
            AnalysisError::EmptyBuffer => AnalysisErrorCodes::EMPTY_BUFFER,
            AnalysisError::InvalidSampleRate { .. } => AnalysisErrorCodes::INVALID_SAMPLE_RATE,
            AnalysisError::InvalidWaveformPoints { .. } => {
                AnalysisErrorCodes::INVALID_WAVEFORM_POINTS
            }
        }
    }

    fn message(&self) -> String {
        match self {
            AnalysisError::EmptyBuffer => "Recording contains no audio samples".to_string(),
            AnalysisError::InvalidSampleRate { sample_rate } => {
                format!("Sample rate must be at least 50 Hz (got {})", sample_rate)
            }
            AnalysisError::InvalidWaveformPoints { points } => {
                format!("Waveform point count must be greater than 0 (got {})", points)
            }
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnalysisError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_error_codes() {
        assert_eq!(AnalysisError::EmptyBuffer.code(), 1001);
        assert_eq!(
            AnalysisError::InvalidSampleRate { sample_rate: 0 }.code(),
            1002
        );
        assert_eq!(
            AnalysisError::InvalidWaveformPoints { points: 0 }.code(),
            1003
        );
    }

    #[test]
    fn test_analysis_error_display() {
        let err = AnalysisError::InvalidSampleRate { sample_rate: 10 };
        assert!(err.message().contains("got 10"));
        assert!(err.to_string().starts_with("AnalysisError::"));
    }
}
