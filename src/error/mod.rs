// Error types for the proof-of-voice core
//
// This module defines custom error types for analysis, codec and mint-policy
// operations, providing structured error handling with numeric codes suitable
// for surfacing to a front-end.

mod analysis;
mod codec;
mod policy;

pub use analysis::{log_analysis_error, AnalysisError, AnalysisErrorCodes};
pub use codec::{log_codec_error, CodecError, CodecErrorCodes};
pub use policy::{log_policy_rejection, PolicyRejection, PolicyRejectionCodes};

use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the CLI and any embedding front-end.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Hard failures of the analysis pipeline (decode or degenerate input)
///
/// Policy rejections are not part of this type: they are expected outcomes
/// and are returned as values by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Analysis(AnalysisError),
    Codec(CodecError),
}

impl ErrorCode for PipelineError {
    fn code(&self) -> i32 {
        match self {
            PipelineError::Analysis(err) => err.code(),
            PipelineError::Codec(err) => err.code(),
        }
    }

    fn message(&self) -> String {
        match self {
            PipelineError::Analysis(err) => err.message(),
            PipelineError::Codec(err) => err.message(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Analysis(err) => err.fmt(f),
            PipelineError::Codec(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<AnalysisError> for PipelineError {
    fn from(err: AnalysisError) -> Self {
        PipelineError::Analysis(err)
    }
}

impl From<CodecError> for PipelineError {
    fn from(err: CodecError) -> Self {
        PipelineError::Codec(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_trait() {
        let analysis_err: &dyn ErrorCode = &AnalysisError::EmptyBuffer;
        assert_eq!(analysis_err.code(), AnalysisErrorCodes::EMPTY_BUFFER);

        let codec_err: &dyn ErrorCode = &CodecError::NoAudioTrack;
        assert_eq!(codec_err.code(), CodecErrorCodes::NO_AUDIO_TRACK);

        let rejection: &dyn ErrorCode = &PolicyRejection::ScoreTooLow { score: 10, min: 60 };
        assert_eq!(rejection.code(), PolicyRejectionCodes::SCORE_TOO_LOW);
    }

    #[test]
    fn test_pipeline_error_delegates() {
        let err: PipelineError = CodecError::Decode {
            reason: "bad packet".to_string(),
        }
        .into();
        assert_eq!(err.code(), CodecErrorCodes::DECODE_FAILED);
        assert!(err.message().contains("bad packet"));
        assert!(err.to_string().contains("CodecError"));

        let err: PipelineError = AnalysisError::EmptyBuffer.into();
        assert_eq!(err.code(), AnalysisErrorCodes::EMPTY_BUFFER);
    }

    #[test]
    fn test_error_propagation() {
        fn may_fail() -> Result<(), CodecError> {
            Err(CodecError::NoAudioTrack)
        }

        fn caller() -> Result<(), PipelineError> {
            may_fail()?;
            Ok(())
        }

        assert!(matches!(
            caller(),
            Err(PipelineError::Codec(CodecError::NoAudioTrack))
        ));
    }
}
