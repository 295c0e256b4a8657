// Codec error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;

/// Codec error code constants
///
/// Error code range: 2001-2007
pub struct CodecErrorCodes {}

impl CodecErrorCodes {
    /// Container format could not be identified
    pub const PROBE_FAILED: i32 = 2001;

    /// Container holds no decodable audio track
    pub const NO_AUDIO_TRACK: i32 = 2002;

    /// Track codec has no registered decoder
    pub const UNSUPPORTED_CODEC: i32 = 2003;

    /// Packet read or decode failed mid-stream
    pub const DECODE_FAILED: i32 = 2004;

    /// Sample-rate conversion failed
    pub const RESAMPLE_FAILED: i32 = 2005;

    /// Hex payload is malformed
    pub const INVALID_HEX: i32 = 2006;

    /// WAV rendering failed
    pub const WAV_FAILED: i32 = 2007;
}

/// Log a codec error with structured context
pub fn log_codec_error(err: &CodecError, context: &str) {
    error!(
        "Codec error in {}: code={}, component=AudioCodec, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Audio codec errors
///
/// Decode failures are hard failures: the mint flow aborts and the user is
/// asked to record again. Nothing here is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    ProbeFailed { reason: String },
    NoAudioTrack,
    UnsupportedCodec { reason: String },
    Decode { reason: String },
    Resample { reason: String },
    InvalidHex { reason: String },
    Wav { reason: String },
}

impl ErrorCode for CodecError {
    fn code(&self) -> i32 {
        match self {
            CodecError::ProbeFailed { .. } => CodecErrorCodes::PROBE_FAILED,
            CodecError::NoAudioTrack => CodecErrorCodes::NO_AUDIO_TRACK,
            CodecError::UnsupportedCodec { .. } => CodecErrorCodes::UNSUPPORTED_CODEC,
            CodecError::Decode { .. } => CodecErrorCodes::DECODE_FAILED,
            CodecError::Resample { .. } => CodecErrorCodes::RESAMPLE_FAILED,
            CodecError::InvalidHex { .. } => CodecErrorCodes::INVALID_HEX,
            CodecError::Wav { .. } => CodecErrorCodes::WAV_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            CodecError::ProbeFailed { reason } => {
                format!("Unrecognized audio container: {}", reason)
            }
            CodecError::NoAudioTrack => "No audio track found in recording".to_string(),
            CodecError::UnsupportedCodec { reason } => {
                format!("Unsupported audio codec: {}", reason)
            }
            CodecError::Decode { reason } => format!("Failed to decode audio: {}", reason),
            CodecError::Resample { reason } => format!("Failed to resample audio: {}", reason),
            CodecError::InvalidHex { reason } => format!("Invalid hex audio payload: {}", reason),
            CodecError::Wav { reason } => format!("Failed to write WAV: {}", reason),
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CodecError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for CodecError {}

impl From<hound::Error> for CodecError {
    fn from(err: hound::Error) -> Self {
        CodecError::Wav {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_codes() {
        assert_eq!(
            CodecError::ProbeFailed {
                reason: "test".to_string()
            }
            .code(),
            2001
        );
        assert_eq!(CodecError::NoAudioTrack.code(), 2002);
        assert_eq!(
            CodecError::UnsupportedCodec {
                reason: "test".to_string()
            }
            .code(),
            2003
        );
        assert_eq!(
            CodecError::Decode {
                reason: "test".to_string()
            }
            .code(),
            2004
        );
        assert_eq!(
            CodecError::Resample {
                reason: "test".to_string()
            }
            .code(),
            2005
        );
        assert_eq!(
            CodecError::InvalidHex {
                reason: "test".to_string()
            }
            .code(),
            2006
        );
        assert_eq!(
            CodecError::Wav {
                reason: "test".to_string()
            }
            .code(),
            2007
        );
    }

    #[test]
    fn test_hound_error_conversion() {
        let err: CodecError = hound::Error::Unsupported.into();
        assert_eq!(err.code(), CodecErrorCodes::WAV_FAILED);
    }
}
