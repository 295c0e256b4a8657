// Proof of Voice Core - humanity scoring and on-chain audio encoding
// Offline analysis of short spoken recordings prior to minting

// Module declarations
pub mod analysis;
pub mod codec;
pub mod config;
pub mod error;
pub mod mint;
pub mod pipeline;
pub mod policy;
pub mod prompt;
pub mod synthetic;
pub mod verification;

// Re-exports for convenience
pub use analysis::features::{extract_features, FeatureExtractor, FeatureSet};
pub use analysis::scorer::{score_confidence, ConfidenceScorer, ScoreBreakdown};
pub use analysis::{analyze, VoiceAnalysis};
pub use codec::{audio_to_hex, compress_for_chain, hex_to_audio, AudioCodec};
pub use config::AppConfig;
pub use error::{AnalysisError, CodecError, ErrorCode, PipelineError, PolicyRejection};
pub use mint::{ContractInterface, MintRequest, VoiceMinter};
pub use pipeline::{MintOutcome, VoicePipeline};
pub use policy::MintPolicy;
pub use prompt::{Category, Emotion, Prompt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        let features = extract_features(&[0.0; 1_600], 16_000, 50).unwrap();
        assert_eq!(score_confidence(&features), 5);
        assert_eq!(hex_to_audio(&audio_to_hex(&[1, 2, 3])).unwrap(), vec![1, 2, 3]);
    }
}
