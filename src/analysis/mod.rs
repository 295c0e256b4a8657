// Analysis module - humanity scoring pipeline
//
// Pipeline: FeatureExtractor → ConfidenceScorer
//
// Both stages are pure: the same samples always give the same features and
// the same score. Thresholding the result (accept / re-record) belongs to
// the mint policy, not here.

pub mod features;
pub mod scorer;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::AnalysisError;
use features::{FeatureExtractor, FeatureSet};
use scorer::{ConfidenceScorer, ScoreBreakdown};

/// Features plus the score derived from them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    pub sample_rate: u32,
    pub features: FeatureSet,
    /// Humanity score in [0, 100]
    pub confidence_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Run extraction and scoring on one decoded recording
pub fn analyze(
    audio: &[f32],
    sample_rate: u32,
    config: &AppConfig,
) -> Result<VoiceAnalysis, AnalysisError> {
    let extractor = FeatureExtractor::with_config(sample_rate, config.analysis.clone());
    let scorer = ConfidenceScorer::new(config.scoring.clone());

    let features = extractor.extract(audio)?;
    let breakdown = scorer.breakdown(&features);
    let confidence_score = scorer.score(&features);

    Ok(VoiceAnalysis {
        sample_rate,
        features,
        confidence_score,
        breakdown,
    })
}
