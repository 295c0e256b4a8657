// Pipeline - recording bytes to a mint request
//
// decode → analyze → word check + policy → encode to 16 kHz PCM → size check
//
// Hard failures (undecodable audio, degenerate buffers) are errors.
// Policy rejections are ordinary outcomes carried in `MintOutcome`.

use serde::Serialize;

use crate::analysis::{self, VoiceAnalysis};
use crate::codec::AudioCodec;
use crate::config::AppConfig;
use crate::error::{
    log_analysis_error, log_codec_error, log_policy_rejection, PipelineError, PolicyRejection,
};
use crate::mint::{ContractInterface, MintRequest, VoiceMinter};
use crate::policy::MintPolicy;
use crate::prompt::Prompt;
use crate::verification::{advisory_transcript, NoTranscriber, Transcriber};

/// Result of running a recording through the pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MintOutcome {
    Accepted {
        request: MintRequest,
        analysis: VoiceAnalysis,
    },
    Rejected {
        rejection: PolicyRejection,
        analysis: VoiceAnalysis,
    },
}

impl MintOutcome {
    pub fn analysis(&self) -> &VoiceAnalysis {
        match self {
            MintOutcome::Accepted { analysis, .. } | MintOutcome::Rejected { analysis, .. } => {
                analysis
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, MintOutcome::Accepted { .. })
    }
}

pub struct VoicePipeline {
    config: AppConfig,
    codec: AudioCodec,
    policy: MintPolicy,
    transcriber: Box<dyn Transcriber>,
}

impl Default for VoicePipeline {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl VoicePipeline {
    pub fn new(config: AppConfig) -> Self {
        Self {
            codec: AudioCodec::new(config.codec.clone()),
            policy: MintPolicy::new(config.policy.clone()),
            transcriber: Box::new(NoTranscriber),
            config,
        }
    }

    /// Attach a speech recognizer for the word check
    pub fn with_transcriber(mut self, transcriber: Box<dyn Transcriber>) -> Self {
        self.transcriber = transcriber;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn codec(&self) -> &AudioCodec {
        &self.codec
    }

    /// Run a container-encoded recording through every stage
    pub fn process(
        &self,
        raw: &[u8],
        extension: Option<&str>,
        prompt: &Prompt,
    ) -> Result<MintOutcome, PipelineError> {
        let decoded = self.codec.decode(raw, extension).map_err(|e| {
            log_codec_error(&e, "VoicePipeline::process");
            e
        })?;
        self.process_samples(&decoded.samples, decoded.sample_rate, prompt)
    }

    /// Run already-decoded mono samples through analysis, policy and encoding
    pub fn process_samples(
        &self,
        samples: &[f32],
        sample_rate: u32,
        prompt: &Prompt,
    ) -> Result<MintOutcome, PipelineError> {
        let span = tracing::info_span!(
            "voice_pipeline",
            word = %prompt.word,
            category = %prompt.category,
            sample_rate
        );
        let _enter = span.enter();

        let analysis = analysis::analyze(samples, sample_rate, &self.config).map_err(|e| {
            log_analysis_error(&e, "VoicePipeline::process_samples");
            e
        })?;
        tracing::info!(
            "[Pipeline] Analyzed {:.2}s recording, humanity score {}",
            analysis.features.duration,
            analysis.confidence_score
        );

        let transcript = if self.config.policy.verify_word {
            advisory_transcript(self.transcriber.as_ref(), samples, sample_rate)
        } else {
            None
        };

        if let Err(rejection) = self.policy.check_recording(
            &analysis.features,
            analysis.confidence_score,
            &prompt.word,
            transcript.as_deref(),
        ) {
            return Ok(Self::rejected(rejection, analysis));
        }

        let pcm = self
            .codec
            .encode_samples(samples, sample_rate)
            .map_err(|e| {
                log_codec_error(&e, "VoicePipeline::process_samples");
                e
            })?;
        if let Err(rejection) = self.policy.check_payload(pcm.len()) {
            return Ok(Self::rejected(rejection, analysis));
        }

        let request = MintRequest::new(
            &pcm,
            prompt,
            analysis.confidence_score,
            &analysis.features.waveform,
        );
        tracing::info!(
            "[Pipeline] Recording accepted: {} bytes of PCM, {} waveform points",
            pcm.len(),
            request.waveform.len()
        );

        Ok(MintOutcome::Accepted { request, analysis })
    }

    fn rejected(rejection: PolicyRejection, analysis: VoiceAnalysis) -> MintOutcome {
        log_policy_rejection(&rejection, "VoicePipeline");
        MintOutcome::Rejected {
            rejection,
            analysis,
        }
    }

    /// Hand an accepted request to the chain collaborator
    pub fn submit(
        &self,
        request: &MintRequest,
        contract: &ContractInterface,
        minter: &dyn VoiceMinter,
    ) -> anyhow::Result<String> {
        // Re-check: requests may be built or edited outside this pipeline
        self.policy.check_payload(request.audio_len())?;
        let call = contract.mint_call(request);
        let hash = minter.submit(&call)?;
        log::info!("[Pipeline] Submitted {} to {}: {}", call.function, call.address, hash);
        Ok(hash)
    }
}
