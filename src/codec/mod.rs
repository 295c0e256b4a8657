// Codec module - recording bytes to on-chain PCM
//
// Pipeline: decode (symphonia) → channel 0 → resample (rubato) → i16 LE
//
// The on-chain form is raw 16-bit PCM at the target rate. This is a format
// conversion, not perceptual compression: a short WebM/Opus clip usually
// gets larger.

pub mod decode;
pub mod hex;
pub mod pcm;
pub mod resample;

pub use decode::{decode_audio, DecodedAudio};
pub use hex::{audio_to_hex, hex_to_audio};
pub use pcm::{pcm_to_samples, quantize_i16, wav_bytes, write_wav};
pub use resample::resample_mono;

use crate::config::CodecConfig;
use crate::error::CodecError;

/// Converts recordings to and from the on-chain PCM representation
#[derive(Debug, Clone, Default)]
pub struct AudioCodec {
    config: CodecConfig,
}

impl AudioCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn target_sample_rate(&self) -> u32 {
        self.config.target_sample_rate
    }

    /// Decode a container to mono samples at the recording's native rate
    pub fn decode(&self, raw: &[u8], extension: Option<&str>) -> Result<DecodedAudio, CodecError> {
        decode_audio(raw, extension)
    }

    /// Decode, downmix to channel 0, resample and requantize in one step
    pub fn compress_for_chain(&self, raw: &[u8]) -> Result<Vec<u8>, CodecError> {
        let decoded = self.decode(raw, None)?;
        self.encode_samples(&decoded.samples, decoded.sample_rate)
    }

    /// Resample already-decoded mono samples and requantize to i16 LE bytes
    pub fn encode_samples(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, CodecError> {
        let resampled = resample_mono(samples, sample_rate, self.config.target_sample_rate)?;
        let bytes = quantize_i16(&resampled);
        log::debug!(
            "[Codec] Encoded {} samples at {}Hz into {} bytes at {}Hz",
            samples.len(),
            sample_rate,
            bytes.len(),
            self.config.target_sample_rate
        );
        Ok(bytes)
    }

    /// Render on-chain PCM bytes as a playable WAV at the target rate
    pub fn playable_wav(&self, pcm: &[u8]) -> Result<Vec<u8>, CodecError> {
        wav_bytes(&pcm_to_samples(pcm), self.config.target_sample_rate)
    }
}

/// `AudioCodec::compress_for_chain` with the default 16 kHz target
pub fn compress_for_chain(raw: &[u8]) -> Result<Vec<u8>, CodecError> {
    AudioCodec::default().compress_for_chain(raw)
}
