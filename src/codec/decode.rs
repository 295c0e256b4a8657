// Container decode using symphonia
//
// Demuxes an in-memory recording (WebM/Matroska, Ogg, WAV, FLAC, MP3),
// decodes the first audio track and keeps channel 0 as normalized f32.

use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CodecRegistry, DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::CodecError;

static CODEC_REGISTRY: once_cell::sync::Lazy<CodecRegistry> = once_cell::sync::Lazy::new(|| {
    let mut registry = CodecRegistry::new();
    symphonia::default::register_enabled_codecs(&mut registry);
    // Registered last: a later registration replaces an earlier one for the same codec
    #[cfg(feature = "opus")]
    registry.register_all::<symphonia_adapter_libopus::OpusDecoder>();
    registry
});

/// First channel of a decoded recording at its native rate
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    /// Channel count of the source track (only channel 0 is kept)
    pub channels: usize,
}

impl DecodedAudio {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Decode a complete recording held in memory
///
/// `extension` is an optional container hint such as "webm" or "wav".
/// Corrupt packets are skipped with a warning; a stream that yields no
/// samples at all is still returned (empty) and left for analysis to reject.
pub fn decode_audio(bytes: &[u8], extension: Option<&str>) -> Result<DecodedAudio, CodecError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| CodecError::ProbeFailed {
            reason: e.to_string(),
        })?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(CodecError::NoAudioTrack)?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = CODEC_REGISTRY
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| CodecError::UnsupportedCodec {
            reason: e.to_string(),
        })?;

    let mut sample_rate = codec_params.sample_rate.unwrap_or(0);
    let mut channels = codec_params.channels.map(|c| c.count()).unwrap_or(0);
    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(CodecError::Decode {
                    reason: e.to_string(),
                })
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(reason)) => {
                log::warn!("[Codec] Skipping corrupt packet: {}", reason);
                continue;
            }
            Err(e) => {
                return Err(CodecError::Decode {
                    reason: e.to_string(),
                })
            }
        };

        let spec = *decoded.spec();
        sample_rate = spec.rate;
        channels = spec.channels.count().max(1);

        let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        buffer.copy_interleaved_ref(decoded);
        samples.extend(buffer.samples().iter().step_by(channels).copied());
    }

    if sample_rate == 0 {
        return Err(CodecError::Decode {
            reason: "sample rate unknown".to_string(),
        });
    }

    log::debug!(
        "[Codec] Decoded {} samples at {}Hz ({} channel(s), kept channel 0)",
        samples.len(),
        sample_rate,
        channels
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}
