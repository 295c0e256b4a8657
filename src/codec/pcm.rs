// PCM requantization between normalized f32 and 16-bit on-chain samples

use std::io::Cursor;
use std::path::Path;

use crate::error::CodecError;

/// Convert normalized samples to little-endian i16 bytes
///
/// Each sample becomes `floor(clamp(x · 32768, -32768, 32767))`. Positive
/// full scale therefore saturates at 32767 and -1.0 maps to -32768.
pub fn quantize_i16(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let value = (sample * 32768.0).clamp(-32768.0, 32767.0).floor() as i16;
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Inverse of `quantize_i16`: little-endian i16 bytes back to `i16 / 32768`
///
/// A trailing odd byte is ignored.
pub fn pcm_to_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / 32768.0)
        .collect()
}

fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Render samples as an in-memory 16-bit mono WAV file
pub fn wav_bytes(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, CodecError> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, wav_spec(sample_rate))?;
        for chunk in quantize_i16(samples).chunks_exact(2) {
            writer.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Write samples to a playable 16-bit mono WAV file
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
) -> Result<(), CodecError> {
    let mut writer = hound::WavWriter::create(path.as_ref(), wav_spec(sample_rate))?;
    for chunk in quantize_i16(samples).chunks_exact(2) {
        writer.write_sample(i16::from_le_bytes([chunk[0], chunk[1]]))?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_one(sample: f32) -> i16 {
        let bytes = quantize_i16(&[sample]);
        i16::from_le_bytes([bytes[0], bytes[1]])
    }

    #[test]
    fn test_quantize_bounds_and_floor() {
        assert_eq!(decode_one(0.0), 0);
        assert_eq!(decode_one(1.0), 32767);
        assert_eq!(decode_one(-1.0), -32768);
        assert_eq!(decode_one(2.5), 32767);
        assert_eq!(decode_one(-3.0), -32768);
        // floor, not round: -1/65536 * 32768 = -0.5 -> -1
        assert_eq!(decode_one(-1.0 / 65_536.0), -1);
        assert_eq!(decode_one(1.0 / 65_536.0), 0);
    }

    #[test]
    fn test_two_bytes_per_sample_little_endian() {
        let bytes = quantize_i16(&[0.5, -0.5]);
        assert_eq!(bytes, vec![0x00, 0x40, 0x00, 0xc0]);
    }

    #[test]
    fn test_pcm_roundtrip_is_exact_on_grid() {
        let samples = vec![0.0, 0.5, -0.5, -1.0, 16_384.0 / 32_768.0];
        assert_eq!(pcm_to_samples(&quantize_i16(&samples)), samples);
    }

    #[test]
    fn test_pcm_ignores_trailing_byte() {
        assert_eq!(pcm_to_samples(&[0x00, 0x40, 0x7f]), vec![0.5]);
    }

    #[test]
    fn test_wav_bytes_readable_by_hound() {
        let samples = vec![0.25f32; 160];
        let bytes = wav_bytes(&samples, 16_000).unwrap();
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 16_000);
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.len(), 160);
    }
}
