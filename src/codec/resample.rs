// Audio resampling using rubato
//
// Converts decoded mono audio to the on-chain sample rate.

use rubato::{FastFixedIn, PolynomialDegree, Resampler};

use crate::error::CodecError;

/// Resample mono audio from `input_rate` to `output_rate`
///
/// The whole clip is processed as one chunk, then the resampler is flushed
/// and its output delay trimmed so the result is time-aligned with the
/// input and holds `ceil(len · output_rate / input_rate)` samples. Clips
/// too short to fill the resampler's delay are zero-padded to that length.
///
/// # Notes
/// If the rates match, returns a copy without resampling.
pub fn resample_mono(
    input: &[f32],
    input_rate: u32,
    output_rate: u32,
) -> Result<Vec<f32>, CodecError> {
    if input_rate == output_rate {
        log::debug!("[Codec] Sample rate already at {}Hz, skipping resample", output_rate);
        return Ok(input.to_vec());
    }
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input_rate == 0 || output_rate == 0 {
        return Err(CodecError::Resample {
            reason: format!("invalid rates {} -> {}", input_rate, output_rate),
        });
    }

    let ratio = output_rate as f64 / input_rate as f64;
    let expected_len =
        (input.len() as u64 * output_rate as u64).div_ceil(input_rate as u64) as usize;

    let mut resampler = FastFixedIn::<f32>::new(
        ratio,
        1.0,
        PolynomialDegree::Septic,
        input.len(),
        1,
    )
    .map_err(|e| CodecError::Resample {
        reason: format!("failed to create resampler: {}", e),
    })?;

    let delay = resampler.output_delay();

    let mut output = resampler
        .process(&[input.to_vec()], None)
        .map_err(|e| CodecError::Resample {
            reason: e.to_string(),
        })?
        .remove(0);

    let tail = resampler
        .process_partial(None::<&[Vec<f32>]>, None)
        .map_err(|e| CodecError::Resample {
            reason: e.to_string(),
        })?
        .remove(0);
    output.extend(tail);

    let mut aligned: Vec<f32> = output.into_iter().skip(delay).collect();
    aligned.resize(expected_len, 0.0);

    log::debug!(
        "[Codec] Resampled {} samples at {}Hz to {} samples at {}Hz",
        input.len(),
        input_rate,
        aligned.len(),
        output_rate
    );

    Ok(aligned)
}
