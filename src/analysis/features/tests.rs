use super::*;
use crate::config::CentroidMethod;
use crate::synthetic::{self, SyntheticPattern, SyntheticSpec};
use approx::assert_relative_eq;

const SAMPLE_RATE: u32 = 16_000;

#[test]
fn test_silence_is_fully_silent_without_breaths() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    let features = extractor.extract(&vec![0.0; 16_000]).unwrap();

    assert_eq!(features.silence_ratio, 1.0);
    assert!(!features.has_breath_sounds);
    assert!(!features.has_background_noise);
    assert_eq!(features.energy_distribution, 0.0);
    assert_eq!(features.average_energy, 0.0);
    assert_eq!(features.spectral_centroid, 0.0);
    assert_eq!(features.zero_crossing_rate, 0.0);
    assert_eq!(features.speech_variability, 0.0);
    assert!(features.waveform.iter().all(|&point| point == 0));
}

#[test]
fn test_waveform_length_matches_requested_points() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    let audio = synthetic::sine(SAMPLE_RATE, 440.0, 0.5, 12_345);
    for points in [1, 10, 50, 64, 200] {
        let features = extractor.extract_with_points(&audio, points).unwrap();
        assert_eq!(features.waveform.len(), points);
    }
}

#[test]
fn test_waveform_defaults_to_configured_points() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    let features = extractor.extract(&vec![0.1; 8_000]).unwrap();
    assert_eq!(features.waveform.len(), 50);
    assert!(features.waveform.iter().all(|&point| point == 100));
}

#[test]
fn test_burst_in_padding_exceeds_breath_band() {
    // 1s at 16kHz: 200ms at 0.3, the rest near-zero
    let audio = synthetic::burst(16_000, 6_400, 3_200, 0.3, 0.0005);
    let features = extract_features(&audio, SAMPLE_RATE, 50).unwrap();

    assert_relative_eq!(features.duration, 1.0);
    assert_relative_eq!(features.silence_ratio, 0.8, epsilon = 1e-9);
    assert!(!features.has_breath_sounds);
    assert!(features.speech_variability > 100.0);
    assert!(features.energy_distribution > 0.99);
}

#[test]
fn test_speech_like_recording_features() {
    let audio = SyntheticSpec::new(SyntheticPattern::SpeechLike).render();
    let features = extract_features(&audio, SAMPLE_RATE, 50).unwrap();

    assert_relative_eq!(features.duration, 0.6, epsilon = 1e-9);
    assert!(features.has_background_noise);
    assert!(features.has_breath_sounds);
    assert_relative_eq!(features.silence_ratio, 10.0 / 30.0, epsilon = 1e-9);
    assert!(
        features.speech_variability > 1.0 && features.speech_variability < 100.0,
        "variability {}",
        features.speech_variability
    );
    assert!(features.energy_distribution > 0.2);
    assert!(
        features.spectral_centroid > 200.0 && features.spectral_centroid < 5_000.0,
        "centroid {}",
        features.spectral_centroid
    );
    assert!(
        features.zero_crossing_rate > 0.01 && features.zero_crossing_rate < 0.3,
        "zcr {}",
        features.zero_crossing_rate
    );
    assert!(features.average_energy > 0.01);
}

#[test]
fn test_ratio_features_stay_in_unit_interval() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    let inputs = [
        synthetic::white_noise(1, 1.0, 4_000),
        synthetic::sine(SAMPLE_RATE, 7_900.0, 1.0, 4_000),
        vec![1.0; 4_000],
        vec![-1.0; 321],
    ];
    for audio in inputs.iter() {
        let features = extractor.extract(audio).unwrap();
        assert!((0.0..=1.0).contains(&features.silence_ratio));
        assert!((0.0..=1.0).contains(&features.energy_distribution));
        assert!((0.0..=1.0).contains(&features.zero_crossing_rate));
        assert!(features.speech_variability >= 0.0);
        assert!(features.spectral_centroid >= 0.0);
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    let audio = SyntheticSpec::new(SyntheticPattern::SpeechLike).render();
    assert_eq!(
        extractor.extract(&audio).unwrap(),
        extractor.extract(&audio).unwrap()
    );
}

#[test]
fn test_empty_buffer_rejected() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    assert_eq!(extractor.extract(&[]), Err(AnalysisError::EmptyBuffer));
}

#[test]
fn test_sample_rate_too_low_rejected() {
    let extractor = FeatureExtractor::new(40);
    assert_eq!(
        extractor.extract(&[0.1; 100]),
        Err(AnalysisError::InvalidSampleRate { sample_rate: 40 })
    );
}

#[test]
fn test_zero_waveform_points_rejected() {
    let extractor = FeatureExtractor::new(SAMPLE_RATE);
    assert_eq!(
        extractor.extract_with_points(&[0.1; 1_000], 0),
        Err(AnalysisError::InvalidWaveformPoints { points: 0 })
    );
}

#[test]
fn test_fft_centroid_method_is_selectable() {
    let config = AnalysisConfig {
        centroid_method: CentroidMethod::Fft,
        ..AnalysisConfig::default()
    };
    let extractor = FeatureExtractor::with_config(SAMPLE_RATE, config);
    let audio = synthetic::sine(SAMPLE_RATE, 500.0, 0.5, 8_000);
    let features = extractor.extract(&audio).unwrap();
    assert!(
        features.spectral_centroid < 1_500.0,
        "fft centroid {}",
        features.spectral_centroid
    );

    let proxy = FeatureExtractor::new(SAMPLE_RATE).extract(&audio).unwrap();
    assert!(proxy.spectral_centroid > 3_000.0);
}
