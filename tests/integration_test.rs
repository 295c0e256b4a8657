// Integration tests for the recording → mint request path

use proof_of_voice::codec::{write_wav, AudioCodec};
use proof_of_voice::config::{AppConfig, CentroidMethod};
use proof_of_voice::mint::{ContractInterface, RecordingMinter};
use proof_of_voice::pipeline::{MintOutcome, VoicePipeline};
use proof_of_voice::prompt::{Category, Emotion, Prompt};
use proof_of_voice::synthetic::{self, SyntheticPattern, SyntheticSpec};
use proof_of_voice::{analyze, audio_to_hex, hex_to_audio, PolicyRejection};

fn prompt() -> Prompt {
    Prompt {
        category: Category::History,
        word: "Echo".to_string(),
        emotion: Emotion::Reverent,
    }
}

fn wav_file(name: &str, samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let path = std::env::temp_dir().join(format!("pov_it_{}_{}.wav", std::process::id(), name));
    write_wav(&path, samples, sample_rate).expect("write fixture WAV");
    let bytes = std::fs::read(&path).expect("read fixture WAV");
    std::fs::remove_file(&path).ok();
    bytes
}

#[test]
fn test_bundled_config_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/voice_config.json");
    assert_eq!(AppConfig::load_from_file(path), AppConfig::default());
}

#[test]
fn test_wav_recording_to_submitted_mint() {
    let samples = SyntheticSpec::new(SyntheticPattern::SpeechLike).render();
    let bytes = wav_file("speech", &samples, 16_000);

    let pipeline = VoicePipeline::default();
    let request = match pipeline.process(&bytes, Some("wav"), &prompt()).unwrap() {
        MintOutcome::Accepted { request, .. } => request,
        other => panic!("expected acceptance, got {:?}", other),
    };

    // on-chain bytes decode back to the same PCM
    let pcm = hex_to_audio(&request.audio_hex).unwrap();
    assert_eq!(pcm.len(), 19_200);
    assert_eq!(audio_to_hex(&pcm), request.audio_hex);

    let contract = ContractInterface::new("0x2222222222222222222222222222222222222222").unwrap();
    let minter = RecordingMinter::new();
    let hash = pipeline.submit(&request, &contract, &minter).unwrap();
    assert!(hash.starts_with("0x"));
    assert_eq!(minter.calls()[0].args[3], "reverent");
}

#[test]
fn test_high_rate_recording_is_downsampled_before_size_check() {
    // 0.4s at 48 kHz is 19,200 raw samples but only 6,400 after resampling
    let samples = SyntheticSpec::new(SyntheticPattern::SpeechLike)
        .with_sample_rate(48_000)
        .with_duration(0.4)
        .render();
    let bytes = wav_file("speech48k", &samples, 48_000);

    let codec = AudioCodec::default();
    let pcm = codec.compress_for_chain(&bytes).unwrap();
    assert_eq!(pcm.len(), 12_800);

    let outcome = VoicePipeline::default()
        .process(&bytes, None, &prompt())
        .unwrap();
    assert_eq!(outcome.analysis().sample_rate, 48_000);
    if let MintOutcome::Rejected { rejection, .. } = &outcome {
        assert!(
            !matches!(rejection, PolicyRejection::PayloadTooLarge { .. }),
            "unexpected size rejection"
        );
    }
}

#[test]
fn test_burst_fixture_features() {
    // 1s of near-silence with a 200ms burst at 0.3
    let samples = synthetic::burst(16_000, 6_400, 3_200, 0.3, 0.0);
    let analysis = analyze(&samples, 16_000, &AppConfig::default()).unwrap();
    let features = &analysis.features;

    approx::assert_abs_diff_eq!(features.duration, 1.0, epsilon = 1e-9);
    approx::assert_abs_diff_eq!(features.silence_ratio, 0.8, epsilon = 0.02);
    assert!(!features.has_breath_sounds);

    let outcome = VoicePipeline::default()
        .process_samples(&samples, 16_000, &prompt())
        .unwrap();
    assert!(matches!(
        outcome,
        MintOutcome::Rejected {
            rejection: PolicyRejection::TooSilent { .. },
            ..
        }
    ));
}

#[test]
fn test_fft_centroid_is_opt_in() {
    let samples = synthetic::sine(16_000, 1_000.0, 0.5, 16_000);
    let mut config = AppConfig::default();

    let proxy = analyze(&samples, 16_000, &config).unwrap();
    config.analysis.centroid_method = CentroidMethod::Fft;
    let fft = analyze(&samples, 16_000, &config).unwrap();

    approx::assert_abs_diff_eq!(fft.features.spectral_centroid, 1_000.0, epsilon = 25.0);
    assert!((proxy.features.spectral_centroid - fft.features.spectral_centroid).abs() > 1_000.0);
    assert_eq!(proxy.features.silence_ratio, fft.features.silence_ratio);
}
