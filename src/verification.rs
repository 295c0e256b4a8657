// Verification - spoken word cross-check
//
// Speech recognition is an optional collaborator. When a transcript is
// available it is compared to the assigned word with a forgiving heuristic;
// when it is not, verification is skipped and never blocks scoring.

/// Speech-to-text engine supplied by the embedding application
pub trait Transcriber {
    /// Transcribe a mono recording; `Ok(None)` means nothing was recognized
    fn transcribe(&self, samples: &[f32], sample_rate: u32) -> anyhow::Result<Option<String>>;
}

/// Transcriber for environments without speech recognition
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranscriber;

impl Transcriber for NoTranscriber {
    fn transcribe(&self, _samples: &[f32], _sample_rate: u32) -> anyhow::Result<Option<String>> {
        Ok(None)
    }
}

/// Run a transcriber, downgrading failures to "no transcript"
pub fn advisory_transcript(
    transcriber: &dyn Transcriber,
    samples: &[f32],
    sample_rate: u32,
) -> Option<String> {
    match transcriber.transcribe(samples, sample_rate) {
        Ok(transcript) => transcript.filter(|t| !t.trim().is_empty()),
        Err(e) => {
            log::warn!("[Verification] Transcriber unavailable, skipping word check: {:#}", e);
            None
        }
    }
}

fn prefix(word: &str, n: usize) -> String {
    word.chars().take(n).collect()
}

fn similar(word: &str, expected: &str) -> bool {
    if word == expected {
        return true;
    }
    let word_len = word.chars().count();
    let expected_len = expected.chars().count();

    if expected_len >= 3 && word.contains(expected) {
        return true;
    }
    if word_len >= 3 && expected.contains(word) {
        return true;
    }
    // "code" vs "codes", "free" vs "freed"
    if word_len.abs_diff(expected_len) <= 2 {
        return word.starts_with(&prefix(expected, expected_len.min(4)))
            || expected.starts_with(&prefix(word, word_len.min(4)));
    }
    false
}

/// Does a recognized phrase plausibly contain the assigned word?
///
/// Case and surrounding whitespace are ignored. A phrase such as
/// "the word is privacy" matches "Privacy" through its individual words.
pub fn transcript_matches(expected: &str, transcript: &str) -> bool {
    let expected = expected.trim().to_lowercase();
    let heard = transcript.trim().to_lowercase();

    if heard == expected {
        return true;
    }
    heard.split_whitespace().any(|word| similar(word, &expected))
}
