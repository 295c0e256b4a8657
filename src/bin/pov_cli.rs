use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use proof_of_voice::codec::{hex_to_audio, pcm_to_samples, write_wav};
use proof_of_voice::config::AppConfig;
use proof_of_voice::mint::ContractInterface;
use proof_of_voice::pipeline::{MintOutcome, VoicePipeline};
use proof_of_voice::prompt::{Category, Emotion, Prompt};
use proof_of_voice::synthetic::{SyntheticPattern, SyntheticSpec};
use proof_of_voice::{analyze, audio_to_hex, MintPolicy, VoiceAnalysis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "pov_cli",
    about = "Humanity scoring and on-chain audio encoding for Proof of Voice"
)]
struct Cli {
    /// Configuration JSON (defaults to assets/voice_config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Recording file (webm, ogg, wav, flac, mp3)
    #[arg(long, conflicts_with = "synthetic", required_unless_present = "synthetic")]
    input: Option<PathBuf>,
    /// Generate a deterministic recording instead (silence, sine, noise, burst, speech)
    #[arg(long)]
    synthetic: Option<SyntheticPattern>,
    #[arg(long, default_value_t = 0.6)]
    duration: f32,
    #[arg(long, default_value_t = 16_000)]
    sample_rate: u32,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract features, score and report the mint verdict
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        /// Word the speaker was asked to say
        #[arg(long)]
        word: Option<String>,
        /// What a speech recognizer heard, for the word check
        #[arg(long)]
        transcript: Option<String>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Convert a recording to 16 kHz PCM, printed as 0x hex
    Encode {
        #[command(flatten)]
        input: InputArgs,
        /// Write the raw PCM bytes here instead of printing hex
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Turn on-chain hex back into a playable WAV
    Decode {
        #[arg(long, conflicts_with = "hex_file", required_unless_present = "hex_file")]
        hex: Option<String>,
        #[arg(long)]
        hex_file: Option<PathBuf>,
        #[arg(long)]
        output: PathBuf,
    },
    /// Run the full pipeline and print the mint request (exit 2 on rejection)
    Mint {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        category: Category,
        /// Assigned word; drawn from the category when omitted
        #[arg(long)]
        word: Option<String>,
        #[arg(long)]
        emotion: Option<Emotion>,
        #[arg(long)]
        seed: Option<u64>,
        /// Contract interface JSON; adds the contract call to the output
        #[arg(long)]
        contract: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Draw a word and emotion for a category
    Prompt {
        #[arg(long)]
        category: Category,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli
        .config
        .map(AppConfig::load_from_file)
        .unwrap_or_else(AppConfig::load);

    match cli.command {
        Commands::Analyze {
            input,
            word,
            transcript,
            output,
        } => run_analyze(&config, &input, word, transcript, output),
        Commands::Encode { input, output } => run_encode(config, &input, output),
        Commands::Decode {
            hex,
            hex_file,
            output,
        } => run_decode(&config, hex, hex_file, &output),
        Commands::Mint {
            input,
            category,
            word,
            emotion,
            seed,
            contract,
            output,
        } => {
            let mut prompt = Prompt::assign(category, &mut rng(seed));
            if let Some(word) = word {
                prompt.word = word;
            }
            if let Some(emotion) = emotion {
                prompt.emotion = emotion;
            }
            run_mint(config, &input, &prompt, contract, output)
        }
        Commands::Prompt { category, seed } => run_prompt(category, seed),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Mono samples plus their rate, from a file or a synthetic pattern
fn load_samples(pipeline: &VoicePipeline, input: &InputArgs) -> Result<(Vec<f32>, u32, String)> {
    if let Some(pattern) = input.synthetic {
        let samples = SyntheticSpec::new(pattern)
            .with_duration(input.duration)
            .with_sample_rate(input.sample_rate)
            .render();
        return Ok((samples, input.sample_rate, format!("synthetic:{:?}", pattern)));
    }

    let path = input
        .input
        .as_ref()
        .context("either --input or --synthetic is required")?;
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let extension = path.extension().and_then(|e| e.to_str());
    let decoded = pipeline
        .codec()
        .decode(&bytes, extension)
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok((decoded.samples, decoded.sample_rate, path.display().to_string()))
}

#[derive(Serialize)]
struct AnalyzeReport<'a> {
    source: &'a str,
    analysis: &'a VoiceAnalysis,
    encoded_bytes: usize,
    verdict: Verdict,
}

#[derive(Serialize)]
struct Verdict {
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn run_analyze(
    config: &AppConfig,
    input: &InputArgs,
    word: Option<String>,
    transcript: Option<String>,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    use proof_of_voice::ErrorCode;

    let pipeline = VoicePipeline::new(config.clone());
    let (samples, sample_rate, source) = load_samples(&pipeline, input)?;
    let analysis = analyze(&samples, sample_rate, config)?;
    let pcm = pipeline.codec().encode_samples(&samples, sample_rate)?;

    let policy = MintPolicy::new(config.policy.clone());
    let verdict = policy
        .check_recording(
            &analysis.features,
            analysis.confidence_score,
            word.as_deref().unwrap_or_default(),
            transcript.as_deref(),
        )
        .and_then(|_| policy.check_payload(pcm.len()));

    let verdict = match verdict {
        Ok(()) => Verdict {
            accepted: true,
            code: None,
            message: None,
        },
        Err(rejection) => Verdict {
            accepted: false,
            code: Some(rejection.code()),
            message: Some(rejection.message()),
        },
    };

    let report = AnalyzeReport {
        source: &source,
        analysis: &analysis,
        encoded_bytes: pcm.len(),
        verdict,
    };
    emit_json(&serde_json::to_string_pretty(&report)?, output)?;
    Ok(ExitCode::from(0))
}

fn run_encode(config: AppConfig, input: &InputArgs, output: Option<PathBuf>) -> Result<ExitCode> {
    let pipeline = VoicePipeline::new(config);
    let (samples, sample_rate, _) = load_samples(&pipeline, input)?;
    let pcm = pipeline.codec().encode_samples(&samples, sample_rate)?;

    match output {
        Some(path) => {
            fs::write(&path, &pcm).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", pcm.len(), path.display());
        }
        None => println!("{}", audio_to_hex(&pcm)),
    }
    Ok(ExitCode::from(0))
}

fn run_decode(
    config: &AppConfig,
    hex: Option<String>,
    hex_file: Option<PathBuf>,
    output: &Path,
) -> Result<ExitCode> {
    let hex = match (hex, hex_file) {
        (Some(hex), _) => hex,
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, None) => anyhow::bail!("either --hex or --hex-file is required"),
    };

    let pcm = hex_to_audio(hex.trim())?;
    let samples = pcm_to_samples(&pcm);
    write_wav(output, &samples, config.codec.target_sample_rate)
        .with_context(|| format!("writing {}", output.display()))?;
    eprintln!(
        "Wrote {} samples at {}Hz to {}",
        samples.len(),
        config.codec.target_sample_rate,
        output.display()
    );
    Ok(ExitCode::from(0))
}

#[derive(Serialize)]
struct MintReport<'a> {
    prompt: &'a Prompt,
    #[serde(flatten)]
    outcome: &'a MintOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    call: Option<proof_of_voice::mint::ContractCall>,
}

fn run_mint(
    config: AppConfig,
    input: &InputArgs,
    prompt: &Prompt,
    contract: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let contract = contract
        .map(ContractInterface::load_from_file)
        .transpose()?;

    let pipeline = VoicePipeline::new(config);
    let (samples, sample_rate, _) = load_samples(&pipeline, input)?;
    let outcome = pipeline.process_samples(&samples, sample_rate, prompt)?;

    let call = match (&outcome, &contract) {
        (MintOutcome::Accepted { request, .. }, Some(contract)) => Some(contract.mint_call(request)),
        _ => None,
    };

    let report = MintReport {
        prompt,
        outcome: &outcome,
        call,
    };
    emit_json(&serde_json::to_string_pretty(&report)?, output)?;

    if outcome.is_accepted() {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(2))
    }
}

#[derive(Serialize)]
struct PromptReport<'a> {
    #[serde(flatten)]
    prompt: &'a Prompt,
    delivery: &'static str,
}

fn run_prompt(category: Category, seed: Option<u64>) -> Result<ExitCode> {
    let prompt = Prompt::assign(category, &mut rng(seed));
    let report = PromptReport {
        prompt: &prompt,
        delivery: prompt.emotion.description(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::from(0))
}

fn emit_json(json: &str, output: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output {
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    } else {
        println!("{json}");
    }
    Ok(())
}
