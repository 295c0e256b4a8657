// Mint - request assembly for the on-chain voice contract
//
// The core never talks to a chain. It builds a `ContractCall` and hands it
// to a `VoiceMinter` supplied by the embedding application.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::codec::audio_to_hex;
use crate::prompt::Prompt;

/// 0.001 ether
pub const DEFAULT_MINT_FEE_WEI: u64 = 1_000_000_000_000_000;

/// Arguments of `mintVoice(bytes, string, string, string, uint8, uint16[])`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    pub audio_hex: String,
    pub word: String,
    pub category: String,
    pub emotion: String,
    pub humanity_score: u8,
    pub waveform: Vec<u16>,
}

impl MintRequest {
    /// Build a request from on-chain PCM, the prompt and the analysis output
    ///
    /// Waveform points above `u16::MAX` are clamped.
    pub fn new(pcm: &[u8], prompt: &Prompt, humanity_score: u8, waveform: &[u32]) -> Self {
        Self {
            audio_hex: audio_to_hex(pcm),
            word: prompt.word.clone(),
            category: prompt.category.to_string(),
            emotion: prompt.emotion.to_string(),
            humanity_score,
            waveform: waveform
                .iter()
                .map(|&w| w.min(u16::MAX as u32) as u16)
                .collect(),
        }
    }

    /// Decoded audio size; the hex string is twice this plus the prefix
    pub fn audio_len(&self) -> usize {
        self.audio_hex.len().saturating_sub(2) / 2
    }

    /// Positional contract arguments
    pub fn args(&self) -> Vec<serde_json::Value> {
        vec![
            self.audio_hex.clone().into(),
            self.word.clone().into(),
            self.category.clone().into(),
            self.emotion.clone().into(),
            self.humanity_score.into(),
            self.waveform.clone().into(),
        ]
    }
}

fn default_mint_function() -> String {
    "mintVoice".to_string()
}

fn default_mint_fee_wei() -> u64 {
    DEFAULT_MINT_FEE_WEI
}

/// Where and how to mint; loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInterface {
    pub address: String,
    #[serde(default = "default_mint_function")]
    pub mint_function: String,
    #[serde(default = "default_mint_fee_wei")]
    pub mint_fee_wei: u64,
    /// Contract ABI, passed through untouched to the minter
    #[serde(default)]
    pub abi: serde_json::Value,
}

impl ContractInterface {
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let contract = Self {
            address: address.into(),
            mint_function: default_mint_function(),
            mint_fee_wei: DEFAULT_MINT_FEE_WEI,
            abi: serde_json::Value::Null,
        };
        contract.validate()?;
        Ok(contract)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read contract interface {}", path.display()))?;
        let contract: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse contract interface {}", path.display()))?;
        contract.validate()?;
        log::info!(
            "[Mint] Loaded contract {} ({})",
            contract.address,
            contract.mint_function
        );
        Ok(contract)
    }

    fn validate(&self) -> Result<()> {
        let digits = match self.address.strip_prefix("0x") {
            Some(digits) => digits,
            None => bail!("contract address must start with 0x: {}", self.address),
        };
        if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("contract address must be 20 hex-encoded bytes: {}", self.address);
        }
        if digits.chars().all(|c| c == '0') {
            log::warn!("[Mint] Contract address is the zero address");
        }
        Ok(())
    }

    pub fn mint_call(&self, request: &MintRequest) -> ContractCall {
        ContractCall {
            address: self.address.clone(),
            function: self.mint_function.clone(),
            args: request.args(),
            value_wei: self.mint_fee_wei,
        }
    }
}

/// A fully specified, unsigned contract transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCall {
    pub address: String,
    pub function: String,
    pub args: Vec<serde_json::Value>,
    pub value_wei: u64,
}

/// Wallet / chain integration supplied by the application
pub trait VoiceMinter {
    /// Submit the call and return the transaction hash
    fn submit(&self, call: &ContractCall) -> Result<String>;
}

/// Minter that keeps every call in memory instead of sending it
#[derive(Debug, Default)]
pub struct RecordingMinter {
    calls: Mutex<Vec<ContractCall>>,
}

impl RecordingMinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl VoiceMinter for RecordingMinter {
    fn submit(&self, call: &ContractCall) -> Result<String> {
        let mut calls = self
            .calls
            .lock()
            .map_err(|_| anyhow::anyhow!("recording minter lock poisoned"))?;
        calls.push(call.clone());
        Ok(format!("0x{:064x}", calls.len()))
    }
}
