use std::{fs, path::{Path, PathBuf}};

use alloy_primitives::{Address, U256};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use cook_actions::{Cauldron, CATALOG};
use cook_encoder::{
    approval::{sign_approval, signer_address, ApprovalRequest},
    Cooker, Intent,
};
use k256::ecdsa::SigningKey;
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Compile cauldron intents into `cook` / `borrow` calldata.
///
/// Output is JSON on stdout; logs go to stderr (`RUST_LOG=cook_encoder=debug`).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an intent JSON for a cauldron and print the transaction fields.
    Compile {
        /// Cauldron description (name, chainId, contract, leverageSwapper).
        #[arg(long, env = "COOK_CAULDRON")]
        cauldron: PathBuf,

        /// Intent JSON, tagged by `operation`.
        #[arg(long, env = "COOK_INTENT")]
        intent: PathBuf,

        /// Always emit a `cook` batch, even for borrow-only intents.
        #[arg(long)]
        force_batch: bool,
    },

    /// Print the action descriptor catalog.
    Catalog,

    /// Sign a BentoBox master-contract approval for use in an intent.
    SignApproval {
        /// Path to a file containing the user's private key.
        #[arg(long, env = "COOK_PRIVATE_KEY_PATH", conflicts_with = "private_key")]
        key_path: Option<PathBuf>,

        /// Private key (hex string, 0x...).
        #[arg(long, env = "COOK_PRIVATE_KEY", conflicts_with = "key_path")]
        private_key: Option<String>,

        /// Approving user; defaults to the key's address.
        #[arg(long)]
        user: Option<Address>,

        #[arg(long)]
        master_contract: Address,

        #[arg(long)]
        bentobox: Address,

        #[arg(long, default_value_t = 1)]
        chain_id: u64,

        /// BentoBox `nonces(user)`.
        #[arg(long, default_value_t = U256::ZERO)]
        nonce: U256,

        /// Sign a revocation instead of an approval.
        #[arg(long)]
        revoke: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compile {
            cauldron,
            intent,
            force_batch,
        } => compile(&cauldron, &intent, force_batch),
        Command::Catalog => {
            println!("{}", serde_json::to_string_pretty(CATALOG)?);
            Ok(())
        }
        Command::SignApproval {
            key_path,
            private_key,
            user,
            master_contract,
            bentobox,
            chain_id,
            nonce,
            revoke,
        } => {
            let key = load_key(key_path.as_deref(), private_key.as_deref())?;
            let request = ApprovalRequest {
                chain_id,
                bentobox,
                user: user.unwrap_or_else(|| signer_address(&key)),
                master_contract,
                approved: !revoke,
                nonce,
            };
            let approval = sign_approval(&request, &key).context("failed signing approval")?;
            println!("{}", serde_json::to_string_pretty(&approval)?);
            Ok(())
        }
    }
}

fn compile(cauldron_path: &Path, intent_path: &Path, force_batch: bool) -> Result<()> {
    let cauldron: Cauldron = read_json(cauldron_path)?;
    let intent: Intent = read_json(intent_path)?;

    let to = cauldron.address();
    let cooker = Cooker::new(cauldron).with_direct_borrow(!force_batch);
    let call = cooker
        .compile(&intent)
        .with_context(|| format!("failed compiling {}", intent_path.display()))?;

    tracing::info!(kind = call.kind(), actions = call.action_count(), %to, "compiled");
    let out = json!({
        "to": to,
        "value": call.value().to_string(),
        "data": format!("0x{}", hex::encode(call.calldata())),
        "kind": call.kind(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed parsing JSON in {}", path.display()))
}

fn load_key(key_path: Option<&Path>, private_key: Option<&str>) -> Result<SigningKey> {
    let encoded = match (key_path, private_key) {
        (Some(path), _) => fs::read_to_string(path)
            .with_context(|| format!("failed reading key file {}", path.display()))?,
        (None, Some(key)) => key.to_string(),
        (None, None) => {
            return Err(anyhow!(
                "missing signing key: provide --key-path or --private-key (or set COOK_PRIVATE_KEY_PATH/COOK_PRIVATE_KEY)"
            ))
        }
    };
    let trimmed = encoded.trim();
    let raw = hex::decode(trimmed.strip_prefix("0x").unwrap_or(trimmed))
        .context("private key is not hex")?;
    SigningKey::from_slice(&raw).map_err(|e| anyhow!("invalid private key: {e}"))
}
