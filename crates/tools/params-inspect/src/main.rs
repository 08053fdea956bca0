//! Operator tool for inspecting Skeincoin network parameters
//!
//! This tool allows:
//! - Dumping a network profile
//! - Listing checkpoints
//! - Checking a block hash against the checkpoints
//! - Estimating verification progress for a chain tip

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use skein_params::{BlockHash, ChainContext, ChainTip, ParamsConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "params-inspect")]
#[command(about = "Skeincoin network parameter inspector", long_about = None)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct NetworkArgs {
    /// Network: main, test or regtest
    #[arg(short, long, global = true)]
    network: Option<String>,

    /// JSON config file; --network overrides its network
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Bypass checkpoint enforcement
    #[arg(long, global = true)]
    no_checkpoints: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active profile as JSON
    Show,

    /// List checkpoints of the active profile
    Checkpoints,

    /// Check a block hash against the checkpoints
    CheckBlock {
        /// Block height
        #[arg(long)]
        height: u32,

        /// Block hash (hex)
        #[arg(long)]
        hash: String,
    },

    /// Estimate verification progress
    Progress {
        /// Transactions from genesis through the tip
        #[arg(long)]
        chain_tx: u64,

        /// Tip block timestamp (Unix epoch)
        #[arg(long)]
        tip_time: i64,

        /// Current time (Unix epoch), defaults to now
        #[arg(long)]
        now: Option<i64>,
    },
}

fn load_config(args: &NetworkArgs) -> anyhow::Result<ParamsConfig> {
    let mut config = match &args.config {
        Some(path) => ParamsConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ParamsConfig::default(),
    };
    if let Some(network) = &args.network {
        config.network = network.clone();
    }
    if args.no_checkpoints {
        config.checkpoints = false;
    }
    Ok(config)
}

/// Parse `hash` and run it through the checkpoint gate
fn check_block(context: &ChainContext, height: u32, hash: &str) -> anyhow::Result<BlockHash> {
    let hash: BlockHash = hash.parse().context("invalid block hash")?;
    context.verify_block(height, &hash).map_err(|err| anyhow!(err))?;
    Ok(hash)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(&cli.network)?;
    let context = ChainContext::from_config(&config).context("invalid network configuration")?;
    let params = context.current();
    info!("Using {} network", params.network);

    match cli.command {
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(&params.summary())?);
        }
        Commands::Checkpoints => {
            let store = params.checkpoints();
            println!("{}", serde_json::to_string_pretty(&store.checkpoints())?);
            println!(
                "last checkpoint time {}, {} transactions, {} tx/day",
                store.last_checkpoint_time,
                store.last_checkpoint_tx_count,
                store.transactions_per_day
            );
            println!("total blocks estimate: {}", context.total_blocks_estimate());
        }
        Commands::CheckBlock { height, hash } => {
            let hash = check_block(&context, height, &hash)?;
            println!("accepted: block {} at height {}", hash, height);
        }
        Commands::Progress {
            chain_tx,
            tip_time,
            now,
        } => {
            let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp());
            let tip = ChainTip {
                chain_tx,
                time: tip_time,
            };
            let progress = context.estimate_progress(Some(&tip), now);
            println!("verification progress: {:.6}", progress);
        }
    }

    Ok(())
}
