// CLASSIFICATION: COMMUNITY
// Filename: args.rs v1.1
// Date Modified: 2026-10-17
// Author: Lukas Bower

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Command line for the `gnb-registry` operator tool.
#[derive(Debug, Parser)]
#[command(name = "gnb-registry", version, about = "Inspect and edit the console's gNB registry")]
pub struct Cli {
    /// Storage directory; overrides config and GNB_REGISTRY_DIR.
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Storage key; overrides config and GNB_REGISTRY_KEY.
    #[arg(long, global = true, value_name = "KEY")]
    pub key: Option<String>,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered gNBs in insertion order
    List,
    /// Show one gNB with its UE lists
    Show { gnb_id: String },
    /// Register a gNB from a saved backend reply ("-" reads stdin)
    Register {
        #[arg(long)]
        ip: String,
        #[arg(long)]
        port: String,
        response: PathBuf,
    },
    /// Remove a gNB by id
    Remove { gnb_id: String },
    /// Set the NR-DC indicator of a RAN UE
    Nrdc {
        gnb_id: String,
        imsi: String,
        #[arg(action = ArgAction::Set)]
        indicator: bool,
    },
    /// RAN UEs across all gNBs
    RanUes,
    /// Xn UEs across all gNBs
    XnUes,
    /// Dashboard totals
    Summary,
}
