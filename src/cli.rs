//! CLI struct definitions for the cadvault command-line interface.
//! Dispatch logic lives in `main.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "cadvault",
    version = env!("CARGO_PKG_VERSION"),
    about = "cadvault is the local-first CAD/CAM datastore that agents call on demand: uniform tool and resource operations over the shop-floor model."
)]
pub(crate) struct Cli {
    /// Path to the database file (default: CADVAULT_DB or ./cadvault.db).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create the database file and all entity tables.
    Init,
    /// Populate sample rows (admin user, organization, project).
    Seed,
    /// Serve newline-delimited JSON-RPC requests over stdio.
    Serve,
    /// Execute a single operation and print the response envelope.
    Call {
        /// Operation name: a tool name, "read", or "capabilities".
        #[clap(long)]
        op: String,
        /// JSON parameters for the operation.
        #[clap(long)]
        params: Option<String>,
    },
}
