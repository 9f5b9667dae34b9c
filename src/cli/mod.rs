//! CLI module for the key gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Referral Key Gateway - referral-gated access to an upstream key issuer
#[derive(Parser)]
#[command(name = "referral-key-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway (default)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
