use clap::Parser;
use referral_key_gateway::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve(args) => cli::serve::run(args).await,
    }
}
