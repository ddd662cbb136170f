// Copyright 2026 Samvidha Gateway Contributors
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use samvidha_gateway::cli;

#[derive(Parser)]
#[command(
    name = "samvidha-gateway",
    about = "JSON gateway for the Samvidha student portal",
    version,
    after_help = "Run 'samvidha-gateway <command> --help' for details on each command."
)]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the gateway REST API
    Serve {
        /// Address to bind (overrides SAMVIDHA_GATEWAY_BIND)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides SAMVIDHA_GATEWAY_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Log in once and print one page's extraction as JSON
    Fetch {
        /// Page to fetch (attendance, midmarks, profile)
        page: String,
        /// Portal username (roll number)
        #[arg(long, short)]
        username: String,
        /// Portal password; falls back to SAMVIDHA_GATEWAY_PASSWORD
        #[arg(long, short)]
        password: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Serve { bind, port } => cli::serve::run(bind, port).await,
        Commands::Fetch {
            page,
            username,
            password,
        } => cli::fetch::run(&page, &username, password).await,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "samvidha-gateway",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
