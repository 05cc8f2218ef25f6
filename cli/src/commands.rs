pub mod check;
pub mod validate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipgate")]
#[command(about = "Check client addresses against an IP allow-list.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print warnings, errors and the verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log every parsed allow-list entry
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse an allow-list and show the ranges it contains
    #[command(alias = "v")]
    Validate {
        /// Comma-separated addresses and CIDR blocks, e.g. "192.168.1.1, 10.0.0.0/8"
        ranges: String,
    },
    /// Check whether a client address is permitted by an allow-list
    #[command(alias = "c")]
    Check {
        /// Address of the client, IPv4 or IPv6
        client: String,
        /// Comma-separated addresses and CIDR blocks
        ranges: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
