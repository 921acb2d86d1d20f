use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tracker-tui")]
#[command(about = "Terminal client for logging time against tracks")]
pub struct Cli {
    /// Server to talk to, overriding `api_url` from the config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print config path and create default file if missing
    ConfigPath,
}
