use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "betula")]
#[command(about = "Betula - personal bookmark manager", long_about = None)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new post
    Add {
        /// URL to save (any protocol)
        url: String,

        /// Name for the link
        title: String,

        /// Description of the link
        #[arg(short, long, default_value = "")]
        description: String,

        /// Only show the post to yourself
        #[arg(short, long)]
        private: bool,

        /// Categories for the post
        #[arg(short, long, num_args = 0..)]
        categories: Vec<String>,
    },
}
