use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "acromatch")]
#[command(about = "Find files by the initials of the words in their names", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search a directory for files matching a query
    Search {
        query: String,
        /// Directory to search
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
        /// Maximum number of acronym-only results (overrides config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
        /// Skip the plain name search
        #[arg(long)]
        no_primary: bool,
        /// Include hidden files
        #[arg(long)]
        hidden: bool,
        /// Only consider files with this extension (repeatable)
        #[arg(short = 'e', long = "ext")]
        extensions: Vec<String>,
        /// Config file to use instead of the default locations
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show how a query matches a single text
    Explain {
        query: String,
        text: String,
        /// Basename to fall back to when the text does not match
        #[arg(long, requires = "path")]
        basename: Option<String>,
        /// Full path to fall back to after the basename
        #[arg(long, requires = "basename")]
        path: Option<String>,
    },
}
