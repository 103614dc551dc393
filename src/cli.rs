//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "logscope",
    version,
    about = "Query a directory of tab-delimited log files",
    long_about = "logscope parses Timestamp<TAB>Level<TAB>Component<TAB>Message log files \
                  on every invocation and answers listing, lookup and statistics queries \
                  as JSON."
)]
pub struct Cli {
    /// Directory holding the log files (overrides LOG_DIR)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// File-name glob inside the directory (overrides LOG_FILE_GLOB)
    #[arg(long, global = true)]
    pub glob: Option<String>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List entries matching optional filters, one page at a time
    List(ListArgs),

    /// Fetch a single entry by its id
    Get {
        log_id: String,
    },

    /// Count entries by level and component
    Stats,

    /// Check a timestamp and print it in canonical form
    ParseTimestamp {
        value: String,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Exact level, e.g. ERROR
    #[arg(long)]
    pub level: Option<String>,

    /// Exact component name
    #[arg(long)]
    pub component: Option<String>,

    /// Earliest timestamp to include ("YYYY-MM-DD HH:MM:SS" or "YYYY-MM-DDTHH:MM:SS")
    #[arg(long = "start", alias = "start-time")]
    pub start: Option<String>,

    /// Latest timestamp to include
    #[arg(long = "end", alias = "end-time")]
    pub end: Option<String>,

    /// Page size (defaults to DEFAULT_LIMIT)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Matches to skip before the page starts
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,
}
