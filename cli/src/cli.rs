use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "logscan")]
#[command(
    author,
    version,
    about = "Scans fetched service logs for error blocks and writes a report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract ERROR/Exception blocks from the latest fetched log set
    Analyze {
        /// Directory holding the fetched log files
        #[clap(long, default_value = "docs/dev-logs/remote-logs")]
        log_dir: String,

        /// Directory where the analysis report is written
        #[clap(long, default_value = "docs/dev-logs/analysis-reports")]
        report_dir: String,

        /// Number of trailing lines inspected per file
        #[clap(long, default_value_t = 5000)]
        window: usize,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}
