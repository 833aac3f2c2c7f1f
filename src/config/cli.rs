use clap::Parser;

/// Neither flag changes what gets converted; the job table is fixed.
#[derive(Debug, Clone, Parser)]
#[command(name = "dataset-convert")]
#[command(about = "Convert the scorecard CSV datasets next to this program into JSON")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log elapsed time and memory usage per file")]
    pub monitor: bool,
}
