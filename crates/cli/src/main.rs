use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// oledcfg - build-configuration selector for the SSD1315 OLED driver
///
/// Maps the declared framework tokens (arguments or PIOFRAMEWORK) onto the
/// preprocessor defines and source exclusions the driver library needs.
#[derive(Parser)]
#[command(name = "oledcfg")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Show the selected framework configuration
  Select {
    /// Framework tokens (default: read from PIOFRAMEWORK)
    tokens: Vec<String>,

    /// Print the selection record as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print compiler define flags, one per line
  Defines {
    /// Framework tokens (default: read from PIOFRAMEWORK)
    tokens: Vec<String>,

    /// Also emit the library enable flag (-DOLED_SSD1315_ENABLE=1)
    #[arg(long)]
    enable: bool,
  },

  /// Print the replacement src_filter line, if any
  Filter {
    /// Framework tokens (default: read from PIOFRAMEWORK)
    tokens: Vec<String>,
  },

  /// Write the selection record as JSON to a directory
  Emit {
    /// Framework tokens (default: read from PIOFRAMEWORK)
    tokens: Vec<String>,

    /// Output directory (default: current directory)
    #[arg(long, default_value = ".")]
    out: PathBuf,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let cli = Cli::parse();

  match cli.command {
    Commands::Select { tokens, json } => cmd::cmd_select(tokens, json),
    Commands::Defines { tokens, enable } => cmd::cmd_defines(tokens, enable),
    Commands::Filter { tokens } => cmd::cmd_filter(tokens),
    Commands::Emit { tokens, out } => cmd::cmd_emit(tokens, &out),
  }
}
