#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use triple_scan::{export_cmd, scan_cmd};

#[derive(Parser, Debug)]
#[command(name = "triple-scan")]
#[command(about = "Season scanner for track & field triples", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set TRIPLE_SCAN_LOG)
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect triples across all cached partitions and persist them
    Scan {
        /// Directory holding per-partition meet data ({year}_{state}.json)
        #[arg(long)]
        data_dir: std::path::PathBuf,
        /// Path to the triples store (JSONL)
        #[arg(long, default_value = "triples.jsonl")]
        store: std::path::PathBuf,
    },

    /// Assemble best-mark rows from a triples store and write CSV
    Export {
        /// Path to the triples store (JSONL)
        #[arg(long, default_value = "triples.jsonl")]
        store: std::path::PathBuf,
        /// Output CSV path (stdout when omitted)
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },

    /// Scan and export in one pass
    Run {
        /// Directory holding per-partition meet data ({year}_{state}.json)
        #[arg(long)]
        data_dir: std::path::PathBuf,
        /// Path to the triples store (JSONL)
        #[arg(long, default_value = "triples.jsonl")]
        store: std::path::PathBuf,
        /// Output CSV path (stdout when omitted)
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("TRIPLE_SCAN_LOG").unwrap_or_else(|_| {
        if verbose { "triple_scan=debug".to_string() } else { "triple_scan=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Scan { data_dir, store } => scan_cmd::run(data_dir, store),
        Commands::Export { store, output } => export_cmd::run(store, output),
        Commands::Run { data_dir, store, output } => {
            scan_cmd::run(data_dir, store.clone()).and_then(|_| export_cmd::run(store, output))
        }
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
