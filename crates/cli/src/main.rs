//! Demand-paging simulator CLI.
//!
//! This binary translates a list of logical addresses against a backing-store image. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, then command-line overrides.
//! 2. **Translation:** One report line per address (`Virtual address / Physical address / Value`).
//! 3. **Summary:** Fault and TLB statistics, as text or JSON.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pagesim_core::config::{Config, MalformedLinePolicy, ReplacementPolicy};
use pagesim_core::sim::loader;
use pagesim_core::{Simulator, VmError};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Demand-paging virtual memory simulator",
    long_about = "Translate logical addresses through a TLB and page table, demand-loading pages from a backing store.\n\nExamples:\n  pagesim BACKING_STORE.bin addresses.txt\n  pagesim BACKING_STORE.bin addresses.txt --frames 128 --policy lru\n  pagesim BACKING_STORE.bin addresses.txt --config sim.json --quiet --stats json"
)]
struct Cli {
    /// Backing-store image (pages stored back to back).
    backing_store: PathBuf,

    /// Address file: one decimal logical address per line.
    addresses: PathBuf,

    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bytes per page and per frame.
    #[arg(long)]
    page_size: Option<usize>,

    /// Number of logical pages.
    #[arg(long)]
    pages: Option<usize>,

    /// Number of physical frames.
    #[arg(long)]
    frames: Option<usize>,

    /// Number of TLB entries (0 disables the TLB).
    #[arg(long)]
    tlb_size: Option<usize>,

    /// Frame replacement policy (fifo or lru).
    #[arg(long)]
    policy: Option<ReplacementPolicy>,

    /// TLB replacement policy (fifo or lru).
    #[arg(long)]
    tlb_policy: Option<ReplacementPolicy>,

    /// What to do with malformed address lines (abort or skip).
    #[arg(long)]
    on_malformed: Option<MalformedLinePolicy>,

    /// Suppress per-address output.
    #[arg(short, long)]
    quiet: bool,

    /// Summary format.
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    stats: StatsFormat,

    /// Log every translation at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StatsFormat {
    Text,
    Json,
}

impl Cli {
    /// Builds the effective configuration: defaults, then file, then flags.
    fn config(&self) -> Result<Config, VmError> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        if let Some(v) = self.page_size {
            config.memory.page_size = v;
        }
        if let Some(v) = self.pages {
            config.memory.num_pages = v;
        }
        if let Some(v) = self.frames {
            config.memory.num_frames = v;
        }
        if let Some(v) = self.tlb_size {
            config.tlb.capacity = v;
        }
        if let Some(v) = self.policy {
            config.memory.policy = v;
        }
        if let Some(v) = self.tlb_policy {
            config.tlb.policy = v;
        }
        if let Some(v) = self.on_malformed {
            config.input.on_malformed = v;
        }
        if self.verbose {
            config.general.trace_translations = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Filter used when `RUST_LOG` is unset. Verbose output stays limited to our own crates.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,pagesim_core=debug,pagesim=debug"
    } else {
        "warn"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), VmError> {
    let config = cli.config()?;
    tracing::debug!(?config, "effective configuration");

    let store = loader::open_backing_store(&cli.backing_store, &config)?;
    let trace = loader::load_trace(&cli.addresses, &config)?;
    let mut sim = Simulator::new(&config, store)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = if cli.quiet {
        sim.run(&trace.addresses, &mut io::sink())?
    } else {
        sim.run(&trace.addresses, &mut out)?
    };

    match cli.stats {
        StatsFormat::Text => stats.write_summary(&mut out)?,
        StatsFormat::Json => stats.write_json(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
