use std::net::{IpAddr, SocketAddr};

use clap::{ArgAction, Args, Parser, Subcommand};
use paper_universe::universe::{CategoryFilter, FilterSpec, MAX_YEAR, MIN_YEAR, YearRange};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Seed for the paper corpus and connection sampling.
    #[arg(long, global = true, env = "PAPER_UNIVERSE_SEED")]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive paper universe (default).
    Explore,
    /// Run the mock chat endpoint.
    Serve(ServeArgs),
    /// Print the filtered corpus, its connections and clusters.
    Corpus(CorpusArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1", env = "PAPER_UNIVERSE_HOST")]
    pub host: IpAddr,

    #[arg(long, default_value_t = 3001, env = "PAPER_UNIVERSE_PORT")]
    pub port: u16,
}

impl ServeArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Args)]
pub struct CorpusArgs {
    /// Case-insensitive text matched against titles and abstracts.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Category id or name, or "all".
    #[arg(long, default_value = "all")]
    pub category: CategoryFilter,

    #[arg(long, default_value_t = MIN_YEAR)]
    pub from: i32,

    #[arg(long, default_value_t = MAX_YEAR)]
    pub to: i32,

    /// Emit JSON instead of a text summary.
    #[arg(long)]
    pub json: bool,
}

impl CorpusArgs {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            years: YearRange::new(self.from, self.to),
        }
    }
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
