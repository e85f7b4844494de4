use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use titlefind_resolver::{Resolver, ResolverConfig};

/// Resolve a movie or TV title to candidate IMDb identifiers.
#[derive(Parser, Debug)]
#[command(name = "titlefind", version, about)]
struct Args {
    /// Title to search for.
    title: String,

    /// Release year as it appears in the source data; non-numeric values
    /// are ignored.
    #[arg(long)]
    year: Option<String>,

    /// Maximum candidates to return.
    #[arg(long, default_value_t = 5)]
    max_results: usize,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Print candidates as a JSON array instead of tab-separated lines.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let resolver = Resolver::new(ResolverConfig {
        timeout: Duration::from_secs(args.timeout_secs),
        max_results: args.max_results,
        ..Default::default()
    });

    let candidates = resolver.resolve(&args.title, args.year.as_deref()).await;
    info!(title = %args.title, count = candidates.len(), "resolution complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else if candidates.is_empty() {
        // An empty list is "no match found", a normal outcome: say so on
        // stderr and exit zero so bulk callers keep going.
        eprintln!("no matches for '{}'", args.title);
    } else {
        for c in &candidates {
            println!("{}\t{}", c.id, c.display);
        }
    }

    Ok(())
}
