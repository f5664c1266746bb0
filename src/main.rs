mod app;
mod config;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use paper_universe::chat;
use paper_universe::universe::{
    ClusterSummary, Connection, Corpus, CorpusSummary, FilterSpec, Paper, aggregate_clusters, filter_papers,
    synthesize_connections,
};
use paper_universe::util::truncate_chars;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, CorpusArgs, ServeArgs};

#[derive(Serialize)]
struct CorpusReport<'a> {
    summary: &'a CorpusSummary,
    filter: &'a FilterSpec,
    papers: &'a [&'a Paper],
    connections: &'a [Connection],
    clusters: &'a [ClusterSummary],
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    match cli.command {
        None | Some(Command::Explore) => explore(cli.seed),
        Some(Command::Serve(args)) => serve(args),
        Some(Command::Corpus(args)) => print_corpus(cli.seed, &args),
    }
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn session_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn explore(seed: Option<u64>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Paper Universe",
        options,
        Box::new(move |cc| Ok(Box::new(app::UniverseApp::new(cc, session_rng(seed))))),
    )
    .map_err(|error| anyhow!("failed to start the explorer window: {error}"))
}

fn serve(args: ServeArgs) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    runtime.block_on(chat::serve(args.addr()))
}

fn print_corpus(seed: Option<u64>, args: &CorpusArgs) -> Result<()> {
    let mut rng = session_rng(seed);
    let corpus = Corpus::from_rng(&mut rng);
    let spec = args.filter_spec();

    let summary = corpus.summary();
    let filtered = filter_papers(corpus.iter(), &spec);
    let connections = synthesize_connections(&filtered, &mut rng);
    let clusters = aggregate_clusters(&filtered);

    if args.json {
        let report = CorpusReport {
            summary: &summary,
            filter: &spec,
            papers: &filtered,
            connections: &connections,
            clusters: &clusters,
        };
        let text = serde_json::to_string_pretty(&report).context("failed to encode corpus")?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "{} of {} papers match (search {:?}, category {}, years {}-{})",
        filtered.len(),
        summary.papers,
        spec.search,
        spec.category,
        spec.years.start(),
        spec.years.end()
    );
    for line in summary_lines(&summary) {
        println!("  {line}");
    }
    println!(
        "{} connections, {} clusters with at least three members",
        connections.len(),
        clusters.len()
    );
    for paper in filtered.iter().take(20) {
        println!(
            "  {:<10} {} [{}] impact {}  {}",
            paper.id,
            paper.year,
            paper.category,
            paper.impact_score,
            truncate_chars(&paper.title, 72)
        );
    }
    if filtered.len() > 20 {
        println!("  ... {} more", filtered.len() - 20);
    }

    Ok(())
}

fn summary_lines(summary: &CorpusSummary) -> Vec<String> {
    let mut lines = summary
        .by_category
        .iter()
        .map(|count| format!("{:<18} {:>4}", count.name, count.count))
        .collect::<Vec<_>>();

    let years = match (summary.first_year, summary.last_year) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "none".to_owned(),
    };
    lines.push(format!("years {years}, {} NASA centres", summary.centers));
    lines.push(format!(
        "{} pulsing papers, mean impact {:.1}",
        summary.pulsing, summary.mean_impact
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines_cover_every_field() {
        let summary = Corpus::with_seed(3).summary();
        let lines = summary_lines(&summary);

        assert_eq!(lines.len(), summary.by_category.len() + 2);
        let years = lines[lines.len() - 2].as_str();
        assert!(years.contains(&format!(
            "{}-{}",
            summary.first_year.expect("non-empty corpus"),
            summary.last_year.expect("non-empty corpus")
        )));
        assert!(years.contains(&format!("{} NASA centres", summary.centers)));
        let pulsing = lines[lines.len() - 1].as_str();
        assert!(pulsing.starts_with(&format!("{} pulsing", summary.pulsing)));
        assert!(pulsing.ends_with(&format!("{:.1}", summary.mean_impact)));
    }

    #[test]
    fn json_report_includes_summary() {
        let corpus = Corpus::with_seed(3);
        let summary = corpus.summary();
        let spec = FilterSpec::default();
        let filtered = filter_papers(corpus.iter(), &spec);
        let report = CorpusReport {
            summary: &summary,
            filter: &spec,
            papers: &filtered[..2],
            connections: &[],
            clusters: &[],
        };

        let value = serde_json::to_value(&report).expect("report serializes");
        assert_eq!(value["summary"]["papers"], 608);
        assert_eq!(value["summary"]["pulsing"], summary.pulsing);
        assert!(value["summary"]["mean_impact"].is_number());
        assert_eq!(value["papers"].as_array().map(Vec::len), Some(2));
    }
}
