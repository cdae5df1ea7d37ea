//! RideFaff command line entry point.

use anyhow::Context;
use clap::{Parser, Subcommand};
use ridefaff::faff::buckets::classify;
use ridefaff::faff::{analyze_activity, DurationBucket, MergePolicy};
use ridefaff::storage::config::{load_config, load_config_from};
use ridefaff::telemetry::fit;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Find slow periods and recording gaps in a FIT activity")]
    Analyze(AnalyzeArgs),
    #[command(about = "List duration buckets")]
    Buckets,
}

#[derive(Debug, clap::Args)]
struct AnalyzeArgs {
    /// FIT activity file
    file: PathBuf,
    /// Comma-separated bucket ids (e.g. 2to5,5to10)
    #[arg(long, value_delimiter = ',')]
    buckets: Option<Vec<String>>,
    /// Minimum silence counted as a recording gap, ms
    #[arg(long)]
    gap_threshold_ms: Option<i64>,
    /// Do not merge neighbouring intervals
    #[arg(long)]
    raw: bool,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Cli::parse().command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Buckets => {
            for bucket in DurationBucket::ALL {
                println!("{:<8} {}", bucket.id(), bucket.label());
            }
            Ok(())
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
    .context("Failed to load config")?;

    let mut options = config.to_options();
    if let Some(ids) = &args.buckets {
        options.selected_buckets = parse_buckets(ids);
    }
    if let Some(threshold) = args.gap_threshold_ms {
        options.gap_threshold_ms = threshold;
    }
    if args.raw {
        options.merge_policy = MergePolicy::Raw;
    }

    let activity = fit::decode_file(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let result = analyze_activity(&activity.samples, &activity.session, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for interval in &result.intervals {
        let kind = if interval.is_gap() { "gap " } else { "slow" };
        let bucket = classify(interval.duration_minutes(), interval.duration_hours())
            .map_or("-", |bucket| bucket.label());
        println!(
            "{} {} -> {}  {:>6}s  {:<10} {:>4} samples  {:.0}m",
            kind,
            interval.start_time.format("%H:%M:%S"),
            interval.end_time.format("%H:%M:%S"),
            interval.rounded_seconds(),
            bucket,
            interval.sample_count(),
            interval.start_distance,
        );
    }
    println!();
    println!(
        "{} slow periods, {} gaps, {}s total ({}s in gaps)",
        result.stats.slow_count,
        result.stats.gap_count,
        result.stats.total_duration_seconds,
        result.stats.gap_duration_seconds
    );
    for entry in &result.stats.range_breakdown {
        println!("  {:<10} {:>3}  {:>6}s", entry.label, entry.count, entry.total_duration_seconds);
    }
    if let Some(fraction) = result.faff_fraction {
        println!("Faffing for {:.1}% of elapsed time", fraction * 100.0);
    }

    Ok(())
}

/// Parse bucket ids, skipping unknown ones.
fn parse_buckets(ids: &[String]) -> Vec<DurationBucket> {
    ids.iter()
        .filter_map(|id| match id.parse::<DurationBucket>() {
            Ok(bucket) => Some(bucket),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect()
}
