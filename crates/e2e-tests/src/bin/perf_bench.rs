use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use e2e_tests::synthetic_profiles;
use prestige_honors::aggregate_honors;
use prestige_ranking::RankingEngine;
use prestige_search::{SearchFilters, SearchOptions, SearchService, StaticProfileSource};
use prestige_types::{GroupBy, RankingConfig, SearchConfig};

const SMALL_PROFILE_COUNT: usize = 1_000;
const MEDIUM_PROFILE_COUNT: usize = 10_000;
const DEFAULT_ITERATIONS: usize = 5;
const DEFAULT_SEED: u64 = 42;

const QUERIES: &[&str] = &[
    "Ana Garcia",
    "garcia",
    "cardiology",
    "neurosurgry",
    "Tokyo",
    "Eriksn",
    "pedro novak",
    "",
];

#[derive(Parser, Debug)]
#[command(name = "perf_bench", about = "Profile search and ranking benchmark")]
struct Args {
    #[arg(long, value_enum, default_value = "small")]
    tier: DatasetTier,
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(long, default_value = "crates/e2e-tests/benchmarks")]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum DatasetTier {
    Small,
    Medium,
}

impl DatasetTier {
    fn profile_count(self) -> usize {
        match self {
            DatasetTier::Small => SMALL_PROFILE_COUNT,
            DatasetTier::Medium => MEDIUM_PROFILE_COUNT,
        }
    }

    fn label(self) -> &'static str {
        match self {
            DatasetTier::Small => "small",
            DatasetTier::Medium => "medium",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
struct StepMetrics {
    p50_ms: f64,
    p90_ms: f64,
    p99_ms: f64,
    samples: usize,
}

#[derive(Debug, Serialize)]
struct BenchmarkOutput {
    tier: DatasetTier,
    profiles: usize,
    iterations: usize,
    generated_at: String,
    steps: BTreeMap<String, StepMetrics>,
}

#[derive(Default)]
struct SampleCollector {
    durations: HashMap<String, Vec<f64>>,
}

impl SampleCollector {
    fn record(&mut self, step: &str, started: Instant) {
        self.durations
            .entry(step.to_string())
            .or_default()
            .push(started.elapsed().as_secs_f64() * 1000.0);
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir).map_err(|e| format!("Failed to create out dir: {e}"))?;

    let profiles = synthetic_profiles(args.tier.profile_count(), args.seed);
    let mut collector = SampleCollector::default();

    for iteration in 0..args.iterations {
        run_iteration(&profiles, iteration, &mut collector).await?;
    }

    let output = BenchmarkOutput {
        tier: args.tier,
        profiles: profiles.len(),
        iterations: args.iterations,
        generated_at: Utc::now().to_rfc3339(),
        steps: build_metrics(&collector),
    };

    let json = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
    let table = render_table(&output);
    write_outputs(&args.out_dir, &json, &table)?;

    println!("{}", table);
    println!("\n{}", json);
    Ok(())
}

async fn run_iteration(
    profiles: &[prestige_types::ProfileRecord],
    iteration: usize,
    collector: &mut SampleCollector,
) -> Result<(), String> {
    let source = Arc::new(StaticProfileSource::new(profiles.to_vec()));
    let service = SearchService::new(source.clone(), &SearchConfig::default());

    let started = Instant::now();
    service.rebuild().await.map_err(|e| e.to_string())?;
    collector.record("index_build", started);

    let filters = SearchFilters::default();
    let options = SearchOptions::default();
    for query in QUERIES {
        let started = Instant::now();
        let cold = service.search(query, &filters, &options).await;
        collector.record("search_cold", started);

        let started = Instant::now();
        let warm = service.search(query, &filters, &options).await;
        collector.record("search_cached", started);

        if !Arc::ptr_eq(&cold, &warm) {
            return Err(format!("iteration {iteration}: {query:?} missed the cache"));
        }
    }

    let started = Instant::now();
    let filtered = SearchFilters::default().with_country("usa").with_role("surgeon");
    service.search("", &filtered, &options).await;
    collector.record("search_filtered_browse", started);

    let config = RankingConfig {
        group_by: GroupBy::SpecialtyGroup,
        ..RankingConfig::default()
    };
    let engine = RankingEngine::new(source, &config);
    let started = Instant::now();
    let table = engine.rank_refreshed().await;
    collector.record("ranking_table", started);
    if table.len() != profiles.len() {
        return Err(format!(
            "iteration {iteration}: ranked {} of {} profiles",
            table.len(),
            profiles.len()
        ));
    }

    let started = Instant::now();
    let points: u64 = profiles
        .iter()
        .map(|p| u64::from(aggregate_honors(&p.awards).total_points))
        .sum();
    collector.record("honors_aggregate", started);
    std::hint::black_box(points);

    Ok(())
}

fn build_metrics(collector: &SampleCollector) -> BTreeMap<String, StepMetrics> {
    let mut steps = BTreeMap::new();
    for (step, durations) in &collector.durations {
        let mut sorted = durations.clone();
        sorted.sort_by(f64::total_cmp);
        steps.insert(
            step.clone(),
            StepMetrics {
                p50_ms: percentile(&sorted, 50.0),
                p90_ms: percentile(&sorted, 90.0),
                p99_ms: percentile(&sorted, 99.0),
                samples: durations.len(),
            },
        );
    }
    steps
}

fn percentile(values: &[f64], percentile: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let rank = (percentile / 100.0) * (values.len() as f64 - 1.0);
    let low = rank.floor() as usize;
    let high = rank.ceil() as usize;
    if low == high {
        values[low]
    } else {
        let weight = rank - low as f64;
        values[low] + (values[high] - values[low]) * weight
    }
}

fn render_table(output: &BenchmarkOutput) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Benchmark Results (tier={}, profiles={}, iterations={})",
        output.tier.label(),
        output.profiles,
        output.iterations
    ));
    lines.push("step\tp50_ms\tp90_ms\tp99_ms\tsamples".to_string());

    for (step, metrics) in &output.steps {
        lines.push(format!(
            "{}\t{:.3}\t{:.3}\t{:.3}\t{}",
            step, metrics.p50_ms, metrics.p90_ms, metrics.p99_ms, metrics.samples
        ));
    }
    lines.join("\n")
}

fn write_outputs(out_dir: &Path, json: &str, table: &str) -> Result<(), String> {
    fs::write(out_dir.join("latest.json"), json).map_err(|e| e.to_string())?;
    fs::write(out_dir.join("latest.txt"), table).map_err(|e| e.to_string())?;
    Ok(())
}
