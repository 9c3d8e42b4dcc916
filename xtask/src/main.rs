use anyhow::{Context, Result};
use asymptote::Complexity;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Asymptote workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the growth-class benchmarks and report observed scaling
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCHES: &[&str] = &["complexity_benchmark", "connectivity_benchmark"];

/// Subset of criterion's `benchmark.json`.
#[derive(Deserialize)]
struct BenchmarkMeta {
    group_id: String,
    value_str: Option<String>,
}

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Mean time in nanoseconds per input size, keyed by benchmark group.
type Results = BTreeMap<String, BTreeMap<usize, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.5");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd.status().with_context(|| format!("Failed to run bench {bench}"))?;
        if !status.success() {
            anyhow::bail!("Benchmark {bench} failed");
        }
        println!("Finished {bench} in {:.2?}", start.elapsed());
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Growth Class Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Class | n | Mean | Observed ratio | Expected ratio |")?;
    writeln!(file, "|---|---|---|---|---|---|")?;

    for (group, by_size) in &results {
        let class = group
            .split_once('-')
            .and_then(|(prefix, _)| prefix.parse::<Complexity>().ok());
        let class_str = class.map_or_else(|| "?".to_owned(), |c| c.to_string());

        let mut previous: Option<(usize, f64)> = None;
        for (&n, &mean_ns) in by_size {
            let (observed, expected) = match (previous, class) {
                (Some((prev_n, prev_ns)), Some(class)) if prev_ns > 0.0 => (
                    format!("{:.2}x", mean_ns / prev_ns),
                    format!("{:.2}x", class.expected_ratio(prev_n, n)),
                ),
                _ => ("-".to_owned(), "-".to_owned()),
            };
            writeln!(
                file,
                "| {group} | {class_str} | {n} | {} | {observed} | {expected} |",
                format_ns(mean_ns)
            )?;
            previous = Some((n, mean_ns));
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} us", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        // Structure: .../<group>/<size>/new/{benchmark,estimates}.json
        if path.file_name().and_then(|s| s.to_str()) == Some("new") {
            let meta_path = path.join("benchmark.json");
            let estimates_path = path.join("estimates.json");
            if !meta_path.exists() || !estimates_path.exists() {
                continue;
            }

            let meta: BenchmarkMeta = serde_json::from_str(&fs::read_to_string(&meta_path)?)
                .with_context(|| format!("parse {}", meta_path.display()))?;
            let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&estimates_path)?)
                .with_context(|| format!("parse {}", estimates_path.display()))?;

            // Unparameterized benchmarks are reported as a single size-0 row.
            let n = meta
                .value_str
                .as_deref()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(0);
            results
                .entry(meta.group_id)
                .or_default()
                .insert(n, estimates.mean.point_estimate);
        } else {
            collect_results(&path, results)?;
        }
    }
    Ok(())
}
