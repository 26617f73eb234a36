use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use hindi_textrank::evaluation::{evaluate, load_article_pairs};
use hindi_textrank::pipeline::observer::TracingObserver;
use hindi_textrank::{Pipeline, Segmenter, SummarizerConfig, SummaryStats};

#[derive(Debug, Parser)]
#[command(name = "hindi-textrank", version, about = "TextRank summarizer for Hindi text")]
struct Cli {
    /// JSON file with summarizer settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a file, or stdin when no file is given
    Summarize {
        file: Option<PathBuf>,
        /// Fraction of sentences to keep
        #[arg(long)]
        ratio: Option<f64>,
        /// Print a JSON object with the summary and word statistics
        #[arg(long)]
        json: bool,
    },
    /// Summarize input{i}.txt into article{i}_system1.txt
    Batch {
        #[arg(long)]
        input_dir: PathBuf,
        #[arg(long)]
        output_dir: PathBuf,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Score machine summaries against reference summaries
    Evaluate {
        #[arg(long)]
        reference_dir: PathBuf,
        #[arg(long)]
        machine_dir: PathBuf,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Summarize { file, ratio, json } => {
            let config = match ratio {
                Some(ratio) => config.with_ratio(ratio),
                None => config,
            };
            summarize(file.as_deref(), config, json)
        }
        Command::Batch {
            input_dir,
            output_dir,
            count,
        } => batch(&input_dir, &output_dir, count, config),
        Command::Evaluate {
            reference_dir,
            machine_dir,
            count,
        } => {
            let loaded = load_article_pairs(&reference_dir, &machine_dir, count);
            for (id, err) in &loaded.unreadable {
                eprintln!("Skipping article {id}: {err}");
            }
            let segmenter = Segmenter::new(config.delimiter, config.placeholder);
            let report = evaluate(&segmenter, &loaded.pairs);
            match report.average_f1 {
                Some(average) => {
                    println!("ID  =>  F1 Score");
                    println!("{}", "-".repeat(20));
                    for score in &report.scores {
                        println!("{} => {:.4}", score.id, score.f1);
                    }
                    println!("\nTotal Avg. F1 Score => {average:.4}");
                }
                None => println!("No valid files found for evaluation"),
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SummarizerConfig> {
    let Some(path) = path else {
        return Ok(SummarizerConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SummarizerConfig::from_json_str(&raw)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn summarize(file: Option<&Path>, config: SummarizerConfig, as_json: bool) -> Result<()> {
    if !as_json {
        let text = read_input(file)?;
        let summary = Pipeline::new(config)?.run(&text, &mut TracingObserver)?;
        println!("{}", summary.text);
        return Ok(());
    }

    let response = json_response(file, config);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// JSON mode reports failures in the payload instead of the exit code
fn json_response(file: Option<&Path>, config: SummarizerConfig) -> serde_json::Value {
    match summarize_for_json(file, config) {
        Ok(response) => response,
        Err(err) => json!({ "success": false, "error": format!("{err:#}") }),
    }
}

fn summarize_for_json(
    file: Option<&Path>,
    config: SummarizerConfig,
) -> Result<serde_json::Value> {
    let text = read_input(file)?;
    if text.trim().is_empty() {
        anyhow::bail!("Please enter some Hindi text to summarize.");
    }

    let summary = Pipeline::new(config)?.run(&text, &mut TracingObserver)?;
    let stats = SummaryStats::compute(&text, &summary.text);

    let mut response = json!({
        "success": true,
        "summary": summary.text,
        "original_length": stats.original_length,
        "summary_length": stats.summary_length,
        "compression_ratio": stats.compression_ratio,
    });
    if let Some(name) = file.and_then(Path::file_name) {
        response["filename"] = json!(name.to_string_lossy());
    }
    Ok(response)
}

fn batch(
    input_dir: &Path,
    output_dir: &Path,
    count: usize,
    config: SummarizerConfig,
) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let mut ids = Vec::new();
    let mut texts = Vec::new();
    for id in 1..=count {
        let path = input_dir.join(format!("input{id}.txt"));
        if !path.exists() {
            tracing::warn!(path = %path.display(), "input file not found");
            continue;
        }
        texts.push(
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        );
        ids.push(id);
    }

    let pipeline = Pipeline::new(config)?;
    for (id, result) in ids.into_iter().zip(pipeline.summarize_all(&texts)) {
        let output = output_dir.join(format!("article{id}_system1.txt"));
        match result {
            Ok(summary) => {
                std::fs::write(&output, summary.text)
                    .with_context(|| format!("failed to write {}", output.display()))?;
                println!("Summary saved to {}", output.display());
            }
            Err(err) => tracing::error!(id, error = %err, "summarization failed"),
        }
    }

    Ok(())
}
