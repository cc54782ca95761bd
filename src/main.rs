use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use captioneer::cli::{Cli, Command, LinesArgs, PlanArgs};
use captioneer::config::CaptionConfig;
use captioneer::layout::{CachedMetrics, MonospaceMetrics};
use captioneer::segmentation::{line_records, split_into_lines};
use captioneer::transcript::{load_transcript, normalize_words};
use captioneer::types::FrameSize;
use captioneer::CaptionPipeline;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Lines(args) => handle_lines(&args),
        Command::Plan(args) => handle_plan(&args),
    }
}

fn handle_lines(args: &LinesArgs) -> Result<()> {
    let mut config = CaptionConfig::from_override(args.config.config.clone())?;
    args.config.apply(&mut config);

    config
        .segmentation
        .validate()
        .context("Invalid segmentation configuration")?;

    let raw = load_transcript(&args.transcript)
        .with_context(|| format!("Failed to load transcript {:?}", args.transcript))?;
    let words = normalize_words(&raw).context("Failed to normalize transcript")?;
    let lines = split_into_lines(&words, config.segmentation);

    write_json(&line_records(&lines), args.out.as_deref())?;
    if let Some(out) = &args.out {
        println!("Wrote {} caption lines to {:?}", lines.len(), out);
    }
    Ok(())
}

fn handle_plan(args: &PlanArgs) -> Result<()> {
    let mut config = CaptionConfig::from_override(args.lines.config.config.clone())?;
    args.apply(&mut config);

    let frame = FrameSize::new(args.width, args.height).context("Invalid frame size")?;
    let metrics = CachedMetrics::new(
        MonospaceMetrics::default().with_stroke(config.style.stroke_width_px as f64),
    );
    let pipeline = CaptionPipeline::new(config, frame, &metrics)
        .context("Invalid caption configuration")?
        .with_workers(args.jobs);

    let raw = load_transcript(&args.lines.transcript)
        .with_context(|| format!("Failed to load transcript {:?}", args.lines.transcript))?;
    let plan = pipeline
        .run(&raw)
        .context("Failed to build render plan")?;

    if args.draws {
        write_json(&plan.draw_commands(), args.lines.out.as_deref())?;
    } else {
        write_json(&plan, args.lines.out.as_deref())?;
    }
    if let Some(out) = &args.lines.out {
        println!(
            "Wrote render plan with {} lines to {:?}",
            plan.lines.len(),
            out
        );
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    match out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write output {:?}", path))
        }
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
