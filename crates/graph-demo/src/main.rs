// File: crates/graph-demo/src/main.rs
// Summary: Demo loads samples (CSV or random), replays the reveal animation on a fixed-rate
// simulated clock, and writes every frame to PNG.

use anyhow::{Context, Result};
use graph_core::{AnimatedLineGraph, Clock, GraphConfig, ManualClock};
use graph_render_skia::{FrameRenderer, RenderOptions};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Args {
    csv: Option<PathBuf>,
    config: Option<PathBuf>,
    width: f32,
    height: f32,
    fps: u32,
    cycles: usize,
    count: usize,
    out: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            csv: None,
            config: None,
            width: 600.0,
            height: 300.0,
            fps: 60,
            cycles: 1,
            count: 30,
            out: PathBuf::from("target/out/frames"),
        }
    }
}

/// Time between data refreshes.
const CYCLE_MS: i64 = 2_000;
/// Above this the per-frame step would round down to 0 ms.
const MAX_FPS: u32 = 1_000;
const MAX_FRAMES_PER_CYCLE: usize = 10_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(p) => GraphConfig::load(p)
            .with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => GraphConfig::default(),
    };
    info!(?config, "using config");

    let clock = ManualClock::new(0);
    let mut graph = AnimatedLineGraph::with_clock(config, &clock)?;
    graph.set_viewport_size(args.width, args.height);

    let renderer = FrameRenderer::new(graph.config());
    let opts = RenderOptions::for_viewport(graph.viewport());
    let step_ms = i64::from(1_000 / args.fps);
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    for cycle in 0..args.cycles.max(1) {
        let samples = match &args.csv {
            Some(p) => load_samples_csv(p)
                .with_context(|| format!("failed to load CSV '{}'", p.display()))?,
            None => random_samples(args.count),
        };
        info!(cycle, count = samples.len(), "loaded samples");
        if samples.len() < 2 {
            warn!("fewer than two samples; nothing will be drawn");
        }

        let cycle_start = clock.now_ms();
        graph.set_samples(samples);

        let mut frame_no = 0usize;
        loop {
            let frame = graph.frame();
            let path = args.out.join(format!("cycle{cycle:02}_frame{frame_no:04}.png"));
            renderer.render_to_png(&frame, &opts, &path)?;
            frame_no += 1;
            if !frame.needs_redraw {
                break;
            }
            if frame_no >= MAX_FRAMES_PER_CYCLE {
                warn!(cycle, frames = frame_no, "frame limit reached; stopping this cycle");
                break;
            }
            clock.advance(step_ms);
        }
        info!(cycle, frames = frame_no, revealed = graph.revealed(), "animation finished");

        // Idle until the next refresh, like a host that stops redrawing.
        clock.set(cycle_start + CYCLE_MS.max(clock.now_ms() - cycle_start));
    }

    println!("Wrote frames to {}", args.out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("missing value for {flag}"));
        match flag.as_str() {
            "--csv" => args.csv = Some(PathBuf::from(value()?)),
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--width" => args.width = value()?.parse().context("--width expects a number")?,
            "--height" => args.height = value()?.parse().context("--height expects a number")?,
            "--fps" => args.fps = value()?.parse().context("--fps expects an integer")?,
            "--cycles" => args.cycles = value()?.parse().context("--cycles expects an integer")?,
            "--count" => args.count = value()?.parse().context("--count expects an integer")?,
            "--out" => args.out = PathBuf::from(value()?),
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }
    if args.fps == 0 || args.fps > MAX_FPS {
        anyhow::bail!("--fps must be between 1 and {MAX_FPS}, got {}", args.fps);
    }
    Ok(args)
}

fn random_samples(count: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random::<f64>()).collect()
}

/// Load one numeric column from a CSV file: the column named `value` if present,
/// otherwise the first column whose first row parses as a number. A first row
/// made entirely of numbers is data, not a header.
fn load_samples_csv(path: &Path) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    let parse = |rec: &csv::StringRecord, ix: usize| {
        rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok())
    };

    let has_header = records
        .first()
        .is_some_and(|r| (0..r.len()).any(|ix| parse(r, ix).is_none()));
    let headers = if has_header {
        records.remove(0).iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>()
    } else {
        Vec::new()
    };
    info!(?headers, "csv headers");

    let column = headers
        .iter()
        .position(|h| h == "value")
        .or_else(|| records.first().and_then(|r| (0..r.len()).find(|&ix| parse(r, ix).is_some())))
        .context("no numeric column found")?;

    let mut out = Vec::with_capacity(records.len());
    for (row, rec) in records.iter().enumerate() {
        match parse(rec, column) {
            Some(v) if v.is_finite() => out.push(v),
            _ => warn!(row, "skipping non-numeric value"),
        }
    }
    Ok(out)
}
