// File: crates/scatter-demo/src/main.rs
// Summary: Demo loads the state CSV, replays scripted clicks/hover/resize, and writes SVG (and PNG) snapshots.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use scatter_core::types::DEFAULT_CONTAINER_WIDTH;
use scatter_core::{theme, ChartConfig, ChartEvent, ChartRenderer, Dataset, Easing};
use scatter_render_skia::{RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};

/// Frame step when only the final state is written.
const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum EasingArg {
    Linear,
    Cubic,
}

impl From<EasingArg> for Easing {
    fn from(e: EasingArg) -> Self {
        match e {
            EasingArg::Linear => Easing::Linear,
            EasingArg::Cubic => Easing::CubicInOut,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "scatter-demo",
    version,
    about = "Render the state health scatter plot to SVG/PNG"
)]
struct Args {
    /// CSV with state, abbr, poverty, age, income, obesity, smokes and healthcare columns
    #[arg(default_value = "data/data.csv")]
    input: String,

    /// Container width in pixels; height follows the fixed aspect ratio
    #[arg(long, default_value_t = DEFAULT_CONTAINER_WIDTH)]
    width: f64,

    /// Click an axis label, e.g. `x=income` or `y=smokes` (repeatable, applied in order)
    #[arg(long = "select", value_name = "AXIS=NAME")]
    select: Vec<String>,

    /// Hover the state with this abbreviation after all clicks
    #[arg(long, value_name = "ABBR")]
    hover: Option<String>,

    /// Resize the container to this width before the clicks
    #[arg(long, value_name = "WIDTH")]
    resize: Option<f64>,

    #[arg(long, value_enum, default_value_t = EasingArg::Cubic)]
    easing: EasingArg,

    /// Axis transition length in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 300.0)]
    duration: f64,

    /// Theme preset name (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Also rasterize the final scene to PNG
    #[arg(long)]
    png: bool,

    /// Write an SVG frame every MS milliseconds while transitions run
    #[arg(long, value_name = "MS")]
    frames: Option<f64>,
}

fn main() -> Result<()> {
    let mut log_builder = env_logger::builder();
    if std::env::var_os("RUST_LOG").is_none() {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();

    let args = Args::parse();

    let (path, used_alt) = resolve_path(&args.input)?;
    log::info!("using input file: {}", path.display());
    if used_alt {
        log::info!("  (extension swapped between .csv/.cvs)");
    }

    let dataset = Dataset::from_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if dataset.is_empty() {
        anyhow::bail!("no records loaded; check headers/delimiter.");
    }

    let config = ChartConfig {
        transition_ms: args.duration,
        easing: args.easing.into(),
        ..ChartConfig::default()
    };
    let theme = theme::find(&args.theme);
    let mut chart = ChartRenderer::with_config(config, dataset, args.width);

    if let Some(w) = args.resize {
        chart.handle_event(ChartEvent::Resize { container_width: w })?;
    }

    let mut frame_no = 0usize;
    for sel in &args.select {
        let (axis, name) = sel
            .split_once('=')
            .with_context(|| format!("--select expects AXIS=NAME, got '{sel}'"))?;
        let changed = chart
            .select_axis_by_name(axis, name)
            .with_context(|| format!("selecting '{sel}'"))?;
        if !changed {
            log::info!("{sel} already active; nothing to animate");
            continue;
        }
        let step = args.frames.filter(|ms| *ms > 0.0).unwrap_or(FRAME_MS);
        while chart.is_animating() {
            let now_ms = chart.now_ms() + step;
            chart.handle_event(ChartEvent::Frame { now_ms })?;
            if args.frames.is_some() {
                frame_no += 1;
                let frame = args.out.join(format!("frame_{frame_no:03}.svg"));
                chart.render_to_svg(&theme, &frame)?;
            }
        }
    }

    if let Some(abbr) = &args.hover {
        let index = chart
            .dataset()
            .position_by_abbr(abbr)
            .with_context(|| format!("no state with abbreviation '{abbr}'"))?;
        let tip = chart.hover(index)?;
        log::info!("tooltip: {}", tip.tooltip);
    }

    let svg_out = args.out.join("scatter.svg");
    chart.render_to_svg(&theme, &svg_out)?;
    println!("Wrote {}", svg_out.display());

    if args.png {
        let renderer = SkiaRenderer::new(RenderOptions { theme, draw_labels: true });
        let png_out = args.out.join("scatter.png");
        renderer.render_to_png(chart.scene(), &png_out)?;
        println!("Wrote {}", png_out.display());
    }

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_between_csv_and_cvs() {
        assert_eq!(swap_ext(Path::new("a/data.cvs")), Some(PathBuf::from("a/data.csv")));
        assert_eq!(swap_ext(Path::new("data.CSV")), Some(PathBuf::from("data.cvs")));
        assert_eq!(swap_ext(Path::new("data.txt")), None);
    }

    #[test]
    fn cli_parses_repeatable_selects() {
        let args = Args::try_parse_from([
            "scatter-demo", "states.csv", "--select", "x=income", "--select", "y=smokes",
            "--easing", "linear", "--png",
        ])
        .unwrap();
        assert_eq!(args.select, vec!["x=income", "y=smokes"]);
        assert_eq!(args.easing, EasingArg::Linear);
        assert!(args.png);
        assert_eq!(args.width, DEFAULT_CONTAINER_WIDTH);
    }
}
