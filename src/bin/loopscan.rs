use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use loopscan::{AnalysisStats, AnalysisThreading, LoopSelection, VideoVolume};

#[derive(Parser, Debug)]
#[command(name = "loopscan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a directory of frames and report the best loop as JSON.
    Analyze(AnalyzeArgs),
    /// Analyze, then write the selected loop's frames as numbered PNGs.
    Extract(ExtractArgs),
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Directory of image frames, consumed in lexicographic name order.
    #[arg(long = "in")]
    in_dir: PathBuf,

    /// Loop-length weight; larger alpha favors longer loops at rougher seams.
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Score frame pairs on a rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Directory of image frames, consumed in lexicographic name order.
    #[arg(long = "in")]
    in_dir: PathBuf,

    /// Loop-length weight; larger alpha favors longer loops at rougher seams.
    #[arg(long, default_value_t = 0.5)]
    alpha: f64,

    /// Output directory for the extracted loop frames.
    #[arg(long)]
    out: PathBuf,

    /// Score frame pairs on a rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

#[derive(serde::Serialize)]
struct Report {
    alpha: f64,
    stats: AnalysisStats,
    selection: LoopSelection,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Analyze(args) => cmd_analyze(args),
        Command::Extract(args) => cmd_extract(args),
    }
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let volume = load_volume(&args.in_dir)?;
    let (selection, stats) = run_pipeline(&volume, args.alpha, args.parallel)?;

    let report = Report {
        alpha: args.alpha,
        stats,
        selection,
    };
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;
    match &args.out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("write report '{}'", path.display()))?,
        None => println!("{json}"),
    }

    if selection == LoopSelection::NoLoop {
        eprintln!("no loop found: no frame pair beat the zero-score baseline");
    }
    Ok(())
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let volume = load_volume(&args.in_dir)?;
    let (selection, _) = run_pipeline(&volume, args.alpha, args.parallel)?;

    let Some(spec) = selection.spec() else {
        eprintln!("no loop found: nothing to extract");
        return Ok(());
    };

    let frames = volume.extract_loop(&spec)?;
    fs::create_dir_all(&args.out)
        .with_context(|| format!("create output directory '{}'", args.out.display()))?;
    for (idx, frame) in frames.iter().enumerate() {
        let path = args.out.join(format!("frame_{idx:04}.png"));
        let img = image::RgbImage::from_raw(frame.width, frame.height, frame.data.clone())
            .context("frame buffer does not match its shape")?;
        img.save(&path)
            .with_context(|| format!("write frame '{}'", path.display()))?;
    }

    println!(
        "extracted {} frames (loop {}..={}) to '{}'",
        frames.len(),
        spec.start,
        spec.end,
        args.out.display(),
    );
    Ok(())
}

fn run_pipeline(
    volume: &VideoVolume,
    alpha: f64,
    parallel: bool,
) -> anyhow::Result<(LoopSelection, AnalysisStats)> {
    let threading = AnalysisThreading {
        parallel,
        threads: None,
    };
    Ok(loopscan::find_loop_with_stats(volume, alpha, &threading)?)
}

fn load_volume(dir: &Path) -> anyhow::Result<VideoVolume> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("read frame directory '{}'", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes =
            fs::read(path).with_context(|| format!("read frame '{}'", path.display()))?;
        let frame = loopscan::decode_frame_rgb(&bytes)
            .with_context(|| format!("decode frame '{}'", path.display()))?;
        frames.push(frame);
    }
    Ok(VideoVolume::from_frames(&frames)?)
}
