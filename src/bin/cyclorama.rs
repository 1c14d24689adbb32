use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cyclorama", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print per-layer playback and parallax attributes for a scene.
    Inspect(InspectArgs),
    /// Simulate one layer's playback and write its surface as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory holding the ordered frame image sequence.
    #[arg(long)]
    frames: PathBuf,

    /// Group index into the scene.
    #[arg(long, default_value_t = 0)]
    group: usize,

    /// Layer index within the group.
    #[arg(long, default_value_t = 0)]
    layer: usize,

    /// Simulated playback time in seconds.
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Device pixel ratio for the backing store.
    #[arg(long, default_value_t = 1.0)]
    ratio: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let scene = cyclorama::Scene::from_path(&args.in_path)?;
    for (gi, group) in scene.groups.iter().enumerate() {
        for (li, layer) in group.layers.iter().enumerate() {
            println!(
                "group {gi} layer {li}: frames {}..={} over {}s, size {}px, anchor ({}%, {}%), z {}, scroll-speed {}",
                layer.start_index,
                layer.start_index + layer.num_images - 1,
                layer.duration,
                layer.size,
                layer.top,
                layer.left,
                layer.z_index,
                cyclorama::scroll_speed_attr(layer.z_index),
            );
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = cyclorama::Scene::from_path(&args.in_path)?;
    let layer = scene
        .groups
        .get(args.group)
        .and_then(|g| g.layers.get(args.layer))
        .with_context(|| format!("no layer {}/{} in scene", args.group, args.layer))?;

    let source = cyclorama::ImageSequenceSource::from_dir(&args.frames)?;
    let mut controller =
        cyclorama::SurfaceController::new(*layer, Box::new(source), args.ratio)?;

    // 60 Hz simulated compositor ticks up to the requested time.
    let dt = 1.0 / 60.0;
    let mut t = 0.0;
    while t < args.at {
        controller.tick(dt);
        t += dt;
    }
    // A zero tick applies the final pending load.
    controller.tick(0.0);

    let surface = controller.surface();
    anyhow::ensure!(surface.width() > 0, "surface was never allocated");

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
