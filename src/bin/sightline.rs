use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sightline::{LayoutMap, RecordingRunner, Scene, Session, Vec2};

#[derive(Parser, Debug)]
#[command(name = "sightline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a scene, printing a summary.
    Validate(ValidateArgs),
    /// Drive a scene through a scripted scroll and write the action trace.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulation script JSON (layout + steps).
    #[arg(long)]
    script: PathBuf,

    /// Output trace JSON.
    #[arg(long)]
    out: PathBuf,
}

/// Scripted input for `simulate`: element geometry plus an ordered list
/// of scroll offsets and completion callbacks.
#[derive(Debug, serde::Deserialize)]
struct SimScript {
    layout: LayoutMap,
    #[serde(default)]
    steps: Vec<SimStep>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum SimStep {
    Scroll { y: f64 },
    Complete { id: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: Scene = serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    scene.validate()?;

    let reveals: usize = scene.groups.iter().map(|g| g.members.len()).sum();
    println!(
        "ok: {} groups ({} reveals), {} bindings, {} toggles, viewport {}x{}",
        scene.groups.len(),
        reveals,
        scene.bindings.len(),
        scene.toggles.len(),
        scene.viewport.width,
        scene.viewport.height,
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;

    let f = File::open(&args.script)
        .with_context(|| format!("open script '{}'", args.script.display()))?;
    let script: SimScript =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse script JSON")?;

    let mut session = Session::mount(&scene, script.layout, RecordingRunner::new())?;
    for step in &script.steps {
        match step {
            SimStep::Scroll { y } => session.scroll_to(Vec2::new(0.0, *y)),
            SimStep::Complete { id } => session.complete(id),
        }
    }
    let trace = session.into_runner().into_records();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let out = File::create(&args.out)
        .with_context(|| format!("write trace '{}'", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(out), &trace)
        .with_context(|| "serialize trace JSON")?;

    eprintln!("wrote {} ({} records)", args.out.display(), trace.len());
    Ok(())
}
