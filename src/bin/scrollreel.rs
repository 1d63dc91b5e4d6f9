use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the installed snap ranges as JSON.
    Ranges(PageArgs),
    /// Snap a normalized scroll position.
    Snap(SnapArgs),
    /// Resolve the scroll target of a section.
    Nav(NavArgs),
    /// Scroll to an offset, release, and print one JSON line per frame.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct PageArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1440.0)]
    width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SnapArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Normalized scroll position in `[0, 1]`.
    #[arg(long)]
    value: f64,
}

#[derive(Args, Debug)]
struct NavArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Section (or element) id.
    #[arg(long)]
    section: String,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Scroll offset in pixels where the user lets go.
    #[arg(long)]
    to: f64,

    /// Number of frames to run after release.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Ranges(args) => cmd_ranges(args),
        Command::Snap(args) => cmd_snap(args),
        Command::Nav(args) => cmd_nav(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_config(page: &PageArgs) -> anyhow::Result<scrollreel::EngineConfig> {
    match &page.config {
        Some(path) => scrollreel::EngineConfig::from_path(path)
            .with_context(|| format!("load engine config '{}'", path.display())),
        None => Ok(scrollreel::EngineConfig::default()),
    }
}

/// Mount the landing page on a stacked layout and wait out the settle delay.
fn settled_engine(
    page: &PageArgs,
) -> anyhow::Result<(scrollreel::Engine<scrollreel::StackedLayout>, f64)> {
    let config = load_config(page)?;
    let viewport = scrollreel::Viewport::new(page.width, page.height)?;
    let sections = scrollreel::landing_page(viewport, &config).context("build landing page")?;
    let layout = scrollreel::landing_layout(viewport, &sections)?;

    let settle = config.settle_delay_secs();
    let mut engine =
        scrollreel::Engine::mount(config, Some(layout), scrollreel::LandingPage)
            .context("mount engine")?;
    let mut sink = scrollreel::InMemorySink::new();
    engine.init(0.0);
    engine.tick(0.0, &mut sink);
    engine.tick(settle, &mut sink);
    Ok((engine, settle))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_ranges(args: PageArgs) -> anyhow::Result<()> {
    let (engine, _) = settled_engine(&args)?;
    let max_scroll = engine.controller().map_or(0.0, |c| c.max_scroll());
    print_json(&serde_json::json!({
        "max_scroll": max_scroll,
        "ranges": engine.snap_ranges(),
    }))
}

fn cmd_snap(args: SnapArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.value) {
        anyhow::bail!("--value must be within [0, 1] (got {})", args.value);
    }
    let (engine, _) = settled_engine(&args.page)?;
    print_json(&serde_json::json!({
        "value": args.value,
        "snapped": engine.snap_to(args.value),
    }))
}

fn cmd_nav(args: NavArgs) -> anyhow::Result<()> {
    let (mut engine, _) = settled_engine(&args.page)?;
    let id = scrollreel::ElementId::new(args.section.as_str());
    let target = engine
        .scroll_to_section(&id)
        .with_context(|| format!("section '{id}' is not mounted"))?;
    print_json(&target)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if !(args.fps > 0.0 && args.fps.is_finite()) {
        anyhow::bail!("--fps must be positive (got {})", args.fps);
    }
    let (mut engine, mut now) = settled_engine(&args.page)?;
    let mut sink = scrollreel::InMemorySink::new();

    let released_at = engine.on_scroll(args.to);
    let target = engine.on_scroll_end(now);
    tracing::debug!(released_at, ?target, "released");

    let dt = 1.0 / args.fps;
    for frame in 0..args.frames {
        now += dt;
        let report = engine.tick(now, &mut sink);
        let values = sink.drain();
        let line = serde_json::json!({
            "frame": frame,
            "time": now,
            "report": report,
            "values": values,
        });
        println!("{}", serde_json::to_string(&line).context("serialize frame")?);
    }
    Ok(())
}
