use clap::{Parser, Subcommand};
use hauntyard_anim::{AnimationDriver, CameraRig, FixedStepClock, GhostLights};
use hauntyard_render::{DebugTextRenderer, RenderView, Renderer};
use hauntyard_scene::build_diorama;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hauntyard-cli", about = "Headless hauntyard operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info and diorama summary
    Info,
    /// Drive the animation with a fixed-step clock and dump the final frame
    Simulate {
        /// Number of ticks to run
        #[arg(short, long, default_value = "100")]
        ticks: u64,
        /// Seconds per tick
        #[arg(long, default_value_t = 1.0 / 60.0)]
        step: f64,
        /// Seed for the grave scatter
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Camera stand-in for headless runs; control update is a no-op.
struct StaticRig;

impl CameraRig for StaticRig {
    fn update(&mut self) {}
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("hauntyard-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("scene: {}", hauntyard_scene::crate_info());
            println!("render: {}", hauntyard_render::crate_info());
            let (scene, _) = build_diorama(42);
            println!(
                "diorama: {} nodes, {} lights",
                scene.node_count(),
                scene.light_count()
            );
        }
        Commands::Simulate { ticks, step, seed } => {
            println!("Simulating {ticks} ticks at {step}s per tick (seed={seed})");

            let (mut scene, lights) = build_diorama(seed);
            let mut driver =
                AnimationDriver::new(FixedStepClock::new(step), GhostLights::from(lights));
            let mut rig = StaticRig;

            let mut t = 0.0;
            for _ in 0..ticks {
                t = driver.tick(&mut scene, &mut rig);
            }
            println!("Final elapsed time: {t:.6}s");

            let frame = DebugTextRenderer::new().render(&scene, &RenderView::default());
            print!("{frame}");
        }
    }

    Ok(())
}
