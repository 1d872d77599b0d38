mod script;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use orrery_camera::{Camera, CameraConfig};
use orrery_scene::{
    CornellBox, CornellParams, DebugTextRenderer, FrameUniforms, Orrery, Renderer, draw_list,
};
use tracing_subscriber::EnvFilter;

use crate::script::Script;

#[derive(Parser)]
#[command(name = "orrery-cli", about = "Headless camera and scene driver")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Replay a scripted input session through the camera
    Fly {
        /// YAML script of input frames
        #[arg(short, long)]
        script: PathBuf,
        /// Camera config (YAML); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Emit one JSON object per frame instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the planets demo placement at a point in time
    Bodies {
        /// Seconds since the scene started
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Time dilation factor
        #[arg(short, long, default_value = "1")]
        dilation: f32,
        /// Print full model and normal matrices
        #[arg(long)]
        verbose_matrices: bool,
    },
    /// Print the Cornell-box frame at a point in time
    Cornell {
        /// Seconds since the scene started
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Scene parameters (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("orrery-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("math: {}", orrery_math::crate_info());
            println!("input: {}", orrery_input::crate_info());
            println!("camera: {}", orrery_camera::crate_info());
            println!("scene: {}", orrery_scene::crate_info());
        }
        Commands::Fly {
            script,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => CameraConfig::load(&path)?,
                None => CameraConfig::default(),
            };
            let script = Script::load(&script)?;
            let mut camera = Camera::new(config)?;
            let reports = script.run(&mut camera);

            for report in &reports {
                if json {
                    println!("{}", serde_json::to_string(report)?);
                } else {
                    println!("{}", report.summary());
                }
            }
            if !json {
                let frame = FrameUniforms::from_camera(&camera);
                print!("{}", DebugTextRenderer::verbose().render(&frame, &[]));
            }
        }
        Commands::Bodies {
            time,
            dilation,
            verbose_matrices,
        } => {
            if dilation < 0.0 {
                anyhow::bail!("time dilation must not be negative, got {dilation}");
            }
            let orrery = Orrery {
                time_dilation: dilation,
                ..Orrery::default()
            };
            let camera = Camera::default();
            let items = draw_list(&orrery.bodies(time, camera.position()));
            let renderer = DebugTextRenderer {
                verbose: verbose_matrices,
            };
            println!("Orrery at t={time}s, dilation={dilation}");
            print!("{}", renderer.render(&FrameUniforms::from_camera(&camera), &items));
        }
        Commands::Cornell { time, config } => {
            let params = match config {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    serde_yaml::from_str::<CornellParams>(&text)
                        .with_context(|| format!("parsing {}", path.display()))?
                }
                None => CornellParams::default(),
            };
            let frame = CornellBox::at(time, &params);
            let camera = Camera::default();
            let items = draw_list(&frame.objects);
            print!(
                "{}",
                DebugTextRenderer::new().render(&FrameUniforms::from_camera(&camera), &items)
            );
            println!("sphere: {}", serde_json::to_string(&frame.sphere)?);
            println!("box: {}", serde_json::to_string(&frame.cube)?);
            println!("light: {}", serde_json::to_string(&frame.light)?);
        }
    }

    Ok(())
}
