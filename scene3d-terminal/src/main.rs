/// scene3d Terminal Demo - a grid of models facing an orbiting target
///
/// Every scene control is a key: see the help line at the top of the
/// screen. Logs go to stderr, or to `--log-file` while the demo owns the
/// terminal.
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use scene3d_core::{AnimationMode, Mesh, PathMode, SceneState};
use scene3d_terminal::{controls, AppConfig, TerminalApp};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Animation {
    Idle,
    Approach,
    Climb,
}

impl From<Animation> for AnimationMode {
    fn from(animation: Animation) -> Self {
        match animation {
            Animation::Idle => AnimationMode::Idle,
            Animation::Approach => AnimationMode::Approach,
            Animation::Climb => AnimationMode::Climb,
        }
    }
}

#[derive(Parser)]
#[command(about = "Interactive 3D transform demo rendered as ASCII")]
struct Cli {
    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,
    /// Zoom factor in [1, 100]; overrides --fov with 100 degrees / zoom
    #[arg(long)]
    zoom: Option<f32>,
    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,
    /// Animation to start with
    #[arg(short, long, value_enum, default_value_t = Animation::Idle)]
    animation: Animation,
    /// Move the model along the Bézier path instead of a straight line
    #[arg(short, long)]
    bezier: bool,
    /// Edge length of the cube model before the model orientation is applied
    #[arg(long, default_value_t = 10.0)]
    size: f32,
    /// The log file to write to
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> io::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::options().append(true).create(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    let mut scene = SceneState::new();
    scene.set_fov(cli.fov.to_radians());
    if let Some(zoom) = cli.zoom {
        let (min, max) = controls::ZOOM_RANGE;
        scene.set_zoom(zoom.clamp(min, max));
    }
    if cli.bezier {
        scene.model.path = PathMode::Bezier;
    }
    scene.set_animation(cli.animation.into());

    let mesh = Mesh::cube(cli.size).baked(&Mesh::model_orientation());
    log::info!("model has {} vertices", mesh.vertex_count());

    let config = AppConfig {
        fps: cli.fps,
        scene,
    };
    let mut app = TerminalApp::new(mesh, config)?;
    app.run()
}
