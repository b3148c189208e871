//! PC preview host for delilah scenes.
//!
//! Loads a scene file (or the built-in grid), poses the camera from the
//! command line, renders one frame through the software raster canvas, and
//! writes a PNG.

mod raster;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use delilah_core::{CameraState, Engine, Projection, Vec3};

use raster::RasterCanvas;

#[derive(Parser, Debug)]
#[command(name = "delilah-pc", about = "Render a delilah scene preview to a PNG")]
struct Args {
    /// Scene file (JSON). The built-in grid scene is used when omitted.
    scene: Option<PathBuf>,

    /// Output image path.
    #[arg(short, long, default_value = "preview.png")]
    out: PathBuf,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Camera X position.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    cam_x: f32,

    /// Camera Y position.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    cam_y: f32,

    /// Camera Z position.
    #[arg(long, default_value_t = 30.0, allow_hyphen_values = true)]
    cam_z: f32,

    /// Yaw in turns, [0, 1).
    #[arg(long, default_value_t = 0.0)]
    yaw: f32,

    /// Pitch in quarter turns, [-1, 1].
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pitch: f32,

    /// Roll in turns, [0, 1).
    #[arg(long, default_value_t = 0.0)]
    roll: f32,

    /// Field of view as a fraction of a half turn, (0, 1).
    #[arg(long, default_value_t = 0.25)]
    fov: f32,

    /// Near plane Z in camera space.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    near: f32,

    /// Far plane Z in camera space.
    #[arg(long, default_value_t = -100.0, allow_hyphen_values = true)]
    far: f32,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if let Err(message) = check_args(&args) {
        log::error!("{message}");
        return ExitCode::FAILURE;
    }

    let mut engine = Engine::new();
    if let Some(path) = &args.scene {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::error!("cannot read {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        };
        if !engine.load_scene(&text) {
            log::error!("{}: {}", path.display(), engine.last_error());
            return ExitCode::FAILURE;
        }
        log::info!(
            "loaded {}: {} vertices, {} objects",
            path.display(),
            engine.scene().vertices.len(),
            engine.scene().objects.len()
        );
    }

    engine.set_camera(CameraState::new(
        Vec3::new(args.cam_x, args.cam_y, args.cam_z),
        args.yaw,
        args.pitch,
        args.roll,
    ));
    engine.set_projection(Projection::new(args.fov, args.near, args.far));

    let mut canvas = RasterCanvas::new(args.width, args.height);
    engine.render(&mut canvas, args.width, args.height);

    if let Err(err) = canvas.into_image().save(&args.out) {
        log::error!("cannot write {}: {err}", args.out.display());
        return ExitCode::FAILURE;
    }
    log::info!("wrote {}", args.out.display());
    ExitCode::SUCCESS
}

/// Range-check user input before it reaches the core's panicking setters.
fn check_args(args: &Args) -> Result<(), String> {
    if args.width < 2 || args.height < 2 {
        return Err(format!(
            "viewport must be at least 2x2, got {}x{}",
            args.width, args.height
        ));
    }
    let position = Vec3::new(args.cam_x, args.cam_y, args.cam_z);
    if !position.is_finite() {
        return Err(format!("camera position must be finite, got {position}"));
    }
    if !(0.0..1.0).contains(&args.yaw) {
        return Err(format!("yaw must lie in [0, 1), got {}", args.yaw));
    }
    if !(-1.0..=1.0).contains(&args.pitch) {
        return Err(format!("pitch must lie in [-1, 1], got {}", args.pitch));
    }
    if !(0.0..1.0).contains(&args.roll) {
        return Err(format!("roll must lie in [0, 1), got {}", args.roll));
    }
    if !(args.fov > 0.0 && args.fov < 1.0) {
        return Err(format!("fov must lie in (0, 1), got {}", args.fov));
    }
    let limit = 1.0 / (args.fov * std::f32::consts::FRAC_PI_2).tan();
    if !(args.far.is_finite() && args.near.is_finite() && args.far < args.near && args.near < limit)
    {
        return Err(format!(
            "projection requires far < near < {limit}, got near {} far {}",
            args.near, args.far
        ));
    }
    Ok(())
}
