//! Command-line converter: apply a camera config to a default camera and
//! print the resulting live pose as an exported config.

use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use viewcam::camera::{apply_description, Viewport};
use viewcam::config::{export_config, CameraConfig, ConversionStrategy};
use viewcam::options::Options;

/// Convert an authoring-tool camera config into renderer units.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Camera config JSON (`current_camera` and optional `scenes`).
    config: PathBuf,

    /// Use the camera of this scene instead (1-based, as listed).
    #[arg(long)]
    scene: Option<usize>,

    /// Conversion strategy; overrides the options file.
    #[arg(long, value_enum)]
    strategy: Option<ConversionStrategy>,

    /// Options TOML with the initial projection and strategy.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let strategy = cli.strategy.unwrap_or(options.navigation.strategy);

    let text = std::fs::read_to_string(&cli.config)?;
    let mut config = CameraConfig::from_json_str(&text)?;

    let raw = match cli.scene {
        None => config.raw().clone(),
        Some(position) => {
            let available = config.scenes().len();
            let Some(entry) = position
                .checked_sub(1)
                .and_then(|index| config.scenes_mut().select(index))
            else {
                return Err(format!(
                    "scene {position} not found ({available} available)"
                )
                .into());
            };
            let Some(camera_info) = entry.camera_info.clone() else {
                return Err(
                    format!("scene '{}' has no camera", entry.label()).into()
                );
            };
            log::info!("using camera of scene '{}'", entry.label());
            camera_info
        }
    };

    let aspect = cli.width as f32 / cli.height.max(1) as f32;
    let mut viewport = Viewport::with_camera(
        options.camera.build(aspect),
        glam::Vec3::ZERO,
        cli.width,
        cli.height,
    );
    let report = apply_description(&raw, strategy, &mut viewport)?;
    if !report.is_clean() {
        log::info!("{} lens request(s) skipped", report.warnings.len());
    }

    let (Some(camera), Some(target)) = (viewport.camera(), viewport.target())
    else {
        return Err("viewport lost its camera".into());
    };
    let exported = export_config(camera, target, Some(config.scenes()));
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&exported)?)?;
    Ok(())
}
