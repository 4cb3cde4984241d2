use clap::Parser;
use glam::DVec3;
use log::{error, info};

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_image_as_png;

use spherecast::camera::Camera;
use spherecast::color::Color;
use spherecast::config::RenderConfig;
use spherecast::error::SceneError;
use spherecast::scene::Scene;
use spherecast::sphere::Sphere;

/// Create the built-in demo scene: three flat-colored spheres in front of
/// the camera.
fn create_scene() -> Result<Scene, SceneError> {
    let spheres = vec![
        Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, Color::new(255, 0, 0)),
        Sphere::new(DVec3::new(2.0, 1.0, 5.0), 0.5, Color::new(0, 255, 0)),
        Sphere::new(DVec3::new(-2.0, -1.0, 5.0), 1.5, Color::new(0, 0, 255)),
    ];
    Scene::new(spheres, Color::BLACK)
}

/// Build the camera and scene from the config file when it exists, or fall
/// back to the demo scene. Fatal configuration errors exit with context.
fn setup(args: &Args) -> (Camera, Scene) {
    if args.config.exists() {
        let result = RenderConfig::load(&args.config).and_then(|mut config| {
            if let Some(width) = args.width {
                config.width = width;
            }
            if let Some(height) = args.height {
                config.height = height;
            }
            config.build()
        });
        match result {
            Ok(parts) => parts,
            Err(e) => {
                error!("Invalid configuration {}: {}", args.config.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        info!(
            "No configuration file at {}, using the built-in demo scene",
            args.config.display()
        );
        let width = args.width.unwrap_or(800);
        let height = args.height.unwrap_or(600);
        let camera = match Camera::new(width, height, std::f64::consts::FRAC_PI_2) {
            Ok(camera) => camera,
            Err(e) => {
                error!("Invalid viewport: {}", e);
                std::process::exit(1);
            }
        };
        let scene = match create_scene() {
            Ok(scene) => scene,
            Err(e) => {
                error!("Invalid demo scene: {}", e);
                std::process::exit(1);
            }
        };
        (camera, scene)
    }
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!(
        "spherecast - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    let (camera, scene) = setup(&args);

    info!(
        "Image resolution: {}x{}, {} spheres",
        camera.width(),
        camera.height(),
        scene.len()
    );

    let image = camera.render(&scene);

    if args.output.ends_with(".png") {
        if !save_image_as_png(&image, &args.output) {
            std::process::exit(1);
        }
    } else {
        error!(
            "Unsupported file extension '{}'. Only .png output is supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
