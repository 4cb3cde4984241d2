//! Render configuration: TOML scene description and validation.
//!
//! The raw serde types accept whatever well-formed TOML provides; the
//! validation step range-checks colors, radii, and viewport parameters so
//! that every rejected configuration names the offending field.

use std::path::Path;

use glam::DVec3;
use log::debug;
use serde::Deserialize;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{ConfigError, SceneError};
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Top-level render configuration as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Field of view in radians.
    pub fov: f64,
    /// Background color as `[r, g, b]`, black when omitted.
    #[serde(default = "default_background")]
    pub background_color: [i64; 3],
    /// Spheres in scene order. An explicitly empty list is a valid scene;
    /// a missing list is a parse error.
    pub spheres: Vec<SphereConfig>,
}

/// One `[[spheres]]` entry in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct SphereConfig {
    /// Sphere center as `[x, y, z]`.
    pub center: [f64; 3],
    /// Sphere radius, strictly positive.
    pub radius: f64,
    /// Sphere color as `[r, g, b]` with components in 0..=255.
    pub color: [i64; 3],
}

fn default_background() -> [i64; 3] {
    [0, 0, 0]
}

impl RenderConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// Validate and convert into a camera and scene ready to render.
    pub fn build(&self) -> Result<(Camera, Scene), ConfigError> {
        let camera = Camera::new(self.width, self.height, self.fov)?;

        let background = validate_color(self.background_color, "background_color")?;
        let mut spheres = Vec::with_capacity(self.spheres.len());
        for (index, entry) in self.spheres.iter().enumerate() {
            let color = validate_color(entry.color, &format!("sphere {index} color"))?;
            spheres.push(Sphere::new(
                DVec3::from_array(entry.center),
                entry.radius,
                color,
            ));
        }
        let scene = Scene::new(spheres, background)?;

        debug!(
            "Configuration validated: {}x{}, {} spheres",
            self.width,
            self.height,
            scene.len()
        );
        Ok((camera, scene))
    }
}

fn validate_color(components: [i64; 3], location: &str) -> Result<Color, SceneError> {
    let [r, g, b] = components;
    for (channel, value) in [('r', r), ('g', g), ('b', b)] {
        if !(0..=255).contains(&value) {
            return Err(SceneError::ColorOutOfRange {
                location: location.to_string(),
                channel,
                value,
            });
        }
    }
    Ok(Color::new(r as u8, g as u8, b as u8))
}
