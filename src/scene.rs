//! Scene: an ordered collection of spheres plus a background color.

use crate::color::Color;
use crate::error::SceneError;
use crate::sphere::Sphere;

/// Ordered sphere collection, immutable for the duration of a frame.
///
/// Order matters: exact-distance ties during closest-hit resolution go to
/// the sphere that appears first.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
    background: Color,
}

impl Scene {
    /// Build a scene, rejecting any sphere with a non-positive radius.
    ///
    /// The error names the offending sphere's index so the caller can fix
    /// its configuration.
    pub fn new(spheres: Vec<Sphere>, background: Color) -> Result<Self, SceneError> {
        for (index, sphere) in spheres.iter().enumerate() {
            // Written to also reject a NaN radius
            if !(sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
        }
        Ok(Self {
            spheres,
            background,
        })
    }

    /// Background color returned for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Iterate over the spheres in scene order.
    pub fn iter(&self) -> impl Iterator<Item = &Sphere> {
        self.spheres.iter()
    }

    /// Number of spheres in the scene.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// True when the scene contains no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
