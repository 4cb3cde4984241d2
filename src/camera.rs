//! Camera for ray generation and frame rendering

use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec3;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;

use crate::error::{DegenerateVector, ViewportError};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer;

/// Pinhole camera fixed at the world origin, looking along +z.
///
/// Maps pixel coordinates to world-space rays through a viewport defined by
/// the image dimensions and field of view. There is no camera transform
/// stage: the origin of every primary ray is (0, 0, 0).
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    image_width: u32,
    /// Rendered image height in pixel count
    image_height: u32,
    /// Field of view in radians, inside the open interval (0, pi)
    fov: f64,
    /// Width / height ratio
    aspect: f64,
    /// Precomputed tan(fov / 2)
    tan_half_fov: f64,
}

impl Camera {
    /// Create a camera, validating viewport dimensions and field of view.
    ///
    /// Width and height must be positive and `fov` must lie strictly
    /// between 0 and pi radians; anything else is a configuration error
    /// reported before any ray is cast.
    pub fn new(image_width: u32, image_height: u32, fov: f64) -> Result<Self, ViewportError> {
        if image_width == 0 {
            return Err(ViewportError::InvalidWidth);
        }
        if image_height == 0 {
            return Err(ViewportError::InvalidHeight);
        }
        if !(fov > 0.0 && fov < std::f64::consts::PI) {
            return Err(ViewportError::InvalidFov { fov });
        }

        Ok(Self {
            image_width,
            image_height,
            fov,
            aspect: f64::from(image_width) / f64::from(image_height),
            tan_half_fov: (fov / 2.0).tan(),
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image_width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image_height
    }

    /// Field of view in radians.
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Build the world-space ray through pixel `(px, py)`.
    ///
    /// Pixel coordinates are mapped to normalized device coordinates
    /// centered on the image, spread by aspect ratio and field of view,
    /// and combined with a +1 z component. The returned direction is unit
    /// length. The z component is constant, so the pre-normalization vector
    /// is never zero for a finite field of view and the degenerate case is
    /// unreachable here; the fallible signature makes the normalization
    /// policy explicit for callers composing their own directions.
    pub fn ray_for_pixel(&self, px: u32, py: u32) -> Result<Ray, DegenerateVector> {
        let width = f64::from(self.image_width);
        let height = f64::from(self.image_height);

        let ndc_x = (2.0 * f64::from(px) - width) / width;
        let ndc_y = (height - 2.0 * f64::from(py)) / height;

        let direction = DVec3::new(
            ndc_x * self.aspect * self.tan_half_fov,
            ndc_y * self.tan_half_fov,
            1.0,
        )
        .try_normalize()
        .ok_or(DegenerateVector)?;

        Ok(Ray::new(DVec3::ZERO, direction))
    }

    /// Render one frame of `scene`.
    ///
    /// Per-pixel work is independent: the scene is read-only for the whole
    /// frame and every worker writes only its own pixel, so pixels are
    /// processed in parallel with Rayon. A pixel whose ray cannot be
    /// constructed falls back to the background color; such pixels are
    /// counted and reported once per frame rather than logged per pixel.
    pub fn render(&self, scene: &Scene) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
        let mut image: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering frame using {} CPU cores...",
            rayon::current_num_threads()
        );
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        let degenerate_pixels = AtomicU64::new(0);

        // Parallel pixel processing using Rayon, one ray per pixel
        image
            .enumerate_pixels_mut()
            .par_bridge()
            .for_each(|(x, y, pixel)| {
                let color = match self.ray_for_pixel(x, y) {
                    Ok(ray) => tracer::resolve_color(&ray, scene),
                    Err(DegenerateVector) => {
                        degenerate_pixels.fetch_add(1, Ordering::Relaxed);
                        scene.background()
                    }
                };
                *pixel = color.into();
                pb.inc(1);
            });

        pb.finish();
        let render_time = render_start.elapsed();
        info!("Frame rendered in {:.2?}", render_time);

        let degenerate = degenerate_pixels.load(Ordering::Relaxed);
        if degenerate > 0 {
            warn!(
                "{} pixels fell back to the background color (degenerate ray direction)",
                degenerate
            );
        }

        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::sphere::Sphere;
    use std::f64::consts::{FRAC_PI_2, PI};

    const RED: Color = Color::new(255, 0, 0);

    #[test]
    fn test_center_pixel_ray_points_forward() {
        let camera = Camera::new(800, 600, FRAC_PI_2).expect("valid camera");
        let ray = camera.ray_for_pixel(400, 300).expect("valid pixel");
        assert!(ray.origin.length() < 1e-12);
        assert!((ray.direction - DVec3::new(0.0, 0.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_ray_directions_are_unit_length() {
        let camera = Camera::new(800, 600, FRAC_PI_2).expect("valid camera");
        for (px, py) in [(0, 0), (799, 0), (0, 599), (799, 599), (123, 456)] {
            let ray = camera.ray_for_pixel(px, py).expect("valid pixel");
            assert!((ray.direction.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_invalid_viewport() {
        assert!(matches!(
            Camera::new(0, 600, FRAC_PI_2),
            Err(ViewportError::InvalidWidth)
        ));
        assert!(matches!(
            Camera::new(800, 0, FRAC_PI_2),
            Err(ViewportError::InvalidHeight)
        ));
    }

    #[test]
    fn test_rejects_out_of_range_fov() {
        assert!(matches!(
            Camera::new(800, 600, 0.0),
            Err(ViewportError::InvalidFov { .. })
        ));
        assert!(matches!(
            Camera::new(800, 600, PI),
            Err(ViewportError::InvalidFov { .. })
        ));
        assert!(matches!(
            Camera::new(800, 600, -1.0),
            Err(ViewportError::InvalidFov { .. })
        ));
    }

    #[test]
    fn test_center_pixel_sees_sphere_corner_sees_background() {
        let camera = Camera::new(800, 600, FRAC_PI_2).expect("valid camera");
        let scene = Scene::new(
            vec![Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, RED)],
            Color::BLACK,
        )
        .expect("valid scene");

        let center = camera.ray_for_pixel(400, 300).expect("valid pixel");
        assert_eq!(tracer::resolve_color(&center, &scene), RED);

        let corner = camera.ray_for_pixel(0, 0).expect("valid pixel");
        assert_eq!(tracer::resolve_color(&corner, &scene), Color::BLACK);
    }

    #[test]
    fn test_render_empty_scene_is_all_background() {
        let background = Color::new(10, 20, 30);
        let camera = Camera::new(16, 12, FRAC_PI_2).expect("valid camera");
        let scene = Scene::new(Vec::new(), background).expect("valid scene");

        let image = camera.render(&scene);
        assert!(image.pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_render_sphere_behind_camera_is_all_background() {
        let camera = Camera::new(16, 12, FRAC_PI_2).expect("valid camera");
        let scene = Scene::new(
            vec![Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0, RED)],
            Color::BLACK,
        )
        .expect("valid scene");

        let image = camera.render(&scene);
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
