//! Sphere primitive and ray-sphere intersection.

use glam::DVec3;

use crate::color::Color;
use crate::ray::Ray;

/// Sphere defined by center, radius, and flat surface color.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: DVec3,

    /// Radius of the sphere.
    ///
    /// Strictly positive for every sphere accepted into a
    /// [`Scene`](crate::scene::Scene).
    pub radius: f64,

    /// Color returned for any ray that hits this sphere.
    pub color: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Radius validation happens when the sphere enters a scene, where the
    /// error can name the sphere's index.
    pub fn new(center: DVec3, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Distance along `ray` to the nearest camera-facing intersection.
    ///
    /// Solves the quadratic a*t^2 + b*t + c = 0 for the ray-sphere
    /// intersection parameters. Returns `f64::INFINITY` when the ray misses,
    /// grazes tangentially, or the sphere lies entirely behind the ray
    /// origin. Never returns a negative distance or NaN for a unit-length
    /// direction and valid sphere.
    pub fn intersect(&self, ray: &Ray) -> f64 {
        // Vector from sphere center to ray origin
        let oc = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        // Tangent hits count as misses, matching the strict comparison below
        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return f64::INFINITY;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);

        if t1 > 0.0 {
            // Near root in front of the origin
            t1
        } else if t2 > 0.0 {
            // Origin is inside the sphere; the far root is the visible surface
            t2
        } else {
            // Both roots behind the origin: the sphere is out of view
            f64::INFINITY
        }
    }
}
