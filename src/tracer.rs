//! Closest-hit resolution: one color per ray.

use crate::color::Color;
use crate::ray::Ray;
use crate::scene::Scene;

/// Outcome of scanning a scene along one ray.
///
/// Transient value, produced and consumed within one pixel's resolution.
#[derive(Debug, Clone, Copy)]
pub struct HitResult {
    /// Distance to the nearest intersection, `f64::INFINITY` when nothing
    /// was hit.
    pub distance: f64,
    /// Color of the nearest sphere, or the scene background.
    pub color: Color,
}

/// Find the nearest intersection along `ray`.
///
/// Scans the spheres in scene order with a strict `<` comparison, so the
/// first sphere in the scene wins exact-distance ties. This keeps the
/// output deterministic for a fixed scene order and must not be relaxed
/// to `<=`.
pub fn closest_hit(ray: &Ray, scene: &Scene) -> HitResult {
    let mut closest = HitResult {
        distance: f64::INFINITY,
        color: scene.background(),
    };

    for sphere in scene.iter() {
        let distance = sphere.intersect(ray);
        if distance < closest.distance {
            closest = HitResult {
                distance,
                color: sphere.color,
            };
        }
    }

    closest
}

/// Resolve the color seen along `ray`.
///
/// Pure, stateless per-call computation: the nearest sphere's color, or
/// the scene background when nothing is hit.
pub fn resolve_color(ray: &Ray, scene: &Scene) -> Color {
    closest_hit(ray, scene).color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;
    use glam::DVec3;

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);
    const BACKGROUND: Color = Color::new(10, 20, 30);

    fn forward_ray() -> Ray {
        Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0))
    }

    fn scene_with(spheres: Vec<Sphere>) -> Scene {
        Scene::new(spheres, BACKGROUND).expect("valid scene")
    }

    #[test]
    fn test_empty_scene_resolves_background() {
        let scene = scene_with(Vec::new());
        assert_eq!(resolve_color(&forward_ray(), &scene), BACKGROUND);
        assert_eq!(closest_hit(&forward_ray(), &scene).distance, f64::INFINITY);
    }

    #[test]
    fn test_ray_pointing_away_resolves_background() {
        let scene = scene_with(vec![Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, RED)]);
        let away = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(resolve_color(&away, &scene), BACKGROUND);
    }

    #[test]
    fn test_nearer_sphere_wins_regardless_of_order() {
        let near = Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, RED);
        let far = Sphere::new(DVec3::new(0.0, 0.0, 8.0), 1.0, GREEN);

        let scene = scene_with(vec![near, far]);
        assert_eq!(resolve_color(&forward_ray(), &scene), RED);

        let scene = scene_with(vec![far, near]);
        assert_eq!(resolve_color(&forward_ray(), &scene), RED);
    }

    #[test]
    fn test_exact_tie_goes_to_first_in_scene_order() {
        // Symmetric placement around the ray axis gives bit-identical
        // intersection distances for both spheres.
        let left = Sphere::new(DVec3::new(-1.0, 0.0, 5.0), 1.25, GREEN);
        let right = Sphere::new(DVec3::new(1.0, 0.0, 5.0), 1.25, RED);

        let scene = scene_with(vec![right, left]);
        assert_eq!(resolve_color(&forward_ray(), &scene), RED);

        let scene = scene_with(vec![left, right]);
        assert_eq!(resolve_color(&forward_ray(), &scene), GREEN);
    }

    #[test]
    fn test_sphere_behind_ray_resolves_background() {
        let scene = scene_with(vec![Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0, RED)]);
        assert_eq!(resolve_color(&forward_ray(), &scene), BACKGROUND);
    }

    #[test]
    fn test_hit_distance_reported() {
        let scene = scene_with(vec![Sphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, RED)]);
        let hit = closest_hit(&forward_ray(), &scene);
        assert!((hit.distance - 4.0).abs() < 1e-9);
        assert_eq!(hit.color, RED);
    }
}
