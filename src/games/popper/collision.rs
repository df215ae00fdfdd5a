use super::explosion::Explosion;
use super::sphere::Sphere;

/// Circle overlap between a sphere and the explosion's current outer radius.
pub fn intersects(sphere: &Sphere, explosion: &Explosion) -> bool {
    let dx = sphere.x - explosion.x();
    let dy = sphere.y - explosion.y();
    let reach = sphere.r + explosion.r();
    dx * dx + dy * dy <= reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Rgba;

    fn sphere_at(x: f64, y: f64, r: f64) -> Sphere {
        Sphere::from_parts(x, y, 0.0, 0.0, r, Rgba::new(200, 200, 200, 255))
    }

    #[test]
    fn test_concentric_overlap() {
        let s = sphere_at(100.0, 100.0, 10.0);
        let e = Explosion::new(100.0, 100.0, 5.0, 50.0, 1.0);
        assert!(intersects(&s, &e));
    }

    #[test]
    fn test_far_apart_miss() {
        let s = sphere_at(100.0, 100.0, 10.0);
        let e = Explosion::new(200.0, 100.0, 5.0, 50.0, 1.0);
        assert!(!intersects(&s, &e));
    }

    #[test]
    fn test_touching_counts() {
        let s = sphere_at(0.0, 0.0, 10.0);
        let e = Explosion::new(15.0, 0.0, 5.0, 50.0, 1.0);
        assert!(intersects(&s, &e));
    }

    #[test]
    fn test_reach_grows_with_explosion() {
        let s = sphere_at(100.0, 100.0, 10.0);
        let mut e = Explosion::new(130.0, 100.0, 5.0, 50.0, 10.0);
        assert!(!intersects(&s, &e));
        e.step();
        e.step();
        assert_eq!(e.r(), 25.0);
        assert!(intersects(&s, &e));
    }
}
