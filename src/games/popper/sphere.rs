use rand::Rng;

use super::explosion::Explosion;
use super::random::clamped_normal;
use crate::surface::{Rgba, Surface};

/// Radius spread and mean for spheres seeded in `round`. Spheres shrink and
/// become more uniform as rounds progress.
pub fn round_radius(round: u32) -> (f64, f64) {
    let round = round as f64;
    let shape = (8.0 - round / 17.0).clamp(0.01, 8.0);
    let offset = (30.0 - round / 8.0).clamp(5.0, 30.0);
    (shape, offset)
}

/// A random pastel colour, each channel around 175.
fn pastel<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    let red = clamped_normal(rng, 175.0, 15.0, 0.0, 255.0) as u8;
    let green = clamped_normal(rng, 175.0, 15.0, 0.0, 255.0) as u8;
    let blue = clamped_normal(rng, 175.0, 15.0, 0.0, 255.0) as u8;
    Rgba::new(red, green, blue, 255)
}

/// Pre-render a sphere of radius `r`: a filled disc whose alpha rises with the
/// squared distance from the centre.
fn paint(r: f64, color: Rgba) -> Surface {
    let side = (2.0 * r + 1.0) as usize;
    let mut sprite = Surface::new(side, side);
    let r2 = r * r;

    for x in 0..side {
        for y in 0..side {
            let dx = r - x as f64;
            let dy = r - y as f64;
            let d2 = dx * dx + dy * dy;
            if d2 <= r2 {
                let alpha = (192 + (64.0 * d2 / r2) as i32).min(255);
                sprite.set(x as i32, y as i32, Rgba { a: alpha as u8, ..color });
            }
        }
    }
    sprite
}

/// A bouncing sphere with its own pre-rendered sprite.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub r: f64,
    sprite: Surface,
}

impl Sphere {
    pub fn from_parts(x: f64, y: f64, dx: f64, dy: f64, r: f64, color: Rgba) -> Self {
        Self {
            x,
            y,
            dx,
            dy,
            r,
            sprite: paint(r, color),
        }
    }

    /// A sphere at a random in-bounds position, sized for `round`.
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, round: u32, rng: &mut R) -> Self {
        let angle = std::f64::consts::TAU * rng.gen::<f64>();
        let speed = clamped_normal(rng, 5.0, 1.5, 1.0, 9.0);
        let (shape, offset) = round_radius(round);
        let r = clamped_normal(rng, offset, shape, 7.0, 90.0);

        let x = (width - 2.0 * r) * rng.gen::<f64>() + r;
        let y = (height - 2.0 * r) * rng.gen::<f64>() + r;
        let color = pastel(rng);
        let sphere = Self::from_parts(x, y, angle.cos() * speed, angle.sin() * speed, r, color);

        log::debug!(
            "new sphere: x={:.1} y={:.1} dx={:.2} dy={:.2} r={:.1}",
            sphere.x,
            sphere.y,
            sphere.dx,
            sphere.dy,
            sphere.r
        );
        sphere
    }

    /// One of four fixed corner spheres, chosen by the low two bits of `ix`.
    pub fn test_sphere<R: Rng + ?Sized>(width: f64, height: f64, ix: usize, rng: &mut R) -> Self {
        let r = 20.0;
        let (x, dx) = if ix % 2 == 0 { (r, 1.0) } else { (width - r, -1.0) };
        let (y, dy) = if ix & 2 == 0 { (r, 1.0) } else { (height - r, -1.0) };
        Self::from_parts(x, y, dx, dy, r, pastel(rng))
    }

    #[cfg(test)]
    pub fn sprite(&self) -> &Surface {
        &self.sprite
    }

    /// Advance one tick, bouncing off the playfield edges.
    ///
    /// A vertical bounce reflects `dy` and then moves a further `2 * dy`, so the
    /// sphere lands at its previous height mirrored away from the wall rather
    /// than clamped to it.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.dx;
        self.y += self.dy;

        if self.x - self.r < 0.0 {
            self.dx = -self.dx;
            self.x = self.r;
        } else if self.x + self.r >= width {
            self.dx = -self.dx;
            self.x = width - self.r;
        }

        if self.y - self.r < 0.0 || self.y + self.r >= height {
            self.dy = -self.dy;
            self.y += 2.0 * self.dy;
        }

        if self.x < self.r || self.x + self.r > width {
            log::warn!(
                "sphere x out of bounds: x={:.2} y={:.2} dx={:.2} dy={:.2}",
                self.x,
                self.y,
                self.dx,
                self.dy
            );
        }
        if self.y < self.r || self.y + self.r > height {
            log::warn!(
                "sphere y out of bounds: x={:.2} y={:.2} dx={:.2} dy={:.2}",
                self.x,
                self.y,
                self.dx,
                self.dy
            );
        }
    }

    /// The explosion this sphere turns into when popped.
    pub fn explode(&self) -> Explosion {
        Explosion::new(self.x, self.y, self.r, 3.5 * self.r, self.r.sqrt())
    }

    pub fn draw(&self, surface: &mut Surface) {
        surface.blit(&self.sprite, self.x - self.r, self.y - self.r);
    }
}
