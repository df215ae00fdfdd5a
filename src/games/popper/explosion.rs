use rand::Rng;

use super::random::clamped_normal;
use crate::surface::{Rgba, Surface};

pub const EXPLOSION_COLOR: Rgba = Rgba::new(224, 224, 224, 128);

/// A ring that grows out to `max_r`, then hollows out from the centre.
///
/// `0 <= inner_r <= r <= max_r` holds at all times; the explosion is done
/// once the hollow reaches `max_r`.
#[derive(Clone, Debug)]
pub struct Explosion {
    x: f64,
    y: f64,
    r: f64,
    max_r: f64,
    inner_r: f64,
    dr: f64,
    hollowing: bool,
}

impl Explosion {
    pub fn new(x: f64, y: f64, r: f64, max_r: f64, dr: f64) -> Self {
        Self {
            x,
            y,
            r: r.min(max_r),
            max_r,
            inner_r: 0.0,
            dr,
            hollowing: false,
        }
    }

    /// A player-triggered explosion: starts from nothing at the cursor with a
    /// randomised size and growth rate.
    pub fn from_click<R: Rng + ?Sized>(x: i32, y: i32, rng: &mut R) -> Self {
        let max_r = clamped_normal(rng, 70.0, 7.0, 50.0, 90.0);
        let dr = clamped_normal(rng, 5.0, 2.0, 3.0, 10.0);
        Self::new(x as f64, y as f64, 0.0, max_r, dr)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn max_r(&self) -> f64 {
        self.max_r
    }

    #[cfg(test)]
    pub fn inner_r(&self) -> f64 {
        self.inner_r
    }

    pub fn dr(&self) -> f64 {
        self.dr
    }

    pub fn step(&mut self) {
        if self.r < self.max_r {
            self.r += self.dr;
        }
        if self.r > self.max_r {
            self.r = self.max_r;
        }

        // The hollow starts once the ring is past half size and never stops
        if !self.hollowing && self.r > 0.5 * self.max_r {
            self.hollowing = true;
        }
        if self.hollowing {
            self.inner_r = (self.inner_r + self.dr).min(self.r);
        }
    }

    pub fn done(&self) -> bool {
        self.inner_r >= self.max_r
    }

    /// Light every pixel of the annulus between `inner_r` and `r`.
    pub fn draw(&self, surface: &mut Surface) {
        let ir = (self.r + 0.5) as i32;
        let bx = self.x as i32;
        let by = self.y as i32;
        let outer2 = self.r * self.r;
        let inner2 = self.inner_r * self.inner_r;

        for dx in -ir..=ir {
            for dy in -ir..=ir {
                let fdx = self.x - (bx + dx) as f64;
                let fdy = self.y - (by + dy) as f64;
                let d2 = fdx * fdx + fdy * fdy;
                if d2 <= outer2 && d2 >= inner2 {
                    surface.set(bx + dx, by + dy, EXPLOSION_COLOR);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::popper::random::seeded;
    use proptest::prelude::*;

    fn assert_radii(e: &Explosion) {
        assert!(e.inner_r() >= 0.0);
        assert!(e.inner_r() <= e.r(), "inner {} > r {}", e.inner_r(), e.r());
        assert!(e.r() <= e.max_r(), "r {} > max {}", e.r(), e.max_r());
    }

    #[test]
    fn test_grows_then_hollows() {
        let mut e = Explosion::new(100.0, 100.0, 0.0, 50.0, 5.0);
        for _ in 0..5 {
            e.step();
        }
        assert_eq!(e.r(), 25.0);
        assert_eq!(e.inner_r(), 0.0);

        // Crossing the midpoint starts the hollow on the same step
        e.step();
        assert_eq!(e.r(), 30.0);
        assert_eq!(e.inner_r(), 5.0);

        for _ in 0..4 {
            e.step();
        }
        assert_eq!(e.r(), 50.0);
        assert_eq!(e.inner_r(), 25.0);
        assert!(!e.done());

        for _ in 0..5 {
            e.step();
        }
        assert_eq!(e.inner_r(), 50.0);
        assert!(e.done());
    }

    #[test]
    fn test_done_within_bound() {
        let (_, mut rng) = seeded(Some(11));
        for _ in 0..50 {
            let mut e = Explosion::from_click(400, 300, &mut rng);
            let n = (e.max_r() / e.dr()).ceil() as usize;
            let mut finished = false;
            for _ in 0..2 * n {
                e.step();
                assert_radii(&e);
                if e.done() {
                    finished = true;
                    break;
                }
            }
            assert!(finished);
        }
    }

    #[test]
    fn test_done_iff_hollow_reaches_max() {
        let mut e = Explosion::new(0.0, 0.0, 10.0, 35.0, 10.0_f64.sqrt());
        while !e.done() {
            assert!(e.inner_r() < e.max_r());
            e.step();
        }
        assert!(e.inner_r() >= e.max_r());
    }

    #[test]
    fn test_click_seeding_ranges() {
        let (_, mut rng) = seeded(Some(5));
        for _ in 0..200 {
            let e = Explosion::from_click(10, 20, &mut rng);
            assert_eq!((e.x(), e.y()), (10.0, 20.0));
            assert_eq!(e.r(), 0.0);
            assert!((50.0..=90.0).contains(&e.max_r()));
            assert!((3.0..=10.0).contains(&e.dr()));
        }
    }

    #[test]
    fn test_draw_fills_annulus() {
        let mut e = Explosion::new(20.0, 20.0, 10.0, 10.0, 4.0);
        let mut solid = Surface::new(40, 40);
        e.draw(&mut solid);
        assert_eq!(solid.get(20, 20), Some(EXPLOSION_COLOR));
        assert_eq!(solid.get(29, 20), Some(EXPLOSION_COLOR));
        assert_eq!(solid.get(31, 20), Some(Rgba::TRANSPARENT));

        e.step();
        let mut ring = Surface::new(40, 40);
        e.draw(&mut ring);
        assert_eq!(ring.get(20, 20), Some(Rgba::TRANSPARENT));
        assert_eq!(ring.get(29, 20), Some(EXPLOSION_COLOR));
        assert!(ring.coverage() < solid.coverage());
    }

    proptest! {
        #[test]
        fn prop_radii_invariant(max_r in 10.0f64..120.0, dr in 0.5f64..12.0, start in 0.0f64..1.0) {
            let mut e = Explosion::new(0.0, 0.0, start * max_r * 0.4, max_r, dr);
            for _ in 0..1000 {
                prop_assert!(e.inner_r() >= 0.0);
                prop_assert!(e.inner_r() <= e.r());
                prop_assert!(e.r() <= e.max_r());
                if e.done() {
                    break;
                }
                e.step();
            }
            prop_assert!(e.done());
        }
    }
}
