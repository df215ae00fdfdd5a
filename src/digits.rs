use std::collections::HashMap;

use crate::surface::{Rgba, Surface};

pub const SEGMENT_COLOR: Rgba = Rgba::new(255, 200, 0, 255);

// Segment bits:
//
//    - 0 -
//   |     |
//   1     2
//   |     |
//    - 3 -
//   |     |
//   4     5
//   |     |
//    - 6 -
const DIGIT_MASKS: [u8; 10] = [0x77, 0x24, 0x5d, 0x6d, 0x2e, 0x6b, 0x7b, 0x25, 0x7f, 0x6f];

/// Segment mask for an ASCII digit
pub fn digit_mask(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| DIGIT_MASKS[d as usize])
}

/// Horizontal offset and segment mask for each digit of `n`, left to right.
pub fn layout(n: u64, width: f64) -> Vec<(f64, u8)> {
    n.to_string()
        .chars()
        .enumerate()
        .filter_map(|(ix, c)| digit_mask(c).map(|mask| (2.0 * ix as f64 * width, mask)))
        .collect()
}

/// The two primitive tiles every segment is stamped from.
struct Glyphs {
    upright: Surface,
    flat: Surface,
}

impl Glyphs {
    fn build(width: f64) -> Self {
        let (w_upright, h_upright) = ((0.25 * width) as i32, (1.5 * width) as i32);
        let (w_flat, h_flat) = (width as i32, (0.25 * width) as i32);

        let mut upright = Surface::new(w_upright.max(0) as usize, h_upright.max(0) as usize);
        let middle = w_upright / 2;
        for n in 0..middle {
            for q in middle..(h_upright - middle) {
                upright.set(middle - n, q, SEGMENT_COLOR);
                upright.set(middle + n, q, SEGMENT_COLOR);
            }
        }

        let mut flat = Surface::new(w_flat.max(0) as usize, h_flat.max(0) as usize);
        let middle = h_flat / 2;
        for n in 0..middle {
            for q in middle..(w_flat - middle) {
                flat.set(q, middle - n, SEGMENT_COLOR);
                flat.set(q, middle + n, SEGMENT_COLOR);
            }
        }

        Self { upright, flat }
    }
}

/// Seven-segment number renderer. Glyph tiles are built the first time a
/// stroke width is used and kept for the life of the renderer.
#[derive(Default)]
pub struct NumberRenderer {
    cache: HashMap<u64, Glyphs>,
}

impl NumberRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn glyphs(&mut self, width: f64) -> &Glyphs {
        self.cache
            .entry(width.to_bits())
            .or_insert_with(|| Glyphs::build(width))
    }

    /// Number of distinct stroke widths built so far
    #[cfg(test)]
    pub fn cached_widths(&self) -> usize {
        self.cache.len()
    }

    /// Stamp the segments set in `mask` with the digit's top-left at `(x, y)`.
    pub fn draw_digit(&mut self, target: &mut Surface, x: f64, y: f64, width: f64, mask: u8) {
        let glyphs = self.glyphs(width);
        let jig = width / 8.0;
        let left = x - jig;
        let right = x + width + jig;
        let mid = y + 1.5 * width;

        let placements = [
            (0x01, &glyphs.flat, x, y),
            (0x02, &glyphs.upright, left, y),
            (0x04, &glyphs.upright, right, y),
            (0x08, &glyphs.flat, x, mid),
            (0x10, &glyphs.upright, left, mid),
            (0x20, &glyphs.upright, right, mid),
            (0x40, &glyphs.flat, x, y + 3.0 * width),
        ];
        for (bit, tile, tx, ty) in placements {
            if mask & bit != 0 {
                target.blit(tile, tx, ty);
            }
        }
    }

    pub fn draw_number(&mut self, target: &mut Surface, x: f64, y: f64, width: f64, n: u64) {
        for (offset, mask) in layout(n, width) {
            self.draw_digit(target, x + offset, y, width, mask);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_masks() {
        assert_eq!(digit_mask('0'), Some(0x77));
        assert_eq!(digit_mask('1'), Some(0x24));
        assert_eq!(digit_mask('8'), Some(0x7f));
        assert_eq!(digit_mask('x'), None);
    }

    #[test]
    fn test_layout_42() {
        assert_eq!(layout(42, 8.0), vec![(0.0, 0x2e), (16.0, 0x5d)]);
        assert_eq!(layout(0, 8.0), vec![(0.0, 0x77)]);
    }

    #[test]
    fn test_glyphs_are_memoized_by_width() {
        let mut digits = NumberRenderer::new();
        let mut target = Surface::new(100, 60);
        digits.draw_number(&mut target, 0.0, 0.0, 8.0, 42);
        digits.draw_number(&mut target, 30.0, 0.0, 8.0, 7);
        assert_eq!(digits.cached_widths(), 1);
        digits.draw_number(&mut target, 0.0, 30.0, 12.0, 1);
        assert_eq!(digits.cached_widths(), 2);
    }

    #[test]
    fn test_top_segment_only() {
        let mut digits = NumberRenderer::new();
        let mut target = Surface::new(40, 40);
        digits.draw_digit(&mut target, 10.0, 10.0, 8.0, 0x01);
        // Flat tile is 8x2 with its lit row at y=1, columns 1..7
        for x in 11..17 {
            assert_eq!(target.get(x, 11), Some(SEGMENT_COLOR));
        }
        assert_eq!(target.coverage(), 6);
    }

    #[test]
    fn test_eight_lights_all_segments() {
        let mut digits = NumberRenderer::new();
        let mut one = Surface::new(40, 40);
        digits.draw_digit(&mut one, 10.0, 5.0, 8.0, 0x01);
        let flat = one.coverage();

        let mut eight = Surface::new(40, 40);
        digits.draw_number(&mut eight, 10.0, 5.0, 8.0, 8);
        let mut upright = Surface::new(40, 40);
        digits.draw_digit(&mut upright, 10.0, 5.0, 8.0, 0x02);
        // Segments never overlap at this width
        assert_eq!(eight.coverage(), 3 * flat + 4 * upright.coverage());
    }
}
