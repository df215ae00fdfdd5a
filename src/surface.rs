/// An RGBA colour, 8 bits per channel, straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Composite `self` over `dst`
    fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let a = a as u32;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
                Rgba {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: (a + (dst.a as u32 * inv + 127) / 255) as u8,
                }
            }
        }
    }
}

/// A fixed-size pixel buffer. Writes outside the buffer are silently dropped.
#[derive(Clone, Debug)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Surface {
    /// Allocate a fully transparent `width` x `height` surface.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Overwrite a single pixel (no blending).
    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Draw `src` onto this surface with its top-left corner at `(x, y)`,
    /// compositing with straight alpha-over. Fractional offsets are floored.
    pub fn blit(&mut self, src: &Surface, x: f64, y: f64) {
        let ox = x.floor() as i32;
        let oy = y.floor() as i32;
        for sy in 0..src.height {
            let ty = oy + sy as i32;
            if ty < 0 || ty as usize >= self.height {
                continue;
            }
            for sx in 0..src.width {
                let tx = ox + sx as i32;
                if let Some(i) = self.index(tx, ty) {
                    let s = src.pixels[sy * src.width + sx];
                    self.pixels[i] = s.over(self.pixels[i]);
                }
            }
        }
    }

    /// Number of pixels that are not fully transparent
    #[cfg(test)]
    pub fn coverage(&self) -> usize {
        self.pixels.iter().filter(|p| p.a > 0).count()
    }
}
