use ratatui::prelude::*;

use crate::surface::{Rgba, Surface};

/// The largest rect inside `area` that shows a `field_w` x `field_h` field
/// undistorted, centred. Each cell holds two vertically stacked samples.
pub fn fit(area: Rect, field_w: u32, field_h: u32) -> Rect {
    let cols = area.width as u32;
    let rows = area.height as u32;
    let (w, h) = if 2 * rows * field_w / field_h <= cols {
        (2 * rows * field_w / field_h, rows)
    } else {
        (cols, cols * field_h / field_w / 2)
    };
    let (w, h) = (w as u16, h as u16);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Pixel as seen over a black background.
fn shown(p: Rgba) -> (u8, u8, u8) {
    let a = p.a as u32;
    let scale = |c: u8| (c as u32 * a / 255) as u8;
    (scale(p.r), scale(p.g), scale(p.b))
}

fn luma((r, g, b): (u8, u8, u8)) -> u32 {
    299 * r as u32 + 587 * g as u32 + 114 * b as u32
}

/// Brightest pixel in the block, so one-pixel strokes survive downsampling.
fn sample(surface: &Surface, x0: usize, x1: usize, y0: usize, y1: usize) -> Color {
    let mut best = (0, 0, 0);
    for y in y0..y1.max(y0 + 1) {
        for x in x0..x1.max(x0 + 1) {
            if let Some(p) = surface.get(x as i32, y as i32) {
                let c = shown(p);
                if luma(c) > luma(best) {
                    best = c;
                }
            }
        }
    }
    Color::Rgb(best.0, best.1, best.2)
}

/// Downsample `surface` into `cols` x `rows` upper-half-block cells.
pub fn render_surface(surface: &Surface, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let (sw, sh) = (surface.width(), surface.height());
    let cols = cols as usize;
    let sub_rows = 2 * rows as usize;
    if cols == 0 || sub_rows == 0 {
        return Vec::new();
    }

    let x_edge = |c: usize| c * sw / cols;
    let y_edge = |r: usize| r * sh / sub_rows;

    (0..rows as usize)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..cols)
                .map(|col| {
                    let (x0, x1) = (x_edge(col), x_edge(col + 1));
                    let top = sample(surface, x0, x1, y_edge(2 * row), y_edge(2 * row + 1));
                    let bottom = sample(surface, x0, x1, y_edge(2 * row + 1), y_edge(2 * row + 2));
                    Span::styled("▀", Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
