use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// What the game may ask about the pointer during a tick.
pub trait Input {
    /// True only on the tick after the left button went down.
    fn left_just_pressed(&self) -> bool;
    /// Cursor position in playfield coordinates.
    fn cursor_position(&self) -> (i32, i32);
}

/// Turns terminal mouse events into per-tick pointer state.
///
/// A press is latched until `end_frame` so the game sees exactly one edge per
/// click no matter how events and ticks interleave.
pub struct MouseLatch {
    field_width: f64,
    field_height: f64,
    viewport: Rect,
    cursor: (i32, i32),
    pressed: bool,
}

impl MouseLatch {
    pub fn new(field_width: u32, field_height: u32) -> Self {
        Self {
            field_width: field_width as f64,
            field_height: field_height as f64,
            viewport: Rect::default(),
            cursor: (0, 0),
            pressed: false,
        }
    }

    /// Terminal cells the playfield was last drawn into.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Map a terminal cell to the playfield point at its centre.
    fn to_field(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.viewport;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
            return None;
        }
        let fx = (column - area.x) as f64 + 0.5;
        let fy = (row - area.y) as f64 + 0.5;
        Some((
            (fx * self.field_width / area.width as f64) as i32,
            (fy * self.field_height / area.height as f64) as i32,
        ))
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let Some(pos) = self.to_field(event.column, event.row) else {
            return;
        };
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.cursor = pos;
                self.pressed = true;
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor = pos;
            }
            _ => {}
        }
    }

    pub fn end_frame(&mut self) {
        self.pressed = false;
    }
}

impl Input for MouseLatch {
    fn left_just_pressed(&self) -> bool {
        self.pressed
    }

    fn cursor_position(&self) -> (i32, i32) {
        self.cursor
    }
}

/// Pointer state fixed up front, for driving the game in tests.
#[cfg(test)]
pub struct ScriptedInput {
    pub click: Option<(i32, i32)>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn idle() -> Self {
        Self { click: None }
    }

    pub fn click(x: i32, y: i32) -> Self {
        Self { click: Some((x, y)) }
    }
}

#[cfg(test)]
impl Input for ScriptedInput {
    fn left_just_pressed(&self) -> bool {
        self.click.is_some()
    }

    fn cursor_position(&self) -> (i32, i32) {
        self.click.unwrap_or((0, 0))
    }
}
