use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use crate::config::GameConfig;
use crate::games::popper::Popper;
use crate::games::{Game, GameOver, TickOutcome};
use crate::input::MouseLatch;
use crate::surface::Surface;

pub struct App {
    pub should_quit: bool,
    pub paused: bool,
    pub popper: Popper,
    pub mouse: MouseLatch,
    pub game_over: Option<GameOver>,
    /// Off-screen frame the game paints into
    pub frame: Surface,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let (w, h) = (config.width, config.height);
        Self {
            should_quit: false,
            paused: false,
            popper: Popper::new(config),
            mouse: MouseLatch::new(w, h),
            game_over: None,
            frame: Surface::new(w as usize, h as usize),
        }
    }

    pub fn on_tick(&mut self) {
        if !self.paused && !self.popper.is_game_over() {
            if let TickOutcome::GameOver(over) = self.popper.update(&self.mouse) {
                self.game_over = Some(over);
            }
        }
        // A click that arrived while paused is dropped, not replayed later
        self.mouse.end_frame();
    }

    pub fn draw_frame(&mut self) {
        self.popper.draw(&mut self.frame);
    }

    pub fn on_mouse(&mut self, event: MouseEvent) {
        self.mouse.handle_mouse(event);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game_over.is_some() {
                    self.restart();
                }
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if self.game_over.is_none() {
                    self.paused = !self.paused;
                }
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        self.popper.reset();
        self.game_over = None;
        self.paused = false;
        log::info!("restarted, seed {}", self.popper.seed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::layout::Rect;

    fn app() -> App {
        App::new(GameConfig {
            seed: Some(21),
            ..GameConfig::default()
        })
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app();
        a.on_key(key(KeyCode::Char('q')));
        assert!(a.should_quit);

        let mut a = app();
        a.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(a.should_quit);
    }

    #[test]
    fn test_click_spends_a_charge_on_next_tick() {
        let mut a = app();
        a.mouse.set_viewport(Rect::new(0, 0, 80, 30));
        a.on_mouse(click(40, 15));
        assert_eq!(a.popper.left(), 1);
        a.on_tick();
        assert_eq!(a.popper.left(), 0);
        // The press is consumed; a second tick spends nothing
        a.on_tick();
        assert_eq!(a.popper.left(), 0);
    }

    #[test]
    fn test_pause_freezes_and_drops_clicks() {
        let mut a = app();
        a.mouse.set_viewport(Rect::new(0, 0, 80, 30));
        a.on_key(key(KeyCode::Char('p')));
        let before = a.popper.spheres()[0].x;
        a.on_mouse(click(40, 15));
        a.on_tick();
        assert_eq!(a.popper.spheres()[0].x, before);
        assert_eq!(a.popper.left(), 1);

        a.on_key(key(KeyCode::Char('p')));
        a.on_tick();
        assert_eq!(a.popper.left(), 1);
    }

    #[test]
    fn test_game_over_then_restart() {
        let mut a = app();
        a.mouse.set_viewport(Rect::new(0, 0, 80, 30));
        // Spend the only charge in a corner, then wait for it to burn out
        a.on_mouse(click(0, 0));
        for _ in 0..200 {
            a.on_tick();
            if a.game_over.is_some() {
                break;
            }
        }
        // Either the charge cleared round 1 or the game ended with spheres left
        if let Some(over) = a.game_over {
            assert!(a.popper.is_game_over());
            assert_eq!(over.round, a.popper.get_round());
            a.on_key(key(KeyCode::Enter));
            assert!(a.game_over.is_none());
            assert_eq!(a.popper.get_round(), 1);
            assert_eq!(a.popper.left(), 1);
        } else {
            assert!(a.popper.get_round() > 1);
        }
    }

    #[test]
    fn test_draw_frame_fills_surface() {
        let mut a = app();
        a.draw_frame();
        assert_eq!(a.frame.coverage(), a.frame.width() * a.frame.height());
    }
}
