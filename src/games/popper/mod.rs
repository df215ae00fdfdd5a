pub mod collision;
pub mod explosion;
pub mod random;
pub mod sphere;

use crate::config::{GameConfig, TEST_MODE_ROUND};
use crate::digits::NumberRenderer;
use crate::games::{Game, GameOver, TickOutcome};
use crate::input::Input;
use crate::surface::{Rgba, Surface};

use collision::intersects;
use explosion::Explosion;
use random::{seeded, GameRng};
use sphere::Sphere;

const BOMB_SIZE: usize = 10;
const BOMB_PITCH: f64 = 12.0;
const DIGIT_WIDTH: f64 = 8.0;
const ROUND_POS: (f64, f64) = (10.0, 550.0);
const SCORE_POS: (f64, f64) = (600.0, 550.0);

/// `a, b = b, a + b` from `(1, 1)`, `n` times; returns `b`.
pub fn fib(n: u32) -> u64 {
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 0..n {
        (a, b) = (b, a.saturating_add(b));
    }
    b
}

/// Small red diamond shown once per unused charge.
fn bomb_sprite() -> Surface {
    let mut bomb = Surface::new(BOMB_SIZE, BOMB_SIZE);
    let red = Rgba::new(255, 0, 0, 255);
    for x in 0..BOMB_SIZE as i32 {
        for y in 0..BOMB_SIZE as i32 {
            if (4 - x).abs() + (4 - y).abs() < 5 {
                bomb.set(x, y, red);
            }
        }
    }
    bomb
}

/// Round controller: owns every sphere and explosion of the current round.
pub struct Popper {
    config: GameConfig,
    width: f64,
    height: f64,
    round: u32,
    spheres: Vec<Sphere>,
    explosions: Vec<Explosion>,
    available: u32,
    left: i32,
    score: u64,
    score_step: u64,
    seed: u64,
    rng: GameRng,
    game_over: Option<GameOver>,
    bomb: Surface,
    digits: NumberRenderer,
}

impl Popper {
    pub fn new(config: GameConfig) -> Self {
        let (seed, rng) = seeded(config.seed);
        log::info!("new game, seed {}", seed);

        let mut game = Self {
            width: config.width as f64,
            height: config.height as f64,
            config,
            round: 0,
            spheres: Vec::new(),
            explosions: Vec::new(),
            available: 1,
            left: 0,
            score: 0,
            score_step: 1,
            seed,
            rng,
            game_over: None,
            bomb: bomb_sprite(),
            digits: NumberRenderer::new(),
        };
        game.new_round();

        if game.config.test_mode {
            game.test_setup();
        }
        if let Some(count) = game.config.fixed_layout {
            game.fixed_layout(count);
        }
        game
    }

    /// Jump ahead to a late round; the round in play keeps its spheres.
    pub fn test_setup(&mut self) {
        self.round = TEST_MODE_ROUND;
        log::debug!("test setup: round={}", self.round);
    }

    /// Replace the live spheres with `count` fixed corner spheres.
    pub fn fixed_layout(&mut self, count: usize) {
        let (w, h) = (self.width, self.height);
        self.spheres = (0..count)
            .map(|ix| Sphere::test_sphere(w, h, ix, &mut self.rng))
            .collect();
        log::debug!("fixed layout: {} spheres", count);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    fn adjust_available(&mut self) {
        while fib(self.available) <= self.round as u64 {
            self.available += 1;
        }
    }

    fn new_round(&mut self) {
        log::debug!(
            "round {} ending: spheres={} explosions={} available={}",
            self.round,
            self.spheres.len(),
            self.explosions.len(),
            self.available
        );
        self.round += 1;
        self.score_step = 1;
        let (w, h, round) = (self.width, self.height, self.round);
        self.spheres = (0..round)
            .map(|_| Sphere::new(w, h, round, &mut self.rng))
            .collect();
        self.explosions.clear();
        self.adjust_available();
        self.left = self.available as i32;
        log::debug!(
            "round {} starting: spheres={} available={}",
            self.round,
            self.spheres.len(),
            self.available
        );
    }

    /// Spheres remain but nothing can pop them any more.
    fn stalled(&self) -> bool {
        self.explosions.is_empty() && self.left <= 0 && !self.spheres.is_empty()
    }

    fn round_over(&self) -> bool {
        self.spheres.is_empty() && self.explosions.is_empty()
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self, input: &dyn Input) -> TickOutcome {
        if let Some(over) = self.game_over {
            return TickOutcome::GameOver(over);
        }
        if self.stalled() {
            let over = GameOver {
                round: self.round,
                score: self.score,
            };
            log::info!("{}", over);
            self.game_over = Some(over);
            return TickOutcome::GameOver(over);
        }

        for sphere in &mut self.spheres {
            sphere.step(self.width, self.height);
        }
        // Explosions that finished last tick are purged here, not mid-tick
        self.explosions.retain_mut(|e| {
            if e.done() {
                return false;
            }
            e.step();
            true
        });

        // Only explosions that were live before this pass can pop spheres
        let live = self.explosions.len();
        for sphere in std::mem::take(&mut self.spheres) {
            if self.explosions[..live].iter().any(|e| intersects(&sphere, e)) {
                self.explosions.push(sphere.explode());
                self.score += self.score_step;
                self.score_step += 1;
            } else {
                self.spheres.push(sphere);
            }
        }

        if self.round_over() {
            self.new_round();
        }

        if input.left_just_pressed() {
            let (x, y) = input.cursor_position();
            let explosion = Explosion::from_click(x, y, &mut self.rng);
            log::debug!(
                "detonation at ({}, {}): max_r={:.1} dr={:.2}",
                x,
                y,
                explosion.max_r(),
                explosion.dr()
            );
            self.explosions.push(explosion);
            // May go below zero; stalled() treats that the same as zero
            self.left -= 1;
        }

        TickOutcome::Continue
    }

    pub fn render(&mut self, surface: &mut Surface) {
        surface.fill(Rgba::BLACK);

        for sphere in &self.spheres {
            sphere.draw(surface);
        }
        for explosion in self.explosions.iter().filter(|e| !e.done()) {
            explosion.draw(surface);
        }
        for l in 0..self.left.max(0) {
            surface.blit(&self.bomb, BOMB_PITCH * l as f64, 5.0);
        }

        self.digits
            .draw_number(surface, ROUND_POS.0, ROUND_POS.1, DIGIT_WIDTH, self.round as u64);
        self.digits
            .draw_number(surface, SCORE_POS.0, SCORE_POS.1, DIGIT_WIDTH, self.score);
    }
}

impl Game for Popper {
    fn update(&mut self, input: &dyn Input) -> TickOutcome {
        self.tick(input)
    }

    fn draw(&mut self, surface: &mut Surface) {
        self.render(surface);
    }

    fn reset(&mut self) {
        *self = Popper::new(self.config.clone());
    }

    fn get_score(&self) -> u64 {
        self.score
    }

    fn get_round(&self) -> u32 {
        self.round
    }

    fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}
