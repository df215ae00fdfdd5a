use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// The game's random source. Seeded so a run can be replayed.
pub type GameRng = Pcg32;

/// Seed a generator, drawing a fresh seed from the thread RNG when none is given.
/// Returns the seed actually used alongside the generator.
pub fn seeded(seed: Option<u64>) -> (u64, GameRng) {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    (seed, Pcg32::seed_from_u64(seed))
}

/// Sample a normal distribution (Box-Muller).
pub fn normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // 1 - [0, 1) keeps the log argument away from zero
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + z * std_dev
}

/// Sample a normal distribution and clamp the result to `[lo, hi]`.
pub fn clamped_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64, lo: f64, hi: f64) -> f64 {
    normal(rng, mean, std_dev).clamp(lo, hi)
}
