use std::path::PathBuf;

use clap::Parser;

pub const FIELD_WIDTH: u32 = 800;
pub const FIELD_HEIGHT: u32 = 600;
pub const DEFAULT_TICK_MS: u64 = 16;
/// Round the test configuration jumps to before the next round is seeded.
pub const TEST_MODE_ROUND: u32 = 40;

/// Pop the bouncing spheres before they pile up.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose (debug) logging.
    #[arg(short, long)]
    pub verbose: bool,
    /// Start in the test configuration (jumps ahead to a late round).
    #[arg(short = 'd', long = "test-mode")]
    pub test_mode: bool,
    /// Replace the first round's spheres with COUNT fixed corner spheres.
    #[arg(long = "fixed-layout", value_name = "COUNT")]
    pub fixed_layout: Option<usize>,
    /// Seed for the random source; a fresh one is drawn when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Where log records are written.
    #[arg(long = "log-file", value_name = "PATH", default_value = "popper.log")]
    pub log_file: PathBuf,
    /// Milliseconds per frame.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=1000)
    )]
    pub tick_ms: u64,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Everything a new game needs to know.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub test_mode: bool,
    pub fixed_layout: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            seed: None,
            test_mode: false,
            fixed_layout: None,
        }
    }
}

impl From<&Cli> for GameConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            seed: cli.seed,
            test_mode: cli.test_mode,
            fixed_layout: cli.fixed_layout,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["popper"]);
        assert!(!cli.verbose);
        assert_eq!(cli.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(cli.log_level(), log::LevelFilter::Info);
        let config = GameConfig::from(&cli);
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["popper", "-v", "-d", "--seed", "12", "--fixed-layout", "4"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        let config = GameConfig::from(&cli);
        assert!(config.test_mode);
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.fixed_layout, Some(4));
    }

    #[test]
    fn test_tick_ms_range() {
        assert!(Cli::try_parse_from(["popper", "--tick-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["popper", "--tick-ms", "33"]).is_ok());
    }
}
