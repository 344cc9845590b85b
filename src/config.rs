//! Command-line configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::audio::DEFAULT_TICK;
use crate::model::DEFAULT_VOLUME;

/// Terminal music player demo over a mock catalog
#[derive(Debug, Parser)]
#[command(name = "spotify-clone", version)]
pub struct Cli {
    /// JSON catalog to load instead of the built-in mock data
    #[arg(long, env = "SPOTIFY_CLONE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Initial volume between 0.0 and 1.0
    #[arg(long, env = "SPOTIFY_CLONE_VOLUME", default_value_t = DEFAULT_VOLUME, value_parser = parse_volume)]
    pub volume: f64,

    /// Directory for rolling log files
    #[arg(long, env = "SPOTIFY_CLONE_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,

    /// Media engine clock period in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK.as_millis() as u64, value_parser = clap::value_parser!(u64).range(10..=5000))]
    pub tick_ms: u64,
}

impl Cli {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn parse_volume(s: &str) -> Result<f64, String> {
    let volume: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&volume) {
        Ok(volume)
    } else {
        Err(format!("volume must be between 0.0 and 1.0, got {volume}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["spotify-clone"]).unwrap();
        assert!(cli.catalog.is_none());
        assert_eq!(cli.volume, DEFAULT_VOLUME);
        assert_eq!(cli.log_dir, PathBuf::from(".logs"));
        assert_eq!(cli.tick(), DEFAULT_TICK);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "spotify-clone",
            "--catalog",
            "mock.json",
            "--volume",
            "0.25",
            "--tick-ms",
            "100",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("mock.json")));
        assert_eq!(cli.volume, 0.25);
        assert_eq!(cli.tick_ms, 100);
    }

    #[test]
    fn rejects_out_of_range_volume() {
        assert!(parse_volume("1.5").is_err());
        assert!(parse_volume("-0.1").is_err());
        assert!(parse_volume("loud").is_err());
        assert_eq!(parse_volume("1").unwrap(), 1.0);
    }

    #[test]
    fn rejects_tiny_tick() {
        assert!(Cli::try_parse_from(["spotify-clone", "--tick-ms", "1"]).is_err());
    }
}
