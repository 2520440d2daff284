//! Command-line interface for the fox and hounds console game.

use clap::Parser;
use std::path::PathBuf;
use strictly_foxhounds::{check_dimension, MAX_DIMENSION, MIN_DIMENSION};
use tracing::{debug, instrument};

/// Fox and Hounds - one fox against a pack of hounds on a checkered board
#[derive(Parser, Debug)]
#[command(name = "foxhounds")]
#[command(about = "Play fox and hounds in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board dimension (4-26). Anything else falls back to the configured size.
    pub dimension: Option<String>,

    /// Optional TOML config file
    #[arg(long, default_value = "foxhounds.toml")]
    pub config: PathBuf,
}

impl Cli {
    /// The dimension given on the command line, if it is usable.
    ///
    /// Only one or two ASCII digits naming a size in `[4, 26]` count;
    /// anything else is ignored without complaint.
    #[instrument(skip(self), fields(raw = ?self.dimension))]
    pub fn requested_dimension(&self) -> Option<usize> {
        let raw = self.dimension.as_deref()?;
        if !(1..=2).contains(&raw.len()) || !raw.bytes().all(|b| b.is_ascii_digit()) {
            debug!("Dimension argument is not a number; ignoring");
            return None;
        }

        let dimension: usize = raw.parse().ok()?;
        if check_dimension(dimension).is_err() {
            debug!(
                dimension,
                min = MIN_DIMENSION,
                max = MAX_DIMENSION,
                "Dimension argument out of range; ignoring"
            );
            return None;
        }
        Some(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("foxhounds").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_argument() {
        assert_eq!(cli(&[]).requested_dimension(), None);
    }

    #[test]
    fn test_valid_dimensions() {
        assert_eq!(cli(&["4"]).requested_dimension(), Some(4));
        assert_eq!(cli(&["08"]).requested_dimension(), Some(8));
        assert_eq!(cli(&["26"]).requested_dimension(), Some(26));
    }

    #[test]
    fn test_invalid_dimensions_ignored() {
        for arg in ["3", "27", "99", "100", "eight", "-8", "+8"] {
            assert_eq!(cli(&[arg]).requested_dimension(), None, "{arg}");
        }
    }

    #[test]
    fn test_config_flag() {
        let cli = cli(&["--config", "other.toml", "10"]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.requested_dimension(), Some(10));
    }
}
