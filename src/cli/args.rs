use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "nasa-tlx")]
#[command(about = "NASA-TLX workload assessment (6 ratings + 15 pairwise comparisons)", long_about = None)]
#[command(version)]
pub struct Args {
    /// Participant identifier recorded with the result
    #[arg(long)]
    pub participant: Option<String>,

    /// Task identifier recorded with the result
    #[arg(long)]
    pub task: Option<String>,

    /// Seed for a reproducible comparison order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for JSON/CSV exports
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Append each completed result to the local submission history
    #[arg(long)]
    pub persist: bool,

    /// Log filter directive (e.g. "debug" or "nasa_tlx=trace")
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Command-line flags win over environment configuration.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }
        if self.persist {
            config.persistence.enabled = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "nasa-tlx",
            "--participant",
            "P01",
            "--task",
            "T1",
            "--seed",
            "42",
            "--output-dir",
            "/tmp/out",
            "--persist",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.participant.as_deref(), Some("P01"));
        assert_eq!(args.task.as_deref(), Some("T1"));
        assert_eq!(args.seed, Some(42));
        assert!(args.persist);
    }

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from(["nasa-tlx", "--output-dir", "/tmp/out", "--persist"]);
        let mut config = AppConfig::default();

        args.apply_to(&mut config);

        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/out"));
        assert!(config.persistence.enabled);
        assert_eq!(config.logging.level, "warn,nasa_tlx=info");
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let mut config = AppConfig::default();
        Args::parse_from(["nasa-tlx"]).apply_to(&mut config);
        assert!(!config.persistence.enabled);
        assert_eq!(config.export.output_dir, PathBuf::from("./exports"));
    }
}
