use crate::core::config::{Config, TargetErrorPolicy};
use crate::core::results::KeyType;
use crate::pipeline::RunOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "data-compare")]
#[command(
    version,
    about = "Find keys (IP, domain, URL) in an origin file that are missing from every file in a target folder",
    long_about = None
)]
pub struct Cli {
    /// Path to the origin file (CSV, XLSX or TXT)
    #[arg(long)]
    pub path_origin: PathBuf,

    /// Path to the folder containing files to compare against
    #[arg(long)]
    pub path_target: PathBuf,

    /// Path to save the non-matching data; the extension picks CSV, XLSX or TXT
    #[arg(long)]
    pub output: PathBuf,

    /// Key type to compare
    #[arg(long, value_enum, ignore_case = true)]
    pub key: KeyType,

    /// What to do with target files that cannot be read [default: skip]
    #[arg(long, value_enum)]
    pub on_target_error: Option<TargetErrorPolicy>,

    /// Only read this column (1-based) of CSV and spreadsheet files.
    /// Plain text files have no columns and are always read whole.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub column: Option<u64>,

    /// Config file (default: data_compare.toml, .data_compare.toml or config/default.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the banner and progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Merge flags over the config file; flags win
    pub fn run_options(&self, config: &Config) -> RunOptions {
        let mut options = RunOptions::new(&self.path_origin, &self.path_target, &self.output, self.key);
        options.on_target_error = self.on_target_error.unwrap_or(config.targets.on_error);
        options.column = self.column.map(|c| c as usize).or(config.reader.column);
        options.summary = self.summary_path(config);
        options.show_progress = !self.quiet;
        options
    }

    /// Summary path from the flag, else from the config file
    pub fn summary_path(&self, config: &Config) -> Option<PathBuf> {
        self.summary.clone().or_else(|| config.output.summary.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["data-compare"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    const REQUIRED: &[&str] = &[
        "--path-origin",
        "origin.csv",
        "--path-target",
        "targets",
        "--output",
        "out.csv",
        "--key",
        "domain",
    ];

    #[test]
    fn test_parses_required_flags() {
        let cli = parse(REQUIRED);
        assert_eq!(cli.path_origin, PathBuf::from("origin.csv"));
        assert_eq!(cli.path_target, PathBuf::from("targets"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert_eq!(cli.key, KeyType::Domain);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let cli = parse(&["--path-origin", "o.txt", "--path-target", "t", "--output", "o.csv", "--key", "IP"]);
        assert_eq!(cli.key, KeyType::Ip);
    }

    #[test]
    fn test_rejects_unknown_key() {
        let result = Cli::try_parse_from([
            "data-compare",
            "--path-origin",
            "o.txt",
            "--path-target",
            "t",
            "--output",
            "o.csv",
            "--key",
            "email",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_flag() {
        let result = Cli::try_parse_from(["data-compare", "--path-origin", "o.txt", "--key", "ip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_column() {
        let mut argv = vec!["data-compare"];
        argv.extend_from_slice(REQUIRED);
        argv.extend_from_slice(&["--column", "0"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut args = REQUIRED.to_vec();
        args.extend_from_slice(&["--on-target-error", "abort", "--column", "3", "-q"]);
        let cli = parse(&args);

        let mut config = Config::default();
        config.reader.column = Some(1);
        let options = cli.run_options(&config);

        assert_eq!(options.on_target_error, TargetErrorPolicy::Abort);
        assert_eq!(options.column, Some(3));
        assert_eq!(options.summary, None);
        assert!(!options.show_progress);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let cli = parse(REQUIRED);
        let mut config = Config::default();
        config.targets.on_error = TargetErrorPolicy::Abort;
        config.reader.column = Some(2);
        config.output.summary = Some(PathBuf::from("summary.json"));

        let options = cli.run_options(&config);
        assert_eq!(options.on_target_error, TargetErrorPolicy::Abort);
        assert_eq!(options.column, Some(2));
        assert_eq!(cli.summary_path(&config), Some(PathBuf::from("summary.json")));
        assert_eq!(options.summary, Some(PathBuf::from("summary.json")));
    }
}
