use crate::core::results::{KeyType, NonMatchResult};
use crate::pipeline::{RunOptions, RunReport};
use colored::Colorize;

pub struct OutputFormatter;

impl OutputFormatter {
    /// Print the startup banner
    pub fn print_banner() {
        println!("{}", "=".repeat(70).bright_cyan());
        println!("{}", "  Data Compare - find keys missing from a set of files".bright_cyan().bold());
        println!("{}", "=".repeat(70).bright_cyan());
        println!("  Extracts IPs, domains or URLs from an origin file and reports the");
        println!("  ones that appear in none of the files of a target folder.");
        println!();
    }

    /// Print what is about to be compared
    pub fn print_run_start(options: &RunOptions) {
        println!(
            "{} Comparing {} keys from {} against {}",
            "🔍".bright_yellow(),
            options.key_type.as_str().bright_green(),
            options.origin.display().to_string().bright_cyan(),
            options.target_folder.display().to_string().bright_cyan()
        );
        println!();
    }

    /// Print final statistics
    pub fn print_summary(report: &RunReport) {
        let stats = &report.context;

        println!();
        println!("{}", "=".repeat(70).bright_cyan());
        println!("{}", "  Results Summary".bright_cyan().bold());
        println!("{}", "=".repeat(70).bright_cyan());
        println!();

        println!("  {} Origin:", "📄".bright_yellow());
        println!("    Records read: {}", stats.origin_records.to_string().bright_white());
        println!("    Valid keys: {}", stats.origin_keys.to_string().bright_green());
        println!("    Rejected candidates: {}", stats.origin_rejected.to_string().bright_black());
        println!();

        println!("  {} Target folder:", "📂".bright_yellow());
        println!("    Files found: {}", stats.target_files_found.to_string().bright_white());
        println!("    Files processed: {}", stats.target_files_processed.to_string().bright_green());
        println!("    Files skipped: {}", stats.target_files_skipped.to_string().bright_red());
        println!("    Distinct keys: {}", stats.target_keys.to_string().bright_white());
        println!();

        for path in &report.skipped_files {
            println!("    {} skipped {}", "✗".bright_red(), path.display());
        }
        if !report.skipped_files.is_empty() {
            println!();
        }

        println!(
            "  {}: {}",
            Self::result_label(&report.result).bold(),
            stats.non_matching.to_string().bright_yellow().bold()
        );
        println!();
        println!("{}", "=".repeat(70).bright_cyan());
    }

    fn result_label(result: &NonMatchResult) -> String {
        match result.key_type {
            KeyType::Ip => "Non-matching IPs".to_string(),
            KeyType::Domain => "Non-matching domains".to_string(),
            KeyType::Url => "Non-matching URLs".to_string(),
        }
    }

    /// Print error message
    pub fn print_error(message: &str) {
        eprintln!("{} {}", "❌".bright_red(), message.red());
    }

    /// Print warning message
    pub fn print_warning(message: &str) {
        println!("{} {}", "⚠️".bright_yellow(), message.yellow());
    }

    /// Print success message
    pub fn print_success(message: &str) {
        println!("{} {}", "✓".bright_green(), message.green());
    }
}
