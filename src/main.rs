use clap::Parser;
use data_compare::cli::{Cli, OutputFormatter};
use data_compare::core::Config;
use tracing::{info, warn};

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    if !cli.quiet {
        OutputFormatter::print_banner();
    }

    if let Err(e) = execute(&cli) {
        OutputFormatter::print_error(&format!("Error: {}", e));
        std::process::exit(e.exit_code());
    }
}

fn execute(cli: &Cli) -> data_compare::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let options = cli.run_options(&config);

    info!("Starting data comparison based on key: {}", options.key_type);
    if !cli.quiet {
        OutputFormatter::print_run_start(&options);
    }

    let report = data_compare::run(&options)?;

    if let Some(path) = &options.summary {
        match report.summary(&options).write_json(path) {
            Ok(()) => info!("Run summary saved to {}", path.display()),
            // The result file is already written; a missing summary is not fatal
            Err(e) => warn!("Failed to write run summary to {}: {}", path.display(), e),
        }
    }

    OutputFormatter::print_summary(&report);
    if report.context.target_files_skipped > 0 {
        OutputFormatter::print_warning(&format!(
            "{} target file(s) could not be processed and were skipped",
            report.context.target_files_skipped
        ));
    }
    OutputFormatter::print_success(&format!(
        "{} non-matching {} key(s) saved to {}",
        report.result.len(),
        options.key_type,
        options.output.display()
    ));

    Ok(())
}
