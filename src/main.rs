use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use depwalk::{
    cli::{Args, Command},
    config::{self, parser::DEFAULT_CONFIG_FILE},
    core::Scanner,
    error::{Result, ScanError},
    output::{create_formatter, create_progress_callback, create_writer, ProgressReporter},
    NAME, VERSION,
};

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);
    process::exit(run_command(command));
}

/// Run the command and map its outcome to an exit code
fn run_command(command: Command) -> i32 {
    match execute_command(command) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            exit_code_for(&err)
        }
    }
}

/// Configuration errors exit with 2; anything else that stops a run exits with 1
fn exit_code_for(err: &ScanError) -> i32 {
    if err.is_critical() {
        2
    } else {
        1
    }
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Init => init_config(),
        Command::Scan(args) => scan(&args),
    }
}

fn init_config() -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        eprintln!("Configuration file already exists at: {}", config_path.display());
        eprintln!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config::create_default_config(&config_path)?;
    eprintln!("Created default configuration file at: {}", config_path.display());

    Ok(())
}

fn scan(args: &Args) -> Result<()> {
    let settings = config::load_config(args)?;

    let reporter = Arc::new(ProgressReporter::new(
        settings.quiet,
        settings.verbose,
        settings.show_progress,
        settings.use_colors,
    ));

    reporter.print(&format!("{} v{}", NAME, VERSION));
    reporter.print(&format!("Scanning {}", settings.scan_path.display()));
    reporter.start("Scanning");

    let scanner = Scanner::new(settings);
    let report = scanner.scan_with_progress(create_progress_callback(reporter.clone()))?;

    reporter.finish(&report.summary_line());

    let settings = scanner.settings();
    // Colour codes only make sense on a terminal
    let colored = settings.use_colors && settings.output_file.is_none();
    let formatter = create_formatter(settings.output_format, colored);
    let content = formatter.format(&report.index)?;

    create_writer(settings.output_file.as_ref()).write(&content)?;

    if let Some(path) = &settings.output_file {
        reporter.print(&format!("Index written to {}", path.display()));
    }

    Ok(())
}
