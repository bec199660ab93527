//! Command-line driver for the shared logger.
//!
//! Log lines go to stderr by default, so they can be captured with
//! `singleton-logger 12 2> run.log` while progress stays on stdout.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, error::ErrorKind};
use singleton_logger::{
    config::{Config, ConfigError},
    driver::{self, DriverSettings, THREAD_LIMIT},
    log::Logger,
    logger_error,
};

#[derive(Parser)]
#[command(name = "singleton-logger")]
#[command(
    about = "Runs N threads that each print one line through a shared logger",
    long_about = None
)]
struct Cli {
    /// Number of worker threads to start
    #[arg(allow_negative_numbers = true)]
    threads: Option<String>,

    /// INI configuration file ([Driver] and [Logging] sections)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_settings(path: Option<&PathBuf>) -> Result<DriverSettings, ConfigError> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::empty(),
    };
    DriverSettings::from_config(&config)
}

fn done(success: bool) -> ExitCode {
    println!("Done with {}.", if success { "success" } else { "failure" });
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reports a failure that happened before the configured sink was known.
fn fail_early(logger: &Logger, message: &str) -> ExitCode {
    logger.set_output(DriverSettings::default().output.sink());
    logger_error!(logger, "{message}");
    done(false)
}

fn main() -> ExitCode {
    let logger = Logger::get_instance();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("Logger singleton example.");
            // first line only: the rest is usage text
            let rendered = e.to_string();
            let message = rendered.lines().next().unwrap_or_default();
            return fail_early(logger, message.trim_start_matches("error: "));
        }
    };

    println!("Logger singleton example.");

    let settings = match load_settings(cli.config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => return fail_early(logger, &e.to_string()),
    };

    println!(
        "Take a number of thread from first argument (from 0 to {}), \
         and execute concurrently simple routines.",
        settings.max_threads.min(THREAD_LIMIT)
    );
    println!(
        "Setting the logger output to {}, so the log can be extracted and saved in a file.",
        settings.output
    );
    logger.set_output(settings.output.sink());

    let outcome = driver::run(logger, cli.threads.as_deref(), &settings, |count| {
        println!(
            "Creating and joining {count} thread{}.",
            if count == 1 { "" } else { "s" }
        );
    });

    match outcome {
        Ok(_) => {
            println!("All the threads finished their routines.");
            done(true)
        }
        Err(err) if err.is_recognized() => {
            driver::report(logger, &err);
            done(false)
        }
        Err(err) => {
            driver::report(logger, &err);
            std::process::abort();
        }
    }
}
