//! checkusage - Nagios plugin for checking ADrive disk usage
//!
//! Logs in to the ADrive API, fetches the account's usage snapshot,
//! evaluates it against warning/critical thresholds and prints one
//! plugin line with performance data.
//!
//! Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 authentication failure,
//! 4 unknown/usage error.

use clap::{CommandFactory, Parser};

use checkusage_core::{evaluate, render, AdriveClient, CheckError, Credentials, Thresholds};

/// Exit code when the check could not be completed
const EXIT_UNKNOWN: i32 = 4;

#[derive(Parser)]
#[command(name = "checkusage")]
#[command(author, version, about = "Nagios plugin for checking ADrive disk usage", long_about = None)]
struct Cli {
    /// Account email address
    email: Option<String>,

    /// Account password
    password: Option<String>,

    /// Warning threshold in percent used
    #[arg(default_value_t = 90.0)]
    warn: f64,

    /// Critical threshold in percent used
    #[arg(default_value_t = 97.0)]
    crit: f64,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    // clap's default error exit code is 2, which a scheduler would read
    // as CRITICAL; malformed arguments must exit UNKNOWN instead.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion => 0,
                _ => EXIT_UNKNOWN,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let code = run(cli).await;
    std::process::exit(code);
}

async fn run(cli: Cli) -> i32 {
    let (email, password) = match (cli.email, cli.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            // Usage error: show help, exit UNKNOWN, touch no network
            let _ = Cli::command().print_help();
            println!();
            return EXIT_UNKNOWN;
        }
    };

    let thresholds = Thresholds {
        warn: cli.warn,
        crit: cli.crit,
    };
    if thresholds.warn > thresholds.crit {
        log::warn!(
            "[cli] warn threshold ({}) exceeds crit threshold ({}); evaluation is undefined",
            thresholds.warn,
            thresholds.crit
        );
    }

    let client = match AdriveClient::new() {
        Ok(client) => client,
        Err(err) => {
            println!("{}", failure_line(&err));
            return err.exit_code();
        }
    };
    let credentials = Credentials::new(email, password);

    match client.check(&credentials).await {
        Ok(usage) => {
            let state = evaluate(usage.percent_used, &thresholds);
            println!("{}", render(state, &usage, &thresholds));
            state.exit_code()
        }
        Err(err) => {
            println!("{}", failure_line(&err));
            err.exit_code()
        }
    }
}

/// Diagnostic line for a failed check
///
/// Authentication failures keep the original plugin's wording and
/// include the server-provided detail.
fn failure_line(err: &CheckError) -> String {
    match err {
        CheckError::Auth(detail) => {
            format!("Unable to Login!! Check the credentials - {}", detail)
        }
        other => format!("UNKNOWN: {}", other),
    }
}
