//! Argument handling and exit status for one invocation.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use crate::args::{self, ParseOutcome};
use crate::config::Config;
use crate::output::Reporter;
use crate::workflow;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => Self::SUCCESS,
            Exit::Failure => Self::from(1_u8),
        }
    }
}

/// Run one invocation.
///
/// `env` supplies environment fallbacks. Help goes to `out`; parse errors
/// and usage go to `err`.
pub async fn execute<O, E, F>(argv: Vec<OsString>, env: F, out: &mut Reporter<O>, err: &mut E) -> Exit
where
    O: Write,
    E: Write,
    F: Fn(&str) -> Option<String>,
{
    let args = match args::parse_from(argv) {
        ParseOutcome::Help => {
            out.raw(&args::help_text());
            return Exit::Success;
        }
        ParseOutcome::Invalid(parse_err) => {
            let _ = write!(err, "{parse_err}");
            let _ = writeln!(err);
            let _ = write!(err, "{}", args::help_text());
            return Exit::Failure;
        }
        ParseOutcome::Run(args) => args,
    };

    let config = match Config::resolve(args, env) {
        Ok(config) => config,
        Err(config_err) => {
            out.error(&config_err);
            let _ = write!(err, "{}", args::help_text());
            return Exit::Failure;
        }
    };
    tracing::debug!(
        email = %config.credentials.email,
        api_key = %dns_inventory_provider::mask_secret(&config.credentials.api_key),
        zone_id = ?config.zone_id,
        domain = %config.domain,
        "configuration resolved"
    );

    match workflow::run(&config, out).await {
        Ok(()) => Exit::Success,
        Err(run_err) => {
            tracing::debug!(step = ?run_err.step(), "run aborted");
            out.error(&run_err);
            Exit::Failure
        }
    }
}
