//! Command-line argument parsing.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

pub const ENV_EMAIL: &str = "CLOUDFLARE_API_EMAIL";
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";
pub const ENV_ZONE_ID: &str = "CLOUDFLARE_ZONE_ID";
pub const ENV_DOMAIN: &str = "CLOUDFLARE_DOMAIN";
pub const ENV_API_BASE: &str = "CLOUDFLARE_API_BASE";

const AFTER_HELP: &str = "\
Environment:
  CLOUDFLARE_API_EMAIL  Account email, used when -e/--email is absent
  CLOUDFLARE_API_KEY    Global API key, used when -k/--key is absent
  CLOUDFLARE_ZONE_ID    Zone id, used when -z/--zone-id is absent
  CLOUDFLARE_DOMAIN     Domain to discover, used when -d/--domain is absent";

/// List Cloudflare zones and the DNS records of one zone
#[derive(Debug, Default, Parser)]
#[command(name = "dns-inventory", after_help = AFTER_HELP)]
pub struct Args {
    /// Cloudflare account email
    #[arg(short = 'e', long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Cloudflare global API key
    #[arg(short = 'k', long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Zone id to list records for (skips zone discovery)
    #[arg(short = 'z', long = "zone-id", value_name = "ID")]
    pub zone_id: Option<String>,

    /// Domain whose zone is discovered when no zone id is given
    #[arg(short = 'd', long, value_name = "NAME")]
    pub domain: Option<String>,

    /// Override the API base URL
    #[arg(long, value_name = "URL", hide = true)]
    pub api_base: Option<String>,
}

/// Result of parsing the command line.
#[derive(Debug)]
pub enum ParseOutcome {
    Run(Args),
    Help,
    Invalid(clap::Error),
}

/// Parse `argv` (program name first).
///
/// A `-h`/`--help` anywhere before a `--` terminator wins over everything
/// else, including flags that would otherwise fail to parse.
pub fn parse_from<I, T>(argv: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

    if wants_help(&argv) {
        return ParseOutcome::Help;
    }

    match Args::try_parse_from(&argv) {
        Ok(args) => ParseOutcome::Run(args),
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp => ParseOutcome::Help,
        Err(err) => ParseOutcome::Invalid(err),
    }
}

fn wants_help(argv: &[OsString]) -> bool {
    argv.iter()
        .skip(1)
        .take_while(|arg| *arg != "--")
        .any(|arg| arg == "-h" || arg == "--help")
}

/// Full usage text.
pub fn help_text() -> String {
    Args::command().render_help().to_string()
}
