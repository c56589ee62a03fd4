//! Status-tagged terminal output.

use std::fmt::Display;
use std::io::{self, IsTerminal, Stdout, Write};

use colored::{ColoredString, Colorize};
use dns_inventory_provider::{DnsRecord, ProviderError, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Info,
    Ok,
    Warn,
    Error,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Error => "[ERROR]",
        }
    }

    fn colored(self) -> ColoredString {
        match self {
            Self::Info => self.label().bright_blue().bold(),
            Self::Ok => self.label().bright_green().bold(),
            Self::Warn => self.label().bright_yellow().bold(),
            Self::Error => self.label().bright_red().bold(),
        }
    }
}

/// Writes user-facing lines. Color is applied to tags and zone statuses only.
///
/// Write failures (closed pipe) are ignored; there is nothing useful left to
/// report them to.
pub struct Reporter<W> {
    out: W,
    color: bool,
}

impl Reporter<Stdout> {
    /// Reporter on stdout, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let color = out.is_terminal();
        Self::new(out, color)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn info(&mut self, msg: impl Display) {
        self.tagged(Tag::Info, msg);
    }

    pub fn success(&mut self, msg: impl Display) {
        self.tagged(Tag::Ok, msg);
    }

    pub fn warn(&mut self, msg: impl Display) {
        self.tagged(Tag::Warn, msg);
    }

    pub fn error(&mut self, msg: impl Display) {
        self.tagged(Tag::Error, msg);
    }

    /// One `[ERROR]` line per message the failure carries.
    pub fn provider_error(&mut self, err: &ProviderError) {
        for line in err.report_lines() {
            self.error(line);
        }
    }

    pub fn zone(&mut self, zone: &Zone) {
        let line = format_zone(zone, self.color);
        self.item(line);
    }

    pub fn record(&mut self, record: &DnsRecord) {
        self.item(format_record(record));
    }

    /// Untagged text, written as-is.
    pub fn raw(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn item(&mut self, line: impl Display) {
        let _ = writeln!(self.out, "  {line}");
    }

    fn tagged(&mut self, tag: Tag, msg: impl Display) {
        let _ = if self.color {
            writeln!(self.out, "{} {msg}", tag.colored())
        } else {
            writeln!(self.out, "{} {msg}", tag.label())
        };
    }
}

/// `name (ID: id) - Status: status`
pub fn format_zone(zone: &Zone, color: bool) -> String {
    let status = if color {
        match zone.status.as_str() {
            "active" => zone.status.bright_green().to_string(),
            "pending" | "initializing" => zone.status.bright_yellow().to_string(),
            "moved" | "deleted" | "deactivated" => zone.status.bright_red().to_string(),
            _ => zone.status.clone(),
        }
    } else {
        zone.status.clone()
    };
    format!("{} (ID: {}) - Status: {status}", zone.name, zone.id)
}

/// `type name -> content (TTL: ttl)`
pub fn format_record(record: &DnsRecord) -> String {
    format!(
        "{} {} -> {} (TTL: {})",
        record.record_type, record.name, record.content, record.ttl
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Zone {
        Zone {
            id: "z1".to_string(),
            name: "example.com".to_string(),
            status: "active".to_string(),
        }
    }

    fn written(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8_lossy(&reporter.into_inner()).into_owned()
    }

    #[test]
    fn zone_line() {
        assert_eq!(
            format_zone(&zone(), false),
            "example.com (ID: z1) - Status: active"
        );
    }

    #[test]
    fn record_line() {
        let record = DnsRecord {
            id: "r1".to_string(),
            record_type: "CNAME".to_string(),
            name: "www.example.com".to_string(),
            content: "example.com".to_string(),
            ttl: 1,
        };
        assert_eq!(
            format_record(&record),
            "CNAME www.example.com -> example.com (TTL: 1)"
        );
    }

    #[test]
    fn plain_tags() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.info("listing");
        reporter.success("done");
        reporter.warn("careful");
        reporter.error("broken");
        reporter.zone(&zone());
        assert_eq!(
            written(reporter),
            "[INFO] listing\n[OK] done\n[WARN] careful\n[ERROR] broken\n  example.com (ID: z1) - Status: active\n"
        );
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                let _ = chars.by_ref().find(|&c| c == 'm');
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn colored_tags_and_status() {
        // stdout is not a terminal under the test harness.
        colored::control::set_override(true);
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.success("done");
        reporter.zone(&zone());
        let text = written(reporter);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('\u{1b}'), "tag not colored: {text:?}");
        assert!(lines[1].contains("Status: \u{1b}["), "status not colored: {text:?}");
        assert!(lines[1].contains("example.com (ID: z1)"));
        assert_eq!(
            strip_ansi(&text),
            "[OK] done\n  example.com (ID: z1) - Status: active\n"
        );
    }

    #[test]
    fn provider_error_one_line_per_message() {
        let err = ProviderError::Api {
            errors: vec![
                dns_inventory_provider::ApiErrorDetail {
                    code: None,
                    message: "bad auth".to_string(),
                },
                dns_inventory_provider::ApiErrorDetail {
                    code: None,
                    message: "try again".to_string(),
                },
            ],
        };
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.provider_error(&err);
        assert_eq!(written(reporter), "[ERROR] bad auth\n[ERROR] try again\n");
    }
}
