//! Structured JSON logger
//!
//! One event per line, synchronous, deterministic key ordering. All events
//! go to stderr so stdout stays reserved for query results.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writes one JSON object per event. `event` and `severity` lead the line;
/// the remaining fields follow in alphabetical order.
pub struct Logger;

impl Logger {
    pub fn debug(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Debug, event, fields, &mut io::stderr());
    }

    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stderr());
    }

    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stderr());
    }

    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        let mut line = String::with_capacity(128);
        line.push('{');
        line.push_str("\"event\":");
        push_json_string(&mut line, event);
        line.push_str(",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            line.push(',');
            push_json_string(&mut line, key);
            line.push(':');
            push_json_string(&mut line, value);
        }

        line.push_str("}\n");

        // Single write so concurrent events never interleave mid-line.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

fn push_json_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        Logger::emit(severity, event, fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead_the_line() {
        let line = capture(Severity::Info, "query_executed", &[]);
        assert!(line.starts_with("{\"event\":\"query_executed\",\"severity\":\"INFO\""));
        assert!(line.ends_with("}\n"));
    }

    #[test]
    fn test_output_is_valid_json() {
        let line = capture(Severity::Warn, "db_loaded", &[("path", ".nxdb/projects.json")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "db_loaded");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["path"], ".nxdb/projects.json");
    }

    #[test]
    fn test_fields_sorted_alphabetically() {
        let a = capture(Severity::Info, "e", &[("zz", "1"), ("aa", "2")]);
        let b = capture(Severity::Info, "e", &[("aa", "2"), ("zz", "1")]);
        assert_eq!(a, b);
        assert!(a.find("aa").unwrap() < a.find("zz").unwrap());
    }

    #[test]
    fn test_string_escaping() {
        let line = capture(Severity::Error, "parse_failed", &[("detail", "line 1:\n\t'oops'")]);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["detail"], "line 1:\n\t'oops'");
    }
}
