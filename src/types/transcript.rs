//! Append-only session transcript
//!
//! Layout:
//! - entry 0 = welcome line
//! - then one pair per call: echo `> name(arg1, arg2)`, raw result
//!
//! A result may itself span several text lines; it is still one entry.
//! The calls themselves are kept alongside the lines, since an echo line
//! cannot always be parsed back (arguments may contain `, ` or newlines).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::WELCOME_LINE;

lazy_static! {
    static ref RE_ECHO: Regex = Regex::new(r"^> ?([^(]+)\((.*)\)$").unwrap();
}

/// One recorded tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub tool: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(tool: impl Into<String>, args: Vec<String>) -> Self {
        Self { tool: tool.into(), args }
    }

    /// Render as a transcript echo line
    pub fn echo(&self) -> String {
        format!("> {}({})", self.tool, self.args.join(", "))
    }

    /// Parse a typed echo-form line into a call
    pub fn parse_echo(line: &str) -> Option<Self> {
        let caps = RE_ECHO.captures(line.trim())?;
        let tool = caps.get(1)?.as_str().to_string();
        let inner = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let args = if inner.is_empty() {
            Vec::new()
        } else {
            inner.split(", ").map(str::to_string).collect()
        };
        Some(Self { tool, args })
    }
}

/// Ordered record of every call and its result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vec<String>,
    /// Calls in recording order, one per echo/result pair
    calls: Vec<Invocation>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Create a transcript seeded with the welcome line
    pub fn new() -> Self {
        Self::with_welcome(WELCOME_LINE)
    }

    pub fn with_welcome(welcome: impl Into<String>) -> Self {
        Self {
            lines: vec![welcome.into()],
            calls: Vec::new(),
        }
    }

    /// Record one call: echo line, then result line
    pub fn record(&mut self, invocation: &Invocation, result: &str) {
        self.lines.push(invocation.echo());
        self.lines.push(result.to_string());
        self.calls.push(invocation.clone());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Lines joined for display or prompting
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }

    /// Recorded calls in order, exactly as executed
    pub fn invocations(&self) -> &[Invocation] {
        &self.calls
    }

    /// Hex SHA-256 of the newline-joined transcript
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.joined().as_bytes());
        let hash: [u8; 32] = hasher.finalize().into();
        hash.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_welcome() {
        let transcript = Transcript::new();
        assert_eq!(transcript.lines(), &[WELCOME_LINE.to_string()]);
        assert_eq!(transcript.call_count(), 0);
    }

    #[test]
    fn test_record_appends_two_lines() {
        let mut transcript = Transcript::new();
        let call = Invocation::new("victorian_attempt_combination", vec!["3063".into()]);
        transcript.record(&call, "SUCCESS!");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.lines()[1], "> victorian_attempt_combination(3063)");
        assert_eq!(transcript.lines()[2], "SUCCESS!");
    }

    #[test]
    fn test_echo_round_trip_without_args() {
        let call = Invocation::new("vault_inspect_door", Vec::new());
        assert_eq!(call.echo(), "> vault_inspect_door()");
        assert_eq!(Invocation::parse_echo(&call.echo()), Some(call));
    }

    #[test]
    fn test_invocations_skip_results() {
        let mut transcript = Transcript::new();
        transcript.record(&Invocation::new("a_b_c", vec!["1".into(), "2".into()]), "> not_a_call()");
        transcript.record(&Invocation::new("d_e_f", Vec::new()), "ok");

        let calls = transcript.invocations();
        assert_eq!(calls.len(), 2);
        assert_eq!(transcript.call_count(), 2);
        assert_eq!(calls[0].args, vec!["1", "2"]);
        assert_eq!(calls[1].tool, "d_e_f");
    }

    #[test]
    fn test_invocations_keep_args_the_echo_flattens() {
        let mut transcript = Transcript::new();
        let call = Invocation::new("foo(bar", vec!["30, 63".into(), "a\nb".into()]);
        transcript.record(&call, "Error: Tool \"foo(bar\" not found.");

        assert_eq!(transcript.lines()[1], "> foo(bar(30, 63, a\nb)");
        assert_eq!(transcript.invocations(), &[call]);
    }

    #[test]
    fn test_digest_tracks_content() {
        let mut a = Transcript::new();
        let b = Transcript::new();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);

        a.record(&Invocation::new("x_y_z", Vec::new()), "Nothing happens.");
        assert_ne!(a.digest(), b.digest());
    }
}
