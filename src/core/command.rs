//! Command parser: free text from a decision agent → tool invocation
//!
//! Accepted forms (first non-empty line only):
//! - `tool arg1 arg2`
//! - `tool(arg1, arg2)` and the transcript echo `> tool(arg1, arg2)`
//! - either form wrapped in backticks, as models like to emit

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Invocation;

lazy_static! {
    static ref RE_CALL: Regex = Regex::new(r"^>?\s*([^\s(]+)\((.*)\)\s*$").unwrap();
}

/// Parse agent text into an invocation. `None` for blank input.
pub fn parse_command(text: &str) -> Option<Invocation> {
    let line = text
        .lines()
        .map(|line| line.trim().trim_matches('`').trim())
        .find(|line| !line.is_empty())?;

    if let Some(caps) = RE_CALL.captures(line) {
        let tool = caps.get(1)?.as_str().to_string();
        let args: Vec<String> = caps
            .get(2)
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(|arg| arg.trim().trim_matches('"').to_string())
                    .filter(|arg| !arg.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        return Some(Invocation::new(tool, args));
    }

    let line = line.trim_start_matches('>').trim_start();
    let mut parts = line.split_whitespace();
    let tool = parts.next()?.to_string();
    Some(Invocation::new(tool, parts.map(str::to_string).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn call(tool: &str, args: &[&str]) -> Invocation {
        Invocation::new(tool, args.iter().map(|a| a.to_string()).collect())
    }

    #[test]
    fn test_space_separated() {
        assert_eq!(
            parse_command("victorian_attempt_combination 3063"),
            Some(call("victorian_attempt_combination", &["3063"]))
        );
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse_command("  vault_inspect_door  "), Some(call("vault_inspect_door", &[])));
    }

    #[test]
    fn test_first_non_empty_line_only() {
        let text = "\n\nchinese_inspect_panels\nI think the answer is 4411";
        assert_eq!(parse_command(text), Some(call("chinese_inspect_panels", &[])));
    }

    #[test]
    fn test_call_form() {
        assert_eq!(
            parse_command("digital_enter_pin(42)"),
            Some(call("digital_enter_pin", &["42"]))
        );
        assert_eq!(parse_command("vault_inspect_door()"), Some(call("vault_inspect_door", &[])));
    }

    #[test]
    fn test_echo_form_replays() {
        let echo = call("medieval_shout_password", &["53"]).echo();
        assert_eq!(parse_command(&echo), Some(call("medieval_shout_password", &["53"])));
    }

    #[test]
    fn test_backticks_and_quotes() {
        assert_eq!(
            parse_command("`japanese_unlock_with_code(\"773\")`"),
            Some(call("japanese_unlock_with_code", &["773"]))
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \n \t"), None);
    }
}
