//! The command interpreter itself: one line of free text in, one outcome out.
//!
//! The console never fails — unknown commands, filtered arguments, and
//! rate-limit rejections all come back as rendered entries, and the two
//! special commands surface as outcomes for the embedding caller to act on.

use std::time::Duration;

use crate::history::{HistoryStore, HISTORY_LIMIT};
use crate::limiter::RateLimiter;
use crate::table::{builtin_commands, find_command, CommandKind};

/// Inputs are cut to this many characters before interpretation.
const MAX_INPUT_LEN: usize = 100;

/// Default throttle: 10 commands per 10-second window.
const DEFAULT_RATE_MAX: u32 = 10;
const DEFAULT_RATE_WINDOW: Duration = Duration::from_secs(10);

const RATE_LIMIT_WARNING: &str =
    "rate limit: too many commands — give the terminal a second to breathe";

/// Cosmetic banner for inputs that look like real shell commands. The console
/// has no system access, so this is theater, not a security control.
const SUSPICIOUS_BANNER: &str = "[!] nice try. this terminal is decorative.";

/// Substrings that trigger the banner. Matched against the sanitized input.
const SUSPICIOUS_PATTERNS: [&str; 5] = ["rm -rf", "sudo", "chmod", "curl", "wget"];

/// One rendered console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub input: String,
    pub response: String,
    pub is_error: bool,
}

/// What the caller should do with a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Append this entry to the rendered buffer.
    Rendered(Entry),
    /// Clear the rendered buffer.
    Clear,
    /// Close the console.
    Close,
}

/// Result of tab-completing a partial command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No known command starts with the prefix.
    None,
    /// Exactly one match — replace the input buffer with it.
    Single(String),
    /// Several matches — render the list, execute nothing.
    Multiple(Vec<String>),
}

/// Idle between submissions, executing between submit and rendered output.
/// Transitions are synchronous; there is nothing to coordinate across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleState {
    Idle,
    Executing,
}

pub struct Console<S: HistoryStore> {
    store: S,
    history: Vec<String>,
    cursor: Option<usize>,
    limiter: RateLimiter,
    state: ConsoleState,
}

impl<S: HistoryStore> Console<S> {
    /// Builds a console with the default rate limit, loading whatever history
    /// the store has (or none, if the store has nothing usable).
    pub fn new(store: S) -> Self {
        Self::with_limiter(store, RateLimiter::new(DEFAULT_RATE_MAX, DEFAULT_RATE_WINDOW))
    }

    pub fn with_limiter(store: S, limiter: RateLimiter) -> Self {
        let history = store.load();
        Self {
            store,
            history,
            cursor: None,
            limiter,
            state: ConsoleState::Idle,
        }
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    /// Previously typed commands, most-recent-last.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Interprets one line. Never returns an error: every failure mode is a
    /// rendered entry with `is_error` set.
    pub fn submit(&mut self, line: &str) -> Outcome {
        self.state = ConsoleState::Executing;
        let outcome = self.execute(line);
        self.state = ConsoleState::Idle;
        outcome
    }

    fn execute(&mut self, line: &str) -> Outcome {
        // Matched against the raw line: truncation or escaping must not let a
        // pattern slip past the banner.
        let suspicious = is_suspicious(line);
        let input = sanitize(line);

        if input.trim().is_empty() {
            return Outcome::Rendered(Entry {
                input,
                response: String::new(),
                is_error: false,
            });
        }

        self.record(&input);

        if !self.limiter.check() {
            return Outcome::Rendered(Entry {
                input,
                response: RATE_LIMIT_WARNING.to_string(),
                is_error: true,
            });
        }

        let trimmed = input.trim();
        let (word, argument) = match trimmed.split_once(char::is_whitespace) {
            Some((w, rest)) => (w, Some(rest.trim())),
            None => (trimmed, None),
        };

        let (response, is_error) = match find_command(word) {
            None => (
                format!("{word}: command not found. Type 'help' to see what this terminal can do."),
                true,
            ),
            Some(command) => match command.kind {
                CommandKind::Clear => return Outcome::Clear,
                CommandKind::Exit => return Outcome::Close,
                CommandKind::Action => {
                    let argument = argument.map(|arg| match command.arg_filter {
                        Some(allowed) => arg.chars().filter(|c| allowed(*c)).collect(),
                        None => arg.to_string(),
                    });
                    let response = match command.action {
                        Some(action) => action(argument.as_deref()),
                        None => format!("{}: executed successfully", command.name),
                    };
                    (response, false)
                }
            },
        };

        let response = if suspicious {
            format!("{SUSPICIOUS_BANNER}\n{response}")
        } else {
            response
        };

        Outcome::Rendered(Entry {
            input,
            response,
            is_error,
        })
    }

    fn record(&mut self, input: &str) {
        self.history.push(input.to_string());
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.store.save(&self.history);
        self.cursor = None;
    }

    /// Steps backward through typed commands; returns the text to repopulate
    /// the input buffer with. Stays on the oldest entry once reached.
    pub fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let next_index = match self.cursor {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(next_index);
        Some(&self.history[next_index])
    }

    /// Steps forward through typed commands. Returns `None` once past the
    /// newest entry — the caller should clear the input buffer.
    pub fn history_next(&mut self) -> Option<&str> {
        let i = self.cursor?;
        if i + 1 < self.history.len() {
            self.cursor = Some(i + 1);
            Some(&self.history[i + 1])
        } else {
            self.cursor = None;
            None
        }
    }

    /// Tab-completion over the command table.
    pub fn complete(&self, prefix: &str) -> Completion {
        let prefix = prefix.trim().to_lowercase();
        let matches: Vec<&str> = builtin_commands()
            .iter()
            .map(|c| c.name)
            .filter(|name| name.starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [] => Completion::None,
            [only] => Completion::Single(only.to_string()),
            many => Completion::Multiple(many.iter().map(|s| s.to_string()).collect()),
        }
    }
}

/// Escapes `<`/`>` so the console's own rendering can't reconstruct a tag,
/// then cuts to [`MAX_INPUT_LEN`] characters. Defense for this console's
/// output only — there is no server behind it to protect.
pub fn sanitize(input: &str) -> String {
    input
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .chars()
        .take(MAX_INPUT_LEN)
        .collect()
}

fn is_suspicious(input: &str) -> bool {
    let lowered = input.to_lowercase();
    SUSPICIOUS_PATTERNS.iter().any(|p| lowered.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;

    fn console() -> Console<MemoryHistory> {
        Console::new(MemoryHistory::default())
    }

    fn rendered(outcome: Outcome) -> Entry {
        match outcome {
            Outcome::Rendered(entry) => entry,
            other => panic!("expected Rendered, got {other:?}"),
        }
    }

    #[test]
    fn test_every_known_command_succeeds_case_insensitively() {
        for command in builtin_commands() {
            let mut c = console();
            let upper = command.name.to_uppercase();
            match command.kind {
                CommandKind::Clear => assert_eq!(c.submit(&upper), Outcome::Clear),
                CommandKind::Exit => assert_eq!(c.submit(&upper), Outcome::Close),
                CommandKind::Action => {
                    let entry = rendered(c.submit(&upper));
                    assert!(!entry.is_error, "{} errored", command.name);
                }
            }
        }
    }

    #[test]
    fn test_unknown_command_is_error_and_echoes_the_text() {
        let entry = rendered(console().submit("frobnicate"));
        assert!(entry.is_error);
        assert!(entry.response.contains("frobnicate"));
    }

    #[test]
    fn test_unbound_command_renders_default_success() {
        let entry = rendered(console().submit("ideas"));
        assert!(!entry.is_error);
        assert!(entry.response.contains("executed successfully"));
    }

    #[test]
    fn test_script_tag_is_neutralized() {
        let entry = rendered(console().submit("<script>alert(1)</script>"));
        assert!(entry.is_error); // not a known command
        assert!(!entry.input.contains('<'));
        assert!(!entry.response.contains("<script"));
        assert!(entry.response.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_long_input_truncated_to_100_chars() {
        let long = "a".repeat(150);
        let entry = rendered(console().submit(&long));
        assert_eq!(entry.input.chars().count(), 100);
    }

    #[test]
    fn test_rate_limit_rejects_after_quota_with_distinct_warning() {
        let mut c = Console::with_limiter(
            MemoryHistory::default(),
            RateLimiter::new(2, Duration::from_secs(600)),
        );
        assert!(!rendered(c.submit("help")).is_error);
        assert!(!rendered(c.submit("about")).is_error);

        let entry = rendered(c.submit("help"));
        assert!(entry.is_error);
        assert_eq!(entry.response, RATE_LIMIT_WARNING);
    }

    #[test]
    fn test_echo_argument_is_filtered_to_allow_list() {
        let entry = rendered(console().submit("echo safe; $(rm) text"));
        assert!(!entry.is_error);
        assert_eq!(entry.response, "safe rm text");
    }

    #[test]
    fn test_suspicious_input_gets_banner_but_still_executes() {
        let entry = rendered(console().submit("echo sudo make me a sandwich"));
        assert!(!entry.is_error);
        assert!(entry.response.starts_with(SUSPICIOUS_BANNER));
        assert!(entry.response.contains("sudo make me a sandwich"));
    }

    #[test]
    fn test_banner_applies_even_when_pattern_falls_past_the_truncation_cut() {
        let line = format!("echo {} sudo", "a".repeat(96));
        let entry = rendered(console().submit(&line));
        // "sudo" is beyond the 100-char cut, but the raw line carries it.
        assert!(!entry.input.contains("sudo"));
        assert!(entry.response.starts_with(SUSPICIOUS_BANNER));
    }

    #[test]
    fn test_history_records_typed_commands_most_recent_last() {
        let mut c = console();
        c.submit("help");
        c.submit("about");
        assert_eq!(c.history(), ["help", "about"]);
    }

    #[test]
    fn test_history_is_capped() {
        let mut c = Console::with_limiter(
            MemoryHistory::default(),
            RateLimiter::new(1000, Duration::from_secs(600)),
        );
        for i in 0..30 {
            c.submit(&format!("echo {i}"));
        }
        assert_eq!(c.history().len(), HISTORY_LIMIT);
        assert_eq!(c.history().last().unwrap(), "echo 29");
    }

    #[test]
    fn test_history_survives_via_the_store() {
        let mut c = console();
        c.submit("help");
        c.submit("skills");
        let store = MemoryHistory(c.history().to_vec());

        let revived = Console::new(store);
        assert_eq!(revived.history(), ["help", "skills"]);
    }

    #[test]
    fn test_history_navigation_prev_and_next() {
        let mut c = console();
        c.submit("help");
        c.submit("about");
        c.submit("skills");

        assert_eq!(c.history_prev(), Some("skills"));
        assert_eq!(c.history_prev(), Some("about"));
        assert_eq!(c.history_prev(), Some("help"));
        // Pinned at the oldest entry.
        assert_eq!(c.history_prev(), Some("help"));

        assert_eq!(c.history_next(), Some("about"));
        assert_eq!(c.history_next(), Some("skills"));
        // Past the newest entry: clear the buffer.
        assert_eq!(c.history_next(), None);
    }

    #[test]
    fn test_completion_single_match_replaces_input() {
        assert_eq!(
            console().complete("ab"),
            Completion::Single("about".to_string())
        );
    }

    #[test]
    fn test_completion_multiple_matches_lists_without_executing() {
        let mut c = console();
        match c.complete("e") {
            Completion::Multiple(names) => {
                assert!(names.contains(&"echo".to_string()));
                assert!(names.contains(&"exit".to_string()));
            }
            other => panic!("expected Multiple, got {other:?}"),
        }
        // Completion must not execute or record anything.
        assert!(c.history().is_empty());
    }

    #[test]
    fn test_completion_no_match() {
        assert_eq!(console().complete("zz"), Completion::None);
    }

    #[test]
    fn test_console_is_idle_between_submissions() {
        let mut c = console();
        assert_eq!(c.state(), ConsoleState::Idle);
        c.submit("help");
        assert_eq!(c.state(), ConsoleState::Idle);
    }
}
