//! The fixed command table. Defined once, never mutated; command names are
//! unique and lowercase.
//!
//! Actions are plain function pointers from an optional argument to rendered
//! text — no dynamic dispatch, no state.

/// A command's bound behavior.
pub type Action = fn(Option<&str>) -> String;

/// Per-character argument allow-list, applied before the action runs.
pub type ArgFilter = fn(char) -> bool;

/// How the console should treat a matched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Runs the bound action (or the default success message) and renders it.
    Action,
    /// Signals the caller to clear the rendered history buffer.
    Clear,
    /// Signals the caller to close the console.
    Exit,
}

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
    pub action: Option<Action>,
    pub arg_filter: Option<ArgFilter>,
}

/// The console's command set, in the order `help` lists them.
pub fn builtin_commands() -> &'static [Command] {
    &COMMANDS
}

/// Case-insensitive lookup by name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    let name = name.to_lowercase();
    COMMANDS.iter().find(|c| c.name == name)
}

static COMMANDS: [Command; 11] = [
    Command {
        name: "help",
        description: "list available commands",
        kind: CommandKind::Action,
        action: Some(help),
        arg_filter: None,
    },
    Command {
        name: "about",
        description: "who runs this site",
        kind: CommandKind::Action,
        action: Some(about),
        arg_filter: None,
    },
    Command {
        name: "skills",
        description: "languages and tools",
        kind: CommandKind::Action,
        action: Some(skills),
        arg_filter: None,
    },
    Command {
        name: "projects",
        description: "selected work",
        kind: CommandKind::Action,
        action: Some(projects),
        arg_filter: None,
    },
    Command {
        // Navigation to the Ideas section is handled by the embedding page,
        // so no action is bound; the default success message renders.
        name: "ideas",
        description: "open the ideas section",
        kind: CommandKind::Action,
        action: None,
        arg_filter: None,
    },
    Command {
        name: "contact",
        description: "where to reach me",
        kind: CommandKind::Action,
        action: Some(contact),
        arg_filter: None,
    },
    Command {
        name: "whoami",
        description: "print the current user",
        kind: CommandKind::Action,
        action: Some(whoami),
        arg_filter: None,
    },
    Command {
        name: "date",
        description: "print the current date",
        kind: CommandKind::Action,
        action: Some(date),
        arg_filter: None,
    },
    Command {
        name: "echo",
        description: "print the argument back",
        kind: CommandKind::Action,
        action: Some(echo),
        arg_filter: Some(echo_filter),
    },
    Command {
        name: "clear",
        description: "clear the terminal",
        kind: CommandKind::Clear,
        action: None,
        arg_filter: None,
    },
    Command {
        name: "exit",
        description: "close the terminal",
        kind: CommandKind::Exit,
        action: None,
        arg_filter: None,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Actions
// ────────────────────────────────────────────────────────────────────────────

fn help(_arg: Option<&str>) -> String {
    let mut out = String::from("Available commands:\n");
    for command in COMMANDS.iter() {
        out.push_str(&format!("  {:<10} {}\n", command.name, command.description));
    }
    out.trim_end().to_string()
}

fn about(_arg: Option<&str>) -> String {
    "Backend engineer. I build boring, reliable services and write about the \
     interesting failures along the way."
        .to_string()
}

fn skills(_arg: Option<&str>) -> String {
    "Rust, TypeScript, PostgreSQL, Kafka, Kubernetes — and the patience to \
     read other people's stack traces."
        .to_string()
}

fn projects(_arg: Option<&str>) -> String {
    "portfolio-api  — the service answering this very terminal\n\
     tracehound    — request-trace explorer for OTLP pipelines\n\
     shelfware     — a static-site generator I swore I would not write"
        .to_string()
}

fn contact(_arg: Option<&str>) -> String {
    "hello@example.dev — or open an issue, I read those faster.".to_string()
}

fn whoami(_arg: Option<&str>) -> String {
    "guest".to_string()
}

fn date(_arg: Option<&str>) -> String {
    chrono::Local::now().format("%a %b %e %Y, %H:%M").to_string()
}

fn echo(arg: Option<&str>) -> String {
    arg.unwrap_or("").to_string()
}

/// `echo` accepts alphanumerics, spaces, and hyphens only.
fn echo_filter(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_command_names_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for command in builtin_commands() {
            assert!(seen.insert(command.name), "duplicate: {}", command.name);
            assert_eq!(command.name, command.name.to_lowercase());
        }
    }

    #[test]
    fn test_find_command_is_case_insensitive() {
        assert!(find_command("HELP").is_some());
        assert!(find_command("Help").is_some());
        assert!(find_command("halp").is_none());
    }

    #[test]
    fn test_help_lists_every_command() {
        let rendered = help(None);
        for command in builtin_commands() {
            assert!(rendered.contains(command.name));
        }
    }

    #[test]
    fn test_echo_filter_allows_alnum_space_hyphen_only() {
        assert!(echo_filter('a'));
        assert!(echo_filter('7'));
        assert!(echo_filter(' '));
        assert!(echo_filter('-'));
        assert!(!echo_filter(';'));
        assert!(!echo_filter('$'));
    }
}
