//! Interactive driver for the console library: a plain stdin/stdout loop,
//! the same interpreter the site embeds in its terminal widget.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use console::{Console, FileHistory, Outcome};

fn history_path() -> PathBuf {
    std::env::var("CONSOLE_HISTORY")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".console_history.json"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut console = Console::new(FileHistory::new(history_path()));

    println!("portfolio terminal — type 'help' to get started");

    let stdin = io::stdin();
    loop {
        print!("guest@portfolio:~$ ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match console.submit(line.trim_end()) {
            Outcome::Close => break,
            Outcome::Clear => {
                // ANSI clear screen + cursor home
                print!("\x1b[2J\x1b[H");
                io::stdout().flush()?;
            }
            Outcome::Rendered(entry) => {
                if entry.response.is_empty() {
                    continue;
                }
                if entry.is_error {
                    println!("\x1b[31m{}\x1b[0m", entry.response);
                } else {
                    println!("{}", entry.response);
                }
            }
        }
    }

    Ok(())
}
