//! Persisted command history: the last [`HISTORY_LIMIT`] typed commands,
//! stored as a JSON array of strings.
//!
//! The store is an injected capability so the console logic never touches a
//! concrete backend. Absent or corrupt data is "no history", never an error,
//! and write failures are swallowed — losing recall is acceptable, breaking
//! the console is not.

use std::fs;
use std::path::PathBuf;

/// Most recent commands kept across sessions.
pub const HISTORY_LIMIT: usize = 20;

pub trait HistoryStore {
    fn load(&self) -> Vec<String>;
    fn save(&mut self, entries: &[String]);
}

/// File-backed store for the interactive binary.
pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl HistoryStore for FileHistory {
    fn load(&self) -> Vec<String> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_else(|| {
                tracing::debug!("no usable history at {:?}, starting empty", self.path);
                Vec::new()
            })
    }

    fn save(&mut self, entries: &[String]) {
        if let Ok(text) = serde_json::to_string(entries) {
            let _ = fs::write(&self.path, text);
        }
    }
}

/// In-memory store for tests and embedders that bring their own persistence.
#[derive(Default)]
pub struct MemoryHistory(pub Vec<String>);

impl HistoryStore for MemoryHistory {
    fn load(&self) -> Vec<String> {
        self.0.clone()
    }

    fn save(&mut self, entries: &[String]) {
        self.0 = entries.to_vec();
    }
}
