//! The portfolio site's easter-egg terminal, reimplemented as a plain library:
//! a fixed command table, input sanitization, a hard-reset rate limiter,
//! persisted command history, and tab-completion.
//!
//! Nothing in here returns an error to the caller — every failure becomes a
//! rendered entry flagged as an error, and storage problems degrade silently
//! to an empty history.

pub mod console;
pub mod history;
pub mod limiter;
pub mod table;

pub use console::{Completion, Console, Entry, Outcome};
pub use history::{FileHistory, HistoryStore, MemoryHistory, HISTORY_LIMIT};
pub use limiter::RateLimiter;
