//! SQLite storage for chat histories.

pub mod history;
pub mod pool;
