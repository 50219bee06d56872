pub mod initialize;
pub mod log;
pub mod migrate;
pub mod notes;
pub mod pool;

pub use notes::SqliteBackend;
