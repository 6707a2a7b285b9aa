//! Foreign-stream adapter
//!
//! Absorbs lines produced by other loggers and re-levels them:
//! - `classifier` - pluggable severity inference from a leading level token
//! - `adapter` - `io::Write` front end feeding a `Logger`
//! - `tracing_bridge` - redirects the process's `tracing` output

mod adapter;
mod classifier;
mod tracing_bridge;

pub use adapter::StreamAdapter;
pub use classifier::{level_for_word, Classified, LevelClassifier, PrefixClassifier};
pub use tracing_bridge::{capture_into, restore};
