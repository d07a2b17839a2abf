//! rand-cli specific errors
//!
//! There are only two failure families: bad flag combinations and
//! exhausted byte sources. Everything else (malformed length, malformed
//! seed) is rejected by the argument parser before the library runs.
use thiserror::Error;

/// An error the emitter could end up producing.
#[derive(Debug, Error)]
pub enum RandError {
    /// `{0}` holds the long name of every format flag that was set.
    #[error("incompatible flags: {}", .0.join(", "))]
    IncompatibleFlags(Vec<String>),
    #[error("failed to read random bytes from {label} source: {source}")]
    SourceRead {
        label: &'static str,
        source: rand::Error,
    },
}
