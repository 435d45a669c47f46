//! Error types for cssgo rendering.

use thiserror::Error;

/// Errors that can occur while writing CSS to a sink.
///
/// Construction never fails. The crate's own nodes only fail when the
/// destination refuses a write, which surfaces as [`Error::Io`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller-implemented `ToCss` returned an error while the sink itself
    /// accepted every write.
    #[error("formatter error")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
