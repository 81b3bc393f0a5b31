use thiserror::Error;

use std::io;

use crate::value::NodeId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A node id that does not name a recognized value in its arena.
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),

    /// Strict encoding met NaN or an infinity.
    #[error("non-finite number is not valid JSON")]
    NonFinite,

    /// The encoder met a container that contains itself. The sanitizer
    /// tolerates cycles; JSON text cannot represent them.
    #[error("circular reference detected")]
    Cycle,
}

pub type Result<T> = core::result::Result<T, Error>;
