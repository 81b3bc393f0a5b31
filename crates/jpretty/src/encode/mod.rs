//! JSON encoding: indented or compact text from a `Doc` arena.

pub mod encoders;
pub mod primitives;
pub mod writer;

use crate::error::Result;
use crate::options::Options;
use crate::value::{Doc, NodeId};

/// Encode to a string. `allow_nan = true` reproduces the permissive
/// non-standard behavior of writing bare `NaN` / `Infinity` tokens;
/// `allow_nan = false` rejects non-finite numbers with an error, which is
/// how sanitized output is guaranteed to be standards-compliant.
pub fn encode_to_string(
    doc: &Doc,
    root: NodeId,
    options: &Options,
    allow_nan: bool,
) -> Result<String> {
    let mut w = writer::JsonWriter::new();
    let mut active = Vec::new();
    encoders::encode_node(doc, root, &mut w, options, allow_nan, 0, &mut active)?;
    Ok(w.into_string())
}
