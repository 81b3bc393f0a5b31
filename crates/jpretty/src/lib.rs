#![doc = include_str!("../README.md")]

pub mod encode;
pub mod error;
pub mod options;
pub mod sanitize;
pub mod unsplit;
pub mod value;

mod number;

#[cfg(feature = "json")]
pub mod json;

pub use crate::error::{Error, Result};
pub use crate::options::Options;
pub use crate::sanitize::sanitize;
pub use crate::unsplit::unsplit_int_lists;
pub use crate::value::{Doc, Node, NodeId, Number};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Where rendered text goes. The three modes are mutually exclusive and
/// produce identical bytes for the same input and options.
pub enum Destination<'a> {
    /// Return the rendered text to the caller.
    Text,
    /// Write to an already-open sink; the caller keeps ownership of it.
    Sink(&'a mut dyn Write),
    /// Create a file at this path, write, and close it on every exit path.
    Path(&'a Path),
}

/// Render `root` as JSON text: sanitize (when `convert_nans` is set), encode,
/// unsplit (when `unsplit_int_lists` is set), then deliver per `dest`.
/// Returns `Some(text)` only for [`Destination::Text`].
pub fn render(
    doc: &Doc,
    root: NodeId,
    options: &Options,
    dest: Destination<'_>,
) -> Result<Option<String>> {
    let text = render_text(doc, root, options)?;
    match dest {
        Destination::Text => Ok(Some(text)),
        Destination::Sink(w) => {
            w.write_all(text.as_bytes())?;
            Ok(None)
        }
        Destination::Path(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
            Ok(None)
        }
    }
}

pub fn render_to_string(doc: &Doc, root: NodeId, options: &Options) -> Result<String> {
    render_text(doc, root, options)
}

pub fn render_to_writer<W: Write>(
    mut writer: W,
    doc: &Doc,
    root: NodeId,
    options: &Options,
) -> Result<()> {
    let text = render_text(doc, root, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

pub fn render_to_path<P: AsRef<Path>>(
    path: P,
    doc: &Doc,
    root: NodeId,
    options: &Options,
) -> Result<()> {
    let text = render_text(doc, root, options)?;
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

fn render_text(doc: &Doc, root: NodeId, options: &Options) -> Result<String> {
    let sanitized;
    let (doc, root) = if options.convert_nans {
        sanitized = sanitize(doc, root, &options.nullval)?;
        (&sanitized.0, sanitized.1)
    } else {
        (doc, root)
    };
    // Active sanitization implies strict encoding; inactive is the
    // permissive opt-out.
    let allow_nan = !options.convert_nans;
    let mut text = encode::encode_to_string(doc, root, options, allow_nan)?;
    if options.unsplit_int_lists {
        text = unsplit_int_lists(&text);
    }
    Ok(text)
}
