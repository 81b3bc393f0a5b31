use crate::{
    encode::{primitives, writer::JsonWriter},
    error::{Error, Result},
    options::Options,
    value::{Doc, Node, NodeId},
};

/// Recursive encoder. `depth` is the current nesting level, `active` the ids
/// of containers on the path from the root; meeting one of them again means
/// the graph is cyclic and cannot be written out as JSON text.
pub fn encode_node(
    doc: &Doc,
    id: NodeId,
    w: &mut JsonWriter,
    opts: &Options,
    allow_nan: bool,
    depth: usize,
    active: &mut Vec<NodeId>,
) -> Result<()> {
    match doc.get(id)? {
        Node::Null => w.raw(primitives::format_null()),
        Node::Bool(b) => w.raw(primitives::format_bool(*b)),
        Node::Number(n) => w.raw(&primitives::format_number(n, allow_nan)?),
        Node::String(s) => w.string(s),
        Node::Array(items) => {
            if active.contains(&id) {
                return Err(Error::Cycle);
            }
            active.push(id);
            w.punct('[');
            for (i, &child) in items.iter().enumerate() {
                if i > 0 {
                    w.punct(',');
                }
                if opts.indent > 0 {
                    w.break_line((depth + 1) * opts.indent);
                }
                encode_node(doc, child, w, opts, allow_nan, depth + 1, active)?;
            }
            if opts.indent > 0 && !items.is_empty() {
                w.break_line(depth * opts.indent);
            }
            w.punct(']');
            active.pop();
        }
        Node::Object(entries) => {
            if active.contains(&id) {
                return Err(Error::Cycle);
            }
            active.push(id);
            w.punct('{');
            let mut order: Vec<usize> = (0..entries.len()).collect();
            if opts.sort_keys {
                order.sort_by(|&a, &b| entries[a].0.cmp(&entries[b].0));
            }
            for (i, &slot) in order.iter().enumerate() {
                let (key, child) = &entries[slot];
                if i > 0 {
                    w.punct(',');
                }
                if opts.indent > 0 {
                    w.break_line((depth + 1) * opts.indent);
                }
                w.string(key);
                w.punct(':');
                if opts.indent > 0 {
                    w.punct(' ');
                }
                encode_node(doc, *child, w, opts, allow_nan, depth + 1, active)?;
            }
            if opts.indent > 0 && !entries.is_empty() {
                w.break_line(depth * opts.indent);
            }
            w.punct('}');
            active.pop();
        }
    }
    Ok(())
}
