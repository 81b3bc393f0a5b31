//! Bottom-up sanitization pass run before strict encoding.
//!
//! Produces a structurally equivalent tree in a fresh arena in which every
//! non-finite number has been replaced by a caller-supplied placeholder
//! string, so the result is representable as standards-compliant JSON.

use std::collections::HashMap;

use crate::error::Result;
use crate::value::{Doc, Node, NodeId};

/// Sanitize the graph reachable from `root`, returning a new arena and the
/// id of the sanitized root.
///
/// Shared substructure is preserved: a child referenced from two places in
/// the source maps to a single replacement, and a container that contains
/// itself maps to a replacement that contains itself. The visited map lives
/// only for this one call; reusing it across unrelated graphs would suppress
/// re-sanitization of ids that merely coincide.
pub fn sanitize(src: &Doc, root: NodeId, placeholder: &str) -> Result<(Doc, NodeId)> {
    let mut out = Doc::new();
    let mut visited: HashMap<NodeId, NodeId> = HashMap::new();
    let new_root = sanitize_node(src, root, placeholder, &mut out, &mut visited)?;
    Ok((out, new_root))
}

fn sanitize_node(
    src: &Doc,
    id: NodeId,
    placeholder: &str,
    out: &mut Doc,
    visited: &mut HashMap<NodeId, NodeId>,
) -> Result<NodeId> {
    match src.get(id)? {
        Node::Number(n) if !n.is_finite() => {
            Ok(out.push(Node::String(placeholder.to_string())))
        }
        node @ (Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_)) => {
            Ok(out.push(node.clone()))
        }
        Node::Array(items) => {
            if let Some(&replacement) = visited.get(&id) {
                return Ok(replacement);
            }
            // Register the replacement before recursing so a
            // self-referential child resolves to it instead of looping.
            let replacement = out.push(Node::Array(Vec::new()));
            visited.insert(id, replacement);
            let mut children = Vec::with_capacity(items.len());
            for &child in items {
                children.push(sanitize_node(src, child, placeholder, out, visited)?);
            }
            out.set(replacement, Node::Array(children));
            Ok(replacement)
        }
        Node::Object(entries) => {
            if let Some(&replacement) = visited.get(&id) {
                return Ok(replacement);
            }
            let replacement = out.push(Node::Object(Vec::new()));
            visited.insert(id, replacement);
            let mut children = Vec::with_capacity(entries.len());
            for (key, child) in entries {
                let v = sanitize_node(src, *child, placeholder, out, visited)?;
                children.push((key.clone(), v));
            }
            out.set(replacement, Node::Object(children));
            Ok(replacement)
        }
    }
}
