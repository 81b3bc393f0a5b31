//! serde_json interop: the construction-time adapter between parsed JSON
//! and the `Doc` arena. Any exotic numeric container an upstream producer
//! uses must be flattened into plain arrays here (or by an equivalent
//! caller-side adapter) before the tree reaches the core.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::value::{Doc, Node, NodeId, Number};

/// Build an arena tree from a parsed JSON value. Children are allocated
/// before their parents, so the returned id is always the highest one.
pub fn from_json(value: &Value) -> (Doc, NodeId) {
    let mut doc = Doc::new();
    let root = build(&mut doc, value);
    (doc, root)
}

fn build(doc: &mut Doc, value: &Value) -> NodeId {
    match value {
        Value::Null => doc.push(Node::Null),
        Value::Bool(b) => doc.push(Node::Bool(*b)),
        Value::Number(n) => {
            let num = if let Some(i) = n.as_i64() {
                Number::I64(i)
            } else if let Some(u) = n.as_u64() {
                Number::U64(u)
            } else {
                Number::F64(n.as_f64().unwrap_or(f64::NAN))
            };
            doc.push(Node::Number(num))
        }
        Value::String(s) => doc.push(Node::String(s.clone())),
        Value::Array(items) => {
            let children: Vec<NodeId> = items.iter().map(|item| build(doc, item)).collect();
            doc.push(Node::Array(children))
        }
        Value::Object(map) => {
            let entries: Vec<(String, NodeId)> = map
                .iter()
                .map(|(k, v)| (k.clone(), build(doc, v)))
                .collect();
            doc.push(Node::Object(entries))
        }
    }
}

/// Convert back to a serde_json value. Fails on dangling ids, cyclic
/// graphs, and non-finite numbers, none of which serde_json can hold.
pub fn to_json(doc: &Doc, root: NodeId) -> Result<Value> {
    let mut active = Vec::new();
    convert(doc, root, &mut active)
}

fn convert(doc: &Doc, id: NodeId, active: &mut Vec<NodeId>) -> Result<Value> {
    match doc.get(id)? {
        Node::Null => Ok(Value::Null),
        Node::Bool(b) => Ok(Value::Bool(*b)),
        Node::Number(Number::I64(i)) => Ok(Value::from(*i)),
        Node::Number(Number::U64(u)) => Ok(Value::from(*u)),
        Node::Number(Number::F64(f)) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or(Error::NonFinite),
        Node::String(s) => Ok(Value::String(s.clone())),
        Node::Array(items) => {
            if active.contains(&id) {
                return Err(Error::Cycle);
            }
            active.push(id);
            let mut out = Vec::with_capacity(items.len());
            for &child in items {
                out.push(convert(doc, child, active)?);
            }
            active.pop();
            Ok(Value::Array(out))
        }
        Node::Object(entries) => {
            if active.contains(&id) {
                return Err(Error::Cycle);
            }
            active.push(id);
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (key, child) in entries {
                out.insert(key.clone(), convert(doc, *child, active)?);
            }
            active.pop();
            Ok(Value::Object(out))
        }
    }
}
