use crate::error::{Error, Result};
use crate::number::{format_finite_f64, nonfinite_token};

/// Identity of a node inside a [`Doc`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Single place where non-finiteness is decided; integers are always finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::I64(_) | Number::U64(_) => true,
            Number::F64(f) => f.is_finite(),
        }
    }
}

impl core::fmt::Display for Number {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Number::I64(i) => write!(f, "{}", i),
            Number::U64(u) => write!(f, "{}", u),
            Number::F64(num) if num.is_finite() => f.write_str(&format_finite_f64(*num)),
            Number::F64(num) => f.write_str(nonfinite_token(*num)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<NodeId>),
    /// Entries keep insertion order; sorted output is an encoder mode.
    Object(Vec<(String, NodeId)>),
}

impl Node {
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_)
        )
    }
}

/// Arena of value nodes. Node identity is the arena index, which makes
/// shared substructure and cycles representable: two parents may hold the
/// same child id, and a container may (transitively) hold its own id.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Doc {
    nodes: Vec<Node>,
}

impl Doc {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node, returning its identity.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Look up a node. A dangling id is a fatal error, never coerced.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or(Error::UnknownNode(id))
    }

    /// Overwrite a node in place. The sanitizer uses this to fill a
    /// container registered before its children were built; callers can use
    /// it to tie a self-referential container.
    pub fn set(&mut self, id: NodeId, node: Node) {
        self.nodes[id] = node;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
