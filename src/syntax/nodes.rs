use std::{fmt::Display, ops::Deref};

/// A single entity parsed from source.
///
/// There are two kinds of nodes:
/// - `Root`: the first node of a parse, made of an entity, a relation and a property.
/// - `Child`: every node after the root, made of an entity and a relation.
///
/// The entity is the resource being described. The relation is the edge
/// between the entity and its property (for the root) or between the entity
/// and its parent (for a child). The property identifies the root entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Root {
        entity: String,
        relation: String,
        property: String,
    },
    Child {
        entity: String,
        relation: String,
    },
}

impl Node {
    pub fn root(
        entity: impl Into<String>,
        relation: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Node::Root {
            entity: entity.into(),
            relation: relation.into(),
            property: property.into(),
        }
    }

    /// Creates a child node. It is linked to its parent by being pushed onto
    /// a [`Nodes`] chain right after it.
    pub fn child(entity: impl Into<String>, relation: impl Into<String>) -> Self {
        Node::Child {
            entity: entity.into(),
            relation: relation.into(),
        }
    }

    pub fn entity(&self) -> &str {
        match self {
            Node::Root { entity, .. } | Node::Child { entity, .. } => entity,
        }
    }

    pub fn relation(&self) -> &str {
        match self {
            Node::Root { relation, .. } | Node::Child { relation, .. } => relation,
        }
    }

    /// Only roots carry a property.
    pub fn property(&self) -> Option<&str> {
        match self {
            Node::Root { property, .. } => Some(property),
            Node::Child { .. } => None,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Node::Root { .. })
    }

    pub fn is_child(&self) -> bool {
        !self.is_root()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Root {
                entity,
                relation,
                property,
            } => write!(
                f,
                "Root(entity={}, relation={}, property={})",
                entity, relation, property
            ),
            Node::Child { entity, relation } => {
                write!(f, "Child(entity={}, relation={})", entity, relation)
            }
        }
    }
}

/// Ordered chain of nodes produced by one parse.
///
/// Links are positional: the node at `i + 1` is the child of the node at `i`.
/// Nodes are only ever appended, so a link never changes once both ends exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nodes(Vec<Node>);

impl Nodes {
    pub fn new() -> Self {
        Nodes(vec![])
    }

    /// Appends `node`, making it the child of the current last node.
    ///
    /// On an empty chain there is nothing to link to and the node simply
    /// becomes the first entry.
    pub fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    pub fn root(&self) -> Option<&Node> {
        self.0.first().filter(|node| node.is_root())
    }

    pub fn parent(&self, index: usize) -> Option<&Node> {
        if index == 0 || index >= self.0.len() {
            return None;
        }

        self.0.get(index - 1)
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.0.get(index.checked_add(1)?)
    }

    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl Deref for Nodes {
    type Target = [Node];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Node> for Nodes {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Nodes(iter.into_iter().collect())
    }
}

impl IntoIterator for Nodes {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nodes {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
