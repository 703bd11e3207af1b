//! Visitor implementation enforcing the language syntax.
//!
//! The parser drives a [`Visitor`] once per step: every call consumes one
//! group of tokens from the slicer and turns it into a node. The built-in
//! [`PaiVisitor`] produces a root from the first group of three tokens and
//! children from every following group of two.

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::Token,
    slicer::{Direction, Slice, Slicer},
    syntax::{
        grammar::{CHILD_NODE_SIZE, DIRECTION, GROUP_SIZE, ROOT_NODE_SIZE},
        nodes::Node,
    },
};

/// A grammar that builds nodes out of token groups.
pub trait Visitor {
    /// What one visit step produces.
    type Node: Clone;

    /// Whether this visitor can consume tokens fed in units of `group_size`
    /// read in `direction`.
    fn supports(&self, group_size: usize, direction: Direction) -> bool;

    /// Consumes tokens to build one node.
    ///
    /// `parent` is the node produced by the previous step of the same parse,
    /// or `None` on the first step. Returns `Ok(None)` once the tokens are
    /// cleanly exhausted.
    fn visit(
        &self,
        tokens: &mut Slicer,
        group_size: usize,
        direction: Direction,
        parent: Option<&Self::Node>,
    ) -> Result<Option<Self::Node>, Error>;
}

/// Checks a requested group size and direction against the expected ones.
pub fn supports(
    group_size: usize,
    direction: Direction,
    expected_group_size: usize,
    expected_direction: Direction,
) -> bool {
    if group_size != expected_group_size {
        return false;
    }

    if direction != expected_direction {
        return false;
    }

    true
}

/// Visitor for `relation:entity:...:property:relation:entity` strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaiVisitor;

impl PaiVisitor {
    pub fn new() -> Self {
        PaiVisitor
    }

    /// Consumes the root group and builds a root node from it.
    pub fn visit_root(&self, tokens: &mut Slicer) -> Result<Option<Node>, Error> {
        let Some([entity, relation, property]) = visit_node::<ROOT_NODE_SIZE>(tokens)? else {
            return Ok(None);
        };

        Ok(Some(Node::root(entity, relation, property)))
    }

    /// Consumes a child group and builds a child node from it.
    ///
    /// The child is linked to `parent` by the caller appending it to the chain
    /// right after the parent.
    pub fn visit_child(&self, tokens: &mut Slicer, _parent: &Node) -> Result<Option<Node>, Error> {
        let Some([entity, relation]) = visit_node::<CHILD_NODE_SIZE>(tokens)? else {
            return Ok(None);
        };

        Ok(Some(Node::child(entity, relation)))
    }
}

impl Visitor for PaiVisitor {
    type Node = Node;

    fn supports(&self, group_size: usize, direction: Direction) -> bool {
        supports(group_size, direction, GROUP_SIZE, DIRECTION)
    }

    fn visit(
        &self,
        tokens: &mut Slicer,
        _group_size: usize,
        _direction: Direction,
        parent: Option<&Node>,
    ) -> Result<Option<Node>, Error> {
        let node = match parent {
            None => self.visit_root(tokens)?,
            Some(parent) => self.visit_child(tokens, parent)?,
        };

        match &node {
            Some(node) => debug!("Visited {}", node),
            None => trace!("No tokens left to visit"),
        }

        Ok(node)
    }
}

/// Pulls `N` tokens and returns their values reversed.
///
/// Groups arrive in source order, e.g. `property:relation:entity`, while
/// nodes take their fields entity first, so the values are flipped before
/// they are assigned.
fn visit_node<const N: usize>(tokens: &mut Slicer) -> Result<Option<[String; N]>, Error> {
    let position = tokens.position();

    match tokens.slice(N) {
        Slice::EndOfInput => Ok(None),
        Slice::Incomplete { found, expected } => Err(Error::new(
            ErrorImpl::InsufficientTokens { expected, found },
            position,
        )),
        Slice::Group(group) => {
            let values = group
                .into_iter()
                .rev()
                .map(Token::into_value)
                .collect::<Vec<_>>();

            let fields = <[String; N]>::try_from(values).map_err(|values| {
                Error::new(
                    ErrorImpl::InsufficientTokens {
                        expected: N,
                        found: values.len(),
                    },
                    position,
                )
            })?;

            Ok(Some(fields))
        }
    }
}
