//! Parser implementation turning source strings into node chains.
//!
//! This module contains the Parser struct and the parse entry points.
//! The parser tokenizes its input once, then repeatedly asks a visitor for
//! the next node, handing it the node produced by the previous step as
//! parent, until the visitor reports a clean end of input.

use std::iter::FusedIterator;

use log::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::Token},
    slicer::{Direction, Slicer},
    syntax::{
        grammar::{DELIMITER, DIRECTION, GROUP_SIZE},
        nodes::Nodes,
    },
    visitor::visitor::{PaiVisitor, Visitor},
    Position,
};

/// Lazy parse over one token stream.
///
/// Each call to `next` performs exactly one visit step. The parser owns its
/// tokens and can only be walked once: after the input is exhausted or a
/// syntax error has been yielded it keeps returning `None`.
pub struct Parser<V: Visitor> {
    /// The grammar building nodes
    visitor: V,
    /// Cursor over the tokenized source
    tokens: Slicer,
    /// Size of each unit of tokens fed to the visitor
    group_size: usize,
    /// Direction groups are read in
    direction: Direction,
    /// Node produced by the previous step, if any
    parent: Option<V::Node>,
    /// Set once the input is exhausted or an error was yielded
    finished: bool,
}

impl<V: Visitor> Parser<V> {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Tokens to parse, in source order
    /// * `visitor` - The grammar to build nodes with
    /// * `group_size` - Size of each unit of tokens fed to the visitor
    /// * `direction` - Direction groups are read in
    pub fn new(tokens: Vec<Token>, visitor: V, group_size: usize, direction: Direction) -> Self {
        Parser {
            visitor,
            tokens: Slicer::new(tokens, direction),
            group_size,
            direction,
            parent: None,
            finished: false,
        }
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.remaining()
    }

    /// Returns true once the parser will not yield anything else.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<V: Visitor> Iterator for Parser<V> {
    type Item = Result<V::Node, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let step = self.visitor.visit(
            &mut self.tokens,
            self.group_size,
            self.direction,
            self.parent.as_ref(),
        );

        match step {
            Ok(Some(node)) => {
                self.parent = Some(node.clone());
                Some(Ok(node))
            }
            Ok(None) => {
                debug!("Reached end of input");
                self.finished = true;
                None
            }
            Err(error) => {
                debug!("Parse failed: {}", error);
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<V: Visitor> FusedIterator for Parser<V> {}

/// Lazily parses `source` with any visitor.
///
/// # Arguments
///
/// * `source` - String to parse
/// * `visitor` - The grammar to build nodes with
/// * `delimiter` - Character separating tokens
/// * `group_size` - Size of each unit of tokens fed to the visitor
/// * `direction` - Direction groups are read in
///
/// # Returns
///
/// The parser, or an error if the visitor does not support the requested
/// group size and direction.
pub fn parse_gen<V: Visitor>(
    source: &str,
    visitor: V,
    delimiter: char,
    group_size: usize,
    direction: Direction,
) -> Result<Parser<V>, Error> {
    if !visitor.supports(group_size, direction) {
        warn!(
            "Visitor rejected group size {} read {}",
            group_size, direction
        );
        return Err(Error::new(
            ErrorImpl::UnsupportedVisitor {
                group_size,
                direction,
            },
            Position::null(),
        ));
    }

    Ok(Parser::new(
        tokenize(source, delimiter),
        visitor,
        group_size,
        direction,
    ))
}

/// Eagerly parses `source` with any visitor, see [`parse_gen`].
pub fn parse_with<V: Visitor>(
    source: &str,
    visitor: V,
    delimiter: char,
    group_size: usize,
    direction: Direction,
) -> Result<Vec<V::Node>, Error> {
    parse_gen(source, visitor, delimiter, group_size, direction)?.collect()
}

/// Lazily parses `source`, yielding the root node first and then every
/// child node as soon as it is built.
pub fn parse_lazy(source: &str) -> Parser<PaiVisitor> {
    Parser::new(
        tokenize(source, DELIMITER),
        PaiVisitor::new(),
        GROUP_SIZE,
        DIRECTION,
    )
}

/// Parses `source` into its full chain of nodes.
///
/// # Example
///
/// ```ignore
/// let nodes = parse("edge1:node1:property:relation:node")?;
/// assert!(nodes[0].is_root());
/// assert_eq!(nodes.child(0), Some(&Node::child("node1", "edge1")));
/// ```
pub fn parse(source: &str) -> Result<Nodes, Error> {
    let nodes = parse_lazy(source).collect::<Result<Nodes, Error>>()?;

    debug!("Parsed {} node(s) from {:?}", nodes.len(), source);
    Ok(nodes)
}
